mod browser;
mod common;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use browser::{BrowserConfig, BrowserKind, SitePage, new_session};
use common::reports::{generate_console_report, generate_json_report, generate_markdown_report};
use common::scenario::{ScenarioCtx, expand_scenarios, get_scenario, list_scenarios};
use common::{ScenarioResult, artifacts_dir, capture_artifacts, split_csv};
use render::RenderedSite;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TestMode {
    /// Check server-rendered markup (fast, no browser)
    Static,
    /// Drive a deployed build through WebDriver
    Browser,
    /// Run both static and browser checks
    Both,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeadlessMode {
    /// Run browsers in headless mode
    Headless,
    /// Run browsers with visible windows
    Windowed,
}

impl HeadlessMode {
    const fn is_headless(self) -> bool {
        matches!(self, Self::Headless)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "hvz-tester", version)]
#[command(about = "Automated checks for the HvZ site - rendered markup and live browser runs")]
struct Args {
    /// Test mode: static (fast), browser (live site), or both
    #[arg(long, value_enum, default_value_t = TestMode::Static)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, `all` for every scenario)
    #[arg(long, default_value = "all")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    // Browser-specific options
    /// Browsers to run (chrome,edge,firefox,safari) - browser mode only
    #[arg(long, default_value = "chrome")]
    browsers: String,

    /// Base URL of the deployed site
    #[arg(long, default_value = "http://localhost:8080")]
    base_url: String,

    /// Artifacts directory for screenshots and DOM dumps
    #[arg(long, default_value = "target/test-artifacts")]
    artifacts_dir: String,

    /// Connect to a Selenium Grid hub instead of local drivers
    #[arg(long)]
    hub: Option<String>,

    /// Run headless where supported
    #[arg(long, value_enum, default_value_t = HeadlessMode::Headless)]
    headless: HeadlessMode,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&split_csv(&args.scenarios));
    log::debug!("scenarios: {scenarios:?}");

    let mut results = run_static_scenarios(&args, &scenarios);
    results.extend(run_browser_scenarios(&args, &scenarios).await);

    write_reports(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:12} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🧟 HvZ Site Tester".bright_cyan().bold());
    println!("{}", "==================".cyan());
}

fn run_static_scenarios(args: &Args, scenarios: &[String]) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Static | TestMode::Both) {
        return results;
    }

    println!("{}", "📄 Running Static Checks".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let site = RenderedSite::render_embedded();

    for scenario_name in scenarios {
        let Some(scenario) = get_scenario(scenario_name) else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
            continue;
        };
        let started = Instant::now();
        let outcome = scenario.run_static(&site);
        let result =
            ScenarioResult::from_outcome(scenario.name(), "static", &outcome, started.elapsed());
        print_outcome("static", &result);
        results.push(result);
    }

    results
}

fn build_browser_config(args: &Args) -> BrowserConfig {
    BrowserConfig {
        headless: args.headless.is_headless(),
        implicit_wait_secs: 3,
        remote_hub: args.hub.clone(),
    }
}

async fn run_browser_scenarios(args: &Args, scenarios: &[String]) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Browser | TestMode::Both) {
        return results;
    }

    println!("{}", "🌐 Running Browser Tests".bright_blue().bold());
    println!("{}", "-".repeat(30).blue());

    for browser_name in split_csv(&args.browsers) {
        let Some(kind) = BrowserKind::parse(&browser_name) else {
            eprintln!("⚠️  Unknown browser: {}", browser_name.yellow());
            continue;
        };

        let driver = match new_session(kind, &build_browser_config(args)).await {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ Could not start {kind:?}: {e}");
                continue;
            }
        };

        results.extend(run_browser_scenarios_for_driver(args, scenarios, kind, &driver).await);
        let _ = driver.quit().await;
    }

    results
}

async fn run_browser_scenarios_for_driver(
    args: &Args,
    scenarios: &[String],
    kind: BrowserKind,
    driver: &thirtyfour::WebDriver,
) -> Vec<ScenarioResult> {
    let mode = format!("browser/{}", kind.label());
    let mut results = Vec::new();

    for scenario_name in scenarios {
        let Some(scenario) = get_scenario(scenario_name) else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
            continue;
        };
        let ctx = ScenarioCtx {
            page: SitePage::new(driver, args.base_url.clone()),
            verbose: args.verbose,
        };

        let started = Instant::now();
        let outcome = scenario.run_browser(&ctx).await;
        if let Err(e) = &outcome {
            let dir = artifacts_dir(&args.artifacts_dir, kind.label(), scenario.name());
            match capture_artifacts(driver, &dir, e).await {
                Ok(()) => eprintln!("   📸 Artifacts written to {dir}"),
                Err(capture) => log::warn!("could not capture artifacts: {capture:#}"),
            }
        }
        let result =
            ScenarioResult::from_outcome(scenario.name(), &mode, &outcome, started.elapsed());
        print_outcome(&mode, &result);
        results.push(result);
    }

    results
}

fn print_outcome(label: &str, result: &ScenarioResult) {
    if result.passed {
        println!(
            "✅ [{}] {} - {:?}",
            label.green(),
            result.scenario_name,
            result.duration
        );
    } else {
        eprintln!(
            "❌ [{}] {} - {:?}: {}",
            label.red(),
            result.scenario_name,
            result.duration,
            result.failures.join("; ")
        );
    }
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report {
        ReportFormat::Json => generate_json_report(&mut output_target, results)?,
        ReportFormat::Markdown => generate_markdown_report(&mut output_target, results)?,
        ReportFormat::Console => {
            generate_console_report(&mut output_target, results, start_time.elapsed())?;
            writeln!(&mut output_target)?;
            writeln!(&mut output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            mode: TestMode::Static,
            scenarios: "all".to_string(),
            list_scenarios: false,
            report: ReportFormat::Json,
            verbose: false,
            output: None,
            browsers: "chrome".to_string(),
            base_url: "http://localhost:8080".to_string(),
            artifacts_dir: "target/test-artifacts".to_string(),
            hub: None,
            headless: HeadlessMode::Headless,
        }
    }

    #[test]
    fn cli_defaults_run_every_scenario_statically() {
        let args = Args::parse_from(["hvz-tester"]);
        assert_eq!(args.mode, TestMode::Static);
        assert_eq!(args.report, ReportFormat::Console);
        assert_eq!(args.scenarios, "all");
        assert!(args.headless.is_headless());
    }

    #[test]
    fn static_run_passes_every_scenario() {
        let args = base_args();
        let scenarios = expand_scenarios(&split_csv(&args.scenarios));
        let results = run_static_scenarios(&args, &scenarios);
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.passed), "{results:?}");
    }

    #[test]
    fn browser_mode_skips_static_checks() {
        let args = Args {
            mode: TestMode::Browser,
            ..base_args()
        };
        assert!(run_static_scenarios(&args, &["smoke".to_string()]).is_empty());
    }

    #[test]
    fn unknown_scenarios_are_skipped() {
        let args = base_args();
        let results = run_static_scenarios(&args, &["nope".to_string(), "content".to_string()]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].scenario_name, "content");
    }

    #[test]
    fn write_reports_to_file() {
        let path = std::env::temp_dir().join(format!(
            "hvz-report-{}.json",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ));
        let args = Args {
            output: Some(path.clone()),
            ..base_args()
        };
        write_reports(&args, &[], Instant::now()).expect("write report");
        let written = std::fs::read_to_string(path).expect("read report");
        assert_eq!(written.trim(), "[]");
    }
}
