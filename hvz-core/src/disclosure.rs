//! Two-state expand/collapse machine backing every collapsible panel.
//!
//! A panel reads all of its view attributes (`aria-expanded`, the body's
//! `hidden` flag, the chevron rotation) from a single [`Disclosure`] value,
//! so the announced state and the visible state cannot drift apart.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disclosure {
    #[default]
    Collapsed,
    Expanded,
}

impl Disclosure {
    /// State a panel starts in, given its configured default.
    #[must_use]
    pub const fn initial(default_open: bool) -> Self {
        if default_open {
            Self::Expanded
        } else {
            Self::Collapsed
        }
    }

    /// Flip the state. There is no intermediate state and no failure mode.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    /// State reached after `toggles` activations from the configured default.
    #[must_use]
    pub const fn after_toggles(default_open: bool, toggles: usize) -> Self {
        Self::initial(default_open ^ (toggles % 2 == 1))
    }

    #[must_use]
    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }

    #[must_use]
    pub const fn aria_expanded(self) -> &'static str {
        if self.is_expanded() { "true" } else { "false" }
    }

    /// Whether the body region carries the `hidden` attribute.
    #[must_use]
    pub const fn body_hidden(self) -> bool {
        !self.is_expanded()
    }

    #[must_use]
    pub const fn data_state(self) -> &'static str {
        match self {
            Self::Collapsed => "collapsed",
            Self::Expanded => "expanded",
        }
    }

    #[must_use]
    pub const fn chevron_class(self) -> &'static str {
        match self {
            Self::Collapsed => "rotate-0",
            Self::Expanded => "rotate-180",
        }
    }
}

/// Accent used to colour panel headers, callouts and list markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Emerald,
    Sky,
    Amber,
    Rose,
}

impl Tone {
    pub const ALL: [Self; 4] = [Self::Emerald, Self::Sky, Self::Amber, Self::Rose];

    #[must_use]
    pub const fn header_class(self) -> &'static str {
        match self {
            Self::Emerald => "bg-emerald-500/20",
            Self::Sky => "bg-sky-500/20",
            Self::Amber => "bg-amber-500/20",
            Self::Rose => "bg-rose-500/20",
        }
    }

    #[must_use]
    pub const fn callout_class(self) -> &'static str {
        match self {
            Self::Emerald => "border-emerald-600 bg-emerald-500/10",
            Self::Sky => "border-sky-700 bg-sky-500/10",
            Self::Amber => "border-amber-700 bg-amber-500/10",
            Self::Rose => "border-rose-600 bg-rose-500/10",
        }
    }

    #[must_use]
    pub const fn text_class(self) -> &'static str {
        match self {
            Self::Emerald => "text-emerald-700",
            Self::Sky => "text-sky-800",
            Self::Amber => "text-amber-800",
            Self::Rose => "text-rose-700",
        }
    }
}
