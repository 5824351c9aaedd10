//! Theme model and the single theme-to-style mapping.
//!
//! Every themed class on the page comes from [`Theme::tokens`]. Components
//! never branch on the theme themselves; they read a token and concatenate it
//! with their layout classes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dark/light visual mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Default when nothing usable is persisted.
    #[default]
    Dark,
    /// Light mode.
    Light,
}

impl Theme {
    /// The opposite theme. Applying it twice yields the original value.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Literal persisted for this theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Whether this is the dark variant.
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Class applied to `<html>` so static style rules can select a variant.
    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Dark => ROOT_MARKER_CLASS,
            Theme::Light => "",
        }
    }

    /// Style tokens for this theme.
    pub fn tokens(self) -> &'static ThemeTokens {
        match self {
            Theme::Dark => &DARK_TOKENS,
            Theme::Light => &LIGHT_TOKENS,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a persisted or user-supplied value is not a theme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}' (expected 'dark' or 'light')")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Root-element class used as the global dark marker.
pub const ROOT_MARKER_CLASS: &str = "dark";

/// Class names selected by the current theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    /// Primary text (headings, prices).
    pub text: &'static str,
    /// Page background.
    pub background: &'static str,
    /// Secondary text (descriptions, feature rows).
    pub secondary_text: &'static str,
    /// Neutral card surface with its border.
    pub card: &'static str,
    /// Card surface used inside an accent (lime) border.
    pub accent_card: &'static str,
    /// Inset row inside a card.
    pub inset: &'static str,
    /// Pill container for service highlights.
    pub pill: &'static str,
    /// Theme toggle button surface.
    pub toggle: &'static str,
    /// Icon classes inside the toggle button.
    pub toggle_icon: &'static str,
}

const DARK_TOKENS: ThemeTokens = ThemeTokens {
    text: "text-white",
    background: "bg-gray-900",
    secondary_text: "text-gray-300",
    card: "bg-gray-800 border-gray-700",
    accent_card: "bg-gray-800",
    inset: "bg-gray-700",
    pill: "bg-gray-800-translucent",
    toggle: "bg-gray-800",
    toggle_icon: "icon text-lime-400",
};

const LIGHT_TOKENS: ThemeTokens = ThemeTokens {
    text: "text-gray-900",
    background: "bg-white",
    secondary_text: "text-gray-600",
    card: "bg-white border-gray-200 shadow-lg",
    accent_card: "bg-white shadow-lg",
    inset: "bg-gray-50",
    pill: "bg-gray-100",
    toggle: "bg-white border border-gray-200",
    toggle_icon: "icon text-gray-600",
};
