//! The two-variant theme preference and its static stylesheet table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DARK_STYLESHEET_URL, LIGHT_STYLESHEET_URL};
use crate::error::UnknownPreference;

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

/// Which visual theme the page renders with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    /// Lenient conversion used for every untrusted value (storage, root tag).
    ///
    /// Only the exact text `light` maps to [`ThemePreference::Light`];
    /// anything else, including `LIGHT` or `" light"`, is dark.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        if raw == "light" { Self::Light } else { Self::Dark }
    }

    /// Plain-text encoding used for the root tag and the storage value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The other variant. Every toggle is total.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Stylesheet URL for this variant.
    #[must_use]
    pub fn stylesheet_url(self) -> &'static str {
        match self {
            Self::Dark => DARK_STYLESHEET_URL,
            Self::Light => LIGHT_STYLESHEET_URL,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse: only `dark` and `light` are accepted.
///
/// Callers that must never fail use [`ThemePreference::normalize`] instead.
impl FromStr for ThemePreference {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(UnknownPreference(other.to_owned())),
        }
    }
}
