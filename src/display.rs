//! Pure decision logic: what the toggle control shows and where a click leads.
//!
//! Nothing here touches the page, so the whole click path can be checked
//! without a browser.

use serde::Serialize;

use crate::consts::{DARK_ICON, DARK_LABEL, LIGHT_ICON, LIGHT_LABEL};
use crate::preference::ThemePreference;

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

/// Icon and label rendered inside the toggle control.
///
/// The control always describes the action, so while dark is applied it
/// offers light and vice versa.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ToggleDisplay {
    /// The preference a click would switch to.
    pub target: ThemePreference,
    pub icon: &'static str,
    pub label: &'static str,
}

impl ToggleDisplay {
    /// Content for the control while `applied` is the rendered theme.
    #[must_use]
    pub fn for_applied(applied: ThemePreference) -> Self {
        match applied.inverse() {
            ThemePreference::Light => Self {
                target: ThemePreference::Light,
                icon: LIGHT_ICON,
                label: LIGHT_LABEL,
            },
            ThemePreference::Dark => Self {
                target: ThemePreference::Dark,
                icon: DARK_ICON,
                label: DARK_LABEL,
            },
        }
    }

    /// Inner markup for the control. Icon and label are fixed text, no
    /// escaping needed.
    #[must_use]
    pub fn to_html(&self) -> String {
        format!(
            r#"<span class="theme-toggle__icon" aria-hidden="true">{}</span> <span class="theme-toggle__label">{}</span>"#,
            self.icon, self.label
        )
    }
}

/// Result of one click: the preference to apply and the control content
/// that goes with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub next: ThemePreference,
    pub display: ToggleDisplay,
}

impl Transition {
    /// Compute the click outcome from the currently applied preference.
    #[must_use]
    pub fn from_current(current: ThemePreference) -> Self {
        let next = current.inverse();
        Self { next, display: ToggleDisplay::for_applied(next) }
    }
}
