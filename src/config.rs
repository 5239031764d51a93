//! Names the browser binding looks up on the host page.

use crate::consts::{STORAGE_KEY, STYLESHEET_LINK_ID, THEME_ATTRIBUTE, TOGGLE_ID};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// DOM contract and storage key for one page.
///
/// Only built through [`Default`]. The stylesheet URLs are not part of
/// this struct; they are fixed per [`crate::preference::ThemePreference`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    pub storage_key: &'static str,
    pub theme_attribute: &'static str,
    pub stylesheet_link_id: &'static str,
    pub toggle_id: &'static str,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY,
            theme_attribute: THEME_ATTRIBUTE,
            stylesheet_link_id: STYLESHEET_LINK_ID,
            toggle_id: TOGGLE_ID,
        }
    }
}
