//! The page elements the controller writes to.
//!
//! Each element is optional. Methods that target an element return `false`
//! when it is missing instead of failing, so every side effect can be
//! skipped on its own.

use crate::display::ToggleDisplay;

/// Host page surface: stylesheet link, root element tag, toggle control.
pub trait PageSurface {
    /// Point the theme stylesheet link at `url`. `false` if there is no link.
    fn set_stylesheet_href(&self, url: &str) -> bool;

    /// Current value of the root element's theme tag, if set.
    fn root_theme(&self) -> Option<String>;

    /// Tag the root element with the applied theme.
    fn set_root_theme(&self, value: &str) -> bool;

    /// Overwrite the toggle control's content. `false` if there is no toggle.
    fn set_toggle_content(&self, display: &ToggleDisplay) -> bool;
}
