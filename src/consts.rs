//! Fixed names and resources shared by the controller and the browser binding.

// ── Persistence ─────────────────────────────────────────────────

/// `localStorage` key holding the persisted preference.
pub const STORAGE_KEY: &str = "admin-theme";

// ── DOM contract ────────────────────────────────────────────────

/// Attribute written on the document root element with the applied theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Id of the `<link rel="stylesheet">` whose `href` follows the theme.
pub const STYLESHEET_LINK_ID: &str = "theme-css";

/// Id of the clickable toggle control.
pub const TOGGLE_ID: &str = "theme-toggle";

// ── Stylesheets ─────────────────────────────────────────────────

pub const DARK_STYLESHEET_URL: &str =
    "https://cdn.jsdelivr.net/npm/bootswatch@5.3.3/dist/darkly/bootstrap.min.css";

pub const LIGHT_STYLESHEET_URL: &str =
    "https://cdn.jsdelivr.net/npm/bootswatch@5.3.3/dist/flatly/bootstrap.min.css";

// ── Toggle control ──────────────────────────────────────────────

/// Shown while light is active: the action offered is "go dark".
pub const DARK_ICON: &str = "\u{263E}";
pub const DARK_LABEL: &str = "Switch to dark";

/// Shown while dark is active.
pub const LIGHT_ICON: &str = "\u{2600}";
pub const LIGHT_LABEL: &str = "Switch to light";
