//! Light/dark theme toggle for the admin dashboard.
//!
//! This crate is compiled to WebAssembly and loaded by the admin page. It
//! reads the stored theme preference, points the page stylesheet at the
//! matching theme, tags `<html>` with `data-theme`, and keeps the toggle
//! button's icon and label describing the theme a click would switch to.
//! Every click flips the theme and persists it to `localStorage`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | [`controller::ThemeController`]: initialize / apply / toggle |
//! | [`preference`] | The `dark`/`light` preference and its stylesheet table |
//! | [`display`] | Pure toggle label and click transition |
//! | [`storage`] | Storage seam and read/write fallbacks |
//! | [`page`] | Page seam: stylesheet link, root tag, toggle control |
//! | [`dom`] | web-sys implementations and the wasm entry point |
//! | [`config`] | DOM ids and storage key bundled for the browser binding |
//! | [`consts`] | Fixed names, URLs, and labels |
//! | [`error`] | Storage and parse errors |

pub mod config;
pub mod consts;
pub mod controller;
pub mod display;
pub mod dom;
pub mod error;
pub mod page;
pub mod preference;
pub mod storage;

#[cfg(test)]
#[path = "fakes_test.rs"]
pub(crate) mod fakes;

pub use controller::{ApplyReport, ThemeController};
pub use preference::ThemePreference;
