use crate::display::{ToggleDisplay, Transition};
use crate::page::PageSurface;
use crate::preference::ThemePreference;
use crate::storage::{PreferenceStore, load_preference, persist_preference};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Which side effects of one `apply` actually landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApplyReport {
    pub applied: ThemePreference,
    pub stylesheet: bool,
    pub root_tagged: bool,
    pub persisted: bool,
    pub toggle: bool,
}

/// Owns the theme preference for one page lifetime.
///
/// Separated from the browser binding so it can be tested against fake
/// page and storage implementations. The page root tag and the store are
/// sinks; `current` is what this controller last applied.
pub struct ThemeController<P, S> {
    page: P,
    store: S,
    current: ThemePreference,
}

impl<P: PageSurface, S: PreferenceStore> ThemeController<P, S> {
    #[must_use]
    pub fn new(page: P, store: S) -> Self {
        Self { page, store, current: ThemePreference::default() }
    }

    /// Load the persisted preference (dark if absent or unreadable) and
    /// apply it.
    pub fn initialize(&mut self) -> ApplyReport {
        let pref = load_preference(&self.store);
        self.apply(pref)
    }

    /// Apply a raw, untrusted value. Anything but `light` applies dark.
    pub fn apply_raw(&mut self, raw: &str) -> ApplyReport {
        self.apply(ThemePreference::normalize(raw))
    }

    /// Push `pref` to every sink. Each step is independent; a missing
    /// element or failed write only skips that step.
    pub fn apply(&mut self, pref: ThemePreference) -> ApplyReport {
        self.current = pref;

        let stylesheet = self.page.set_stylesheet_href(pref.stylesheet_url());
        if !stylesheet {
            log::debug!("no theme stylesheet link; skipping href update");
        }

        let root_tagged = self.page.set_root_theme(pref.as_str());
        let persisted = persist_preference(&mut self.store, pref);

        let toggle = self.page.set_toggle_content(&ToggleDisplay::for_applied(pref));
        if !toggle {
            log::debug!("no theme toggle control; skipping label update");
        }

        log::debug!("applied {pref} theme");
        ApplyReport { applied: pref, stylesheet, root_tagged, persisted, toggle }
    }

    /// Click handler body: flip whatever the root tag says is applied
    /// (dark when untagged).
    pub fn toggle(&mut self) -> ApplyReport {
        let current = self
            .page
            .root_theme()
            .map_or(ThemePreference::default(), |raw| ThemePreference::normalize(&raw));
        let transition = Transition::from_current(current);
        self.apply(transition.next)
    }

    /// The preference this controller last applied.
    #[must_use]
    pub fn current(&self) -> ThemePreference {
        self.current
    }

    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
