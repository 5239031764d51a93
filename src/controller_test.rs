use super::*;
use crate::consts::{DARK_LABEL, DARK_STYLESHEET_URL, LIGHT_LABEL, LIGHT_STYLESHEET_URL};
use crate::fakes::{FakePage, FakeStore};

// =============================================================
// Helpers
// =============================================================

fn controller(page: FakePage, store: FakeStore) -> ThemeController<FakePage, FakeStore> {
    ThemeController::new(page, store)
}

fn assert_dark_active(c: &ThemeController<FakePage, FakeStore>) {
    assert_eq!(c.current(), ThemePreference::Dark);
    assert_eq!(c.page().root().as_deref(), Some("dark"));
    assert_eq!(c.page().href().as_deref(), Some(DARK_STYLESHEET_URL));
    assert_eq!(c.page().toggle_label(), Some(LIGHT_LABEL));
}

fn assert_light_active(c: &ThemeController<FakePage, FakeStore>) {
    assert_eq!(c.current(), ThemePreference::Light);
    assert_eq!(c.page().root().as_deref(), Some("light"));
    assert_eq!(c.page().href().as_deref(), Some(LIGHT_STYLESHEET_URL));
    assert_eq!(c.page().toggle_label(), Some(DARK_LABEL));
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_without_stored_value_applies_dark() {
    let mut c = controller(FakePage::full(), FakeStore::empty());
    let report = c.initialize();
    assert_eq!(report.applied, ThemePreference::Dark);
    assert_dark_active(&c);
    assert_eq!(c.store().value.as_deref(), Some("dark"));
}

#[test]
fn initialize_with_invalid_stored_value_applies_dark() {
    let mut c = controller(FakePage::full(), FakeStore::holding("purple"));
    c.initialize();
    assert_dark_active(&c);
    assert_eq!(c.store().value.as_deref(), Some("dark"));
}

#[test]
fn initialize_with_unreadable_storage_applies_dark() {
    let mut c = controller(FakePage::full(), FakeStore::broken());
    let report = c.initialize();
    assert!(!report.persisted);
    assert_dark_active(&c);
}

#[test]
fn persisted_light_survives_fresh_page_load() {
    let mut first = controller(FakePage::full(), FakeStore::empty());
    first.initialize();
    first.toggle();
    let stored = first.store().value.clone().unwrap();

    // New page, same storage contents, no click.
    let mut second = controller(FakePage::full(), FakeStore::holding(&stored));
    second.initialize();
    assert_light_active(&second);
}

// =============================================================
// apply
// =============================================================

#[test]
fn apply_reports_every_sink_on_full_page() {
    let mut c = controller(FakePage::full(), FakeStore::empty());
    let report = c.apply(ThemePreference::Light);
    assert_eq!(
        report,
        ApplyReport {
            applied: ThemePreference::Light,
            stylesheet: true,
            root_tagged: true,
            persisted: true,
            toggle: true,
        }
    );
}

#[test]
fn apply_is_idempotent() {
    let mut once = controller(FakePage::full(), FakeStore::empty());
    once.apply(ThemePreference::Light);

    let mut twice = controller(FakePage::full(), FakeStore::empty());
    twice.apply(ThemePreference::Light);
    twice.apply(ThemePreference::Light);

    assert_eq!(once.page().root(), twice.page().root());
    assert_eq!(once.page().href(), twice.page().href());
    assert_eq!(once.page().toggle_html(), twice.page().toggle_html());
    assert_eq!(once.store().value, twice.store().value);
    assert_eq!(once.current(), twice.current());
}

#[test]
fn apply_raw_normalizes_unknown_to_dark() {
    let mut c = controller(FakePage::full(), FakeStore::empty());
    c.apply_raw("light");
    assert_light_active(&c);
    c.apply_raw("LIGHT");
    assert_dark_active(&c);
    c.apply_raw("");
    assert_dark_active(&c);
}

#[test]
fn apply_without_link_updates_remaining_sinks() {
    let mut c = controller(FakePage::without_link(), FakeStore::empty());
    let report = c.apply(ThemePreference::Light);
    assert!(!report.stylesheet);
    assert!(report.root_tagged && report.persisted && report.toggle);
    assert_eq!(c.page().href(), None);
    assert_eq!(c.page().root().as_deref(), Some("light"));
    assert_eq!(c.page().toggle_label(), Some(DARK_LABEL));
}

#[test]
fn apply_without_toggle_updates_remaining_sinks() {
    let mut c = controller(FakePage::without_toggle(), FakeStore::empty());
    let report = c.apply(ThemePreference::Light);
    assert!(!report.toggle);
    assert!(report.stylesheet && report.root_tagged && report.persisted);
    assert_eq!(c.page().toggle_html(), None);
    assert_eq!(c.page().href().as_deref(), Some(LIGHT_STYLESHEET_URL));
}

#[test]
fn apply_with_neither_element_still_tags_and_persists() {
    let mut c = controller(FakePage::bare(), FakeStore::empty());
    let report = c.apply(ThemePreference::Light);
    assert!(!report.stylesheet && !report.toggle);
    assert_eq!(c.page().root().as_deref(), Some("light"));
    assert_eq!(c.store().value.as_deref(), Some("light"));
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_flips_all_three_representations() {
    let mut c = controller(FakePage::full(), FakeStore::empty());
    c.initialize();
    assert_dark_active(&c);

    c.toggle();
    assert_light_active(&c);
    assert_eq!(c.store().value.as_deref(), Some("light"));

    c.toggle();
    assert_dark_active(&c);
    assert_eq!(c.store().value.as_deref(), Some("dark"));
}

#[test]
fn toggle_on_untagged_page_goes_light() {
    let mut c = controller(FakePage::full(), FakeStore::empty());
    let report = c.toggle();
    assert_eq!(report.applied, ThemePreference::Light);
}

#[test]
fn toggle_reads_root_tag_not_storage() {
    let mut c = controller(FakePage::full().with_root("light"), FakeStore::holding("dark"));
    c.toggle();
    assert_dark_active(&c);
}

#[test]
fn toggle_treats_unknown_root_tag_as_dark() {
    let mut c = controller(FakePage::full().with_root("sepia"), FakeStore::empty());
    c.toggle();
    assert_light_active(&c);
}

#[test]
fn every_click_changes_state() {
    let mut c = controller(FakePage::full(), FakeStore::empty());
    c.initialize();
    let mut previous = c.current();
    for _ in 0..10 {
        c.toggle();
        assert_ne!(c.current(), previous);
        previous = c.current();
    }
}

// =============================================================
// Storage failure
// =============================================================

#[test]
fn failing_writes_do_not_block_page_updates() {
    let mut c = controller(FakePage::full(), FakeStore::broken());
    for _ in 0..3 {
        let report = c.initialize();
        assert!(!report.persisted);
        assert_dark_active(&c);

        let report = c.toggle();
        assert!(!report.persisted);
        assert_light_active(&c);

        c.toggle();
        assert_dark_active(&c);
    }
    assert_eq!(c.store().value, None);
    assert_eq!(c.store().writes, 0);
}

#[test]
fn read_only_store_keeps_old_value_while_page_follows_clicks() {
    let mut c = controller(FakePage::full(), FakeStore::read_only("light"));
    c.initialize();
    assert_light_active(&c);
    c.toggle();
    assert_dark_active(&c);
    assert_eq!(c.store().value.as_deref(), Some("light"));
}
