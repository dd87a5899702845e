use super::*;
use crate::form::FeedbackMode;
use crate::storage::MemoryStore;
use crate::test_support::{FailingStore, FakeHost};

fn page(store: MemoryStore) -> PageCore<MemoryStore> {
    PageCore::new(&PageConfig::default(), store, 3)
}

// =============================================================
// Theme
// =============================================================

#[test]
fn initialize_applies_stored_theme() {
    let mut core = page(MemoryStore::with_entry("darkModeEnabled", "true"));
    let mut host = FakeHost::default();
    assert_eq!(core.initialize(&mut host), Theme::Dark);
    assert_eq!(host.theme, Some(Theme::Dark));
}

#[test]
fn initialize_defaults_to_light() {
    let mut core = page(MemoryStore::new());
    let mut host = FakeHost::default();
    assert_eq!(core.initialize(&mut host), Theme::Light);
    assert_eq!(host.theme, Some(Theme::Light));
}

#[test]
fn theme_toggle_renders_and_persists() {
    let mut core = page(MemoryStore::new());
    let mut host = FakeHost::default();
    core.initialize(&mut host);

    assert_eq!(core.dispatch(PageEvent::ThemeToggled, &mut host), Dispatch::Theme(Theme::Dark));
    assert_eq!(host.theme, Some(Theme::Dark));
    assert_eq!(core.theme(), Theme::Dark);
    assert_eq!(core.store().get("darkModeEnabled"), Ok(Some("true".to_owned())));
}

#[test]
fn theme_toggle_with_broken_store_still_renders() {
    let mut core = PageCore::new(&PageConfig::default(), FailingStore, 0);
    let mut host = FakeHost::default();
    core.initialize(&mut host);
    assert_eq!(core.dispatch(PageEvent::ThemeToggled, &mut host), Dispatch::Theme(Theme::Dark));
    assert_eq!(host.theme, Some(Theme::Dark));
}

#[test]
fn configured_storage_key_is_used() {
    let config = PageConfig { theme_storage_key: "theme".to_owned(), ..PageConfig::default() };
    let mut core = PageCore::new(&config, MemoryStore::new(), 0);
    let mut host = FakeHost::default();
    core.dispatch(PageEvent::ThemeToggled, &mut host);
    assert_eq!(core.store().get("theme"), Ok(Some("true".to_owned())));
    assert_eq!(core.store().get("darkModeEnabled"), Ok(None));
}

// =============================================================
// Counter
// =============================================================

#[test]
fn increment_updates_display_and_feedback() {
    let mut core = page(MemoryStore::new());
    let mut host = FakeHost::default();
    core.dispatch(PageEvent::CounterIncremented, &mut host);
    assert_eq!(host.counter_display, Some(1));
    assert_eq!(host.counter_feedback.as_deref(), Some(""));
    assert_eq!(core.counter().value(), 1);
}

#[test]
fn decrement_at_zero_leaves_display_alone() {
    let mut core = page(MemoryStore::new());
    let mut host = FakeHost::default();
    let dispatch = core.dispatch(PageEvent::CounterDecremented, &mut host);
    assert!(matches!(dispatch, Dispatch::Counter(CounterChange::AtFloor { .. })));
    assert_eq!(host.counter_display, None);
    assert_eq!(host.counter_feedback.as_deref(), Some("Cannot go below zero!"));
}

#[test]
fn counter_uses_configured_threshold() {
    let config = PageConfig { counter_high_water: 1, ..PageConfig::default() };
    let mut core = PageCore::new(&config, MemoryStore::new(), 0);
    let mut host = FakeHost::default();
    core.dispatch(PageEvent::CounterIncremented, &mut host);
    core.dispatch(PageEvent::CounterIncremented, &mut host);
    assert_eq!(host.counter_display, Some(2));
    assert_eq!(host.counter_feedback.as_deref(), Some("The counter is getting high!"));
}

// =============================================================
// FAQ
// =============================================================

#[test]
fn faq_toggle_redraws_every_item() {
    let mut core = page(MemoryStore::new());
    let mut host = FakeHost::default();
    core.dispatch(PageEvent::FaqToggled(0), &mut host);
    let dispatch = core.dispatch(PageEvent::FaqToggled(2), &mut host);

    assert_eq!(dispatch, Dispatch::Faq { open: Some(2) });
    assert_eq!(host.faq_open.get(&0), Some(&false));
    assert_eq!(host.faq_open.get(&1), Some(&false));
    assert_eq!(host.faq_open.get(&2), Some(&true));
    assert_eq!(core.faq().open_index(), Some(2));
}

#[test]
fn faq_unknown_item_is_ignored() {
    let mut core = page(MemoryStore::new());
    let mut host = FakeHost::default();
    assert_eq!(core.dispatch(PageEvent::FaqToggled(9), &mut host), Dispatch::Ignored);
    assert!(host.faq_open.is_empty());
}

// =============================================================
// Form
// =============================================================

#[test]
fn field_edit_runs_live_check_only() {
    let mut core = page(MemoryStore::new());
    let mut host = FakeHost::with_form("Al", "", "", false);
    let dispatch = core.dispatch(PageEvent::FieldEdited(Field::Name), &mut host);

    assert_eq!(dispatch, Dispatch::Field { field: Field::Name, valid: false });
    assert_eq!(host.errors.len(), 1);
    assert_eq!(host.feedback, None);
}

#[test]
fn submit_event_runs_form_flow() {
    let mut core = page(MemoryStore::new());
    let mut host = FakeHost::with_form("Alice", "alice@example.com", "secret12", true);
    let Dispatch::Form(outcome) = core.dispatch(PageEvent::FormSubmitted, &mut host) else {
        panic!("expected form outcome");
    };
    assert!(outcome.is_valid());
    assert_eq!(host.feedback.map(|(mode, _)| mode), Some(FeedbackMode::Success));
    assert_eq!(host.resets, 1);
}

#[test]
fn form_events_leave_other_widgets_alone() {
    let mut core = page(MemoryStore::new());
    let mut host = FakeHost::with_form("", "", "", false);
    core.dispatch(PageEvent::FormSubmitted, &mut host);
    assert_eq!(host.theme, None);
    assert_eq!(host.counter_display, None);
    assert!(host.faq_open.is_empty());
    assert_eq!(core.counter().value(), 0);
}
