//! Event dispatch for the whole page.
//!
//! DESIGN
//! ======
//! `PageCore` owns every piece of page state (theme, counter, accordion)
//! and the injected preference store. The host only forwards events and
//! draws what it is told through [`PageHost`], so all behavior runs without
//! a browser. Each dispatch handles exactly one event to completion.

use crate::accordion::Accordion;
use crate::config::PageConfig;
use crate::counter::{Counter, CounterChange};
use crate::form::{self, Field, FormOutcome, FormSurface};
use crate::storage::KeyValueStore;
use crate::theme::{Theme, ThemeToggle};

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Rendering capability for everything on the page besides the form.
pub trait PageHost: FormSurface {
    /// Switch the body class and the toggle button label.
    fn apply_theme(&mut self, theme: Theme);
    fn set_counter_display(&mut self, value: u32);
    fn set_counter_feedback(&mut self, message: &str);
    fn set_faq_open(&mut self, index: usize, open: bool);
}

/// User interactions the page reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageEvent {
    ThemeToggled,
    CounterIncremented,
    CounterDecremented,
    FaqToggled(usize),
    /// Live feedback: a field's value or checked state changed.
    FieldEdited(Field),
    FormSubmitted,
}

/// What a dispatch did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    Theme(Theme),
    Counter(CounterChange),
    Faq { open: Option<usize> },
    Field { field: Field, valid: bool },
    Form(FormOutcome),
    /// The event referred to something that does not exist.
    Ignored,
}

pub struct PageCore<S> {
    store: S,
    theme: ThemeToggle,
    counter: Counter,
    faq: Accordion,
}

impl<S: KeyValueStore> PageCore<S> {
    pub fn new(config: &PageConfig, store: S, faq_items: usize) -> Self {
        let theme = ThemeToggle::new(config.theme_storage_key.clone());
        let counter = Counter::new(config.counter_high_water);
        Self { store, theme, counter, faq: Accordion::new(faq_items) }
    }

    /// Page-load step: adopt the stored theme and draw it.
    pub fn initialize(&mut self, host: &mut impl PageHost) -> Theme {
        let theme = self.theme.load(&self.store);
        host.apply_theme(theme);
        log::debug!("page initialized in {} mode", theme.name());
        theme
    }

    /// Handle one event and render its effects.
    pub fn dispatch(&mut self, event: PageEvent, host: &mut impl PageHost) -> Dispatch {
        match event {
            PageEvent::ThemeToggled => {
                let theme = self.theme.toggle(&mut self.store);
                host.apply_theme(theme);
                Dispatch::Theme(theme)
            }
            PageEvent::CounterIncremented => render_counter(self.counter.increment(), host),
            PageEvent::CounterDecremented => render_counter(self.counter.decrement(), host),
            PageEvent::FaqToggled(index) => {
                if !self.faq.toggle(index) {
                    log::warn!("ignoring click on unknown FAQ item {index}");
                    return Dispatch::Ignored;
                }
                for (i, open) in self.faq.states() {
                    host.set_faq_open(i, open);
                }
                Dispatch::Faq { open: self.faq.open_index() }
            }
            PageEvent::FieldEdited(field) => {
                let valid = form::check_field(host, field);
                Dispatch::Field { field, valid }
            }
            PageEvent::FormSubmitted => Dispatch::Form(form::submit(host)),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    pub fn faq(&self) -> &Accordion {
        &self.faq
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn render_counter(change: CounterChange, host: &mut impl PageHost) -> Dispatch {
    match change {
        CounterChange::Moved { value, feedback } => {
            host.set_counter_display(value);
            host.set_counter_feedback(feedback);
        }
        CounterChange::AtFloor { feedback } => host.set_counter_feedback(feedback),
    }
    Dispatch::Counter(change)
}
