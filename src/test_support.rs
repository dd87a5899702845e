//! In-memory page host and stores shared by unit tests.

use std::collections::HashMap;

use crate::form::{FeedbackMode, Field, FormSurface};
use crate::page::PageHost;
use crate::storage::{KeyValueStore, StorageError};
use crate::theme::Theme;

/// Records everything the page draws.
#[derive(Debug, Default)]
pub struct FakeHost {
    pub values: HashMap<Field, String>,
    pub agreed: bool,
    /// Message per field currently marked invalid.
    pub errors: HashMap<Field, String>,
    pub focused: Vec<Field>,
    pub feedback: Option<(FeedbackMode, String)>,
    pub resets: usize,
    pub theme: Option<Theme>,
    pub counter_display: Option<u32>,
    pub counter_feedback: Option<String>,
    pub faq_open: HashMap<usize, bool>,
    /// Every surface call, in order.
    pub calls: Vec<String>,
}

impl FakeHost {
    pub fn with_form(name: &str, email: &str, password: &str, agreed: bool) -> Self {
        let mut host = Self::default();
        host.values.insert(Field::Name, name.to_owned());
        host.values.insert(Field::Email, email.to_owned());
        host.values.insert(Field::Password, password.to_owned());
        host.agreed = agreed;
        host
    }

    pub fn set_value(&mut self, field: Field, value: &str) {
        self.values.insert(field, value.to_owned());
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

impl FormSurface for FakeHost {
    fn text(&self, field: Field) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn checked(&self, _field: Field) -> bool {
        self.agreed
    }

    fn set_error(&mut self, field: Field, message: &str) {
        self.calls.push(format!("set_error {field:?}"));
        self.errors.insert(field, message.to_owned());
    }

    fn clear_error(&mut self, field: Field) {
        self.calls.push(format!("clear_error {field:?}"));
        self.errors.remove(&field);
    }

    fn focus(&mut self, field: Field) {
        self.calls.push(format!("focus {field:?}"));
        self.focused.push(field);
    }

    fn set_feedback(&mut self, mode: FeedbackMode, message: &str) {
        self.calls.push(format!("set_feedback {mode:?}"));
        self.feedback = Some((mode, message.to_owned()));
    }

    fn reset(&mut self) {
        self.calls.push("reset".to_owned());
        self.values.clear();
        self.agreed = false;
        self.resets += 1;
    }
}

impl PageHost for FakeHost {
    fn apply_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }

    fn set_counter_display(&mut self, value: u32) {
        self.counter_display = Some(value);
    }

    fn set_counter_feedback(&mut self, message: &str) {
        self.counter_feedback = Some(message.to_owned());
    }

    fn set_faq_open(&mut self, index: usize, open: bool) {
        self.faq_open.insert(index, open);
    }
}

/// Store whose every access fails.
#[derive(Debug, Default)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Rejected {
            op: "set",
            key: key.to_owned(),
            reason: "quota exceeded".to_owned(),
        })
    }
}
