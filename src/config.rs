//! Page configuration.
//!
//! Defaults match the shipped `index.html`. A page may override any subset
//! by embedding a JSON document; missing keys keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::PageError;
use crate::form::Field;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Suffix appended to a field id to find its error message element.
const ERROR_ID_SUFFIX: &str = "-error";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Storage key of the dark-mode flag.
    pub theme_storage_key: String,
    /// Largest counter value shown without the "getting high" note.
    pub counter_high_water: u32,
    pub ids: ElementIds,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: "darkModeEnabled".to_owned(),
            counter_high_water: 5,
            ids: ElementIds::default(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON override document.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// DOM element ids and selectors the browser binding looks up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub mode_toggle: String,
    pub increment: String,
    pub decrement: String,
    pub counter_display: String,
    pub counter_feedback: String,
    /// CSS selector matching every FAQ header; each header's next sibling
    /// is its content panel.
    pub faq_header_selector: String,
    pub form: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub agreement: String,
    pub form_feedback: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            mode_toggle: "mode-toggle".to_owned(),
            increment: "increment-btn".to_owned(),
            decrement: "decrement-btn".to_owned(),
            counter_display: "counter-display".to_owned(),
            counter_feedback: "counter-feedback".to_owned(),
            faq_header_selector: ".faq-header".to_owned(),
            form: "registration-form".to_owned(),
            name: "reg-name".to_owned(),
            email: "reg-email".to_owned(),
            password: "reg-password".to_owned(),
            agreement: "reg-agree".to_owned(),
            form_feedback: "form-feedback".to_owned(),
        }
    }
}

impl ElementIds {
    /// Input element id for a form field.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Agreement => &self.agreement,
        }
    }

    /// Id of the message element paired with a field.
    pub fn field_error(&self, field: Field) -> String {
        format!("{}{ERROR_ID_SUFFIX}", self.field(field))
    }
}
