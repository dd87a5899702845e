//! Registration form validation flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The rules in [`crate::validation`] decide validity; this module reads
//! current values from a [`FormSurface`], writes the per-field error state
//! back, and aggregates the submission outcome. Nothing is cached between
//! checks: every call reads the surface fresh and overwrites what it shows.

use crate::consts::{FORM_ERROR_MESSAGE, FORM_SUCCESS_MESSAGE};
use crate::validation::{self, FieldError};

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// The four registration fields, in validation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    Agreement,
}

impl Field {
    /// Fixed order used for submission checks and first-offender focus.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Password, Field::Agreement];
}

/// Visual mode of the form-level feedback region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackMode {
    Success,
    Error,
}

/// Presentation capability the validation flow reads from and writes to.
pub trait FormSurface {
    /// Current text of a text field. Never called for [`Field::Agreement`].
    fn text(&self, field: Field) -> String;

    /// Whether the agreement checkbox is checked.
    fn checked(&self, field: Field) -> bool;

    /// Mark the field invalid and show `message` under it.
    fn set_error(&mut self, field: Field, message: &str);

    /// Remove the invalid marker and the message.
    fn clear_error(&mut self, field: Field);

    /// Best-effort input focus transfer.
    fn focus(&mut self, field: Field);

    /// Show `message` in the feedback region in the given mode, replacing
    /// any previous mode.
    fn set_feedback(&mut self, mode: FeedbackMode, message: &str);

    /// Reset every field to empty/unchecked.
    fn reset(&mut self);
}

/// Run the rule for one field against its current value.
pub fn evaluate(surface: &impl FormSurface, field: Field) -> Result<(), FieldError> {
    match field {
        Field::Name => validation::check_name(&surface.text(field)),
        Field::Email => validation::check_email(&surface.text(field)),
        Field::Password => validation::check_password(&surface.text(field)),
        Field::Agreement => validation::check_agreement(surface.checked(field)),
    }
}

/// Check one field and bring its displayed error state in line with the result.
///
/// Also the live-feedback path: it touches no other field, the feedback
/// region, or focus.
pub fn check_field(surface: &mut impl FormSurface, field: Field) -> bool {
    render(surface, field).is_ok()
}

fn render(surface: &mut impl FormSurface, field: Field) -> Result<(), FieldError> {
    let result = evaluate(&*surface, field);
    match &result {
        Ok(()) => surface.clear_error(field),
        Err(err) => surface.set_error(field, &err.to_string()),
    }
    result
}

/// Result of one submission attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormOutcome {
    /// Per-field results in [`Field::ALL`] order.
    pub results: [(Field, Result<(), FieldError>); 4],
}

impl FormOutcome {
    /// Logical AND of every field result.
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|(_, result)| result.is_ok())
    }

    /// First failing field in validation order.
    pub fn first_invalid(&self) -> Option<Field> {
        self.results
            .iter()
            .find(|(_, result)| result.is_err())
            .map(|(field, _)| *field)
    }
}

/// Validate the whole form on submission.
///
/// Every field is checked and redrawn, even after an earlier failure. On
/// success the feedback region turns green and the form is reset; on
/// failure it turns red and focus moves to the first offender.
pub fn submit(surface: &mut impl FormSurface) -> FormOutcome {
    let results = Field::ALL.map(|field| (field, render(&mut *surface, field)));
    let outcome = FormOutcome { results };

    match outcome.first_invalid() {
        None => {
            surface.set_feedback(FeedbackMode::Success, FORM_SUCCESS_MESSAGE);
            surface.reset();
            log::info!("registration form accepted");
        }
        Some(field) => {
            surface.set_feedback(FeedbackMode::Error, FORM_ERROR_MESSAGE);
            surface.focus(field);
            log::debug!("registration form rejected; first invalid field: {field:?}");
        }
    }
    outcome
}
