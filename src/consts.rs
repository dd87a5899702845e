//! User-facing messages and CSS class names shared across the page.

// ── Form feedback ───────────────────────────────────────────────

pub const FORM_SUCCESS_MESSAGE: &str = "Success! Form submitted and data is valid.";
pub const FORM_ERROR_MESSAGE: &str = "Error: Please fix the highlighted fields.";

/// Marker class applied to a field that failed its last check.
pub const INVALID_CLASS: &str = "invalid";
pub const FEEDBACK_SUCCESS_CLASS: &str = "feedback-success";
pub const FEEDBACK_ERROR_CLASS: &str = "feedback-error";

// ── Field rules ─────────────────────────────────────────────────

pub const NAME_MIN_CHARS: usize = 3;
pub const PASSWORD_MIN_CHARS: usize = 8;

// ── Theme ───────────────────────────────────────────────────────

pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const LIGHT_MODE_CLASS: &str = "light-mode";
pub const TOGGLE_TO_LIGHT_LABEL: &str = "Toggle Light Mode";
pub const TOGGLE_TO_DARK_LABEL: &str = "Toggle Dark Mode";

// ── Counter ─────────────────────────────────────────────────────

pub const COUNTER_RESET_MESSAGE: &str = "Counter is reset.";
pub const COUNTER_HIGH_MESSAGE: &str = "The counter is getting high!";
pub const COUNTER_FLOOR_MESSAGE: &str = "Cannot go below zero!";

// ── Accordion ───────────────────────────────────────────────────

pub const FAQ_OPEN_CLASS: &str = "open";
