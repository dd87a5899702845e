//! Infrastructure errors.
//!
//! Invalid user input is not an error here; it is a
//! [`FieldError`](crate::validation::FieldError) value rendered next to the
//! field. `PageError` covers the things that stop the page from wiring up.

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("page element not found: {0}")]
    MissingElement(String),
    #[error("page element {id} is not an {expected} element")]
    WrongElementType { id: String, expected: &'static str },
    #[error("invalid selector: {0}")]
    InvalidSelector(String),
    #[error("failed to attach {event} listener to {target}")]
    Listener { event: &'static str, target: String },
    #[error("browser window is not available")]
    NoWindow,
}
