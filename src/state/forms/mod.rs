//! Form domain layer
//!
//! Field states, validation rules and the controller driving the enquiry form.

mod field;
mod form_state;
mod options;
mod summary;
mod validation;

pub use field::{Field, FieldState};
pub use form_state::{Form, FormButton, FormController, SubmitOutcome};
pub use options::FormOptions;
pub use validation::EmailRule;

#[cfg(test)]
pub use form_state::{BLANK_FORM_ALERT, CANCEL_CONFIRMATION};
#[cfg(test)]
pub use options::{DEFAULT_CATEGORIES, DEFAULT_CONTACT_METHODS};
#[cfg(test)]
pub use validation::DEFAULT_EMAIL_PATTERN;
