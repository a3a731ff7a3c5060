//! Field rules and the validation error taxonomy

use super::field::Field;
use regex::Regex;

/// Pattern an email address must match after trimming
pub const DEFAULT_EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// A single failed field rule, carrying the message shown next to the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Full Name is required")]
    FullNameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Contact Number is required")]
    ContactRequired,
    #[error("Please select a category")]
    CategoryRequired,
    #[error("Please select a preferred contact method")]
    ContactMethodRequired,
    #[error("Message is required")]
    MessageRequired,
}

impl ValidationError {
    /// The "missing value" error for a field
    pub fn required(field: Field) -> Self {
        match field {
            Field::FullName => Self::FullNameRequired,
            Field::Email => Self::EmailRequired,
            Field::Contact => Self::ContactRequired,
            Field::Category => Self::CategoryRequired,
            Field::ContactMethod => Self::ContactMethodRequired,
            Field::Message => Self::MessageRequired,
        }
    }
}

/// Compiled email rule
#[derive(Debug, Clone)]
pub struct EmailRule {
    pattern: Regex,
}

impl EmailRule {
    /// Build a rule from a custom pattern
    pub fn from_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }

    /// Whether the trimmed value looks like an email address
    pub fn is_match(&self, value: &str) -> bool {
        self.pattern.is_match(value.trim())
    }
}

impl Default for EmailRule {
    fn default() -> Self {
        Self {
            pattern: Regex::new(DEFAULT_EMAIL_PATTERN).expect("default email pattern compiles"),
        }
    }
}

/// True when the value has something other than whitespace
pub fn not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Strip everything but ASCII digits from a contact number
pub fn sanitize_contact_input(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Evaluate the rule for one field against its current value.
///
/// Choice fields (category, contact method) carry the selected option as
/// their value, or an empty string when nothing is selected.
pub fn check(field: Field, value: &str, email: &EmailRule) -> Result<(), ValidationError> {
    if !not_empty(value) {
        return Err(ValidationError::required(field));
    }
    if field == Field::Email && !email.is_match(value) {
        return Err(ValidationError::EmailInvalid);
    }
    Ok(())
}
