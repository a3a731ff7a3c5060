//! Choices and rules a form is built with

use super::validation::EmailRule;

pub const DEFAULT_CATEGORIES: [&str; 4] =
    ["General Enquiry", "Billing", "Technical Support", "Feedback"];

pub const DEFAULT_CONTACT_METHODS: [&str; 2] = ["Email", "Phone"];

#[derive(Debug, Clone)]
pub struct FormOptions {
    /// Options of the category selector
    pub categories: Vec<String>,
    /// Radios of the preferred contact method group
    pub contact_methods: Vec<String>,
    pub email: EmailRule,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            contact_methods: DEFAULT_CONTACT_METHODS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            email: EmailRule::default(),
        }
    }
}
