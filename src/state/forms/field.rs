//! Form field value objects

use super::validation::ValidationError;

/// The fields of the enquiry form, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Email,
    Contact,
    Category,
    ContactMethod,
    Message,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::FullName,
        Field::Email,
        Field::Contact,
        Field::Category,
        Field::ContactMethod,
        Field::Message,
    ];

    /// Fields that take focus after a failed submit, highest precedence first.
    /// The contact-method group is validated but never focused.
    pub const FOCUS_CHAIN: [Field; 5] = [
        Field::FullName,
        Field::Email,
        Field::Contact,
        Field::Category,
        Field::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Email => "Email",
            Field::Contact => "Contact Number",
            Field::Category => "Category of Inquiry",
            Field::ContactMethod => "Preferred Contact Method",
            Field::Message => "Message",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Field::FullName => 0,
            Field::Email => 1,
            Field::Contact => 2,
            Field::Category => 3,
            Field::ContactMethod => 4,
            Field::Message => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Field> {
        Field::ALL.get(index).copied()
    }

    /// Free-text fields edited character by character
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            Field::FullName | Field::Email | Field::Contact | Field::Message
        )
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Field::Message)
    }

    /// Whether the field has its own input element carrying `aria-invalid`
    pub fn has_input_element(&self) -> bool {
        !matches!(self, Field::ContactMethod)
    }

    /// Whether leaving the field gives early validation feedback
    pub fn validates_on_blur(&self) -> bool {
        self.is_text()
    }
}

/// Per-field state: value, visual flags and the current validation error
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    field: Field,
    value: String,
    has_value: bool,
    error: Option<ValidationError>,
    aria_invalid: Option<bool>,
}

impl FieldState {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            value: String::new(),
            has_value: false,
            error: None,
            aria_invalid: None,
        }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value and re-derive `has_value`
    pub fn set_value(&mut self, value: String) {
        self.value = value;
        self.sync_has_value();
    }

    pub fn sync_has_value(&mut self) {
        self.has_value = !self.value.is_empty();
    }

    pub fn has_value(&self) -> bool {
        self.has_value
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    /// The inline error text, empty when the field is valid
    pub fn error_message(&self) -> String {
        self.error.map(|e| e.to_string()).unwrap_or_default()
    }

    /// `None` until the field has been validated at least once
    pub fn aria_invalid(&self) -> Option<bool> {
        self.aria_invalid
    }

    /// Record the outcome of a validation run
    pub fn apply(&mut self, result: Result<(), ValidationError>) {
        self.error = result.err();
        if self.field.has_input_element() {
            self.aria_invalid = Some(self.error.is_some());
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field_enum {
        use super::*;

        #[test]
        fn test_index_round_trips_for_all_fields() {
            for (i, field) in Field::ALL.iter().enumerate() {
                assert_eq!(field.index(), i);
                assert_eq!(Field::from_index(i), Some(*field));
            }
            assert_eq!(Field::from_index(6), None);
        }

        #[test]
        fn test_focus_chain_omits_contact_method() {
            assert!(!Field::FOCUS_CHAIN.contains(&Field::ContactMethod));
            assert_eq!(Field::FOCUS_CHAIN[0], Field::FullName);
            assert_eq!(Field::FOCUS_CHAIN[4], Field::Message);
        }

        #[test]
        fn test_blur_validation_only_for_text_fields() {
            assert!(Field::FullName.validates_on_blur());
            assert!(Field::Message.validates_on_blur());
            assert!(!Field::Category.validates_on_blur());
            assert!(!Field::ContactMethod.validates_on_blur());
        }

        #[test]
        fn test_only_message_is_multiline() {
            let multiline: Vec<_> = Field::ALL.iter().filter(|f| f.is_multiline()).collect();
            assert_eq!(multiline, vec![&Field::Message]);
        }
    }

    mod field_state {
        use super::*;

        #[test]
        fn test_new_is_clean() {
            let state = FieldState::new(Field::Email);
            assert_eq!(state.value(), "");
            assert!(!state.has_value());
            assert!(!state.has_error());
            assert_eq!(state.error_message(), "");
            assert_eq!(state.aria_invalid(), None);
        }

        #[test]
        fn test_set_value_syncs_has_value() {
            let mut state = FieldState::new(Field::FullName);
            state.set_value("Jo".to_string());
            assert!(state.has_value());
            state.set_value(String::new());
            assert!(!state.has_value());
        }

        #[test]
        fn test_whitespace_counts_as_value_for_styling() {
            let mut state = FieldState::new(Field::FullName);
            state.set_value("  ".to_string());
            assert!(state.has_value());
        }

        #[test]
        fn test_error_flag_and_message_move_together() {
            let mut state = FieldState::new(Field::FullName);
            state.apply(Err(ValidationError::FullNameRequired));
            assert!(state.has_error());
            assert_eq!(state.error_message(), "Full Name is required");
            assert_eq!(state.aria_invalid(), Some(true));

            state.apply(Ok(()));
            assert!(!state.has_error());
            assert_eq!(state.error_message(), "");
            assert_eq!(state.aria_invalid(), Some(false));
        }

        #[test]
        fn test_contact_method_never_sets_aria() {
            let mut state = FieldState::new(Field::ContactMethod);
            state.apply(Err(ValidationError::ContactMethodRequired));
            assert!(state.has_error());
            assert_eq!(state.aria_invalid(), None);
        }

        #[test]
        fn test_reset_keeps_field_identity() {
            let mut state = FieldState::new(Field::Contact);
            state.set_value("123".to_string());
            state.apply(Ok(()));
            state.reset();
            assert_eq!(state, FieldState::new(Field::Contact));
        }
    }
}
