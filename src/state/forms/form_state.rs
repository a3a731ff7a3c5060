//! Form state management and the enquiry form controller

use super::field::{Field, FieldState};
use super::options::FormOptions;
use super::summary::EnquirySummary;
use super::validation::{self, ValidationError};
use crate::prompt::Prompter;

/// Alert raised when submit is pressed on an untouched form
pub const BLANK_FORM_ALERT: &str = "PLEASE ENTER THE VALUES!";

/// Question asked before cancelling clears the form
pub const CANCEL_CONFIRMATION: &str =
    "Are you sure you want to cancel? All entered data will be lost.";

/// Focus index of the action buttons row, after the six fields
pub const ACTIONS_ROW: usize = 6;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Buttons of the action row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Submit,
    Cancel,
}

impl FormButton {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Submit => "Submit",
            Self::Cancel => "Cancel",
        }
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::Submit => Self::Cancel,
            Self::Cancel => Self::Submit,
        };
    }
}

/// All field states at one point in time
#[derive(Debug, Clone, PartialEq)]
pub struct FormSnapshot {
    fields: [FieldState; 6],
}

impl FormSnapshot {
    pub fn field(&self, field: Field) -> &FieldState {
        &self.fields[field.index()]
    }

    /// Fields currently showing an error, in declaration order
    pub fn errors(&self) -> impl Iterator<Item = (Field, ValidationError)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(move |field| self.field(field).error().map(|error| (field, error)))
    }

    /// True when no field (radio group included) holds anything
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|f| !validation::not_empty(f.value()))
    }

    #[cfg(test)]
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(FieldState::has_error)
    }
}

/// Result of pressing submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was entered; the generic alert was shown
    Blank,
    /// At least one rule failed. `focus` is the field that received focus,
    /// `None` when only the contact-method group failed.
    Invalid { focus: Option<Field> },
    /// Summary was presented and the form reset
    Submitted(EnquirySummary),
}

/// Controller for a single enquiry form
pub struct FormController<P: Prompter> {
    fields: [FieldState; 6],
    options: FormOptions,
    active_field_index: usize,
    selected_button: FormButton,
    /// Radio under the cursor in the contact-method group
    method_cursor: usize,
    prompter: P,
}

impl<P: Prompter> FormController<P> {
    pub fn new(options: FormOptions, prompter: P) -> Self {
        Self {
            fields: Field::ALL.map(FieldState::new),
            options,
            active_field_index: 0,
            selected_button: FormButton::default(),
            method_cursor: 0,
            prompter,
        }
    }

    pub fn field(&self, field: Field) -> &FieldState {
        &self.fields[field.index()]
    }

    fn field_mut(&mut self, field: Field) -> &mut FieldState {
        &mut self.fields[field.index()]
    }

    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn prompter_mut(&mut self) -> &mut P {
        &mut self.prompter
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            fields: self.fields.clone(),
        }
    }

    /// The focused field, `None` while the action row is focused
    pub fn focused_field(&self) -> Option<Field> {
        Field::from_index(self.active_field_index)
    }

    pub fn focus(&mut self, field: Field) {
        self.set_active_field(field.index());
    }

    #[cfg(test)]
    pub fn focus_actions(&mut self) {
        self.set_active_field(ACTIONS_ROW);
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == ACTIONS_ROW
    }

    pub fn selected_button(&self) -> FormButton {
        self.selected_button
    }

    pub fn toggle_button(&mut self) {
        self.selected_button.toggle();
    }

    pub fn method_cursor(&self) -> usize {
        self.method_cursor
    }

    /// Replace a text field's value, as typed. The contact number keeps digits only.
    /// Choice fields are set through their own selectors and are ignored here.
    pub fn input(&mut self, field: Field, raw: &str) {
        if !field.is_text() {
            return;
        }
        let value = if field == Field::Contact {
            validation::sanitize_contact_input(raw)
        } else {
            raw.to_string()
        };
        self.field_mut(field).set_value(value);
    }

    /// Type a character into the focused text field
    pub fn push_char(&mut self, c: char) {
        let Some(field) = self.focused_field().filter(Field::is_text) else {
            return;
        };
        if c == '\n' && !field.is_multiline() {
            return;
        }
        let mut value = self.field(field).value().to_string();
        value.push(c);
        self.input(field, &value);
    }

    /// Delete the last character of the focused text field
    pub fn pop_char(&mut self) {
        let Some(field) = self.focused_field().filter(Field::is_text) else {
            return;
        };
        let mut value = self.field(field).value().to_string();
        value.pop();
        self.input(field, &value);
    }

    /// Focus left the field
    pub fn blur(&mut self, field: Field) {
        self.field_mut(field).sync_has_value();
        if field.validates_on_blur() {
            let _ = self.validate_field(field);
        }
    }

    /// Change the category selection and validate it, as a `change` event would.
    /// Returns false when the option is unknown.
    pub fn select_category(&mut self, category: Option<&str>) -> bool {
        let value = match category {
            Some(c) if self.options.categories.iter().any(|o| o == c) => c.to_string(),
            Some(_) => return false,
            None => String::new(),
        };
        self.field_mut(Field::Category).set_value(value);
        let _ = self.validate_field(Field::Category);
        true
    }

    /// Step through the category options, wrapping at either end
    pub fn cycle_category(&mut self, forward: bool) {
        let count = self.options.categories.len();
        if count == 0 {
            return;
        }
        let current = self
            .options
            .categories
            .iter()
            .position(|o| o == self.field(Field::Category).value());
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        };
        let value = self.options.categories[next].clone();
        self.select_category(Some(&value));
    }

    pub fn move_method_cursor(&mut self, forward: bool) {
        let count = self.options.contact_methods.len();
        if count == 0 {
            return;
        }
        self.method_cursor = if forward {
            (self.method_cursor + 1) % count
        } else {
            (self.method_cursor + count - 1) % count
        };
    }

    /// Check the radio under the cursor
    pub fn select_method_at_cursor(&mut self) {
        if let Some(method) = self.options.contact_methods.get(self.method_cursor).cloned() {
            self.select_contact_method(&method);
        }
    }

    /// Check one radio of the group, unchecking the others.
    /// Returns false when the method is unknown.
    pub fn select_contact_method(&mut self, method: &str) -> bool {
        match self.options.contact_methods.iter().position(|m| m == method) {
            Some(index) => {
                self.method_cursor = index;
                self.field_mut(Field::ContactMethod)
                    .set_value(method.to_string());
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub fn selected_contact_method(&self) -> Option<&str> {
        let value = self.field(Field::ContactMethod).value();
        (!value.is_empty()).then_some(value)
    }

    /// Run one field's rule and reflect the result in its state
    pub fn validate_field(&mut self, field: Field) -> Result<(), ValidationError> {
        let result = validation::check(field, self.field(field).value(), &self.options.email);
        self.field_mut(field).apply(result);
        result
    }

    /// Validate every field; on failure focus the first errored field of the focus chain
    pub fn validate_all(&mut self) -> bool {
        let mut ok = true;
        for field in Field::ALL {
            ok &= self.validate_field(field).is_ok();
        }
        if !ok {
            if let Some(first) = self.first_invalid_field() {
                self.focus(first);
            }
        }
        ok
    }

    fn first_invalid_field(&self) -> Option<Field> {
        Field::FOCUS_CHAIN
            .into_iter()
            .find(|f| self.field(*f).has_error())
    }

    pub fn handle_submit(&mut self) -> SubmitOutcome {
        if self.snapshot().is_blank() {
            self.prompter.alert(BLANK_FORM_ALERT);
            return SubmitOutcome::Blank;
        }

        if !self.validate_all() {
            return SubmitOutcome::Invalid {
                focus: self.first_invalid_field(),
            };
        }

        let summary = self.summary();
        self.prompter.alert(&summary.to_string());
        self.reset();
        SubmitOutcome::Submitted(summary)
    }

    /// Clear the form after the user confirms; returns whether it was cleared
    pub fn handle_cancel(&mut self) -> bool {
        if !self.prompter.confirm(CANCEL_CONFIRMATION) {
            return false;
        }
        self.reset();
        true
    }

    /// Drop all values, errors and visual state
    pub fn reset(&mut self) {
        for state in &mut self.fields {
            state.reset();
        }
        self.method_cursor = 0;
    }

    fn summary(&self) -> EnquirySummary {
        let trimmed = |field: Field| self.field(field).value().trim().to_string();
        EnquirySummary {
            name: trimmed(Field::FullName),
            email: trimmed(Field::Email),
            contact: trimmed(Field::Contact),
            category: self.field(Field::Category).value().to_string(),
            method: self.field(Field::ContactMethod).value().to_string(),
            message: trimmed(Field::Message),
        }
    }
}

impl<P: Prompter> Form for FormController<P> {
    fn field_count(&self) -> usize {
        ACTIONS_ROW + 1 // six fields, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        let index = index.min(ACTIONS_ROW);
        if index == self.active_field_index {
            return;
        }
        let left = self.focused_field();
        self.active_field_index = index;
        if let Some(field) = left {
            self.blur(field);
        }
    }
}
