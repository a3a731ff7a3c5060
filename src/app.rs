//! Application state and core logic

use crate::config::FormConfig;
use crate::prompt::{ConfirmOption, ModalPrompter};
use crate::state::{Field, Form, FormButton, FormController, SubmitOutcome};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The enquiry form as driven by the terminal UI
pub type EnquiryForm = FormController<ModalPrompter>;

/// Main application struct
pub struct App {
    /// Form controller, owning the modal prompter
    pub form: EnquiryForm,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &FormConfig) -> Self {
        Self {
            form: FormController::new(config.form_options(), ModalPrompter::new()),
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.form.prompter().is_modal() {
            self.handle_modal_key(key);
            return;
        }

        // Clear any status messages on key press
        self.status_message = None;

        if Self::is_submit_shortcut(&key) {
            self.submit();
            return;
        }

        match key.code {
            KeyCode::Tab => self.form.next_field(),
            KeyCode::BackTab => self.form.prev_field(),
            KeyCode::Esc => self.cancel(),
            _ => match self.form.focused_field() {
                None => self.handle_actions_key(key),
                Some(Field::Category) => self.handle_category_key(key),
                Some(Field::ContactMethod) => self.handle_contact_method_key(key),
                Some(_) => self.handle_text_key(key),
            },
        }
    }

    /// Ctrl+S everywhere, Cmd+W / Ctrl+W as fallback
    fn is_submit_shortcut(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('s') => key.modifiers.contains(KeyModifiers::CONTROL),
            KeyCode::Char('w') => key.modifiers.contains(crate::platform::SUBMIT_MODIFIER),
            _ => false,
        }
    }

    fn handle_text_key(&mut self, key: KeyEvent) {
        let multiline = self.form.focused_field().is_some_and(|f| f.is_multiline());
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.push_char(c)
            }
            KeyCode::Backspace => self.form.pop_char(),
            KeyCode::Enter if multiline => self.form.push_char('\n'),
            // Enter in a single-line field submits the form
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn handle_category_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.form.cycle_category(false),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                self.form.cycle_category(true)
            }
            KeyCode::Backspace | KeyCode::Delete => {
                self.form.select_category(None);
            }
            KeyCode::Up | KeyCode::Char('k') => self.form.prev_field(),
            KeyCode::Down | KeyCode::Char('j') => self.form.next_field(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn handle_contact_method_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.form.move_method_cursor(false),
            KeyCode::Right | KeyCode::Char('l') => self.form.move_method_cursor(true),
            KeyCode::Char(' ') => self.form.select_method_at_cursor(),
            KeyCode::Up | KeyCode::Char('k') => self.form.prev_field(),
            KeyCode::Down | KeyCode::Char('j') => self.form.next_field(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    /// Keys on the Submit/Cancel row
    fn handle_actions_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Char('j')
            | KeyCode::Char('k') => self.form.toggle_button(),
            KeyCode::Enter | KeyCode::Char(' ') => match self.form.selected_button() {
                FormButton::Submit => self.submit(),
                FormButton::Cancel => self.cancel(),
            },
            _ => {}
        }
    }

    /// Alerts are only dismissed; a pending question takes the dialog keys
    fn handle_modal_key(&mut self, key: KeyEvent) {
        if self.form.prompter().current_alert().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.form.prompter_mut().dismiss_alert();
            }
        } else {
            self.handle_confirm_dialog_key(key);
        }
    }

    fn handle_confirm_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::Char('j')
            | KeyCode::Char('k') => {
                if let Some(pending) = self.form.prompter_mut().pending_confirm_mut() {
                    pending.selected_option.toggle();
                }
            }
            KeyCode::Char('y') => self.answer_confirm(true),
            KeyCode::Char('n') | KeyCode::Esc => self.answer_confirm(false),
            KeyCode::Enter => {
                let yes = self
                    .form
                    .prompter()
                    .pending_confirm()
                    .is_some_and(|p| p.selected_option == ConfirmOption::Yes);
                self.answer_confirm(yes);
            }
            _ => {}
        }
    }

    /// Close the confirmation dialog; cancelling is the only action that asks,
    /// so a yes replays it
    fn answer_confirm(&mut self, yes: bool) {
        self.form.prompter_mut().answer(yes);
        if yes {
            self.cancel();
        }
    }

    fn submit(&mut self) {
        match self.form.handle_submit() {
            SubmitOutcome::Blank => tracing::debug!("submit on a blank form"),
            SubmitOutcome::Invalid { focus } => {
                let failed: Vec<String> = self
                    .form
                    .snapshot()
                    .errors()
                    .map(|(field, error)| format!("{}: {error}", field.label()))
                    .collect();
                tracing::debug!(?focus, "submit blocked: {}", failed.join(", "));
                self.status_message = Some("Please fix the highlighted fields".to_string());
            }
            SubmitOutcome::Submitted(summary) => {
                tracing::info!(
                    category = %summary.category,
                    method = %summary.method,
                    "enquiry submitted"
                );
                if let Ok(json) = serde_json::to_string(&summary) {
                    tracing::debug!("submitted enquiry: {json}");
                }
                self.status_message = Some("Enquiry submitted".to_string());
            }
        }
    }

    fn cancel(&mut self) {
        if self.form.handle_cancel() {
            tracing::info!("enquiry form cleared");
            self.status_message = Some("Form cleared".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{BLANK_FORM_ALERT, CANCEL_CONFIRMATION};

    fn app() -> App {
        App::new(&FormConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Fill every field through the keyboard, ending on the message field
    fn fill_valid(app: &mut App) {
        type_str(app, "Jo");
        press(app, KeyCode::Tab);
        type_str(app, "jo@x.com");
        press(app, KeyCode::Tab);
        type_str(app, "12a345");
        press(app, KeyCode::Tab);
        press(app, KeyCode::Right); // General Enquiry
        press(app, KeyCode::Right); // Billing
        press(app, KeyCode::Tab);
        press(app, KeyCode::Right);
        press(app, KeyCode::Char(' ')); // Phone
        press(app, KeyCode::Tab);
        type_str(app, "Hi");
    }

    mod basics {
        use super::*;

        #[test]
        fn test_should_quit_initially_false() {
            let mut app = app();
            assert!(!app.should_quit());
            app.quit();
            assert!(app.should_quit());
        }

        #[test]
        fn test_typing_goes_to_focused_field() {
            let mut app = app();
            type_str(&mut app, "Jo");
            assert_eq!(app.form.field(Field::FullName).value(), "Jo");
            press(&mut app, KeyCode::Backspace);
            assert_eq!(app.form.field(Field::FullName).value(), "J");
        }

        #[test]
        fn test_tab_out_of_empty_field_shows_error() {
            let mut app = app();
            press(&mut app, KeyCode::Tab);
            assert_eq!(app.form.focused_field(), Some(Field::Email));
            assert!(app.form.field(Field::FullName).has_error());
        }

        #[test]
        fn test_contact_field_drops_letters() {
            let mut app = app();
            app.form.focus(Field::Contact);
            type_str(&mut app, "12a3b");
            assert_eq!(app.form.field(Field::Contact).value(), "123");
        }

        #[test]
        fn test_enter_in_message_adds_newline() {
            let mut app = app();
            app.form.focus(Field::Message);
            type_str(&mut app, "a");
            press(&mut app, KeyCode::Enter);
            type_str(&mut app, "b");
            assert_eq!(app.form.field(Field::Message).value(), "a\nb");
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn test_blank_submit_shows_alert_until_dismissed() {
            let mut app = app();
            ctrl(&mut app, 's');
            assert_eq!(app.form.prompter().current_alert(), Some(BLANK_FORM_ALERT));
            assert!(!app.form.snapshot().has_errors());

            // typing is blocked while the alert is open
            type_str(&mut app, "x");
            assert_eq!(app.form.field(Field::FullName).value(), "");

            press(&mut app, KeyCode::Enter);
            assert!(app.form.prompter().current_alert().is_none());
        }

        #[test]
        fn test_valid_submit_via_keyboard() {
            let mut app = app();
            fill_valid(&mut app);
            ctrl(&mut app, 's');

            let alert = app.form.prompter().current_alert().unwrap().to_string();
            assert!(alert.starts_with("Congratulations...!!"));
            for value in ["Jo", "jo@x.com", "12345", "Billing", "Phone", "Hi"] {
                assert!(alert.contains(value), "summary is missing {value}");
            }
            assert!(app.form.snapshot().is_blank());
            assert_eq!(app.status_message.as_deref(), Some("Enquiry submitted"));

            press(&mut app, KeyCode::Esc);
            assert!(!app.form.prompter().is_modal());
        }

        #[test]
        fn test_invalid_submit_sets_status() {
            let mut app = app();
            type_str(&mut app, "Jo");
            ctrl(&mut app, 's');
            assert!(app.form.prompter().current_alert().is_none());
            assert_eq!(app.form.focused_field(), Some(Field::Email));
            assert_eq!(
                app.status_message.as_deref(),
                Some("Please fix the highlighted fields")
            );
        }

        #[test]
        fn test_enter_in_single_line_field_submits() {
            let mut app = app();
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.form.prompter().current_alert(), Some(BLANK_FORM_ALERT));
        }

        #[test]
        fn test_submit_button() {
            let mut app = app();
            fill_valid(&mut app);
            press(&mut app, KeyCode::Tab);
            assert!(app.form.is_buttons_row_active());
            press(&mut app, KeyCode::Enter);
            assert!(app
                .form
                .prompter()
                .current_alert()
                .is_some_and(|a| a.contains("Hi")));
        }
    }

    mod cancel {
        use super::*;

        #[test]
        fn test_esc_asks_for_confirmation() {
            let mut app = app();
            type_str(&mut app, "Jo");
            press(&mut app, KeyCode::Esc);
            let pending = app.form.prompter().pending_confirm().unwrap();
            assert_eq!(pending.message, CANCEL_CONFIRMATION);
            assert_eq!(app.form.field(Field::FullName).value(), "Jo");
        }

        #[test]
        fn test_declining_keeps_values() {
            let mut app = app();
            type_str(&mut app, "Jo");
            press(&mut app, KeyCode::Esc);
            press(&mut app, KeyCode::Char('n'));
            assert!(!app.form.prompter().is_modal());
            assert_eq!(app.form.field(Field::FullName).value(), "Jo");
        }

        #[test]
        fn test_enter_uses_default_no() {
            let mut app = app();
            type_str(&mut app, "Jo");
            press(&mut app, KeyCode::Esc);
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.form.field(Field::FullName).value(), "Jo");
        }

        #[test]
        fn test_confirming_clears_form() {
            let mut app = app();
            fill_valid(&mut app);
            press(&mut app, KeyCode::Esc);
            press(&mut app, KeyCode::Down); // select Yes
            press(&mut app, KeyCode::Enter);

            assert!(!app.form.prompter().is_modal());
            assert!(app.form.snapshot().is_blank());
            assert!(!app.form.snapshot().has_errors());
            assert_eq!(app.status_message.as_deref(), Some("Form cleared"));
        }

        #[test]
        fn test_cancel_button_then_yes() {
            let mut app = app();
            type_str(&mut app, "Jo");
            app.form.focus_actions();
            press(&mut app, KeyCode::Down);
            assert_eq!(app.form.selected_button(), FormButton::Cancel);
            press(&mut app, KeyCode::Enter);
            assert!(app.form.prompter().pending_confirm().is_some());
            press(&mut app, KeyCode::Char('y'));
            assert_eq!(app.form.field(Field::FullName).value(), "");
        }
    }

    mod choices {
        use super::*;

        #[test]
        fn test_category_keys() {
            let mut app = app();
            app.form.focus(Field::Category);
            press(&mut app, KeyCode::Left);
            assert_eq!(app.form.field(Field::Category).value(), "Feedback");
            press(&mut app, KeyCode::Backspace);
            assert_eq!(app.form.field(Field::Category).value(), "");
            assert!(app.form.field(Field::Category).has_error());
        }

        #[test]
        fn test_method_keys() {
            let mut app = app();
            app.form.focus(Field::ContactMethod);
            press(&mut app, KeyCode::Char(' '));
            assert_eq!(app.form.selected_contact_method(), Some("Email"));
            press(&mut app, KeyCode::Right);
            assert_eq!(app.form.selected_contact_method(), Some("Email"));
            press(&mut app, KeyCode::Char(' '));
            assert_eq!(app.form.selected_contact_method(), Some("Phone"));
        }

        #[test]
        fn test_up_down_move_between_choice_fields() {
            let mut app = app();
            app.form.focus(Field::Category);
            press(&mut app, KeyCode::Down);
            assert_eq!(app.form.focused_field(), Some(Field::ContactMethod));
            press(&mut app, KeyCode::Up);
            assert_eq!(app.form.focused_field(), Some(Field::Category));
        }
    }
}
