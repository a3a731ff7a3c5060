//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use components::{render_alert_dialog, render_confirm_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (form_area, action_area) = layout::create_layout(frame.area());

    forms::draw_enquiry_form(frame, form_area, &app.form);
    forms::draw_action_panel(frame, action_area, &app.form);

    layout::draw_status_bar(frame, app);

    // Dialogs go on top of everything else
    let prompter = app.form.prompter();
    if let Some(message) = prompter.current_alert() {
        render_alert_dialog(frame, message);
    } else if let Some(pending) = prompter.pending_confirm() {
        render_confirm_dialog(frame, pending);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;
    use crate::state::{Field, BLANK_FORM_ALERT};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_to_string(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_renders_all_field_labels() {
        let app = App::new(&FormConfig::default());
        let screen = render(&app);
        for field in Field::ALL {
            assert!(screen.contains(field.label()), "missing {}", field.label());
        }
        assert!(screen.contains("Submit"));
        assert!(screen.contains("Cancel"));
        assert!(screen.contains("^C:quit"));
    }

    #[test]
    fn test_renders_inline_error_after_blur() {
        let mut app = App::new(&FormConfig::default());
        press(&mut app, KeyCode::Tab);
        let screen = render(&app);
        assert!(screen.contains("Full Name is required"));
        assert!(!screen.contains("Email is required"));
    }

    #[test]
    fn test_renders_alert_overlay() {
        let mut app = App::new(&FormConfig::default());
        press(&mut app, KeyCode::Enter);
        let screen = render(&app);
        assert!(screen.contains(BLANK_FORM_ALERT));
        assert!(screen.contains("to close"));
    }

    #[test]
    fn test_renders_confirm_overlay() {
        let mut app = App::new(&FormConfig::default());
        press(&mut app, KeyCode::Char('J'));
        press(&mut app, KeyCode::Esc);
        let screen = render(&app);
        assert!(screen.contains("▸ No, keep editing"));
        assert!(screen.contains("Yes, discard"));
    }

    #[test]
    fn test_summary_dialog_shows_long_values_in_full() {
        let mut app = App::new(&FormConfig::default());
        let email = format!("{}@example.com", "a".repeat(55));
        app.form.input(Field::FullName, "Jo");
        app.form.input(Field::Email, &email);
        app.form.input(Field::Contact, "12345");
        app.form.select_category(Some("Billing"));
        app.form.select_contact_method("Phone");
        app.form
            .input(Field::Message, "Hi   there, please call me back after five");
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));

        let screen = render(&app);
        assert!(screen.contains("Email               :"));
        assert!(screen.contains(&format!("{}@ex", "a".repeat(55))));
        assert!(screen.contains("ample.com"));
        assert!(screen.contains("Message             : Hi   there, please call me back"));
        assert!(screen.contains("after five"));
    }

    #[test]
    fn test_long_value_does_not_hide_error() {
        let mut app = App::new(&FormConfig::default());
        app.form.focus(Field::Email);
        for _ in 0..90 {
            press(&mut app, KeyCode::Char('x'));
        }
        press(&mut app, KeyCode::Tab);

        assert!(app.form.field(Field::Email).has_error());
        let screen = render(&app);
        assert!(screen.contains("Please enter a valid email address"));
    }

    #[test]
    fn test_renders_radio_choices() {
        let app = App::new(&FormConfig::default());
        let screen = render(&app);
        assert!(screen.contains("( ) Email"));
        assert!(screen.contains("( ) Phone"));
    }
}
