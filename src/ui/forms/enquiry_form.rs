//! Enquiry form rendering

use super::field_renderer::{draw_field_group, draw_help_text, FieldContent};
use crate::platform::SUBMIT_SHORTCUT;
use crate::prompt::Prompter;
use crate::state::{Field, FormButton, FormController};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Height of a single-row field group (borders + value; the error sits on the bottom border)
const FIELD_HEIGHT: u16 = 3;

/// Draw every field of the enquiry form
pub fn draw_enquiry_form<P: Prompter>(frame: &mut Frame, area: Rect, form: &FormController<P>) {
    let form_focused = !form.is_buttons_row_active();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Enquiry ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT), // Full Name
            Constraint::Length(FIELD_HEIGHT), // Email
            Constraint::Length(FIELD_HEIGHT), // Contact Number
            Constraint::Length(FIELD_HEIGHT), // Category
            Constraint::Length(FIELD_HEIGHT), // Contact method
            Constraint::Min(5),               // Message
            Constraint::Length(1),            // Help text
        ])
        .margin(1)
        .split(area);

    let options = form.options();
    let focused = form.focused_field();

    for (idx, field) in Field::ALL.into_iter().enumerate() {
        let content = match field {
            Field::Category => FieldContent::Select {
                options: &options.categories,
            },
            Field::ContactMethod => FieldContent::Radio {
                options: &options.contact_methods,
                cursor: form.method_cursor(),
            },
            _ => FieldContent::Text,
        };
        draw_field_group(
            frame,
            chunks[idx],
            form.field(field),
            content,
            focused == Some(field),
        );
    }

    draw_help_text(
        frame,
        chunks[6],
        &format!("Tab: next field  {SUBMIT_SHORTCUT}: submit  Esc: cancel"),
    );
}

/// Draw the Submit/Cancel panel
pub fn draw_action_panel<P: Prompter>(frame: &mut Frame, area: Rect, form: &FormController<P>) {
    let is_focused = form.is_buttons_row_active();
    let selected = form.selected_button();

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(BUTTON_HEIGHT), // Cancel
            Constraint::Min(0),
        ])
        .split(inner_area);

    let buttons = [
        (FormButton::Submit, Color::Green),
        (FormButton::Cancel, Color::Gray),
    ];
    for (idx, (button, accent)) in buttons.into_iter().enumerate() {
        render_action_button(
            frame,
            button_chunks[idx],
            button.label(),
            is_focused && selected == button,
            Some(accent),
        );
    }
}
