//! Field rendering utilities for forms

use crate::state::FieldState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

/// What a field group shows inside its border
pub enum FieldContent<'a> {
    /// Free text; multi-line values are split on newlines
    Text,
    /// A selector cycling through `options`
    Select { options: &'a [String] },
    /// A radio row; `cursor` marks the radio under the keyboard
    Radio { options: &'a [String], cursor: usize },
}

/// Draw one labelled field group: border, value and inline error.
///
/// Single-line fields take one row, so `area` needs a height of 3.
pub fn draw_field_group(
    frame: &mut Frame,
    area: Rect,
    state: &FieldState,
    content: FieldContent,
    is_active: bool,
) {
    let border_color = if state.has_error() {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    // A filled field keeps its label raised
    let title_style = if state.has_value() {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(border_color)
    };

    // Columns inside the border
    let width = usize::from(area.width.saturating_sub(2));
    let lines = match content {
        FieldContent::Text if state.field().is_multiline() => {
            text_lines(state.value(), is_active)
        }
        FieldContent::Text => vec![single_line(state.value(), width, is_active)],
        FieldContent::Select { options } => vec![select_line(state.value(), options, is_active)],
        FieldContent::Radio { options, cursor } => {
            vec![radio_line(state.value(), options, cursor, is_active)]
        }
    };

    let mut title = vec![Span::styled(
        format!(" {} ", state.field().label()),
        title_style,
    )];
    if state.aria_invalid() == Some(false) {
        title.push(Span::styled("✓ ", Style::default().fg(Color::Green)));
    }

    let mut block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    // Error on the bottom border
    if state.has_error() {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {} ", state.error_message()),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

fn placeholder() -> Line<'static> {
    Line::from(Span::styled(
        "(empty)",
        Style::default().fg(Color::DarkGray),
    ))
}

/// One row of text; a value wider than the field shows its tail
fn single_line(value: &str, width: usize, is_active: bool) -> Line<'static> {
    if value.is_empty() && !is_active {
        return placeholder();
    }

    let room = if is_active {
        width.saturating_sub(1)
    } else {
        width
    };
    let len = value.chars().count();
    let shown = if len > room {
        let tail: String = value.chars().skip(len + 1 - room.max(1)).collect();
        format!("…{tail}")
    } else {
        value.to_string()
    };

    let mut spans = vec![Span::raw(shown)];
    if is_active {
        spans.push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

fn text_lines(value: &str, is_active: bool) -> Vec<Line<'static>> {
    if value.is_empty() && !is_active {
        return vec![placeholder()];
    }

    let mut lines: Vec<Line> = value
        .split('\n')
        .map(|l| Line::from(l.to_string()))
        .collect();
    if is_active {
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
        }
    }
    lines
}

fn select_line<'a>(value: &'a str, options: &[String], is_active: bool) -> Line<'a> {
    let arrow_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let selected = if value.is_empty() {
        Span::styled(
            format!("-- choose one of {} --", options.len()),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::raw(value)
    };

    Line::from(vec![
        Span::styled("◂ ", arrow_style),
        selected,
        Span::styled(" ▸", arrow_style),
    ])
}

fn radio_line<'a>(value: &str, options: &'a [String], cursor: usize, is_active: bool) -> Line<'a> {
    let mut spans = Vec::with_capacity(options.len() * 2);
    for (idx, option) in options.iter().enumerate() {
        let mark = if option == value { "(•) " } else { "( ) " };
        let style = if is_active && idx == cursor {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!("{mark}{option}"), style));
        spans.push(Span::raw("   "));
    }
    Line::from(spans)
}

/// Draw a dim single-line hint
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
