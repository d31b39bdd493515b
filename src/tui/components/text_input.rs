//! Labelled single-line text field

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tui_input::Input;

use crate::tui::styles::Theme;

/// Labels are padded to this many columns so form values line up.
pub const LABEL_WIDTH: usize = 13;

/// Renders a text input field with a label and, when focused, a block cursor.
///
/// An empty field shows its placeholder dimmed, with the cursor in front of it
/// when focused.
pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &Input,
    is_focused: bool,
    placeholder: Option<&str>,
    theme: &Theme,
) {
    let label_style = if is_focused {
        Style::default().fg(theme.accent).underlined()
    } else {
        Style::default().fg(theme.text)
    };
    let value_style = if is_focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text)
    };
    let cursor_style = Style::default().fg(theme.background).bg(theme.accent);

    let mut spans = vec![
        Span::styled(label.to_string(), label_style),
        Span::raw(" ".repeat(LABEL_WIDTH.saturating_sub(label.chars().count()) + 1)),
    ];

    let value = input.value();
    if value.is_empty() {
        if is_focused {
            spans.push(Span::styled(" ", cursor_style));
        }
        if let Some(placeholder_text) = placeholder {
            spans.push(Span::styled(
                placeholder_text.to_string(),
                Style::default().fg(theme.dimmed),
            ));
        }
    } else if is_focused {
        let cursor_pos = input.visual_cursor();
        let before: String = value.chars().take(cursor_pos).collect();
        let at_cursor: String = value
            .chars()
            .nth(cursor_pos)
            .map(String::from)
            .unwrap_or_else(|| " ".to_string());
        let after: String = value.chars().skip(cursor_pos + 1).collect();

        spans.push(Span::styled(before, value_style));
        spans.push(Span::styled(at_cursor, cursor_style));
        spans.push(Span::styled(after, value_style));
    } else {
        spans.push(Span::styled(value.to_string(), value_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
