//! Blocking message dialog for notices, warnings and errors

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use unicode_width::UnicodeWidthStr;

use super::DialogResult;
use crate::tui::styles::Theme;

const DIALOG_WIDTH: u16 = 60;
/// Text width inside the borders and the one-column margin.
const MESSAGE_WIDTH: usize = DIALOG_WIDTH as usize - 4;

/// Rows `message` takes once wrapped to `width` columns. Word wrapping can
/// need a little more, which the dialog's spare rows absorb.
fn wrapped_line_count(message: &str, width: usize) -> u16 {
    message
        .lines()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum::<usize>() as u16
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoKind {
    Notice,
    Warning,
}

pub struct InfoDialog {
    title: String,
    message: String,
    kind: InfoKind,
}

impl InfoDialog {
    pub fn new(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            kind: InfoKind::Notice,
        }
    }

    pub fn warning(title: &str, message: &str) -> Self {
        Self {
            kind: InfoKind::Warning,
            ..Self::new(title, message)
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> InfoKind {
        self.kind
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<()> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => DialogResult::Cancel,
            _ => DialogResult::Continue,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let line_count = wrapped_line_count(&self.message, MESSAGE_WIDTH);
        let dialog_area = super::centered_rect(area, DIALOG_WIDTH, (line_count + 6).max(9));

        frame.render_widget(Clear, dialog_area);

        let color = match self.kind {
            InfoKind::Notice => theme.border,
            InfoKind::Warning => theme.warning,
        };
        let block = Block::default()
            .style(Style::default().bg(theme.background))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", self.title))
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(1), Constraint::Length(2)])
            .split(inner);

        let message = Paragraph::new(&*self.message)
            .style(Style::default().fg(theme.text))
            .wrap(Wrap { trim: true });
        frame.render_widget(message, chunks[0]);

        let button = Line::from(vec![Span::styled(
            "[OK]",
            Style::default().fg(theme.accent).bold(),
        )]);

        frame.render_widget(
            Paragraph::new(button).alignment(Alignment::Center),
            chunks[1],
        );
    }
}
