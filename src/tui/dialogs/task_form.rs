//! Add/edit task form

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::DialogResult;
use crate::task::{Priority, TaskDraft};
use crate::tui::components::render_text_field;
use crate::tui::styles::Theme;

const FIELD_DESCRIPTION: usize = 0;
const FIELD_PRIORITY: usize = 1;
const FIELD_DUE_DATE: usize = 2;
const FIELD_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    /// Editing the task at this 0-based index
    Edit(usize),
}

pub struct TaskFormDialog {
    mode: FormMode,
    description: Input,
    priority: Priority,
    due_date: Input,
    focused_field: usize,
    error_message: Option<String>,
}

impl TaskFormDialog {
    pub fn add() -> Self {
        Self::with_draft(FormMode::Add, TaskDraft::default())
    }

    pub fn edit(index: usize, current: TaskDraft) -> Self {
        Self::with_draft(FormMode::Edit(index), current)
    }

    fn with_draft(mode: FormMode, draft: TaskDraft) -> Self {
        Self {
            mode,
            description: Input::new(draft.description),
            priority: draft.priority,
            due_date: Input::new(draft.due_date),
            focused_field: FIELD_DESCRIPTION,
            error_message: None,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> TaskDraft {
        TaskDraft::new(self.description.value(), self.priority, self.due_date.value())
    }

    pub fn error(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Show a validation error; the typed values stay in place for correction.
    pub fn set_error(&mut self, error: String) {
        self.error_message = Some(error);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<TaskDraft> {
        match key.code {
            KeyCode::Esc => DialogResult::Cancel,
            KeyCode::Enter => {
                self.error_message = None;
                DialogResult::Submit(self.draft())
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focused_field = (self.focused_field + 1) % FIELD_COUNT;
                DialogResult::Continue
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focused_field = (self.focused_field + FIELD_COUNT - 1) % FIELD_COUNT;
                DialogResult::Continue
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
                if self.focused_field == FIELD_PRIORITY =>
            {
                self.priority = if key.code == KeyCode::Left {
                    self.priority.cycle().cycle()
                } else {
                    self.priority.cycle()
                };
                DialogResult::Continue
            }
            _ => {
                let input = match self.focused_field {
                    FIELD_DESCRIPTION => Some(&mut self.description),
                    FIELD_DUE_DATE => Some(&mut self.due_date),
                    _ => None,
                };
                if let Some(input) = input {
                    input.handle_event(&Event::Key(key));
                    self.error_message = None;
                }
                DialogResult::Continue
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = super::centered_rect(area, 64, 13);

        frame.render_widget(Clear, dialog_area);

        let title = match self.mode {
            FormMode::Add => " New Task ".to_string(),
            FormMode::Edit(index) => format!(" Edit Task #{} ", index + 1),
        };
        let block = Block::default()
            .style(Style::default().bg(theme.background))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(title)
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(1),
            ])
            .split(inner);

        render_text_field(
            frame,
            chunks[0],
            "Description:",
            &self.description,
            self.focused_field == FIELD_DESCRIPTION,
            Some("What needs doing?"),
            theme,
        );

        self.render_priority(frame, chunks[1], theme);

        render_text_field(
            frame,
            chunks[2],
            "Due date:",
            &self.due_date,
            self.focused_field == FIELD_DUE_DATE,
            Some("DD/MM/YYYY"),
            theme,
        );

        if let Some(error) = &self.error_message {
            let error_line = Line::from(Span::styled(
                format!("⚠ {}", error),
                Style::default().fg(theme.error),
            ));
            frame.render_widget(Paragraph::new(error_line), chunks[3]);
        }

        let hint = Line::from(vec![
            Span::styled("Tab", Style::default().fg(theme.hint)),
            Span::raw(" next field  "),
            Span::styled("←/→", Style::default().fg(theme.hint)),
            Span::raw(" priority  "),
            Span::styled("Enter", Style::default().fg(theme.hint)),
            Span::raw(" save  "),
            Span::styled("Esc", Style::default().fg(theme.hint)),
            Span::raw(" cancel"),
        ]);
        frame.render_widget(Paragraph::new(hint), chunks[4]);
    }

    fn render_priority(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let is_focused = self.focused_field == FIELD_PRIORITY;
        let label_style = if is_focused {
            Style::default().fg(theme.accent).underlined()
        } else {
            Style::default().fg(theme.text)
        };

        let mut spans = vec![Span::styled("Priority:", label_style), Span::raw(" ")];
        for (idx, priority) in Priority::ALL.iter().enumerate() {
            let is_selected = *priority == self.priority;
            let style = if is_selected {
                Style::default().fg(theme.priority_color(*priority)).bold()
            } else {
                Style::default().fg(theme.dimmed)
            };

            if idx > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(if is_selected { "● " } else { "○ " }, style));
            spans.push(Span::styled(priority.label(), style));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(dialog: &mut TaskFormDialog, text: &str) {
        for c in text.chars() {
            dialog.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_add_form_starts_empty_with_medium_priority() {
        let dialog = TaskFormDialog::add();
        assert_eq!(dialog.mode(), FormMode::Add);
        assert_eq!(dialog.draft(), TaskDraft::default());
        assert_eq!(dialog.draft().priority, Priority::Medium);
    }

    #[test]
    fn test_edit_form_is_prefilled() {
        let current = TaskDraft::new("Buy milk", Priority::Low, "01/01/2025");
        let dialog = TaskFormDialog::edit(3, current.clone());
        assert_eq!(dialog.mode(), FormMode::Edit(3));
        assert_eq!(dialog.draft(), current);
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut dialog = TaskFormDialog::add();
        type_text(&mut dialog, "Write report");
        dialog.handle_key(key(KeyCode::Tab));
        dialog.handle_key(key(KeyCode::Tab));
        type_text(&mut dialog, "10/06/2024");

        let draft = dialog.draft();
        assert_eq!(draft.description, "Write report");
        assert_eq!(draft.due_date, "10/06/2024");
    }

    #[test]
    fn test_space_in_description_is_text() {
        let mut dialog = TaskFormDialog::add();
        type_text(&mut dialog, "a b");
        assert_eq!(dialog.draft().description, "a b");
        assert_eq!(dialog.draft().priority, Priority::Medium);
    }

    #[test]
    fn test_priority_cycles_when_focused() {
        let mut dialog = TaskFormDialog::add();
        dialog.handle_key(key(KeyCode::Tab));

        dialog.handle_key(key(KeyCode::Right));
        assert_eq!(dialog.draft().priority, Priority::Low);
        dialog.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(dialog.draft().priority, Priority::High);
        dialog.handle_key(key(KeyCode::Left));
        assert_eq!(dialog.draft().priority, Priority::Low);
    }

    #[test]
    fn test_backtab_wraps() {
        let mut dialog = TaskFormDialog::add();
        dialog.handle_key(key(KeyCode::BackTab));
        type_text(&mut dialog, "01/01/2025");
        assert_eq!(dialog.draft().due_date, "01/01/2025");
        assert_eq!(dialog.draft().description, "");
    }

    #[test]
    fn test_enter_submits_draft() {
        let mut dialog = TaskFormDialog::add();
        type_text(&mut dialog, "Task");
        match dialog.handle_key(key(KeyCode::Enter)) {
            DialogResult::Submit(draft) => assert_eq!(draft.description, "Task"),
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn test_esc_cancels() {
        let mut dialog = TaskFormDialog::add();
        assert!(matches!(
            dialog.handle_key(key(KeyCode::Esc)),
            DialogResult::Cancel
        ));
    }

    #[test]
    fn test_error_cleared_on_typing() {
        let mut dialog = TaskFormDialog::add();
        dialog.set_error("Invalid date".to_string());
        assert_eq!(dialog.error(), Some("Invalid date"));
        type_text(&mut dialog, "x");
        assert!(dialog.error().is_none());
    }
}
