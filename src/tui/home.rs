//! Home view - task list, selection and dialogs

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use std::collections::VecDeque;
use std::path::PathBuf;
use tracing::{error, info};

use super::app::Action;
use super::components::HelpOverlay;
use super::dialogs::{ConfirmDialog, DialogResult, FormMode, InfoDialog, TaskFormDialog};
use super::styles::Theme;
use crate::config::Config;
use crate::task::{export, CsvHeader, Task, TaskDraft, TaskError, TaskStore};


/// The parts of [`Config`] the home view needs.
#[derive(Debug, Clone)]
pub struct HomeSettings {
    pub export_path: PathBuf,
    pub export_header: CsvHeader,
    pub due_window_days: i64,
    pub notify_on_startup: bool,
}

impl HomeSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            export_path: config.export_path(None),
            export_header: config.export.header,
            due_window_days: config.notifications.due_window_days,
            notify_on_startup: config.notifications.on_startup,
        }
    }
}

pub struct HomeView {
    store: TaskStore,
    settings: HomeSettings,
    today: NaiveDate,

    // UI state
    cursor: usize,
    status_message: Option<String>,

    // Dialogs
    show_help: bool,
    form_dialog: Option<TaskFormDialog>,
    confirm_dialog: Option<ConfirmDialog>,
    info_dialog: Option<InfoDialog>,
    /// Shown one after another as each info dialog is dismissed
    pending_notices: VecDeque<InfoDialog>,
}

impl HomeView {
    pub fn new(store: TaskStore, settings: HomeSettings, today: NaiveDate) -> Self {
        let mut view = Self {
            store,
            settings,
            today,
            cursor: 0,
            status_message: None,
            show_help: false,
            form_dialog: None,
            confirm_dialog: None,
            info_dialog: None,
            pending_notices: VecDeque::new(),
        };

        if !view.store.skipped().is_empty() {
            view.status_message = Some(format!(
                "Skipped {} malformed line(s) in {}",
                view.store.skipped().len(),
                view.store.path().display()
            ));
        }

        if view.settings.notify_on_startup {
            view.check_due_soon();
        }

        view
    }

    pub fn has_dialog(&self) -> bool {
        self.show_help
            || self.form_dialog.is_some()
            || self.confirm_dialog.is_some()
            || self.info_dialog.is_some()
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Queue one notification per due-soon task, in list order.
    pub fn check_due_soon(&mut self) {
        let due = self
            .store
            .due_within(self.today, self.settings.due_window_days);
        let total = due.len();

        let mut notices: VecDeque<InfoDialog> = due
            .iter()
            .enumerate()
            .map(|(idx, task)| {
                let title = format!("Due Soon ({}/{})", idx + 1, total);
                InfoDialog::new(&title, &task.due_notice(self.today))
            })
            .collect();

        if let Some(first) = notices.pop_front() {
            info!("{} tasks due soon", total);
            self.info_dialog = Some(first);
            self.pending_notices = notices;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        // Handle dialog input first
        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return None;
        }

        if let Some(dialog) = &mut self.info_dialog {
            if let DialogResult::Cancel = dialog.handle_key(key) {
                self.info_dialog = self.pending_notices.pop_front();
            }
            return None;
        }

        if let Some(dialog) = &mut self.form_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => {
                    self.form_dialog = None;
                }
                DialogResult::Submit(draft) => {
                    let mode = dialog.mode();
                    match self.apply_form(mode, &draft) {
                        Ok(()) => self.form_dialog = None,
                        Err(e) => {
                            if let Some(dialog) = &mut self.form_dialog {
                                dialog.set_error(e.to_string());
                            }
                        }
                    }
                }
            }
            return None;
        }

        if let Some(dialog) = &mut self.confirm_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => {
                    self.confirm_dialog = None;
                }
                DialogResult::Submit(index) => {
                    self.confirm_dialog = None;
                    self.remove_task(index);
                }
            }
            return None;
        }

        match key.code {
            KeyCode::Char('q') => return self.save_and_quit(),
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Char('n') => {
                self.form_dialog = Some(TaskFormDialog::add());
            }
            KeyCode::Char('e') | KeyCode::Enter => match self.selected_task() {
                Some(task) => {
                    self.form_dialog =
                        Some(TaskFormDialog::edit(self.cursor, TaskDraft::from(task)));
                }
                None => self.warn("Select a task to edit!"),
            },
            KeyCode::Char('d') | KeyCode::Delete => match self.selected_task() {
                Some(task) => {
                    self.confirm_dialog =
                        Some(ConfirmDialog::remove_task(self.cursor, &task.description));
                }
                None => self.warn("Select a task to remove!"),
            },
            KeyCode::Char('x') => self.export_csv(),
            KeyCode::Char('s') => {
                if let Err(e) = self.save() {
                    self.warn(&format!("Could not save tasks: {}", e));
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::PageUp => self.move_cursor(-10),
            KeyCode::PageDown => self.move_cursor(10),
            KeyCode::Home | KeyCode::Char('g') => self.cursor = 0,
            KeyCode::End | KeyCode::Char('G') => {
                self.cursor = self.store.len().saturating_sub(1);
            }
            _ => {}
        }

        None
    }

    fn selected_task(&self) -> Option<&Task> {
        self.store.get(self.cursor)
    }

    fn warn(&mut self, message: &str) {
        self.info_dialog = Some(InfoDialog::warning("Warning", message));
    }

    fn move_cursor(&mut self, delta: i32) {
        let items = self.store.len();
        if items == 0 {
            return;
        }

        self.cursor = if delta < 0 {
            self.cursor.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            (self.cursor + delta as usize).min(items - 1)
        };
    }

    fn clamp_cursor(&mut self) {
        if self.cursor >= self.store.len() {
            self.cursor = self.store.len().saturating_sub(1);
        }
    }

    fn apply_form(&mut self, mode: FormMode, draft: &TaskDraft) -> Result<(), TaskError> {
        match mode {
            FormMode::Add => {
                let task = self.store.add_draft(draft)?;
                self.status_message = Some(format!("Added '{}'", task.description));
            }
            FormMode::Edit(index) => {
                let task = self.store.edit(index, draft)?;
                self.status_message = Some(format!("Updated '{}'", task.description));
            }
        }
        self.cursor = self.store.len() - 1;
        Ok(())
    }

    fn remove_task(&mut self, index: usize) {
        match self.store.remove(index) {
            Ok(task) => {
                self.status_message = Some(format!("Removed '{}'", task.description));
                self.clamp_cursor();
            }
            Err(e) => self.warn(&e.to_string()),
        }
    }

    fn export_csv(&mut self) {
        let path = &self.settings.export_path;
        match export::export(self.store.list(), self.settings.export_header, path) {
            Ok(()) => {
                let message = format!("Tasks exported to '{}'!", path.display());
                self.info_dialog = Some(InfoDialog::new("Success", &message));
            }
            Err(e) => {
                error!("CSV export failed: {}", e);
                self.warn(&format!("Export failed: {}", e));
            }
        }
    }

    fn save(&mut self) -> Result<(), TaskError> {
        self.store.save()?;
        self.status_message = Some(format!(
            "Saved {} tasks to {}",
            self.store.len(),
            self.store.path().display()
        ));
        Ok(())
    }

    fn save_and_quit(&mut self) -> Option<Action> {
        match self.save() {
            Ok(()) => {
                info!("Saved {} tasks on exit", self.store.len());
                Some(Action::Quit)
            }
            Err(e) => {
                error!("Failed to save tasks on exit: {}", e);
                self.warn(&format!("Could not save tasks: {}", e));
                None
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        // Layout: list + status message + key bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_list(frame, chunks[0], theme);
        self.render_status_message(frame, chunks[1], theme);
        self.render_status_bar(frame, chunks[2], theme);

        // Render dialogs on top
        if self.show_help {
            HelpOverlay::render(frame, area, theme);
        }

        if let Some(dialog) = &self.form_dialog {
            dialog.render(frame, area, theme);
        }

        if let Some(dialog) = &self.confirm_dialog {
            dialog.render(frame, area, theme);
        }

        if let Some(dialog) = &self.info_dialog {
            dialog.render(frame, area, theme);
        }
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" 📝 Task Manager ({}) ", self.store.len()))
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.store.is_empty() {
            let empty_text = vec![
                Line::from(""),
                Line::from("No tasks yet").style(Style::default().fg(theme.dimmed)),
                Line::from(""),
                Line::from("Press 'n' to add one").style(Style::default().fg(theme.hint)),
            ];
            let para = Paragraph::new(empty_text).alignment(Alignment::Center);
            frame.render_widget(para, inner);
            return;
        }

        let list_items: Vec<ListItem> = self
            .store
            .list()
            .iter()
            .enumerate()
            .map(|(idx, task)| self.render_item(idx, task, idx == self.cursor, theme))
            .collect();

        let list =
            List::new(list_items).highlight_style(Style::default().bg(theme.task_selection));
        let mut state = ListState::default().with_selected(Some(self.cursor));

        frame.render_stateful_widget(list, inner, &mut state);
    }

    fn render_item(
        &self,
        idx: usize,
        task: &Task,
        is_selected: bool,
        theme: &Theme,
    ) -> ListItem<'static> {
        let color = theme.priority_color(task.priority);
        let style = if is_selected {
            Style::default().fg(color).bold()
        } else {
            Style::default().fg(color)
        };

        let marker = if task.is_due_within(self.today, self.settings.due_window_days) {
            Span::styled("⚠ ", Style::default().fg(theme.warning))
        } else {
            Span::raw("  ")
        };

        ListItem::new(Line::from(vec![
            marker,
            Span::styled(
                format!(
                    "{}. {} | Priority: {} | Due: {}",
                    idx + 1,
                    task.description,
                    task.priority.label(),
                    task.due_date_text()
                ),
                style,
            ),
        ]))
    }

    fn render_status_message(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if let Some(message) = &self.status_message {
            let para =
                Paragraph::new(format!(" {}", message)).style(Style::default().fg(theme.hint));
            frame.render_widget(para, area);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let key_style = Style::default().fg(theme.accent).bold();
        let desc_style = Style::default().fg(theme.dimmed);
        let sep_style = Style::default().fg(theme.border);

        let mut spans = Vec::new();
        let keys = [
            ("j/k", "Navigate"),
            ("n", "New"),
            ("e", "Edit"),
            ("d", "Remove"),
            ("x", "Export CSV"),
            ("?", "Help"),
            ("q", "Save & Quit"),
        ];
        for (idx, (key, desc)) in keys.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("│", sep_style));
            }
            spans.push(Span::styled(format!(" {}", key), key_style));
            spans.push(Span::styled(format!(" {} ", desc), desc_style));
        }

        let status =
            Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.selection));
        frame.render_widget(status, area);
    }
}
