//! Main TUI application

use anyhow::Result;
use chrono::NaiveDate;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use std::time::Duration;
use tracing::{debug, info};

use super::home::{HomeSettings, HomeView};
use super::styles::Theme;
use crate::config::Config;
use crate::task::TaskStore;

pub struct App {
    home: HomeView,
    should_quit: bool,
    theme: Theme,
}

impl App {
    pub fn new(config: &Config, store: TaskStore, today: NaiveDate) -> Self {
        let home = HomeView::new(store, HomeSettings::from_config(config), today);

        Self {
            home,
            should_quit: false,
            theme: Theme::default(),
        }
    }

    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        // Initial render
        terminal.clear()?;
        terminal.draw(|f| self.render(f))?;

        loop {
            if event::poll(Duration::from_millis(250))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key);
                    }
                    Event::Key(_) => continue,
                    _ => {}
                }
                terminal.draw(|f| self.render(f))?;
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.home.render(frame, area, &self.theme);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            if self.home.store().is_dirty() {
                info!("Quitting without saving pending changes");
            }
            self.should_quit = true;
            return;
        }

        if let Some(action) = self.home.handle_key(key) {
            debug!("Home view action: {:?}", action);
            match action {
                Action::Quit => self.should_quit = true,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::StoreOptions;
    use tempfile::TempDir;

    fn test_app(temp: &TempDir) -> App {
        let mut config = Config::default();
        config.notifications.on_startup = false;
        config.export.path = temp.path().join("tarefas.csv");
        let store = TaskStore::open(StoreOptions::new(temp.path().join("tarefas.txt"))).unwrap();
        App::new(&config, store, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap())
    }

    #[test]
    fn test_action_enum() {
        assert_eq!(Action::Quit, Action::Quit);
        assert_eq!(Action::Quit.clone(), Action::Quit);
    }

    #[test]
    fn test_ctrl_c_quits_without_saving() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

        assert!(app.should_quit);
        assert!(!temp.path().join("tarefas.txt").exists());
    }

    #[test]
    fn test_q_saves_and_quits() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);

        app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));

        assert!(app.should_quit);
        assert!(temp.path().join("tarefas.txt").exists());
    }

    #[test]
    fn test_other_keys_keep_running() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);

        app.handle_key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE));

        assert!(!app.should_quit);
    }
}
