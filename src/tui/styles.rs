//! TUI theme and styling

use ratatui::style::Color;

use crate::task::Priority;

#[derive(Debug, Clone)]
pub struct Theme {
    // Background and borders
    pub background: Color,
    pub border: Color,
    pub selection: Color,
    pub task_selection: Color,

    // Text colors
    pub title: Color,
    pub text: Color,
    pub dimmed: Color,
    pub hint: Color,

    // Priority colors
    pub priority_high: Color,
    pub priority_medium: Color,
    pub priority_low: Color,

    // UI elements
    pub error: Color,
    pub warning: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::phosphor()
    }
}

impl Theme {
    /// Dark background, green accents.
    pub fn phosphor() -> Self {
        Self {
            background: Color::Rgb(16, 20, 18),
            border: Color::Rgb(45, 70, 55),
            selection: Color::Rgb(30, 50, 40),
            task_selection: Color::Rgb(60, 60, 60),

            title: Color::Rgb(57, 255, 20),
            text: Color::Rgb(180, 255, 180),
            dimmed: Color::Rgb(80, 120, 90),
            hint: Color::Rgb(100, 160, 120),

            priority_high: Color::Rgb(0xFF, 0x57, 0x33),
            priority_medium: Color::Rgb(0xFF, 0xC3, 0x00),
            priority_low: Color::Rgb(0x33, 0xCC, 0x33),

            error: Color::Rgb(255, 100, 80),
            warning: Color::Rgb(255, 180, 60),
            accent: Color::Rgb(57, 255, 20),
        }
    }

    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::High => self.priority_high,
            Priority::Medium => self.priority_medium,
            Priority::Low => self.priority_low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_colors_are_distinct() {
        let theme = Theme::default();
        assert_eq!(theme.priority_color(Priority::High), Color::Rgb(255, 87, 51));
        assert_eq!(theme.priority_color(Priority::Medium), Color::Rgb(255, 195, 0));
        assert_eq!(theme.priority_color(Priority::Low), Color::Rgb(51, 204, 51));
    }
}
