//! # TitleBar Component
//!
//! Top status bar showing the current phase and the last status message.
//!
//! Purely presentational: it receives all data as props and has no
//! internal state.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Lockin [locked] | Ruled out Bram"`
//! 2. **Default**: `"Lockin [open]"`

use crate::core::selection::Phase;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub phase: Phase,
    /// Status message (e.g., "Locked in Aria", "Selection reset")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(phase: Phase, status_message: String) -> Self {
        Self {
            phase,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let phase_style = match self.phase {
            Phase::Open => Style::default().fg(Color::Cyan),
            Phase::Locked => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        };

        let mut spans = vec![
            Span::styled("Lockin ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("[{}]", self.phase), phase_style),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let text = render(&mut TitleBar::new(Phase::Locked, "Ruled out Bram".to_string()));
        assert!(text.contains("Lockin"));
        assert!(text.contains("[locked]"));
        assert!(text.contains("| Ruled out Bram"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let text = render(&mut TitleBar::new(Phase::Open, String::new()));
        assert!(text.contains("[open]"));
        assert!(!text.contains('|'));
    }
}
