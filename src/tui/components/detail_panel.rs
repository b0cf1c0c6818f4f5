//! # DetailPanel Component
//!
//! Side panel describing the locked character, or the focused one while
//! nothing is locked yet. Stateless: everything comes in as props.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::core::catalog::Item;
use crate::tui::component::Component;
use crate::tui::components::card::truncate_to_width;

pub struct DetailPanel<'a> {
    /// The locked item, if a lock has been made.
    pub locked: Option<&'a Item>,
    /// The item under the cursor.
    pub focused: Option<&'a Item>,
    pub excluded_count: usize,
    pub catalog_len: usize,
}

impl DetailPanel<'_> {
    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let (heading, heading_style, item) = match (self.locked, self.focused) {
            (Some(item), _) => (
                "Locked in",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                Some(item),
            ),
            (None, focused) => ("Looking at", Style::default().fg(Color::Cyan), focused),
        };

        let Some(item) = item else {
            lines.push(Line::from(Span::styled(
                "Nothing to show",
                Style::default().fg(Color::DarkGray),
            )));
            return lines;
        };

        lines.push(Line::from(Span::styled(heading, heading_style)));
        lines.push(Line::from(Span::styled(
            truncate_to_width(&item.name, width),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            truncate_to_width(&item.image, width),
            Style::default().fg(Color::DarkGray),
        )));

        if let Some(description) = &item.description {
            lines.push(Line::default());
            for wrapped in textwrap::wrap(description, width.max(1)) {
                lines.push(Line::from(wrapped.into_owned()));
            }
        }

        lines.push(Line::default());
        if self.locked.is_some() {
            let remaining = self
                .catalog_len
                .saturating_sub(1)
                .saturating_sub(self.excluded_count);
            lines.push(Line::from(Span::styled(
                format!("{} ruled out, {} still in", self.excluded_count, remaining),
                Style::default().fg(Color::Gray),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to lock in",
                Style::default().fg(Color::Gray),
            )));
        }
        lines
    }
}

impl Component for DetailPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Details ")
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));
        // Borders plus horizontal padding
        let width = area.width.saturating_sub(4) as usize;
        let paragraph = Paragraph::new(self.lines(width)).block(block);
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(panel: &mut DetailPanel<'_>) -> String {
        let backend = TestBackend::new(34, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| panel.render(f, f.area())).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_open_phase_describes_focused_item() {
        let catalog = Catalog::builtin();
        let mut panel = DetailPanel {
            locked: None,
            focused: catalog.items().get(3),
            excluded_count: 0,
            catalog_len: catalog.len(),
        };
        let text = render(&mut panel);
        assert!(text.contains("Looking at"));
        assert!(text.contains("Dax"));
        assert!(text.contains("Enter to lock in"));
    }

    #[test]
    fn test_locked_phase_shows_counts() {
        let catalog = Catalog::builtin();
        let mut panel = DetailPanel {
            locked: catalog.items().first(),
            focused: catalog.items().get(3),
            excluded_count: 2,
            catalog_len: catalog.len(),
        };
        let text = render(&mut panel);
        assert!(text.contains("Locked in"));
        assert!(text.contains("Aria"));
        assert!(!text.contains("Dax"));
        assert!(text.contains("2 ruled out, 21 still in"));
    }

    #[test]
    fn test_description_wraps_to_panel_width() {
        let catalog = Catalog::builtin();
        let panel = DetailPanel {
            locked: catalog.items().first(),
            focused: None,
            excluded_count: 0,
            catalog_len: catalog.len(),
        };
        let lines = panel.lines(12);
        // The trailing count line is not wrapped
        let body = &lines[..lines.len() - 1];
        assert!(body.iter().all(|line| line.width() <= 12));
        assert!(lines.len() > 6);
    }

    #[test]
    fn test_nothing_to_show_on_empty_catalog() {
        let mut panel = DetailPanel {
            locked: None,
            focused: None,
            excluded_count: 0,
            catalog_len: 0,
        };
        assert!(render(&mut panel).contains("Nothing to show"));
    }
}
