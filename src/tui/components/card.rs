//! # Card Component
//!
//! A single character card. Implements ratatui's `Widget` rather than
//! `Component` so the grid can render it into a `ScrollView` buffer.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::catalog::Item;

pub const CARD_WIDTH: u16 = 18;
pub const CARD_HEIGHT: u16 = 5;

pub const LOCKED_MARKER: &str = "★ LOCKED";
pub const EXCLUDED_MARKER: &str = "✗ ruled out";

pub struct Card<'a> {
    pub item: &'a Item,
    pub locked: bool,
    pub excluded: bool,
    pub focused: bool,
}

impl Card<'_> {
    fn styles(&self) -> (Style, Style) {
        let (border, text) = if self.locked {
            let s = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
            (s, s)
        } else if self.excluded {
            let s = Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM);
            (s, s.add_modifier(Modifier::CROSSED_OUT))
        } else if self.focused {
            (Style::default().fg(Color::Cyan), Style::default().fg(Color::White))
        } else {
            (Style::default().fg(Color::Gray), Style::default().fg(Color::White))
        };
        (border, text)
    }
}

impl Widget for Card<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border_style, text_style) = self.styles();
        let inner_width = area.width.saturating_sub(2) as usize;

        let mut title_style = text_style;
        if self.focused {
            title_style = title_style.add_modifier(Modifier::REVERSED);
        }

        let block = Block::bordered()
            .border_type(if self.focused {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(border_style)
            .title(Span::styled(
                truncate_to_width(&self.item.name, inner_width),
                title_style,
            ));

        let marker = if self.locked {
            LOCKED_MARKER
        } else if self.excluded {
            EXCLUDED_MARKER
        } else {
            ""
        };

        let lines = vec![
            Line::from(Span::styled(
                truncate_to_width(&self.item.image, inner_width),
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
            Line::from(Span::styled(marker, text_style)),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

/// Truncate `s` to at most `max_width` terminal cells, ending in "…" when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
