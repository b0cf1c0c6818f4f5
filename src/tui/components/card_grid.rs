//! # CardGrid Component
//!
//! Scrollable, row-major grid of character cards.
//!
//! ## Responsibilities
//!
//! - Lay out fixed-size cards in as many columns as fit (or a configured count)
//! - Track keyboard focus and keep the focused card in view
//! - Hit testing for mouse hover and clicks
//!
//! ## Architecture
//!
//! `CardGrid` is a transient component (created each frame) that wraps
//! `&'a mut CardGridState` (persistent state) plus the catalog and selection
//! (props). The grid never changes the selection itself; activating a card
//! emits `GridEvent::Activate(index)` and the adapter turns that into a
//! core `Action`.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::catalog::Catalog;
use crate::core::selection::Selection;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::card::{CARD_HEIGHT, CARD_WIDTH, Card};
use crate::tui::event::TuiEvent;

/// Geometry of the grid as of the last render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: u16,
    pub item_count: usize,
    /// Screen area the grid was drawn into (including the scrollbar column).
    pub viewport: Rect,
}

impl GridLayout {
    pub fn compute(item_count: usize, viewport: Rect, fixed_columns: Option<u16>) -> Self {
        // One column is reserved for the vertical scrollbar
        let fit = (viewport.width.saturating_sub(1) / CARD_WIDTH).max(1);
        let columns = fixed_columns.map_or(fit, |n| n.clamp(1, fit));
        Self {
            columns,
            item_count,
            viewport,
        }
    }

    pub fn rows(&self) -> usize {
        self.item_count.div_ceil(self.columns.max(1) as usize)
    }

    /// Height of all card rows, saturating at what a buffer can address.
    pub fn content_height(&self) -> u16 {
        let height = self.rows().saturating_mul(CARD_HEIGHT as usize);
        u16::try_from(height).unwrap_or(u16::MAX)
    }

    pub fn content_size(&self) -> Size {
        Size::new(self.viewport.width.saturating_sub(1), self.content_height())
    }

    /// Card rectangle in content (scroll view) coordinates.
    ///
    /// `None` when the card would start or end past `u16::MAX`; in huge
    /// catalogs those cards stay reachable by keyboard but are not drawn.
    pub fn card_rect(&self, index: usize) -> Option<Rect> {
        let columns = self.columns.max(1) as usize;
        let x = (index % columns) * CARD_WIDTH as usize;
        let y = (index / columns).checked_mul(CARD_HEIGHT as usize)?;
        let x = u16::try_from(x).ok()?;
        let y = u16::try_from(y).ok()?;
        x.checked_add(CARD_WIDTH)?;
        y.checked_add(CARD_HEIGHT)?;
        Some(Rect::new(x, y, CARD_WIDTH, CARD_HEIGHT))
    }

    /// Which card (if any) is under screen cell (`column`, `row`).
    pub fn hit_test(&self, column: u16, row: u16, scroll_offset: Position) -> Option<usize> {
        if !self.viewport.contains(Position::new(column, row)) {
            return None;
        }
        let x = (column - self.viewport.x) as usize + scroll_offset.x as usize;
        let y = (row - self.viewport.y) as usize + scroll_offset.y as usize;
        let col = x / CARD_WIDTH as usize;
        if col >= self.columns as usize {
            return None;
        }
        let index = (y / CARD_HEIGHT as usize) * self.columns as usize + col;
        (index < self.item_count).then_some(index)
    }
}

/// Events emitted by the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    /// The card at this catalog position was activated (Enter/Space or click).
    Activate(usize),
}

/// Focus and scroll state for the grid.
/// Must be persisted in the parent TuiState.
pub struct CardGridState {
    pub focused: usize,
    pub scroll_state: ScrollViewState,
    pub layout: GridLayout,
}

impl CardGridState {
    pub fn new(item_count: usize) -> Self {
        Self {
            focused: 0,
            scroll_state: ScrollViewState::default(),
            layout: GridLayout {
                columns: 1,
                item_count,
                viewport: Rect::default(),
            },
        }
    }

    fn move_focus(&mut self, event: &TuiEvent) {
        let count = self.layout.item_count;
        if count == 0 {
            return;
        }
        let columns = self.layout.columns as usize;
        let focused = self.focused;
        self.focused = match event {
            TuiEvent::CursorLeft => focused.saturating_sub(1),
            TuiEvent::CursorRight => (focused + 1).min(count - 1),
            TuiEvent::CursorUp if focused >= columns => focused - columns,
            TuiEvent::CursorDown if focused + columns < count => focused + columns,
            _ => focused,
        };
        self.scroll_to_focused();
    }

    /// Scroll so the focused card is fully visible.
    pub fn scroll_to_focused(&mut self) {
        let Some(rect) = self.layout.card_rect(self.focused) else {
            // Past the drawable area: show as far down as the content goes
            let max_y = self.layout.content_height().saturating_sub(self.layout.viewport.height);
            self.scroll_state.set_offset(Position { x: 0, y: max_y });
            return;
        };
        let viewport_height = self.layout.viewport.height;
        let offset_y = self.scroll_state.offset().y;

        if rect.y < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: rect.y });
        } else if rect.bottom() > offset_y.saturating_add(viewport_height) {
            let new_y = rect.bottom().saturating_sub(viewport_height);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self
            .layout
            .content_height().saturating_sub(self.layout.viewport.height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: 0, y: max_y });
        }
    }

    fn scroll_by(&mut self, delta: i32) {
        let current = self.scroll_state.offset().y as i32;
        let y = (current + delta).clamp(0, u16::MAX as i32) as u16;
        self.scroll_state.set_offset(Position { x: 0, y });
        self.clamp_scroll();
    }

    fn hit(&self, column: u16, row: u16) -> Option<usize> {
        self.layout.hit_test(column, row, self.scroll_state.offset())
    }
}

impl EventHandler for CardGridState {
    type Event = GridEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<GridEvent> {
        match event {
            TuiEvent::CursorLeft
            | TuiEvent::CursorRight
            | TuiEvent::CursorUp
            | TuiEvent::CursorDown => {
                self.move_focus(event);
                None
            }
            TuiEvent::Activate => {
                (self.focused < self.layout.item_count).then_some(GridEvent::Activate(self.focused))
            }
            TuiEvent::MouseMove(column, row) => {
                if let Some(index) = self.hit(*column, *row) {
                    self.focused = index;
                }
                None
            }
            TuiEvent::MouseClick(column, row) => {
                let index = self.hit(*column, *row)?;
                self.focused = index;
                Some(GridEvent::Activate(index))
            }
            TuiEvent::ScrollUp => {
                self.scroll_by(-(CARD_HEIGHT as i32));
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_by(CARD_HEIGHT as i32);
                None
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the card grid.
pub struct CardGrid<'a> {
    state: &'a mut CardGridState,
    catalog: &'a Catalog,
    selection: &'a Selection,
    fixed_columns: Option<u16>,
}

impl<'a> CardGrid<'a> {
    pub fn new(
        state: &'a mut CardGridState,
        catalog: &'a Catalog,
        selection: &'a Selection,
        fixed_columns: Option<u16>,
    ) -> Self {
        Self {
            state,
            catalog,
            selection,
            fixed_columns,
        }
    }
}

impl Component for CardGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use ratatui::layout::Alignment;
        use ratatui::style::{Color, Style};
        use ratatui::widgets::Paragraph;

        self.state.layout = GridLayout::compute(self.catalog.len(), area, self.fixed_columns);

        if self.catalog.is_empty() {
            let empty = Paragraph::new("No characters in the catalog.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        self.state.focused = self.state.focused.min(self.catalog.len() - 1);
        self.state.clamp_scroll();

        let layout = self.state.layout;
        let mut scroll_view = ScrollView::new(layout.content_size())
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (index, item) in self.catalog.items().iter().enumerate() {
            let card = Card {
                item,
                locked: self.selection.is_locked(item.id),
                excluded: self.selection.is_excluded(item.id),
                focused: index == self.state.focused,
            };
            if let Some(rect) = layout.card_rect(index) {
                scroll_view.render_widget(card, rect);
            }
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
