use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something that draws one region of the character-select screen.
///
/// `TitleBar` and `DetailPanel` are plain props structs rebuilt every frame.
/// `CardGrid` borrows its `CardGridState` for the duration of one frame and
/// writes the grid geometry (columns, viewport, clamped scroll) back into it,
/// which is why `render` takes `&mut self`. Mouse hit testing in the next
/// event reads that geometry.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Persistent component state that reacts to input.
///
/// Implemented by `CardGridState`, which moves focus and scrolls on its own
/// and only reports `GridEvent::Activate` upward. The adapter turns that
/// into `Action::Select`; components never touch the `Selection`.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
