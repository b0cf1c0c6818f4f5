use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,     // q / Esc / Ctrl+C
    Activate, // Enter / Space on the focused card
    Reset,

    // TUI-local events (handled directly in TUI)
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    ScrollUp,
    ScrollDown,
    MouseMove(u16, u16),
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> std::io::Result<Option<TuiEvent>> {
    if event::poll(timeout)? {
        Ok(translate(event::read()?))
    } else {
        Ok(None)
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> std::io::Result<Option<TuiEvent>> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Map a raw crossterm event to a `TuiEvent`.
pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Moved => Some(TuiEvent::MouseMove(mouse_event.column, mouse_event.row)),
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Some terminals report release/repeat; only act on press
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Enter) | (_, KeyCode::Char(' ')) => Some(TuiEvent::Activate),
        (_, KeyCode::Char('r')) => Some(TuiEvent::Reset),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Left) | (_, KeyCode::Char('h')) => Some(TuiEvent::CursorLeft),
        (_, KeyCode::Right) | (_, KeyCode::Char('l')) => Some(TuiEvent::CursorRight),
        (_, KeyCode::PageUp) => Some(TuiEvent::ScrollUp),
        (_, KeyCode::PageDown) => Some(TuiEvent::ScrollDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_activation_keys() {
        assert_eq!(translate(key(KeyCode::Enter, KeyModifiers::NONE)), Some(TuiEvent::Activate));
        assert_eq!(translate(key(KeyCode::Char(' '), KeyModifiers::NONE)), Some(TuiEvent::Activate));
    }

    #[test]
    fn test_ctrl_c_quits_plain_c_is_ignored() {
        assert_eq!(translate(key(KeyCode::Char('c'), KeyModifiers::CONTROL)), Some(TuiEvent::Quit));
        assert_eq!(translate(key(KeyCode::Char('q'), KeyModifiers::NONE)), Some(TuiEvent::Quit));
        assert_eq!(translate(key(KeyCode::Esc, KeyModifiers::NONE)), Some(TuiEvent::Quit));
        assert_eq!(translate(key(KeyCode::Char('c'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_vim_and_arrow_navigation() {
        assert_eq!(translate(key(KeyCode::Char('h'), KeyModifiers::NONE)), Some(TuiEvent::CursorLeft));
        assert_eq!(translate(key(KeyCode::Right, KeyModifiers::NONE)), Some(TuiEvent::CursorRight));
        assert_eq!(translate(key(KeyCode::Char('k'), KeyModifiers::NONE)), Some(TuiEvent::CursorUp));
        assert_eq!(translate(key(KeyCode::Down, KeyModifiers::NONE)), Some(TuiEvent::CursorDown));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('r'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(translate(Event::Key(release)), None);
    }

    #[test]
    fn test_mouse_events() {
        assert_eq!(
            translate(mouse(MouseEventKind::Down(MouseButton::Left), 4, 7)),
            Some(TuiEvent::MouseClick(4, 7))
        );
        assert_eq!(translate(mouse(MouseEventKind::Moved, 1, 2)), Some(TuiEvent::MouseMove(1, 2)));
        assert_eq!(translate(mouse(MouseEventKind::Down(MouseButton::Right), 1, 2)), None);
        assert_eq!(translate(mouse(MouseEventKind::ScrollDown, 0, 0)), Some(TuiEvent::ScrollDown));
    }

    #[test]
    fn test_resize() {
        assert_eq!(translate(Event::Resize(80, 24)), Some(TuiEvent::Resize));
    }
}
