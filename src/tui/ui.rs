use crate::core::selection::Phase;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CardGrid, DetailPanel, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Width of the detail panel on the right of the grid.
pub const DETAIL_WIDTH: u16 = 34;
/// Below this terminal width the detail panel is hidden.
pub const MIN_WIDTH_FOR_DETAIL: u16 = 70;

/// Split the body into grid and (optional) detail areas.
pub fn body_areas(body: Rect) -> (Rect, Option<Rect>) {
    if body.width < MIN_WIDTH_FOR_DETAIL {
        return (body, None);
    }
    let [grid, detail] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(DETAIL_WIDTH)]).areas(body);
    (grid, Some(detail))
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(1)]);
    let [title_area, prompt_area, body_area, help_area] = layout.areas(frame.area());

    TitleBar::new(app.phase(), app.status_message.clone()).render(frame, title_area);

    let prompt = Line::from(Span::styled(
        app.prompt(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .centered();
    frame.render_widget(prompt, prompt_area);

    let (grid_area, detail_area) = body_areas(body_area);
    CardGrid::new(&mut tui.grid, &app.catalog, &app.selection, tui.columns).render(frame, grid_area);

    if let Some(detail_area) = detail_area {
        DetailPanel {
            locked: app.locked_item(),
            focused: app.catalog.items().get(tui.grid.focused),
            excluded_count: app.selection.excluded_count(),
            catalog_len: app.catalog.len(),
        }
        .render(frame, detail_area);
    }

    frame.render_widget(help_line(app.phase()), help_area);
}

fn help_line(phase: Phase) -> Line<'static> {
    let enter_label = match phase {
        Phase::Open => "Lock in",
        Phase::Locked => "Rule out/restore",
    };
    let key = Style::default().fg(Color::Cyan);
    let label = Style::default().fg(Color::DarkGray);
    let mut spans = vec![
        Span::styled(" ←↑↓→", key),
        Span::styled(" Move  ", label),
        Span::styled("Enter", key),
        Span::styled(format!(" {}  ", enter_label), label),
    ];
    if phase == Phase::Locked {
        spans.push(Span::styled("r", key));
        spans.push(Span::styled(" Reset  ", label));
    }
    spans.push(Span::styled("q", key));
    spans.push(Span::styled(" Quit", label));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{buffer_text, nth, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_draw_ui_open_phase() {
        let app = test_app();
        let mut tui = TuiState::new(app.catalog.len(), None);
        let text = draw(&app, &mut tui, 100, 30);
        assert!(text.contains("[open]"));
        assert!(text.contains("Choose your character"));
        assert!(text.contains("Details"));
        assert!(text.contains("Lock in"));
        assert!(!text.contains("Reset"));
    }

    #[test]
    fn test_draw_ui_locked_phase() {
        let mut app = test_app();
        let first = nth(&app, 0);
        update(&mut app, Action::Select(first));
        let mut tui = TuiState::new(app.catalog.len(), None);
        let text = draw(&app, &mut tui, 100, 30);
        assert!(text.contains("[locked]"));
        assert!(text.contains("Locked in! Rule out the rest"));
        assert!(text.contains("Reset"));
        assert!(text.contains("LOCKED"));
    }

    #[test]
    fn test_narrow_terminal_hides_detail_panel() {
        let app = test_app();
        let mut tui = TuiState::new(app.catalog.len(), None);
        let text = draw(&app, &mut tui, 60, 20);
        assert!(!text.contains("Details"));
        assert_eq!(tui.grid.layout.viewport.width, 60);
    }

    #[test]
    fn test_body_areas_split() {
        let (grid, detail) = body_areas(Rect::new(0, 2, 100, 20));
        assert_eq!(grid.width, 100 - DETAIL_WIDTH);
        assert_eq!(detail.unwrap().width, DETAIL_WIDTH);
        assert_eq!(body_areas(Rect::new(0, 0, 50, 20)).1, None);
    }

    #[test]
    fn test_grid_viewport_sits_below_title_and_prompt() {
        let app = test_app();
        let mut tui = TuiState::new(app.catalog.len(), Some(3));
        draw(&app, &mut tui, 100, 30);
        assert_eq!(tui.grid.layout.viewport.y, 2);
        assert_eq!(tui.grid.layout.columns, 3);
    }
}
