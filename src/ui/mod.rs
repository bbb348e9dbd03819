//! User interface rendering.

mod details;
mod formatters;
mod keymap_bar;
mod results;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Filter bar, content, status bar, key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    results::draw_filter_bar(f, app, chunks[0], &colors);
    results::draw_content(f, app, chunks[1], &colors);
    status_bar::draw_status(f, chunks[2], &app.status, &app.query_input, &colors);
    keymap_bar::draw_keymap(
        f,
        chunks[3],
        app.file_browser_mode,
        app.details_visible,
        app.query_input.is_active(),
        &colors,
    );

    if app.details_visible && !app.file_browser_mode {
        if let Some(record) = app.selected_record() {
            details::draw_details(f, record, &app.config.details, &colors);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewerConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &mut App) -> String {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn renders_demo_catalog_rows() {
        let mut app = App::new(ViewerConfig {
            load_demo: true,
            ..ViewerConfig::default()
        });
        let screen = render(&mut app);
        assert!(screen.contains("Baldurs Gate 3"));
        assert!(screen.contains("10/10 items"));
    }

    #[test]
    fn renders_details_overlay() {
        let mut app = App::new(ViewerConfig {
            load_demo: true,
            ..ViewerConfig::default()
        });
        app.open_details();
        let screen = render(&mut app);
        assert!(screen.contains("Larian Studios"));
        assert!(screen.contains("Esc/q: Close"));
    }

    #[test]
    fn renders_empty_state_for_no_matches() {
        let mut app = App::new(ViewerConfig {
            load_demo: true,
            ..ViewerConfig::default()
        });
        app.start_search();
        for c in "no such thing".chars() {
            app.search_input(c);
        }
        let screen = render(&mut app);
        assert!(screen.contains("No items match the current filters"));
    }
}
