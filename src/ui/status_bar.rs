//! Status bar UI component.

use super::ThemeColors;
use crate::app::Status;
use crate::search::QueryInput;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the status bar.
pub(super) fn draw_status(
    f: &mut Frame<'_>,
    area: Rect,
    status: &Status,
    query: &QueryInput,
    colors: &ThemeColors,
) {
    let line = if query.is_active() {
        Line::from(vec![
            Span::styled("/", Style::default().fg(colors.heading)),
            Span::raw(query.buffer().to_string()),
        ])
    } else {
        Line::from(vec![
            Span::styled(
                "● ",
                Style::default()
                    .fg(colors.status_accent(status.kind))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(status.message.clone()),
        ])
    };

    let paragraph =
        Paragraph::new(line).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
