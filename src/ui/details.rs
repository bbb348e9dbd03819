//! Details overlay for the selected record.

use super::formatters::format_rating;
use super::ThemeColors;
use crate::catalog::Record;
use crate::config::DetailsLayoutConfig;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Draw the details overlay.
pub(super) fn draw_details(
    f: &mut Frame<'_>,
    record: &Record,
    layout: &DetailsLayoutConfig,
    colors: &ThemeColors,
) {
    let area = centered_rect(layout.percent_x, layout.percent_y, f.area());

    f.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", record.title()))
        .title_style(
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Meta line
            Constraint::Min(1),    // Description
            Constraint::Length(1), // Footer
        ])
        .split(inner);

    let separator = Span::styled(" • ", Style::default().fg(colors.muted));
    let meta = Line::from(vec![
        Span::styled(record.category().to_string(), Style::default().fg(colors.label)),
        separator.clone(),
        Span::styled(record.author().to_string(), Style::default().fg(colors.value)),
        separator.clone(),
        Span::styled(record.year_label(), Style::default().fg(colors.value)),
        separator.clone(),
        Span::styled(record.genre().to_string(), Style::default().fg(colors.value)),
        separator,
        Span::styled(
            format!("Rating {}", format_rating(&record.rating_label())),
            Style::default().fg(colors.warning),
        ),
    ]);
    f.render_widget(Paragraph::new(meta).wrap(Wrap { trim: true }), chunks[0]);

    let description = if record.description().is_empty() {
        Span::styled("No description", Style::default().fg(colors.muted))
    } else {
        Span::styled(record.description().to_string(), Style::default().fg(colors.text))
    };
    f.render_widget(
        Paragraph::new(Line::from(description)).wrap(Wrap { trim: true }),
        chunks[1],
    );

    let footer = Paragraph::new("y: Copy | Esc/q: Close")
        .style(Style::default().fg(colors.label))
        .alignment(Alignment::Center);
    f.render_widget(footer, chunks[2]);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
