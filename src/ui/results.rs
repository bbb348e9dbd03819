//! Results screen rendering.

use super::formatters::{fit_width, format_count};
use super::ThemeColors;
use crate::app::App;
use crate::catalog::Record;
use crate::config::ResultsLayoutConfig;
use crate::file_browser::ui::draw_file_browser;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

/// Draw the filter bar: query, facets, sort and counts.
pub(super) fn draw_filter_bar(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let criteria = app.catalog.criteria();
    let label = Style::default().fg(colors.label);
    let value = if app.controls_enabled() {
        Style::default().fg(colors.value)
    } else {
        Style::default().fg(colors.muted)
    };

    let query_text = if app.query_input.is_active() {
        format!("{}▏", app.query_input.buffer())
    } else if criteria.query.trim().is_empty() {
        "-".to_string()
    } else {
        criteria.query.trim().to_string()
    };

    let line = Line::from(vec![
        Span::styled(" Search: ", label),
        Span::styled(query_text, Style::default().fg(colors.text)),
        Span::styled("  Type: ", label),
        Span::styled(criteria.active_category().unwrap_or("All").to_string(), value),
        Span::styled("  Genre: ", label),
        Span::styled(criteria.active_genre().unwrap_or("All").to_string(), value),
        Span::styled("  Sort: ", label),
        Span::styled(criteria.sort.label(), value),
        Span::styled(
            format!(
                "  {}/{} items",
                format_count(app.catalog.view().len()),
                format_count(app.catalog.corpus().len())
            ),
            Style::default().fg(colors.heading),
        ),
    ]);

    let paragraph = Paragraph::new(line).style(Style::default().bg(colors.bg));
    f.render_widget(paragraph, area);
}

/// Draw the main content area.
pub(super) fn draw_content(f: &mut Frame<'_>, app: &mut App, area: Rect, colors: &ThemeColors) {
    if app.file_browser_mode {
        draw_file_browser(f, &mut app.file_browser, area, colors);
        return;
    }

    if app.catalog.is_empty() {
        draw_welcome(f, area, colors);
        return;
    }

    if app.catalog.view().is_empty() {
        draw_empty_state(f, app, area, colors);
        return;
    }

    draw_table(f, app, area, colors);
}

fn draw_table(f: &mut Frame<'_>, app: &mut App, area: Rect, colors: &ThemeColors) {
    // Borders plus header row
    let viewport_height = area.height.saturating_sub(3) as usize;
    app.results.adjust_scroll(viewport_height);

    let layout = &app.config.results;
    let title_width = title_column_width(area.width, layout);
    let cursor = app.results.cursor;

    let rows: Vec<Row<'_>> = app
        .catalog
        .view()
        .iter()
        .enumerate()
        .skip(app.results.scroll)
        .take(viewport_height)
        .map(|(idx, record)| {
            let style = if idx == cursor {
                Style::default()
                    .fg(colors.cursor_fg)
                    .bg(colors.cursor_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };
            record_row(record, title_width, layout).style(style)
        })
        .collect();

    let header = Row::new(["Title", "Type", "Author", "Year", "Genre", "Rating"]).style(
        Style::default()
            .fg(colors.heading)
            .add_modifier(Modifier::BOLD),
    );

    let widths = [
        Constraint::Min(layout.min_title_width),
        Constraint::Length(layout.category_width),
        Constraint::Length(layout.author_width),
        Constraint::Length(layout.year_width),
        Constraint::Length(layout.genre_width),
        Constraint::Length(layout.rating_width),
    ];

    let title = app
        .file_path
        .as_ref()
        .and_then(|p| p.file_name())
        .map(|n| format!(" {} ", n.to_string_lossy()))
        .unwrap_or_else(|| " Demo Catalog ".to_string());

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg)),
    );

    f.render_widget(table, area);
}

fn record_row<'a>(record: &Record, title_width: usize, layout: &ResultsLayoutConfig) -> Row<'a> {
    Row::new(vec![
        Cell::from(fit_width(record.title(), title_width)),
        Cell::from(fit_width(record.category(), layout.category_width as usize)),
        Cell::from(fit_width(record.author(), layout.author_width as usize)),
        Cell::from(record.year_label()),
        Cell::from(fit_width(record.genre(), layout.genre_width as usize)),
        Cell::from(record.rating_label()),
    ])
}

/// Columns left for the title after fixed columns, borders and spacing.
fn title_column_width(total: u16, layout: &ResultsLayoutConfig) -> usize {
    let fixed = layout.category_width
        + layout.author_width
        + layout.year_width
        + layout.genre_width
        + layout.rating_width;
    // 2 border columns, 5 column gaps
    let available = total.saturating_sub(fixed + 2 + 5);
    available.max(layout.min_title_width) as usize
}

fn draw_empty_state(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let lines = vec![
        Line::from(Span::styled(
            "No items match the current filters",
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(app.catalog.criteria().describe()),
        Line::from(""),
        Line::from("Press r to reset filters"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Results ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .style(Style::default().fg(colors.text))
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn draw_welcome(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let lines = vec![
        Line::from(Span::styled(
            "Welcome to Catview!",
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Open a catalog file to get started"),
        Line::from(""),
        Line::from("Usage: catview <catalog.csv>"),
        Line::from(""),
        Line::from("Expected header:"),
        Line::from(Span::styled(
            crate::catalog::HEADER,
            Style::default().fg(colors.value),
        )),
        Line::from(""),
        Line::from("Keyboard shortcuts:"),
        Line::from("  o           - Open file browser"),
        Line::from("  d           - Load demo data"),
        Line::from("  j/k or ↓/↑  - Navigate"),
        Line::from("  /           - Search"),
        Line::from("  T           - Cycle theme"),
        Line::from("  q           - Quit"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Catview ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .style(Style::default().fg(colors.text));

    f.render_widget(paragraph, area);
}
