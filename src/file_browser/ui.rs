//! File browser UI rendering.

use super::FileBrowserState;
use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Draw the file browser UI.
pub fn draw_file_browser(
    f: &mut Frame<'_>,
    state: &mut FileBrowserState,
    area: Rect,
    colors: &ThemeColors,
) {
    // Subtract 2 for borders
    let viewport_height = area.height.saturating_sub(2) as usize;
    state.adjust_scroll(viewport_height);

    let items: Vec<ListItem<'_>> = state
        .entries
        .iter()
        .enumerate()
        .skip(state.scroll)
        .take(viewport_height)
        .map(|(idx, entry)| {
            let icon = if entry.is_dir { "📁" } else { "📄" };
            let symlink_indicator = if entry.is_symlink { " →" } else { "" };
            let text = format!("{} {}{}", icon, entry.name, symlink_indicator);

            let style = if idx == state.cursor {
                Style::default()
                    .fg(colors.cursor_fg)
                    .bg(colors.cursor_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };

            ListItem::new(Line::from(text)).style(style)
        })
        .collect();

    let filter_hint = if state.show_all { "all files" } else { "catalogs" };
    let title = format!(
        " Open Catalog: {} ({}) ",
        state.current_dir.display(),
        filter_hint
    );

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg)),
    );

    f.render_widget(list, area);
}
