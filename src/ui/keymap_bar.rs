//! Keymap help bar UI component.

use super::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(
    f: &mut Frame<'_>,
    area: Rect,
    file_browser_mode: bool,
    details_visible: bool,
    search_active: bool,
    colors: &ThemeColors,
) {
    let keymap_text = if file_browser_mode {
        "jk/↑↓:nav | Enter/l:open | h:parent | .:hidden | a:all files | Esc:back | q:quit"
    } else if details_visible {
        "y:copy | q/Esc:close"
    } else if search_active {
        "Type to filter | ^U:clear | Enter:keep | Esc:cancel"
    } else {
        "q:quit | jk:nav | Enter:details | /:search | t:type | e:genre | s/S:sort | r:reset | o:open | d:demo | ?:help"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
