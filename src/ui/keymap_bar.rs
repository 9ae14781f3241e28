//! Keymap help bar UI component.

use crate::app::{App, InputMode};
use crate::ui::ThemeColors;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let keymap_text = match app.input_mode {
        InputMode::Insert => "Esc/Enter:done | ←→:cursor | Type an expression in x",
        InputMode::Normal => {
            "q:quit | i:edit | a:add | d:del | v:show/hide | Tab:next | hl/←→↑↓:pan | +-:zoom | 0:reset | g/A/L:overlays | e:example | s:export | y:copy | ?:help"
        },
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.label).bg(colors.bg));

    f.render_widget(paragraph, area);
}
