//! Status bar UI component.

use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Draw the status bar: status message on the left, live pointer readout
/// on the right.
pub(super) fn draw_status(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let readout = match app.pointer {
        Some((x, y)) => format!("x: {:.2}, y: {:.2}", x, y),
        None => String::new(),
    };

    let width = area.width as usize;
    let status = &app.status;
    let text = if readout.is_empty() || status.len() + readout.len() + 2 > width {
        status.clone()
    } else {
        let pad = width - status.len() - readout.len();
        format!("{}{}{}", status, " ".repeat(pad), readout)
    };

    let paragraph =
        Paragraph::new(text).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
