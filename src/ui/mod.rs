//! User interface rendering.

mod graph;
mod keymap_bar;
mod sidebar;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

pub use theme::ThemeColors;

/// Width of the function sidebar in terminal cells.
const SIDEBAR_WIDTH: u16 = 34;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Main layout with status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    // Content area: function sidebar on the left, graph canvas on the right
    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
        .split(chunks[0]);

    sidebar::draw_sidebar(f, app, content[0], &colors);
    graph::draw_graph(f, app, content[1], &colors);

    status_bar::draw_status(f, chunks[1], app, &colors);
    keymap_bar::draw_keymap(f, chunks[2], app, &colors);
}
