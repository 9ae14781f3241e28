//! Graph canvas rendering.
//!
//! The scene is built in braille-pixel coordinates and painted through a
//! [`Surface`] adapter over the ratatui canvas. Overlay colors are remapped
//! to the active theme so the grid stays readable on dark backgrounds;
//! curve colors are shown as-is.

use crate::app::App;
use crate::render::overlay::{AXIS_COLOR, GRID_COLOR, LABEL_COLOR};
use crate::render::{self, Rgb, Surface};
use crate::ui::ThemeColors;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Context, Line as CanvasLine};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

/// Draw the graph canvas, recording its geometry on the app for mouse
/// handling.
pub(super) fn draw_graph(f: &mut Frame<'_>, app: &mut App, area: Rect, colors: &ThemeColors) {
    let block = Block::default()
        .title(" Graph ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    app.graph_origin = (inner.x, inner.y);
    app.graph_cells = (inner.width, inner.height);

    let (width, height) = app.canvas_px();
    if width <= 0.0 || height <= 0.0 {
        f.render_widget(block, area);
        return;
    }

    let scene = render::build_scene(&app.viewport, &app.functions, width, height);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .background_color(colors.bg)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            let mut surface = CanvasSurface {
                ctx,
                height,
                grid: colors.border,
                axis: colors.text,
                label: colors.label,
            };
            scene.paint(&mut surface);
        });

    f.render_widget(canvas, area);
}

/// Surface adapter over the ratatui canvas context.
///
/// The canvas y axis grows upward, so screen y is flipped on the way in.
struct CanvasSurface<'a, 'b> {
    ctx: &'a mut Context<'b>,
    height: f64,
    grid: Color,
    axis: Color,
    label: Color,
}

impl CanvasSurface<'_, '_> {
    fn map_color(&self, color: Rgb) -> Color {
        if color == GRID_COLOR {
            self.grid
        } else if color == AXIS_COLOR {
            self.axis
        } else if color == LABEL_COLOR {
            self.label
        } else {
            Color::Rgb(color.r, color.g, color.b)
        }
    }
}

impl Surface for CanvasSurface<'_, '_> {
    fn fill_background(&mut self, _color: Rgb) {
        // The widget background comes from the theme, not the scene.
    }

    fn stroke_polyline(&mut self, points: &[(f64, f64)], color: Rgb, _width: f64) {
        let color = self.map_color(color);
        for pair in points.windows(2) {
            self.ctx.draw(&CanvasLine {
                x1: pair[0].0,
                y1: self.height - pair[0].1,
                x2: pair[1].0,
                y2: self.height - pair[1].1,
                color,
            });
        }
    }

    fn draw_label(&mut self, x: f64, y: f64, text: &str, color: Rgb) {
        let style = Style::default().fg(self.map_color(color));
        self.ctx
            .print(x, self.height - y, Line::styled(text.to_string(), style));
    }
}
