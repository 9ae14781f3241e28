//! Grid, axis, and label overlay geometry.
//!
//! World-aligned lines are emitted only when they fall inside the visible
//! screen region. Label placement keeps a margin from the canvas edges and
//! hugs the axis even when the origin sits near an edge.

use crate::render::scene::{Label, Rgb, Stroke};
use crate::viewport::Viewport;

/// Grid line color.
pub const GRID_COLOR: Rgb = Rgb::new(0xc0, 0xc0, 0xc0);

/// Axis color.
pub const AXIS_COLOR: Rgb = Rgb::new(0x33, 0x33, 0x33);

/// Label text color.
pub const LABEL_COLOR: Rgb = Rgb::new(0x66, 0x66, 0x66);

const GRID_WIDTH: f64 = 2.0;
const AXIS_WIDTH: f64 = 1.5;

/// Labels closer to zero than this are the origin and are skipped.
const ORIGIN_EPS: f64 = 1e-3;

/// Grid lines at the current spacing, clipped to the canvas.
pub fn grid(viewport: &Viewport, width: f64, height: f64) -> Vec<Stroke> {
    let spacing = viewport.grid_spacing();
    let mut strokes = Vec::new();

    let (x_min, x_max) = viewport.visible_x_range(width);
    for x in world_steps(x_min, x_max, spacing) {
        let (sx, _) = viewport.world_to_screen(x, 0.0, width, height);
        if sx >= 0.0 && sx <= width {
            strokes.push(vertical_line(sx, height, GRID_COLOR, GRID_WIDTH));
        }
    }

    let (y_min, y_max) = viewport.visible_y_range(height);
    for y in world_steps(y_min, y_max, spacing) {
        let (_, sy) = viewport.world_to_screen(0.0, y, width, height);
        if sy >= 0.0 && sy <= height {
            strokes.push(horizontal_line(sy, width, GRID_COLOR, GRID_WIDTH));
        }
    }

    strokes
}

/// The x and y axes, when the origin line crosses the canvas.
pub fn axes(viewport: &Viewport, width: f64, height: f64) -> Vec<Stroke> {
    let (origin_x, origin_y) = viewport.world_to_screen(0.0, 0.0, width, height);
    let mut strokes = Vec::new();

    if origin_y >= 0.0 && origin_y <= height {
        strokes.push(horizontal_line(origin_y, width, AXIS_COLOR, AXIS_WIDTH));
    }
    if origin_x >= 0.0 && origin_x <= width {
        strokes.push(vertical_line(origin_x, height, AXIS_COLOR, AXIS_WIDTH));
    }

    strokes
}

/// Numeric labels along both axes. Labels only make sense next to axes, so
/// this is empty when axes are hidden.
pub fn labels(viewport: &Viewport, width: f64, height: f64) -> Vec<Label> {
    if !viewport.show_axes {
        return Vec::new();
    }

    let (origin_x, origin_y) = viewport.world_to_screen(0.0, 0.0, width, height);
    let spacing = viewport.grid_spacing();
    let mut labels = Vec::new();

    // Along the x axis.
    if origin_y >= 0.0 && origin_y <= height {
        let (x_min, x_max) = viewport.visible_x_range(width);
        let label_y = (origin_y + 5.0).min(height - 15.0);
        for x in world_steps(x_min, x_max, spacing) {
            if x.abs() < ORIGIN_EPS {
                continue; // skip the origin
            }
            let (sx, _) = viewport.world_to_screen(x, 0.0, width, height);
            if sx >= 20.0 && sx <= width - 20.0 {
                labels.push(Label {
                    x: sx,
                    y: label_y,
                    text: format_tick(x, spacing),
                    color: LABEL_COLOR,
                });
            }
        }
    }

    // Along the y axis.
    if origin_x >= 0.0 && origin_x <= width {
        let (y_min, y_max) = viewport.visible_y_range(height);
        let label_x = (origin_x + 5.0).min(width - 30.0);
        for y in world_steps(y_min, y_max, spacing) {
            if y.abs() < ORIGIN_EPS {
                continue;
            }
            let (_, sy) = viewport.world_to_screen(0.0, y, width, height);
            if sy >= 20.0 && sy <= height - 20.0 {
                labels.push(Label {
                    x: label_x,
                    y: sy,
                    text: format_tick(y, spacing),
                    color: LABEL_COLOR,
                });
            }
        }
    }

    labels
}

/// Multiples of `spacing` covering `[min, max]`, without float accumulation.
fn world_steps(min: f64, max: f64, spacing: f64) -> impl Iterator<Item = f64> {
    let first = (min / spacing).floor() as i64;
    let last = (max / spacing).floor() as i64;
    (first..=last).map(move |n| n as f64 * spacing)
}

/// Format a tick value: one decimal for sub-unit spacing, none otherwise.
fn format_tick(value: f64, spacing: f64) -> String {
    if spacing < 1.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.0}", value)
    }
}

fn vertical_line(sx: f64, height: f64, color: Rgb, width: f64) -> Stroke {
    Stroke {
        points: vec![(sx, 0.0), (sx, height)],
        color,
        width,
    }
}

fn horizontal_line(sy: f64, width: f64, color: Rgb, width_px: f64) -> Stroke {
    Stroke {
        points: vec![(0.0, sy), (width, sy)],
        color,
        width: width_px,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_lines_at_default_view() {
        let vp = Viewport::new();
        // Spacing 2 over x,y in [-5, 5]: lines at -4, -2, 0, 2, 4 each way.
        let strokes = grid(&vp, 400.0, 400.0);
        assert_eq!(strokes.len(), 10);
    }

    #[test]
    fn axes_present_only_when_origin_visible() {
        let mut vp = Viewport::new();
        assert_eq!(axes(&vp, 400.0, 400.0).len(), 2);

        vp.center_x = 100.0;
        assert_eq!(axes(&vp, 400.0, 400.0).len(), 1, "y axis scrolled away");

        vp.center_y = 100.0;
        assert!(axes(&vp, 400.0, 400.0).is_empty());
    }

    #[test]
    fn labels_skip_origin_and_edges() {
        let vp = Viewport::new();
        let labels = labels(&vp, 400.0, 400.0);
        // Four per axis: -4, -2, 2, 4 (origin skipped, edges outside margin).
        assert_eq!(labels.len(), 8);
        assert!(labels.iter().all(|l| l.text != "0"));
    }

    #[test]
    fn labels_require_axes() {
        let mut vp = Viewport::new();
        vp.show_axes = false;
        assert!(labels(&vp, 400.0, 400.0).is_empty());
    }

    #[test]
    fn tick_precision_follows_spacing() {
        assert_eq!(format_tick(0.5, 0.5), "0.5");
        assert_eq!(format_tick(2.0, 2.0), "2");
        assert_eq!(format_tick(-4.0, 2.0), "-4");
    }
}
