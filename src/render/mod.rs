//! Scene construction: curves plus the grid/axis/label overlay.

pub mod overlay;
pub mod raster;
pub mod scene;

pub use scene::{Label, Rgb, Scene, Stroke, Surface};

use crate::function::FunctionList;
use crate::viewport::Viewport;

/// Stroke width for curves, in pixels.
const CURVE_WIDTH: f64 = 2.0;

/// Build the full scene for one repaint.
///
/// Overlay layers honor their viewport toggles; curves are rasterized for
/// every visible, valid, non-blank entry.
pub fn build_scene(
    viewport: &Viewport,
    functions: &FunctionList,
    width: f64,
    height: f64,
) -> Scene {
    let mut scene = Scene::new(width, height);

    if viewport.show_grid {
        scene.strokes.extend(overlay::grid(viewport, width, height));
    }
    if viewport.show_axes {
        scene.strokes.extend(overlay::axes(viewport, width, height));
    }
    if viewport.show_labels {
        scene.labels.extend(overlay::labels(viewport, width, height));
    }

    for entry in functions.entries() {
        if !entry.should_plot() {
            continue;
        }
        let Some(ref compiled) = entry.compiled else {
            continue;
        };
        for points in raster::sample_curve(compiled, viewport, width, height) {
            scene.strokes.push(Stroke {
                points,
                color: entry.color,
                width: CURVE_WIDTH,
            });
        }
    }

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::PALETTE;

    fn list_with(exprs: &[&str]) -> FunctionList {
        let mut list = FunctionList::new();
        for text in exprs {
            list.add();
            let last = list.len() - 1;
            list.get_mut(last).unwrap().set_expression(*text);
        }
        list
    }

    #[test]
    fn toggles_gate_overlay_layers() {
        let mut vp = Viewport::new();
        let functions = FunctionList::new();

        let full = build_scene(&vp, &functions, 400.0, 400.0);
        assert!(!full.strokes.is_empty());
        assert!(!full.labels.is_empty());

        vp.show_grid = false;
        vp.show_axes = false;
        vp.show_labels = false;
        let bare = build_scene(&vp, &functions, 400.0, 400.0);
        assert!(bare.strokes.is_empty());
        assert!(bare.labels.is_empty());
    }

    #[test]
    fn curves_use_the_entry_color() {
        let mut vp = Viewport::new();
        vp.show_grid = false;
        vp.show_axes = false;
        vp.show_labels = false;

        let scene = build_scene(&vp, &list_with(&["x"]), 400.0, 400.0);
        assert_eq!(scene.strokes.len(), 1);
        assert_eq!(scene.strokes[0].color, PALETTE[0]);
    }

    #[test]
    fn invalid_and_hidden_entries_draw_nothing() {
        let mut vp = Viewport::new();
        vp.show_grid = false;
        vp.show_axes = false;
        vp.show_labels = false;

        let mut functions = list_with(&["x +", "x"]);
        functions.get_mut(1).unwrap().visible = false;
        let scene = build_scene(&vp, &functions, 400.0, 400.0);
        assert!(scene.strokes.is_empty());
    }
}
