//! Curve rasterization: sample an expression once per horizontal pixel and
//! collect the screen-space polyline segments to stroke.
//!
//! The path breaks at evaluation failures, non-finite samples, large y jumps
//! (`|y - last_y| > 100/scale`, a visual heuristic kept as-is), and points
//! far outside the visible vertical band.

use crate::expr::CompiledExpr;
use crate::viewport::Viewport;

/// Vertical slack in pixels: points this far above or below the canvas still
/// extend the path so near-edge curves do not fray.
const BAND_MARGIN: f64 = 100.0;

/// Sample a curve across the visible x range of the viewport.
///
/// Returns polyline segments in screen pixels; each segment has at least two
/// points. Evaluation failures are swallowed as path breaks.
pub fn sample_curve(
    expr: &CompiledExpr,
    viewport: &Viewport,
    width: f64,
    height: f64,
) -> Vec<Vec<(f64, f64)>> {
    let (x_min, x_max) = viewport.visible_x_range(width);
    let samples = width.max(1.0) as u32;
    let step = (x_max - x_min) / samples as f64;

    let mut segments: Vec<Vec<(f64, f64)>> = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    let mut break_path = true;
    let mut last_y: Option<f64> = None;

    for i in 0..=samples {
        let x = x_min + i as f64 * step;

        let y = match expr.eval(x) {
            Ok(y) if y.is_finite() => y,
            _ => {
                flush(&mut segments, &mut current);
                break_path = true;
                last_y = None;
                continue;
            }
        };

        let (sx, sy) = viewport.world_to_screen(x, y, width, height);

        // Discontinuity heuristic: a jump this large is drawn as a gap.
        if let Some(last) = last_y {
            if (y - last).abs() > 100.0 / viewport.scale {
                break_path = true;
            }
        }

        if sy >= -BAND_MARGIN && sy <= height + BAND_MARGIN {
            if break_path {
                flush(&mut segments, &mut current);
                break_path = false;
            }
            current.push((sx, sy));
        } else {
            break_path = true;
        }

        last_y = Some(y);
    }

    flush(&mut segments, &mut current);
    segments
}

/// Move the current run into the segment list when it can be stroked.
fn flush(segments: &mut Vec<Vec<(f64, f64)>>, current: &mut Vec<(f64, f64)>) {
    if current.len() >= 2 {
        segments.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::compile_checked;

    fn default_view() -> Viewport {
        Viewport::new()
    }

    #[test]
    fn parabola_is_one_symmetric_segment() {
        let expr = compile_checked("x^2").unwrap();
        let segments = sample_curve(&expr, &default_view(), 400.0, 400.0);
        assert_eq!(segments.len(), 1, "x^2 should be continuous");

        let segment = &segments[0];
        let first = segment.first().unwrap();
        let last = segment.last().unwrap();
        // Symmetric about screen x = 200.
        assert!((first.0 + last.0 - 400.0).abs() < 1.0);
        // The vertex (largest screen y, since the arms rise) sits at the
        // canvas center, and nothing escapes the vertical band.
        let vertex = segment
            .iter()
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap())
            .unwrap();
        assert!((vertex.0 - 200.0).abs() < 2.0);
        assert!((vertex.1 - 200.0).abs() < 2.0);
        assert!(segment.iter().all(|p| p.1 >= -BAND_MARGIN));
    }

    #[test]
    fn reciprocal_splits_at_the_pole() {
        let expr = compile_checked("1/x").unwrap();
        let segments = sample_curve(&expr, &default_view(), 400.0, 400.0);
        assert_eq!(segments.len(), 2, "1/x should break near x = 0");
        // One branch entirely left of center, the other entirely right.
        assert!(segments[0].iter().all(|p| p.0 < 200.0));
        assert!(segments[1].iter().all(|p| p.0 > 200.0));
    }

    #[test]
    fn constant_spans_the_full_width() {
        let expr = compile_checked("1").unwrap();
        let segments = sample_curve(&expr, &default_view(), 400.0, 400.0);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].len(), 401, "one sample per pixel inclusive");
    }

    #[test]
    fn off_canvas_excursions_are_dropped() {
        // e^x blows past the vertical band well before the right edge.
        let expr = compile_checked("exp(x)").unwrap();
        let segments = sample_curve(&expr, &default_view(), 400.0, 400.0);
        assert_eq!(segments.len(), 1);
        let max_y = 400.0 + BAND_MARGIN;
        for p in &segments[0] {
            assert!(p.1 >= -BAND_MARGIN && p.1 <= max_y);
        }
    }

    #[test]
    fn everywhere_nan_yields_no_segments() {
        // sqrt of a negative is NaN at every probe; the gate tolerates it.
        let expr = compile_checked("sqrt(-1 - x^2)").unwrap();
        let segments = sample_curve(&expr, &default_view(), 400.0, 400.0);
        assert!(segments.is_empty());
    }
}
