//! PNG export of the current scene.
//!
//! [`ImageSurface`] is a plain pixel-buffer implementation of [`Surface`];
//! strokes are stamped along each segment with a round brush. Text labels
//! are not rasterized (they are terminal-only), so exported images carry
//! the grid, axes, and curves.

use std::path::Path;

use image::{Rgba, RgbaImage};
use tracing::info;

use crate::error::{OrdinateError, Result};
use crate::render::{Rgb, Scene, Surface};

/// A pixel surface backed by an RGBA image buffer.
#[derive(Debug)]
pub struct ImageSurface {
    buffer: RgbaImage,
}

impl ImageSurface {
    /// Create a surface of the given pixel size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: RgbaImage::new(width, height),
        }
    }

    /// Consume the surface, yielding the image buffer.
    pub fn into_image(self) -> RgbaImage {
        self.buffer
    }

    /// Pixel color at a position.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let p = self.buffer.get_pixel(x, y);
        Rgb::new(p[0], p[1], p[2])
    }

    /// Stamp a filled disc, clipped to the buffer.
    fn stamp(&mut self, cx: f64, cy: f64, radius: f64, color: Rgba<u8>) {
        let r = radius.max(0.5);
        let x0 = (cx - r).floor().max(0.0) as u32;
        let y0 = (cy - r).floor().max(0.0) as u32;
        let x1 = ((cx + r).ceil() as i64).clamp(0, self.buffer.width() as i64) as u32;
        let y1 = ((cy + r).ceil() as i64).clamp(0, self.buffer.height() as i64) as u32;

        for py in y0..y1 {
            for px in x0..x1 {
                let dx = px as f64 + 0.5 - cx;
                let dy = py as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= r * r {
                    self.buffer.put_pixel(px, py, color);
                }
            }
        }
    }
}

impl Surface for ImageSurface {
    fn fill_background(&mut self, color: Rgb) {
        let fill = to_rgba(color);
        for pixel in self.buffer.pixels_mut() {
            *pixel = fill;
        }
    }

    fn stroke_polyline(&mut self, points: &[(f64, f64)], color: Rgb, width: f64) {
        let rgba = to_rgba(color);
        let radius = width / 2.0;
        for pair in points.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            let len = ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt();
            let steps = (len * 2.0).ceil().max(1.0) as u32;
            for i in 0..=steps {
                let t = i as f64 / steps as f64;
                self.stamp(x0 + (x1 - x0) * t, y0 + (y1 - y0) * t, radius, rgba);
            }
        }
    }

    fn draw_label(&mut self, _x: f64, _y: f64, _text: &str, _color: Rgb) {
        // No font rasterization; labels stay in the terminal.
    }
}

fn to_rgba(color: Rgb) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, 0xff])
}

/// Render a scene at its own pixel size and save it as a PNG.
pub fn export_png(scene: &Scene, path: &Path) -> Result<()> {
    let width = scene.width.max(1.0) as u32;
    let height = scene.height.max(1.0) as u32;

    let mut surface = ImageSurface::new(width, height);
    scene.paint(&mut surface);

    surface
        .into_image()
        .save(path)
        .map_err(|e| OrdinateError::export(path.to_path_buf(), e))?;

    info!("Exported {}x{} image to {}", width, height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Scene, Stroke};

    #[test]
    fn background_fills_every_pixel() {
        let mut surface = ImageSurface::new(8, 8);
        surface.fill_background(Rgb::new(1, 2, 3));
        assert_eq!(surface.pixel(0, 0), Rgb::new(1, 2, 3));
        assert_eq!(surface.pixel(7, 7), Rgb::new(1, 2, 3));
    }

    #[test]
    fn stroke_marks_the_midpoint() {
        let mut scene = Scene::new(20.0, 20.0);
        let red = Rgb::new(0xff, 0x00, 0x00);
        scene.strokes.push(Stroke {
            points: vec![(0.0, 10.0), (20.0, 10.0)],
            color: red,
            width: 2.0,
        });

        let mut surface = ImageSurface::new(20, 20);
        scene.paint(&mut surface);
        assert_eq!(surface.pixel(10, 10), red);
        assert_eq!(surface.pixel(10, 0), scene.background);
    }

    #[test]
    fn off_canvas_points_are_clipped() {
        let mut surface = ImageSurface::new(10, 10);
        surface.fill_background(Rgb::new(0xff, 0xff, 0xff));
        // A segment reaching far outside the buffer must not panic.
        surface.stroke_polyline(
            &[(-50.0, -50.0), (60.0, 60.0)],
            Rgb::new(0, 0, 0),
            2.0,
        );
        assert_eq!(surface.pixel(5, 5), Rgb::new(0, 0, 0));
    }
}
