//! Scene primitives and the drawing surface seam.
//!
//! A [`Scene`] is everything one repaint draws, expressed in screen pixels:
//! stroked polylines plus text labels over a solid background. Building the
//! scene is pure; painting it targets a [`Surface`], so the same scene feeds
//! both the terminal canvas and the PNG exporter.

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// White scene background.
pub const BACKGROUND: Rgb = Rgb::new(0xff, 0xff, 0xff);

/// A stroked polyline in screen pixels.
#[derive(Debug, Clone)]
pub struct Stroke {
    /// Points along the line, in order.
    pub points: Vec<(f64, f64)>,
    /// Stroke color.
    pub color: Rgb,
    /// Stroke width in pixels.
    pub width: f64,
}

/// A text label anchored at a screen position.
#[derive(Debug, Clone)]
pub struct Label {
    /// Anchor x in pixels.
    pub x: f64,
    /// Anchor y in pixels.
    pub y: f64,
    /// Label text.
    pub text: String,
    /// Text color.
    pub color: Rgb,
}

/// A complete frame to draw.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Background fill.
    pub background: Rgb,
    /// Polylines, drawn in order.
    pub strokes: Vec<Stroke>,
    /// Text labels, drawn last.
    pub labels: Vec<Label>,
}

impl Scene {
    /// Create an empty scene of the given pixel size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: BACKGROUND,
            strokes: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Paint the scene onto a surface.
    pub fn paint(&self, surface: &mut dyn Surface) {
        surface.fill_background(self.background);
        for stroke in &self.strokes {
            surface.stroke_polyline(&stroke.points, stroke.color, stroke.width);
        }
        for label in &self.labels {
            surface.draw_label(label.x, label.y, &label.text, label.color);
        }
    }
}

/// A drawable 2D surface addressed in screen pixels, y growing downward.
pub trait Surface {
    /// Fill the whole surface with a color.
    fn fill_background(&mut self, color: Rgb);

    /// Stroke connected line segments through the given points.
    ///
    /// Fewer than two points draws nothing.
    fn stroke_polyline(&mut self, points: &[(f64, f64)], color: Rgb, width: f64);

    /// Draw a text label anchored at a pixel position.
    ///
    /// Surfaces without text support (the PNG exporter) may ignore this.
    fn draw_label(&mut self, x: f64, y: f64, text: &str, color: Rgb);
}
