//! Viewport state and coordinate transforms.
//!
//! The viewport maps between world coordinates (the mathematical plane) and
//! screen coordinates (pixels on the drawing surface, y growing downward).
//! It is parameterized by a center point in world units and a scale in
//! pixels per unit.

/// Minimum zoom scale in pixels per world unit.
pub const MIN_SCALE: f64 = 5.0;

/// Maximum zoom scale in pixels per world unit.
pub const MAX_SCALE: f64 = 200.0;

/// Default zoom scale in pixels per world unit.
pub const DEFAULT_SCALE: f64 = 40.0;

/// Viewport state: zoom, pan and overlay toggles.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    /// Scale in pixels per world unit, clamped to [MIN_SCALE, MAX_SCALE].
    pub scale: f64,
    /// World x coordinate at the center of the canvas.
    pub center_x: f64,
    /// World y coordinate at the center of the canvas.
    pub center_y: f64,
    /// Show grid lines.
    pub show_grid: bool,
    /// Show the x and y axes.
    pub show_axes: bool,
    /// Show numeric axis labels.
    pub show_labels: bool,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Create a viewport at the origin with the default scale.
    pub fn new() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            center_x: 0.0,
            center_y: 0.0,
            show_grid: true,
            show_axes: true,
            show_labels: true,
        }
    }

    /// Map a world point to screen pixels for a canvas of the given size.
    pub fn world_to_screen(&self, x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
        let sx = width / 2.0 + (x - self.center_x) * self.scale;
        let sy = height / 2.0 - (y - self.center_y) * self.scale;
        (sx, sy)
    }

    /// Map a screen pixel to world coordinates for a canvas of the given size.
    pub fn screen_to_world(&self, sx: f64, sy: f64, width: f64, height: f64) -> (f64, f64) {
        let x = self.center_x + (sx - width / 2.0) / self.scale;
        let y = self.center_y - (sy - height / 2.0) / self.scale;
        (x, y)
    }

    /// Multiply the scale by a zoom factor, clamping to the valid range.
    pub fn zoom(&mut self, factor: f64) {
        self.scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Pan by a pixel delta (as from a mouse drag or arrow keys).
    ///
    /// Dragging right moves the view content right, so the center moves
    /// left; the y delta is negated once more because screen y is inverted.
    pub fn pan_pixels(&mut self, dx: f64, dy: f64) {
        self.center_x -= dx / self.scale;
        self.center_y += dy / self.scale;
    }

    /// Reset zoom and pan to the defaults, leaving overlay toggles alone.
    pub fn reset(&mut self) {
        self.scale = DEFAULT_SCALE;
        self.center_x = 0.0;
        self.center_y = 0.0;
    }

    /// Visible world x range for a canvas of the given pixel width.
    pub fn visible_x_range(&self, width: f64) -> (f64, f64) {
        let half = width / 2.0 / self.scale;
        (self.center_x - half, self.center_x + half)
    }

    /// Visible world y range for a canvas of the given pixel height.
    pub fn visible_y_range(&self, height: f64) -> (f64, f64) {
        let half = height / 2.0 / self.scale;
        (self.center_y - half, self.center_y + half)
    }

    /// Grid spacing in world units, coarser as the view zooms out.
    pub fn grid_spacing(&self) -> f64 {
        if self.scale > 100.0 {
            0.5
        } else if self.scale > 50.0 {
            1.0
        } else if self.scale > 20.0 {
            2.0
        } else if self.scale > 10.0 {
            5.0
        } else {
            10.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_screen_round_trip() {
        let mut vp = Viewport::new();
        vp.center_x = 3.25;
        vp.center_y = -1.5;
        for &scale in &[MIN_SCALE, 17.0, DEFAULT_SCALE, 123.0, MAX_SCALE] {
            vp.scale = scale;
            for &(x, y) in &[(0.0, 0.0), (1.5, -2.25), (-40.0, 33.0), (0.001, -0.001)] {
                let (sx, sy) = vp.world_to_screen(x, y, 400.0, 300.0);
                let (wx, wy) = vp.screen_to_world(sx, sy, 400.0, 300.0);
                assert!((wx - x).abs() < 1e-9, "x round trip at scale {}", scale);
                assert!((wy - y).abs() < 1e-9, "y round trip at scale {}", scale);
            }
        }
    }

    #[test]
    fn screen_y_is_inverted() {
        let vp = Viewport::new();
        let (_, sy_up) = vp.world_to_screen(0.0, 1.0, 400.0, 400.0);
        let (_, sy_down) = vp.world_to_screen(0.0, -1.0, 400.0, 400.0);
        assert!(sy_up < 200.0);
        assert!(sy_down > 200.0);
    }

    #[test]
    fn zoom_clamps_to_range() {
        let mut vp = Viewport::new();
        vp.zoom(1000.0);
        assert_eq!(vp.scale, MAX_SCALE);
        vp.zoom(1e-9);
        assert_eq!(vp.scale, MIN_SCALE);
        for _ in 0..50 {
            vp.zoom(0.75);
        }
        assert!(vp.scale >= MIN_SCALE);
        for _ in 0..50 {
            vp.zoom(1.5);
        }
        assert!(vp.scale <= MAX_SCALE);
    }

    #[test]
    fn pan_moves_center_against_drag() {
        let mut vp = Viewport::new();
        vp.pan_pixels(40.0, -80.0);
        assert!((vp.center_x - (-1.0)).abs() < 1e-12);
        assert!((vp.center_y - (-2.0)).abs() < 1e-12);
    }

    #[test]
    fn grid_spacing_lookup() {
        let mut vp = Viewport::new();
        let cases = [(150.0, 0.5), (60.0, 1.0), (40.0, 2.0), (15.0, 5.0), (5.0, 10.0)];
        for (scale, spacing) in cases {
            vp.scale = scale;
            assert_eq!(vp.grid_spacing(), spacing, "spacing at scale {}", scale);
        }
    }

    #[test]
    fn reset_restores_defaults() {
        let mut vp = Viewport::new();
        vp.zoom(1.5);
        vp.pan_pixels(100.0, 100.0);
        vp.show_grid = false;
        vp.reset();
        assert_eq!(vp.scale, DEFAULT_SCALE);
        assert_eq!(vp.center_x, 0.0);
        assert_eq!(vp.center_y, 0.0);
        assert!(!vp.show_grid, "reset leaves toggles alone");
    }
}
