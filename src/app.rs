//! Application state and logic.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::export;
use crate::function::{FunctionList, MAX_FUNCTIONS};
use crate::render;
use crate::util;
use crate::viewport::Viewport;

/// Example expressions cycled by the `e` key.
pub const EXAMPLES: [&str; 8] = [
    "x^2",
    "sin(x)",
    "cos(x)",
    "1/x",
    "sqrt(x)",
    "ln(x)",
    "abs(x)",
    "exp(x)",
];

/// Default export size in pixels, used when no canvas has been drawn yet.
const DEFAULT_EXPORT_SIZE: (f64, f64) = (800.0, 600.0);

/// Pan step for keyboard panning, in canvas pixels.
pub const KEY_PAN_STEP: f64 = 20.0;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Graph navigation and entry management.
    #[default]
    Normal,
    /// Editing the selected entry's expression.
    Insert,
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Function entries.
    pub functions: FunctionList,
    /// Viewport (zoom, pan, overlay toggles).
    pub viewport: Viewport,
    /// Index of the selected entry.
    pub selected: usize,
    /// Current input mode.
    pub input_mode: InputMode,
    /// Edit cursor as a character index into the selected expression.
    pub cursor: usize,
    /// Live pointer readout in world coordinates.
    pub pointer: Option<(f64, f64)>,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Next example expression to insert.
    pub example_index: usize,
    /// Last mouse position while dragging, in terminal cells.
    pub drag_anchor: Option<(u16, u16)>,
    /// Graph canvas origin in terminal cells, set during drawing.
    pub graph_origin: (u16, u16),
    /// Graph canvas size in terminal cells, set during drawing.
    pub graph_cells: (u16, u16),
}

impl App {
    /// Create a new application instance, preloading the given expressions.
    pub fn new(expressions: &[String]) -> Self {
        let mut app = Self {
            functions: FunctionList::new(),
            viewport: Viewport::new(),
            selected: 0,
            input_mode: InputMode::Normal,
            cursor: 0,
            pointer: None,
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
            example_index: 0,
            drag_anchor: None,
            graph_origin: (0, 0),
            graph_cells: (0, 0),
        };

        for text in expressions {
            if app.functions.add().is_none() {
                app.status = format!("Function limit reached ({})", MAX_FUNCTIONS);
                break;
            }
            let last = app.functions.len() - 1;
            app.functions.get_mut(last).unwrap().set_expression(text.clone());
        }

        if app.functions.is_empty() {
            app.functions.add();
        }

        let invalid = app
            .functions
            .entries()
            .iter()
            .filter(|f| !f.is_blank() && !f.is_valid())
            .count();
        if invalid > 0 {
            app.status = format!("{} expression(s) failed to parse", invalid);
        }

        app
    }

    /// Graph canvas size in braille pixels (2 per cell column, 4 per row).
    pub fn canvas_px(&self) -> (f64, f64) {
        (
            f64::from(self.graph_cells.0) * 2.0,
            f64::from(self.graph_cells.1) * 4.0,
        )
    }

    /// Append a fresh entry and select it.
    pub fn add_function(&mut self) {
        match self.functions.add() {
            Some(_) => {
                self.selected = self.functions.len() - 1;
                self.begin_edit();
                self.status = "Function added".to_string();
            },
            None => {
                self.status = format!("Function limit reached ({})", MAX_FUNCTIONS);
            },
        }
    }

    /// Remove the selected entry.
    pub fn remove_selected(&mut self) {
        let Some(entry) = self.functions.get(self.selected) else {
            return;
        };
        let id = entry.id;
        self.functions.remove(id);
        if self.selected >= self.functions.len() && self.selected > 0 {
            self.selected -= 1;
        }
        self.status = "Function removed".to_string();
    }

    /// Toggle visibility of the selected entry.
    pub fn toggle_selected_visibility(&mut self) {
        if let Some(entry) = self.functions.get_mut(self.selected) {
            entry.visible = !entry.visible;
            self.status = if entry.visible {
                "Function shown".to_string()
            } else {
                "Function hidden".to_string()
            };
        }
    }

    /// Remove all entries, leaving one fresh blank entry.
    pub fn clear_all(&mut self) {
        self.functions.clear();
        self.functions.add();
        self.selected = 0;
        self.input_mode = InputMode::Normal;
        self.status = "All functions cleared".to_string();
    }

    /// Select the next entry.
    pub fn select_next(&mut self) {
        if !self.functions.is_empty() {
            self.selected = (self.selected + 1) % self.functions.len();
        }
    }

    /// Select the previous entry.
    pub fn select_prev(&mut self) {
        if !self.functions.is_empty() {
            self.selected = (self.selected + self.functions.len() - 1) % self.functions.len();
        }
    }

    /// Enter insert mode on the selected entry.
    pub fn begin_edit(&mut self) {
        if let Some(entry) = self.functions.get(self.selected) {
            self.cursor = entry.expression.chars().count();
            self.input_mode = InputMode::Insert;
            self.status = "Editing (Esc or Enter to finish)".to_string();
        }
    }

    /// Leave insert mode.
    pub fn end_edit(&mut self) {
        self.input_mode = InputMode::Normal;
        let message = match self.functions.get(self.selected) {
            Some(entry) if entry.is_blank() => "Empty function".to_string(),
            Some(entry) if entry.is_valid() => format!("f(x) = {}", entry.expression),
            Some(entry) => format!("Invalid expression: {}", entry.expression),
            None => "Ready".to_string(),
        };
        self.status = message;
    }

    /// Insert a character at the edit cursor and revalidate.
    pub fn insert_char(&mut self, c: char) {
        let cursor = self.cursor;
        if let Some(entry) = self.functions.get_mut(self.selected) {
            let mut text = entry.expression.clone();
            let at = byte_index(&text, cursor);
            text.insert(at, c);
            entry.set_expression(text);
            self.cursor += 1;
        }
    }

    /// Delete the character before the edit cursor and revalidate.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let cursor = self.cursor;
        if let Some(entry) = self.functions.get_mut(self.selected) {
            let mut text = entry.expression.clone();
            let start = byte_index(&text, cursor - 1);
            let end = byte_index(&text, cursor);
            text.replace_range(start..end, "");
            entry.set_expression(text);
            self.cursor -= 1;
        }
    }

    /// Delete the character under the edit cursor and revalidate.
    pub fn delete_char(&mut self) {
        let cursor = self.cursor;
        if let Some(entry) = self.functions.get_mut(self.selected) {
            let len = entry.expression.chars().count();
            if cursor >= len {
                return;
            }
            let mut text = entry.expression.clone();
            let start = byte_index(&text, cursor);
            let end = byte_index(&text, cursor + 1);
            text.replace_range(start..end, "");
            entry.set_expression(text);
        }
    }

    /// Move the edit cursor left.
    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the edit cursor right.
    pub fn cursor_right(&mut self) {
        if let Some(entry) = self.functions.get(self.selected) {
            let len = entry.expression.chars().count();
            self.cursor = (self.cursor + 1).min(len);
        }
    }

    /// Move the edit cursor to the start of the expression.
    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the edit cursor past the end of the expression.
    pub fn cursor_end(&mut self) {
        if let Some(entry) = self.functions.get(self.selected) {
            self.cursor = entry.expression.chars().count();
        }
    }

    /// Insert the next example expression into the first blank entry.
    pub fn insert_example(&mut self) {
        let example = EXAMPLES[self.example_index % EXAMPLES.len()];
        self.example_index += 1;

        let index = match self.functions.first_blank_index() {
            Some(i) => i,
            None => {
                if self.functions.add().is_none() {
                    self.status = format!("Function limit reached ({})", MAX_FUNCTIONS);
                    return;
                }
                self.functions.len() - 1
            },
        };

        self.functions.get_mut(index).unwrap().set_expression(example);
        self.selected = index;
        self.status = format!("Example: {}", example);
    }

    /// Pan the viewport by a pixel delta.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.viewport.pan_pixels(dx, dy);
    }

    /// Zoom by a factor, reporting the resulting scale.
    pub fn zoom(&mut self, factor: f64) {
        self.viewport.zoom(factor);
        self.status = format!("Scale: {:.1} px/unit", self.viewport.scale);
    }

    /// Reset zoom and pan.
    pub fn reset_view(&mut self) {
        self.viewport.reset();
        self.status = "View reset".to_string();
    }

    /// Toggle the grid overlay.
    pub fn toggle_grid(&mut self) {
        self.viewport.show_grid = !self.viewport.show_grid;
        self.status = toggle_status("Grid", self.viewport.show_grid);
    }

    /// Toggle the axes overlay.
    pub fn toggle_axes(&mut self) {
        self.viewport.show_axes = !self.viewport.show_axes;
        self.status = toggle_status("Axes", self.viewport.show_axes);
    }

    /// Toggle the axis labels.
    pub fn toggle_labels(&mut self) {
        self.viewport.show_labels = !self.viewport.show_labels;
        self.status = toggle_status("Labels", self.viewport.show_labels);
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Update the pointer readout from a canvas pixel position.
    pub fn pointer_moved(&mut self, px: f64, py: f64) {
        let (width, height) = self.canvas_px();
        if width > 0.0 && height > 0.0 {
            self.pointer = Some(self.viewport.screen_to_world(px, py, width, height));
        }
    }

    /// Export the current scene as a PNG.
    ///
    /// Uses the live canvas size when one has been drawn, otherwise a
    /// default raster size.
    pub fn export_image(&mut self, path: &Path) {
        let (width, height) = match self.canvas_px() {
            (w, h) if w > 0.0 && h > 0.0 => (w, h),
            _ => DEFAULT_EXPORT_SIZE,
        };

        match self.render_to_png(path, width, height) {
            Ok(()) => {
                self.status = format!("Exported to {}", path.display());
            },
            Err(e) => {
                self.status = format!("Export failed: {}", e);
                tracing::error!("Export failed: {}", e);
            },
        }
    }

    /// Render the current scene at the given pixel size and save a PNG.
    pub fn render_to_png(&self, path: &Path, width: f64, height: f64) -> Result<()> {
        let scene = render::build_scene(&self.viewport, &self.functions, width, height);
        export::export_png(&scene, path)
    }

    /// Copy the function list to the clipboard.
    pub fn copy_functions(&mut self) {
        match util::copy_function_list(&self.functions, &self.viewport) {
            Ok(()) => self.status = "Functions copied!".to_string(),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }

    /// Default export path in the working directory.
    pub fn default_export_path(&self) -> PathBuf {
        PathBuf::from("graph.png")
    }
}

/// Status text for an on/off toggle.
fn toggle_status(what: &str, on: bool) -> String {
    format!("{}: {}", what, if on { "ON" } else { "OFF" })
}

/// Byte offset of a character index, clamped to the end of the string.
fn byte_index(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(exprs: &[&str]) -> App {
        let owned: Vec<String> = exprs.iter().map(|s| s.to_string()).collect();
        App::new(&owned)
    }

    #[test]
    fn new_app_has_one_blank_entry() {
        let app = App::new(&[]);
        assert_eq!(app.functions.len(), 1);
        assert!(app.functions.get(0).unwrap().is_blank());
    }

    #[test]
    fn preloaded_expressions_are_validated() {
        let app = app_with(&["x^2", "x +"]);
        assert!(app.functions.get(0).unwrap().is_valid());
        assert!(!app.functions.get(1).unwrap().is_valid());
        assert!(app.status.contains("failed to parse"));
    }

    #[test]
    fn editing_updates_text_and_validity() {
        let mut app = App::new(&[]);
        app.begin_edit();
        for c in "x^2".chars() {
            app.insert_char(c);
        }
        assert!(app.functions.get(0).unwrap().is_valid());

        app.backspace();
        assert_eq!(app.functions.get(0).unwrap().expression, "x^");
        assert!(!app.functions.get(0).unwrap().is_valid());

        app.end_edit();
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn cursor_stays_inside_the_text() {
        let mut app = app_with(&["x"]);
        app.begin_edit();
        assert_eq!(app.cursor, 1);
        app.cursor_right();
        assert_eq!(app.cursor, 1);
        app.cursor_left();
        app.cursor_left();
        assert_eq!(app.cursor, 0);
        app.backspace(); // no-op at the start
        assert_eq!(app.functions.get(0).unwrap().expression, "x");
    }

    #[test]
    fn remove_adjusts_selection() {
        let mut app = app_with(&["x", "x^2"]);
        app.selected = 1;
        app.remove_selected();
        assert_eq!(app.functions.len(), 1);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn clear_all_leaves_one_blank() {
        let mut app = app_with(&["x", "x^2", "sin(x)"]);
        app.clear_all();
        assert_eq!(app.functions.len(), 1);
        assert!(app.functions.get(0).unwrap().is_blank());
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn examples_fill_the_first_blank_entry() {
        let mut app = App::new(&[]);
        app.insert_example();
        assert_eq!(app.functions.get(0).unwrap().expression, EXAMPLES[0]);
        assert_eq!(app.functions.len(), 1, "blank entry was reused");

        app.insert_example();
        assert_eq!(app.functions.len(), 2, "no blank left, appended");
        assert_eq!(app.functions.get(1).unwrap().expression, EXAMPLES[1]);
    }

    #[test]
    fn pointer_readout_uses_canvas_size() {
        let mut app = App::new(&[]);
        app.graph_cells = (100, 50); // 200 x 200 px
        app.pointer_moved(100.0, 100.0);
        let (x, y) = app.pointer.unwrap();
        assert!(x.abs() < 1e-9 && y.abs() < 1e-9);
    }
}
