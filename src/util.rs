//! Utility functions for Ordinate.

use crate::clipboard;
use crate::error::Result;
use crate::function::FunctionList;
use crate::viewport::Viewport;

/// Copy the function list and current view to the clipboard as text.
pub fn copy_function_list(functions: &FunctionList, viewport: &Viewport) -> Result<()> {
    clipboard::copy_to_clipboard(&format_function_list(functions, viewport))
}

/// Render the function list and view parameters as plain text.
pub fn format_function_list(functions: &FunctionList, viewport: &Viewport) -> String {
    let mut text = String::from("Functions\n");
    text.push_str(&"=".repeat(40));
    text.push('\n');

    if functions.is_empty() {
        text.push_str("(none)\n");
    }

    for (i, entry) in functions.entries().iter().enumerate() {
        let marker = if !entry.visible {
            "hidden"
        } else if entry.is_blank() {
            "blank"
        } else if entry.is_valid() {
            "ok"
        } else {
            "invalid"
        };
        text.push_str(&format!(
            "f{}(x) = {}  [{}]\n",
            i + 1,
            entry.expression,
            marker
        ));
    }

    text.push_str(&format!(
        "\nView: center = ({:.4}, {:.4}), scale = {:.1} px/unit\n",
        viewport.center_x, viewport.center_y, viewport.scale
    ));

    text
}
