//! Function entries and the entry list.

use crate::expr::{self, CompiledExpr};
use crate::render::scene::Rgb;

/// Maximum number of function entries.
pub const MAX_FUNCTIONS: usize = 10;

/// Curve color palette, assigned round-robin at creation.
pub const PALETTE: [Rgb; 8] = [
    Rgb::new(0xff, 0x00, 0x00),
    Rgb::new(0x00, 0x66, 0xcc),
    Rgb::new(0x00, 0xcc, 0x66),
    Rgb::new(0xff, 0x99, 0x00),
    Rgb::new(0x99, 0x00, 0xcc),
    Rgb::new(0xcc, 0x00, 0x66),
    Rgb::new(0x00, 0x66, 0x66),
    Rgb::new(0xcc, 0x66, 0x00),
];

/// A single function entry.
#[derive(Debug, Clone)]
pub struct FunctionEntry {
    /// Unique id within this session.
    pub id: u64,
    /// Expression text as typed.
    pub expression: String,
    /// Curve color, fixed at creation.
    pub color: Rgb,
    /// Whether the curve is drawn.
    pub visible: bool,
    /// Parsed expression; `None` while the text is invalid.
    pub compiled: Option<CompiledExpr>,
}

impl FunctionEntry {
    /// Whether the current text passed the validity gate.
    pub fn is_valid(&self) -> bool {
        self.compiled.is_some()
    }

    /// Whether the entry holds only whitespace.
    pub fn is_blank(&self) -> bool {
        self.expression.trim().is_empty()
    }

    /// Replace the expression text and re-run the validity gate.
    pub fn set_expression(&mut self, text: impl Into<String>) {
        self.expression = text.into();
        self.compiled = expr::compile_checked(&self.expression);
    }

    /// Whether the curve should be rasterized this frame.
    pub fn should_plot(&self) -> bool {
        self.visible && self.is_valid() && !self.is_blank()
    }
}

/// Ordered list of function entries, capped at [`MAX_FUNCTIONS`].
#[derive(Debug, Clone, Default)]
pub struct FunctionList {
    entries: Vec<FunctionEntry>,
    next_id: u64,
}

impl FunctionList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fresh blank entry, returning its id.
    ///
    /// Returns `None` without changing the list when it is already full.
    pub fn add(&mut self) -> Option<u64> {
        if self.entries.len() >= MAX_FUNCTIONS {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(FunctionEntry {
            id,
            expression: String::new(),
            color: PALETTE[self.entries.len() % PALETTE.len()],
            visible: true,
            compiled: None,
        });
        Some(id)
    }

    /// Remove the entry with the given id. Other entries keep their colors
    /// and relative order.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|f| f.id != id);
        self.entries.len() != before
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entry count.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in order.
    pub fn entries(&self) -> &[FunctionEntry] {
        &self.entries
    }

    /// Entry at a position.
    pub fn get(&self, index: usize) -> Option<&FunctionEntry> {
        self.entries.get(index)
    }

    /// Mutable entry at a position.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut FunctionEntry> {
        self.entries.get_mut(index)
    }

    /// First blank entry, if any (used when loading examples).
    pub fn first_blank_index(&self) -> Option<usize> {
        self.entries.iter().position(|f| f.is_blank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_caps_at_maximum() {
        let mut list = FunctionList::new();
        for _ in 0..MAX_FUNCTIONS {
            assert!(list.add().is_some());
        }
        assert!(list.add().is_none());
        assert_eq!(list.len(), MAX_FUNCTIONS);
    }

    #[test]
    fn colors_cycle_through_palette() {
        let mut list = FunctionList::new();
        for _ in 0..MAX_FUNCTIONS {
            list.add();
        }
        assert_eq!(list.get(0).unwrap().color, PALETTE[0]);
        assert_eq!(list.get(7).unwrap().color, PALETTE[7]);
        assert_eq!(list.get(8).unwrap().color, PALETTE[0]);
        assert_eq!(list.get(9).unwrap().color, PALETTE[1]);
    }

    #[test]
    fn remove_keeps_other_colors_and_order() {
        let mut list = FunctionList::new();
        let ids: Vec<u64> = (0..4).map(|_| list.add().unwrap()).collect();
        assert!(list.remove(ids[1]));
        assert_eq!(list.len(), 3);

        let remaining: Vec<u64> = list.entries().iter().map(|f| f.id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2], ids[3]]);
        assert_eq!(list.get(1).unwrap().color, PALETTE[2]);
        assert_eq!(list.get(2).unwrap().color, PALETTE[3]);

        assert!(!list.remove(ids[1]), "second removal is a no-op");
    }

    #[test]
    fn validity_tracks_text_edits() {
        let mut list = FunctionList::new();
        list.add();
        let entry = list.get_mut(0).unwrap();
        assert!(!entry.is_valid());

        entry.set_expression("sin(x)");
        assert!(entry.is_valid());
        assert!(entry.should_plot());

        entry.set_expression("sin(x");
        assert!(!entry.is_valid());
        assert!(!entry.should_plot());
    }

    #[test]
    fn hidden_entries_do_not_plot() {
        let mut list = FunctionList::new();
        list.add();
        let entry = list.get_mut(0).unwrap();
        entry.set_expression("x");
        entry.visible = false;
        assert!(entry.is_valid());
        assert!(!entry.should_plot());
    }
}
