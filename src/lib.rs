//! Ordinate - a terminal-based graphing calculator.
//!
//! Ordinate plots expressions in the single variable `x` over a pannable,
//! zoomable Cartesian grid drawn with braille dots, with vim-style keyboard
//! navigation and mouse support. The same scene can be exported as a PNG.
//!
//! # Features
//!
//! - Up to ten simultaneous functions with per-entry colors and visibility
//! - Pan and zoom with keyboard or mouse, with a live coordinate readout
//! - Grid, axis, and label overlays with independent toggles
//! - Expression validity checking while you type
//! - PNG export, interactive or headless (`--export`)
//! - Gruvbox color themes
//! - Clipboard integration
//!
//! # Example
//!
//! ```ignore
//! use ordinate::render;
//! use ordinate::function::FunctionList;
//! use ordinate::viewport::Viewport;
//!
//! let mut functions = FunctionList::new();
//! functions.add();
//! functions.get_mut(0).unwrap().set_expression("sin(x)");
//!
//! let scene = render::build_scene(&Viewport::new(), &functions, 800.0, 600.0);
//! ordinate::export::export_png(&scene, std::path::Path::new("graph.png"))?;
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod error;
pub mod export;
pub mod expr;
pub mod function;
pub mod render;
pub mod ui;
pub mod util;
pub mod viewport;

pub use error::{OrdinateError, Result};
