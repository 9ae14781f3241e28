//! Ordinate - a terminal-based graphing calculator.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ordinate::app::{App, InputMode, KEY_PAN_STEP};
use ordinate::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "ordinate")]
#[command(about = "A terminal-based graphing calculator", long_about = None)]
struct Args {
    /// Expressions in x to plot, e.g. "x^2" "sin(x)"
    expressions: Vec<String>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Render a PNG to the given path and exit without opening the UI
    #[arg(long)]
    export: Option<PathBuf>,

    /// Export image width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Export image height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .append(false)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Ordinate");
    }

    // Headless export mode: render once and exit
    if let Some(export_path) = &args.export {
        let app = App::new(&args.expressions);
        app.render_to_png(export_path, f64::from(args.width), f64::from(args.height))?;
        println!("Exported to {}", export_path.display());
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(&args.expressions);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Ordinate exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                // Insert mode - handle separately
                if app.input_mode == InputMode::Insert {
                    match key.code {
                        KeyCode::Esc | KeyCode::Enter => app.end_edit(),
                        KeyCode::Backspace => app.backspace(),
                        KeyCode::Delete => app.delete_char(),
                        KeyCode::Left => app.cursor_left(),
                        KeyCode::Right => app.cursor_right(),
                        KeyCode::Home => app.cursor_home(),
                        KeyCode::End => app.cursor_end(),
                        KeyCode::Char(c) => app.insert_char(c),
                        _ => {},
                    }
                    continue;
                }

                // Normal mode
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                    // Function entries
                    (KeyModifiers::NONE, KeyCode::Char('i'))
                    | (KeyModifiers::NONE, KeyCode::Enter) => {
                        app.begin_edit();
                    },
                    (KeyModifiers::NONE, KeyCode::Char('a')) => app.add_function(),
                    (KeyModifiers::NONE, KeyCode::Char('d')) => app.remove_selected(),
                    (KeyModifiers::NONE, KeyCode::Char('v')) => app.toggle_selected_visibility(),
                    (KeyModifiers::NONE, KeyCode::Char('c')) => app.clear_all(),
                    (KeyModifiers::NONE, KeyCode::Char('e')) => app.insert_example(),

                    // Selection
                    (KeyModifiers::NONE, KeyCode::Tab)
                    | (KeyModifiers::NONE, KeyCode::Char('j')) => app.select_next(),
                    (KeyModifiers::SHIFT, KeyCode::BackTab)
                    | (KeyModifiers::NONE, KeyCode::BackTab)
                    | (KeyModifiers::NONE, KeyCode::Char('k')) => app.select_prev(),

                    // Pan
                    (KeyModifiers::NONE, KeyCode::Left)
                    | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                        app.pan(KEY_PAN_STEP, 0.0);
                    },
                    (KeyModifiers::NONE, KeyCode::Right)
                    | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                        app.pan(-KEY_PAN_STEP, 0.0);
                    },
                    (KeyModifiers::NONE, KeyCode::Up) => app.pan(0.0, KEY_PAN_STEP),
                    (KeyModifiers::NONE, KeyCode::Down) => app.pan(0.0, -KEY_PAN_STEP),

                    // Zoom
                    (KeyModifiers::NONE, KeyCode::Char('+'))
                    | (KeyModifiers::SHIFT, KeyCode::Char('+'))
                    | (KeyModifiers::NONE, KeyCode::Char('=')) => app.zoom(1.5),
                    (KeyModifiers::NONE, KeyCode::Char('-'))
                    | (KeyModifiers::NONE, KeyCode::Char('_'))
                    | (KeyModifiers::SHIFT, KeyCode::Char('_')) => app.zoom(0.75),
                    (KeyModifiers::NONE, KeyCode::Char('0')) => app.reset_view(),

                    // Overlay toggles
                    (KeyModifiers::NONE, KeyCode::Char('g')) => app.toggle_grid(),
                    (KeyModifiers::SHIFT, KeyCode::Char('A')) => app.toggle_axes(),
                    (KeyModifiers::SHIFT, KeyCode::Char('L')) => app.toggle_labels(),

                    // Features
                    (KeyModifiers::NONE, KeyCode::Char('s')) => {
                        let path = app.default_export_path();
                        app.export_image(&path);
                    },
                    (KeyModifiers::NONE, KeyCode::Char('y')) => app.copy_functions(),
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),
                    (KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                        app.status = "Help: q=quit, i=edit, a=add, d=delete, v=hide, arrows=pan, +-=zoom, 0=reset, s=export, y=copy".to_string();
                    },

                    _ => {},
                }
            },
            Event::Mouse(mouse) => handle_mouse(&mut app, mouse),
            _ => {},
        }
    }
}

/// Handle mouse interaction on the graph canvas: drag to pan, wheel to
/// zoom, motion for the coordinate readout.
fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if graph_pixel(app, mouse.column, mouse.row).is_some() {
                app.drag_anchor = Some((mouse.column, mouse.row));
            }
        },
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some((last_col, last_row)) = app.drag_anchor {
                // One terminal cell is 2x4 braille pixels.
                let dx = (i32::from(mouse.column) - i32::from(last_col)) * 2;
                let dy = (i32::from(mouse.row) - i32::from(last_row)) * 4;
                app.pan(f64::from(dx), f64::from(dy));
                app.drag_anchor = Some((mouse.column, mouse.row));
            }
            if let Some((px, py)) = graph_pixel(app, mouse.column, mouse.row) {
                app.pointer_moved(px, py);
            }
        },
        MouseEventKind::Up(MouseButton::Left) => {
            app.drag_anchor = None;
        },
        MouseEventKind::Moved => {
            if let Some((px, py)) = graph_pixel(app, mouse.column, mouse.row) {
                app.pointer_moved(px, py);
            }
        },
        MouseEventKind::ScrollUp => app.zoom(1.1),
        MouseEventKind::ScrollDown => app.zoom(0.9),
        _ => {},
    }
}

/// Map a terminal cell position to braille-pixel canvas coordinates, or
/// `None` when the position is outside the graph canvas.
fn graph_pixel(app: &App, column: u16, row: u16) -> Option<(f64, f64)> {
    let (ox, oy) = app.graph_origin;
    let (cols, rows) = app.graph_cells;
    if column < ox || row < oy || column >= ox + cols || row >= oy + rows {
        return None;
    }
    // Center of the cell, in braille pixels.
    let px = f64::from(column - ox) * 2.0 + 1.0;
    let py = f64::from(row - oy) * 4.0 + 2.0;
    Some((px, py))
}
