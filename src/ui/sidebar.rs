//! Function list sidebar.

use crate::app::{App, InputMode};
use crate::function::{FunctionEntry, MAX_FUNCTIONS};
use crate::ui::ThemeColors;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// Draw the function sidebar.
pub(super) fn draw_sidebar(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let editing = app.input_mode == InputMode::Insert;
    let inner_width = area.width.saturating_sub(2) as usize;

    let items: Vec<ListItem<'_>> = app
        .functions
        .entries()
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let selected = idx == app.selected;
            let cursor = (selected && editing).then_some(app.cursor);
            ListItem::new(entry_line(entry, idx, selected, cursor, inner_width, colors))
        })
        .collect();

    let title = format!(" Functions ({}/{}) ", app.functions.len(), MAX_FUNCTIONS);

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .title_style(Style::default().fg(colors.heading))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg)),
    );

    f.render_widget(list, area);
}

/// Build the display line for one entry.
///
/// Layout: color swatch, visibility marker, `f<n>(x) = <text>`, and an
/// error flag when the text is present but invalid. In insert mode the
/// character under the edit cursor is rendered reversed.
fn entry_line<'a>(
    entry: &'a FunctionEntry,
    idx: usize,
    selected: bool,
    cursor: Option<usize>,
    width: usize,
    colors: &ThemeColors,
) -> Line<'a> {
    let swatch_color = Color::Rgb(entry.color.r, entry.color.g, entry.color.b);
    let base = if selected {
        Style::default()
            .fg(colors.cursor_fg)
            .bg(colors.cursor_bg)
            .add_modifier(Modifier::BOLD)
    } else if entry.visible {
        Style::default().fg(colors.text)
    } else {
        Style::default().fg(colors.border)
    };

    let mut spans = vec![
        Span::styled("█ ", Style::default().fg(swatch_color)),
        Span::styled(if entry.visible { "● " } else { "○ " }, base),
        Span::styled(format!("f{}(x) = ", idx + 1), base),
    ];

    let prefix_width: usize = spans.iter().map(|s| s.content.width()).sum();
    let budget = width.saturating_sub(prefix_width + 2);
    let text = truncated(&entry.expression, budget);

    match cursor {
        Some(pos) => {
            let chars: Vec<char> = text.chars().collect();
            let pos = pos.min(chars.len());
            let before: String = chars[..pos].iter().collect();
            let under: String = chars.get(pos).map(|&c| c.to_string()).unwrap_or_else(|| " ".to_string());
            let after: String = chars[pos.saturating_add(1).min(chars.len())..].iter().collect();
            spans.push(Span::styled(before, base));
            spans.push(Span::styled(under, base.add_modifier(Modifier::REVERSED)));
            spans.push(Span::styled(after, base));
        },
        None => {
            spans.push(Span::styled(text, base));
        },
    }

    if !entry.is_blank() && !entry.is_valid() {
        spans.push(Span::styled(
            " !",
            Style::default().fg(colors.error).add_modifier(Modifier::BOLD),
        ));
    }

    Line::from(spans)
}

/// Truncate text to a display width, keeping the tail so the edit cursor
/// region stays visible.
fn truncated(text: &str, budget: usize) -> String {
    if text.width() <= budget {
        return text.to_string();
    }
    let mut out = String::new();
    for c in text.chars().rev() {
        let candidate: String = std::iter::once(c).chain(out.chars()).collect();
        if candidate.width() + 1 > budget {
            break;
        }
        out = candidate;
    }
    format!("…{}", out)
}
