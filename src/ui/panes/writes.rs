//! Write-log pane
//!
//! A running log of the script writes applied so far, one line each:
//! target address, value, the script's note if any, and whether the write
//! landed or was rejected out of bounds.

use crate::memory::Address;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// One applied (or rejected) write
#[derive(Debug, Clone)]
pub struct WriteLogEntry {
    pub address: Address,
    pub value: u32,
    pub note: Option<String>,
    pub ok: bool,
}

/// Render the write-log pane
pub fn render_writes_pane(
    frame: &mut Frame,
    area: Rect,
    entries: &[WriteLogEntry],
    is_focused: bool,
    scroll: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Write Log ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut all_items = Vec::new();
    if entries.is_empty() {
        all_items.push(
            ListItem::new("(no writes applied)").style(Style::default().fg(DEFAULT_THEME.comment)),
        );
    } else {
        for entry in entries {
            let addr_style = if entry.ok {
                Style::default().fg(DEFAULT_THEME.comment)
            } else {
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            };

            let mut spans = vec![
                Span::styled(format!("0x{:08x}", entry.address), addr_style),
                Span::styled(" ← ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(
                    format!("0x{:08x}", entry.value),
                    Style::default().fg(DEFAULT_THEME.secondary),
                ),
            ];

            if !entry.ok {
                spans.push(Span::styled(
                    "  out of bounds",
                    Style::default().fg(DEFAULT_THEME.error),
                ));
            } else if let Some(note) = &entry.note {
                spans.push(Span::styled(
                    format!("  {}", note),
                    Style::default().fg(DEFAULT_THEME.note),
                ));
            }

            all_items.push(ListItem::new(Line::from(spans)));
        }
    }

    // Clamp scroll; `usize::MAX` means "stick to the bottom"
    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let max_scroll = total_items.saturating_sub(visible_height);
    *scroll = (*scroll).min(max_scroll);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
