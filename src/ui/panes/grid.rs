//! Memory grid pane
//!
//! Rasterizes the retained [`Scene`] into styled lines and shows a scrollable
//! window of them. The pane never draws grid content itself; everything
//! visible was put into the scene by [`MemoryView`], either during the
//! initial render or by an incremental cell update.
//!
//! [`MemoryView`]: crate::view::MemoryView

use super::utils::rasterize;
use crate::ui::theme::DEFAULT_THEME;
use crate::view::Scene;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the grid pane
pub fn render_grid_pane(
    frame: &mut Frame,
    area: Rect,
    scene: &Scene,
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
        .title(" Memory Grid ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines = rasterize(scene).into_lines();

    // Clamp the scroll offset to the content
    let total = lines.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let max_scroll = total.saturating_sub(visible_height);
    *scroll = (*scroll).min(max_scroll);

    let visible_items: Vec<ListItem> = lines
        .into_iter()
        .skip(*scroll)
        .take(visible_height)
        .map(ListItem::new)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
