//! The grid view: full initial render, then targeted in-place updates
//!
//! [`MemoryView`] translates buffer offsets into a stack-style grid (see
//! [`layout`](super::layout)), draws the whole grid exactly once into a
//! shared [`Scene`], and registers itself as a change watcher on the
//! [`Memory`] it observes. From then on every write repaints only the cells
//! whose bytes changed: the watcher looks up each address in the frozen
//! cell map and rewrites that cell's text, touching nothing else.
//!
//! # Lifecycle
//!
//! A view is `Unrendered` until [`MemoryView::render`] succeeds, `Rendered`
//! forever after. `render` is one-shot; a second call fails with
//! [`ViewError::AlreadyRendered`] and leaves the scene untouched. The cell
//! map is populated all-or-nothing during the render pass and never mutated
//! afterwards.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use super::format::{fmt_address, fmt_byte};
use super::layout::{AddressBase, GridLayout, CELLS_PER_ROW, CELL_W, ROW_H};
use super::scene::Scene;
use super::surface::{Anchor, Attrs, ElementId, PathCmd, Surface};
use crate::errors::ViewError;
use crate::memory::{Address, Memory};
use crate::ui::theme::DEFAULT_THEME;

enum ViewState {
    Unrendered,
    Rendered {
        /// Buffer offset → text element of that cell. Frozen after render;
        /// the change watcher holds a second reference.
        cells: Rc<FxHashMap<Address, ElementId>>,
    },
}

/// Renders one [`Memory`] region as a grid and keeps it visually consistent
pub struct MemoryView {
    layout: GridLayout,
    state: ViewState,
}

impl MemoryView {
    /// Create an unrendered view over `memory`, with its top-left corner at
    /// `(x, y)` on the surface. `base` selects how cells are labeled.
    pub fn new(x: i32, y: i32, memory: &Memory, base: AddressBase) -> Self {
        MemoryView {
            layout: GridLayout::new(x, y, memory.size(), base),
            state: ViewState::Unrendered,
        }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self.state, ViewState::Rendered { .. })
    }

    /// Number of rendered cells (0 before render)
    pub fn cell_count(&self) -> usize {
        match &self.state {
            ViewState::Rendered { cells } => cells.len(),
            ViewState::Unrendered => 0,
        }
    }

    /// The text element behind a buffer offset, once rendered
    pub fn cell_handle(&self, offset: Address) -> Option<ElementId> {
        match &self.state {
            ViewState::Rendered { cells } => cells.get(&offset).copied(),
            ViewState::Unrendered => None,
        }
    }

    /// Full initial render.
    ///
    /// Draws the base-pointer marker, every row box, the cell dividers and
    /// address labels, and one hex text per byte, then subscribes this view
    /// to `memory` so subsequent writes update cells in place.
    pub fn render(
        &mut self,
        memory: &mut Memory,
        scene: &Rc<RefCell<Scene>>,
    ) -> Result<(), ViewError> {
        if self.is_rendered() {
            return Err(ViewError::AlreadyRendered);
        }

        let mut cells = FxHashMap::default();
        {
            let mut guard = scene.borrow_mut();
            let surface: &mut Scene = &mut guard;
            self.render_marker(surface);

            for row in 0..self.layout.rows() {
                self.render_row_box(surface, row);

                for cell in 0..CELLS_PER_ROW {
                    // Partial last row: positions past offset 0 stay empty.
                    let Some(offset) = self.layout.offset(row, cell) else {
                        continue;
                    };

                    self.render_cell_divider(surface, row, cell);

                    if cell % 4 == 3 {
                        self.render_address(surface, row, cell, self.layout.display_address(offset));
                    }

                    let value = memory
                        .read_u8(offset)
                        .expect("grid offsets are always inside the region");
                    let id = self.render_value(surface, row, cell, value);
                    cells.insert(offset, id);
                }
            }
        }

        let cells = Rc::new(cells);
        let handles = Rc::clone(&cells);
        let scene = Rc::clone(scene);
        memory.subscribe(Box::new(move |address, bytes| {
            let mut scene = scene.borrow_mut();
            for (i, &byte) in bytes.iter().enumerate() {
                let address = address + i as Address;
                let id = handles
                    .get(&address)
                    .unwrap_or_else(|| panic!("{}", ViewError::MissingCellHandle { address }));
                scene.update_text(*id, &fmt_byte(byte));
            }
        }));

        self.state = ViewState::Rendered { cells };
        Ok(())
    }

    fn render_row_box(&self, surface: &mut dyn Surface, row: usize) {
        let (x, y) = self.layout.row_origin(row);
        surface.rect(
            x,
            y,
            CELLS_PER_ROW as i32 * CELL_W,
            ROW_H,
            Attrs::new()
                .stroke_width(2)
                .fill(DEFAULT_THEME.grid_line_major),
        );
    }

    fn render_cell_divider(&self, surface: &mut dyn Surface, row: usize, cell: usize) {
        if cell == 0 {
            return;
        }
        let (x, y) = self.layout.cell_origin(row, cell);
        let cmds = vec![PathCmd::MoveTo(x, y), PathCmd::LineRel(0, ROW_H)];
        if cell % 4 == 0 {
            surface.path(
                cmds,
                Attrs::new()
                    .stroke_width(2)
                    .fill(DEFAULT_THEME.grid_line_major),
            );
        } else {
            surface.path(cmds, Attrs::new().dashed().fill(DEFAULT_THEME.grid_line));
        }
    }

    fn render_address(&self, surface: &mut dyn Surface, row: usize, cell: usize, address: Address) {
        let (x, y) = self.layout.cell_origin(row, cell);
        surface.text(
            x + CELL_W,
            y - 1,
            &fmt_address(address),
            Attrs::new().fill(DEFAULT_THEME.address).anchor(Anchor::End),
        );
    }

    fn render_value(&self, surface: &mut dyn Surface, row: usize, cell: usize, value: u8) -> ElementId {
        let (x, y) = self.layout.cell_origin(row, cell);
        // One column right of center, so the 4-char text clears the divider
        // column at the cell's left edge.
        surface.text(
            x + CELL_W / 2 + 1,
            y + ROW_H / 2,
            &fmt_byte(value),
            Attrs::new().fill(DEFAULT_THEME.value).anchor(Anchor::Middle),
        )
    }

    fn render_marker(&self, surface: &mut dyn Surface) {
        let (x, y) = self.layout.marker_origin();
        surface.path(
            vec![
                PathCmd::MoveTo(x, y),
                PathCmd::LineRel(-1, 1),
                PathCmd::LineRel(2, 0),
                PathCmd::LineRel(-1, -1),
            ],
            Attrs::new().fill(DEFAULT_THEME.marker),
        );
        surface.text(
            x + 2,
            y,
            "ebp",
            Attrs::new().fill(DEFAULT_THEME.marker),
        );
    }
}
