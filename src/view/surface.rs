//! The drawing-surface contract
//!
//! A [`Surface`] exposes three retained primitives (rectangle, path, text),
//! each returning an opaque [`ElementId`] that stays valid for the life of
//! the surface. Attributes are set at creation through the fluent [`Attrs`]
//! builder; text content can be rewritten later via
//! [`Surface::update_text`], which is the whole basis of incremental
//! repaints: the grid never redraws a cell, it rewrites the cell's text.
//!
//! Coordinates are character cells (x grows right, y grows down).

use ratatui::style::Color;

/// Opaque handle to a retained element: an index into the surface's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub(crate) usize);

/// Horizontal anchoring of a text element relative to its x coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    Start,
    Middle,
    End,
}

/// One step of a path. Paths are how the grid draws cell dividers (a single
/// vertical segment) and the base-pointer marker (a closed triangle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathCmd {
    /// Absolute move
    MoveTo(i32, i32),
    /// Relative line
    LineRel(i32, i32),
}

/// Visual attributes, set fluently at element creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attrs {
    pub stroke_width: Option<u8>,
    pub dashed: bool,
    pub fill: Option<Color>,
    pub anchor: Anchor,
}

impl Attrs {
    pub fn new() -> Self {
        Attrs::default()
    }

    pub fn stroke_width(mut self, width: u8) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }
}

/// A retained drawing surface
pub trait Surface {
    /// Draw a rectangle with its top-left corner at `(x, y)`, `w` columns
    /// wide and `h` rows tall (borders inclusive).
    fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, attrs: Attrs) -> ElementId;

    /// Draw a path (lines or a closed marker shape).
    fn path(&mut self, cmds: Vec<PathCmd>, attrs: Attrs) -> ElementId;

    /// Draw a text run anchored at `(x, y)`.
    fn text(&mut self, x: i32, y: i32, content: &str, attrs: Attrs) -> ElementId;

    /// Replace the content of an existing text element in place. Position,
    /// anchor, and attributes are untouched.
    fn update_text(&mut self, id: ElementId, content: &str);
}
