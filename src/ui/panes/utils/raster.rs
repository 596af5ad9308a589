//! Character rasterizer for the retained scene
//!
//! The grid view draws into a [`Scene`] in character coordinates; this module
//! turns that arena into styled terminal lines. Rasterization is stateless
//! and happens every frame; the scene is the source of truth and the raster
//! is throwaway.
//!
//! Mapping of primitives:
//! - rectangles become box-drawing outlines (heavy when `stroke_width >= 2`)
//! - single vertical-segment paths become cell dividers (`┃`, `┆`, or `│`),
//!   drawn on the rows between the box borders
//! - closed paths become the `▲` marker glyph at their starting point
//! - text runs are placed according to their anchor

use crate::ui::theme::DEFAULT_THEME;
use crate::view::{Anchor, Attrs, Element, PathCmd, Scene};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

/// A fixed-size grid of styled characters
pub struct CharRaster {
    width: usize,
    height: usize,
    cells: Vec<(char, Style)>,
}

impl CharRaster {
    pub fn new(width: usize, height: usize) -> Self {
        CharRaster {
            width,
            height,
            cells: vec![(' ', Style::default()); width * height],
        }
    }

    /// Paint one character. Out-of-range coordinates are clipped.
    pub fn put(&mut self, x: i32, y: i32, ch: char, style: Style) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        self.cells[y as usize * self.width + x as usize] = (ch, style);
    }

    pub fn put_str(&mut self, x: i32, y: i32, text: &str, style: Style) {
        for (i, ch) in text.chars().enumerate() {
            self.put(x + i as i32, y, ch, style);
        }
    }

    /// Convert to terminal lines, merging adjacent same-styled characters
    /// into single spans.
    pub fn into_lines(self) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(self.height);
        for row in self.cells.chunks(self.width) {
            let mut spans: Vec<Span<'static>> = Vec::new();
            let mut run = String::new();
            let mut run_style = Style::default();
            for &(ch, style) in row {
                if style != run_style && !run.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut run), run_style));
                }
                run_style = style;
                run.push(ch);
            }
            if !run.is_empty() {
                spans.push(Span::styled(run, run_style));
            }
            lines.push(Line::from(spans));
        }
        lines
    }
}

/// Rasterize a whole scene
pub fn rasterize(scene: &Scene) -> CharRaster {
    let (width, height) = extent(scene);
    let mut raster = CharRaster::new(width, height);
    for element in scene.iter() {
        match element {
            Element::Rect { x, y, w, h, attrs } => draw_rect(&mut raster, *x, *y, *w, *h, attrs),
            Element::Path { cmds, attrs } => draw_path(&mut raster, cmds, attrs),
            Element::Text {
                x,
                y,
                content,
                attrs,
            } => draw_text(&mut raster, *x, *y, content, attrs),
        }
    }
    raster
}

fn style_of(attrs: &Attrs) -> Style {
    Style::default().fg(attrs.fill.unwrap_or(DEFAULT_THEME.fg))
}

fn draw_rect(raster: &mut CharRaster, x: i32, y: i32, w: i32, h: i32, attrs: &Attrs) {
    let heavy = attrs.stroke_width.unwrap_or(1) >= 2;
    let (tl, tr, bl, br, hor, ver) = if heavy {
        ('┏', '┓', '┗', '┛', '━', '┃')
    } else {
        ('┌', '┐', '└', '┘', '─', '│')
    };
    let style = style_of(attrs);

    for dx in 1..w {
        raster.put(x + dx, y, hor, style);
        raster.put(x + dx, y + h, hor, style);
    }
    for dy in 1..h {
        raster.put(x, y + dy, ver, style);
        raster.put(x + w, y + dy, ver, style);
    }
    raster.put(x, y, tl, style);
    raster.put(x + w, y, tr, style);
    raster.put(x, y + h, bl, style);
    raster.put(x + w, y + h, br, style);
}

fn draw_path(raster: &mut CharRaster, cmds: &[PathCmd], attrs: &Attrs) {
    let style = style_of(attrs);
    match cmds {
        // A cell divider: one vertical segment. Only the rows strictly
        // between the box borders are painted.
        [PathCmd::MoveTo(x, y), PathCmd::LineRel(0, dy)] if *dy > 0 => {
            let ch = if attrs.stroke_width.unwrap_or(1) >= 2 {
                '┃'
            } else if attrs.dashed {
                '┆'
            } else {
                '│'
            };
            for row in (y + 1)..(y + dy) {
                raster.put(*x, row, ch, style);
            }
        }
        // Anything longer is the closed marker shape.
        [PathCmd::MoveTo(x, y), ..] => {
            raster.put(*x, *y, '▲', style);
        }
        _ => {}
    }
}

fn draw_text(raster: &mut CharRaster, x: i32, y: i32, content: &str, attrs: &Attrs) {
    let len = content.chars().count() as i32;
    let start = match attrs.anchor {
        Anchor::Start => x,
        Anchor::Middle => x - len / 2,
        Anchor::End => x - len,
    };
    raster.put_str(start, y, content, style_of(attrs));
}

/// Smallest raster that fits every element
fn extent(scene: &Scene) -> (usize, usize) {
    let mut width = 0i32;
    let mut height = 0i32;
    for element in scene.iter() {
        let (x_end, y_end) = match element {
            Element::Rect { x, y, w, h, .. } => (x + w + 1, y + h + 1),
            Element::Text {
                x, y, content, attrs, ..
            } => {
                let len = content.chars().count() as i32;
                let end = match attrs.anchor {
                    Anchor::Start => x + len,
                    Anchor::Middle => x + len / 2 + 1,
                    Anchor::End => *x,
                };
                (end, y + 1)
            }
            Element::Path { cmds, .. } => {
                let mut cx = 0;
                let mut cy = 0;
                let mut max_x = 0;
                let mut max_y = 0;
                for cmd in cmds {
                    match cmd {
                        PathCmd::MoveTo(x, y) => {
                            cx = *x;
                            cy = *y;
                        }
                        PathCmd::LineRel(dx, dy) => {
                            cx += dx;
                            cy += dy;
                        }
                    }
                    max_x = max_x.max(cx + 1);
                    max_y = max_y.max(cy + 1);
                }
                (max_x, max_y)
            }
        };
        width = width.max(x_end);
        height = height.max(y_end);
    }
    // At least one column so an empty scene still chunks into rows cleanly
    (width.max(1) as usize, height.max(0) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Surface;

    #[test]
    fn test_text_anchoring() {
        let mut scene = Scene::new();
        scene.text(4, 0, "0x1f", Attrs::new().anchor(Anchor::End));
        let lines = rasterize(&scene).into_lines();
        let rendered: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(rendered.trim_end(), "0x1f");
    }

    #[test]
    fn test_divider_stays_inside_box() {
        let mut scene = Scene::new();
        scene.rect(0, 0, 10, 2, Attrs::new().stroke_width(2));
        scene.path(
            vec![PathCmd::MoveTo(5, 0), PathCmd::LineRel(0, 2)],
            Attrs::new().dashed(),
        );
        let lines = rasterize(&scene).into_lines();
        let row = |i: usize| -> String {
            lines[i].spans.iter().map(|s| s.content.as_ref()).collect()
        };
        // Borders are untouched; the divider only paints the interior row.
        assert_eq!(row(0).chars().nth(5), Some('━'));
        assert_eq!(row(1).chars().nth(5), Some('┆'));
        assert_eq!(row(2).chars().nth(5), Some('━'));
    }
}
