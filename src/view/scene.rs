//! Retained scene: the in-repo [`Surface`] implementation
//!
//! [`Scene`] stores every element in an arena indexed by [`ElementId`].
//! Nothing is ever removed: the grid is drawn once and then mutated only
//! through [`Surface::update_text`]. The TUI rasterizes the arena each frame,
//! and tests inspect it directly to observe exactly what a render or an
//! incremental update touched.

use super::surface::{Attrs, ElementId, PathCmd, Surface};

/// A retained element
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Rect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        attrs: Attrs,
    },
    Path {
        cmds: Vec<PathCmd>,
        attrs: Attrs,
    },
    Text {
        x: i32,
        y: i32,
        content: String,
        attrs: Attrs,
    },
}

/// Element arena implementing [`Surface`]
#[derive(Debug, Default)]
pub struct Scene {
    elements: Vec<Element>,
}

impl Scene {
    pub fn new() -> Self {
        Scene {
            elements: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Content of a text element, for tests and debugging
    pub fn text_content(&self, id: ElementId) -> Option<&str> {
        match self.elements.get(id.0) {
            Some(Element::Text { content, .. }) => Some(content.as_str()),
            _ => None,
        }
    }

    fn push(&mut self, element: Element) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }
}

impl Surface for Scene {
    fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, attrs: Attrs) -> ElementId {
        self.push(Element::Rect { x, y, w, h, attrs })
    }

    fn path(&mut self, cmds: Vec<PathCmd>, attrs: Attrs) -> ElementId {
        self.push(Element::Path { cmds, attrs })
    }

    fn text(&mut self, x: i32, y: i32, content: &str, attrs: Attrs) -> ElementId {
        self.push(Element::Text {
            x,
            y,
            content: content.to_string(),
            attrs,
        })
    }

    fn update_text(&mut self, id: ElementId, content: &str) {
        match self.elements.get_mut(id.0) {
            Some(Element::Text { content: slot, .. }) => {
                slot.clear();
                slot.push_str(content);
            }
            Some(other) => panic!("element {} is not a text element: {:?}", id.0, other),
            None => panic!("stale element id {}", id.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_arena_ids_are_dense() {
        let mut scene = Scene::new();
        let a = scene.rect(0, 0, 4, 2, Attrs::new());
        let b = scene.text(1, 1, "0x00", Attrs::new().fill(Color::Black));
        assert_eq!(a, ElementId(0));
        assert_eq!(b, ElementId(1));
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn test_update_text_rewrites_in_place() {
        let mut scene = Scene::new();
        let id = scene.text(0, 0, "0x00", Attrs::new());
        scene.update_text(id, "0xff");
        assert_eq!(scene.text_content(id), Some("0xff"));
        assert_eq!(scene.len(), 1);
    }

    #[test]
    #[should_panic(expected = "not a text element")]
    fn test_update_text_on_rect_panics() {
        let mut scene = Scene::new();
        let id = scene.rect(0, 0, 4, 2, Attrs::new());
        scene.update_text(id, "0xff");
    }
}
