use memtty::errors::ViewError;
use memtty::memory::Memory;
use memtty::view::{AddressBase, Element, MemoryView, Scene};
use std::cell::RefCell;
use std::rc::Rc;

fn rendered_view(size: usize, base: AddressBase) -> (Memory, Rc<RefCell<Scene>>, MemoryView) {
    let mut memory = Memory::new(size).unwrap();
    let scene = Rc::new(RefCell::new(Scene::new()));
    let mut view = MemoryView::new(1, 0, &memory, base);
    view.render(&mut memory, &scene).unwrap();
    (memory, scene, view)
}

fn all_text(scene: &Scene) -> Vec<String> {
    scene
        .iter()
        .filter_map(|element| match element {
            Element::Text { content, .. } => Some(content.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_render_populates_one_cell_per_byte() {
    let (_, _, view) = rendered_view(32, AddressBase::Buffer);
    assert!(view.is_rendered());
    assert_eq!(view.cell_count(), 32);
    for offset in 0..32u64 {
        assert!(view.cell_handle(offset).is_some());
    }
    assert!(view.cell_handle(32).is_none());
}

#[test]
fn test_partial_last_row_renders_no_extra_cells() {
    let (_, _, view) = rendered_view(20, AddressBase::Buffer);
    assert_eq!(view.cell_count(), 20);
}

#[test]
fn test_cells_start_at_zero_and_show_current_bytes() {
    let mut memory = Memory::new(32).unwrap();
    // Written before the view exists; the render must pick it up.
    memory.write_u32(0, 0x01020304).unwrap();

    let scene = Rc::new(RefCell::new(Scene::new()));
    let mut view = MemoryView::new(1, 0, &memory, AddressBase::Buffer);
    view.render(&mut memory, &scene).unwrap();

    let scene = scene.borrow();
    let text_at = |offset: u64| {
        scene
            .text_content(view.cell_handle(offset).unwrap())
            .unwrap()
            .to_string()
    };
    assert_eq!(text_at(0), "0x04");
    assert_eq!(text_at(3), "0x01");
    assert_eq!(text_at(4), "0x00");
    assert_eq!(text_at(31), "0x00");
}

#[test]
fn test_incremental_update_touches_only_written_cells() {
    let (mut memory, scene, view) = rendered_view(32, AddressBase::Buffer);

    let before: Vec<Option<String>> = (0..32u64)
        .map(|o| {
            scene
                .borrow()
                .text_content(view.cell_handle(o).unwrap())
                .map(str::to_string)
        })
        .collect();
    let elements_before = scene.borrow().len();

    memory.write_u32(0, 0xff).unwrap();

    // No element was added or removed; cells were rewritten in place.
    assert_eq!(scene.borrow().len(), elements_before);

    for offset in 0..32u64 {
        let now = scene
            .borrow()
            .text_content(view.cell_handle(offset).unwrap())
            .map(str::to_string);
        match offset {
            0 => assert_eq!(now.as_deref(), Some("0xff")),
            1..=3 => assert_eq!(now.as_deref(), Some("0x00")),
            _ => assert_eq!(now, before[offset as usize], "cell {} must not change", offset),
        }
    }
}

#[test]
fn test_failed_write_changes_nothing() {
    let (mut memory, scene, view) = rendered_view(16, AddressBase::Buffer);

    assert!(memory.write_u32(13, 0xffffffff).is_err());

    for offset in 0..16u64 {
        let text = scene
            .borrow()
            .text_content(view.cell_handle(offset).unwrap())
            .map(str::to_string);
        assert_eq!(text.as_deref(), Some("0x00"));
    }
}

#[test]
fn test_render_is_one_shot() {
    let (mut memory, scene, mut view) = rendered_view(16, AddressBase::Buffer);
    let elements_before = scene.borrow().len();

    let err = view.render(&mut memory, &scene).unwrap_err();
    assert_eq!(err, ViewError::AlreadyRendered);
    assert_eq!(scene.borrow().len(), elements_before);
    assert_eq!(memory.watcher_count(), 1);
}

#[test]
fn test_cell_handles_are_stable_across_updates() {
    let (mut memory, _, view) = rendered_view(16, AddressBase::Buffer);
    let handle = view.cell_handle(0).unwrap();
    memory.write_u32(0, 0xdeadbeef).unwrap();
    assert_eq!(view.cell_handle(0), Some(handle));
}

#[test]
fn test_buffer_mode_address_labels() {
    // 32 bytes: labels sit on every 4th cell; row 0 holds offsets 31..16,
    // so its labeled cells read 28, 24, 20, 16.
    let (_, scene, _) = rendered_view(32, AddressBase::Buffer);
    let texts = all_text(&scene.borrow());
    for expected in ["0x0000001c", "0x00000018", "0x00000014", "0x00000010"] {
        assert!(
            texts.iter().any(|t| t == expected),
            "missing address label {}",
            expected
        );
    }
}

#[test]
fn test_fixed_base_address_labels() {
    let (_, scene, _) = rendered_view(64, AddressBase::Fixed(0xffff_0000));
    let texts = all_text(&scene.borrow());
    assert!(texts.iter().any(|t| t == "0xffff003c"));
    assert!(texts.iter().any(|t| t == "0xffff0000"));
}

#[test]
fn test_marker_is_decorative_text() {
    let (_, scene, _) = rendered_view(16, AddressBase::Buffer);
    let texts = all_text(&scene.borrow());
    assert!(texts.iter().any(|t| t == "ebp"));
}

#[test]
fn test_two_views_observe_one_memory() {
    let mut memory = Memory::new(16).unwrap();

    let near_scene = Rc::new(RefCell::new(Scene::new()));
    let mut near = MemoryView::new(1, 0, &memory, AddressBase::Buffer);
    near.render(&mut memory, &near_scene).unwrap();

    let far_scene = Rc::new(RefCell::new(Scene::new()));
    let mut far = MemoryView::new(1, 0, &memory, AddressBase::Fixed(0xffff_0000));
    far.render(&mut memory, &far_scene).unwrap();

    assert_eq!(memory.watcher_count(), 2);
    memory.write_u32(0, 0xab).unwrap();

    let near_text = near_scene
        .borrow()
        .text_content(near.cell_handle(0).unwrap())
        .map(str::to_string);
    let far_text = far_scene
        .borrow()
        .text_content(far.cell_handle(0).unwrap())
        .map(str::to_string);
    assert_eq!(near_text.as_deref(), Some("0xab"));
    assert_eq!(far_text.as_deref(), Some("0xab"));
}
