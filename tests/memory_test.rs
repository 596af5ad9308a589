use memtty::errors::MemoryError;
use memtty::memory::{Memory, MAX_REGION_SIZE};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_little_endian_write() {
    let mut memory = Memory::new(16).unwrap();
    memory.write_u32(0, 0x01020304).unwrap();

    assert_eq!(memory.read_u8(0).unwrap(), 0x04);
    assert_eq!(memory.read_u8(1).unwrap(), 0x03);
    assert_eq!(memory.read_u8(2).unwrap(), 0x02);
    assert_eq!(memory.read_u8(3).unwrap(), 0x01);
}

#[test]
fn test_write_at_every_valid_address() {
    let mut memory = Memory::new(16).unwrap();
    for address in 0..=12u64 {
        memory.write_u32(address, 0xa1b2c3d4).unwrap();
        assert_eq!(memory.read_u8(address).unwrap(), 0xd4);
        assert_eq!(memory.read_u8(address + 1).unwrap(), 0xc3);
        assert_eq!(memory.read_u8(address + 2).unwrap(), 0xb2);
        assert_eq!(memory.read_u8(address + 3).unwrap(), 0xa1);
    }
}

#[test]
fn test_out_of_bounds_write_leaves_buffer_untouched() {
    let mut memory = Memory::new(16).unwrap();
    memory.write_u32(8, 0x01020304).unwrap();

    // Straddles the end: 13 + 4 > 16
    let err = memory.write_u32(13, 0xffffffff).unwrap_err();
    assert_eq!(
        err,
        MemoryError::OutOfBounds {
            address: 13,
            width: 4,
            size: 16,
        }
    );

    // Fully outside
    assert!(memory.write_u32(16, 0xffffffff).is_err());
    assert!(memory.write_u32(u64::MAX, 0xffffffff).is_err());

    // Nothing moved
    for address in 0..16u64 {
        let expected = match address {
            8 => 0x04,
            9 => 0x03,
            10 => 0x02,
            11 => 0x01,
            _ => 0x00,
        };
        assert_eq!(memory.read_u8(address).unwrap(), expected);
    }
}

#[test]
fn test_out_of_bounds_read() {
    let memory = Memory::new(8).unwrap();
    assert!(memory.read_u8(7).is_ok());
    assert_eq!(
        memory.read_u8(8).unwrap_err(),
        MemoryError::OutOfBounds {
            address: 8,
            width: 1,
            size: 8,
        }
    );
}

#[test]
fn test_invalid_sizes() {
    assert!(matches!(
        Memory::new(0),
        Err(MemoryError::InvalidSize { size: 0, .. })
    ));
    assert!(Memory::new(MAX_REGION_SIZE).is_ok());
    assert!(Memory::new(MAX_REGION_SIZE + 1).is_err());
}

#[test]
fn test_notification_reports_post_write_range() {
    let mut memory = Memory::new(16).unwrap();
    let seen: Rc<RefCell<Vec<(u64, Vec<u8>)>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    memory.subscribe(Box::new(move |address, bytes| {
        sink.borrow_mut().push((address, bytes.to_vec()));
    }));

    memory.write_u32(4, 0x01020304).unwrap();

    // Exactly one notification, covering exactly the written range, carrying
    // the post-write little-endian bytes.
    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], (4, vec![0x04, 0x03, 0x02, 0x01]));
}

#[test]
fn test_failed_write_notifies_nobody() {
    let mut memory = Memory::new(16).unwrap();
    let count = Rc::new(RefCell::new(0usize));

    let sink = Rc::clone(&count);
    memory.subscribe(Box::new(move |_, _| {
        *sink.borrow_mut() += 1;
    }));

    assert!(memory.write_u32(13, 0xffffffff).is_err());
    assert_eq!(*count.borrow(), 0);
}

#[test]
fn test_reads_never_notify() {
    let mut memory = Memory::new(16).unwrap();
    let count = Rc::new(RefCell::new(0usize));

    let sink = Rc::clone(&count);
    memory.subscribe(Box::new(move |_, _| {
        *sink.borrow_mut() += 1;
    }));

    memory.read_u8(0).unwrap();
    assert_eq!(*count.borrow(), 0);
}

#[test]
fn test_watchers_are_notified_in_registration_order() {
    let mut memory = Memory::new(16).unwrap();
    let order: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));

    let first = Rc::clone(&order);
    memory.subscribe(Box::new(move |_, _| first.borrow_mut().push("first")));
    let second = Rc::clone(&order);
    memory.subscribe(Box::new(move |_, _| second.borrow_mut().push("second")));
    assert_eq!(memory.watcher_count(), 2);

    memory.write_u32(0, 1).unwrap();
    memory.write_u32(0, 2).unwrap();

    assert_eq!(
        *order.borrow(),
        vec!["first", "second", "first", "second"]
    );
}

#[test]
fn test_write_with_no_watchers_is_fine() {
    let mut memory = Memory::new(16).unwrap();
    memory.write_u32(0, 0xcafe).unwrap();
    assert_eq!(memory.read_u8(0).unwrap(), 0xfe);
}
