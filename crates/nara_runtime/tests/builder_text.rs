use nara_runtime::{EmptyCallStack, ObjectInfo, TextBuf, TextValue, ThrowKind};

const INLINE_CAP: usize = 16;

struct Probe {
    hash: i64,
}

impl ObjectInfo for Probe {
    fn class_name(&self) -> TextValue {
        TextValue::from_str("app.Probe")
    }

    fn identity_hash(&self) -> i64 {
        self.hash
    }
}

#[test]
fn append_builds_expected_value() {
    let mut buf = TextBuf::new();
    buf.append_str("ab").append_i64(3);
    assert_eq!(buf.to_value().to_string(), "ab3");
    assert_eq!(buf.len(), 3);
}

#[test]
fn new_buffer_has_default_capacity() {
    let buf = TextBuf::new();
    assert_eq!(buf.capacity(), INLINE_CAP);
    assert!(buf.is_empty());
}

#[test]
fn with_capacity_is_a_floor() {
    assert_eq!(TextBuf::with_capacity(40).capacity(), 40);
    assert_eq!(TextBuf::with_capacity(4).capacity(), INLINE_CAP);
}

#[test]
fn capacity_doubles_on_single_unit_overflow() {
    let mut buf = TextBuf::new();
    for _ in 0..INLINE_CAP {
        buf.append_char('x');
    }
    assert_eq!(buf.capacity(), INLINE_CAP);
    buf.append_char('y');
    assert_eq!(buf.capacity(), INLINE_CAP * 2);
    assert_eq!(buf.len(), INLINE_CAP + 1);
}

#[test]
fn bulk_append_grows_to_exact_requirement() {
    let mut buf = TextBuf::new();
    let long = TextValue::from_str(&"z".repeat(40));
    buf.append_value(&long);
    assert_eq!(buf.capacity(), 40);
    assert_eq!(buf.len(), 40);
}

#[test]
fn capacity_never_drops_below_length() {
    let mut buf = TextBuf::new();
    for step in 0..200 {
        match step % 4 {
            0 => {
                buf.append_char('q');
            }
            1 => {
                buf.append_str("abc");
            }
            2 => {
                buf.append_i64(step);
            }
            _ => {
                buf.append_bool(step % 8 == 3);
            }
        }
        assert!(buf.capacity() >= buf.len());
        assert_eq!(buf.to_value().len(), buf.len());
    }
}

#[test]
fn to_value_leaves_builder_usable() {
    let mut buf = TextBuf::new();
    buf.append_str("ab");
    let first = buf.to_value();
    buf.append_i64(3);
    assert_eq!(first.to_string(), "ab");
    assert_eq!(first.len(), 2);
    assert_eq!(buf.to_value().to_string(), "ab3");
}

#[test]
fn append_covers_every_shape() {
    let mut buf = TextBuf::new();
    buf.append_value(&TextValue::from_str("v="))
        .append_i32(-7)
        .append_char(' ')
        .append_bool(true)
        .append_char(' ')
        .append_bool(false);
    assert_eq!(buf.to_value().to_string(), "v=-7 true false");
}

#[test]
fn object_rendering_is_name_at_hash() {
    let mut buf = TextBuf::new();
    buf.append_object(&Probe { hash: 77 });
    assert_eq!(buf.to_value().to_string(), "app.Probe@77");
}

#[test]
fn from_units_copies_defensively() {
    let raw = ['a', 'b', 'c'];
    let value = TextValue::from_units(&raw);
    assert!(!std::ptr::eq(value.units().as_ptr(), raw.as_ptr()));
    assert_eq!(value.to_string(), "abc");
    assert_eq!(value.len(), 3);
}

#[test]
fn clone_shares_backing_storage() {
    let a = TextValue::from_str("shared");
    let b = a.clone();
    assert!(std::ptr::eq(a.units().as_ptr(), b.units().as_ptr()));
    assert_eq!(a, b);
}

#[test]
fn equality_is_by_content() {
    assert_eq!(TextValue::from_str("same"), TextValue::from_str("same"));
    assert_ne!(TextValue::from_str("same"), TextValue::from_str("other"));
    assert_eq!(TextValue::default(), TextValue::from_str(""));
}

#[test]
fn copy_range_copies_requested_window() {
    let value = TextValue::from_str("abcdef");
    let mut dest = ['.'; 8];
    value
        .copy_range(1, 4, &mut dest, 2, &EmptyCallStack)
        .unwrap();
    assert_eq!(dest, ['.', '.', 'b', 'c', 'd', '.', '.', '.']);
}

#[test]
fn copy_range_rejects_bad_source_range() {
    let value = TextValue::from_str("abc");
    let mut dest = ['.'; 8];
    let err = value
        .copy_range(1, 9, &mut dest, 0, &EmptyCallStack)
        .unwrap_err();
    assert_eq!(err.kind(), ThrowKind::IndexOutOfBounds);
    assert!(err.message().unwrap().to_string().contains("1..9"));
    assert_eq!(dest, ['.'; 8]);

    let err = value
        .copy_range(2, 1, &mut dest, 0, &EmptyCallStack)
        .unwrap_err();
    assert_eq!(err.kind(), ThrowKind::IndexOutOfBounds);
}

#[test]
fn copy_range_rejects_cramped_destination() {
    let value = TextValue::from_str("abcdef");
    let mut dest = ['.'; 4];
    let err = value
        .copy_range(0, 6, &mut dest, 2, &EmptyCallStack)
        .unwrap_err();
    assert_eq!(err.kind(), ThrowKind::ArrayIndexOutOfBounds);
    assert!(err.message().unwrap().to_string().contains("7"));
    assert_eq!(dest, ['.'; 4]);
}
