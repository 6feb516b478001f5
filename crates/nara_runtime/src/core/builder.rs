//! Growable text buffer that materializes immutable values.

use smallvec::SmallVec;

use super::num::format_i64;
use super::text::TextValue;
use crate::util::ObjectInfo;

const INLINE_CAP: usize = 16;

/// A mutable accumulation buffer for building [`TextValue`]s.
///
/// Appends of every supported shape funnel through the same growth policy:
/// when an append would overflow, capacity jumps to the larger of double the
/// current capacity and the exact room required. Capacity never shrinks.
#[derive(Debug, Default)]
pub struct TextBuf {
    units: SmallVec<[char; INLINE_CAP]>,
}

impl TextBuf {
    pub fn new() -> Self {
        Self {
            units: SmallVec::new(),
        }
    }

    /// A buffer with room for at least `capacity` units before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            units: SmallVec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.units.capacity()
    }

    pub fn append_value(&mut self, value: &TextValue) -> &mut Self {
        self.grow_for(value.len());
        self.units.extend_from_slice(value.units());
        self
    }

    pub fn append_char(&mut self, unit: char) -> &mut Self {
        self.grow_for(1);
        self.units.push(unit);
        self
    }

    pub fn append_str(&mut self, text: &str) -> &mut Self {
        self.grow_for(text.chars().count());
        self.units.extend(text.chars());
        self
    }

    pub fn append_i32(&mut self, value: i32) -> &mut Self {
        self.append_i64(value as i64)
    }

    pub fn append_i64(&mut self, value: i64) -> &mut Self {
        self.append_value(&format_i64(value))
    }

    pub fn append_bool(&mut self, value: bool) -> &mut Self {
        self.append_str(if value { "true" } else { "false" })
    }

    /// Appends the default object rendering, `ClassName@hash`.
    pub fn append_object(&mut self, object: &dyn ObjectInfo) -> &mut Self {
        self.append_value(&object.class_name());
        self.append_char('@');
        self.append_i64(object.identity_hash())
    }

    /// Copies the current contents out as an independent value.
    ///
    /// The buffer stays usable and later appends never affect values already
    /// materialized.
    pub fn to_value(&self) -> TextValue {
        TextValue::from_units(&self.units)
    }

    fn grow_for(&mut self, extra: usize) {
        let required = self.units.len() + extra;
        if required > self.units.capacity() {
            let doubled = self.units.capacity().saturating_mul(2);
            self.units.grow(doubled.max(required));
        }
    }
}
