//! Immutable text values with shared backing storage.

use std::fmt::{self, Write};
use std::rc::Rc;

use super::builder::TextBuf;
use crate::throw::Throw;
use crate::util::CallStack;

/// An immutable sequence of character units.
///
/// Construction always copies the source characters, so no caller can mutate
/// a value after the fact. Cloning shares the backing storage instead of
/// copying it.
#[derive(Clone)]
pub struct TextValue {
    units: Rc<[char]>,
}

impl TextValue {
    pub fn from_units(units: &[char]) -> Self {
        Self {
            units: Rc::from(units),
        }
    }

    pub fn from_str(s: &str) -> Self {
        Self {
            units: s.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn units(&self) -> &[char] {
        &self.units
    }

    /// Copies the units in `start..end` into `dest` beginning at `dest_at`.
    ///
    /// An invalid source range fails with an index error naming the range; a
    /// destination without room for the copy fails with an array index error
    /// naming the first index that does not fit. On failure `dest` is left
    /// untouched.
    pub fn copy_range(
        &self,
        start: usize,
        end: usize,
        dest: &mut [char],
        dest_at: usize,
        calls: &dyn CallStack,
    ) -> Result<(), Throw> {
        if start > end || end > self.units.len() {
            let mut msg = TextBuf::with_capacity(48);
            msg.append_str("copy range ")
                .append_i64(start as i64)
                .append_str("..")
                .append_i64(end as i64)
                .append_str(" out of bounds for length ")
                .append_i64(self.units.len() as i64);
            return Err(Throw::index_out_of_bounds(msg.to_value(), calls));
        }
        let count = end - start;
        if dest_at > dest.len() || count > dest.len() - dest_at {
            let bad = if count == 0 { dest_at } else { dest_at + count - 1 };
            return Err(Throw::array_index_out_of_bounds(bad as i64, calls));
        }
        dest[dest_at..dest_at + count].copy_from_slice(&self.units[start..end]);
        Ok(())
    }
}

impl Default for TextValue {
    fn default() -> Self {
        Self::from_units(&[])
    }
}

impl PartialEq for TextValue {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.units, &other.units) || self.units == other.units
    }
}

impl Eq for TextValue {}

impl fmt::Debug for TextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.units.iter().collect::<String>())
    }
}

impl fmt::Display for TextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for unit in self.units.iter() {
            f.write_char(*unit)?;
        }
        Ok(())
    }
}

impl From<&str> for TextValue {
    fn from(value: &str) -> Self {
        TextValue::from_str(value)
    }
}
