//! Core value layer.
//!
//! - `TextValue` - immutable character-unit sequence
//! - `TextBuf` - growable buffer that materializes text values
//! - `num` - base-10 signed 64-bit conversion

pub mod builder;
pub mod num;
pub mod text;

pub use builder::TextBuf;
pub use text::TextValue;
