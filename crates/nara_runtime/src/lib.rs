//! Nara language runtime support: text values and building, base-10 integer
//! conversion, and structured errors with captured call-stack snapshots.

#![allow(clippy::should_implement_trait)]

pub mod core;
pub mod throw;
pub mod trace;
pub mod util;
mod entry;

// Re-exports from core/
pub use crate::core::builder::TextBuf;
pub use crate::core::num::{format_i64, parse_i64};
pub use crate::core::text::TextValue;

// Re-exports from trace/
pub use trace::{NATIVE_LINE, StackFrame, StackSnapshot};

// Re-exports from throw/
pub use throw::{Throw, ThrowKind};

// Re-exports from util/
pub use util::Printer;
pub use util::{
    BufferSink, CallStack, Capabilities, EmptyCallStack, ObjectInfo, OutputSink,
    RecordedCallStack, StderrSink, StdoutSink,
};

// Launch support
pub use entry::run_entry;
