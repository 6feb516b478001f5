//! Utility modules.

mod capabilities;
mod printer;

pub use capabilities::{
    BufferSink, CallStack, Capabilities, EmptyCallStack, ObjectInfo, OutputSink,
    RecordedCallStack, StderrSink, StdoutSink,
};
pub use printer::Printer;
