//! Host capability traits for dependency injection.

use std::io::Write;

use crate::core::text::TextValue;
use crate::trace::StackFrame;

/// Read access to the host's managed call stack.
pub trait CallStack {
    /// Number of frames currently on the stack.
    fn frame_count(&self) -> usize;
    /// The frame at `index`, where 0 is the innermost frame.
    /// Callers keep `index` below `frame_count()`.
    fn frame_at(&self, index: usize) -> StackFrame;
}

/// Introspection for hosts that do not track managed frames.
pub struct EmptyCallStack;

impl CallStack for EmptyCallStack {
    fn frame_count(&self) -> usize {
        0
    }

    fn frame_at(&self, _index: usize) -> StackFrame {
        panic!("no frames recorded")
    }
}

/// A shadow stack an embedding interpreter maintains while executing.
///
/// The embedder pushes a frame on every call and pops it on return; the
/// innermost frame is the one pushed last.
#[derive(Default)]
pub struct RecordedCallStack {
    frames: Vec<StackFrame>,
}

impl RecordedCallStack {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn enter(&mut self, frame: StackFrame) {
        self.frames.push(frame);
    }

    pub fn leave(&mut self) {
        self.frames.pop();
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

impl CallStack for RecordedCallStack {
    fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn frame_at(&self, index: usize) -> StackFrame {
        self.frames[self.frames.len() - 1 - index].clone()
    }
}

/// A byte-oriented output destination.
pub trait OutputSink {
    fn write(&mut self, text: &str);
    fn write_line(&mut self);
}

pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write(&mut self, text: &str) {
        let mut out = std::io::stdout().lock();
        let _ = out.write_all(text.as_bytes());
    }

    fn write_line(&mut self) {
        self.write("\n");
    }
}

pub struct StderrSink;

impl OutputSink for StderrSink {
    fn write(&mut self, text: &str) {
        let mut out = std::io::stderr().lock();
        let _ = out.write_all(text.as_bytes());
    }

    fn write_line(&mut self) {
        self.write("\n");
    }
}

/// Collects written text in memory.
#[derive(Default)]
pub struct BufferSink {
    buffer: String,
}

impl BufferSink {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    pub fn contents(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl OutputSink for BufferSink {
    fn write(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn write_line(&mut self) {
        self.buffer.push('\n');
    }
}

/// Identity facts a host value exposes for default rendering (`Name@hash`).
pub trait ObjectInfo {
    fn class_name(&self) -> TextValue;
    fn identity_hash(&self) -> i64;
}

pub struct Capabilities {
    pub calls: Box<dyn CallStack>,
    pub out: Box<dyn OutputSink>,
    pub err: Box<dyn OutputSink>,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            calls: Box::new(EmptyCallStack),
            out: Box::new(StdoutSink),
            err: Box::new(StderrSink),
        }
    }
}
