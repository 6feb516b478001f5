//! Captured call-stack snapshots.

use std::fmt;

use crate::core::builder::TextBuf;
use crate::core::text::TextValue;
use crate::util::CallStack;

/// Line number reported for frames executing host-native code.
pub const NATIVE_LINE: i32 = -2;

/// One captured call frame. Fields are fixed at construction.
#[derive(Clone, Debug)]
pub struct StackFrame {
    declaring_class: TextValue,
    method_name: TextValue,
    file_name: Option<TextValue>,
    line_number: i32,
}

impl StackFrame {
    pub fn new(
        declaring_class: TextValue,
        method_name: TextValue,
        file_name: Option<TextValue>,
        line_number: i32,
    ) -> Self {
        Self {
            declaring_class,
            method_name,
            file_name,
            line_number,
        }
    }

    pub fn declaring_class(&self) -> &TextValue {
        &self.declaring_class
    }

    pub fn method_name(&self) -> &TextValue {
        &self.method_name
    }

    pub fn file_name(&self) -> Option<&TextValue> {
        self.file_name.as_ref()
    }

    pub fn line_number(&self) -> i32 {
        self.line_number
    }

    pub fn is_native(&self) -> bool {
        self.line_number == NATIVE_LINE
    }

    /// Appends the frame in reporting form: `Class.method(file:line)`,
    /// `Class.method(file)`, `Class.method(Unknown Source)`, or
    /// `Class.method(Native Method)`.
    pub fn render_into(&self, out: &mut TextBuf) {
        out.append_value(&self.declaring_class);
        out.append_char('.');
        out.append_value(&self.method_name);
        if self.is_native() {
            out.append_str("(Native Method)");
        } else if let Some(file) = &self.file_name {
            out.append_char('(').append_value(file);
            if self.line_number > 0 {
                out.append_char(':').append_i32(self.line_number);
            }
            out.append_char(')');
        } else {
            out.append_str("(Unknown Source)");
        }
    }
}

impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = TextBuf::with_capacity(64);
        self.render_into(&mut out);
        write!(f, "{}", out.to_value())
    }
}

/// The frames visible at one moment, innermost first.
///
/// Capture happens synchronously and exactly once; the snapshot never
/// changes afterwards, whatever the host stack does next.
#[derive(Debug)]
pub struct StackSnapshot {
    frames: Box<[StackFrame]>,
}

impl StackSnapshot {
    pub fn capture(calls: &dyn CallStack) -> Self {
        let count = calls.frame_count();
        let mut frames = Vec::with_capacity(count);
        for index in 0..count {
            frames.push(calls.frame_at(index));
        }
        Self {
            frames: frames.into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }
}
