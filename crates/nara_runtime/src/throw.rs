//! Structured errors with cause chains and captured stack traces.

use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

use strum::{Display, IntoStaticStr};

use crate::core::builder::TextBuf;
use crate::core::text::TextValue;
use crate::trace::{StackFrame, StackSnapshot};
use crate::util::{CallStack, OutputSink};

/// The closed set of error categories the runtime can raise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, IntoStaticStr)]
pub enum ThrowKind {
    #[strum(serialize = "RuntimeError")]
    Generic,
    #[strum(serialize = "IllegalStateError")]
    IllegalState,
    #[strum(serialize = "IllegalArgumentError")]
    IllegalArgument,
    #[strum(serialize = "IndexOutOfBoundsError")]
    IndexOutOfBounds,
    #[strum(serialize = "ArrayIndexOutOfBoundsError")]
    ArrayIndexOutOfBounds,
    #[strum(serialize = "NumberFormatError")]
    NumberFormat,
}

impl ThrowKind {
    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[derive(Debug)]
struct ThrowBody {
    kind: ThrowKind,
    message: Option<TextValue>,
    cause: OnceCell<Throw>,
    trace: StackSnapshot,
}

/// A raisable error: kind, optional message, at most one cause, and the
/// stack frames captured when it was constructed.
///
/// A `Throw` is a shared handle. Clones point at the same error, and
/// equality is identity, not field comparison.
#[derive(Clone, Debug)]
pub struct Throw {
    body: Rc<ThrowBody>,
}

impl Throw {
    pub fn new(kind: ThrowKind, calls: &dyn CallStack) -> Self {
        Self::build(kind, None, None, calls)
    }

    pub fn with_message(
        kind: ThrowKind,
        message: impl Into<TextValue>,
        calls: &dyn CallStack,
    ) -> Self {
        Self::build(kind, Some(message.into()), None, calls)
    }

    pub fn with_cause(kind: ThrowKind, cause: Throw, calls: &dyn CallStack) -> Self {
        Self::build(kind, None, Some(cause), calls)
    }

    pub fn with_message_and_cause(
        kind: ThrowKind,
        message: impl Into<TextValue>,
        cause: Throw,
        calls: &dyn CallStack,
    ) -> Self {
        Self::build(kind, Some(message.into()), Some(cause), calls)
    }

    pub fn error(message: impl Into<TextValue>, calls: &dyn CallStack) -> Self {
        Self::with_message(ThrowKind::Generic, message, calls)
    }

    pub fn illegal_state(message: impl Into<TextValue>, calls: &dyn CallStack) -> Self {
        Self::with_message(ThrowKind::IllegalState, message, calls)
    }

    pub fn illegal_argument(message: impl Into<TextValue>, calls: &dyn CallStack) -> Self {
        Self::with_message(ThrowKind::IllegalArgument, message, calls)
    }

    pub fn index_out_of_bounds(message: impl Into<TextValue>, calls: &dyn CallStack) -> Self {
        Self::with_message(ThrowKind::IndexOutOfBounds, message, calls)
    }

    pub fn array_index_out_of_bounds(index: i64, calls: &dyn CallStack) -> Self {
        let mut msg = TextBuf::with_capacity(32);
        msg.append_str("array index out of bounds: ").append_i64(index);
        Self::with_message(ThrowKind::ArrayIndexOutOfBounds, msg.to_value(), calls)
    }

    pub fn number_format(text: &TextValue, calls: &dyn CallStack) -> Self {
        let mut msg = TextBuf::with_capacity(32);
        msg.append_str("not a base-10 integer: ").append_value(text);
        Self::with_message(ThrowKind::NumberFormat, msg.to_value(), calls)
    }

    fn build(
        kind: ThrowKind,
        message: Option<TextValue>,
        cause: Option<Throw>,
        calls: &dyn CallStack,
    ) -> Self {
        let trace = StackSnapshot::capture(calls);
        let cell = OnceCell::new();
        if let Some(cause) = cause {
            let _ = cell.set(cause);
        }
        Self {
            body: Rc::new(ThrowBody {
                kind,
                message,
                cause: cell,
                trace,
            }),
        }
    }

    pub fn kind(&self) -> ThrowKind {
        self.body.kind
    }

    pub fn message(&self) -> Option<&TextValue> {
        self.body.message.as_ref()
    }

    pub fn cause(&self) -> Option<&Throw> {
        self.body.cause.get()
    }

    pub fn snapshot(&self) -> &StackSnapshot {
        &self.body.trace
    }

    pub fn frames(&self) -> &[StackFrame] {
        self.body.trace.frames()
    }

    /// Binds `cause` to this error and returns the receiver for chaining.
    ///
    /// Fails with an illegal-state error when a cause is already bound,
    /// including one supplied at construction, and with an illegal-argument
    /// error when the bind would make this error reachable from its own
    /// cause chain.
    pub fn bind_cause(&self, cause: Throw, calls: &dyn CallStack) -> Result<Throw, Throw> {
        if self.body.cause.get().is_some() {
            return Err(Throw::illegal_state("cause already bound", calls));
        }
        if Rc::ptr_eq(&self.body, &cause.body) {
            return Err(Throw::illegal_argument(
                "an error cannot be its own cause",
                calls,
            ));
        }
        let mut link = cause.cause();
        while let Some(next) = link {
            if Rc::ptr_eq(&self.body, &next.body) {
                return Err(Throw::illegal_argument(
                    "binding this cause would close a cycle",
                    calls,
                ));
            }
            link = next.cause();
        }
        // Checked empty above; single-threaded, so the set cannot fail.
        let _ = self.body.cause.set(cause);
        Ok(self.clone())
    }

    /// The one-line rendering: `KindName` or `KindName: message`.
    pub fn render(&self) -> TextValue {
        let mut out = TextBuf::with_capacity(32);
        out.append_str(self.body.kind.name());
        if let Some(message) = &self.body.message {
            out.append_str(": ").append_value(message);
        }
        out.to_value()
    }

    /// Writes this error and its whole cause chain to `sink`: the rendering,
    /// one `\tat ` line per captured frame, then `Caused by: ` and the same
    /// for each linked cause in turn.
    pub fn print_chain(&self, sink: &mut dyn OutputSink) {
        sink.write(&self.render().to_string());
        sink.write_line();
        for frame in self.frames() {
            sink.write("\tat ");
            sink.write(&frame.to_string());
            sink.write_line();
        }
        if let Some(cause) = self.cause() {
            sink.write("Caused by: ");
            cause.print_chain(sink);
        }
    }
}

impl PartialEq for Throw {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body)
    }
}

impl Eq for Throw {}

impl fmt::Display for Throw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl std::error::Error for Throw {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause().map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}
