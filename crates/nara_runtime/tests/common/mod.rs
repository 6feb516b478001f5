use nara_runtime::{StackFrame, TextValue};

pub fn frame(class: &str, method: &str, file: Option<&str>, line: i32) -> StackFrame {
    StackFrame::new(
        TextValue::from_str(class),
        TextValue::from_str(method),
        file.map(TextValue::from_str),
        line,
    )
}
