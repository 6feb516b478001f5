use crate::core::builder::TextBuf;
use crate::core::num::format_i64;
use crate::core::text::TextValue;
use crate::util::capabilities::{ObjectInfo, OutputSink};

/// Formats each value shape onto an [`OutputSink`].
pub struct Printer<'a> {
    sink: &'a mut dyn OutputSink,
}

impl<'a> Printer<'a> {
    pub fn new(sink: &'a mut dyn OutputSink) -> Self {
        Self { sink }
    }

    pub fn print(&mut self, value: &TextValue) {
        self.sink.write(&value.to_string());
    }

    pub fn print_str(&mut self, text: &str) {
        self.sink.write(text);
    }

    pub fn print_char(&mut self, unit: char) {
        let mut buf = [0u8; 4];
        self.sink.write(unit.encode_utf8(&mut buf));
    }

    pub fn print_i64(&mut self, value: i64) {
        self.print(&format_i64(value));
    }

    pub fn print_bool(&mut self, value: bool) {
        self.print_str(if value { "true" } else { "false" });
    }

    pub fn print_object(&mut self, object: &dyn ObjectInfo) {
        let mut out = TextBuf::with_capacity(32);
        out.append_object(object);
        self.print(&out.to_value());
    }

    pub fn line(&mut self) {
        self.sink.write_line();
    }

    pub fn println(&mut self, value: &TextValue) {
        self.print(value);
        self.line();
    }

    pub fn println_str(&mut self, text: &str) {
        self.print_str(text);
        self.line();
    }

    pub fn println_char(&mut self, unit: char) {
        self.print_char(unit);
        self.line();
    }

    pub fn println_i64(&mut self, value: i64) {
        self.print_i64(value);
        self.line();
    }

    pub fn println_bool(&mut self, value: bool) {
        self.print_bool(value);
        self.line();
    }

    pub fn println_object(&mut self, object: &dyn ObjectInfo) {
        self.print_object(object);
        self.line();
    }
}
