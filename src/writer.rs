//! Indent-aware line writer shared by the text report and the diagram serializer.
//!
//! Both outputs use 2-space indentation.

const INDENT: &str = "  ";

/// Builds newline-terminated text one line at a time.
pub struct LineWriter {
    buf: String,
    indent_level: usize,
}

impl LineWriter {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(4096),
            indent_level: 0,
        }
    }

    /// Write a complete line at the current indent (appends newline).
    pub fn line(&mut self, text: &str) {
        for _ in 0..self.indent_level {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    /// Write an empty line. Never indented.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Run `f` one level deeper.
    pub fn indented(&mut self, f: impl FnOnce(&mut Self)) {
        self.indent();
        f(self);
        self.dedent();
    }

    /// A `=== title ===` style banner line.
    pub fn banner(&mut self, title: &str) {
        self.line(&format!("================ {} ================", title));
    }

    /// Consume the writer and return the text.
    pub fn finish(self) -> String {
        self.buf
    }
}

impl Default for LineWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_line() {
        let mut w = LineWriter::new();
        w.line("flowchart LR");
        assert_eq!(w.finish(), "flowchart LR\n");
    }

    #[test]
    fn indent_dedent() {
        let mut w = LineWriter::new();
        w.line("Clause 1:");
        w.indent();
        w.line("IF: (no conditions)");
        w.dedent();
        w.line("Clause 2:");
        assert_eq!(w.finish(), "Clause 1:\n  IF: (no conditions)\nClause 2:\n");
    }

    #[test]
    fn nested_indented_blocks() {
        let mut w = LineWriter::new();
        w.line("a");
        w.indented(|w| {
            w.line("b");
            w.indented(|w| w.line("c"));
        });
        w.line("d");
        assert_eq!(w.finish(), "a\n  b\n    c\nd\n");
    }

    #[test]
    fn blank_line_is_not_indented() {
        let mut w = LineWriter::new();
        w.indent();
        w.line("a");
        w.blank();
        w.line("b");
        assert_eq!(w.finish(), "  a\n\n  b\n");
    }

    #[test]
    fn banner_line() {
        let mut w = LineWriter::new();
        w.banner("Step summary");
        assert_eq!(w.finish(), "================ Step summary ================\n");
    }

    #[test]
    fn dedent_saturates_at_zero() {
        let mut w = LineWriter::new();
        w.dedent();
        w.line("x");
        assert_eq!(w.finish(), "x\n");
    }
}
