//! Code builder utility for generating properly indented code.

use super::Indent;

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use droute_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::java()
///     .block_with_close("class Foo {", "}", |b| b.line("int x;"))
///     .build();
///
/// assert_eq!(code, "class Foo {\n    int x;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    pub fn java() -> Self {
        Self::new(Indent::FOUR)
    }

    pub fn rust() -> Self {
        Self::new(Indent::FOUR)
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with a closing line.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Add a comment line with the given prefix (e.g., `//` or `///`).
    pub fn doc(mut self, prefix: &str, text: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(prefix);
        self.buffer.push(' ');
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        let width = self.indent.width() * self.indent_level;
        self.buffer.extend(std::iter::repeat_n(' ', width));
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::java()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::java().line("int x = 1;").build();
        assert_eq!(code, "int x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::rust()
            .line("fn main() {")
            .indent()
            .line("run();")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "fn main() {\n    run();\n}\n");
    }

    #[test]
    fn test_custom_indent_width() {
        let code = CodeBuilder::new(Indent::spaces(3))
            .block_with_close("a {", "}", |b| {
                b.block_with_close("b {", "}", |b| b.line("c;"))
            })
            .build();

        assert_eq!(code, "a {\n   b {\n      c;\n   }\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let code = CodeBuilder::java().dedent().line("x").build();
        assert_eq!(code, "x\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let code = CodeBuilder::java()
            .indent()
            .line("a();")
            .blank()
            .line("b();")
            .build();

        assert_eq!(code, "    a();\n\n    b();\n");
    }

    #[test]
    fn test_doc_comment() {
        let code = CodeBuilder::rust()
            .doc("///", "A test function")
            .line("fn test() {}")
            .build();

        assert_eq!(code, "/// A test function\nfn test() {}\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::java()
            .block_with_close("enum Color {", "}", |b| {
                b.each(["RED,", "GREEN,", "BLUE;"], |b, color| b.line(color))
            })
            .build();

        assert_eq!(code, "enum Color {\n    RED,\n    GREEN,\n    BLUE;\n}\n");
    }
}
