//! Indentation configuration for code generation.

/// Indentation width, in spaces, for one level of generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(usize);

impl Indent {
    /// 4-space indentation, used for both Java and Rust output.
    pub const FOUR: Self = Self(4);

    pub const fn spaces(width: usize) -> Self {
        Self(width)
    }

    /// Number of spaces written for one indent level.
    pub const fn width(self) -> usize {
        self.0
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::FOUR
    }
}
