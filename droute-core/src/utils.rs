//! Shared utility functions for code generation.

/// Remove every character outside `[0-9A-Za-z_]`.
pub fn sanitize_identifier(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Convert a byte offset into a 1-based `(line, column)` pair.
///
/// Offsets past the end of `src` resolve to the position after the last
/// character.
pub fn line_col(src: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    for (i, c) in src.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}
