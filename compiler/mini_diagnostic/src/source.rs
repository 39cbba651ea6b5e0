//! Byte-offset to line/column mapping for error reporting.

/// Map a byte offset into `source` to a 1-based `(line, column)` pair.
///
/// Offsets past the end of the source resolve to the position just
/// after the last character, which is where end-of-input errors point.
pub fn line_col(source: &str, offset: u32) -> (u32, u32) {
    let offset = (offset as usize).min(source.len());
    let mut line = 1;
    let mut col = 1;
    for byte in &source.as_bytes()[..offset] {
        if *byte == b'\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn start_of_source() {
        assert_eq!(line_col("x = 1", 0), (1, 1));
    }

    #[test]
    fn within_first_line() {
        assert_eq!(line_col("x = 1", 4), (1, 5));
    }

    #[test]
    fn after_newline() {
        assert_eq!(line_col("x = 1\ny = 2", 6), (2, 1));
        assert_eq!(line_col("x = 1\ny = 2", 10), (2, 5));
    }

    #[test]
    fn offset_past_end_clamps() {
        assert_eq!(line_col("ab", 99), (1, 3));
    }

    #[test]
    fn empty_source() {
        assert_eq!(line_col("", 0), (1, 1));
    }
}
