//! Fatal decode failures.

use thiserror::Error;

/// A GraphML document that cannot be imported at all.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Missing <graph> element")]
    MissingGraph,
}

impl DecodeError {
    /// Byte offset into `src` of the position the XML parser reported.
    ///
    /// Returns `None` for errors that have no position.
    pub fn offset(&self, src: &str) -> Option<usize> {
        let DecodeError::Xml(err) = self else {
            return None;
        };
        let pos = err.pos();
        Some(offset_of(src, pos.row as usize, pos.col as usize))
    }
}

/// Converts a 1-based row/column (column counted in characters) to a byte
/// offset, clamped to the end of `src`.
fn offset_of(src: &str, row: usize, col: usize) -> usize {
    let mut line_start = 0;
    for _ in 1..row {
        match src[line_start..].find('\n') {
            Some(newline) => line_start += newline + 1,
            None => return src.len(),
        }
    }

    let line = &src[line_start..];
    let within = line
        .char_indices()
        .nth(col.saturating_sub(1))
        .map_or(line.len(), |(offset, _)| offset);
    line_start + within
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of() {
        let src = "ab\ncdé\nf";
        assert_eq!(offset_of(src, 1, 1), 0);
        assert_eq!(offset_of(src, 2, 2), 4);
        assert_eq!(offset_of(src, 3, 1), 8);
        assert_eq!(offset_of(src, 9, 1), src.len());
    }

    #[test]
    fn test_xml_error_offset() {
        let src = "<graphml>\n  <graph>\n</graphml>";
        let err = DecodeError::from(roxmltree::Document::parse(src).unwrap_err());

        let offset = err.offset(src).unwrap();
        assert!(offset <= src.len());
        assert!(err.to_string().starts_with("XML parse error"));
    }

    #[test]
    fn test_missing_graph_has_no_offset() {
        assert!(DecodeError::MissingGraph.offset("<graphml/>").is_none());
    }
}
