//! Stable codes for decode warnings.
//!
//! Codes are grouped by what they concern:
//! - `W00x` - Document structure (element identity)
//! - `W1xx` - Node fields
//! - `W2xx` - Edge fields
//! - `W3xx` - Opaque extension data

use std::fmt;

/// Warning codes for categorizing decode warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    // =========================================================================
    // Structure (W00x)
    // =========================================================================
    /// A `<node>` without an `id` attribute was skipped.
    W001,

    /// A `<node>` reused an id already taken by an earlier node and was skipped.
    W002,

    /// An `<edge>` without `id`, `source` or `target` was skipped.
    W003,

    /// An `<edge>` reused an id already taken by an earlier edge and was skipped.
    W004,

    // =========================================================================
    // Node fields (W1xx)
    // =========================================================================
    /// A node lacked one of `type`, `x`, `y`, `w`, `h` (or had a non-numeric
    /// geometry value) and was skipped.
    W101,

    /// A node had no shape and was given `rect`.
    W102,

    /// A node named a shape outside the known set and was given `rect`.
    W103,

    /// A node stroke color failed validation and was dropped.
    W104,

    /// A node stroke width was not a finite positive number and was dropped.
    W105,

    /// A node background or text color failed validation and was dropped.
    W106,

    /// A node `<data>` element used a key the editor does not define.
    W107,

    // =========================================================================
    // Edge fields (W2xx)
    // =========================================================================
    /// An edge stroke color failed validation and was dropped.
    W201,

    /// An edge stroke width was not a finite positive number and was dropped.
    W202,

    /// An edge line style, arrow or routing value was outside its vocabulary.
    W203,

    /// An edge's bend points were not a JSON array of `{x, y}` points.
    W204,

    // =========================================================================
    // Extension data (W3xx)
    // =========================================================================
    /// A node extension blob was not a JSON object and was dropped whole.
    W301,

    /// An edge extension blob was not a JSON object and was dropped whole.
    W302,

    /// A known key in a node extension blob had the wrong type or failed
    /// validation. Only that key was dropped.
    W303,

    /// A known key in an edge extension blob had the wrong type or failed
    /// validation. Only that key was dropped.
    W304,
}

impl WarningCode {
    /// Returns the code as a string (e.g., "W101").
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningCode::W001 => "W001",
            WarningCode::W002 => "W002",
            WarningCode::W003 => "W003",
            WarningCode::W004 => "W004",
            WarningCode::W101 => "W101",
            WarningCode::W102 => "W102",
            WarningCode::W103 => "W103",
            WarningCode::W104 => "W104",
            WarningCode::W105 => "W105",
            WarningCode::W106 => "W106",
            WarningCode::W107 => "W107",
            WarningCode::W201 => "W201",
            WarningCode::W202 => "W202",
            WarningCode::W203 => "W203",
            WarningCode::W204 => "W204",
            WarningCode::W301 => "W301",
            WarningCode::W302 => "W302",
            WarningCode::W303 => "W303",
            WarningCode::W304 => "W304",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            WarningCode::W001 => "node without id",
            WarningCode::W002 => "duplicate node id",
            WarningCode::W003 => "edge without id or endpoints",
            WarningCode::W004 => "duplicate edge id",
            WarningCode::W101 => "node missing required fields",
            WarningCode::W102 => "missing shape",
            WarningCode::W103 => "unknown shape",
            WarningCode::W104 => "invalid node stroke color",
            WarningCode::W105 => "invalid node stroke width",
            WarningCode::W106 => "invalid node color",
            WarningCode::W107 => "unknown node data key",
            WarningCode::W201 => "invalid edge stroke color",
            WarningCode::W202 => "invalid edge stroke width",
            WarningCode::W203 => "unknown edge style value",
            WarningCode::W204 => "invalid bend points",
            WarningCode::W301 => "invalid node extension data",
            WarningCode::W302 => "invalid edge extension data",
            WarningCode::W303 => "invalid node extension field",
            WarningCode::W304 => "invalid edge extension field",
        }
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_code_display() {
        assert_eq!(WarningCode::W001.to_string(), "W001");
        assert_eq!(WarningCode::W105.to_string(), "W105");
        assert_eq!(WarningCode::W302.to_string(), "W302");
    }

    #[test]
    fn test_warning_code_description() {
        assert_eq!(WarningCode::W102.description(), "missing shape");
        assert_eq!(WarningCode::W204.description(), "invalid bend points");
        assert_eq!(WarningCode::W303.description(), "invalid node extension field");
    }
}
