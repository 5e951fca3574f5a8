//! Error adapter for converting Trellis errors and warnings to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! # Source Spans
//!
//! GraphML decode warnings carry the byte span of the offending element, and
//! [`DecodeError::Xml`] the parser's reported position. Both are rendered as
//! labelled snippets of the input document.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use trellis::TrellisError;
use trellis_graphml::{DecodeError, Span, Warning};

/// Adapter for a single GraphML decode warning.
pub struct WarningAdapter<'a> {
    warning: &'a Warning,
    /// Source document for displaying snippets
    src: &'a str,
}

impl<'a> WarningAdapter<'a> {
    pub fn new(warning: &'a Warning, src: &'a str) -> Self {
        Self { warning, src }
    }
}

impl fmt::Debug for WarningAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WarningAdapter")
            .field("warning", &self.warning)
            .finish()
    }
}

impl fmt::Display for WarningAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.warning.message())
    }
}

impl std::error::Error for WarningAdapter<'_> {}

impl MietteDiagnostic for WarningAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.warning.code()))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Warning)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.warning
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.warning.span()?;
        let label = LabeledSpan::new_primary_with_span(
            Some(self.warning.code().description().to_string()),
            span_to_miette(span),
        );
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for a fatal GraphML decode error.
pub struct DecodeErrorAdapter<'a> {
    err: &'a DecodeError,
    src: &'a str,
}

impl<'a> DecodeErrorAdapter<'a> {
    pub fn new(err: &'a DecodeError, src: &'a str) -> Self {
        Self { err, src }
    }
}

impl fmt::Debug for DecodeErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeErrorAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for DecodeErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.err, f)
    }
}

impl std::error::Error for DecodeErrorAdapter<'_> {}

impl MietteDiagnostic for DecodeErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.err {
            DecodeError::Xml(_) => "trellis::graphml::xml",
            DecodeError::MissingGraph => "trellis::graphml::missing_graph",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.err {
            DecodeError::MissingGraph => Some(Box::new(
                "a GraphML document needs a <graph> element inside <graphml>",
            )),
            DecodeError::Xml(_) => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let offset = self.err.offset(self.src)?;
        let label = LabeledSpan::new_primary_with_span(Some("here".to_string()), offset);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for [`TrellisError`] variants without source information.
pub struct ErrorAdapter<'a>(pub &'a TrellisError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            TrellisError::Io(_) => "trellis::io",
            TrellisError::Json(_) => "trellis::json",
            TrellisError::GraphMl { .. } => return None,
            TrellisError::Validation(_) => "trellis::validation",
            TrellisError::UnknownExample(_) => "trellis::example",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            TrellisError::Validation(_) => Some(Box::new(
                "ids must be unique and node geometry finite with positive size",
            )),
            _ => None,
        }
    }
}

/// A reportable problem that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A recoverable decode warning with its element span.
    Warning(WarningAdapter<'a>),
    /// A fatal decode error, located in the input when possible.
    Decode(DecodeErrorAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl Reportable<'_> {
    fn inner(&self) -> &dyn MietteDiagnostic {
        match self {
            Reportable::Warning(w) => w,
            Reportable::Decode(d) => d,
            Reportable::Error(e) => e,
        }
    }
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner(), f)
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Error(e) => e.source(),
            Reportable::Warning(_) | Reportable::Decode(_) => None,
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().code()
    }

    fn severity(&self) -> Option<miette::Severity> {
        self.inner().severity()
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().help()
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.inner().source_code()
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.inner().labels()
    }
}

fn span_to_miette(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Convert a [`TrellisError`] into a list of reportable errors.
pub fn to_reportables(err: &TrellisError) -> Vec<Reportable<'_>> {
    match err {
        TrellisError::GraphMl { err, src } => {
            vec![Reportable::Decode(DecodeErrorAdapter::new(err, src))]
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

/// Wrap decode warnings for rendering against their source document.
pub fn warning_reportables<'a>(warnings: &'a [Warning], src: &'a str) -> Vec<Reportable<'a>> {
    warnings
        .iter()
        .map(|w| Reportable::Warning(WarningAdapter::new(w, src)))
        .collect()
}

#[cfg(test)]
mod tests {
    use trellis::Editor;
    use trellis_graphml::WarningCode;

    use super::*;

    #[test]
    fn test_warning_labels_point_at_element() {
        let src = "<graphml><graph><node id=\"a\"/></graph></graphml>";
        let warning = Warning::new(WarningCode::W101, "Node a missing required fields and was skipped")
            .with_span(Span::new(16..30));

        let adapter = WarningAdapter::new(&warning, src);
        assert_eq!(adapter.to_string(), "Node a missing required fields and was skipped");
        assert_eq!(adapter.code().unwrap().to_string(), "W101");
        assert_eq!(adapter.severity(), Some(miette::Severity::Warning));

        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 16);
        assert_eq!(labels[0].len(), 14);
        assert!(labels[0].primary());
    }

    #[test]
    fn test_warning_without_span_has_no_labels() {
        let warning = Warning::new(WarningCode::W103, "Missing shape defaulted to rect");
        let adapter = WarningAdapter::new(&warning, "");
        assert!(adapter.labels().is_none());
    }

    #[test]
    fn test_xml_error_is_located() {
        let mut editor = Editor::default();
        let src = "<graphml>\n<graph>\n</graphml>";
        let err = editor.import_graphml(src).unwrap_err();

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Decode(d) => {
                assert!(d.to_string().starts_with("XML parse error"));
                let labels: Vec<_> = d.labels().unwrap().collect();
                assert!(labels[0].offset() <= src.len());
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_graph_has_help() {
        let err = TrellisError::new_graphml_error(DecodeError::MissingGraph, "<graphml/>");
        let reportables = to_reportables(&err);
        assert_eq!(
            reportables[0].code().unwrap().to_string(),
            "trellis::graphml::missing_graph"
        );
        assert!(reportables[0].help().is_some());
    }

    #[test]
    fn test_non_decode_error() {
        let err = TrellisError::UnknownExample("nope".to_string());

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "Unknown example diagram `nope`");
                assert_eq!(e.code().unwrap().to_string(), "trellis::example");
            }
            other => panic!("expected plain error, got {other:?}"),
        }
    }

    #[test]
    fn test_warning_reportables_keep_order() {
        let warnings = vec![
            Warning::new(WarningCode::W103, "first"),
            Warning::new(WarningCode::W104, "second"),
        ];
        let reportables = warning_reportables(&warnings, "");
        assert_eq!(reportables.len(), 2);
        assert_eq!(reportables[1].to_string(), "second");
    }
}
