//! Non-fatal diagnostics reported while building a network.
//!
//! A [`Diagnostic`] describes something that degraded the diagram without
//! stopping it from being built. Diagnostics are collected on the network (see
//! [`NeuralNetwork::diagnostics`](crate::NeuralNetwork::diagnostics)) and also
//! logged, so callers can either assert on them or just read the logs.

use std::fmt;

use crate::layer::LayerKind;

/// The severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// An issue that prevented part of the diagram from being built.
    Error,

    /// An issue the diagram was built around, with reduced output.
    Warning,
}

impl Severity {
    /// Returns `true` if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns `true` if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// What a diagnostic is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// No registered connector joins the layer at `index` to the one after it.
    UnsupportedAdjacency {
        index: usize,
        from: LayerKind,
        to: LayerKind,
    },
}

/// A single diagnostic message.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    severity: Severity,
    kind: DiagnosticKind,
    message: String,
    help: Option<String>,
}

impl Diagnostic {
    /// Diagnostic for two adjacent layers that no connector rule covers.
    pub fn unsupported_adjacency(index: usize, from: LayerKind, to: LayerKind) -> Self {
        Self {
            severity: Severity::Warning,
            message: format!(
                "unimplemented connection for layer types `{from}` and `{to}` \
                 (layers {index} and {})",
                index + 1
            ),
            help: Some(format!(
                "register a connector for (`{from}`, `{to}`) in the connector registry"
            )),
            kind: DiagnosticKind::UnsupportedAdjacency { index, from, to },
        }
    }

    /// Get the severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn kind(&self) -> &DiagnosticKind {
        &self.kind
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_predicates() {
        assert!(Severity::Error.is_error());
        assert!(!Severity::Error.is_warning());
        assert!(Severity::Warning.is_warning());
        assert_eq!(Severity::Warning.to_string(), "warning");
    }

    #[test]
    fn test_unsupported_adjacency() {
        let diag = Diagnostic::unsupported_adjacency(2, LayerKind::FEED_FORWARD, LayerKind::IMAGE);

        assert_eq!(diag.severity(), Severity::Warning);
        assert_eq!(
            diag.kind(),
            &DiagnosticKind::UnsupportedAdjacency {
                index: 2,
                from: LayerKind::FEED_FORWARD,
                to: LayerKind::IMAGE,
            }
        );
        assert!(diag.message().contains("`feed_forward` and `image`"));
        assert!(diag.message().contains("layers 2 and 3"));
        assert!(diag.help().is_some());
        assert!(diag.to_string().starts_with("warning: "));
    }
}
