//! In-memory diagnostic sink.

use crate::domain::ports::{DiagnosticReporter, Severity};
use petgraph::graph::EdgeIndex;
use serde::Serialize;

/// One recorded finding, attached to a dependency edge of the validated
/// graph. The edge index lets the host resolve endpoints and the request
/// when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Stable name of the pass that reported the finding. Empty when the
    /// pass ran outside the engine.
    pub pass: String,
    pub severity: Severity,
    pub edge: EdgeIndex,
    pub message: String,
}

/// DiagnosticReporter that records findings in memory.
pub struct CollectingReporter {
    pass: String,
    diagnostics: Vec<Diagnostic>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self {
            pass: String::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Reporter whose recorded findings are tagged with a pass name.
    pub fn for_pass(pass: impl Into<String>) -> Self {
        Self {
            pass: pass.into(),
            diagnostics: Vec::new(),
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl Default for CollectingReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticReporter for CollectingReporter {
    fn report_dependency(&mut self, severity: Severity, edge: EdgeIndex, message: String) {
        self.diagnostics.push(Diagnostic {
            pass: self.pass.clone(),
            severity,
            edge,
            message,
        });
    }
}
