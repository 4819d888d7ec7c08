//! Mock implementations for integration tests.
#![allow(dead_code)]

use bindgraph::domain::ports::{DiagnosticReporter, Severity};
use petgraph::graph::EdgeIndex;

/// Reporter that counts findings and drops everything else.
pub struct CountingReporter {
    pub count: usize,
}

impl CountingReporter {
    pub fn new() -> Self {
        Self { count: 0 }
    }
}

impl Default for CountingReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticReporter for CountingReporter {
    fn report_dependency(&mut self, _severity: Severity, _edge: EdgeIndex, _message: String) {
        self.count += 1;
    }
}

/// Reporter that fails the test on any finding. Use for fixtures expected
/// to validate cleanly.
pub struct RejectingReporter;

impl DiagnosticReporter for RejectingReporter {
    fn report_dependency(&mut self, severity: Severity, edge: EdgeIndex, message: String) {
        panic!(
            "unexpected diagnostic ({:?}, edge {:?}): {}",
            severity, edge, message
        );
    }
}
