use crate::domain::graph::BindingGraph;
use petgraph::graph::EdgeIndex;
use serde::Serialize;

/// Diagnostic severity, as the host renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

/// Diagnostic sink port (implemented by the host, or by adapters).
pub trait DiagnosticReporter {
    /// Record a finding against a specific dependency edge of the validated
    /// graph. The edge index is resolvable against that graph for rendering.
    fn report_dependency(&mut self, severity: Severity, edge: EdgeIndex, message: String);
}

/// A validation pass over a built binding graph.
///
/// Passes are read-only: findings go through the reporter, the graph is
/// never mutated, and re-running a pass on the same graph reports the same
/// findings.
pub trait GraphValidator {
    /// Stable name, unique among registered passes. Hosts use it to enable,
    /// disable and order passes.
    fn name(&self) -> &'static str;

    fn validate(&self, graph: &BindingGraph, reporter: &mut dyn DiagnosticReporter);
}
