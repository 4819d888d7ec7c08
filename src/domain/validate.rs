use crate::domain::edge::{DependencyEdge, Edge};
use crate::domain::graph::BindingGraph;
use crate::domain::node::{BindingNode, Node};
use crate::domain::ports::{DiagnosticReporter, GraphValidator, Severity};
use crate::domain::request::entry_point_can_use_production;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

/// Reports an error for each provision-only dependency request that is
/// satisfied by a production binding.
///
/// A production value only materializes when its pipeline stage runs, so a
/// synchronous consumer (a provision binding, or an entry point requesting a
/// synchronous kind) can never be handed one safely.
pub struct ProvisionDependencyValidator;

impl ProvisionDependencyValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProvisionDependencyValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphValidator for ProvisionDependencyValidator {
    fn name(&self) -> &'static str {
        "bindgraph/ProvisionDependsOnProduction"
    }

    fn validate(&self, graph: &BindingGraph, reporter: &mut dyn DiagnosticReporter) {
        for (production_idx, production) in graph.binding_nodes() {
            if !production.is_production() {
                continue;
            }
            for edge_ref in graph.in_edges(production_idx) {
                let Edge::Dependency(dependency) = edge_ref.weight() else {
                    continue; // subcomponent edges carry no request
                };
                if dependency_can_use_production(dependency, edge_ref.source(), graph) {
                    continue;
                }
                let message = if dependency.is_entry_point {
                    entry_point_error_message(dependency)
                } else {
                    dependency_error_message(edge_ref.source(), graph)
                };
                reporter.report_dependency(Severity::Error, edge_ref.id(), message);
            }
        }
    }
}

/// Whether the consumer side of `dependency` is permitted to depend on a
/// production binding.
fn dependency_can_use_production(
    dependency: &DependencyEdge,
    source: NodeIndex,
    graph: &BindingGraph,
) -> bool {
    if dependency.is_entry_point {
        entry_point_can_use_production(dependency.request.kind)
    } else {
        requesting_binding(source, graph).is_production()
    }
}

/// The binding on the requesting side of a non-entry-point dependency edge.
///
/// Panics if the source resolves to any other node variant: the builder
/// guarantees that every non-entry-point dependency originates at a binding
/// node, so anything else is a bug upstream, not a validation finding.
fn requesting_binding(source: NodeIndex, graph: &BindingGraph) -> &BindingNode {
    match graph.node(source) {
        Node::Binding(binding) => binding,
        other => panic!(
            "expected source of dependency edge to be a binding node, but was: {}",
            other.describe()
        ),
    }
}

// TODO: clarify the wording; "provision entry-point" is easy to misread as
// naming a binding rather than the request site.
fn entry_point_error_message(entry_point: &DependencyEdge) -> String {
    format!(
        "{} is a provision entry-point, which cannot depend on a production.",
        entry_point.request.key
    )
}

fn dependency_error_message(source: NodeIndex, graph: &BindingGraph) -> String {
    format!(
        "{} is a provision, which cannot depend on a production.",
        requesting_binding(source, graph).key
    )
}
