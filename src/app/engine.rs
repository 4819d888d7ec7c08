use crate::adapters::reporter::{CollectingReporter, Diagnostic};
use crate::domain::builder::GraphBuilder;
use crate::domain::decl::ComponentDecl;
use crate::domain::graph::BindingGraph;
use crate::domain::ports::GraphValidator;
use crate::domain::validate::ProvisionDependencyValidator;
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use tracing::debug;

/// Validation engine: owns the registered passes and runs them over built
/// binding graphs.
///
/// Passes are identified by their stable name; hosts can disable and
/// re-enable individual passes without re-registering the set.
pub struct ValidationEngine {
    validators: Vec<Box<dyn GraphValidator>>,
    disabled: HashSet<String>,
}

impl ValidationEngine {
    /// Engine with the default pass set.
    pub fn new() -> Self {
        Self::with_validators(vec![Box::new(ProvisionDependencyValidator::new())])
    }

    pub fn with_validators(validators: Vec<Box<dyn GraphValidator>>) -> Self {
        Self {
            validators,
            disabled: HashSet::new(),
        }
    }

    /// Names of all registered passes, in run order.
    pub fn pass_names(&self) -> Vec<&'static str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    /// Disable a pass by its stable name. Unknown names are ignored.
    pub fn disable(&mut self, name: &str) {
        self.disabled.insert(name.to_string());
    }

    pub fn enable(&mut self, name: &str) {
        self.disabled.remove(name);
    }

    /// Run every enabled pass over the graph and aggregate the findings,
    /// each tagged with the name of the pass that reported it.
    pub fn run(&self, graph: &BindingGraph) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for validator in &self.validators {
            if self.disabled.contains(validator.name()) {
                continue;
            }
            let mut reporter = CollectingReporter::for_pass(validator.name());
            validator.validate(graph, &mut reporter);
            let found = reporter.into_diagnostics();
            debug!(pass = validator.name(), findings = found.len(), "pass finished");
            diagnostics.extend(found);
        }
        diagnostics
    }

    /// Build a graph from a declaration and run all enabled passes.
    ///
    /// Returns the graph alongside the findings so the host can resolve the
    /// edges diagnostics point at.
    pub fn validate_decl(&self, decl: &ComponentDecl) -> Result<(BindingGraph, Vec<Diagnostic>)> {
        let graph = GraphBuilder::new()
            .build(decl)
            .context("Failed to build binding graph")?;
        let diagnostics = self.run(&graph);
        Ok((graph, diagnostics))
    }

    /// Parse a component declaration from JSON, build and validate.
    pub fn validate_json(&self, json: &str) -> Result<(BindingGraph, Vec<Diagnostic>)> {
        let decl: ComponentDecl =
            serde_json::from_str(json).context("Failed to parse ComponentDecl JSON")?;
        self.validate_decl(&decl)
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}
