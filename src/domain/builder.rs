use crate::domain::decl::ComponentDecl;
use crate::domain::edge::{DependencyEdge, Edge};
use crate::domain::graph::BindingGraph;
use crate::domain::node::{BindingNode, ComponentNode, Node};
use anyhow::{Context as _, Result, bail};
use petgraph::graph::NodeIndex;
use std::collections::HashMap;
use tracing::debug;

/// Graph builder - Domain Service for constructing a BindingGraph from a
/// component declaration tree.
pub struct GraphBuilder;

impl GraphBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Two-pass build strategy: allocate every node first, then wire edges,
    /// so dependencies may point at bindings declared anywhere in the tree.
    pub fn build(&self, root: &ComponentDecl) -> Result<BindingGraph> {
        let mut graph = BindingGraph::new();
        let mut components = HashMap::new();

        // Pass 1: Node Allocation
        self.allocate(root, &mut graph, &mut components)?;

        // Pass 2: Edge Wiring
        self.wire(root, &mut graph, &components)?;

        debug!(
            nodes = graph.graph.node_count(),
            edges = graph.graph.edge_count(),
            "binding graph built"
        );
        Ok(graph)
    }

    fn allocate(
        &self,
        decl: &ComponentDecl,
        graph: &mut BindingGraph,
        components: &mut HashMap<String, NodeIndex>,
    ) -> Result<()> {
        if components.contains_key(&decl.name) {
            bail!("duplicate component name: {}", decl.name);
        }
        let component_idx = graph.add_node(Node::Component(ComponentNode {
            name: decl.name.clone(),
        }));
        components.insert(decl.name.clone(), component_idx);

        for binding in &decl.bindings {
            if let Some(&existing) = graph.key_to_node.get(&binding.key) {
                let owner = graph.graph[existing]
                    .as_binding()
                    .map(|b| b.component.clone())
                    .unwrap_or_default();
                bail!(
                    "duplicate binding for {}: declared in {} and {}",
                    binding.key,
                    owner,
                    decl.name
                );
            }
            graph.add_node(Node::Binding(BindingNode {
                key: binding.key.clone(),
                kind: binding.kind,
                component: decl.name.clone(),
            }));
        }

        for child in &decl.subcomponents {
            self.allocate(child, graph, components)?;
        }
        Ok(())
    }

    fn wire(
        &self,
        decl: &ComponentDecl,
        graph: &mut BindingGraph,
        components: &HashMap<String, NodeIndex>,
    ) -> Result<()> {
        let component_idx = components[&decl.name];

        for binding in &decl.bindings {
            let source = graph
                .get_node_by_key(&binding.key)
                .expect("binding allocated in pass 1");
            for request in &binding.dependencies {
                let target = graph.get_node_by_key(&request.key).with_context(|| {
                    format!(
                        "binding {} depends on {}, which is not bound",
                        binding.key, request.key
                    )
                })?;
                graph.add_edge(
                    source,
                    target,
                    Edge::Dependency(DependencyEdge {
                        request: request.clone(),
                        is_entry_point: false,
                    }),
                );
            }
        }

        for entry_point in &decl.entry_points {
            let target = graph.get_node_by_key(&entry_point.key).with_context(|| {
                format!(
                    "entry point {} of component {} is not bound",
                    entry_point.key, decl.name
                )
            })?;
            graph.add_edge(
                component_idx,
                target,
                Edge::Dependency(DependencyEdge {
                    request: entry_point.clone(),
                    is_entry_point: true,
                }),
            );
        }

        for child in &decl.subcomponents {
            let child_idx = components[&child.name];
            graph.add_edge(component_idx, child_idx, Edge::Subcomponent);
            self.wire(child, graph, components)?;
        }
        Ok(())
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
