use crate::domain::edge::Edge;
use crate::domain::key::Key;
use crate::domain::node::{BindingNode, Node};
use petgraph::Direction;
use petgraph::graph::{DiGraph, EdgeIndex, EdgeReference, NodeIndex};
use std::collections::HashMap;

/// Binding graph - the core data structure.
///
/// Built once by [`GraphBuilder`](crate::domain::builder::GraphBuilder) and
/// treated as read-only afterwards; validation passes never mutate it.
#[derive(Debug)]
pub struct BindingGraph {
    /// The directed graph of nodes and edges
    pub graph: DiGraph<Node, Edge>,

    /// Mapping from binding key to node index
    pub key_to_node: HashMap<Key, NodeIndex>,
}

impl BindingGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            key_to_node: HashMap::new(),
        }
    }

    /// Add a node; binding nodes are also indexed by their key.
    pub fn add_node(&mut self, node: Node) -> NodeIndex {
        let idx = self.graph.add_node(node);
        if let Node::Binding(binding) = &self.graph[idx] {
            self.key_to_node.insert(binding.key.clone(), idx);
        }
        idx
    }

    pub fn add_edge(&mut self, source: NodeIndex, target: NodeIndex, edge: Edge) -> EdgeIndex {
        self.graph.add_edge(source, target, edge)
    }

    pub fn node(&self, idx: NodeIndex) -> &Node {
        &self.graph[idx]
    }

    pub fn edge(&self, idx: EdgeIndex) -> &Edge {
        &self.graph[idx]
    }

    pub fn get_node_by_key(&self, key: &Key) -> Option<NodeIndex> {
        self.key_to_node.get(key).copied()
    }

    /// All binding nodes, with their indices. Component nodes are skipped.
    pub fn binding_nodes(&self) -> impl Iterator<Item = (NodeIndex, &BindingNode)> {
        self.graph
            .node_indices()
            .filter_map(|idx| self.graph[idx].as_binding().map(|binding| (idx, binding)))
    }

    /// Incoming edges of a node, of every edge kind.
    pub fn in_edges(&self, idx: NodeIndex) -> impl Iterator<Item = EdgeReference<'_, Edge>> {
        self.graph.edges_directed(idx, Direction::Incoming)
    }

    /// Source and target nodes incident to an edge.
    ///
    /// Panics if the index does not belong to this graph.
    pub fn incident_nodes(&self, edge: EdgeIndex) -> (&Node, &Node) {
        let (source, target) = self
            .graph
            .edge_endpoints(edge)
            .expect("edge index from another graph");
        (&self.graph[source], &self.graph[target])
    }
}

impl Default for BindingGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::node::{BindingKind, ComponentNode};

    fn binding(name: &str, kind: BindingKind) -> Node {
        Node::Binding(BindingNode {
            key: Key::of(name),
            kind,
            component: "App".to_string(),
        })
    }

    #[test]
    fn binding_nodes_skips_components() {
        let mut graph = BindingGraph::new();
        graph.add_node(Node::Component(ComponentNode {
            name: "App".to_string(),
        }));
        graph.add_node(binding("Config", BindingKind::Provision));
        graph.add_node(binding("Feed", BindingKind::Production));

        let keys: Vec<_> = graph
            .binding_nodes()
            .map(|(_, b)| b.key.type_name.clone())
            .collect();
        assert_eq!(keys, vec!["Config", "Feed"]);
    }

    #[test]
    fn key_lookup_finds_bindings_only() {
        let mut graph = BindingGraph::new();
        graph.add_node(Node::Component(ComponentNode {
            name: "App".to_string(),
        }));
        let idx = graph.add_node(binding("Config", BindingKind::Provision));

        assert_eq!(graph.get_node_by_key(&Key::of("Config")), Some(idx));
        assert_eq!(graph.get_node_by_key(&Key::of("App")), None);
    }
}
