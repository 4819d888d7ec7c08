//! Binding declarations: contract between a front-end (annotation processor,
//! macro expansion, test fixture) and the graph builder.
//!
//! Front-ends describe a component tree declaratively; [`GraphBuilder`]
//! (crate::domain::builder::GraphBuilder) turns the tree into a
//! [`BindingGraph`](crate::domain::graph::BindingGraph). All types here are
//! serde-serializable so declarations can also arrive as JSON.

use crate::domain::key::Key;
use crate::domain::node::BindingKind;
use crate::domain::request::DependencyRequest;
use serde::{Deserialize, Serialize};

/// One declared binding: the key it satisfies, how its value is produced,
/// and what it needs from the rest of the graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingDecl {
    pub key: Key,
    pub kind: BindingKind,
    #[serde(default)]
    pub dependencies: Vec<DependencyRequest>,
}

/// A declared component: the bindings it installs, the entry points it
/// exposes and the child components it owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentDecl {
    pub name: String,
    #[serde(default)]
    pub bindings: Vec<BindingDecl>,
    #[serde(default)]
    pub entry_points: Vec<DependencyRequest>,
    #[serde(default)]
    pub subcomponents: Vec<ComponentDecl>,
}
