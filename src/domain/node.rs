use crate::domain::key::Key;
use serde::{Deserialize, Serialize};

/// How a binding's value is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BindingKind {
    /// Produced synchronously by a provider.
    Provision,
    /// Produced asynchronously as a pipeline stage.
    Production,
}

/// A binding: a resolved provider of a value for a key.
#[derive(Debug, Clone)]
pub struct BindingNode {
    pub key: Key,
    pub kind: BindingKind,
    /// Name of the component that installed this binding.
    pub component: String,
}

impl BindingNode {
    pub fn is_production(&self) -> bool {
        matches!(self.kind, BindingKind::Production)
    }
}

/// A component: a scope that installs bindings, declares entry points and
/// may own child components. Component nodes carry no binding of their own.
#[derive(Debug, Clone)]
pub struct ComponentNode {
    pub name: String,
}

/// Polymorphic graph node. Validators must dispatch on the variant rather
/// than assume every node is a binding.
#[derive(Debug, Clone)]
pub enum Node {
    Binding(BindingNode),
    Component(ComponentNode),
}

impl Node {
    pub fn as_binding(&self) -> Option<&BindingNode> {
        match self {
            Node::Binding(binding) => Some(binding),
            _ => None,
        }
    }

    /// Human-readable identity for logs and error messages.
    pub fn describe(&self) -> String {
        match self {
            Node::Binding(binding) => format!("binding {}", binding.key),
            Node::Component(component) => format!("component {}", component.name),
        }
    }
}
