use crate::domain::request::DependencyRequest;

/// One dependency request edge: requester (binding or component) → the
/// binding that satisfies the request.
#[derive(Debug, Clone)]
pub struct DependencyEdge {
    pub request: DependencyRequest,
    /// True when the requester is a component entry point rather than
    /// another binding.
    pub is_entry_point: bool,
}

/// Edge payload - granular classification of graph edges.
///
/// Dependency-level passes must skip non-dependency edges instead of
/// assuming every edge carries a request.
#[derive(Debug, Clone)]
pub enum Edge {
    /// A dependency request (binding → binding, or entry point → binding).
    Dependency(DependencyEdge),
    /// Parent component → child component link.
    Subcomponent,
}

impl Edge {
    pub fn as_dependency(&self) -> Option<&DependencyEdge> {
        match self {
            Edge::Dependency(dependency) => Some(dependency),
            _ => None,
        }
    }
}
