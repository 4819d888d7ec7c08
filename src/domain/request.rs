use crate::domain::key::Key;
use serde::{Deserialize, Serialize};

/// How a requester consumes the value it asks for.
///
/// The kind decides synchronous-vs-asynchronous consumption semantics:
/// `Instance`, `Provider` and the other synchronous kinds demand the value
/// (or a synchronous handle to it) at injection time, while `Producer`,
/// `Produced` and `Future` hand the requester an asynchronous handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestKind {
    /// The value itself, synchronously.
    Instance,
    /// A provider handle that produces the value on demand.
    Provider,
    /// A lazily-initialized, memoized instance.
    Lazy,
    /// A provider of lazy instances (fresh memoization per call).
    ProviderOfLazy,
    /// Injection into an existing instance's members.
    MembersInjection,
    /// A producer task handle for the value.
    Producer,
    /// The settled result of the producing pipeline stage (value or failure).
    Produced,
    /// A future resolving to the value.
    Future,
}

/// Returns true if an entry point with this request kind may be satisfied by
/// a production binding. Synchronous kinds cannot: a production value only
/// materializes when its pipeline stage runs.
pub fn entry_point_can_use_production(kind: RequestKind) -> bool {
    matches!(
        kind,
        RequestKind::Producer | RequestKind::Produced | RequestKind::Future
    )
}

/// One dependency request: which key is wanted and how it will be consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRequest {
    pub kind: RequestKind,
    pub key: Key,
}

impl DependencyRequest {
    pub fn new(kind: RequestKind, key: Key) -> Self {
        Self { kind, key }
    }
}
