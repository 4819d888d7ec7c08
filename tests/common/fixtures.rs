//! Declaration fixtures for integration tests.
#![allow(dead_code)]

use bindgraph::domain::decl::{BindingDecl, ComponentDecl};
use bindgraph::domain::key::Key;
use bindgraph::domain::node::BindingKind;
use bindgraph::domain::request::{DependencyRequest, RequestKind};

pub fn provision(type_name: &str, dependencies: Vec<DependencyRequest>) -> BindingDecl {
    BindingDecl {
        key: Key::of(type_name),
        kind: BindingKind::Provision,
        dependencies,
    }
}

pub fn production(type_name: &str, dependencies: Vec<DependencyRequest>) -> BindingDecl {
    BindingDecl {
        key: Key::of(type_name),
        kind: BindingKind::Production,
        dependencies,
    }
}

pub fn request(kind: RequestKind, type_name: &str) -> DependencyRequest {
    DependencyRequest::new(kind, Key::of(type_name))
}

pub fn component(name: &str, bindings: Vec<BindingDecl>) -> ComponentDecl {
    ComponentDecl {
        name: name.to_string(),
        bindings,
        entry_points: vec![],
        subcomponents: vec![],
    }
}

/// Provision Thumbnailer depends (synchronously) on production ImageStream.
pub fn create_provision_on_production() -> ComponentDecl {
    component(
        "App",
        vec![
            production("ImageStream", vec![]),
            provision(
                "Thumbnailer",
                vec![request(RequestKind::Instance, "ImageStream")],
            ),
        ],
    )
}

/// Production Renderer depends on production ImageStream.
pub fn create_production_chain() -> ComponentDecl {
    component(
        "App",
        vec![
            production("ImageStream", vec![]),
            production(
                "Renderer",
                vec![request(RequestKind::Instance, "ImageStream")],
            ),
        ],
    )
}

/// Entry point requesting a synchronous Instance of production ImageStream.
pub fn create_sync_entry_point_on_production() -> ComponentDecl {
    let mut decl = component("App", vec![production("ImageStream", vec![])]);
    decl.entry_points = vec![request(RequestKind::Instance, "ImageStream")];
    decl
}

/// Entry point requesting a Future of production ImageStream.
pub fn create_future_entry_point_on_production() -> ComponentDecl {
    let mut decl = component("App", vec![production("ImageStream", vec![])]);
    decl.entry_points = vec![request(RequestKind::Future, "ImageStream")];
    decl
}

/// Provisions only: Config and an HttpClient reading it. Nothing to report.
pub fn create_all_provisions() -> ComponentDecl {
    let mut decl = component(
        "App",
        vec![
            provision("Config", vec![]),
            provision("HttpClient", vec![request(RequestKind::Instance, "Config")]),
        ],
    );
    decl.entry_points = vec![request(RequestKind::Instance, "HttpClient")];
    decl
}

/// Parent installs Config; child subcomponent installs a provision that
/// depends on the parent's binding (merged namespace).
pub fn create_with_subcomponent() -> ComponentDecl {
    let mut decl = component("App", vec![provision("Config", vec![])]);
    decl.subcomponents = vec![component(
        "Session",
        vec![provision(
            "SessionStore",
            vec![request(RequestKind::Instance, "Config")],
        )],
    )];
    decl
}

/// Two provisions and one synchronous entry point, all on the same
/// production binding: three independent violations.
pub fn create_many_violations() -> ComponentDecl {
    let mut decl = component(
        "App",
        vec![
            production("ImageStream", vec![]),
            provision(
                "Thumbnailer",
                vec![request(RequestKind::Instance, "ImageStream")],
            ),
            provision(
                "Uploader",
                vec![request(RequestKind::Provider, "ImageStream")],
            ),
        ],
    );
    decl.entry_points = vec![request(RequestKind::Lazy, "ImageStream")];
    decl
}
