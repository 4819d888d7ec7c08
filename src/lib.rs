//! bindgraph library — binding graph construction and static validation.

pub mod adapters;
pub mod app;
pub mod domain;
