//! Workspace module

mod api;
mod models;

pub use models::{Workspace, WorkspaceAttributes, WorkspaceRelationships};
