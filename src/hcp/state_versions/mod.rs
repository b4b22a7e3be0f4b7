//! State version module - list, inspect and download workspace state

mod api;
mod models;

pub use models::{StateVersion, StateVersionAttributes, StateVersionRelationships, TerraformState};
