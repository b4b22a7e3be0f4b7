//! TFE API client module
//!
//! This module provides typed access to the Terraform Enterprise API.

mod client;
pub mod models;
pub mod organizations;
pub mod state_versions;
pub mod traits;
pub mod workspaces;

use serde::Deserialize;

pub use client::TfeClient;
pub use models::{RelationshipData, RelationshipId, RelationshipLinks};
pub use organizations::{Organization, OrganizationAttributes};
pub use state_versions::{StateVersion, StateVersionAttributes, TerraformState};
pub use traits::{ApiListResponse, ApiResponse, PaginatedResponse};
pub use workspaces::{Workspace, WorkspaceAttributes};

/// Pagination metadata from TFE API (shared across resources)
#[derive(Deserialize, Debug, Default, Clone)]
pub struct PaginationMeta {
    pub pagination: Option<Pagination>,
}

/// Pagination details
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    #[serde(rename = "current-page")]
    pub current_page: u32,
    #[serde(rename = "next-page", default)]
    pub next_page: Option<u32>,
    #[serde(rename = "prev-page", default)]
    pub prev_page: Option<u32>,
    #[serde(rename = "total-pages")]
    pub total_pages: u32,
    #[serde(rename = "total-count", default)]
    pub total_count: u32,
}

impl Pagination {
    /// A listing is complete once the current page reaches the total
    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }
}
