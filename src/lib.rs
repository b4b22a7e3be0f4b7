//! tfe-state - typed client for the Terraform Enterprise / HCP Terraform API
//!
//! Lists organizations, workspaces and state versions, and downloads raw
//! state files.
//!
//! # Features
//!
//! - Bearer-token authentication with JSON:API requests
//! - Automatic pagination handling (`page[number]`)
//! - Typed errors with a flat [`ErrorKind`] for branching
//! - Injectable `reqwest::Client` for timeouts, proxies and test doubles
//!
//! # Example
//!
//! ```no_run
//! use tfe_state::{config::defaults, TfeClient};
//!
//! # async fn example() -> tfe_state::Result<()> {
//! let client = TfeClient::new("my-token".to_string(), defaults::BASE_URL)?;
//!
//! for ws in client.list_workspaces("my-org").await? {
//!     println!("{} ({})", ws.name(), ws.id);
//! }
//!
//! let versions = client.list_state_versions("my-org", "web").await?;
//! if let Some(latest) = versions.first() {
//!     let raw = client.download_state(&latest.id).await?;
//!     println!("{} bytes of state", raw.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod hcp;

pub use error::{ErrorKind, Result, TfeError};
pub use hcp::{
    ApiListResponse, ApiResponse, Organization, OrganizationAttributes, PaginatedResponse,
    Pagination, PaginationMeta, StateVersion, StateVersionAttributes, TerraformState, TfeClient,
    Workspace, WorkspaceAttributes,
};
