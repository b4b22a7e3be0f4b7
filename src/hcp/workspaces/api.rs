//! Workspace API operations

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::traits::{ApiListResponse, ApiResponse};
use crate::hcp::TfeClient;

use super::models::Workspace;

/// Build the API path for the workspaces of an organization
fn workspaces_path(org: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        api::BASE_PATH,
        api::ORGANIZATIONS,
        urlencoding::encode(org),
        api::WORKSPACES
    )
}

impl TfeClient {
    /// List all workspaces of an organization
    ///
    /// A 404 on any page is reported as `WorkspaceNotFound`.
    pub async fn list_workspaces(&self, org: &str) -> Result<Vec<Workspace>> {
        self.fetch_all_pages::<Workspace, ApiListResponse<Workspace>>(&workspaces_path(org), &[])
            .await
            .map_err(|e| {
                e.or_not_found(|| TfeError::WorkspaceNotFound {
                    organization: org.to_string(),
                    workspace: None,
                })
            })
    }

    /// Get a single workspace by organization and workspace name
    pub async fn get_workspace(&self, org: &str, name: &str) -> Result<Workspace> {
        let path = format!("{}/{}", workspaces_path(org), urlencoding::encode(name));

        let resp: ApiResponse<Workspace> = self.get_json(&path, &[]).await.map_err(|e| {
            e.or_not_found(|| TfeError::WorkspaceNotFound {
                organization: org.to_string(),
                workspace: Some(name.to_string()),
            })
        })?;
        Ok(resp.into_data())
    }
}
