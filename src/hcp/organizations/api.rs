//! Organization API operations

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::traits::{ApiListResponse, ApiResponse};
use crate::hcp::TfeClient;

use super::models::Organization;

fn organizations_path() -> String {
    format!("{}/{}", api::BASE_PATH, api::ORGANIZATIONS)
}

impl TfeClient {
    /// List all organizations the token can access
    pub async fn list_organizations(&self) -> Result<Vec<Organization>> {
        self.fetch_all_pages::<Organization, ApiListResponse<Organization>>(
            &organizations_path(),
            &[],
        )
        .await
    }

    /// Get a single organization by name
    pub async fn get_organization(&self, name: &str) -> Result<Organization> {
        let path = format!("{}/{}", organizations_path(), urlencoding::encode(name));

        let resp: ApiResponse<Organization> = self
            .get_json(&path, &[])
            .await
            .map_err(|e| {
                e.or_not_found(|| TfeError::OrganizationNotFound {
                    organization: name.to_string(),
                })
            })?;
        Ok(resp.into_data())
    }
}
