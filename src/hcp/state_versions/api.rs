//! State version API operations

use log::debug;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::traits::{ApiListResponse, ApiResponse};
use crate::hcp::TfeClient;

use super::models::{StateVersion, TerraformState};

fn state_versions_path() -> String {
    format!("{}/{}", api::BASE_PATH, api::STATE_VERSIONS)
}

impl TfeClient {
    /// List all state versions of a workspace, newest first as the API returns them
    pub async fn list_state_versions(
        &self,
        org: &str,
        workspace: &str,
    ) -> Result<Vec<StateVersion>> {
        let query = [
            (api::FILTER_ORGANIZATION, org.to_string()),
            (api::FILTER_WORKSPACE, workspace.to_string()),
        ];

        self.fetch_all_pages::<StateVersion, ApiListResponse<StateVersion>>(
            &state_versions_path(),
            &query,
        )
        .await
        .map_err(|e| {
            e.or_not_found(|| TfeError::StateVersionNotFound {
                target: format!("{}/{}", org, workspace),
            })
        })
    }

    /// Get a single state version by ID
    pub async fn get_state_version(&self, state_version_id: &str) -> Result<StateVersion> {
        let path = format!(
            "{}/{}",
            state_versions_path(),
            urlencoding::encode(state_version_id)
        );

        let resp: ApiResponse<StateVersion> = self.get_json(&path, &[]).await.map_err(|e| {
            e.or_not_found(|| TfeError::StateVersionNotFound {
                target: state_version_id.to_string(),
            })
        })?;
        Ok(resp.into_data())
    }

    /// Get the current state version of a workspace by workspace ID
    pub async fn get_current_state_version(&self, workspace_id: &str) -> Result<StateVersion> {
        let path = format!(
            "{}/{}/{}/{}",
            api::BASE_PATH,
            api::WORKSPACES,
            urlencoding::encode(workspace_id),
            api::CURRENT_STATE_VERSION
        );

        let resp: ApiResponse<StateVersion> = self.get_json(&path, &[]).await.map_err(|e| {
            e.or_not_found(|| TfeError::StateVersionNotFound {
                target: format!("current state of {}", workspace_id),
            })
        })?;
        Ok(resp.into_data())
    }

    /// Download the raw state file of a state version
    ///
    /// Fetches the state version, then GETs its hosted download URL without
    /// the API token. Returns the response body byte for byte.
    pub async fn download_state(&self, state_version_id: &str) -> Result<Vec<u8>> {
        let sv = self.get_state_version(state_version_id).await?;

        let download_url = sv
            .download_url()
            .ok_or_else(|| TfeError::MissingDownloadUrl {
                state_version: sv.id.clone(),
            })?;

        debug!("Downloading state for {} (serial {})", sv.id, sv.serial());
        self.fetch_unauthenticated(download_url).await
    }

    /// Download and parse the state file of a state version
    pub async fn download_state_json(&self, state_version_id: &str) -> Result<TerraformState> {
        let raw = self.download_state(state_version_id).await?;
        Ok(serde_json::from_slice(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sv_json(id: &str, serial: u64, download_url: Option<&str>) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "type": "state-versions",
            "attributes": {
                "serial": serial,
                "hosted-state-download-url": download_url
            }
        })
    }

    #[tokio::test]
    async fn test_list_state_versions_filters_and_pages() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v2/state-versions"))
            .and(query_param("filter[organization][name]", "my-org"))
            .and(query_param("filter[workspace][name]", "web"))
            .and(query_param_is_missing("page[number]"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [sv_json("sv-3", 3, None), sv_json("sv-2", 2, None)],
                "meta": {"pagination": {"current-page": 1, "total-pages": 2}}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v2/state-versions"))
            .and(query_param("filter[organization][name]", "my-org"))
            .and(query_param("filter[workspace][name]", "web"))
            .and(query_param("page[number]", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [sv_json("sv-1", 1, None)],
                "meta": {"pagination": {"current-page": 2, "total-pages": 2}}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let versions = client.list_state_versions("my-org", "web").await.unwrap();
        let ids: Vec<&str> = versions.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["sv-3", "sv-2", "sv-1"]);
    }

    #[tokio::test]
    async fn test_list_state_versions_not_found() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v2/state-versions"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let err = client
            .list_state_versions("my-org", "ghost")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StateVersionNotFound);
        assert!(err.to_string().contains("my-org/ghost"));
    }

    #[tokio::test]
    async fn test_get_state_version_success() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v2/state-versions/sv-42"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": sv_json("sv-42", 42, Some("https://example.com/state"))
            })))
            .mount(&mock_server)
            .await;

        let sv = client.get_state_version("sv-42").await.unwrap();
        assert_eq!(sv.serial(), 42);
        assert_eq!(sv.download_url(), Some("https://example.com/state"));
    }

    #[tokio::test]
    async fn test_get_state_version_not_found() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v2/state-versions/sv-missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let err = client.get_state_version("sv-missing").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StateVersionNotFound);
    }

    #[tokio::test]
    async fn test_get_current_state_version() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v2/workspaces/ws-123/current-state-version"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": sv_json("sv-456", 10, None)
            })))
            .mount(&mock_server)
            .await;

        let sv = client.get_current_state_version("ws-123").await.unwrap();
        assert_eq!(sv.id, "sv-456");
    }

    #[tokio::test]
    async fn test_get_current_state_version_empty_workspace() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v2/workspaces/ws-empty/current-state-version"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let err = client
            .get_current_state_version("ws-empty")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StateVersionNotFound);
    }

    #[tokio::test]
    async fn test_download_state_fetches_hosted_url_without_token() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());
        let raw_state = br#"{"version":4,"serial":7,"lineage":"l-1"}"#.to_vec();

        let download_url = format!("{}/archivist/object/abc", mock_server.uri());
        Mock::given(method("GET"))
            .and(path("/api/v2/state-versions/sv-7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": sv_json("sv-7", 7, Some(download_url.as_str()))
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/archivist/object/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(raw_state.clone()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let bytes = client.download_state("sv-7").await.unwrap();
        assert_eq!(bytes, raw_state);

        let requests = mock_server.received_requests().await.unwrap();
        let download = requests
            .iter()
            .find(|r| r.url.path() == "/archivist/object/abc")
            .unwrap();
        assert!(download.headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_download_state_missing_url() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v2/state-versions/sv-pending"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": sv_json("sv-pending", 1, None)
            })))
            .mount(&mock_server)
            .await;

        let err = client.download_state("sv-pending").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingDownloadUrl);
    }

    #[tokio::test]
    async fn test_download_state_propagates_lookup_error() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v2/state-versions/sv-x"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let err = client.download_state("sv-x").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
    }

    #[tokio::test]
    async fn test_download_state_json() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        let download_url = format!("{}/archivist/object/json", mock_server.uri());
        Mock::given(method("GET"))
            .and(path("/api/v2/state-versions/sv-8"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": sv_json("sv-8", 8, Some(download_url.as_str()))
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/archivist/object/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "version": 4,
                "terraform_version": "1.7.0",
                "serial": 8,
                "lineage": "abc-123",
                "resources": [{"type": "null_resource", "name": "x"}]
            })))
            .mount(&mock_server)
            .await;

        let state = client.download_state_json("sv-8").await.unwrap();
        assert_eq!(state.serial, 8);
        assert_eq!(state.terraform_version, "1.7.0");
        assert_eq!(state.resources.len(), 1);
    }
}
