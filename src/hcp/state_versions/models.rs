//! State version data models

use serde::Deserialize;

use crate::hcp::models::RelationshipData;

/// State version data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct StateVersion {
    pub id: String,
    #[serde(rename = "type")]
    pub sv_type: Option<String>,
    pub attributes: StateVersionAttributes,
    pub relationships: Option<StateVersionRelationships>,
}

/// State version attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct StateVersionAttributes {
    #[serde(default)]
    pub serial: u64,

    #[serde(rename = "created-at")]
    pub created_at: Option<String>,

    #[serde(rename = "terraform-version")]
    pub terraform_version: Option<String>,

    #[serde(rename = "hosted-state-download-url")]
    pub hosted_state_download_url: Option<String>,

    #[serde(rename = "hosted-json-state-download-url")]
    pub hosted_json_state_download_url: Option<String>,

    #[serde(rename = "resources-processed")]
    pub resources_processed: Option<bool>,

    pub lineage: Option<String>,

    pub size: Option<u64>,

    pub status: Option<String>,
}

/// State version relationships from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct StateVersionRelationships {
    pub run: Option<RelationshipData>,
    #[serde(rename = "created-by")]
    pub created_by: Option<RelationshipData>,
}

impl StateVersion {
    /// Signed URL of the raw state file, if the server provided one
    pub fn download_url(&self) -> Option<&str> {
        self.attributes.hosted_state_download_url.as_deref()
    }

    pub fn serial(&self) -> u64 {
        self.attributes.serial
    }

    /// ID of the run that created this state version
    pub fn run_id(&self) -> Option<&str> {
        self.relationships
            .as_ref()
            .and_then(|r| r.run.as_ref())
            .and_then(|r| r.id())
    }
}

/// Downloaded Terraform state file structure
#[derive(Deserialize, Debug)]
pub struct TerraformState {
    pub version: u32,
    #[serde(default)]
    pub terraform_version: String,
    pub serial: u64,
    pub lineage: String,
    #[serde(default)]
    pub outputs: serde_json::Value,
    #[serde(default)]
    pub resources: Vec<serde_json::Value>,
}
