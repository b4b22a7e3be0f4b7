//! Workspace data models

use serde::Deserialize;

use crate::hcp::models::RelationshipData;

/// Workspace data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Workspace {
    pub id: String,
    #[serde(rename = "type")]
    pub ws_type: Option<String>,
    pub attributes: WorkspaceAttributes,
    pub relationships: Option<WorkspaceRelationships>,
}

/// Workspace attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct WorkspaceAttributes {
    pub name: String,

    pub description: Option<String>,

    #[serde(rename = "execution-mode")]
    pub execution_mode: Option<String>,

    #[serde(rename = "auto-apply")]
    pub auto_apply: Option<bool>,

    #[serde(rename = "resource-count")]
    pub resource_count: Option<u32>,

    pub locked: Option<bool>,

    #[serde(rename = "terraform-version")]
    pub terraform_version: Option<String>,

    #[serde(rename = "working-directory")]
    pub working_directory: Option<String>,

    #[serde(rename = "created-at")]
    pub created_at: Option<String>,

    #[serde(rename = "updated-at")]
    pub updated_at: Option<String>,
}

/// Workspace relationships from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct WorkspaceRelationships {
    pub organization: Option<RelationshipData>,
    #[serde(rename = "current-state-version")]
    pub current_state_version: Option<RelationshipData>,
}

impl Workspace {
    pub fn name(&self) -> &str {
        &self.attributes.name
    }

    /// Get resource count, defaulting to 0 if not available
    pub fn resource_count(&self) -> u32 {
        self.attributes.resource_count.unwrap_or(0)
    }

    /// Get execution mode, defaulting to "unknown" if not available
    pub fn execution_mode(&self) -> &str {
        self.attributes
            .execution_mode
            .as_deref()
            .unwrap_or("unknown")
    }

    pub fn is_locked(&self) -> bool {
        self.attributes.locked.unwrap_or(false)
    }

    /// Get terraform version, defaulting to "unknown" if not available
    pub fn terraform_version(&self) -> &str {
        self.attributes
            .terraform_version
            .as_deref()
            .unwrap_or("unknown")
    }

    /// Get organization name if available (from relationships)
    pub fn organization_name(&self) -> Option<&str> {
        self.relationships
            .as_ref()
            .and_then(|r| r.organization.as_ref())
            .and_then(|o| o.id())
    }

    /// ID of the workspace's current state version, if it has one
    pub fn current_state_version_id(&self) -> Option<&str> {
        self.relationships
            .as_ref()
            .and_then(|r| r.current_state_version.as_ref())
            .and_then(|sv| sv.id())
    }
}
