//! Organization data models

use serde::Deserialize;

/// Organization data from TFE API
///
/// TFE uses the organization name as its `id`.
#[derive(Deserialize, Debug, Clone)]
pub struct Organization {
    pub id: String,
    #[serde(rename = "type")]
    pub org_type: Option<String>,
    pub attributes: Option<OrganizationAttributes>,
}

/// Organization attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct OrganizationAttributes {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "external-id")]
    pub external_id: Option<String>,
    #[serde(rename = "created-at")]
    pub created_at: Option<String>,
    #[serde(rename = "cost-estimation-enabled")]
    pub cost_estimation_enabled: Option<bool>,
}

impl Organization {
    /// Organization name, falling back to the id
    pub fn name(&self) -> &str {
        self.attributes
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .unwrap_or(self.id.as_str())
    }

    pub fn email(&self) -> &str {
        self.attributes
            .as_ref()
            .and_then(|a| a.email.as_deref())
            .unwrap_or("")
    }

    pub fn external_id(&self) -> &str {
        self.attributes
            .as_ref()
            .and_then(|a| a.external_id.as_deref())
            .unwrap_or("")
    }
}
