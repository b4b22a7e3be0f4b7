//! JSON:API relationship types shared across resources

use serde::Deserialize;

/// Relationship with data containing id
#[derive(Deserialize, Debug, Clone)]
pub struct RelationshipData {
    pub data: Option<RelationshipId>,
    pub links: Option<RelationshipLinks>,
}

/// Relationship ID reference
#[derive(Deserialize, Debug, Clone)]
pub struct RelationshipId {
    pub id: String,
    #[serde(rename = "type")]
    pub rel_type: Option<String>,
}

/// Links in a relationship
#[derive(Deserialize, Debug, Clone)]
pub struct RelationshipLinks {
    pub related: Option<String>,
}

impl RelationshipData {
    /// ID of the related resource, if the relationship carries data
    pub fn id(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.id.as_str())
    }
}
