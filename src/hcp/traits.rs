//! Response envelopes shared by every endpoint

use serde::Deserialize;

use crate::hcp::{Pagination, PaginationMeta};

/// Trait for API responses that contain paginated data
///
/// Implement this trait for a list envelope to use it with
/// `TfeClient::fetch_all_pages()`.
pub trait PaginatedResponse<T> {
    /// Consume self and return the data items
    fn into_data(self) -> Vec<T>;
    /// Get reference to pagination metadata
    fn meta(&self) -> Option<&PaginationMeta>;

    /// Pagination details, when the server sent them
    fn pagination(&self) -> Option<&Pagination> {
        self.meta().and_then(|m| m.pagination.as_ref())
    }
}

/// Generic API list response wrapper for paginated endpoints
#[derive(Deserialize, Debug)]
pub struct ApiListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Option<PaginationMeta>,
}

impl<T> PaginatedResponse<T> for ApiListResponse<T> {
    fn into_data(self) -> Vec<T> {
        self.data
    }

    fn meta(&self) -> Option<&PaginationMeta> {
        self.meta.as_ref()
    }
}

/// Generic API response wrapper for a single resource
#[derive(Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}
