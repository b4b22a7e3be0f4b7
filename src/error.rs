use std::fmt;

/// Flat classification of [`TfeError`], for callers that only need to branch
/// on what went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Unauthorized,
    NotFound,
    OrganizationNotFound,
    WorkspaceNotFound,
    StateVersionNotFound,
    UnrecognizedStatus,
    MissingDownloadUrl,
    Pagination,
    Http,
    Json,
    Url,
}

/// Custom error type for TFE operations
#[derive(Debug)]
pub enum TfeError {
    /// API answered 401
    Unauthorized { path: String },
    /// API answered 404 for a path with no more specific meaning
    NotFound { path: String },
    /// Organization lookup answered 404
    OrganizationNotFound { organization: String },
    /// Workspace-scoped call answered 404
    WorkspaceNotFound {
        organization: String,
        workspace: Option<String>,
    },
    /// State-version-scoped call answered 404
    StateVersionNotFound { target: String },
    /// API answered with a status other than 200, 401 or 404
    UnrecognizedStatus { status: u16, path: String },
    /// State version has no hosted download URL
    MissingDownloadUrl { state_version: String },
    /// Server pagination metadata did not advance
    Pagination { path: String, page: u32 },
    /// HTTP request failed
    Http(reqwest::Error),
    /// JSON decoding failed
    Json(serde_json::Error),
    /// Base URL or download URL could not be parsed
    Url(url::ParseError),
}

impl TfeError {
    /// Kind of this error, without its context
    pub fn kind(&self) -> ErrorKind {
        match self {
            TfeError::Unauthorized { .. } => ErrorKind::Unauthorized,
            TfeError::NotFound { .. } => ErrorKind::NotFound,
            TfeError::OrganizationNotFound { .. } => ErrorKind::OrganizationNotFound,
            TfeError::WorkspaceNotFound { .. } => ErrorKind::WorkspaceNotFound,
            TfeError::StateVersionNotFound { .. } => ErrorKind::StateVersionNotFound,
            TfeError::UnrecognizedStatus { .. } => ErrorKind::UnrecognizedStatus,
            TfeError::MissingDownloadUrl { .. } => ErrorKind::MissingDownloadUrl,
            TfeError::Pagination { .. } => ErrorKind::Pagination,
            TfeError::Http(_) => ErrorKind::Http,
            TfeError::Json(_) => ErrorKind::Json,
            TfeError::Url(_) => ErrorKind::Url,
        }
    }

    /// HTTP status behind this error, if it came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            TfeError::Unauthorized { .. } => Some(401),
            TfeError::NotFound { .. }
            | TfeError::OrganizationNotFound { .. }
            | TfeError::WorkspaceNotFound { .. }
            | TfeError::StateVersionNotFound { .. } => Some(404),
            TfeError::UnrecognizedStatus { status, .. } => Some(*status),
            TfeError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Map the status code of a non-200 response to an error
    pub(crate) fn from_status(status: u16, path: &str) -> Self {
        match status {
            401 => TfeError::Unauthorized {
                path: path.to_string(),
            },
            404 => TfeError::NotFound {
                path: path.to_string(),
            },
            status => TfeError::UnrecognizedStatus {
                status,
                path: path.to_string(),
            },
        }
    }

    /// Replace a generic `NotFound` with a resource-specific error.
    ///
    /// All other errors pass through untouched.
    pub(crate) fn or_not_found<F>(self, specific: F) -> Self
    where
        F: FnOnce() -> TfeError,
    {
        match self {
            TfeError::NotFound { .. } => specific(),
            other => other,
        }
    }
}

impl fmt::Display for TfeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TfeError::Unauthorized { path } => {
                write!(f, "User is not authorized to perform this action ({})", path)
            }
            TfeError::NotFound { path } => write!(f, "Not found: {}", path),
            TfeError::OrganizationNotFound { organization } => {
                write!(f, "Organization '{}' not found", organization)
            }
            TfeError::WorkspaceNotFound {
                organization,
                workspace: Some(workspace),
            } => write!(
                f,
                "Workspace '{}' not found in organization '{}'",
                workspace, organization
            ),
            TfeError::WorkspaceNotFound {
                organization,
                workspace: None,
            } => write!(
                f,
                "Workspaces not found for organization '{}'",
                organization
            ),
            TfeError::StateVersionNotFound { target } => {
                write!(f, "State version not found: {}", target)
            }
            TfeError::UnrecognizedStatus { status, path } => {
                write!(f, "Unrecognized status code {} from {}", status, path)
            }
            TfeError::MissingDownloadUrl { state_version } => write!(
                f,
                "State version '{}' has no hosted state download URL",
                state_version
            ),
            TfeError::Pagination { path, page } => write!(
                f,
                "Pagination did not advance past page {} for {}",
                page, path
            ),
            TfeError::Http(e) => write!(f, "HTTP request failed: {}", e),
            TfeError::Json(e) => write!(f, "JSON error: {}", e),
            TfeError::Url(e) => write!(f, "Invalid URL: {}", e),
        }
    }
}

impl std::error::Error for TfeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TfeError::Http(e) => Some(e),
            TfeError::Json(e) => Some(e),
            TfeError::Url(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TfeError {
    fn from(err: reqwest::Error) -> Self {
        TfeError::Http(err)
    }
}

impl From<serde_json::Error> for TfeError {
    fn from(err: serde_json::Error) -> Self {
        TfeError::Json(err)
    }
}

impl From<url::ParseError> for TfeError {
    fn from(err: url::ParseError) -> Self {
        TfeError::Url(err)
    }
}

/// Result type alias for TFE operations
pub type Result<T> = std::result::Result<T, TfeError>;
