/// Configuration constants for TFE API
pub mod api {
    /// Base path for TFE API v2
    pub const BASE_PATH: &str = "/api/v2";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Workspaces endpoint
    pub const WORKSPACES: &str = "workspaces";

    /// State versions endpoint
    pub const STATE_VERSIONS: &str = "state-versions";

    /// Current state version of a workspace
    pub const CURRENT_STATE_VERSION: &str = "current-state-version";

    /// JSON:API media type sent with every request
    pub const CONTENT_TYPE: &str = "application/vnd.api+json";

    /// Query parameter selecting the page of a listing (1-indexed)
    pub const PAGE_NUMBER: &str = "page[number]";

    /// Query parameter filtering state versions by organization name
    pub const FILTER_ORGANIZATION: &str = "filter[organization][name]";

    /// Query parameter filtering state versions by workspace name
    pub const FILTER_WORKSPACE: &str = "filter[workspace][name]";
}

/// Default values for the client
pub mod defaults {
    /// Default base URL of Terraform Enterprise SaaS
    pub const BASE_URL: &str = "https://app.terraform.io";

    /// Connect timeout in seconds for the default HTTP client
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Total request timeout in seconds for the default HTTP client
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}
