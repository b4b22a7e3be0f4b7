//! TFE HTTP client for API interactions

use log::debug;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

use crate::config::{api, defaults};
use crate::error::{Result, TfeError};
use crate::hcp::traits::PaginatedResponse;

/// TFE API client
///
/// Holds the credential, the base URL and the HTTP client handle used for
/// every request. Clones share the underlying connection pool.
#[derive(Clone)]
pub struct TfeClient {
    http: Client,
    token: String,
    base_url: Url,
}

impl std::fmt::Debug for TfeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfeClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl TfeClient {
    /// Create a new TFE client with default connection settings
    ///
    /// `base_url` is the endpoint root, e.g. [`defaults::BASE_URL`].
    pub fn new(token: String, base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(defaults::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS))
            .build()?;

        Self::with_http_client(http, token, base_url)
    }

    /// Create a client around a caller-supplied HTTP client
    ///
    /// Use this to control timeouts, proxies or TLS settings.
    pub fn with_http_client(http: Client, token: String, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        Ok(Self {
            http,
            token,
            base_url,
        })
    }

    /// Base URL all API paths are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an absolute API path and query against the base URL
    pub(crate) fn build_url(&self, path: &str, query: &[(&str, String)]) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url.set_query(None);
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        url
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", api::CONTENT_TYPE)
    }

    /// Perform one authenticated request and decode its JSON body
    ///
    /// 200 decodes into `T`; 401, 404 and every other status map to
    /// `Unauthorized`, `NotFound` and `UnrecognizedStatus`.
    pub async fn execute<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: &[(&str, String)],
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.build_url(path, query);
        debug!("{} {}", method, url);

        let mut builder = self.with_headers(self.http.request(method, url));
        if let Some(body) = body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        if status != 200 {
            debug!("{} answered with status {}", path, status);
            return Err(TfeError::from_status(status, path));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// GET an API path and decode its JSON body
    pub async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.execute::<T, ()>(Method::GET, path, None, query).await
    }

    /// Fetch all pages from a paginated API endpoint
    ///
    /// Page 1 is requested without a page parameter. While the reported
    /// current page is below the total, the next page is requested with
    /// `page[number]` added to `query`. Items keep server order, and the first
    /// failing page aborts the whole listing.
    ///
    /// # Type Parameters
    /// * `T` - The item type (e.g., Workspace)
    /// * `R` - The response type that implements PaginatedResponse<T>
    pub async fn fetch_all_pages<T, R>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        let first: R = self.get_json(path, query).await?;
        let mut pagination = first.pagination().cloned();
        let mut all_items = first.into_data();

        while let Some(current) = pagination {
            if current.is_last_page() {
                break;
            }

            let next_page = current.current_page + 1;
            debug!("Fetching page {}/{} of {}", next_page, current.total_pages, path);

            let mut page_query = query.to_vec();
            page_query.push((api::PAGE_NUMBER, next_page.to_string()));

            let resp: R = self.get_json(path, &page_query).await?;
            pagination = resp.pagination().cloned();

            if let Some(ref p) = pagination {
                if p.current_page <= current.current_page {
                    return Err(TfeError::Pagination {
                        path: path.to_string(),
                        page: p.current_page,
                    });
                }
            }

            all_items.extend(resp.into_data());
        }

        debug!("Fetched {} total items from {}", all_items.len(), path);
        Ok(all_items)
    }

    /// GET an absolute URL without credentials and return the raw body
    ///
    /// Used for signed download links, which must not receive the API token.
    pub async fn fetch_unauthenticated(&self, url: &str) -> Result<Vec<u8>> {
        let url = Url::parse(url)?;
        debug!("Downloading from: {}", url);

        let response = self.http.get(url.clone()).send().await?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(TfeError::from_status(status, url.path()));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
impl TfeClient {
    /// Create a test client with mock base URL
    pub fn test_client(base_url: &str) -> Self {
        Self::new("test-token".to_string(), base_url).unwrap()
    }
}
