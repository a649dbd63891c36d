//! Confluence REST client.
//!
//! A thin wrapper over the shared reqwest client carrying an organization's
//! base URL and basic-auth credentials. Each call is attempted exactly once;
//! there is no retry or backoff. Errors distinguish transport failures from
//! API responses carrying a remote status code and error body.

use reqwest::Response;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfluenceError {
    /// The remote endpoint could not be reached or the response body could
    /// not be read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote endpoint answered with a non-success status.
    #[error("confluence {status}: {body}")]
    Api { status: u16, body: String },
}

/// Client bound to one organization's Confluence instance.
pub struct ConfluenceClient<'a> {
    http: &'a reqwest::Client,
    base_url: String,
    email: String,
    token: String,
}

impl<'a> ConfluenceClient<'a> {
    pub fn new(
        http: &'a reqwest::Client,
        base_url: impl Into<String>,
        email: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            email: email.into(),
            token: token.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /rest/api/user/current. Returns the raw response; callers inspect
    /// the status to distinguish working credentials from rejected ones.
    pub async fn current_user(&self) -> Result<Response, ConfluenceError> {
        let resp = self
            .http
            .get(format!("{}/rest/api/user/current", self.base_url))
            .basic_auth(&self.email, Some(&self.token))
            .header("Accept", "application/json")
            .send()
            .await?;

        Ok(resp)
    }

    /// GET /rest/api/content, optionally scoped to a space key.
    pub async fn list_content(
        &self,
        space_key: Option<&str>,
        limit: u64,
    ) -> Result<ContentListing, ConfluenceError> {
        let mut req = self
            .http
            .get(format!("{}/rest/api/content", self.base_url))
            .basic_auth(&self.email, Some(&self.token))
            .header("Accept", "application/json")
            .query(&[("limit", limit.to_string().as_str()), ("expand", "space")]);

        if let Some(key) = space_key {
            req = req.query(&[("spaceKey", key)]);
        }

        let resp = req.send().await?;
        if !resp.status().is_success() {
            return Err(api_error(resp).await);
        }

        Ok(resp.json().await?)
    }

    /// GET /rest/api/content/{id} expanded with the storage-format body,
    /// metadata properties, and version.
    pub async fn get_page(&self, id: &str) -> Result<Page, ConfluenceError> {
        let resp = self
            .http
            .get(format!("{}/rest/api/content/{}", self.base_url, id))
            .basic_auth(&self.email, Some(&self.token))
            .header("Accept", "application/json")
            .query(&[("expand", "body.storage,metadata.properties,version")])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(api_error(resp).await);
        }

        Ok(resp.json().await?)
    }

    /// PUT /rest/api/content/{id} replacing the storage-format body.
    ///
    /// The title is kept as fetched and the version number is incremented by
    /// one relative to `page`. The page is not re-fetched here, so `page`
    /// must be the object obtained immediately before; a concurrent edit in
    /// between makes the increment race.
    pub async fn update_body(&self, page: &Page, new_html: &str) -> Result<(), ConfluenceError> {
        let resp = self
            .http
            .put(format!("{}/rest/api/content/{}", self.base_url, page.id))
            .basic_auth(&self.email, Some(&self.token))
            .header("Accept", "application/json")
            .json(&update_body_payload(page, new_html))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(api_error(resp).await);
        }

        Ok(())
    }
}

/// Builds the PUT payload replacing a page body while preserving the title
/// and bumping the version by exactly one.
fn update_body_payload(page: &Page, new_html: &str) -> serde_json::Value {
    serde_json::json!({
        "id": page.id,
        "type": "page",
        "title": page.title,
        "body": {
            "storage": {
                "value": new_html,
                "representation": "storage",
            },
        },
        "version": {
            "number": page.version.number + 1,
        },
    })
}

async fn api_error(resp: Response) -> ConfluenceError {
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    ConfluenceError::Api { status, body }
}

/// Page shape of GET /rest/api/content/{id}?expand=body.storage,metadata.properties,version.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: PageBody,
    pub version: PageVersion,
    #[serde(default)]
    pub metadata: PageMetadata,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageBody {
    #[serde(default)]
    pub storage: PageStorage,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageStorage {
    /// HTML in the provider's "storage" representation.
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageVersion {
    pub number: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageMetadata {
    #[serde(default)]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

/// Listing shape of GET /rest/api/content?expand=space.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentListing {
    #[serde(default)]
    pub results: Vec<ContentEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentEntry {
    pub id: String,
    pub title: String,
    #[serde(rename = "_links", default)]
    pub links: ContentLinks,
    #[serde(default)]
    pub space: ContentSpace,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentLinks {
    #[serde(default)]
    pub webui: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentSpace {
    #[serde(default)]
    pub key: String,
}
