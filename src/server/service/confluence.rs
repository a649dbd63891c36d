//! Confluence integration service.
//!
//! Resolves an organization's effective credentials (its own row, falling
//! back to environment-level defaults), probes connectivity, lists pages from
//! the configured space, and reads/updates page bodies for documents linked
//! to a provider page.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    config::ConfluenceDefaults,
    data::{
        document::DocumentRepository, organization::OrganizationRepository,
        workspace::WorkspaceRepository,
    },
    error::AppError,
    model::{
        confluence::{ConfluencePage, ConnectionTest},
        organization::Organization,
    },
    provider::confluence::{ConfluenceClient, Page, PageBody, PageStorage, PageVersion},
};

/// Effective credentials for one organization after applying environment
/// fallbacks.
struct Credentials {
    base_url: String,
    email: String,
    token: String,
    space_key: Option<String>,
}

pub struct ConfluenceService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    defaults: &'a ConfluenceDefaults,
}

impl<'a> ConfluenceService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        defaults: &'a ConfluenceDefaults,
    ) -> Self {
        Self {
            db,
            http_client,
            defaults,
        }
    }

    /// Probes the organization's Confluence credentials.
    ///
    /// Missing configuration and rejected credentials both come back as
    /// `success = false` with diagnostic detail; no network call is made in
    /// the unconfigured case. Only transport failures surface as errors.
    ///
    /// # Returns
    /// - `Ok(ConnectionTest)` - Probe outcome, successful or not
    /// - `Err(AppError::NotFound)` - Organization missing
    /// - `Err(AppError::ReqwestErr)` - Endpoint unreachable
    pub async fn test_connection(&self, org_id: Uuid) -> Result<ConnectionTest, AppError> {
        let org = self.org(org_id).await?;

        let Some(creds) = self.credentials_for(&org) else {
            return Ok(ConnectionTest {
                success: false,
                message: "Confluence integration not configured".to_string(),
                details: Some("Missing base URL, email, or token".to_string()),
            });
        };

        let client = ConfluenceClient::new(self.http_client, creds.base_url, creds.email, creds.token);
        let resp = client.current_user().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await?;
            return Ok(ConnectionTest {
                success: false,
                message: "Authentication failed".to_string(),
                details: Some(format!("HTTP {}: {}", status.as_u16(), body)),
            });
        }

        Ok(ConnectionTest {
            success: true,
            message: "Connection successful".to_string(),
            details: Some("Successfully authenticated with Confluence".to_string()),
        })
    }

    /// Lists pages from the organization's configured space.
    ///
    /// Unlike `test_connection`, missing configuration is an error here. A
    /// non-positive limit behaves as 10.
    ///
    /// # Returns
    /// - `Ok(Vec<ConfluencePage>)` - Flat page listing with absolute links
    /// - `Err(AppError::NotFound)` - Organization missing
    /// - `Err(AppError::NotConfigured)` - No usable credentials
    /// - `Err(AppError::Upstream)` - Provider answered with an error status
    /// - `Err(AppError::ReqwestErr)` - Endpoint unreachable
    pub async fn list_pages(
        &self,
        org_id: Uuid,
        limit: i64,
    ) -> Result<Vec<ConfluencePage>, AppError> {
        let org = self.org(org_id).await?;

        let Some(creds) = self.credentials_for(&org) else {
            return Err(AppError::NotConfigured(
                "Confluence integration not configured".to_string(),
            ));
        };

        let client = ConfluenceClient::new(self.http_client, creds.base_url, creds.email, creds.token);
        let listing = client
            .list_content(creds.space_key.as_deref(), effective_limit(limit))
            .await?;

        let pages = listing
            .results
            .into_iter()
            .map(|entry| ConfluencePage {
                id: entry.id,
                title: entry.title,
                url: format!("{}{}", client.base_url(), entry.links.webui),
                space: entry.space.key,
            })
            .collect();

        Ok(pages)
    }

    /// Fetches the provider page a document is linked to, with its
    /// storage-format body and version.
    ///
    /// # Returns
    /// - `Ok(Page)` - The remote page
    /// - `Err(AppError::NotFound)` - Document, workspace, or organization missing
    /// - `Err(AppError::NotConfigured)` - Document has no page id or no credentials
    /// - `Err(AppError::Upstream)` / `Err(AppError::ReqwestErr)` - Provider failure
    pub async fn get_document_page(&self, document_id: Uuid) -> Result<Page, AppError> {
        let (client, external_id, _) = self.document_client(document_id).await?;

        let page = client.get_page(&external_id).await?;

        Ok(page)
    }

    /// Replaces the body of the provider page a document is linked to.
    ///
    /// Fetches the page first so the version increment applies to the state
    /// just read, then stamps the document's `last_checked`. The returned
    /// page reflects the write (new body, version + 1) without a re-fetch.
    pub async fn update_document_page(
        &self,
        document_id: Uuid,
        new_html: &str,
    ) -> Result<Page, AppError> {
        let (client, external_id, doc_id) = self.document_client(document_id).await?;

        let page = client.get_page(&external_id).await?;
        client.update_body(&page, new_html).await?;

        DocumentRepository::new(self.db)
            .update_last_checked(doc_id)
            .await?;

        Ok(Page {
            id: page.id,
            title: page.title,
            body: PageBody {
                storage: PageStorage {
                    value: new_html.to_string(),
                },
            },
            version: PageVersion {
                number: page.version.number + 1,
            },
            metadata: page.metadata,
        })
    }

    /// Resolves document → workspace → organization and builds a client from
    /// the organization's effective credentials.
    async fn document_client(
        &self,
        document_id: Uuid,
    ) -> Result<(ConfluenceClient<'a>, String, Uuid), AppError> {
        let doc = DocumentRepository::new(self.db)
            .get_by_id(document_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Document not found".to_string()))?;

        let Some(external_id) = doc.external_id.filter(|id| !id.is_empty()) else {
            return Err(AppError::NotConfigured(
                "document is not linked to a provider page".to_string(),
            ));
        };

        let workspace = WorkspaceRepository::new(self.db)
            .get_by_id(doc.workspace_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Workspace not found".to_string()))?;

        let org = self.org(workspace.org_id).await?;
        let Some(creds) = self.credentials_for(&org) else {
            return Err(AppError::NotConfigured(
                "Confluence integration not configured".to_string(),
            ));
        };

        let client = ConfluenceClient::new(self.http_client, creds.base_url, creds.email, creds.token);

        Ok((client, external_id, doc.id))
    }

    async fn org(&self, org_id: Uuid) -> Result<Organization, AppError> {
        OrganizationRepository::new(self.db)
            .get_by_id(org_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Organization not found".to_string()))
    }

    fn credentials_for(&self, org: &Organization) -> Option<Credentials> {
        resolve_credentials(org, self.defaults)
    }
}

/// Organization credentials win; environment defaults fill the holes.
/// Returns `None` unless base URL, email, and token are all present.
fn resolve_credentials(org: &Organization, defaults: &ConfluenceDefaults) -> Option<Credentials> {
    let base_url =
        non_empty(org.confluence_base_url.clone()).or_else(|| non_empty(defaults.base_url.clone()))?;
    let email =
        non_empty(org.confluence_email.clone()).or_else(|| non_empty(defaults.email.clone()))?;
    let token =
        non_empty(org.confluence_token.clone()).or_else(|| non_empty(defaults.token.clone()))?;
    let space_key = non_empty(org.confluence_space_key.clone())
        .or_else(|| non_empty(defaults.space_key.clone()));

    Some(Credentials {
        base_url,
        email,
        token,
        space_key,
    })
}

/// A non-positive limit behaves as the default of 10.
fn effective_limit(limit: i64) -> u64 {
    if limit <= 0 {
        10
    } else {
        limit as u64
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
