//! Catalog sources
//!
//! The site serves four kinds of JSON document, all relative to the site root:
//!
//! | Path | Content |
//! |------|---------|
//! | `data/apartments.json` | apartments keyed by id |
//! | `data/zones.json` | zone polygons |
//! | `data/partners.json` | partner listings (always fetched fresh) |
//! | `data/<lang>.json` | translation tree |
//!
//! [`CatalogSource`] only has to fetch raw documents; parsing is shared.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use guide_core::{ApartmentCatalog, GuideError, Language, Partner, Zone};
use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, HeaderValue};
use serde_json::Value;

use crate::error::{ClientError, ClientResult};
use crate::http::{handle_text, now_millis};

pub const APARTMENTS_PATH: &str = "data/apartments.json";
pub const ZONES_PATH: &str = "data/zones.json";
pub const PARTNERS_PATH: &str = "data/partners.json";

pub fn translations_path(language: Language) -> String {
    format!("data/{}.json", language.code())
}

/// Read access to the guide's catalogs
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Raw document at `path`. `fresh` asks the source to bypass any cache.
    async fn fetch(&self, path: &str, fresh: bool) -> ClientResult<String>;

    async fn apartments(&self) -> ClientResult<ApartmentCatalog> {
        let raw = self.fetch(APARTMENTS_PATH, false).await?;
        Ok(ApartmentCatalog::from_json(&raw)?)
    }

    async fn translations(&self, language: Language) -> ClientResult<Value> {
        let raw = self.fetch(&translations_path(language), false).await?;
        serde_json::from_str(&raw).map_err(|e| GuideError::invalid_catalog("translation", e).into())
    }

    async fn zones(&self) -> ClientResult<Vec<Zone>> {
        let raw = self.fetch(ZONES_PATH, false).await?;
        Ok(Zone::catalog_from_json(&raw)?)
    }

    async fn partners(&self) -> ClientResult<Vec<Partner>> {
        let raw = self.fetch(PARTNERS_PATH, true).await?;
        Ok(Partner::catalog_from_json(&raw)?)
    }
}

// =============================================================================
// HTTP
// =============================================================================

/// Catalogs served over HTTP
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch(&self, path: &str, fresh: bool) -> ClientResult<String> {
        let url = self.url(path);
        let mut request = self.client.get(&url);
        if fresh {
            request = request
                .query(&[("t", now_millis())])
                .header(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        }

        tracing::debug!(url = %url, fresh, "Fetching catalog");
        let response = request.send().await?;
        handle_text(response).await
    }
}

// =============================================================================
// Local directory
// =============================================================================

/// Catalogs read from a local copy of the site
#[derive(Debug, Clone)]
pub struct DirCatalog {
    root: PathBuf,
}

impl DirCatalog {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl CatalogSource for DirCatalog {
    async fn fetch(&self, path: &str, _fresh: bool) -> ClientResult<String> {
        let full = self.root.join(path);
        tracing::debug!(path = %full.display(), "Reading catalog");
        tokio::fs::read_to_string(&full).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ClientError::NotFound(full.display().to_string())
            } else {
                ClientError::io(full.display().to_string(), e)
            }
        })
    }
}
