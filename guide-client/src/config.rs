//! Client configuration

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use guide_core::DEFAULT_APARTMENT_ID;

use crate::catalog::{CatalogSource, DirCatalog, HttpCatalog};
use crate::doors::RaixerClient;
use crate::error::{ClientError, ClientResult};

/// Where the `data/*.json` catalogs are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Site root URL; catalogs live under `<url>/data/`
    Http(String),
    /// Local site root; catalogs live under `<dir>/data/`
    Dir(PathBuf),
}

impl Default for DataSource {
    fn default() -> Self {
        Self::Dir(PathBuf::from("."))
    }
}

/// Door-lock vendor API endpoint and Basic-auth credentials
#[derive(Clone, PartialEq, Eq)]
pub struct DoorApiConfig {
    pub base_url: String,
    pub user: String,
    pub secret: String,
}

impl std::fmt::Debug for DoorApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DoorApiConfig")
            .field("base_url", &self.base_url)
            .field("user", &self.user)
            .field("secret", &"***")
            .finish()
    }
}

/// Client configuration for a guide session
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Catalog location
    pub data_source: DataSource,

    /// Door-lock API; door control is disabled without it
    pub door_api: Option<DoorApiConfig>,

    /// Catalog request timeout
    pub timeout: Duration,

    /// Upper bound for a single door-lock call
    pub door_timeout: Duration,

    /// Apartment used when the requested one is unknown
    pub default_apartment: String,
}

impl ClientConfig {
    pub fn new(data_source: DataSource) -> Self {
        Self {
            data_source,
            door_api: None,
            timeout: Duration::from_secs(10),
            door_timeout: Duration::from_secs(15),
            default_apartment: DEFAULT_APARTMENT_ID.to_string(),
        }
    }

    /// Read catalogs over HTTP from a site root
    pub fn http(base_url: impl Into<String>) -> Self {
        Self::new(DataSource::Http(base_url.into()))
    }

    /// Read catalogs from a local site root
    pub fn dir(root: impl Into<PathBuf>) -> Self {
        Self::new(DataSource::Dir(root.into()))
    }

    /// Set the door-lock API endpoint and credentials
    pub fn with_door_api(
        mut self,
        base_url: impl Into<String>,
        user: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        self.door_api = Some(DoorApiConfig {
            base_url: base_url.into(),
            user: user.into(),
            secret: secret.into(),
        });
        self
    }

    /// Set the catalog request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the door-lock call timeout
    pub fn with_door_timeout(mut self, timeout: Duration) -> Self {
        self.door_timeout = timeout;
        self
    }

    pub fn with_default_apartment(mut self, id: impl Into<String>) -> Self {
        self.default_apartment = id.into();
        self
    }

    /// Create the catalog source for this configuration
    pub fn build_catalog(&self) -> ClientResult<Arc<dyn CatalogSource>> {
        Ok(match &self.data_source {
            DataSource::Http(url) => Arc::new(HttpCatalog::new(url, self.timeout)?),
            DataSource::Dir(root) => Arc::new(DirCatalog::new(root)),
        })
    }

    /// Create the door-lock client
    pub fn build_door_client(&self) -> ClientResult<RaixerClient> {
        let api = self
            .door_api
            .as_ref()
            .ok_or(ClientError::NotConfigured("door-lock API credentials"))?;
        RaixerClient::new(api, self.door_timeout)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DataSource::default())
    }
}
