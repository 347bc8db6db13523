//! Guide session
//!
//! Holds everything one guest view needs: the resolved apartment, the
//! translation tree for the active language and (lazily) the zone catalog.
//! Only initialization can fail; later catalog problems are logged and the
//! affected content degrades to empty.

use std::sync::Arc;

use guide_core::pages::{
    DeviceDetail, DevicesPage, EssentialsPage, IndexPage, LanguageOption, NavLink, RecommendationsPage,
    device_detail, navigation,
};
use guide_core::{Apartment, CategoryFilter, Language, Partner, Translator, Zone, ZoneLocator};
use tokio::sync::OnceCell;

use crate::catalog::CatalogSource;
use crate::config::ClientConfig;
use crate::doors::{DoorLockApi, DoorPanel, Notification};
use crate::error::{ClientError, ClientResult};
use crate::intent::IntentTracker;

pub struct GuideSession {
    catalog: Arc<dyn CatalogSource>,
    apartment: Apartment,
    translator: Translator,
    zones: OnceCell<ZoneLocator>,
    intents: IntentTracker,
}

impl GuideSession {
    /// Load the apartment catalog and the translation tree concurrently.
    ///
    /// An unknown `apartment_id` falls back to `default_apartment`; failing to
    /// load either catalog, or a missing default apartment, is an error.
    pub async fn initialize(
        catalog: Arc<dyn CatalogSource>,
        apartment_id: &str,
        language: Language,
        default_apartment: &str,
    ) -> ClientResult<Self> {
        let (apartments, tree) =
            tokio::try_join!(catalog.apartments(), catalog.translations(language))?;

        let apartment = apartments.resolve(apartment_id, default_apartment)?.clone();
        tracing::info!(
            apartment = %apartment.id,
            lang = %language,
            "Guide session initialized"
        );

        Ok(Self {
            catalog,
            apartment,
            translator: Translator::new(language, tree),
            zones: OnceCell::new(),
            intents: IntentTracker::new(),
        })
    }

    /// Build the catalog source from `config` and initialize
    pub async fn from_config(
        config: &ClientConfig,
        apartment_id: &str,
        language: Language,
    ) -> ClientResult<Self> {
        let catalog = config.build_catalog()?;
        Self::initialize(catalog, apartment_id, language, &config.default_apartment).await
    }

    pub fn apartment(&self) -> &Apartment {
        &self.apartment
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn language(&self) -> Language {
        self.translator.language()
    }

    /// Zone catalog, fetched on first use. A failed fetch is retried next time.
    pub async fn zone_locator(&self) -> Option<&ZoneLocator> {
        let result = self
            .zones
            .get_or_try_init(|| async {
                let zones = self.catalog.zones().await?;
                Ok::<_, ClientError>(ZoneLocator::new(zones))
            })
            .await;

        match result {
            Ok(locator) => Some(locator),
            Err(e) => {
                tracing::warn!(error = %e, "Zone catalog unavailable");
                None
            }
        }
    }

    /// Zone of the session's apartment
    pub async fn zone(&self) -> Option<Zone> {
        self.zone_locator().await?.locate(&self.apartment).cloned()
    }

    /// Partner catalog; empty when it cannot be loaded
    async fn partners(&self) -> Vec<Partner> {
        match self.catalog.partners().await {
            Ok(partners) => partners,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load partners");
                Vec::new()
            }
        }
    }

    pub async fn recommendations(&self, filter: &CategoryFilter) -> RecommendationsPage {
        let (zone, partners) = tokio::join!(self.zone(), self.partners());
        RecommendationsPage::build(
            &self.apartment,
            &partners,
            zone.as_ref(),
            filter,
            &self.translator,
        )
    }

    /// Switch the category filter.
    ///
    /// Returns `None` when a newer switch started before this one finished.
    pub async fn switch_filter(&self, filter: &CategoryFilter) -> Option<RecommendationsPage> {
        let token = self.intents.begin();
        tokio::select! {
            _ = token.cancelled() => {
                tracing::debug!(filter = %filter, "Superseded filter switch dropped");
                None
            }
            page = self.recommendations(filter) => (!token.is_cancelled()).then_some(page),
        }
    }

    /// Home page, links relative to `root`
    pub fn home(&self, root: &str) -> IndexPage {
        IndexPage::build(&self.apartment, root, &self.translator)
    }

    pub fn essentials(&self) -> EssentialsPage {
        EssentialsPage::build(&self.apartment, &self.translator)
    }

    pub fn devices(&self) -> DevicesPage {
        DevicesPage::build(&self.apartment, &self.translator)
    }

    pub fn device_detail(&self, key: &str) -> Option<DeviceDetail> {
        device_detail(&self.apartment, key, &self.translator)
    }

    /// Bottom navigation links relative to `root`
    pub fn navigation(&self, root: &str) -> Vec<NavLink> {
        navigation::bottom_navigation(root, &self.apartment.id, &self.translator)
    }

    pub fn language_options(&self, root: &str) -> Vec<LanguageOption> {
        navigation::language_options(root, &self.apartment.id, &self.translator)
    }

    /// Door buttons for this apartment
    pub async fn door_panel(
        &self,
        api: Arc<dyn DoorLockApi>,
        config: &ClientConfig,
    ) -> (DoorPanel, Option<Notification>) {
        DoorPanel::load(api, &self.apartment, &self.translator, config.door_timeout).await
    }
}

impl Drop for GuideSession {
    fn drop(&mut self) {
        self.intents.cancel();
    }
}
