// guide-client/tests/session_integration.rs
// Session lifecycle against a local site copy

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use guide_client::{CatalogSource, ClientConfig, ClientError, ClientResult, DirCatalog, GuideSession};
use guide_core::pages::SpotlightView;
use guide_core::{CategoryFilter, GuideError, Language};
use serde_json::json;
use tempfile::TempDir;

fn write(root: &Path, name: &str, value: serde_json::Value) {
    let data = root.join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join(name), value.to_string()).unwrap();
}

/// Site with two apartments, two zones and three partners
fn site() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write(
        root,
        "apartments.json",
        json!({
            "sol-101": {
                "name": "Sol 101",
                "lat": "40.415",
                "lng": "-3.705",
                "devices": { "tv": {}, "hob": {} }
            },
            "faro-2": { "name": "Faro 2" }
        }),
    );
    write(
        root,
        "zones.json",
        json!([
            { "id": "centro", "name": "Centro", "polygon": [[-3.71, 40.41], [-3.70, 40.41], [-3.70, 40.42], [-3.71, 40.42]] },
            { "id": "retiro", "name": "Retiro", "polygon": [[-3.69, 40.41], [-3.68, 40.41], [-3.68, 40.42], [-3.69, 40.42]] }
        ]),
    );
    write(
        root,
        "partners.json",
        json!([
            { "name": "Gran Café", "categoryKey": "eat", "global": true },
            { "name": "Taberna Centro", "categoryKey": "eat", "zones": ["centro"] },
            { "name": "Bar Retiro", "categoryKey": "drink", "zones": ["retiro"] }
        ]),
    );
    write(
        root,
        "es.json",
        json!({
            "navigation": { "nav_home": "Inicio" },
            "recommendations": { "local_offers_in": "Ofertas locales en {{zone}}" }
        }),
    );
    write(
        root,
        "en.json",
        json!({
            "navigation": { "nav_home": "Home" },
            "glossary": { "puerta": "door" }
        }),
    );
    dir
}

async fn open_session(dir: &TempDir, apartment: &str, language: Language) -> ClientResult<GuideSession> {
    GuideSession::from_config(&ClientConfig::dir(dir.path()), apartment, language).await
}

#[tokio::test]
async fn test_unknown_apartment_falls_back_to_default() {
    let dir = site();
    let session = open_session(&dir, "does-not-exist", Language::Es).await.unwrap();
    assert_eq!(session.apartment().id, "sol-101");

    let session = open_session(&dir, "faro-2", Language::En).await.unwrap();
    assert_eq!(session.apartment().id, "faro-2");
    assert!(session.translator().has_glossary());
}

#[tokio::test]
async fn test_missing_default_apartment_is_an_error() {
    let dir = site();
    let config = ClientConfig::dir(dir.path()).with_default_apartment("ghost");
    let err = GuideSession::from_config(&config, "nope", Language::Es)
        .await
        .err()
        .unwrap();
    assert!(matches!(err, ClientError::Guide(GuideError::ApartmentNotFound(id)) if id == "ghost"));
}

#[tokio::test]
async fn test_missing_translation_file_is_an_error() {
    let dir = site();
    let err = open_session(&dir, "sol-101", Language::De).await.err().unwrap();
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn test_recommendations_in_zone() {
    let dir = site();
    let session = open_session(&dir, "sol-101", Language::Es).await.unwrap();

    assert_eq!(session.zone().await.unwrap().id, "centro");

    let page = session.recommendations(&CategoryFilter::All).await;
    assert!(matches!(page.spotlight, Some(SpotlightView::Partner { ref partner }) if partner.name == "Gran Café"));
    let local = page.local.unwrap();
    assert_eq!(local.title, "Ofertas locales en Centro");
    let names: Vec<_> = local.partners.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Taberna Centro"]);
    assert!(page.no_zone.is_none());

    let drinks = session.recommendations(&CategoryFilter::parse("drink")).await;
    assert!(drinks.is_empty());
}

#[tokio::test]
async fn test_missing_zone_catalog_degrades_to_no_zone() {
    let dir = site();
    std::fs::remove_file(dir.path().join("data/zones.json")).unwrap();
    let session = open_session(&dir, "sol-101", Language::Es).await.unwrap();

    assert!(session.zone().await.is_none());
    let page = session.recommendations(&CategoryFilter::All).await;
    assert!(page.no_zone.is_some());
    assert!(page.local.is_none());
    assert!(page.spotlight.is_some());
}

#[tokio::test]
async fn test_broken_partner_catalog_degrades_to_empty() {
    let dir = site();
    std::fs::write(dir.path().join("data/partners.json"), "[{").unwrap();
    let session = open_session(&dir, "sol-101", Language::Es).await.unwrap();

    let page = session.recommendations(&CategoryFilter::All).await;
    assert!(page.spotlight.is_none());
    assert!(page.local.is_none());
    assert!(page.is_empty());
}

#[tokio::test]
async fn test_malformed_records_do_not_empty_catalogs() {
    let dir = site();
    write(
        dir.path(),
        "partners.json",
        json!([
            { "name": "Gran Café", "categoryKey": "eat", "global": true },
            { "name": "Taberna Centro", "categoryKey": "eat", "zones": ["centro"], "active": null },
            { "name": "Sin Zonas", "categoryKey": "eat", "zones": null },
            { "categoryKey": "eat" }
        ]),
    );
    write(
        dir.path(),
        "zones.json",
        json!([
            { "id": "roto", "polygon": { "type": "Polygon" } },
            { "id": "centro", "name": "Centro", "polygon": [[-3.71, 40.41], [-3.70, 40.41], [-3.70, 40.42], [-3.71, 40.42]] }
        ]),
    );
    let session = open_session(&dir, "sol-101", Language::Es).await.unwrap();

    assert_eq!(session.zone().await.unwrap().id, "centro");
    let page = session.recommendations(&CategoryFilter::All).await;
    assert!(page.spotlight.is_some());
    let local = page.local.unwrap();
    let names: Vec<_> = local.partners.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Taberna Centro"]);
}

#[tokio::test]
async fn test_pages_and_navigation() {
    let dir = site();
    let session = open_session(&dir, "sol-101", Language::En).await.unwrap();

    let devices = session.devices();
    let keys: Vec<_> = devices.items.iter().map(|d| d.key.as_str()).collect();
    assert_eq!(keys, ["tv", "hob"]);

    let nav = session.navigation("/guide");
    assert_eq!(nav[0].label, "Home");
    assert!(nav[0].href.starts_with("/guide/"));
    assert!(nav[0].href.ends_with("?apartment=sol-101&lang=en"));

    let languages = session.language_options("");
    assert_eq!(languages.len(), 4);
    assert_eq!(languages.iter().filter(|l| l.selected).count(), 1);

    assert_eq!(session.essentials().apartment_name, "Sol 101");

    let home = session.home("/guide");
    assert_eq!(home.property.name, "Sol 101");
    assert_eq!(home.tiles.len(), 5);
    assert!(home.tiles.iter().all(|t| t.href.ends_with("?apartment=sol-101&lang=en")));
}

// =============================================================================
// Catalog doubles
// =============================================================================

/// Local catalog that counts zone fetches and delays partner fetches
struct InstrumentedCatalog {
    inner: DirCatalog,
    zone_fetches: AtomicUsize,
    partner_delay: Duration,
}

#[async_trait]
impl CatalogSource for InstrumentedCatalog {
    async fn fetch(&self, path: &str, fresh: bool) -> ClientResult<String> {
        if path == guide_client::catalog::ZONES_PATH {
            self.zone_fetches.fetch_add(1, Ordering::SeqCst);
        }
        if path == guide_client::catalog::PARTNERS_PATH {
            tokio::time::sleep(self.partner_delay).await;
        }
        self.inner.fetch(path, fresh).await
    }
}

fn instrumented(dir: &TempDir, partner_delay: Duration) -> Arc<InstrumentedCatalog> {
    Arc::new(InstrumentedCatalog {
        inner: DirCatalog::new(dir.path()),
        zone_fetches: AtomicUsize::new(0),
        partner_delay,
    })
}

#[tokio::test]
async fn test_zone_catalog_fetched_once() {
    let dir = site();
    let catalog = instrumented(&dir, Duration::ZERO);
    let session = GuideSession::initialize(catalog.clone(), "sol-101", Language::Es, "sol-101")
        .await
        .unwrap();

    session.zone().await;
    session.recommendations(&CategoryFilter::All).await;
    session.zone().await;
    assert_eq!(catalog.zone_fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_superseded_filter_switch_is_dropped() {
    let dir = site();
    let catalog = instrumented(&dir, Duration::from_millis(200));
    let session = GuideSession::initialize(catalog, "sol-101", Language::Es, "sol-101")
        .await
        .unwrap();

    let drink = CategoryFilter::parse("drink");
    let eat = CategoryFilter::parse("eat");
    let (first, second) = tokio::join!(session.switch_filter(&drink), async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        session.switch_filter(&eat).await
    });

    assert!(first.is_none());
    let page = second.unwrap();
    assert_eq!(page.filter.as_str(), "eat");
    assert!(page.spotlight.is_some());
}
