//! # guide-core
//!
//! Domain logic for the apartment guest guide. Pure and synchronous: every
//! input is an already-loaded catalog, so this crate never touches the network.
//!
//! ## Scope
//!
//! - Zone resolution: apartment coordinates -> named zone polygon, with a
//!   nearest-centroid fallback ([`ZoneLocator`])
//! - Partner filtering: premium/global and zone-scoped basic tiers layered over
//!   the host's static recommendations ([`compose_recommendations`])
//! - Translation: dotted-key lookup, `{{placeholder}}` substitution and
//!   glossary rewriting ([`Translator`])
//! - Page view models built from the three above ([`pages`])
//!
//! Fetching catalogs, caching them per session and talking to the door-lock
//! API lives in `guide-client`.
//!
//! ## Example
//!
//! ```ignore
//! use guide_core::{CategoryFilter, Translator, ZoneLocator, compose_recommendations};
//!
//! let locator = ZoneLocator::new(zones);
//! let zone = locator.locate(&apartment);
//! let tiers = compose_recommendations(&partners, zone, &CategoryFilter::All);
//! ```

pub mod error;
pub mod i18n;
pub mod models;
pub mod pages;
pub mod recommend;
pub mod zone_locator;

// Re-exports
pub use error::{GuideError, GuideResult};
pub use i18n::{Glossary, Language, ResolveOptions, TextKey, Translator};
pub use models::{Apartment, ApartmentCatalog, GeoPoint, Partner, Zone};
pub use recommend::{
    CategoryFilter, PartnerTiers, RecommendationLayout, Spotlight, arrange,
    compose_recommendations,
};
pub use zone_locator::{RING_CLOSE_TOLERANCE, ZoneLocator, resolve_zone};

/// Apartment used when the requested id is unknown.
pub const DEFAULT_APARTMENT_ID: &str = "sol-101";
