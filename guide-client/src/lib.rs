//! Guide Client - catalog loading, session state and door control
//!
//! Wraps `guide-core` with the I/O it deliberately avoids: fetching catalogs
//! over HTTP or from a local site copy, caching them per session, and talking
//! to the door-lock API.

pub mod catalog;
pub mod config;
pub mod doors;
pub mod error;
pub mod http;
pub mod intent;
pub mod session;

pub use catalog::{CatalogSource, DirCatalog, HttpCatalog};
pub use config::{ClientConfig, DataSource, DoorApiConfig};
pub use doors::{
    DoorButton, DoorLockApi, DoorOutcome, DoorPanel, LedState, Notification, NotificationLevel,
    RaixerClient,
};
pub use error::{ClientError, ClientResult};
pub use intent::IntentTracker;
pub use session::GuideSession;
