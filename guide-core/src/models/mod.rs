//! Data models
//!
//! Mirrors the JSON catalogs the guide is published with: `apartments.json`,
//! `zones.json`, `partners.json`, plus the door-lock API payloads.
//! Field names follow the documents (camelCase) via serde renames.

pub mod apartment;
pub mod door;
pub mod partner;
pub mod serde_helpers;
pub mod zone;

// Re-exports
pub use apartment::*;
pub use door::*;
pub use partner::*;
pub use zone::*;
