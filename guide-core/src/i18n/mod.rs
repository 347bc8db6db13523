//! Translation
//!
//! One JSON tree per language (`data/<code>.json`). Keys are dotted paths into
//! the tree; a missing key renders as `[key]` so gaps stay visible on the page
//! and can be found by tooling.
//!
//! Trees other than the Spanish base may carry a flat `glossary` of
//! Spanish -> target terms, applied to resolved strings and to free text the
//! host wrote in Spanish (access instructions).

mod glossary;
mod keys;
mod language;
mod translator;

pub use glossary::Glossary;
pub use keys::TextKey;
pub use language::Language;
pub use translator::{ResolveOptions, Translator, missing_marker};
