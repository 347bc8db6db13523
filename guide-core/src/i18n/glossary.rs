//! Term glossary
//!
//! Rewrites base-language terms inside already translated (or host-written)
//! text. Matching is whole-word and case-insensitive; longer terms are applied
//! first so phrases win over the single words they contain.

use regex::{Captures, Regex};
use serde_json::Value;

#[derive(Debug, Clone)]
struct Entry {
    pattern: Regex,
    replacement: String,
}

#[derive(Debug, Clone, Default)]
pub struct Glossary {
    entries: Vec<Entry>,
}

impl Glossary {
    /// Build from `(term, replacement)` pairs. Empty replacements are ignored.
    pub fn new<I, K, V>(terms: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut terms: Vec<(String, String)> = terms
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.into()))
            .filter(|(k, v)| !k.trim().is_empty() && !v.is_empty())
            .collect();
        // Stable sort keeps document order among equal lengths
        terms.sort_by(|(a, _), (b, _)| b.chars().count().cmp(&a.chars().count()));

        let entries = terms
            .into_iter()
            .filter_map(|(term, replacement)| {
                let source = format!(r"(?i)\b{}\b", regex::escape(&term));
                match Regex::new(&source) {
                    Ok(pattern) => Some(Entry {
                        pattern,
                        replacement,
                    }),
                    Err(e) => {
                        tracing::warn!(term = %term, error = %e, "Skipping glossary term");
                        None
                    }
                }
            })
            .collect();

        Self { entries }
    }

    /// Build from the `glossary` object of a translation tree
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        let glossary = Self::new(
            map.iter()
                .filter_map(|(k, v)| v.as_str().map(|v| (k.as_str(), v.to_string()))),
        );
        (!glossary.is_empty()).then_some(glossary)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for entry in &self.entries {
            out = entry
                .pattern
                .replace_all(&out, |caps: &Captures| match_case(&caps[0], &entry.replacement))
                .into_owned();
        }
        out
    }
}

/// Carry the capitalization of `matched` over to `replacement`.
///
/// All-caps matches (two or more letters) give an all-caps replacement; a
/// leading capital gives a capitalized replacement; otherwise the replacement
/// is used as written.
fn match_case(matched: &str, replacement: &str) -> String {
    let letters: Vec<char> = matched.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.len() > 1 && letters.iter().all(|c| c.is_uppercase()) {
        return replacement.to_uppercase();
    }
    if matched.chars().next().is_some_and(char::is_uppercase) {
        return capitalize(replacement);
    }
    replacement.to_string()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
