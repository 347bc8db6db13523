//! Translation resolver

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::Value;

use super::{Glossary, Language, TextKey};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([^{}\s]+)\s*\}\}").expect("placeholder pattern is valid")
});

/// Rendering of a key that could not be resolved: `[key]`
pub fn missing_marker(key: &str) -> String {
    format!("[{key}]")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Rewrite base-language terms through the glossary
    pub use_glossary: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self { use_glossary: true }
    }
}

impl ResolveOptions {
    pub fn without_glossary() -> Self {
        Self {
            use_glossary: false,
        }
    }
}

/// Resolves keys against one language's translation tree
#[derive(Debug, Clone, Default)]
pub struct Translator {
    language: Language,
    tree: Option<Value>,
    /// Only present for non-base languages whose tree has a glossary
    glossary: Option<Glossary>,
}

impl Translator {
    pub fn new(language: Language, tree: Value) -> Self {
        let glossary = if language.is_base() {
            None
        } else {
            tree.get("glossary").and_then(Glossary::from_value)
        };
        Self {
            language,
            tree: Some(tree),
            glossary,
        }
    }

    /// Translator without a tree; every key resolves to its marker
    pub fn unloaded(language: Language) -> Self {
        Self {
            language,
            tree: None,
            glossary: None,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn is_loaded(&self) -> bool {
        self.tree.is_some()
    }

    pub fn has_glossary(&self) -> bool {
        self.glossary.is_some()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Resolve a dotted key with the glossary enabled and no placeholders
    pub fn resolve(&self, key: &str) -> String {
        self.resolve_with(key, &[], ResolveOptions::default())
    }

    /// Resolve a dotted key, substituting `{{name}}` placeholders.
    ///
    /// Missing keys render as `[key]`. Unknown placeholders are left as written.
    pub fn resolve_with(
        &self,
        key: &str,
        placeholders: &[(&str, &str)],
        options: ResolveOptions,
    ) -> String {
        match self.lookup(key) {
            Some(raw) => self.finish(&raw, placeholders, options),
            None => {
                tracing::debug!(key = %key, lang = %self.language, "Translation key not found");
                missing_marker(key)
            }
        }
    }

    /// Resolve a key, using `fallback` instead of the missing marker
    pub fn resolve_or(&self, key: &str, fallback: &str) -> String {
        match self.lookup(key) {
            Some(raw) => self.finish(&raw, &[], ResolveOptions::default()),
            None => fallback.to_string(),
        }
    }

    /// Resolve a key written in one of the legacy underscore formats.
    ///
    /// Tries, in order: the key as given, every `_` as `.`, `rules_x` as
    /// `rules.x`, and (for keys without a dot) only the first `_` as `.`.
    pub fn resolve_lenient(
        &self,
        key: &str,
        placeholders: &[(&str, &str)],
        options: ResolveOptions,
    ) -> String {
        if key.is_empty() {
            return String::new();
        }
        lenient_candidates(key)
            .iter()
            .find_map(|candidate| self.lookup(candidate))
            .map(|raw| self.finish(&raw, placeholders, options))
            .unwrap_or_else(|| missing_marker(key))
    }

    pub fn text(&self, key: TextKey) -> String {
        self.resolve(key.path())
    }

    pub fn text_with(&self, key: TextKey, placeholders: &[(&str, &str)]) -> String {
        self.resolve_with(key.path(), placeholders, ResolveOptions::default())
    }

    pub fn text_or(&self, key: TextKey, fallback: &str) -> String {
        self.resolve_or(key.path(), fallback)
    }

    /// Apply the glossary to free text (host-written instructions)
    pub fn translate_text(&self, text: &str) -> String {
        match &self.glossary {
            Some(glossary) => glossary.apply(text),
            None => text.to_string(),
        }
    }

    /// Keys from `keys` that this tree cannot resolve, in input order
    pub fn missing_keys<'a, I>(&self, keys: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut missing: Vec<String> = Vec::new();
        for key in keys {
            if !self.contains(key) && !missing.iter().any(|m| m == key) {
                missing.push(key.to_string());
            }
        }
        missing
    }

    fn lookup(&self, key: &str) -> Option<String> {
        let mut node = self.tree.as_ref()?;
        for segment in key.split('.') {
            node = match node {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        match node {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    fn finish(&self, raw: &str, placeholders: &[(&str, &str)], options: ResolveOptions) -> String {
        let substituted = if placeholders.is_empty() {
            raw.to_string()
        } else {
            substitute(raw, placeholders)
        };
        if options.use_glossary {
            self.translate_text(&substituted)
        } else {
            substituted
        }
    }
}

fn substitute(raw: &str, placeholders: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(raw, |caps: &Captures| {
            let name = &caps[1];
            placeholders
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn lenient_candidates(key: &str) -> Vec<String> {
    let mut candidates = vec![key.to_string()];
    if key.contains('_') {
        candidates.push(key.replace('_', "."));
    }
    if let Some(rest) = key.strip_prefix("rules_") {
        candidates.push(format!("rules.{rest}"));
    }
    if key.contains('_') && !key.contains('.') {
        candidates.push(key.replacen('_', ".", 1));
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spanish() -> Translator {
        Translator::new(
            Language::Es,
            json!({
                "greet": { "hello": "Hola {{name}}", "spaced": "Hola {{ name }} y {{other}}" },
                "nav": { "home": "Inicio" },
                "rules": { "quiet_hours": "Horas de silencio" },
                "list": ["cero", "uno"],
                "glossary": { "puerta": "door" }
            }),
        )
    }

    fn english() -> Translator {
        Translator::new(
            Language::En,
            json!({
                "access": { "step": "Abre la Puerta con la llave" },
                "glossary": { "puerta": "door", "llave": "key" }
            }),
        )
    }

    #[test]
    fn test_missing_key_marker() {
        let t = spanish();
        assert_eq!(t.resolve("nav.missing"), "[nav.missing]");
        assert_eq!(t.resolve("nav.home.deeper"), "[nav.home.deeper]");
        assert_eq!(t.resolve("nav"), "[nav]");
    }

    #[test]
    fn test_placeholders() {
        let t = spanish();
        assert_eq!(
            t.resolve_with("greet.hello", &[("name", "Ana")], ResolveOptions::default()),
            "Hola Ana"
        );
        assert_eq!(
            t.resolve_with("greet.spaced", &[("name", "Ana")], ResolveOptions::default()),
            "Hola Ana y {{other}}"
        );
        assert_eq!(t.resolve("greet.hello"), "Hola {{name}}");
    }

    #[test]
    fn test_glossary_only_outside_base_language() {
        let es = spanish();
        assert!(!es.has_glossary());
        assert_eq!(es.translate_text("la puerta"), "la puerta");

        let en = english();
        assert!(en.has_glossary());
        assert_eq!(en.resolve("access.step"), "Abre la Door con la key");
        assert_eq!(
            en.resolve_with("access.step", &[], ResolveOptions::without_glossary()),
            "Abre la Puerta con la llave"
        );
    }

    #[test]
    fn test_unloaded_tree() {
        let t = Translator::unloaded(Language::En);
        assert!(!t.is_loaded());
        assert_eq!(t.resolve("nav.home"), "[nav.home]");
        assert_eq!(t.resolve_or("nav.home", "Home"), "Home");
    }

    #[test]
    fn test_resolve_or() {
        let t = spanish();
        assert_eq!(t.resolve_or("nav.home", "Home"), "Inicio");
        assert_eq!(t.resolve_or("nav.gone", "Home"), "Home");
    }

    #[test]
    fn test_lenient_formats() {
        let t = spanish();
        assert_eq!(
            t.resolve_lenient("rules_quiet_hours", &[], ResolveOptions::default()),
            "Horas de silencio"
        );
        assert_eq!(t.resolve_lenient("nav_home", &[], ResolveOptions::default()), "Inicio");
        assert_eq!(
            t.resolve_lenient("nav_away", &[], ResolveOptions::default()),
            "[nav_away]"
        );
        assert_eq!(t.resolve_lenient("", &[], ResolveOptions::default()), "");
    }

    #[test]
    fn test_array_segments() {
        let t = spanish();
        assert_eq!(t.resolve("list.1"), "uno");
        assert_eq!(t.resolve("list.x"), "[list.x]");
    }

    #[test]
    fn test_missing_keys() {
        let t = spanish();
        let missing = t.missing_keys(["nav.home", "nav.gone", "greet", "nav.gone"]);
        assert_eq!(missing, ["nav.gone", "greet"]);
    }

    #[test]
    fn test_text_key() {
        let t = Translator::new(Language::Es, json!({ "navigation": { "nav_home": "Inicio" } }));
        assert_eq!(t.text(TextKey::NavHome), "Inicio");
        assert_eq!(t.text(TextKey::NavContact), "[navigation.contact_title]");
    }
}
