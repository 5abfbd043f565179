//! Translation tables.

use serde_json::Value;
use tracing::warn;

use crate::error::I18nError;
use crate::locale::Locale;

const ZH_SOURCE: &str = include_str!("../locales/zh.json");
const EN_SOURCE: &str = include_str!("../locales/en.json");

/// The key→string table for one locale.
#[derive(Debug, Clone)]
pub struct Messages {
    locale: Locale,
    tree: Value,
}

impl Messages {
    /// Parse a translation document.  The root must be a JSON object.
    pub fn parse(locale: Locale, source: &str) -> Result<Self, I18nError> {
        let tree: Value =
            serde_json::from_str(source).map_err(|source| I18nError::Parse { locale, source })?;
        if !tree.is_object() {
            return Err(I18nError::NotAnObject(locale));
        }
        Ok(Self { locale, tree })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// The whole document, for handing to templates.
    pub fn tree(&self) -> &Value {
        &self.tree
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        key.split('.')
            .try_fold(&self.tree, |node, segment| node.get(segment))
    }

    /// Look up a string leaf by dotted key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.lookup(key).and_then(Value::as_str)
    }

    /// Translate `key`, returning the key itself when no string is found.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        match self.get(key) {
            Some(text) => text,
            None => {
                warn!(locale = %self.locale, key, "missing translation");
                key
            }
        }
    }

    /// Read a list of strings (e.g. `about.values.items`).  Non-string entries
    /// are skipped; a missing key yields an empty list.
    pub fn list(&self, key: &str) -> Vec<&str> {
        match self.lookup(key) {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => {
                warn!(locale = %self.locale, key, "missing translation list");
                Vec::new()
            }
        }
    }

    /// Dotted keys of every leaf in the table, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_keys(&self.tree, String::new(), &mut out);
        out.sort();
        out
    }
}

fn collect_keys(node: &Value, prefix: String, out: &mut Vec<String>) {
    match node {
        Value::Object(map) => {
            for (name, child) in map {
                let key = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}.{name}")
                };
                collect_keys(child, key, out);
            }
        }
        _ => out.push(prefix),
    }
}

/// Both locales' tables, parsed once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    zh: Messages,
    en: Messages,
}

impl Catalog {
    /// Load the tables compiled into the crate.
    pub fn embedded() -> Result<Self, I18nError> {
        Self::from_sources(ZH_SOURCE, EN_SOURCE)
    }

    /// Build a catalog from explicit documents.
    ///
    /// Keys present in one locale but not the other are reported at `warn`
    /// level; lookups of such keys fall back to the key text.
    pub fn from_sources(zh: &str, en: &str) -> Result<Self, I18nError> {
        let catalog = Self {
            zh: Messages::parse(Locale::Zh, zh)?,
            en: Messages::parse(Locale::En, en)?,
        };
        for key in catalog.mismatched_keys() {
            warn!(key = %key, "translation key missing in one locale");
        }
        Ok(catalog)
    }

    pub fn messages(&self, locale: Locale) -> &Messages {
        match locale {
            Locale::Zh => &self.zh,
            Locale::En => &self.en,
        }
    }

    /// Keys defined in exactly one of the two locales.
    pub fn mismatched_keys(&self) -> Vec<String> {
        let zh = self.zh.keys();
        let en = self.en.keys();
        let mut out: Vec<String> = zh
            .iter()
            .filter(|k| en.binary_search(k).is_err())
            .chain(en.iter().filter(|k| zh.binary_search(k).is_err()))
            .cloned()
            .collect();
        out.sort();
        out
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
