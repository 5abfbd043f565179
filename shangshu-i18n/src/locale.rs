//! Supported locales and locale-prefixed URL paths.
//!
//! Every page lives under a locale prefix (`/zh/...`, `/en/...`).  The helpers
//! here split that prefix off a request path, build the matching path for the
//! other locale (the header's language switch), and pick a locale for requests
//! that arrive without one.

use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// A language the site is published in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Zh,
    En,
}

impl Locale {
    /// The BCP-47 tag used in URLs and `<html lang>`.
    pub fn tag(self) -> &'static str {
        self.into()
    }

    /// The locale the language switch points to.
    pub fn other(self) -> Self {
        match self {
            Locale::Zh => Locale::En,
            Locale::En => Locale::Zh,
        }
    }

    /// Open Graph `og:locale` value.
    pub fn og_tag(self) -> &'static str {
        match self {
            Locale::Zh => "zh_CN",
            Locale::En => "en_US",
        }
    }

    /// Label of the switch link shown on a page in this locale.
    pub fn switch_label(self) -> &'static str {
        match self {
            Locale::Zh => "EN",
            Locale::En => "中文",
        }
    }
}

/// Resolve a requested locale tag, falling back to [`Locale::default`] when it
/// is absent or unsupported.
pub fn resolve_locale(requested: Option<&str>) -> Locale {
    requested
        .and_then(|tag| tag.parse().ok())
        .unwrap_or_default()
}

/// Pick the best supported locale from an `Accept-Language` header value.
///
/// Entries are weighted by their `q` parameter (default 1.0, malformed
/// values count as 0); the first entry wins a tie.  Region subtags are ignored (`en-GB` selects [`Locale::En`]).
pub fn negotiate(accept_language: Option<&str>) -> Locale {
    let Some(header) = accept_language else {
        return Locale::default();
    };

    let mut best: Option<(Locale, f32)> = None;
    for entry in header.split(',') {
        let mut parts = entry.split(';');
        let tag = parts.next().unwrap_or("").trim();
        let primary = tag.split('-').next().unwrap_or("").to_ascii_lowercase();
        let Ok(locale) = primary.parse::<Locale>() else {
            continue;
        };

        // A `q` that does not parse as a finite number weighs nothing.
        let quality = match parts.find_map(|p| p.trim().strip_prefix("q=")) {
            Some(q) => q.trim().parse::<f32>().ok().filter(|q| q.is_finite()).unwrap_or(0.0),
            None => 1.0,
        };
        if quality <= 0.0 {
            continue;
        }

        match best {
            Some((_, q)) if q >= quality => {}
            _ => best = Some((locale, quality)),
        }
    }

    best.map(|(locale, _)| locale).unwrap_or_default()
}

/// Split a request path into its locale prefix and the remainder.
///
/// The remainder keeps its leading `/` (or is empty when the path is just the
/// prefix).  Paths without a supported prefix return `None` and the full path.
///
/// ```
/// use shangshu_i18n::{split_locale_path, Locale};
/// assert_eq!(split_locale_path("/en/about/"), (Some(Locale::En), "/about/"));
/// assert_eq!(split_locale_path("/fr/about/"), (None, "/fr/about/"));
/// ```
pub fn split_locale_path(path: &str) -> (Option<Locale>, &str) {
    let Some(trimmed) = path.strip_prefix('/') else {
        return (None, path);
    };
    let (segment, rest) = match trimmed.find('/') {
        Some(idx) => trimmed.split_at(idx),
        None => (trimmed, ""),
    };
    match segment.parse::<Locale>() {
        Ok(locale) => (Some(locale), rest),
        Err(_) => (None, path),
    }
}

/// Build the same page's path in the other locale.
///
/// A path without a locale prefix is treated as belonging to the default
/// locale.
pub fn switch_path(path: &str) -> String {
    let (locale, rest) = split_locale_path(path);
    let rest = if rest.is_empty() { "/" } else { rest };
    format!("/{}{}", locale.unwrap_or_default().other(), rest)
}

/// Prefix `page` (e.g. `"/about/"`, or `"/"` for home) with `locale`.
pub fn localized_path(locale: Locale, page: &str) -> String {
    format!("/{}{}", locale, page)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
