//! Page metadata and schema.org structured data.

use serde::Serialize;
use serde_json::{Value, json};
use shangshu_i18n::{Locale, Messages, localized_path};

use super::Page;

const ALTERNATE_NAME: &str = "kingcpm";
const TELEPHONE: &str = "+86-10-12345678";
const CONTACT_EMAIL: &str = "contact@kingcpm.com";
const OG_IMAGE: &str = "/og-image.jpg";

#[derive(Debug, Clone, Serialize)]
pub struct Alternate {
    pub hreflang: &'static str,
    pub href: String,
}

/// Everything the layout puts in `<head>`.
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub canonical: String,
    pub alternates: Vec<Alternate>,
    pub site_name: String,
    pub og_locale: &'static str,
    pub og_alternate_locale: &'static str,
    pub og_image: String,
    pub og_image_alt: String,
}

pub fn page_meta(base_url: &str, locale: Locale, page: Option<Page>, messages: &Messages) -> PageMeta {
    let site_name = messages.t("site.name");
    let title = match page {
        Some(Page::Home) => messages.t("metadata.title").to_owned(),
        Some(page) => format!("{} | {site_name}", messages.t(&format!("nav.{}", page.key()))),
        None => format!("{} | {site_name}", messages.t("notFound.title")),
    };
    let path = page.map(Page::path).unwrap_or("/");

    PageMeta {
        title,
        description: messages.t("metadata.description").to_owned(),
        keywords: messages.list("site.keywords").join(", "),
        canonical: format!("{base_url}{}", localized_path(locale, path)),
        alternates: vec![
            Alternate {
                hreflang: Locale::Zh.tag(),
                href: format!("{base_url}{}", localized_path(Locale::Zh, path)),
            },
            Alternate {
                hreflang: Locale::En.tag(),
                href: format!("{base_url}{}", localized_path(Locale::En, path)),
            },
            Alternate {
                hreflang: "x-default",
                href: format!("{base_url}{}", localized_path(Locale::default(), path)),
            },
        ],
        site_name: site_name.to_owned(),
        og_locale: locale.og_tag(),
        og_alternate_locale: locale.other().og_tag(),
        og_image: format!("{base_url}{OG_IMAGE}"),
        og_image_alt: messages.t("site.ogImageAlt").to_owned(),
    }
}

/// `Organization`, `WebSite` and `BreadcrumbList` documents for a page.
pub fn structured_data(base_url: &str, locale: Locale, page: Option<Page>, messages: &Messages) -> Vec<Value> {
    let site_name = messages.t("site.name");

    let organization = json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": site_name,
        "alternateName": ALTERNATE_NAME,
        "url": base_url,
        "logo": format!("{base_url}/logo.png"),
        "description": messages.t("site.description"),
        "contactPoint": {
            "@type": "ContactPoint",
            "telephone": TELEPHONE,
            "contactType": "customer service",
            "email": CONTACT_EMAIL,
            "areaServed": "CN",
            "availableLanguage": ["Chinese", "English"],
        },
        "address": {
            "@type": "PostalAddress",
            "addressLocality": messages.t("site.address.locality"),
            "addressRegion": messages.t("site.address.region"),
            "addressCountry": "CN",
        },
        "sameAs": [],
    });

    let website = json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": site_name,
        "url": base_url,
        "potentialAction": {
            "@type": "SearchAction",
            "target": {
                "@type": "EntryPoint",
                "urlTemplate": format!("{base_url}/search?q={{search_term_string}}"),
            },
            "query-input": "required name=search_term_string",
        },
        "inLanguage": [locale.tag()],
    });

    let mut crumbs = vec![json!({
        "@type": "ListItem",
        "position": 1,
        "name": messages.t("site.breadcrumbHome"),
        "item": format!("{base_url}{}", localized_path(locale, "/")),
    })];
    if let Some(page) = page.filter(|p| *p != Page::Home) {
        crumbs.push(json!({
            "@type": "ListItem",
            "position": 2,
            "name": messages.t(&format!("nav.{}", page.key())),
            "item": format!("{base_url}{}", localized_path(locale, page.path())),
        }));
    }
    let breadcrumb = json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": crumbs,
    });

    vec![organization, website, breadcrumb]
}

/// Serialize a document for embedding inside `<script type="application/ld+json">`.
/// `<`, `>` and `&` are escaped so translated text can never close the tag.
pub fn json_ld(doc: &Value) -> String {
    doc.to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}
