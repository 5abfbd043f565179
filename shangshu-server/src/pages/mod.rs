//! Server-side page rendering.
//!
//! Templates are compiled into the binary and loaded into a single
//! [`minijinja::Environment`] at startup.  Each render receives the
//! translation tree of the requested locale as `m`, plus the section cards,
//! navigation and metadata resolved here.

pub mod sections;
pub mod seo;

use minijinja::Environment;
use serde::Serialize;
use serde_json::Value;
use shangshu_i18n::{Catalog, I18nError, Locale, localized_path, switch_path};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};
use tracing::debug;

use self::sections::{Card, Feature, InfoItem, Offering};
use self::seo::PageMeta;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    ("home.html", include_str!("../../templates/home.html")),
    ("about.html", include_str!("../../templates/about.html")),
    ("services.html", include_str!("../../templates/services.html")),
    ("contact.html", include_str!("../../templates/contact.html")),
    ("not_found.html", include_str!("../../templates/not_found.html")),
];

/// The four published pages, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    About,
    Services,
    Contact,
}

impl Page {
    /// Translation key under `nav.`.
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Path below the locale prefix.
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about/",
            Page::Services => "/services/",
            Page::Contact => "/contact/",
        }
    }

    fn template(self) -> &'static str {
        match self {
            Page::Home => "home.html",
            Page::About => "about.html",
            Page::Services => "services.html",
            Page::Contact => "contact.html",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct NavLink {
    key: &'static str,
    label: String,
    href: String,
    active: bool,
}

#[derive(Debug, Serialize)]
struct PageContext<'a> {
    locale: Locale,
    page: Option<Page>,
    m: &'a Value,
    home_href: String,
    contact_href: String,
    about_href: String,
    switch_href: String,
    switch_label: &'static str,
    nav: Vec<NavLink>,
    meta: PageMeta,
    structured_data: Vec<String>,
    features: Vec<Card>,
    offerings: Vec<Card>,
    contact_info: Vec<InfoItem>,
    values: Vec<&'a str>,
}

/// Template environment plus translation tables.
#[derive(Debug)]
pub struct Pages {
    env: Environment<'static>,
    catalog: Catalog,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum PagesError {
    #[error(transparent)]
    I18n(#[from] I18nError),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl Pages {
    /// Load the embedded templates and translation tables.
    pub fn new(base_url: impl Into<String>) -> Result<Self, PagesError> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self {
            env,
            catalog: Catalog::embedded()?,
            base_url: base_url.into(),
        })
    }

    /// Render `page` in `locale`.
    pub fn render(&self, locale: Locale, page: Page) -> Result<String, minijinja::Error> {
        debug!(%locale, page = page.key(), "rendering page");
        self.env
            .get_template(page.template())?
            .render(self.context(locale, Some(page)))
    }

    /// Render the not-found page in `locale`.
    pub fn render_not_found(&self, locale: Locale) -> Result<String, minijinja::Error> {
        self.env
            .get_template("not_found.html")?
            .render(self.context(locale, None))
    }

    fn context(&self, locale: Locale, page: Option<Page>) -> PageContext<'_> {
        let messages = self.catalog.messages(locale);
        let current = localized_path(locale, page.map(Page::path).unwrap_or("/"));

        let nav = Page::iter()
            .map(|p| NavLink {
                key: p.key(),
                label: messages.t(&format!("nav.{}", p.key())).to_owned(),
                href: localized_path(locale, p.path()),
                active: page == Some(p),
            })
            .collect();

        PageContext {
            locale,
            page,
            m: messages.tree(),
            home_href: localized_path(locale, Page::Home.path()),
            contact_href: localized_path(locale, Page::Contact.path()),
            about_href: localized_path(locale, Page::About.path()),
            switch_href: switch_path(&current),
            switch_label: locale.switch_label(),
            nav,
            meta: seo::page_meta(&self.base_url, locale, page, messages),
            structured_data: seo::structured_data(&self.base_url, locale, page, messages)
                .iter()
                .map(seo::json_ld)
                .collect(),
            features: sections::cards::<Feature>(messages),
            offerings: sections::cards::<Offering>(messages),
            contact_info: sections::contact_info(messages),
            values: messages.list("about.values.items"),
        }
    }
}
