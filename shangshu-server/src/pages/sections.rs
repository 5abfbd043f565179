//! Static display metadata for page sections.
//!
//! Each section kind is a closed enum; its variants map to a translation key
//! and an icon.  Templates receive the resolved [`Card`]s and never look up
//! icons themselves.

use serde::Serialize;
use shangshu_i18n::Messages;
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

/// Icons used across the site.  Rendered as `icon-<kebab-name>` classes with
/// a text glyph fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Lightbulb,
    Users,
    Shield,
    HeartHandshake,
    Code,
    MessageSquare,
    TrendingUp,
    Wrench,
    MapPin,
    Mail,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Lightbulb => "💡",
            Icon::Users => "👥",
            Icon::Shield => "🛡",
            Icon::HeartHandshake => "🤝",
            Icon::Code => "⌨",
            Icon::MessageSquare => "💬",
            Icon::TrendingUp => "📈",
            Icon::Wrench => "🔧",
            Icon::MapPin => "📍",
            Icon::Mail => "✉",
        }
    }
}

/// A family of cards sharing a translation prefix, e.g. `features.<key>.title`.
pub trait Section: Copy + IntoEnumIterator + Into<&'static str> {
    const PREFIX: &'static str;

    fn icon(self) -> Icon;

    fn key(self) -> &'static str {
        self.into()
    }
}

/// Home page feature cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Feature {
    Innovation,
    Professional,
    Quality,
    Service,
}

impl Section for Feature {
    const PREFIX: &'static str = "features";

    fn icon(self) -> Icon {
        match self {
            Feature::Innovation => Icon::Lightbulb,
            Feature::Professional => Icon::Users,
            Feature::Quality => Icon::Shield,
            Feature::Service => Icon::HeartHandshake,
        }
    }
}

/// Services page offerings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Offering {
    Software,
    Consulting,
    Digital,
    Maintenance,
}

impl Section for Offering {
    const PREFIX: &'static str = "services";

    fn icon(self) -> Icon {
        match self {
            Offering::Software => Icon::Code,
            Offering::Consulting => Icon::MessageSquare,
            Offering::Digital => Icon::TrendingUp,
            Offering::Maintenance => Icon::Wrench,
        }
    }
}

/// Contact channels shown beside the form and in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ContactInfo {
    Address,
    Email,
}

impl ContactInfo {
    pub fn icon(self) -> Icon {
        match self {
            ContactInfo::Address => Icon::MapPin,
            ContactInfo::Email => Icon::Mail,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Card {
    pub key: &'static str,
    pub icon: Icon,
    pub glyph: &'static str,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InfoItem {
    pub key: &'static str,
    pub icon: Icon,
    pub glyph: &'static str,
    pub label: String,
    pub value: String,
}

/// Resolve every card of section `S` against `messages`.
pub fn cards<S: Section>(messages: &Messages) -> Vec<Card> {
    S::iter()
        .map(|section| {
            let key = section.key();
            let icon = section.icon();
            Card {
                key,
                icon,
                glyph: icon.glyph(),
                title: messages.t(&format!("{}.{key}.title", S::PREFIX)).to_owned(),
                description: messages
                    .t(&format!("{}.{key}.description", S::PREFIX))
                    .to_owned(),
            }
        })
        .collect()
}

pub fn contact_info(messages: &Messages) -> Vec<InfoItem> {
    ContactInfo::iter()
        .map(|item| {
            let key: &'static str = item.into();
            let icon = item.icon();
            InfoItem {
                key,
                icon,
                glyph: icon.glyph(),
                label: messages.t(&format!("contact.info.{key}")).to_owned(),
                value: messages.t(&format!("contact.info.{key}Value")).to_owned(),
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use shangshu_i18n::{Catalog, Locale};

    #[test]
    fn feature_cards_follow_declaration_order() {
        let catalog = Catalog::embedded().unwrap();
        let cards = cards::<Feature>(catalog.messages(Locale::En));
        let keys: Vec<_> = cards.iter().map(|c| c.key).collect();
        assert_eq!(keys, vec!["innovation", "professional", "quality", "service"]);
        assert_eq!(cards[0].icon, Icon::Lightbulb);
        assert_eq!(cards[0].title, "Innovation");
    }

    #[test]
    fn offering_cards_resolve_translations() {
        let catalog = Catalog::embedded().unwrap();
        let cards = cards::<Offering>(catalog.messages(Locale::Zh));
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].title, "软件开发");
        assert_eq!(cards[3].icon, Icon::Wrench);
        assert!(cards.iter().all(|c| !c.description.contains("services.")));
    }

    #[test]
    fn contact_info_pairs_label_and_value() {
        let catalog = Catalog::embedded().unwrap();
        let items = contact_info(catalog.messages(Locale::En));
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].key, "email");
        assert_eq!(items[1].label, "Email");
        assert_eq!(items[1].value, "contact@kingcpm.com");
        assert_eq!(items[0].icon, Icon::MapPin);
    }

    #[test]
    fn icons_render_as_kebab_case() {
        assert_eq!(Icon::HeartHandshake.to_string(), "heart-handshake");
        assert_eq!(Icon::MapPin.to_string(), "map-pin");
    }
}
