//! Locale handling and translation lookup for the Shangshu site.
//!
//! Translation tables are JSON documents compiled into the binary, one per
//! [`Locale`].  Nested objects are addressed with dotted keys such as
//! `contact.form.name`.

pub mod error;
pub mod locale;
pub mod messages;

pub use error::I18nError;
pub use locale::{Locale, localized_path, negotiate, resolve_locale, split_locale_path, switch_path};
pub use messages::{Catalog, Messages};
