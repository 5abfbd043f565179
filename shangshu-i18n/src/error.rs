use thiserror::Error;

use crate::locale::Locale;

/// Errors raised while loading translation tables.
#[derive(Debug, Error)]
pub enum I18nError {
    /// The embedded document is not valid JSON.
    #[error("invalid translation table for '{locale}': {source}")]
    Parse {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed, but its root is not an object.
    #[error("translation table for '{0}' must be a JSON object")]
    NotAnObject(Locale),
}
