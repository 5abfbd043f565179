use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::entities::NewContact;

pub const SUBMITTED: &str = "Contact form submitted successfully";

/// Body of `POST /api/contact`.
///
/// Every field is optional at the type level so that a missing field reaches
/// validation (and a 400 with a stable message) instead of failing
/// deserialization.  Scalar values are taken as text: numbers and `true` are
/// stringified, while `null`, `false`, `0` and nested values count as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ContactRequest {
    #[serde(default, deserialize_with = "scalar_text")]
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_owned()),
        _ => None,
    })
}

impl ContactRequest {
    /// Convert a validated request into a row, stamping `created_at`.
    pub fn into_new_contact(self, created_at: DateTime<Utc>) -> NewContact {
        NewContact {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
            created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactAccepted {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}
