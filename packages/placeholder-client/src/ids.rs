//! Serde helpers for upstream identifiers
//!
//! JSONPlaceholder emits numeric ids (`"id": 1`) while json-server instances
//! seeded by hand often use strings. Both decode into `String`.
//!
//! ```
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Record {
//!     #[serde(deserialize_with = "graphqlzero_placeholder_client::ids::deserialize")]
//!     id: String,
//! }
//!
//! let record: Record = serde_json::from_str(r#"{"id": 7}"#).unwrap();
//! assert_eq!(record.id, "7");
//! ```

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => text,
            RawId::Integer(n) => n.to_string(),
            RawId::Float(n) => n.to_string(),
        }
    }
}

/// Decode a required id from a string or number
pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(Into::into)
}

/// Decode an optional id from a string, number or `null`
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawId>::deserialize(deserializer).map(|raw| raw.map(Into::into))
}
