//! Wire types for the order/image API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// One text order, as returned by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub order_details: String,
}

/// One uploaded image record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub title: String,
    /// Public URL of the stored file. Some server revisions call this
    /// field `image_url`.
    #[serde(alias = "image_url")]
    pub url: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub storage_id: String,
}

/// Body of a successful `POST /login`.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// The server sends ids as either JSON strings or integers depending on
/// the revision; carry them uniformly as strings.
fn id_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(i64),
        Str(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Int(n) => n.to_string(),
        RawId::Str(s) => s,
    })
}
