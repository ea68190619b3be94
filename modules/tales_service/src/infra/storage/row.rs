//! Wire rows of the `tales` table
//!
//! The same shape is returned by the hosted REST interface and stored in the
//! offline snapshot file.

use serde::{Deserialize, Deserializer, Serialize};

/// One row of the `tales` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaleRow {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub nation: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub source: String,
}

/// Nullable text columns decode to an empty string
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Projection used when listing nations (`select=nation`)
#[derive(Debug, Clone, Deserialize)]
pub struct NationRow {
    #[serde(default)]
    pub nation: Option<String>,
}
