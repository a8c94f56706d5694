//! Category model for database persistence

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents a question category row
///
/// Categories are static reference data seeded by migration; the service
/// exposes no create/update/delete path for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Category key
    pub id: i64,

    /// Display name, e.g. "Science"
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}
