//! Item - the simplest stored record
//!
//! Created once, immutable thereafter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum item name length, in characters
pub const MAX_ITEM_NAME_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Monotonic identifier assigned by the backend
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
