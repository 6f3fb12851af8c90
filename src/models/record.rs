use super::shift::Shift;
use serde::{Deserialize, Serialize};

/// One production entry. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub date: String,  // "YYYY-MM-DD"
    pub time: String,  // "HH:MM:SS", captured at creation
    pub model: String,
    pub color: String,
    pub shift: Shift,
    pub total: u64,
}
