use serde::{Deserialize, Serialize};

/// A stored question/answer pair scoped to a department.
///
/// `id` is assigned by the store as `max(existing) + 1` and never reused
/// within a live database. Entries are immutable once created; the only
/// mutation is deletion by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: i64,
    /// Store row identifier, exposed to API clients alongside the integer id.
    #[serde(rename = "_id")]
    pub row_id: String,
    pub question: String,
    pub answer: String,
    pub department: String,
    pub tags: Vec<String>,
}

/// Caller-supplied fields for a new FAQ entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqInput {
    pub question: String,
    pub answer: String,
    pub department: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
