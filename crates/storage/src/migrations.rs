//! Schema setup.
//!
//! Single idempotent migration: every table is `CREATE TABLE IF NOT EXISTS`,
//! run once per pool creation. Documents with nested structure (tags,
//! messages) live in JSON text columns.

use rusqlite::Connection;

use crate::error::StorageError;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS faqs (
    row_id      TEXT PRIMARY KEY,
    id          INTEGER NOT NULL UNIQUE,
    question    TEXT NOT NULL,
    answer      TEXT NOT NULL,
    department  TEXT NOT NULL,
    tags        TEXT NOT NULL DEFAULT '[]'
);
CREATE INDEX IF NOT EXISTS idx_faqs_department ON faqs(department);

CREATE TABLE IF NOT EXISTS answer_cache (
    cache_key   TEXT PRIMARY KEY,
    answer      TEXT NOT NULL,
    created_at  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS escalations (
    id          TEXT PRIMARY KEY,
    query       TEXT NOT NULL,
    department  TEXT NOT NULL,
    user_id     TEXT,
    username    TEXT,
    timestamp   TEXT NOT NULL,
    llm_reply   TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS chat_histories (
    id           TEXT PRIMARY KEY,
    user_id      TEXT NOT NULL UNIQUE,
    username     TEXT NOT NULL,
    department   TEXT NOT NULL,
    messages     TEXT NOT NULL DEFAULT '[]',
    last_updated TEXT NOT NULL
);
";

/// Applies the schema to a fresh or existing database.
pub fn run(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(SCHEMA).map_err(|e| StorageError::Migration(e.to_string()))
}
