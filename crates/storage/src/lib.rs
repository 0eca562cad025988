//! Storage layer for answerdesk
//!
//! SQLite-backed document store with one collection per table: FAQs,
//! memoized answers, escalations, and chat histories. Nested document
//! structure (tags, message lists) is stored as JSON text. All methods are
//! synchronous; async callers run them on the blocking pool.

mod error;
mod migrations;
mod store;
#[cfg(test)]
mod tests;

pub use error::StorageError;
pub use store::Store;
