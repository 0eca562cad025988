//! Core types and constants for answerdesk
//!
//! This crate contains domain types shared across all other crates.

mod chat;
pub mod constants;
mod faq;
mod identity;

pub use chat::*;
pub use faq::*;
pub use identity::*;
