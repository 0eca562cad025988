//! Test utilities and module declarations for storage tests.

use crate::Store;
use answerdesk_core::{ConversationTurn, FaqInput};
use tempfile::TempDir;

pub fn create_test_store() -> (Store, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let store = Store::new(&db_path).unwrap();
    (store, temp_dir)
}

pub fn faq_input(question: &str, department: &str) -> FaqInput {
    FaqInput {
        question: question.to_owned(),
        answer: format!("answer to: {question}"),
        department: department.to_owned(),
        tags: vec!["test".to_owned()],
    }
}

pub fn welcome_turn() -> ConversationTurn {
    ConversationTurn::assistant(
        "Hello! How can I help you today?",
        answerdesk_core::AnswerSource::System,
        None,
    )
}

mod cache_tests;
mod escalation_tests;
mod faq_tests;
mod history_tests;
