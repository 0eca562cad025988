use super::{create_test_store, welcome_turn};
use answerdesk_core::{ConversationTurn, TurnRole};
use crate::StorageError;

#[test]
fn test_get_or_create_is_idempotent() {
    let (store, _temp_dir) = create_test_store();

    let first = store.get_or_create_history("Alice", "HR", &welcome_turn()).unwrap();
    let second = store.get_or_create_history("Alice", "HR", &welcome_turn()).unwrap();

    assert_eq!(first.id, second.id);
    // Exactly one welcome turn, not duplicated on repeat contact.
    assert_eq!(second.messages.len(), 1);
    assert_eq!(second.messages[0].role, TurnRole::Assistant);
}

#[test]
fn test_user_id_derivation_is_case_insensitive() {
    let (store, _temp_dir) = create_test_store();

    let lower = store.get_or_create_history("alice", "hr", &welcome_turn()).unwrap();
    let mixed = store.get_or_create_history("Alice", "HR", &welcome_turn()).unwrap();

    assert_eq!(lower.id, mixed.id);
    assert_eq!(lower.user_id, "alice_hr");
}

#[test]
fn test_distinct_departments_get_distinct_histories() {
    let (store, _temp_dir) = create_test_store();

    let hr = store.get_or_create_history("alice", "HR", &welcome_turn()).unwrap();
    let sales = store.get_or_create_history("alice", "Sales", &welcome_turn()).unwrap();

    assert_ne!(hr.id, sales.id);
}

#[test]
fn test_append_preserves_order_and_bumps_last_updated() {
    let (store, _temp_dir) = create_test_store();
    let created = store.get_or_create_history("bob", "Sales", &welcome_turn()).unwrap();

    store
        .append_turns("bob_sales", &[
            ConversationTurn::user("what are the targets?"),
            ConversationTurn::assistant(
                "Current quarterly target is $1M",
                answerdesk_core::AnswerSource::Llm,
                Some(0.9),
            ),
        ])
        .unwrap();

    let history = store.get_history("bob_sales").unwrap().unwrap();
    assert_eq!(history.messages.len(), 3);
    assert_eq!(history.messages[1].role, TurnRole::User);
    assert_eq!(history.messages[1].content, "what are the targets?");
    assert_eq!(history.messages[2].content, "Current quarterly target is $1M");
    assert!(history.last_updated >= created.last_updated);
}

#[test]
fn test_append_to_missing_history_is_not_found() {
    let (store, _temp_dir) = create_test_store();
    let err = store.append_turns("ghost_hr", &[ConversationTurn::user("hello")]).unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}

#[test]
fn test_get_missing_history_is_none() {
    let (store, _temp_dir) = create_test_store();
    assert!(store.get_history("nobody_hr").unwrap().is_none());
}
