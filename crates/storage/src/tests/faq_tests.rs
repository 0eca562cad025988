use super::{create_test_store, faq_input};
use crate::StorageError;

#[test]
fn test_insert_assigns_monotonic_ids() {
    let (store, _temp_dir) = create_test_store();

    let first = store.insert_faq(&faq_input("q1", "HR")).unwrap();
    let second = store.insert_faq(&faq_input("q2", "HR")).unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_ne!(first.row_id, second.row_id);
}

#[test]
fn test_id_is_max_plus_one_after_delete() {
    let (store, _temp_dir) = create_test_store();
    store.insert_faq(&faq_input("q1", "HR")).unwrap();
    let second = store.insert_faq(&faq_input("q2", "HR")).unwrap();
    store.delete_faq(1).unwrap();

    let third = store.insert_faq(&faq_input("q3", "HR")).unwrap();

    // max(existing) + 1, not a global counter
    assert_eq!(second.id, 2);
    assert_eq!(third.id, 3);
}

#[test]
fn test_first_id_is_one_when_empty() {
    let (store, _temp_dir) = create_test_store();
    let entry = store.insert_faq(&faq_input("q", "Sales")).unwrap();
    assert_eq!(entry.id, 1);
}

#[test]
fn test_department_faqs_filters() {
    let (store, _temp_dir) = create_test_store();
    store.insert_faq(&faq_input("hr question", "HR")).unwrap();
    store.insert_faq(&faq_input("sales question", "Sales")).unwrap();

    let hr = store.department_faqs("HR", 100).unwrap();
    assert_eq!(hr.len(), 1);
    assert_eq!(hr[0].question, "hr question");
}

#[test]
fn test_exact_faq_normalizes_and_filters_department() {
    let (store, _temp_dir) = create_test_store();
    store.insert_faq(&faq_input("How do I reset my password?", "HR")).unwrap();

    let hit = store.exact_faq("HR", "  how do i RESET my password?  ").unwrap().unwrap();
    assert_eq!(hit.question, "How do I reset my password?");

    assert!(store.exact_faq("Sales", "how do i reset my password?").unwrap().is_none());
    assert!(store.exact_faq("HR", "different question").unwrap().is_none());
}

#[test]
fn test_delete_missing_id_is_not_found() {
    let (store, _temp_dir) = create_test_store();
    let err = store.delete_faq(42).unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}

#[test]
fn test_delete_removes_entry() {
    let (store, _temp_dir) = create_test_store();
    let entry = store.insert_faq(&faq_input("q", "HR")).unwrap();

    store.delete_faq(entry.id).unwrap();

    assert!(store.list_faqs().unwrap().is_empty());
    assert_eq!(store.count_faqs().unwrap(), 0);
}

#[test]
fn test_insert_clears_answer_cache() {
    let (store, _temp_dir) = create_test_store();
    store.put_cached_answer("hr:some query", "stale answer").unwrap();

    store.insert_faq(&faq_input("q", "HR")).unwrap();

    assert!(store.get_cached_answer("hr:some query").unwrap().is_none());
}

#[test]
fn test_delete_clears_answer_cache() {
    let (store, _temp_dir) = create_test_store();
    let entry = store.insert_faq(&faq_input("q", "HR")).unwrap();
    store.put_cached_answer("hr:q", "cached").unwrap();

    store.delete_faq(entry.id).unwrap();

    assert!(store.get_cached_answer("hr:q").unwrap().is_none());
}

#[test]
fn test_sample_faqs_caps_at_limit() {
    let (store, _temp_dir) = create_test_store();
    for i in 0..7 {
        store.insert_faq(&faq_input(&format!("q{i}"), "HR")).unwrap();
    }

    let samples = store.sample_faqs(5).unwrap();
    assert_eq!(samples.len(), 5);
    assert_eq!(store.count_faqs().unwrap(), 7);
}

#[test]
fn test_tags_round_trip() {
    let (store, _temp_dir) = create_test_store();
    let mut input = faq_input("q", "HR");
    input.tags = vec!["vacation".to_owned(), "time off".to_owned()];

    store.insert_faq(&input).unwrap();

    let listed = store.list_faqs().unwrap();
    assert_eq!(listed[0].tags, vec!["vacation", "time off"]);
}
