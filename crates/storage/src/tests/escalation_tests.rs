use super::create_test_store;
use answerdesk_core::EscalationRecord;
use chrono::Utc;

fn record(query: &str) -> EscalationRecord {
    EscalationRecord {
        id: uuid::Uuid::new_v4().to_string(),
        query: query.to_owned(),
        department: "Finance".to_owned(),
        user_id: Some("alice_finance".to_owned()),
        username: Some("alice".to_owned()),
        timestamp: Utc::now(),
        llm_reply: "draft reply".to_owned(),
    }
}

#[test]
fn test_insert_and_list() {
    let (store, _temp_dir) = create_test_store();
    store.insert_escalation(&record("how do I reconcile ITC?")).unwrap();

    let listed = store.list_escalations().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].query, "how do I reconcile ITC?");
    assert_eq!(listed[0].department, "Finance");
    assert_eq!(listed[0].llm_reply, "draft reply");
}

#[test]
fn test_list_preserves_insertion_order() {
    let (store, _temp_dir) = create_test_store();
    store.insert_escalation(&record("first")).unwrap();
    store.insert_escalation(&record("second")).unwrap();

    let listed = store.list_escalations().unwrap();
    assert_eq!(listed[0].query, "first");
    assert_eq!(listed[1].query, "second");
}

#[test]
fn test_optional_user_fields() {
    let (store, _temp_dir) = create_test_store();
    let mut rec = record("anonymous query");
    rec.user_id = None;
    rec.username = None;
    store.insert_escalation(&rec).unwrap();

    let listed = store.list_escalations().unwrap();
    assert!(listed[0].user_id.is_none());
    assert!(listed[0].username.is_none());
}
