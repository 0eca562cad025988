use super::create_test_store;

#[test]
fn test_get_missing_key_is_none() {
    let (store, _temp_dir) = create_test_store();
    assert!(store.get_cached_answer("hr:nothing").unwrap().is_none());
}

#[test]
fn test_put_then_get() {
    let (store, _temp_dir) = create_test_store();
    store.put_cached_answer("hr:vacation", "Use the portal.").unwrap();

    let cached = store.get_cached_answer("hr:vacation").unwrap().unwrap();
    assert_eq!(cached.answer, "Use the portal.");
    assert_eq!(cached.cache_key, "hr:vacation");
}

#[test]
fn test_put_overwrites_same_key() {
    let (store, _temp_dir) = create_test_store();
    store.put_cached_answer("hr:q", "old").unwrap();
    store.put_cached_answer("hr:q", "new").unwrap();

    assert_eq!(store.get_cached_answer("hr:q").unwrap().unwrap().answer, "new");
}

#[test]
fn test_clear_removes_everything() {
    let (store, _temp_dir) = create_test_store();
    store.put_cached_answer("hr:a", "1").unwrap();
    store.put_cached_answer("sales:b", "2").unwrap();

    let cleared = store.clear_answer_cache().unwrap();

    assert_eq!(cleared, 2);
    assert!(store.get_cached_answer("hr:a").unwrap().is_none());
    assert!(store.get_cached_answer("sales:b").unwrap().is_none());
}
