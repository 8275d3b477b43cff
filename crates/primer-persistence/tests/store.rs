use primer_persistence::{
    FileStore, KeyValueStore, MemoryStore, PersistedState, STATE_KEY, THEME_KEY,
};

#[test]
fn file_store_round_trips_across_reopen() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("store.toml");

    let mut store = FileStore::open(path.clone());
    assert_eq!(store.get(THEME_KEY), None);
    store.set(THEME_KEY, "dark").expect("write theme");
    store.set("greeting", "hello").expect("write second key");

    let reopened = FileStore::open(path);
    assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("dark"));
    assert_eq!(reopened.get("greeting").as_deref(), Some("hello"));
}

#[test]
fn missing_file_starts_empty_and_first_set_creates_parents() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("nested").join("deeper").join("store.toml");

    let mut store = FileStore::open(path.clone());
    assert_eq!(store.get(THEME_KEY), None);
    store.set(THEME_KEY, "light").expect("write through missing parents");

    assert!(path.exists(), "store file should exist after the first set");
    let reopened = FileStore::open(path);
    assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("light"));
}

#[test]
fn corrupt_file_is_discarded_without_failing() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("store.toml");
    std::fs::write(&path, "this is [ not toml").expect("write corrupt store");

    let mut store = FileStore::open(path.clone());
    assert_eq!(store.get(THEME_KEY), None, "corrupt content must not leak through");

    store.set(THEME_KEY, "system").expect("recover by rewriting");
    let reopened = FileStore::open(path);
    assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("system"));
}

#[test]
fn write_leaves_no_temp_file_behind() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("store.toml");

    let mut store = FileStore::open(path);
    store.set(THEME_KEY, "dark").expect("write theme");

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .expect("list temp dir")
        .map(|entry| entry.expect("read entry").file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("store.toml")]);
}

#[test]
fn state_slice_round_trips_through_the_file_store() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("store.toml");

    let mut store = FileStore::open(path.clone());
    let mut state = PersistedState::default();
    state.last_route = Some("/concepts/reducers".to_string());
    state.mark_quiz_completed("reducer-purity");
    state.store(&mut store).expect("persist slice");

    let reopened = FileStore::open(path);
    let loaded = PersistedState::load(&reopened);
    assert_eq!(loaded.last_route.as_deref(), Some("/concepts/reducers"));
    assert!(loaded.is_quiz_completed("reducer-purity"));
}

#[test]
fn malformed_state_slice_loads_as_default() {
    let mut store = MemoryStore::new();
    store.set(STATE_KEY, "{ definitely not json").expect("seed bad payload");

    let loaded = PersistedState::load(&store);
    assert_eq!(loaded, PersistedState::default());
}

#[test]
fn unknown_fields_in_the_slice_are_ignored() {
    let mut store = MemoryStore::new();
    store
        .set(
            STATE_KEY,
            r#"{"last_route":"/","completed_quizzes":[],"future_field":true}"#,
        )
        .expect("seed forward-compatible payload");

    let loaded = PersistedState::load(&store);
    assert_eq!(loaded.last_route.as_deref(), Some("/"));
}
