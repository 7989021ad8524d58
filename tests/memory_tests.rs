use affect_chat::{ChatMessage, MemoryStore};

fn sample_conversation() -> Vec<ChatMessage> {
    vec![
        ChatMessage::new("나", "안녕 Luna"),
        ChatMessage::new("Luna", "안녕! 오늘은 어떤 이야기를 할까?"),
        ChatMessage::new("나", "\"따옴표\"와 줄바꿈\n그리고 이모지 💬"),
        ChatMessage::new("Luna", ""),
    ]
}

#[test]
fn test_round_trip_law() {
    let dir = tempfile::tempdir().unwrap();
    let store = MemoryStore::new(dir.path().join("chat_memory.json"));
    store.persist(&sample_conversation()).unwrap();

    let loaded = store.load().unwrap();
    store.persist(&loaded).unwrap();

    assert_eq!(store.load().unwrap(), loaded);
    assert_eq!(loaded, sample_conversation());
}

#[test]
fn test_round_trip_of_missing_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = MemoryStore::new(dir.path().join("chat_memory.json"));

    let loaded = store.load().unwrap();
    store.persist(&loaded).unwrap();

    assert!(store.load().unwrap().is_empty());
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "[]");
}

#[test]
fn test_record_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chat_memory.json");
    let store = MemoryStore::new(&path);
    store.persist(&[ChatMessage::new("나", "설레")]).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "[\n  {\n    \"speaker\": \"나\",\n    \"message\": \"설레\"\n  }\n]");
}

#[test]
fn test_reads_record_written_elsewhere() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chat_memory.json");
    std::fs::write(
        &path,
        r#"[{"speaker": "나", "message": "기대돼"}, {"speaker": "Luna", "message": "나도!"}]"#,
    )
    .unwrap();

    let store = MemoryStore::open(&path).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.messages()[1], ChatMessage::new("Luna", "나도!"));
}

#[test]
fn test_display_shows_last_twenty() {
    let mut store = MemoryStore::new("unused.json");
    for i in 0..45 {
        store.append(ChatMessage::new("나", format!("message {}", i)));
    }

    let recent = store.recent(20);
    assert_eq!(recent.len(), 20);
    assert_eq!(recent.first().unwrap().message, "message 25");
    assert_eq!(recent.last().unwrap().message, "message 44");
    assert_eq!(store.len(), 45);
}

#[test]
fn test_display_with_short_history() {
    let mut store = MemoryStore::new("unused.json");
    store.append_pair(ChatMessage::new("나", "a"), ChatMessage::new("Luna", "b"));

    assert_eq!(store.recent(20).len(), 2);
}

#[test]
fn test_length_never_decreases() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = MemoryStore::new(dir.path().join("chat_memory.json"));
    let mut previous = store.len();

    for i in 0..5 {
        store.append_pair(
            ChatMessage::new("나", format!("q{}", i)),
            ChatMessage::new("Luna", format!("a{}", i)),
        );
        store.persist_all().unwrap();

        assert!(store.len() >= previous);
        assert_eq!(store.len() % 2, 0);
        assert_eq!(store.load().unwrap().len(), store.len());
        previous = store.len();
    }
}
