//! Repository Integration Tests
//!
//! Tests for TodoRepository and ThemeRepository over the in-memory store.

#[cfg(test)]
mod tests {
    use crate::domain::{Theme, TodoError, TodoId, TodoItem};
    use crate::list::Direction;
    use crate::repository::{KeyValueStore, MemoryStore, ThemeRepository, TodoRepository};

    const KEY: &str = "todos";

    fn setup_repo() -> TodoRepository<MemoryStore> {
        TodoRepository::load(MemoryStore::new(), KEY)
    }

    fn texts(repo: &TodoRepository<MemoryStore>) -> Vec<String> {
        repo.items().iter().map(|i| i.text.clone()).collect()
    }

    /// Decode what is currently in the slot
    fn stored(repo: &TodoRepository<MemoryStore>) -> Vec<TodoItem> {
        let raw = repo.store().raw(KEY).expect("slot should be written");
        serde_json::from_str(raw).expect("slot should hold a todo list")
    }

    #[test]
    fn test_add_blank_text_is_refused() {
        let mut repo = setup_repo();

        assert!(matches!(repo.add(""), Err(TodoError::EmptyText)));
        assert!(matches!(repo.add("   \t"), Err(TodoError::EmptyText)));

        assert!(repo.is_empty());
        assert_eq!(repo.store().writes(), 0);
    }

    #[test]
    fn test_add_appends_incomplete_item() {
        let mut repo = setup_repo();
        repo.add("first").unwrap();

        let id = repo.add("buy milk").expect("Failed to add");

        assert_eq!(repo.len(), 2);
        let last = repo.items().last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.text, "buy milk");
        assert!(!last.complete);
        assert_ne!(repo.items()[0].id, id);
    }

    #[test]
    fn test_add_keeps_text_as_typed() {
        let mut repo = setup_repo();
        let id = repo.add("  call mom ").unwrap();
        assert_eq!(repo.get(&id).unwrap().text, "  call mom ");
        assert_eq!(stored(&repo)[0].text, "  call mom ");
    }

    #[test]
    fn test_every_operation_persists() {
        let mut repo = setup_repo();
        let a = repo.add("A").unwrap();
        let b = repo.add("B").unwrap();
        assert_eq!(repo.store().writes(), 2);

        repo.toggle_complete(&a).unwrap();
        repo.move_item(&b, Direction::Up).unwrap();
        repo.delete(&TodoId::from("missing")).unwrap();
        assert_eq!(repo.store().writes(), 5);

        assert_eq!(stored(&repo), repo.items().to_vec());
    }

    #[test]
    fn test_delete_absent_id_keeps_list() {
        let mut repo = setup_repo();
        repo.add("A").unwrap();
        repo.add("B").unwrap();
        let before = repo.items().to_vec();

        let removed = repo.delete(&TodoId::from("nope")).unwrap();

        assert!(!removed);
        assert_eq!(repo.items(), before.as_slice());
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut repo = setup_repo();
        repo.add("A").unwrap();
        let b = repo.add("B").unwrap();
        repo.add("C").unwrap();

        assert!(repo.delete(&b).unwrap());

        assert_eq!(texts(&repo), vec!["A", "C"]);
        assert!(repo.get(&b).is_none());
    }

    #[test]
    fn test_move_boundaries_are_noops() {
        let mut repo = setup_repo();
        let first = repo.add("A").unwrap();
        let last = repo.add("B").unwrap();

        assert!(!repo.move_item(&first, Direction::Up).unwrap());
        assert!(!repo.move_item(&last, Direction::Down).unwrap());
        assert_eq!(texts(&repo), vec!["A", "B"]);

        assert!(repo.move_item(&last, Direction::Up).unwrap());
        assert_eq!(texts(&repo), vec!["B", "A"]);
    }

    #[test]
    fn test_toggle_is_involutive() {
        let mut repo = setup_repo();
        let id = repo.add("A").unwrap();

        assert_eq!(repo.toggle_complete(&id).unwrap(), Some(true));
        assert_eq!(repo.toggle_complete(&id).unwrap(), Some(false));
        assert!(!repo.get(&id).unwrap().complete);

        assert_eq!(repo.toggle_complete(&TodoId::from("nope")).unwrap(), None);
    }

    #[test]
    fn test_edit_removes_and_returns_text() {
        let mut repo = setup_repo();
        repo.add("A").unwrap();
        let b = repo.add("B").unwrap();
        repo.add("C").unwrap();

        let text = repo.edit(&b).unwrap();

        assert_eq!(text.as_deref(), Some("B"));
        assert_eq!(texts(&repo), vec!["A", "C"]);
        assert_eq!(stored(&repo).len(), 2);

        // Re-adding after the edit appends a fresh item
        let readded = repo.add("B edited").unwrap();
        assert_ne!(readded, b);
        assert_eq!(texts(&repo), vec!["A", "C", "B edited"]);

        assert_eq!(repo.edit(&TodoId::from("nope")).unwrap(), None);
    }

    #[test]
    fn test_reload_reproduces_list() {
        let mut repo = setup_repo();
        let a = repo.add("A").unwrap();
        repo.add("B").unwrap();
        repo.add("C").unwrap();
        repo.toggle_complete(&a).unwrap();
        repo.move_item(&a, Direction::Down).unwrap();

        let reloaded = TodoRepository::load(repo.store().clone(), KEY);

        assert_eq!(reloaded.items(), repo.items());
    }

    #[test]
    fn test_load_missing_slot_is_empty() {
        let repo = TodoRepository::load(MemoryStore::with_value("other", "[]"), KEY);
        assert!(repo.is_empty());
    }

    #[test]
    fn test_load_corrupt_slot_is_empty() {
        for raw in ["{ not json", "null", r#"{"id":"1"}"#, r#"[{"text":"no id"}]"#] {
            let repo = TodoRepository::load(MemoryStore::with_value(KEY, raw), KEY);
            assert!(repo.is_empty(), "expected empty list for {:?}", raw);
        }
    }

    #[test]
    fn test_load_unreadable_store_is_empty() {
        let mut store = MemoryStore::with_value(KEY, r#"[{"id":"1","text":"A","complete":false}]"#);
        store.set_unreadable(true);
        let repo = TodoRepository::load(store, KEY);
        assert!(repo.is_empty());

        let mut store = MemoryStore::with_value("theme", "dark");
        store.set_unreadable(true);
        let theme = ThemeRepository::load(store, "theme");
        assert_eq!(theme.theme(), Theme::Light);
    }

    #[test]
    fn test_load_existing_browser_data() {
        let raw = r#"[
            {"id":"6f1c","text":"A","complete":false},
            {"id":"9b2e","text":"B","complete":true}
        ]"#;
        let repo = TodoRepository::load(MemoryStore::with_value(KEY, raw), KEY);

        assert_eq!(repo.len(), 2);
        assert_eq!(repo.remaining(), 1);
        assert!(repo.get(&TodoId::from("9b2e")).unwrap().complete);
    }

    #[test]
    fn test_load_drops_duplicate_ids() {
        let raw = r#"[
            {"id":"1","text":"A","complete":false},
            {"id":"1","text":"A again","complete":false}
        ]"#;
        let repo = TodoRepository::load(MemoryStore::with_value(KEY, raw), KEY);

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.items()[0].text, "A");
    }

    #[test]
    fn test_failed_write_keeps_in_memory_change() {
        let mut store = MemoryStore::new();
        store.set_read_only(true);
        let mut repo = TodoRepository::load(store, KEY);

        let result = repo.add("A");

        assert!(matches!(result, Err(TodoError::Storage(_))));
        assert_eq!(texts(&repo), vec!["A"]);
        assert!(repo.store().raw(KEY).is_none());
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut repo = setup_repo();

        let a = repo.add("A").unwrap();
        let b = repo.add("B").unwrap();
        repo.move_item(&b, Direction::Up).unwrap();
        assert_eq!(texts(&repo), vec!["B", "A"]);

        repo.delete(&a).unwrap();
        assert_eq!(texts(&repo), vec!["B"]);

        repo.toggle_complete(&b).unwrap();
        assert!(repo.get(&b).unwrap().complete);

        let reloaded = TodoRepository::load(repo.store().clone(), KEY);
        assert_eq!(reloaded.items(), repo.items());
    }

    #[test]
    fn test_theme_defaults_to_light_and_persists() {
        let mut repo = ThemeRepository::load(MemoryStore::new(), "theme");
        assert_eq!(repo.theme(), Theme::Light);

        assert_eq!(repo.toggle().unwrap(), Theme::Dark);
        assert_eq!(repo.store().raw("theme"), Some("dark"));

        let reloaded = ThemeRepository::load(repo.store().clone(), "theme");
        assert_eq!(reloaded.theme(), Theme::Dark);
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
