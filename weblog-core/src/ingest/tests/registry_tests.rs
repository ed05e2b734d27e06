use crate::ingest::UserAgentRegistry;
use crate::store::Store;

#[test]
fn repeated_resolution_creates_one_row() {
    // Arrange
    let store = Store::open_in_memory().unwrap();
    let mut registry = UserAgentRegistry::new();

    // Act
    let ids: Vec<_> = (0..50)
        .map(|_| registry.resolve(store.connection(), "Mozilla/5.0").unwrap())
        .collect();

    // Assert
    assert!(ids[0].is_some());
    assert!(ids.iter().all(|id| *id == ids[0]));
    assert_eq!(store.count_user_agents().unwrap(), 1);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.created(), 1);
}

#[test]
fn empty_agent_resolves_to_none() {
    let store = Store::open_in_memory().unwrap();
    let mut registry = UserAgentRegistry::new();

    assert_eq!(registry.resolve(store.connection(), "").unwrap(), None);
    assert_eq!(store.count_user_agents().unwrap(), 0);
    assert!(registry.is_empty());
}

#[test]
fn distinct_agents_get_distinct_ids() {
    let store = Store::open_in_memory().unwrap();
    let mut registry = UserAgentRegistry::new();

    let a = registry.resolve(store.connection(), "curl/8.0").unwrap();
    let b = registry.resolve(store.connection(), "Wget/1.21").unwrap();

    assert_ne!(a, b);
    assert_eq!(store.count_user_agents().unwrap(), 2);
}

#[test]
fn fresh_registry_reuses_existing_rows() {
    // Arrange: a previous run already stored the agent.
    let store = Store::open_in_memory().unwrap();
    let first = UserAgentRegistry::new()
        .resolve(store.connection(), "curl/8.0")
        .unwrap();

    // Act
    let mut registry = UserAgentRegistry::new();
    let second = registry.resolve(store.connection(), "curl/8.0").unwrap();

    // Assert
    assert_eq!(first, second);
    assert_eq!(registry.created(), 0);
    assert_eq!(store.count_user_agents().unwrap(), 1);
}
