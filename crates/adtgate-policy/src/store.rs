//! The active disabled-set — single source of truth for "currently blocked".

use std::collections::HashSet;
use std::sync::RwLock;

/// Owns the set of currently disabled operation names.
///
/// Readers (`contains`) take the read lock and never block each other.
/// [`PolicyStore::load`] is the only mutator: it builds the replacement set
/// first and publishes it in a single write-lock assignment, so a concurrent
/// reader observes either the previous set or the new one in full.
pub struct PolicyStore {
    disabled: RwLock<HashSet<String>>,
}

impl PolicyStore {
    /// Create an empty store — every operation enabled.
    pub fn new() -> Self {
        Self {
            disabled: RwLock::new(HashSet::new()),
        }
    }

    /// Create a store pre-loaded with the given names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::new();
        store.load(names);
        store
    }

    /// Exact-match membership test. Runs on every dispatched operation.
    pub fn contains(&self, name: &str) -> bool {
        self.disabled.read().unwrap().contains(name)
    }

    /// Replace the active set wholesale.
    ///
    /// Duplicates collapse on insert, unknown names are accepted silently,
    /// and an empty list yields an everything-enabled policy.
    pub fn load<I, S>(&self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let next: HashSet<String> = names.into_iter().map(Into::into).collect();
        let count = next.len();
        *self.disabled.write().unwrap() = next;
        tracing::info!(disabled = count, "Disabled set replaced");
    }

    /// Sorted copy of the active set, for display and introspection.
    pub fn snapshot(&self) -> Vec<String> {
        let mut names: Vec<String> = self.disabled.read().unwrap().iter().cloned().collect();
        names.sort();
        names
    }

    /// Number of currently disabled operations.
    pub fn len(&self) -> usize {
        self.disabled.read().unwrap().len()
    }

    /// True when nothing is disabled.
    pub fn is_empty(&self) -> bool {
        self.disabled.read().unwrap().is_empty()
    }

    /// Run `f` against the current set under a single read lock, so a
    /// multi-name query (list filtering) sees one consistent policy.
    pub(crate) fn with_set<R>(&self, f: impl FnOnce(&HashSet<String>) -> R) -> R {
        f(&self.disabled.read().unwrap())
    }
}

impl Default for PolicyStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_empty_store_disables_nothing() {
        let store = PolicyStore::new();
        assert!(store.is_empty());
        assert!(!store.contains("deleteObject"));
        assert!(!store.contains(""));
    }

    #[test]
    fn test_load_replaces_set() {
        let store = PolicyStore::new();
        store.load(["lock", "unLock"]);
        assert!(store.contains("lock"));
        assert!(store.contains("unLock"));

        store.load(["deleteObject"]);
        assert!(store.contains("deleteObject"));
        assert!(!store.contains("lock"));
        assert!(!store.contains("unLock"));
    }

    #[test]
    fn test_load_deduplicates() {
        let store = PolicyStore::new();
        store.load(["lock", "lock", "unLock", "lock"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_load_is_idempotent() {
        let store = PolicyStore::new();
        store.load(["lock", "deleteObject"]);
        let first = store.snapshot();
        store.load(["lock", "deleteObject"]);
        assert_eq!(store.snapshot(), first);
    }

    #[test]
    fn test_load_empty_enables_everything() {
        let store = PolicyStore::from_names(["lock", "deleteObject"]);
        assert_eq!(store.len(), 2);
        store.load(Vec::<String>::new());
        assert!(store.is_empty());
        assert!(!store.contains("lock"));
    }

    #[test]
    fn test_unknown_names_accepted_silently() {
        let store = PolicyStore::new();
        store.load(["noSuchOperation"]);
        assert!(store.contains("noSuchOperation"));
    }

    #[test]
    fn test_contains_is_exact_match() {
        let store = PolicyStore::from_names(["deleteObject"]);
        assert!(store.contains("deleteObject"));
        assert!(!store.contains("deleteobject"));
        assert!(!store.contains("deleteObject "));
        assert!(!store.contains("delete"));
    }

    #[test]
    fn test_snapshot_is_sorted() {
        let store = PolicyStore::from_names(["unLock", "deleteObject", "lock"]);
        assert_eq!(store.snapshot(), vec!["deleteObject", "lock", "unLock"]);
    }

    #[test]
    fn test_concurrent_readers_never_see_partial_set() {
        let store = Arc::new(PolicyStore::from_names(["alpha", "beta"]));
        let old = vec!["alpha".to_string(), "beta".to_string()];
        let new = vec!["delta".to_string(), "gamma".to_string()];

        let mut readers = Vec::new();
        for _ in 0..4 {
            let store = store.clone();
            let (old, new) = (old.clone(), new.clone());
            readers.push(std::thread::spawn(move || {
                for _ in 0..500 {
                    let snap = store.snapshot();
                    assert!(
                        snap == old || snap == new,
                        "observed a partially updated set: {snap:?}"
                    );
                }
            }));
        }

        for i in 0..500 {
            if i % 2 == 0 {
                store.load(["gamma", "delta"]);
            } else {
                store.load(["alpha", "beta"]);
            }
        }

        for reader in readers {
            reader.join().unwrap();
        }
    }
}
