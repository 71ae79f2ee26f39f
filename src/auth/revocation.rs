//! Revoked-token registry
//!
//! Process-wide set of jti values invalidated by logout. Entries live for
//! the process lifetime; there is no persistence and no expiry sweep, so
//! identifiers of long-expired tokens accumulate until restart.

use std::sync::Arc;

use dashmap::DashSet;

/// Concurrent set of revoked token identifiers.
///
/// Clones share the same underlying set, so the registry can be handed to
/// every request handler through application state. An `add` completed on
/// one thread is visible to `contains` on any other.
#[derive(Clone, Default)]
pub struct RevocationList {
    revoked: Arc<DashSet<String>>,
}

impl RevocationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Revoke a token identifier. Re-adding a known jti is a no-op.
    pub fn add(&self, jti: &str) {
        self.revoked.insert(jti.to_string());
    }

    /// Whether this jti has been revoked.
    pub fn contains(&self, jti: &str) -> bool {
        self.revoked.contains(jti)
    }

    pub fn len(&self) -> usize {
        self.revoked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revoked.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_contains() {
        let list = RevocationList::new();
        assert!(!list.contains("abc"));
        list.add("abc");
        assert!(list.contains("abc"));
        assert!(!list.contains("def"));
    }

    #[test]
    fn re_adding_is_a_no_op() {
        let list = RevocationList::new();
        list.add("abc");
        list.add("abc");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn clones_share_the_same_set() {
        let list = RevocationList::new();
        let clone = list.clone();
        clone.add("abc");
        assert!(list.contains("abc"));
    }

    #[test]
    fn concurrent_adds_never_drop_an_entry() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 250;

        let list = RevocationList::new();
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let list = list.clone();
                std::thread::spawn(move || {
                    for i in 0..PER_THREAD {
                        list.add(&format!("jti-{t}-{i}"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("revocation writer panicked");
        }

        assert_eq!(list.len(), THREADS * PER_THREAD);
        assert!(list.contains("jti-0-0"));
        assert!(list.contains(&format!("jti-{}-{}", THREADS - 1, PER_THREAD - 1)));
    }
}
