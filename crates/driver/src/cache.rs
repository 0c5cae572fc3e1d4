//! Process-wide client cache.
//!
//! Authenticating and resolving AWS configuration is expensive; the
//! resulting [`aws_sdk_athena::Client`] is not. [`ClientCache`] maps each
//! credential cache key to one constructed client so repeat connections
//! skip resolution entirely.
//!
//! Lock discipline: the read lock guards only the lookup and the write lock
//! only the insert. Client construction (network/file I/O) always happens
//! between the two, unlocked. Two concurrent misses for the same key may
//! therefore both construct a client and the later insert wins; that race
//! is accepted — duplicate construction, never corruption, and the map
//! never holds a partially built handle.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use aws_sdk_athena::Client;
use tracing::debug;

static PROCESS_CACHE: OnceLock<Arc<ClientCache>> = OnceLock::new();

/// Concurrency-safe map from credential cache key to a shared Athena
/// client handle. Entries are never evicted; they live until process exit.
#[derive(Debug, Default)]
pub struct ClientCache {
    inner: RwLock<HashMap<String, Client>>,
}

impl ClientCache {
    /// A fresh, empty cache. Tests and embedders that want isolated caches
    /// construct their own and hand them to the connector.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared process-lifetime cache used by default-constructed
    /// connectors.
    pub fn process_wide() -> Arc<ClientCache> {
        Arc::clone(PROCESS_CACHE.get_or_init(|| Arc::new(ClientCache::new())))
    }

    /// Look up a client under `key`. Takes the read lock only for the map
    /// probe; many lookups proceed concurrently.
    ///
    /// The SDK client is internally reference-counted, so the returned
    /// clone shares the underlying connection machinery with the cached
    /// entry.
    pub fn lookup(&self, key: &str) -> Option<Client> {
        let found = {
            let map = self.inner.read().unwrap_or_else(|e| e.into_inner());
            map.get(key).cloned()
        };
        debug!(cache_key = %key, hit = found.is_some(), "client cache lookup");
        found
    }

    /// Store a fully constructed client under `key`, replacing any entry a
    /// concurrent miss may have stored first.
    pub fn insert(&self, key: &str, client: Client) {
        let mut map = self.inner.write().unwrap_or_else(|e| e.into_inner());
        map.insert(key.to_string(), client);
        debug!(cache_key = %key, entries = map.len(), "client cache insert");
    }

    /// Number of cached clients.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
