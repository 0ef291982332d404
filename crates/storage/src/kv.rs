//! Key-value store for session preferences and settings
//!
//! This module provides a small, type-safe key-value store backed by sled.
//! Values are stored as JSON. Separate namespaces map to separate sled trees,
//! so clearing one namespace never touches another.

use parking_lot::{Mutex, MutexGuard};
use serde::{de::DeserializeOwned, Serialize};
use sled::{Batch, Db, Tree};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Key-value store error types
#[derive(Debug, Error)]
pub enum KvError {
    /// Sled database error
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid key or namespace name
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

/// Result type for key-value operations
pub type Result<T> = std::result::Result<T, KvError>;

/// Key-value store configuration
#[derive(Debug, Clone)]
pub struct KvConfig {
    /// Database path
    pub path: String,
    /// Cache capacity in bytes
    pub cache_capacity: u64,
    /// Enable compression
    pub use_compression: bool,
    /// Background flush interval in milliseconds (None disables the flusher)
    pub flush_every_ms: Option<u64>,
}

impl Default for KvConfig {
    fn default() -> Self {
        Self {
            path: "shopper_kv.db".to_string(),
            cache_capacity: 8 * 1024 * 1024, // 8MB
            use_compression: true,
            flush_every_ms: Some(500),
        }
    }
}

impl KvConfig {
    /// Create a new configuration with a custom path
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Set cache capacity in bytes
    pub fn cache_capacity(mut self, bytes: u64) -> Self {
        self.cache_capacity = bytes;
        self
    }

    /// Enable or disable compression
    pub fn use_compression(mut self, enabled: bool) -> Self {
        self.use_compression = enabled;
        self
    }

    /// Set flush interval in milliseconds
    pub fn flush_every_ms(mut self, ms: Option<u64>) -> Self {
        self.flush_every_ms = ms;
        self
    }
}

/// Key-value store implementation
///
/// Cloning is cheap; clones share the same underlying database and the
/// same namespace locks.
#[derive(Clone)]
pub struct KvStore {
    db: Arc<Db>,
    locks: Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl KvStore {
    /// Open (or create) a key-value store with configuration
    pub fn new(config: KvConfig) -> Result<Self> {
        let db = sled::Config::new()
            .path(&config.path)
            .cache_capacity(config.cache_capacity)
            .use_compression(config.use_compression)
            .flush_every_ms(config.flush_every_ms)
            .open()?;

        tracing::debug!(path = %config.path, "opened key-value store");

        Ok(Self::from_db(db))
    }

    /// Create an in-memory key-value store (for testing)
    pub fn in_memory() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;

        Ok(Self::from_db(db))
    }

    fn from_db(db: Db) -> Self {
        Self {
            db: Arc::new(db),
            locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Open a named namespace
    ///
    /// The same name always yields the same underlying tree and the same lock.
    pub fn namespace(&self, name: &str) -> Result<Namespace> {
        if name.is_empty() {
            return Err(KvError::InvalidKey(
                "namespace name must not be empty".to_string(),
            ));
        }
        let tree = self.db.open_tree(name.as_bytes())?;
        let lock = self
            .locks
            .lock()
            .entry(name.to_string())
            .or_default()
            .clone();
        Ok(Namespace {
            name: name.to_string(),
            tree,
            lock,
        })
    }

    /// Names of every namespace opened through this store
    pub fn namespaces(&self) -> Vec<String> {
        let mut names: Vec<String> = self.locks.lock().keys().cloned().collect();
        names.sort();
        names
    }

    /// Flush pending writes of every namespace to disk
    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }
}

/// A named, isolated set of keys inside a [`KvStore`]
///
/// Every handle to the same name shares one lock. Single-key operations do
/// not take it; callers that need a consistent view of several keys hold
/// [`Namespace::lock`] around them.
#[derive(Clone)]
pub struct Namespace {
    name: String,
    tree: Tree,
    lock: Arc<Mutex<()>>,
}

impl Namespace {
    /// Namespace name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Acquire the namespace lock shared by every handle to this name
    pub fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock()
    }

    /// Get a value by key
    pub fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        match self.tree.get(key.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Set a value by key
    pub fn set<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        let bytes = serde_json::to_vec(value)?;
        self.tree.insert(key.as_bytes(), bytes)?;
        Ok(())
    }

    /// Remove `remove` and write `set` as one atomic batch
    pub fn apply<T>(&self, set: &[(&str, T)], remove: &[&str]) -> Result<()>
    where
        T: Serialize,
    {
        let mut batch = Batch::default();
        for key in remove {
            batch.remove(key.as_bytes());
        }
        for (key, value) in set {
            batch.insert(key.as_bytes(), serde_json::to_vec(value)?);
        }
        self.tree.apply_batch(batch)?;
        Ok(())
    }

    /// Remove a value by key
    pub fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.tree.remove(key.as_bytes())?.is_some())
    }

    /// Check if a key exists
    pub fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.tree.contains_key(key.as_bytes())?)
    }

    /// All keys currently stored
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        for item in self.tree.iter() {
            let (key, _) = item?;
            if let Ok(key_str) = String::from_utf8(key.to_vec()) {
                keys.push(key_str);
            }
        }
        Ok(keys)
    }

    /// Remove every key in this namespace
    ///
    /// sled removes keys one by one; hold [`Namespace::lock`] to keep
    /// other readers from seeing a partly cleared namespace.
    pub fn clear(&self) -> Result<()> {
        self.tree.clear()?;
        Ok(())
    }

    /// Flush pending writes for this namespace to disk
    pub fn flush(&self) -> Result<()> {
        self.tree.flush()?;
        Ok(())
    }

    /// Number of keys in this namespace
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Check if this namespace is empty
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::thread;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_kv_store_creation() {
        let kv = KvStore::in_memory().unwrap();
        assert!(kv.namespaces().is_empty());
        assert!(kv.namespace("UserInfo").unwrap().is_empty());
        assert_eq!(kv.namespaces(), vec!["UserInfo".to_string()]);
    }

    #[test]
    fn test_set_and_get_struct() {
        let ns = KvStore::in_memory().unwrap().namespace("Data").unwrap();
        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };

        ns.set("data", &data).unwrap();
        let result: Option<TestData> = ns.get("data").unwrap();

        assert_eq!(result, Some(data));
    }

    #[test]
    fn test_get_nonexistent() {
        let ns = KvStore::in_memory().unwrap().namespace("Data").unwrap();
        let value: Option<String> = ns.get("nonexistent").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_remove() {
        let ns = KvStore::in_memory().unwrap().namespace("Data").unwrap();

        ns.set("key", &"value".to_string()).unwrap();
        assert!(ns.contains("key").unwrap());

        assert!(ns.remove("key").unwrap());
        assert!(!ns.contains("key").unwrap());
        assert!(!ns.remove("key").unwrap());
    }

    #[test]
    fn test_apply_batch() {
        let ns = KvStore::in_memory().unwrap().namespace("UserInfo").unwrap();
        ns.set("ID", &"1").unwrap();
        ns.set("CartListID", &"901").unwrap();

        ns.apply(&[("ID", "7"), ("NAME", "Bob")], &["CartListID"]).unwrap();

        let id: Option<String> = ns.get("ID").unwrap();
        let cart: Option<String> = ns.get("CartListID").unwrap();
        assert_eq!(id, Some("7".to_string()));
        assert_eq!(cart, None);
        assert_eq!(ns.len(), 2);
    }

    #[test]
    fn test_namespace_isolation() {
        let kv = KvStore::in_memory().unwrap();
        let user_info = kv.namespace("UserInfo").unwrap();
        let other = kv.namespace("Other").unwrap();

        user_info.set("EMAIL", &"a@x.com".to_string()).unwrap();
        other.set("EMAIL", &"b@x.com".to_string()).unwrap();

        user_info.clear().unwrap();

        assert!(user_info.is_empty());
        let other_email: Option<String> = other.get("EMAIL").unwrap();
        assert_eq!(other_email, Some("b@x.com".to_string()));
    }

    #[test]
    fn test_namespace_reopen_shares_tree() {
        let kv = KvStore::in_memory().unwrap();
        kv.namespace("UserInfo")
            .unwrap()
            .set("ID", &"7".to_string())
            .unwrap();

        let reopened = kv.namespace("UserInfo").unwrap();
        let id: Option<String> = reopened.get("ID").unwrap();
        assert_eq!(id, Some("7".to_string()));
        assert_eq!(reopened.keys().unwrap(), vec!["ID".to_string()]);
    }

    #[test]
    fn test_namespace_handles_share_lock() {
        let kv = KvStore::in_memory().unwrap();
        let first = kv.namespace("UserInfo").unwrap();
        let second = kv.clone().namespace("UserInfo").unwrap();
        let other = kv.namespace("Other").unwrap();

        let guard = first.lock();
        assert!(second.lock.try_lock().is_none());
        assert!(other.lock.try_lock().is_some());
        drop(guard);
        assert!(second.lock.try_lock().is_some());
    }

    #[test]
    fn test_locked_clear_is_not_observed_partially() {
        let kv = KvStore::in_memory().unwrap();
        let writer = kv.namespace("UserInfo").unwrap();
        let reader = kv.namespace("UserInfo").unwrap();
        let keys: Vec<String> = (0..32).map(|i| format!("key-{i}")).collect();

        let clearing = {
            let keys = keys.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    let _guard = writer.lock();
                    for key in &keys {
                        writer.set(key, &"v").unwrap();
                    }
                    writer.clear().unwrap();
                }
            })
        };

        for _ in 0..200 {
            let _guard = reader.lock();
            let len = reader.len();
            assert!(len == 0 || len == keys.len(), "torn namespace: {len} keys");
        }
        clearing.join().unwrap();
    }

    #[test]
    fn test_empty_namespace_name_rejected() {
        let kv = KvStore::in_memory().unwrap();
        assert!(matches!(kv.namespace(""), Err(KvError::InvalidKey(_))));
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kv.db").to_string_lossy().to_string();

        {
            let kv = KvStore::new(KvConfig::new(&path)).unwrap();
            let ns = kv.namespace("UserInfo").unwrap();
            ns.set("NAME", &"Alice".to_string()).unwrap();
            kv.flush().unwrap();
        }

        let kv = KvStore::new(KvConfig::new(&path)).unwrap();
        let name: Option<String> = kv.namespace("UserInfo").unwrap().get("NAME").unwrap();
        assert_eq!(name, Some("Alice".to_string()));
    }

    #[test]
    fn test_config_builder() {
        let config = KvConfig::new("/tmp/test.db")
            .cache_capacity(1024)
            .use_compression(false)
            .flush_every_ms(None);

        assert_eq!(config.path, "/tmp/test.db");
        assert_eq!(config.cache_capacity, 1024);
        assert!(!config.use_compression);
        assert_eq!(config.flush_every_ms, None);
    }
}
