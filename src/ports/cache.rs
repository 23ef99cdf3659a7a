use async_trait::async_trait;
use std::hash::Hash;

/// Read-through cache boundary. Implementations own eviction policy;
/// callers only ever see get/insert/remove.
#[async_trait]
pub trait Cache<K, V>: Send + Sync
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &K) -> Option<V>;
    async fn insert(&self, key: K, value: V);
    async fn remove(&self, key: &K);
    async fn clear(&self);
}
