use crate::ports::Cache;
use async_trait::async_trait;
use moka::future::Cache as MokaCache;
use std::hash::Hash;
use std::time::Duration;

pub struct MokaCacheAdapter<K, V> {
    inner: MokaCache<K, V>,
}

impl<K, V> MokaCacheAdapter<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    pub fn new(ttl_seconds: u64, max_capacity: u64) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(Duration::from_secs(ttl_seconds))
            .max_capacity(max_capacity)
            .build();

        Self { inner: cache }
    }

    pub fn with_default_settings() -> Self {
        Self::new(300, 10_000) // 5 minutes TTL, 10k max items
    }
}

#[async_trait]
impl<K, V> Cache<K, V> for MokaCacheAdapter<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &K) -> Option<V> {
        self.inner.get(key).await
    }

    async fn insert(&self, key: K, value: V) {
        self.inner.insert(key, value).await;
    }

    async fn remove(&self, key: &K) {
        self.inner.remove(key).await;
    }

    async fn clear(&self) {
        self.inner.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CampsiteId;

    #[tokio::test]
    async fn insert_get_remove_round_trip() {
        let cache = MokaCacheAdapter::<CampsiteId, String>::with_default_settings();

        cache
            .insert(CampsiteId(0), "React Lake Campground".to_string())
            .await;
        assert_eq!(
            cache.get(&CampsiteId(0)).await,
            Some("React Lake Campground".to_string())
        );
        assert_eq!(cache.get(&CampsiteId(99)).await, None);

        cache.remove(&CampsiteId(0)).await;
        assert_eq!(cache.get(&CampsiteId(0)).await, None);
    }

    #[test]
    fn clear_empties_every_entry() {
        tokio_test::block_on(async {
            let cache = MokaCacheAdapter::<CampsiteId, i64>::new(60, 100);

            cache.insert(CampsiteId(1), 100).await;
            cache.insert(CampsiteId(2), 200).await;
            cache.clear().await;
            assert_eq!(cache.get(&CampsiteId(1)).await, None);
            assert_eq!(cache.get(&CampsiteId(2)).await, None);
        });
    }
}
