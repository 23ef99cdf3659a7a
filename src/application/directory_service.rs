use super::AppResult;
use crate::domain::{Campsite, CampsiteId, Comment};
use crate::ports::{Cache, DirectoryRepository};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::Arc;

const DIRECTORY_CACHE_KEY: &str = "campsites";

#[derive(Debug, Clone)]
pub struct CachedList<T> {
    pub items: Vec<T>,
    pub fetched_at: DateTime<Utc>,
}

pub struct DirectoryService {
    repository: Arc<dyn DirectoryRepository>,
    campsite_cache: Arc<dyn Cache<CampsiteId, Campsite>>,
    comment_cache: Arc<dyn Cache<CampsiteId, Vec<Comment>>>,
    directory_cache: DashMap<String, CachedList<Campsite>>,
    list_ttl: chrono::Duration,
}

impl DirectoryService {
    pub fn new(
        repository: Arc<dyn DirectoryRepository>,
        campsite_cache: Arc<dyn Cache<CampsiteId, Campsite>>,
        comment_cache: Arc<dyn Cache<CampsiteId, Vec<Comment>>>,
        cache_ttl_seconds: u64,
    ) -> Self {
        Self {
            repository,
            campsite_cache,
            comment_cache,
            directory_cache: DashMap::new(),
            list_ttl: chrono::Duration::seconds(cache_ttl_seconds as i64),
        }
    }

    pub async fn list_campsites(&self, use_cache: bool) -> AppResult<Vec<Campsite>> {
        if use_cache {
            if let Some(cached) = self.directory_cache.get(DIRECTORY_CACHE_KEY) {
                let age = Utc::now() - cached.fetched_at;
                if age < self.list_ttl {
                    return Ok(cached.items.clone());
                }
            }
        }

        let campsites = self.repository.list_campsites().await?;

        // Cache individual campsites for future single-site lookups
        for campsite in &campsites {
            self.campsite_cache
                .insert(campsite.id, campsite.clone())
                .await;
        }

        self.directory_cache.insert(
            DIRECTORY_CACHE_KEY.to_string(),
            CachedList {
                items: campsites.clone(),
                fetched_at: Utc::now(),
            },
        );

        Ok(campsites)
    }

    pub async fn get_campsite(&self, id: &CampsiteId, use_cache: bool) -> AppResult<Campsite> {
        if use_cache {
            if let Some(campsite) = self.campsite_cache.get(id).await {
                return Ok(campsite);
            }
        }

        let campsite = self.repository.get_campsite(id).await?;
        self.campsite_cache.insert(*id, campsite.clone()).await;
        Ok(campsite)
    }

    pub async fn get_comments(
        &self,
        campsite_id: &CampsiteId,
        use_cache: bool,
    ) -> AppResult<Vec<Comment>> {
        if use_cache {
            if let Some(comments) = self.comment_cache.get(campsite_id).await {
                return Ok(comments);
            }
        }

        let comments = self.repository.get_comments(campsite_id).await?;
        self.comment_cache
            .insert(*campsite_id, comments.clone())
            .await;
        Ok(comments)
    }

    pub async fn post_comment(
        &self,
        campsite_id: &CampsiteId,
        rating: u8,
        author: &str,
        text: &str,
    ) -> AppResult<Comment> {
        let comment = self
            .repository
            .post_comment(campsite_id, rating, author, text)
            .await?;

        // Invalidate cached comments for this campsite to force refresh
        self.comment_cache.remove(campsite_id).await;

        Ok(comment)
    }

    pub async fn refresh_all_caches(&self) {
        self.directory_cache.clear();
        self.campsite_cache.clear().await;
        self.comment_cache.clear().await;
    }
}
