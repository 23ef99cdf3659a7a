use crate::domain::{Campsite, CampsiteId, Comment};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    async fn list_campsites(&self) -> RepositoryResult<Vec<Campsite>>;
    async fn get_campsite(&self, id: &CampsiteId) -> RepositoryResult<Campsite>;
    async fn get_comments(&self, campsite_id: &CampsiteId) -> RepositoryResult<Vec<Comment>>;
    async fn post_comment(
        &self,
        campsite_id: &CampsiteId,
        rating: u8,
        author: &str,
        text: &str,
    ) -> RepositoryResult<Comment>;
}
