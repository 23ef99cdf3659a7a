use super::{
    dto::{CampsiteDto, CommentCreateDto, CommentDto},
    DirectoryClient,
};
use crate::domain::{Campsite, CampsiteId, Comment};
use crate::ports::{DirectoryRepository, RepositoryError, RepositoryResult};
use async_trait::async_trait;
use chrono::Utc;

pub struct RestDirectoryRepository {
    client: DirectoryClient,
}

impl RestDirectoryRepository {
    pub fn new(client: DirectoryClient) -> Self {
        Self { client }
    }

    fn build_query_string(&self, params: &[(String, String)]) -> String {
        if params.is_empty() {
            return String::new();
        }

        format!(
            "?{}",
            params
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&")
        )
    }
}

#[async_trait]
impl DirectoryRepository for RestDirectoryRepository {
    async fn list_campsites(&self) -> RepositoryResult<Vec<Campsite>> {
        let campsite_dtos: Vec<CampsiteDto> = self.client.get("/campsites").await?;
        Ok(campsite_dtos.into_iter().map(|dto| dto.into()).collect())
    }

    async fn get_campsite(&self, id: &CampsiteId) -> RepositoryResult<Campsite> {
        let path = format!("/campsites/{}", id.0);

        let campsite_dto: CampsiteDto = self.client.get(&path).await.map_err(|e| match e {
            RepositoryError::NotFound(_) => {
                RepositoryError::NotFound("Campsite not found".to_string())
            }
            other => other,
        })?;
        Ok(campsite_dto.into())
    }

    async fn get_comments(&self, campsite_id: &CampsiteId) -> RepositoryResult<Vec<Comment>> {
        let params = vec![("campsiteId".to_string(), campsite_id.0.to_string())];
        let path = format!("/comments{}", self.build_query_string(&params));

        let comment_dtos: Vec<CommentDto> = self.client.get(&path).await?;
        Ok(comment_dtos.into_iter().map(|dto| dto.into()).collect())
    }

    async fn post_comment(
        &self,
        campsite_id: &CampsiteId,
        rating: u8,
        author: &str,
        text: &str,
    ) -> RepositoryResult<Comment> {
        let body = CommentCreateDto {
            campsite_id: campsite_id.0,
            rating,
            text: text.to_string(),
            author: author.to_string(),
            date: Utc::now().to_rfc3339(),
        };

        let comment_dto: CommentDto = self.client.post("/comments", &body).await?;
        Ok(comment_dto.into())
    }
}
