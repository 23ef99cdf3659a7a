use crate::domain::*;
use serde::{Deserialize, Serialize};

// DTOs for the directory REST service. The wire uses camelCase names;
// everything else maps straight onto the domain records.

#[derive(Debug, Serialize, Deserialize)]
pub struct CampsiteDto {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub elevation: Option<i64>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: i64,
    #[serde(rename = "campsiteId")]
    pub campsite_id: i64,
    pub rating: u8,
    pub text: String,
    pub author: String,
    pub date: String,
}

// Request DTOs
#[derive(Debug, Serialize)]
pub struct CommentCreateDto {
    #[serde(rename = "campsiteId")]
    pub campsite_id: i64,
    pub rating: u8,
    pub text: String,
    pub author: String,
    pub date: String,
}

// Conversion implementations
impl From<CampsiteDto> for Campsite {
    fn from(dto: CampsiteDto) -> Self {
        Self {
            id: CampsiteId(dto.id),
            name: dto.name,
            image: dto.image,
            elevation: dto.elevation,
            featured: dto.featured,
            description: dto.description,
        }
    }
}

impl From<CommentDto> for Comment {
    fn from(dto: CommentDto) -> Self {
        Self {
            id: CommentId(dto.id),
            campsite_id: CampsiteId(dto.campsite_id),
            rating: dto.rating,
            text: dto.text,
            author: dto.author,
            date: dto.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campsite_dto_parses_service_json() {
        let json = serde_json::json!({
            "id": 0,
            "name": "React Lake Campground",
            "image": "campsites/react-lake.jpg",
            "elevation": 1233,
            "featured": false,
            "description": "Nestled in the foothills."
        });

        let dto: CampsiteDto = serde_json::from_value(json).unwrap();
        let campsite: Campsite = dto.into();
        assert_eq!(campsite.id, CampsiteId(0));
        assert_eq!(campsite.name, "React Lake Campground");
        assert_eq!(campsite.elevation, Some(1233));
        assert!(!campsite.featured);
    }

    #[test]
    fn comment_dto_reads_camel_case_parent_id() {
        let json = serde_json::json!({
            "id": 7,
            "campsiteId": 3,
            "rating": 4,
            "text": "Nice spot",
            "author": "Ana",
            "date": "2020-10-10"
        });

        let dto: CommentDto = serde_json::from_value(json).unwrap();
        let comment: Comment = dto.into();
        assert_eq!(comment.campsite_id, CampsiteId(3));
        assert_eq!(comment.rating, 4);
        assert_eq!(comment.author, "Ana");
    }

    #[test]
    fn comment_create_dto_writes_camel_case_parent_id() {
        let dto = CommentCreateDto {
            campsite_id: 5,
            rating: 4,
            text: "Great".to_string(),
            author: "Jo".to_string(),
            date: "2020-10-10T00:00:00Z".to_string(),
        };

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["campsiteId"], 5);
        assert!(value.get("campsite_id").is_none());
    }
}
