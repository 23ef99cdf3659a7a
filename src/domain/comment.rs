use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentId(pub i64);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CommentId {
    fn from(id: i64) -> Self {
        CommentId(id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub campsite_id: super::CampsiteId,
    pub rating: u8,
    pub text: String,
    pub author: String,
    /// Creation date as supplied by the data layer. Kept as an opaque
    /// string; parsing happens only at display time.
    pub date: String,
}

impl Comment {
    /// Format the creation date as "Oct 10, 2020". Tries RFC 3339 first,
    /// then a couple of common naive formats; if none match, the raw
    /// string is returned unchanged so the list still renders.
    pub fn display_date(&self) -> String {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(&self.date) {
            return parsed.format("%b %d, %Y").to_string();
        }
        if let Ok(parsed) = NaiveDateTime::parse_from_str(&self.date, "%Y-%m-%dT%H:%M:%S%.f") {
            return parsed.format("%b %d, %Y").to_string();
        }
        if let Ok(parsed) = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") {
            return parsed.format("%b %d, %Y").to_string();
        }
        self.date.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment_dated(date: &str) -> Comment {
        Comment {
            id: CommentId(1),
            campsite_id: super::super::CampsiteId(0),
            rating: 5,
            text: "What a great spot".to_string(),
            author: "Page Turner".to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn formats_rfc3339_dates() {
        let comment = comment_dated("2012-10-16T17:45:28.491Z");
        assert_eq!(comment.display_date(), "Oct 16, 2012");
    }

    #[test]
    fn formats_naive_datetimes() {
        let comment = comment_dated("2020-10-10T08:30:00");
        assert_eq!(comment.display_date(), "Oct 10, 2020");
    }

    #[test]
    fn formats_plain_dates() {
        let comment = comment_dated("2020-10-10");
        assert_eq!(comment.display_date(), "Oct 10, 2020");
    }

    #[test]
    fn unparseable_dates_pass_through() {
        let comment = comment_dated("a while back");
        assert_eq!(comment.display_date(), "a while back");
    }
}
