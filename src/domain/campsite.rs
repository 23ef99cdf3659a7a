use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CampsiteId(pub i64);

impl fmt::Display for CampsiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CampsiteId {
    fn from(id: i64) -> Self {
        CampsiteId(id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campsite {
    pub id: CampsiteId,
    pub name: String,
    pub image: String,
    pub elevation: Option<i64>,
    pub featured: bool,
    pub description: String,
}

impl Campsite {
    /// Get the appropriate icon for this campsite in list views
    pub fn type_icon(&self) -> &'static str {
        if self.featured {
            "★" // Featured site
        } else {
            "○" // Regular site
        }
    }

    /// Format elevation for display
    pub fn elevation_display(&self) -> String {
        match self.elevation {
            Some(feet) => format!("{feet} ft"),
            None => String::new(),
        }
    }
}
