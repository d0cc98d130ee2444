use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::Id;

/// A press release served by the press-release source. Featured releases
/// appear alongside notices on the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressRelease {
    pub id: Id<PressRelease>,
    pub title: String,
    pub summary: Option<String>,
    pub link_url: Option<String>,
    pub featured: bool,
    pub published_at: DateTime<Utc>,
}

impl PressRelease {
    pub fn create(title: String, published_at: DateTime<Utc>) -> Self {
        Self {
            id: Id::generate(),
            title,
            summary: None,
            link_url: None,
            featured: false,
            published_at,
        }
    }
}
