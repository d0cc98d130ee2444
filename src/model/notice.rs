use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::Id;

/// A site notice. Important + active notices compete for the headline slot
/// and its interstitial overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoticeRecord {
    pub id: Id<NoticeRecord>,
    pub title: String,
    pub content: String,
    pub important: bool,
    pub active: bool,
    pub published_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl NoticeRecord {
    pub fn create(title: String, content: String, published_at: DateTime<Utc>) -> Self {
        Self {
            id: Id::generate(),
            title,
            content,
            important: false,
            active: true,
            published_at,
            expires_at: None,
        }
    }

    /// Whether the notice's expiry instant has passed. A notice with no
    /// expiry never expires.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at <= now,
            None => false,
        }
    }

    /// Active and not expired as of `now`.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.active && !self.is_expired(now)
    }
}
