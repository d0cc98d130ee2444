use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::model::NoticeRecord;

/// Filter accepted by the notice collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoticeFilter {
    pub important: Option<bool>,
    pub active: Option<bool>,
    pub limit: Option<usize>,
}

impl NoticeFilter {
    /// Filter used by the landing-page feed: important + active notices.
    /// No limit: the feed filters expiry at call time and bounds the
    /// result itself.
    pub fn important_active() -> Self {
        Self {
            important: Some(true),
            active: Some(true),
            limit: None,
        }
    }
}

/// Collaborator serving notices, ordered by `published_at` descending.
pub trait NoticeSource {
    fn fetch_notices(&self, filter: &NoticeFilter) -> CoreResult<Vec<NoticeRecord>>;
}

/// In-memory notice source for tests and demos. Applies the same filter
/// and ordering contract the real collaborator documents.
pub struct MemoryNoticeSource {
    notices: Vec<NoticeRecord>,
}

impl MemoryNoticeSource {
    pub fn new(notices: Vec<NoticeRecord>) -> Self {
        Self { notices }
    }
}

impl NoticeSource for MemoryNoticeSource {
    fn fetch_notices(&self, filter: &NoticeFilter) -> CoreResult<Vec<NoticeRecord>> {
        let mut notices: Vec<NoticeRecord> = self
            .notices
            .iter()
            .filter(|n| filter.important.map_or(true, |v| n.important == v))
            .filter(|n| filter.active.map_or(true, |v| n.active == v))
            .cloned()
            .collect();
        notices.sort_by(|a, b| b.published_at.cmp(&a.published_at).then(a.id.cmp(&b.id)));
        if let Some(limit) = filter.limit {
            notices.truncate(limit);
        }
        Ok(notices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn fetch_notices_orders_newest_first_and_limits() {
        let old = NoticeRecord::create(
            "Old".into(),
            "".into(),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        );
        let new = NoticeRecord::create(
            "New".into(),
            "".into(),
            Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        );
        let mid = NoticeRecord::create(
            "Mid".into(),
            "".into(),
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        );
        let source = MemoryNoticeSource::new(vec![old, new, mid]);

        let filter = NoticeFilter {
            limit: Some(2),
            ..Default::default()
        };
        let notices = source.fetch_notices(&filter).unwrap();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].title, "New");
        assert_eq!(notices[1].title, "Mid");
    }

    #[test]
    fn fetch_notices_filters_inactive() {
        let mut hidden = NoticeRecord::create("Hidden".into(), "".into(), Utc::now());
        hidden.active = false;
        let shown = NoticeRecord::create("Shown".into(), "".into(), Utc::now());
        let source = MemoryNoticeSource::new(vec![hidden, shown]);

        let filter = NoticeFilter {
            active: Some(true),
            ..Default::default()
        };
        let notices = source.fetch_notices(&filter).unwrap();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "Shown");
    }
}
