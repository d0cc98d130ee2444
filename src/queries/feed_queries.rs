use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use log::warn;

use crate::model::{Id, NoticeRecord, PressRelease};
use crate::source::{NoticeFilter, NoticeSource, PressReleaseFilter, PressReleaseSource};

/// Page-size bound used when the caller does not pick one.
pub const DEFAULT_FEED_LIMIT: usize = 3;

/// The landing-page content feed: the headline notice, the remaining
/// important notices, and the featured press releases. A failed source
/// leaves its collection empty and sets the matching error flag; it never
/// takes the other source down with it.
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeFeed {
    pub headline: Option<NoticeRecord>,
    pub other_notices: Vec<NoticeRecord>,
    pub press_releases: Vec<PressRelease>,
    pub notice_error: Option<String>,
    pub press_error: Option<String>,
}

impl NoticeFeed {
    pub fn has_errors(&self) -> bool {
        self.notice_error.is_some() || self.press_error.is_some()
    }
}

fn live_important_sorted(notices: &[NoticeRecord], now: DateTime<Utc>) -> Vec<&NoticeRecord> {
    let mut live: Vec<&NoticeRecord> = notices
        .iter()
        .filter(|n| n.important && n.is_live(now))
        .collect();
    live.sort_by(|a, b| b.published_at.cmp(&a.published_at).then(a.id.cmp(&b.id)));
    live
}

/// The single most important notice: important, active, unexpired as of
/// `now`, most recently published first (id as tie-break).
pub fn select_headline(notices: &[NoticeRecord], now: DateTime<Utc>) -> Option<NoticeRecord> {
    live_important_sorted(notices, now).first().map(|n| (*n).clone())
}

/// The next `limit` important live notices, excluding the headline's id
/// when one exists. Publish order is preserved.
pub fn select_other_notices(
    notices: &[NoticeRecord],
    exclude: Option<Id<NoticeRecord>>,
    limit: usize,
    now: DateTime<Utc>,
) -> Vec<NoticeRecord> {
    live_important_sorted(notices, now)
        .into_iter()
        .filter(|n| exclude != Some(n.id))
        .take(limit)
        .cloned()
        .collect()
}

/// Loads both feed sources and assembles the page feed. Expiry is judged
/// against the `now` the caller passes, at call time.
pub fn load_feed(
    notice_source: &dyn NoticeSource,
    press_source: &dyn PressReleaseSource,
    limit: usize,
    now: DateTime<Utc>,
) -> NoticeFeed {
    // The source cannot judge expiry, so the fetch is unbounded; expiry
    // and `limit` are applied here, after the fact. A capped fetch could
    // fill the window with expired notices and starve live ones.
    let (notice_pool, notice_error) =
        match notice_source.fetch_notices(&NoticeFilter::important_active()) {
            Ok(notices) => (notices, None),
            Err(err) => {
                warn!("notice fetch failed, rendering without notices: {err}");
                (Vec::new(), Some(err.to_string()))
            }
        };

    let headline = select_headline(&notice_pool, now);
    let other_notices =
        select_other_notices(&notice_pool, headline.as_ref().map(|h| h.id), limit, now);

    let (press_releases, press_error) =
        match press_source.fetch_press_releases(&PressReleaseFilter::featured(limit)) {
            Ok(releases) => (releases, None),
            Err(err) => {
                warn!("press-release fetch failed, rendering without releases: {err}");
                (Vec::new(), Some(err.to_string()))
            }
        };

    NoticeFeed {
        headline,
        other_notices,
        press_releases,
        notice_error,
        press_error,
    }
}

/// Monotonic request counter for the feed. A reload supersedes any
/// in-flight request; the response carrying a stale ticket must be
/// discarded rather than applied.
#[derive(Debug, Default)]
pub struct RequestSequence {
    current: AtomicU64,
}

/// Token identifying one feed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, superseding all earlier tickets.
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` is still the latest request.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.current.load(Ordering::SeqCst) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_request_supersedes_older_ticket() {
        let sequence = RequestSequence::new();
        let first = sequence.begin();
        assert!(sequence.is_current(first));

        let second = sequence.begin();
        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
    }
}
