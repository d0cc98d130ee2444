use chrono::{DateTime, Duration, Utc};
use log::warn;

use crate::model::{Id, NoticeRecord};
use crate::source::SuppressionStore;

/// How long an acknowledged notice stays hidden, unless the caller picks
/// another window.
pub const DEFAULT_SUPPRESSION_WINDOW_HOURS: i64 = 24;

/// Where the overlay stands for the current page load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlayState {
    /// Persisted state has not been consulted yet.
    #[default]
    Unknown,
    /// The headline notice should be shown.
    Visible,
    /// Acknowledged within the suppression window; hidden until it lapses.
    DismissedTemporarily,
    /// Nothing to show this load; no persisted trace.
    DismissedSession,
}

impl OverlayState {
    pub fn display_name(&self) -> &'static str {
        match self {
            OverlayState::Unknown => "Unknown",
            OverlayState::Visible => "Visible",
            OverlayState::DismissedTemporarily => "Dismissed Temporarily",
            OverlayState::DismissedSession => "Dismissed For Session",
        }
    }
}

/// Store key holding the "hidden until" instant for one notice.
pub fn suppression_key(notice_id: Id<NoticeRecord>) -> String {
    format!("notice_hidden_{notice_id}")
}

/// Decides whether the headline notice's interstitial overlay is shown.
///
/// The decision is re-derived on every initialization from the headline's
/// identity, the wall clock, and the persisted store. Nothing is cached
/// across headline changes: when the editor flags a different notice, the
/// old notice's entry stops mattering and the new notice's entry (likely
/// absent) is consulted fresh. Store failures fail open to `Visible`.
#[derive(Debug)]
pub struct OverlayGate {
    headline_id: Option<Id<NoticeRecord>>,
    state: OverlayState,
    window: Duration,
}

impl OverlayGate {
    pub fn initialize(
        store: &dyn SuppressionStore,
        headline: Option<&NoticeRecord>,
        now: DateTime<Utc>,
    ) -> Self {
        Self::initialize_with_window(
            store,
            headline,
            now,
            Duration::hours(DEFAULT_SUPPRESSION_WINDOW_HOURS),
        )
    }

    pub fn initialize_with_window(
        store: &dyn SuppressionStore,
        headline: Option<&NoticeRecord>,
        now: DateTime<Utc>,
        window: Duration,
    ) -> Self {
        let headline_id = headline.map(|h| h.id);
        let state = match headline_id {
            None => OverlayState::DismissedSession,
            Some(id) => consult_store(store, id, now),
        };
        Self {
            headline_id,
            state,
            window,
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn headline_id(&self) -> Option<Id<NoticeRecord>> {
        self.headline_id
    }

    /// "I Understand": persist `now + window` and hide until then. If the
    /// write fails the dismissal still holds, but only for this session.
    /// No-op unless the overlay is visible.
    pub fn acknowledge(&mut self, store: &dyn SuppressionStore, now: DateTime<Utc>) {
        if self.state != OverlayState::Visible {
            return;
        }
        if let Some(id) = self.headline_id {
            let hidden_until = now + self.window;
            if let Err(err) = store.set(&suppression_key(id), &hidden_until.to_rfc3339()) {
                warn!("suppression write failed, dismissal is session-only: {err}");
            }
        }
        self.state = OverlayState::DismissedTemporarily;
    }

    /// Close without acknowledging: hidden for this load only, nothing
    /// persisted, so the notice returns on the next page load.
    pub fn dismiss(&mut self) {
        if self.state == OverlayState::Visible {
            self.state = OverlayState::DismissedSession;
        }
    }
}

fn consult_store(
    store: &dyn SuppressionStore,
    notice_id: Id<NoticeRecord>,
    now: DateTime<Utc>,
) -> OverlayState {
    let key = suppression_key(notice_id);

    let stored = match store.get(&key) {
        Ok(stored) => stored,
        Err(err) => {
            warn!("suppression read failed, showing notice: {err}");
            return OverlayState::Visible;
        }
    };
    let Some(raw) = stored else {
        return OverlayState::Visible;
    };

    match DateTime::parse_from_rfc3339(&raw) {
        Ok(hidden_until) if hidden_until.with_timezone(&Utc) > now => {
            OverlayState::DismissedTemporarily
        }
        Ok(_) | Err(_) => {
            // Lapsed or unreadable entries are dropped lazily, right here.
            if let Err(err) = store.remove(&key) {
                warn!("failed to clear stale suppression entry {key}: {err}");
            }
            OverlayState::Visible
        }
    }
}
