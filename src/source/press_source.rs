use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::model::PressRelease;

/// Filter accepted by the press-release collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PressReleaseFilter {
    pub featured: Option<bool>,
    pub limit: Option<usize>,
}

impl PressReleaseFilter {
    pub fn featured(limit: usize) -> Self {
        Self {
            featured: Some(true),
            limit: Some(limit),
        }
    }
}

/// Collaborator serving press releases, ordered by `published_at` descending.
pub trait PressReleaseSource {
    fn fetch_press_releases(&self, filter: &PressReleaseFilter) -> CoreResult<Vec<PressRelease>>;
}

/// In-memory press-release source for tests and demos.
pub struct MemoryPressReleaseSource {
    releases: Vec<PressRelease>,
}

impl MemoryPressReleaseSource {
    pub fn new(releases: Vec<PressRelease>) -> Self {
        Self { releases }
    }
}

impl PressReleaseSource for MemoryPressReleaseSource {
    fn fetch_press_releases(&self, filter: &PressReleaseFilter) -> CoreResult<Vec<PressRelease>> {
        let mut releases: Vec<PressRelease> = self
            .releases
            .iter()
            .filter(|r| filter.featured.map_or(true, |v| r.featured == v))
            .cloned()
            .collect();
        releases.sort_by(|a, b| b.published_at.cmp(&a.published_at).then(a.id.cmp(&b.id)));
        if let Some(limit) = filter.limit {
            releases.truncate(limit);
        }
        Ok(releases)
    }
}
