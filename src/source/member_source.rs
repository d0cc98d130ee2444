use crate::error::CoreResult;
use crate::model::{MemberCategory, MemberRecord};

/// Collaborator serving the flat member list. The hierarchy builder never
/// touches this directly; its caller fetches, then hands the records over.
pub trait MemberSource {
    /// Returns members, optionally restricted to one category.
    fn fetch_members(&self, category: Option<MemberCategory>) -> CoreResult<Vec<MemberRecord>>;
}

/// In-memory member source for tests and demos.
pub struct MemoryMemberSource {
    members: Vec<MemberRecord>,
}

impl MemoryMemberSource {
    pub fn new(members: Vec<MemberRecord>) -> Self {
        Self { members }
    }
}

impl MemberSource for MemoryMemberSource {
    fn fetch_members(&self, category: Option<MemberCategory>) -> CoreResult<Vec<MemberRecord>> {
        let members = self
            .members
            .iter()
            .filter(|m| category.map_or(true, |c| m.category == c))
            .cloned()
            .collect();
        Ok(members)
    }
}
