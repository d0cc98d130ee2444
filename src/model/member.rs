use serde::{Deserialize, Serialize};

use super::ids::Id;

/// Which section of the organization a member belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberCategory {
    Board,
    Staff,
}

impl MemberCategory {
    pub const ALL: &'static [MemberCategory] = &[MemberCategory::Board, MemberCategory::Staff];

    pub fn display_name(&self) -> &'static str {
        match self {
            MemberCategory::Board => "Board of Directors",
            MemberCategory::Staff => "Staff",
        }
    }

    /// Parse from the stored string representation.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Board" => Some(MemberCategory::Board),
            "Staff" => Some(MemberCategory::Staff),
            _ => None,
        }
    }

    /// Convert to the stored string representation.
    pub fn to_db_str(&self) -> &'static str {
        match self {
            MemberCategory::Board => "Board",
            MemberCategory::Staff => "Staff",
        }
    }
}

/// A member of the organization as served by the member source.
///
/// `parent_id` points at the member this one reports to; `None` means a
/// root of the org chart. `order` positions the member among its siblings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub id: Id<MemberRecord>,
    pub parent_id: Option<Id<MemberRecord>>,
    pub order: i32,
    pub category: MemberCategory,
    pub active: bool,
    pub name: String,
    pub role: Option<String>,
    pub photo_url: Option<String>,
}

impl MemberRecord {
    pub fn create(name: String, category: MemberCategory) -> Self {
        Self {
            id: Id::generate(),
            parent_id: None,
            order: 0,
            category,
            active: true,
            name,
            role: None,
            photo_url: None,
        }
    }
}
