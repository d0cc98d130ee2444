pub mod member_source;
pub mod notice_source;
pub mod press_source;
pub mod suppression_store;

pub use member_source::{MemberSource, MemoryMemberSource};
pub use notice_source::{MemoryNoticeSource, NoticeFilter, NoticeSource};
pub use press_source::{MemoryPressReleaseSource, PressReleaseFilter, PressReleaseSource};
pub use suppression_store::{MemoryStore, SuppressionStore};
