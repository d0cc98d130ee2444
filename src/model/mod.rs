pub mod ids;
pub mod member;
pub mod notice;
pub mod press;

// Re-exports for convenience
pub use ids::Id;
pub use member::{MemberCategory, MemberRecord};
pub use notice::NoticeRecord;
pub use press::PressRelease;
