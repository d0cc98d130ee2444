pub mod feed_queries;
pub mod hierarchy_queries;

// Re-exports for convenience
pub use feed_queries::{
    load_feed, select_headline, select_other_notices, NoticeFeed, RequestSequence, RequestTicket,
    DEFAULT_FEED_LIMIT,
};
pub use hierarchy_queries::{build_hierarchy, Anomaly, Hierarchy, MemberNode};
