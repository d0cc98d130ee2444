pub mod overlay_ops;

// Re-exports for convenience
pub use overlay_ops::{
    suppression_key, OverlayGate, OverlayState, DEFAULT_SUPPRESSION_WINDOW_HOURS,
};
