pub mod error;
pub mod model;
pub mod ops;
pub mod queries;
pub mod source;
