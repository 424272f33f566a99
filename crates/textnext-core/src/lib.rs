pub mod config;
pub mod error;
pub mod search;
pub mod session;

// Re-export common error type
pub use error::{RecordShapeError, SearchError};
