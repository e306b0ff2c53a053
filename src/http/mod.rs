//! HTTP protocol layer module
//!
//! Response-building helpers shared by all handlers.

pub mod response;

// Re-export commonly used builders
pub use response::{build_404_response, build_500_response, build_text_response};
