// Utility functions
pub mod document;
pub mod error;
pub mod time;

pub use document::*;
pub use error::*;
pub use time::*;
