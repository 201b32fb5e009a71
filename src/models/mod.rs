//! Data models

pub mod summary;
pub mod log_entry;

pub use summary::*;
pub use log_entry::*;
