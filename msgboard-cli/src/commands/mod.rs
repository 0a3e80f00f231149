//! Command implementations for msgboard CLI

pub mod messages;
pub mod serve;

// Re-export dispatcher functions for flat access from main.rs
pub use messages::{run_list, run_post};
pub use serve::run_serve;
