//! # Picwiz Library
//!
//! This library exposes the picwiz modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod render;
pub mod session;

// Re-export picwiz_core for convenience
pub use picwiz_core;
