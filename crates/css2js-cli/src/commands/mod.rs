//! Command implementations for the css2js CLI.
//!
//! - [`convert`] - Convert stylesheets into self-injecting JavaScript

pub mod convert;

// Re-export execute functions for convenience
pub use convert::execute as convert_execute;
