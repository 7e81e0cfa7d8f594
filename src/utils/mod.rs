//! Utility functions shared by the CLI
//!
//! - [`app_data`] - Configuration file handling
//! - [`progress`] - Progress bars (no-op without the `progress` feature)
//! - [`input`] - Reading the input text

pub mod app_data;
pub mod input;
pub mod progress;

pub use app_data::*;
pub use input::*;
pub use progress::*;
