//! Configuration module for Venn
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::VennPaths;
pub use settings::Settings;
