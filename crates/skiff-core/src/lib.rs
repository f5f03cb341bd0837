//! Core types for the skiff file manager.
//!
//! This crate contains shared data structures that are used across all skiff crates:
//! - Node and permission types for files and folders
//! - View types for browsing contexts
//! - Configuration types
//! - Error types

mod config;
mod error;
mod node;
mod view;

pub use config::{config_dir, config_path, AppConfig, DavConfig};
pub use error::ConfigError;
pub use node::{Node, NodeKind, Permission};
pub use view::{View, TRASHBIN_VIEW_ID};
