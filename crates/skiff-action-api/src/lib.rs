//! Action API for the skiff file manager.
//!
//! This crate provides the contract between the host and file actions:
//! - The [`FileAction`] trait every action implements
//! - The [`ActionRegistry`] the host enumerates and dispatches from
//! - The [`EventBus`] actions use to announce node changes
//! - The [`L10n`] lookup actions use for user-facing labels

pub mod action;
pub mod events;
pub mod l10n;
pub mod registry;

pub use action::FileAction;
pub use events::{EventBus, FsEvent, FILES_NODE_DELETED};
pub use l10n::{Catalog, L10n};
pub use registry::{ActionRegistry, ActionRegistryError};

// Re-export skiff_core types for convenience
pub use skiff_core::{Node, NodeKind, Permission, View};
