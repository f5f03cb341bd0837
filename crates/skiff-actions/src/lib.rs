//! Built-in file actions for the skiff file manager.
//!
//! Each action implements [`skiff_action_api::FileAction`] and is handed to
//! the host's registry once at startup via [`register_builtin_actions`].

pub mod delete;
pub mod icons;

use std::sync::Arc;

use skiff_action_api::{ActionRegistry, ActionRegistryError, EventBus, L10n};

pub use delete::{DeleteAction, DeleteBackend};

/// Register every built-in action.
///
/// Called by the host once at startup, before the registry is handed to
/// the dispatcher.
pub fn register_builtin_actions(
    registry: &ActionRegistry,
    backend: Arc<dyn DeleteBackend>,
    events: EventBus,
    l10n: Arc<L10n>,
) -> Result<(), ActionRegistryError> {
    registry.register(Arc::new(DeleteAction::new(backend, events, l10n)))
}
