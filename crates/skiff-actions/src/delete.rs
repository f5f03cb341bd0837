//! The delete action.
//!
//! Deletes the selected nodes on the storage server and announces each
//! removal on the event bus. Failures never escape the action: they are
//! logged and reported as a `false` outcome for the affected node.

use std::sync::Arc;

use async_trait::async_trait;
use skiff_action_api::{EventBus, FileAction, FsEvent, L10n};
use skiff_core::{Node, Permission, View};
use skiff_dav::{DavClient, DavError};

use crate::icons;

/// Transport used to delete a node's remote resource.
///
/// Narrow seam over the WebDAV client so tests can substitute transports.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeleteBackend: Send + Sync {
    /// Delete the resource behind `node.source`.
    async fn delete_node(&self, node: &Node) -> Result<(), DavError>;
}

#[async_trait]
impl DeleteBackend for DavClient {
    async fn delete_node(&self, node: &Node) -> Result<(), DavError> {
        self.delete(&node.source).await
    }
}

/// The built-in delete action.
///
/// Enabled only when every selected node grants the DELETE capability.
/// In the trash view the label switches to the permanent-delete wording.
pub struct DeleteAction {
    backend: Arc<dyn DeleteBackend>,
    events: EventBus,
    l10n: Arc<L10n>,
}

impl DeleteAction {
    /// Action id within the registry.
    pub const ID: &'static str = "delete";

    /// Create the action with its collaborators.
    pub fn new(backend: Arc<dyn DeleteBackend>, events: EventBus, l10n: Arc<L10n>) -> Self {
        Self {
            backend,
            events,
            l10n,
        }
    }
}

#[async_trait]
impl FileAction for DeleteAction {
    fn id(&self) -> &str {
        Self::ID
    }

    fn display_name(&self, _nodes: &[Node], view: &View) -> String {
        if view.is_trashbin() {
            self.l10n.t("files_trashbin", "Delete permanently")
        } else {
            self.l10n.t("files", "Delete")
        }
    }

    fn icon_svg_inline(&self) -> &str {
        icons::TRASH_CAN
    }

    fn enabled(&self, nodes: &[Node]) -> bool {
        !nodes.is_empty()
            && nodes
                .iter()
                .all(|node| node.permissions.contains(Permission::DELETE))
    }

    fn order(&self) -> i32 {
        100
    }

    fn destructive(&self) -> bool {
        true
    }

    async fn exec(&self, node: &Node) -> bool {
        match self.backend.delete_node(node).await {
            Ok(()) => {
                // Announce the removal even when the server moved the node
                // to the trash: it is gone from the current view either way,
                // and the trash view reloads on entry.
                self.events.emit(FsEvent::NodeDeleted { node: node.clone() });
                true
            }
            Err(error) => {
                tracing::error!(
                    %error,
                    source = %node.source,
                    node = ?node,
                    "Error while deleting a file"
                );
                false
            }
        }
    }
}
