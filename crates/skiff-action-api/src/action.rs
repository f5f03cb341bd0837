//! The file-action contract.
//!
//! A file action bundles metadata and behavior for one user-invocable
//! operation. Control flow is host-driven: the host enumerates candidate
//! nodes, asks each registered action whether it is enabled for them, and
//! calls the single-node or batch entry point when the user triggers it.

use async_trait::async_trait;
use futures::future::join_all;
use skiff_core::{Node, View};

/// A user-invocable operation on one or more nodes.
///
/// Implementations are immutable after construction and registered once at
/// startup; the registry hands out shared references for the process
/// lifetime.
#[async_trait]
pub trait FileAction: Send + Sync {
    /// Stable unique identifier within the registry.
    fn id(&self) -> &str;

    /// User-facing label for the current selection and view.
    ///
    /// Must be pure: no I/O, no side effects.
    fn display_name(&self, nodes: &[Node], view: &View) -> String;

    /// Inline SVG payload for the action's icon.
    fn icon_svg_inline(&self) -> &str;

    /// Whether the action applies to the given selection.
    ///
    /// The selection may be empty; implementations decide what that means
    /// for them.
    fn enabled(&self, _nodes: &[Node]) -> bool {
        true
    }

    /// Sort key among applicable actions. Lower comes first.
    fn order(&self) -> i32 {
        0
    }

    /// Whether the action destroys data. Hosts may render it differently.
    fn destructive(&self) -> bool {
        false
    }

    /// Run the action on a single node.
    ///
    /// Returns `true` on success and `false` on handled failure. Must not
    /// panic; failures are reported through the return value.
    async fn exec(&self, node: &Node) -> bool;

    /// Run the action on every node of a selection.
    ///
    /// All per-node executions are started up front and awaited together;
    /// the outcome vector matches the input order. One node's failure does
    /// not affect any other node, and there is no early cancellation.
    async fn exec_batch(&self, nodes: &[Node], _view: &View) -> Vec<bool> {
        join_all(nodes.iter().map(|node| self.exec(node))).await
    }
}
