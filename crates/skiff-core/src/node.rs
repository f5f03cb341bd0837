//! Node and permission types for files and folders.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags::bitflags! {
    /// Capability flags granted on a node.
    ///
    /// A capability is granted iff its bit is set. The numeric values match
    /// the server's wire format, so the mask round-trips unchanged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Permission: u32 {
        const NONE = 0;
        const READ = 1;
        const UPDATE = 2;
        const CREATE = 4;
        const DELETE = 8;
        const SHARE = 16;
        const ALL = Self::READ.bits()
            | Self::UPDATE.bits()
            | Self::CREATE.bits()
            | Self::DELETE.bits()
            | Self::SHARE.bits();
    }
}

impl Default for Permission {
    fn default() -> Self {
        Permission::NONE
    }
}

// Serialized as the raw bitmask, matching the server's wire format.
impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u32::deserialize(deserializer)?;
        Ok(Permission::from_bits_truncate(bits))
    }
}

/// Whether a node is a file or a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Folder,
}

/// A file or folder entity exposed by the host.
///
/// Everything users browse, select, and act upon is a node. Nodes are
/// supplied by the host and read-only from an action's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Locator used to address the node, e.g. a WebDAV URI.
    pub source: String,

    /// File or folder name shown to the user.
    pub basename: String,

    /// File or folder.
    pub kind: NodeKind,

    /// Capability flags granted on this node.
    #[serde(default)]
    pub permissions: Permission,

    /// MIME type, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,

    /// Entity tag reported by the server, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    /// Arbitrary data for actions to consume.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<serde_json::Value>,
}

impl Node {
    /// Create a new node with required fields.
    ///
    /// Permissions default to [`Permission::NONE`]; the host fills in the
    /// granted mask before handing the node to actions.
    pub fn new(source: impl Into<String>, basename: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            source: source.into(),
            basename: basename.into(),
            kind,
            permissions: Permission::NONE,
            mime: None,
            etag: None,
            attributes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_wire_values() {
        assert_eq!(Permission::READ.bits(), 1);
        assert_eq!(Permission::UPDATE.bits(), 2);
        assert_eq!(Permission::CREATE.bits(), 4);
        assert_eq!(Permission::DELETE.bits(), 8);
        assert_eq!(Permission::SHARE.bits(), 16);
        assert_eq!(Permission::ALL.bits(), 31);
    }

    #[test]
    fn test_permission_contains() {
        let mask = Permission::READ | Permission::DELETE;
        assert!(mask.contains(Permission::DELETE));
        assert!(!mask.contains(Permission::SHARE));
        assert!(!Permission::NONE.contains(Permission::DELETE));
    }

    #[test]
    fn test_permission_serde_as_bits() {
        let json = serde_json::to_string(&(Permission::READ | Permission::DELETE)).unwrap();
        assert_eq!(json, "9");

        let mask: Permission = serde_json::from_str("31").unwrap();
        assert_eq!(mask, Permission::ALL);

        // Unknown bits from a newer server are dropped, not an error.
        let mask: Permission = serde_json::from_str("63").unwrap();
        assert_eq!(mask, Permission::ALL);
    }

    #[test]
    fn test_node_new_defaults() {
        let node = Node::new("dav://files/admin/doc.txt", "doc.txt", NodeKind::File);
        assert_eq!(node.permissions, Permission::NONE);
        assert!(node.mime.is_none());
        assert!(node.etag.is_none());
        assert!(node.attributes.is_none());
    }
}
