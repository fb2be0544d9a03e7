//! Newtype ID for type-safe catalog item references.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a catalog item.
///
/// Item IDs come from the catalog as opaque strings; wrapping them keeps
/// them from being mixed up with item names or other string fields. Unique
/// within a wishlist and within a cart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create an `ItemId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_transparently() {
        let id = ItemId::new("ring-01");
        let json = serde_json::to_string(&id).expect("should serialize");
        assert_eq!(json, "\"ring-01\"");

        let back: ItemId = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(back, id);
    }
}
