//! Capability tier of the running hdoc binary.
//!
//! The tier is recorded once by the loader and read by the serializers to
//! decide whether documentation may be written to the local disk.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which build of hdoc is running.
///
/// Tier-gated behaviour is written as exhaustive `match`es; a new variant must
/// be handled at every gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryType {
    /// Locally compiled (or Enterprise) build, able to save documentation to disk.
    #[default]
    Full,
    /// The free precompiled "hdoc-online" build; output is uploaded, never saved.
    Online,
    /// Internal server-side build.
    Server,
}

impl BinaryType {
    /// Returns `true` if this tier is permitted to write output to local disk.
    pub fn can_save_locally(self) -> bool {
        match self {
            BinaryType::Full => true,
            BinaryType::Online | BinaryType::Server => false,
        }
    }
}

impl fmt::Display for BinaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BinaryType::Full => "full",
            BinaryType::Online => "online",
            BinaryType::Server => "server",
        };
        f.write_str(name)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tier_is_full() {
        assert_eq!(BinaryType::default(), BinaryType::Full);
    }

    #[test]
    fn test_only_full_tier_can_save_locally() {
        assert!(BinaryType::Full.can_save_locally());
        assert!(!BinaryType::Online.can_save_locally());
        assert!(!BinaryType::Server.can_save_locally());
    }

    #[test]
    fn test_display_uses_lowercase_names() {
        assert_eq!(BinaryType::Full.to_string(), "full");
        assert_eq!(BinaryType::Online.to_string(), "online");
        assert_eq!(BinaryType::Server.to_string(), "server");
    }

    #[test]
    fn test_serializes_as_lowercase_string() {
        // Arrange / Act
        let json = serde_json::to_value(BinaryType::Online).expect("serialize");

        // Assert
        assert_eq!(json, "online");
    }

    #[test]
    fn test_deserializes_from_lowercase_string() {
        let tier: BinaryType = serde_json::from_str("\"server\"").expect("deserialize");
        assert_eq!(tier, BinaryType::Server);
    }

    #[test]
    fn test_rejects_unknown_tier_name() {
        // The tier set is closed; an open string must not sneak through.
        let result: Result<BinaryType, _> = serde_json::from_str("\"enterprise\"");
        assert!(result.is_err());
    }
}
