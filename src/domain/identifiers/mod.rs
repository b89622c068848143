pub mod validation;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::AppError;
use crate::impl_validated_id;

/// A validated manifest identifier (integration provider, feature, or base template).
///
/// Guarantees:
/// - Non-empty
/// - Contains only alphanumeric characters, `-`, `_`, or `.`
/// - No path traversal components
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ManifestId(String);

impl_validated_id!(ManifestId, true, AppError::InvalidManifestId);

impl Serialize for ManifestId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ManifestId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ManifestId::new(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_manifest_ids() {
        assert!(ManifestId::new("stripe").is_ok());
        assert!(ManifestId::new("supabase-auth").is_ok());
        assert!(ManifestId::new("nextjs.v14").is_ok());
    }

    #[test]
    fn path_like_ids_are_rejected() {
        assert!(matches!(ManifestId::new("../stripe"), Err(AppError::InvalidManifestId(_))));
        assert!(ManifestId::new("payments/stripe").is_err());
        assert!(ManifestId::new("").is_err());
    }

    #[test]
    fn deserializes_through_validation() {
        let id: ManifestId = serde_json::from_str("\"clerk\"").unwrap();
        assert_eq!(id.as_str(), "clerk");
        assert!(serde_json::from_str::<ManifestId>("\"bad id\"").is_err());
    }
}
