//! Correlation tokens linking an invocation's enter and exit messages
//!
//! A `CallId` is a short random token generated once per invocation. It is a
//! debugging aid, not an identity system: the alphabet and length give
//! 64^6 combinations, and rare collisions are acceptable.

use crate::schema::{ID_ALPHABET, ID_LEN};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Short random identifier for a single instrumented invocation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallId(String);

impl CallId {
    /// Generate a new random CallId from the identifier alphabet
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();
        let bytes = ID_ALPHABET.as_bytes();
        let token: String = (0..ID_LEN)
            .map(|_| bytes[rng.gen_range(0..bytes.len())] as char)
            .collect();
        Self(token)
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for replay in tests)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for CallId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CallId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_id_length_and_alphabet() {
        let id = CallId::new();
        assert_eq!(id.as_str().len(), ID_LEN);
        assert!(id.as_str().chars().all(|c| ID_ALPHABET.contains(c)));
    }

    #[test]
    fn test_call_id_generation_varies() {
        // Collisions are tolerated but should be rare; 16 draws colliding
        // pairwise would indicate a broken generator.
        let ids: Vec<CallId> = (0..16).map(|_| CallId::new()).collect();
        let distinct: std::collections::HashSet<_> =
            ids.iter().map(|id| id.as_str().to_string()).collect();
        assert!(distinct.len() > 1);
    }

    #[test]
    fn test_call_id_display() {
        let id = CallId::new();
        assert_eq!(format!("{}", id), id.as_str());
    }

    #[test]
    fn test_serialization() {
        let id = CallId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CallId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
