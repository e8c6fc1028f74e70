// Identifier generation module

use uuid::Uuid;

/// Source of unique item identifiers.
///
/// Abstracted behind a trait so tests can substitute a deterministic
/// sequence for the random production scheme.
pub trait IdGenerator: Send + Sync {
    /// Produce a fresh identifier, unique across calls.
    fn generate(&self) -> String;
}

/// Production generator backed by random UUID v4 values
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_ids_are_unique_and_non_empty() {
        let ids = UuidGenerator;
        let a = ids.generate();
        let b = ids.generate();

        assert!(!a.is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn test_uuid_ids_never_collide_with_sentinels() {
        let ids = UuidGenerator;
        for _ in 0..100 {
            let id = ids.generate();
            assert_ne!(id, "");
            assert_ne!(id, "0");
        }
    }
}
