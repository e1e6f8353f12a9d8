//! Row identifier generator.

use bench_core::Value;
use rand::Rng;
use uuid::Builder;

/// Generate a random version 4 identifier from the provided RNG.
pub fn generate_uuid_v4<R: Rng + ?Sized>(rng: &mut R) -> Value {
    Value::Identifier(Builder::from_random_bytes(rng.random()).into_uuid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;
    use uuid::{Variant, Version};

    #[test]
    fn test_identifiers_are_random_v4() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let id = *generate_uuid_v4(&mut rng).as_uuid().unwrap();
            assert_eq!(id.get_version(), Some(Version::Random));
            assert_eq!(id.get_variant(), Variant::RFC4122);
        }
    }

    #[test]
    fn test_identifiers_fit_key_column() {
        let mut rng = StdRng::seed_from_u64(7);
        let ids: HashSet<String> = (0..1000)
            .map(|_| generate_uuid_v4(&mut rng).as_uuid().unwrap().to_string())
            .collect();

        assert_eq!(ids.len(), 1000);
        assert!(ids.iter().all(|id| id.len() == 36));
    }

    #[test]
    fn test_same_seed_same_identifiers() {
        let mut first = StdRng::seed_from_u64(99);
        let mut second = StdRng::seed_from_u64(99);
        assert_eq!(generate_uuid_v4(&mut first), generate_uuid_v4(&mut second));
    }
}
