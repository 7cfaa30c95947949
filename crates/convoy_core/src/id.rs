use rand::Rng;
use uuid::Uuid;

/// v4-format UUID built from the seeded RNG, so replays get the same ids.
pub fn seeded_uuid(rng: &mut impl Rng) -> Uuid {
    let bytes: [u8; 16] = rng.gen();
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

/// Id for a finished run, e.g. a leaderboard entry.
pub fn run_id(rng: &mut impl Rng) -> String {
    format!("run_{}", seeded_uuid(rng).simple())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn same_seed_same_id() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        let id = seeded_uuid(&mut a);
        assert_eq!(id, seeded_uuid(&mut b));
        assert_eq!(id.get_version(), Some(uuid::Version::Random));
    }

    #[test]
    fn run_ids_are_prefixed_and_distinct() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let first = run_id(&mut rng);
        let second = run_id(&mut rng);
        assert!(first.starts_with("run_"));
        assert_eq!(first.len(), "run_".len() + 32);
        assert_ne!(first, second);
    }
}
