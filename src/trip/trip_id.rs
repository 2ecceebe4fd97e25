//! Decorative trip identifiers.

use std::fmt;

use rand::Rng;
use serde::Serialize;

const MIN_TRIP_ID: u32 = 10_000;
const MAX_TRIP_ID: u32 = 99_999;

/// Random 5-digit trip number. Not unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TripId(String);

impl TripId {
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    pub fn generate_with<R: Rng>(rng: &mut R) -> Self {
        TripId(rng.gen_range(MIN_TRIP_ID..=MAX_TRIP_ID).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_trip_id_is_five_digits_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let id = TripId::generate_with(&mut rng);
            assert_eq!(id.as_str().len(), 5);
            assert!(id.as_str().chars().all(|c| c.is_ascii_digit()));

            let value: u32 = id.as_str().parse().unwrap();
            assert!((MIN_TRIP_ID..=MAX_TRIP_ID).contains(&value));
        }
    }

    #[test]
    fn test_thread_rng_generation() {
        let id = TripId::generate();
        assert_eq!(id.to_string().len(), 5);
    }
}
