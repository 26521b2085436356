use axum::response::sse::Event;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Largest value a `RandomNumber` can carry (inclusive).
pub const MAX_RANDOM: u8 = 99;

/// Payload of a single stream frame, serialized as `{"random":N}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomNumber {
    pub random: u8,
}

impl RandomNumber {
    /// Draws a value uniformly from `0..=MAX_RANDOM`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            random: rng.gen_range(0..=MAX_RANDOM),
        }
    }

    /// Encodes the message as a bare `data:` SSE event (no `event:` or `id:` field).
    pub fn to_event(&self) -> Result<Event, serde_json::Error> {
        let data = serde_json::to_string(self)?;
        Ok(Event::default().data(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..10_000 {
            let message = RandomNumber::generate(&mut rng);
            assert!(message.random <= MAX_RANDOM);
        }
    }

    #[test]
    fn test_generated_values_cover_both_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let values: Vec<u8> = (0..10_000)
            .map(|_| RandomNumber::generate(&mut rng).random)
            .collect();

        assert!(values.contains(&0), "0 should be reachable");
        assert!(values.contains(&MAX_RANDOM), "99 should be reachable");
    }

    #[test]
    fn test_serializes_as_single_random_field() {
        let json = serde_json::to_string(&RandomNumber { random: 42 }).unwrap();
        assert_eq!(json, r#"{"random":42}"#);
    }

    #[test]
    fn test_deserializes_spaced_payload() {
        let message: RandomNumber = serde_json::from_str(r#"{"random": 7}"#).unwrap();
        assert_eq!(message, RandomNumber { random: 7 });
    }

    #[test]
    fn test_to_event_succeeds() {
        assert!(RandomNumber { random: 0 }.to_event().is_ok());
    }
}
