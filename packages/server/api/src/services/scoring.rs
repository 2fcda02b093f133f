use rand::Rng;

/// Larger values bend the curve harder.
pub const DECAY_FACTOR: f64 = 0.2;
pub const SCORE_FLOOR: f64 = 0.6;
pub const SCORE_SPAN: f64 = 0.6;

/// Produces a risk score for submitted contract source.
///
/// This is the seam where a real predictor would plug in. The only
/// implementation today does not look at the code at all.
pub trait RiskScorer: Send + Sync {
    fn score(&self, code: &str) -> anyhow::Result<f64>;
}

/// Maps a uniform draw `u` in `[0, 1)` onto `[0.6, 1.2)` with an
/// exponential-decay weighting.
pub fn weighted_score(u: f64) -> f64 {
    SCORE_FLOOR + SCORE_SPAN * (1.0 - (-DECAY_FACTOR * u).exp())
}

/// Fresh, unseeded draw on every call. Not a function of the input.
#[derive(Debug, Default, Clone, Copy)]
pub struct WeightedRandomScorer;

impl WeightedRandomScorer {
    pub fn new() -> Self {
        Self
    }
}

impl RiskScorer for WeightedRandomScorer {
    fn score(&self, _code: &str) -> anyhow::Result<f64> {
        let u: f64 = rand::thread_rng().gen();
        Ok(weighted_score(u))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_score_floor() {
        assert_eq!(weighted_score(0.0), SCORE_FLOOR);
    }

    #[test]
    fn test_weighted_score_monotonic_and_bounded() {
        let ceiling = SCORE_FLOOR + SCORE_SPAN * (1.0 - (-DECAY_FACTOR).exp());
        let mut prev = weighted_score(0.0);
        for i in 1..1000 {
            let s = weighted_score(i as f64 / 1000.0);
            assert!(s > prev, "not increasing at step {}", i);
            assert!(s < ceiling);
            prev = s;
        }
        assert!(ceiling < SCORE_FLOOR + SCORE_SPAN);
    }

    #[test]
    fn test_random_scorer_in_range() {
        let scorer = WeightedRandomScorer::new();
        for _ in 0..1000 {
            let s = scorer.score("pragma solidity ^0.8.0;").unwrap();
            assert!((0.6..1.2).contains(&s), "score {} out of range", s);
        }
    }
}
