//! # Random Sources
//!
//! Injectable randomness for generation, reward rolls, hazards and market
//! prices.
//!
//! Every random decision in the game goes through [`RandomSource`]. Any
//! `rand` generator works out of the box; [`ScriptedRandom`] replays a fixed
//! script so tests can force specific branches.

use rand::{Rng, RngCore};
use std::collections::VecDeque;

/// Source of the three kinds of draws the game makes.
pub trait RandomSource {
    /// Returns true with the given probability (clamped to `0.0..=1.0`).
    fn roll(&mut self, probability: f64) -> bool;

    /// Picks a uniformly distributed integer in `low..=high`.
    ///
    /// Returns `low` when the range is empty.
    fn pick(&mut self, low: i32, high: i32) -> i32;

    /// Draws a uniformly distributed float in `low..high`.
    ///
    /// Returns `low` when the range is empty.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

impl<R: RngCore> RandomSource for R {
    fn roll(&mut self, probability: f64) -> bool {
        let probability = probability.clamp(0.0, 1.0);
        self.gen::<f64>() < probability
    }

    fn pick(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.gen_range(low..=high)
    }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        self.gen_range(low..high)
    }
}

/// Replays queued draws in order.
///
/// Each kind of draw has its own queue. When a queue runs dry the source
/// answers `false` for rolls and the lower bound for picks and uniforms.
/// Scripted picks and uniforms are clamped into the requested range.
///
/// # Examples
///
/// ```
/// use miner::{RandomSource, ScriptedRandom};
///
/// let mut rng = ScriptedRandom::new().with_rolls([true]).with_picks([4]);
/// assert!(rng.roll(0.05));
/// assert_eq!(rng.pick(1, 6), 4);
/// assert!(!rng.roll(1.0));
/// assert_eq!(rng.pick(1, 6), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    rolls: VecDeque<bool>,
    picks: VecDeque<i32>,
    uniforms: VecDeque<f64>,
}

impl ScriptedRandom {
    /// Creates a source with empty queues.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends roll results.
    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = bool>) -> Self {
        self.rolls.extend(rolls);
        self
    }

    /// Appends integer picks.
    pub fn with_picks(mut self, picks: impl IntoIterator<Item = i32>) -> Self {
        self.picks.extend(picks);
        self
    }

    /// Appends float draws.
    pub fn with_uniforms(mut self, uniforms: impl IntoIterator<Item = f64>) -> Self {
        self.uniforms.extend(uniforms);
        self
    }

    /// Number of queued draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.rolls.len() + self.picks.len() + self.uniforms.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn roll(&mut self, _probability: f64) -> bool {
        self.rolls.pop_front().unwrap_or(false)
    }

    fn pick(&mut self, low: i32, high: i32) -> i32 {
        let high = high.max(low);
        self.picks
            .pop_front()
            .map_or(low, |value| value.clamp(low, high))
    }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let high = high.max(low);
        self.uniforms
            .pop_front()
            .map_or(low, |value| value.clamp(low, high))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_std_rng_pick_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let value = rng.pick(1, 6);
            assert!((1..=6).contains(&value));
        }
    }

    #[test]
    fn test_roll_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(rng.roll(1.0));
            assert!(!rng.roll(0.0));
            assert!(rng.roll(2.5));
        }
    }

    #[test]
    fn test_empty_ranges_return_low() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(rng.pick(5, 5), 5);
        assert_eq!(rng.pick(5, 2), 5);
        assert_eq!(rng.uniform(3.0, 3.0), 3.0);
    }

    #[test]
    fn test_seeded_sources_repeat() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..50 {
            assert_eq!(a.pick(0, 1000), b.pick(0, 1000));
        }
    }

    #[test]
    fn test_scripted_fallbacks_and_clamping() {
        let mut rng = ScriptedRandom::new()
            .with_picks([42, -3])
            .with_uniforms([300.0]);
        assert_eq!(rng.remaining(), 3);
        assert_eq!(rng.pick(1, 6), 6);
        assert_eq!(rng.pick(1, 6), 1);
        assert_eq!(rng.uniform(225.0, 279.0), 279.0);
        assert_eq!(rng.uniform(9.0, 20.0), 9.0);
        assert!(!rng.roll(1.0));
        assert_eq!(rng.remaining(), 0);
    }
}
