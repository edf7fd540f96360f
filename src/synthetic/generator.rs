//! Interval set construction.

use super::config::{Scenario, ScenarioConfig};
use crate::error::SelectError;
use crate::interval::Interval;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLE: [(i64, i64); 6] = [(1, 3), (2, 5), (4, 6), (6, 7), (5, 9), (8, 10)];

/// A generated input set together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratedSet {
    /// The intervals, in generation order.
    pub intervals: Vec<Interval<i64>>,

    /// Seed actually used, so unseeded runs can be replayed.
    pub seed: u64,
}

/// Builds interval sets from a [`ScenarioConfig`].
pub struct ScenarioGenerator;

impl ScenarioGenerator {
    /// Generates the interval set described by `config`.
    ///
    /// # Errors
    ///
    /// [`SelectError::InvalidConfig`] if `config` fails validation.
    pub fn generate(config: &ScenarioConfig) -> Result<GeneratedSet, SelectError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        // Checked by validate().
        let n = config.size as i64;

        let intervals: Vec<Interval<i64>> = match config.scenario {
            Scenario::Random => (0..n)
                .map(|_| {
                    let start = rng.random_range(0..config.horizon);
                    let duration = rng.random_range(1..=config.max_duration);
                    Interval::new(start, start + duration)
                })
                .collect(),
            Scenario::Sample => SAMPLE.into_iter().map(Interval::from).collect(),
            Scenario::AllOverlapping => (0..n).map(|_| Interval::new(0, 100)).collect(),
            Scenario::AllDisjoint => (0..n).map(|i| Interval::new(i * 10, i * 10 + 5)).collect(),
            Scenario::SharedStart => (0..n).map(|i| Interval::new(0, i + 1)).collect(),
            Scenario::SharedEnd => (0..n).map(|i| Interval::new(i, n)).collect(),
        };

        debug!(
            "generated {} intervals for scenario {} (seed {seed})",
            intervals.len(),
            config.scenario
        );

        Ok(GeneratedSet { intervals, seed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(scenario: Scenario, size: usize) -> Vec<Interval<i64>> {
        let config = ScenarioConfig::new(scenario).with_size(size).with_seed(42);
        ScenarioGenerator::generate(&config).unwrap().intervals
    }

    #[test]
    fn test_random_within_bounds() {
        let config = ScenarioConfig::new(Scenario::Random)
            .with_size(500)
            .with_seed(42)
            .with_horizon(50)
            .with_max_duration(5);
        let set = ScenarioGenerator::generate(&config).unwrap();
        assert_eq!(set.intervals.len(), 500);
        assert_eq!(set.seed, 42);
        for iv in &set.intervals {
            assert!((0..50).contains(&iv.start()));
            let duration = iv.end() - iv.start();
            assert!((1..=5).contains(&duration), "duration {duration}");
        }
    }

    #[test]
    fn test_random_reproducible() {
        let config = ScenarioConfig::new(Scenario::Random).with_size(64).with_seed(7);
        let a = ScenarioGenerator::generate(&config).unwrap();
        let b = ScenarioGenerator::generate(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unseeded_reports_seed() {
        let config = ScenarioConfig::new(Scenario::Random).with_size(32);
        let first = ScenarioGenerator::generate(&config).unwrap();
        let replay = ScenarioGenerator::generate(&config.clone().with_seed(first.seed)).unwrap();
        assert_eq!(first.intervals, replay.intervals);
    }

    #[test]
    fn test_sample_ignores_size() {
        let set = generate(Scenario::Sample, 1000);
        assert_eq!(set.len(), 6);
        assert_eq!(set[0], Interval::new(1, 3));
    }

    #[test]
    fn test_structured_shapes() {
        assert!(generate(Scenario::AllOverlapping, 100)
            .iter()
            .all(|iv| *iv == Interval::new(0, 100)));

        let disjoint = generate(Scenario::AllDisjoint, 100);
        assert_eq!(disjoint[99], Interval::new(990, 995));

        let shared_start = generate(Scenario::SharedStart, 100);
        assert_eq!(shared_start[0], Interval::new(0, 1));
        assert_eq!(shared_start[99], Interval::new(0, 100));

        let shared_end = generate(Scenario::SharedEnd, 100);
        assert!(shared_end.iter().all(|iv| iv.end() == 100));
        assert_eq!(shared_end[99], Interval::new(99, 100));
    }

    #[test]
    fn test_all_well_formed() {
        for sc in Scenario::ALL {
            assert!(generate(sc, 50).iter().all(|iv| iv.is_well_formed()), "{sc}");
        }
    }

    #[test]
    fn test_overflowing_bounds_rejected_before_generation() {
        let config = ScenarioConfig::new(Scenario::Random)
            .with_horizon(i64::MAX)
            .with_max_duration(i64::MAX)
            .with_seed(1);
        assert!(matches!(
            ScenarioGenerator::generate(&config),
            Err(SelectError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_extreme_bounds_generate() {
        let config = ScenarioConfig::new(Scenario::Random)
            .with_size(64)
            .with_horizon(i64::MAX)
            .with_max_duration(1)
            .with_seed(1);
        let set = ScenarioGenerator::generate(&config).unwrap();
        assert!(set.intervals.iter().all(|iv| iv.is_well_formed()));
    }

    #[test]
    fn test_invalid_config() {
        let config = ScenarioConfig::default().with_horizon(-1);
        assert!(matches!(
            ScenarioGenerator::generate(&config),
            Err(SelectError::InvalidConfig(_))
        ));
    }
}
