//! Comparison execution.

use super::config::CompareConfig;
use super::types::{Comparison, ScenarioReport};
use crate::error::SelectError;
use crate::exhaustive::ExhaustiveRunner;
use crate::greedy::GreedyRunner;
use crate::interval::Interval;
use crate::synthetic::{ScenarioConfig, ScenarioGenerator};
use log::{info, warn};

/// Runs both selectors and collects their timed results.
///
/// # Usage
///
/// ```
/// use u_activity_select::compare::{CompareConfig, ComparisonRunner};
/// use u_activity_select::synthetic::{Scenario, ScenarioConfig};
///
/// let scenario = ScenarioConfig::new(Scenario::Random).with_size(12).with_seed(42);
/// let report = ComparisonRunner::run_scenario(&scenario, &CompareConfig::default()).unwrap();
/// assert_eq!(report.comparison.counts_agree(), Some(true));
/// ```
pub struct ComparisonRunner;

impl ComparisonRunner {
    /// Runs greedy, then exhaustive if the input is within
    /// `config.exhaustive_limit`.
    ///
    /// # Errors
    ///
    /// - [`SelectError::InvalidConfig`] if `config` fails validation.
    /// - [`SelectError::DegenerateInterval`] if an interval has
    ///   `end < start`, or `end == start` while `config.reject_degenerate`
    ///   is set.
    pub fn run<T: Copy + Ord>(
        intervals: &[Interval<T>],
        config: &CompareConfig,
    ) -> Result<Comparison<T>, SelectError> {
        config.validate()?;

        let greedy = GreedyRunner::run(intervals, &config.greedy())?;

        let exhaustive = if intervals.len() <= config.exhaustive_limit {
            Some(ExhaustiveRunner::run(intervals, &config.exhaustive())?)
        } else {
            warn!(
                "skipping exhaustive search: {} intervals exceeds limit {}",
                intervals.len(),
                config.exhaustive_limit
            );
            None
        };

        let comparison = Comparison {
            input_len: intervals.len(),
            greedy,
            exhaustive,
        };

        if comparison.counts_agree() == Some(false) {
            warn!(
                "selectors disagree on {} intervals: greedy {}, exhaustive {:?}",
                comparison.input_len,
                comparison.greedy.len(),
                comparison.exhaustive.as_ref().map(|r| r.len())
            );
        }

        Ok(comparison)
    }

    /// Generates the scenario's input and compares both selectors on it.
    pub fn run_scenario(
        scenario: &ScenarioConfig,
        config: &CompareConfig,
    ) -> Result<ScenarioReport, SelectError> {
        let set = ScenarioGenerator::generate(scenario)?;
        let comparison = Self::run(&set.intervals, config)?;

        info!(
            "scenario {}: {} intervals, greedy {} in {:.3} ms",
            scenario.scenario,
            comparison.input_len,
            comparison.greedy.len(),
            comparison.greedy.elapsed_ms()
        );

        Ok(ScenarioReport {
            scenario: scenario.scenario,
            size: scenario.size,
            seed: set.seed,
            comparison,
        })
    }

    /// Runs every scenario independently. Results keep the input order.
    ///
    /// With the `parallel` feature and `config.parallel` set, scenarios are
    /// spread over the rayon thread pool.
    pub fn run_batch(
        scenarios: &[ScenarioConfig],
        config: &CompareConfig,
    ) -> Vec<Result<ScenarioReport, SelectError>> {
        if config.parallel {
            #[cfg(feature = "parallel")]
            {
                use rayon::prelude::*;
                return scenarios
                    .par_iter()
                    .map(|sc| Self::run_scenario(sc, config))
                    .collect();
            }
            #[cfg(not(feature = "parallel"))]
            log::debug!(
                "parallel batch requested without the `parallel` feature; running sequentially"
            );
        }

        scenarios
            .iter()
            .map(|sc| Self::run_scenario(sc, config))
            .collect()
    }
}
