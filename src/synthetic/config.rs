//! Scenario selection and generator parameters.

use std::fmt;
use std::str::FromStr;

/// Shape of a generated interval set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scenario {
    /// Uniform random starts in `[0, horizon)` and durations in
    /// `[1, max_duration]`.
    Random,

    /// The fixed six-interval textbook set; `size` is ignored.
    Sample,

    /// `size` copies of `(0, 100)`. Optimum is 1.
    AllOverlapping,

    /// `(i*10, i*10 + 5)`. Optimum is `size`.
    AllDisjoint,

    /// `(0, i + 1)`. Optimum is 1, the shortest one.
    SharedStart,

    /// `(i, size)`. Optimum is 1.
    SharedEnd,
}

impl Scenario {
    /// Every scenario, in reporting order.
    pub const ALL: [Scenario; 6] = [
        Scenario::Random,
        Scenario::Sample,
        Scenario::AllOverlapping,
        Scenario::AllDisjoint,
        Scenario::SharedStart,
        Scenario::SharedEnd,
    ];

    /// Kebab-case name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Random => "random",
            Scenario::Sample => "sample",
            Scenario::AllOverlapping => "all-overlapping",
            Scenario::AllDisjoint => "all-disjoint",
            Scenario::SharedStart => "shared-start",
            Scenario::SharedEnd => "shared-end",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|sc| sc.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<&str> = Scenario::ALL.iter().map(|sc| sc.name()).collect();
                format!("unknown scenario '{s}', expected one of: {}", names.join(", "))
            })
    }
}

/// Parameters for [`ScenarioGenerator`](super::ScenarioGenerator).
///
/// # Examples
///
/// ```
/// use u_activity_select::synthetic::{Scenario, ScenarioConfig};
///
/// let config = ScenarioConfig::new(Scenario::Random)
///     .with_size(16)
///     .with_seed(7)
///     .with_horizon(200)
///     .with_max_duration(30);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioConfig {
    /// Which recipe to use.
    pub scenario: Scenario,

    /// Number of intervals to produce (ignored by [`Scenario::Sample`]).
    pub size: usize,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,

    /// Exclusive upper bound for random start times.
    pub horizon: i64,

    /// Largest random duration.
    pub max_duration: i64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            scenario: Scenario::Random,
            size: 20,
            seed: None,
            horizon: 100,
            max_duration: 20,
        }
    }
}

impl ScenarioConfig {
    /// Default parameters for the given scenario.
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            ..Self::default()
        }
    }

    /// Sets the number of intervals to produce.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the exclusive upper bound for random start times.
    pub fn with_horizon(mut self, horizon: i64) -> Self {
        self.horizon = horizon;
        self
    }

    /// Sets the largest random duration.
    pub fn with_max_duration(mut self, max_duration: i64) -> Self {
        self.max_duration = max_duration;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.horizon <= 0 {
            return Err(format!("horizon must be positive, got {}", self.horizon));
        }
        if self.max_duration < 1 {
            return Err(format!(
                "max_duration must be at least 1, got {}",
                self.max_duration
            ));
        }
        if (self.horizon - 1).checked_add(self.max_duration).is_none() {
            return Err(format!(
                "horizon {} plus max_duration {} overflows i64",
                self.horizon, self.max_duration
            ));
        }
        // Structured scenarios scale coordinates with the index.
        if i64::try_from(self.size).map_or(true, |n| n > i64::MAX / 10) {
            return Err(format!("size {} is too large", self.size));
        }
        Ok(())
    }
}
