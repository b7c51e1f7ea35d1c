//! Harness configuration.

/// Settings for a harness run.
///
/// # Examples
///
/// ```rust
/// use eqset::harness::HarnessConfig;
///
/// let config = HarnessConfig::default().with_seed(7).with_cases(10);
/// assert_eq!(config.seed, 7);
/// assert_eq!(config.cases, 10);
/// assert_eq!(config.max_growth, HarnessConfig::DEFAULT_MAX_GROWTH);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HarnessConfig {
    /// Seed of the pseudo-random source.
    pub seed: u64,
    /// Number of generated sets each property is checked against.
    pub cases: usize,
    /// Upper bound on the number of fresh elements added per step once random
    /// growth begins.
    pub max_growth: usize,
}

impl HarnessConfig {
    /// Seed used when none is given.
    pub const DEFAULT_SEED: u64 = 0x5EED_CAFE;
    /// Case count used when none is given.
    pub const DEFAULT_CASES: usize = 64;
    /// Growth bound used when none is given.
    pub const DEFAULT_MAX_GROWTH: usize = 4;

    /// Returns this configuration with another seed.
    #[must_use]
    pub const fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    /// Returns this configuration with another case count.
    #[must_use]
    pub const fn with_cases(self, cases: usize) -> Self {
        Self { cases, ..self }
    }

    /// Returns this configuration with another growth bound.
    ///
    /// A bound of zero is treated as one, since every step must add at least
    /// one element.
    #[must_use]
    pub const fn with_max_growth(self, max_growth: usize) -> Self {
        Self { max_growth, ..self }
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            seed: Self::DEFAULT_SEED,
            cases: Self::DEFAULT_CASES,
            max_growth: Self::DEFAULT_MAX_GROWTH,
        }
    }
}
