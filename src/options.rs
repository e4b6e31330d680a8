use std::fmt::Display;

/// Default weight applied to the Bluestein side of the cost comparison.
///
/// Values above 1 favor direct factorization. 1.5 gives good overall performance across lengths.
pub const DEFAULT_BLUESTEIN_BIAS: f64 = 1.5;

/// Lengths below this are always computed by direct factorization.
pub const DEFAULT_DIRECT_LEN_THRESHOLD: usize = 50;

/// The transform engines a [`Plan`](crate::Plan) can be built on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// In-place radix-4 engine. Only valid for power-of-two lengths.
    PowerOfTwo,
    /// Mixed-radix engine over the prime factorization of the length. Valid for every length.
    MixedRadix,
    /// Bluestein's algorithm on top of a padded mixed-radix transform. Valid for every length.
    Bluestein,
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PowerOfTwo => f.write_str("power-of-two"),
            Self::MixedRadix => f.write_str("mixed-radix"),
            Self::Bluestein => f.write_str("Bluestein"),
        }
    }
}

/// How a plan picks its engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum PlanStrategy {
    /// Pick the engine from the length, using the cost model configured in [`PlanOptions`].
    #[default]
    Auto,
    /// Always use the given engine. Plan creation fails if it cannot handle the length.
    Force(Algorithm),
}

/// Options to tune how plans choose their algorithm.
///
/// Creating a plan without options picks reasonable defaults. You only need to tune these if you
/// have benchmarked specific lengths on your hardware, or if you want to pin an engine, for example
/// to compare engines against each other in tests.
///
/// ```
/// use dftplan::{Algorithm, Plan, PlanOptions, PlanStrategy};
///
/// let options = PlanOptions::default().with_strategy(PlanStrategy::Force(Algorithm::Bluestein));
/// let plan = Plan::<f64>::with_options(1000, &options)?;
/// assert_eq!(plan.algorithm(), Algorithm::Bluestein);
/// # Ok::<(), dftplan::DftError>(())
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct PlanOptions {
    /// Whether to pick the engine from the length or force one. Defaults to [`PlanStrategy::Auto`].
    pub strategy: PlanStrategy,
    /// Multiplier applied to the estimated cost of Bluestein's algorithm before comparing it against
    /// direct factorization. Changing it only affects performance, never results.
    pub bluestein_bias: f64,
    /// Lengths below this threshold skip the cost comparison and use direct factorization.
    pub direct_len_threshold: usize,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            strategy: PlanStrategy::Auto,
            bluestein_bias: DEFAULT_BLUESTEIN_BIAS,
            direct_len_threshold: DEFAULT_DIRECT_LEN_THRESHOLD,
        }
    }
}

impl PlanOptions {
    /// Sets [`strategy`](PlanOptions::strategy).
    pub fn with_strategy(mut self, strategy: PlanStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets [`bluestein_bias`](PlanOptions::bluestein_bias).
    pub fn with_bluestein_bias(mut self, bluestein_bias: f64) -> Self {
        self.bluestein_bias = bluestein_bias;
        self
    }

    /// Sets [`direct_len_threshold`](PlanOptions::direct_len_threshold).
    pub fn with_direct_len_threshold(mut self, direct_len_threshold: usize) -> Self {
        self.direct_len_threshold = direct_len_threshold;
        self
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_builders() {
        let options = PlanOptions::default()
            .with_strategy(PlanStrategy::Force(Algorithm::MixedRadix))
            .with_bluestein_bias(2.0)
            .with_direct_len_threshold(10);

        assert_eq!(options.strategy, PlanStrategy::Force(Algorithm::MixedRadix));
        assert_eq!(options.bluestein_bias, 2.0);
        assert_eq!(options.direct_len_threshold, 10);

        let defaults = PlanOptions::default();
        assert_eq!(defaults.strategy, PlanStrategy::Auto);
        assert_eq!(defaults.bluestein_bias, DEFAULT_BLUESTEIN_BIAS);
        assert_eq!(defaults.direct_len_threshold, DEFAULT_DIRECT_LEN_THRESHOLD);
    }
}
