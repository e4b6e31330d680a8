use std::fmt;

use num_complex::Complex;

use crate::algorithm::{BluesteinsAlgorithm, MixedRadix, Radix4};
use crate::array_utils::{as_complex, as_complex_mut, scale_in_place};
use crate::common::{verify_complex_length, FftNum};
use crate::error::{BufferRole, DftError, DftResult};
use crate::math_utils::{cost_guess, good_size, largest_prime_factor};
use crate::options::{Algorithm, PlanOptions, PlanStrategy};
use crate::{FftDirection, Length};

/// Largest supported transform length. Interleaved buffers hold `2 * len` values, which must
/// stay addressable.
pub const MAX_LEN: usize = isize::MAX as usize / 2;

enum Engine<T> {
    PowerOfTwo(Radix4<T>),
    MixedRadix(MixedRadix<T>),
    Bluestein(BluesteinsAlgorithm<T>),
}

/// A reusable plan for complex transforms of one length.
///
/// Creating a plan picks an engine and precomputes every table it needs. The plan can then run any
/// number of forward and inverse transforms of that length. Buffers are interleaved
/// `[re0, im0, re1, im1, ...]` slices of `2 * len` values; [`process`](Plan::process) accepts
/// `Complex` slices instead.
///
/// ```
/// use dftplan::Plan;
///
/// let mut plan = Plan::<f64>::new(4)?;
///
/// let input = [1.0, 0.0, 2.0, 0.0, 3.0, 0.0, 4.0, 0.0];
/// let mut spectrum = [0.0; 8];
/// plan.transform(&input, &mut spectrum)?;
/// assert_eq!(spectrum, [10.0, 0.0, -2.0, 2.0, -2.0, 0.0, -2.0, -2.0]);
///
/// let mut restored = [0.0; 8];
/// plan.inverse_transform(&spectrum, &mut restored)?;
/// assert_eq!(restored, input);
/// # Ok::<(), dftplan::DftError>(())
/// ```
pub struct Plan<T> {
    engine: Engine<T>,
    len: usize,
}

impl<T: FftNum> Plan<T> {
    /// Creates a plan for transforms of `len` complex samples, using the default [`PlanOptions`].
    ///
    /// Returns [`DftError::LengthOutOfRange`] if `len` is zero or larger than `isize::MAX / 2`.
    pub fn new(len: usize) -> DftResult<Self> {
        Self::with_options(len, &PlanOptions::default())
    }

    /// Creates a plan for transforms of `len` complex samples.
    ///
    /// Returns [`DftError::LengthOutOfRange`] for an invalid length, or
    /// [`DftError::UnsupportedStrategy`] if `options` force an engine that cannot handle `len`.
    pub fn with_options(len: usize, options: &PlanOptions) -> DftResult<Self> {
        if len == 0 || len > MAX_LEN {
            return Err(DftError::LengthOutOfRange { len, max: MAX_LEN });
        }

        let engine = match select_algorithm(len, options)? {
            Algorithm::PowerOfTwo => Engine::PowerOfTwo(Radix4::new(len)),
            Algorithm::MixedRadix => Engine::MixedRadix(MixedRadix::new(len)),
            Algorithm::Bluestein => Engine::Bluestein(BluesteinsAlgorithm::new(len)),
        };
        Ok(Self { engine, len })
    }

    /// The engine this plan runs on.
    pub fn algorithm(&self) -> Algorithm {
        match self.engine {
            Engine::PowerOfTwo(_) => Algorithm::PowerOfTwo,
            Engine::MixedRadix(_) => Algorithm::MixedRadix,
            Engine::Bluestein(_) => Algorithm::Bluestein,
        }
    }

    /// Whether the `*_in_place` methods are available. Every engine works in place, so this is
    /// always `true`.
    pub fn can_transform_in_place(&self) -> bool {
        true
    }

    /// Computes the forward transform of `input` into `output`. The output is not normalized.
    pub fn transform(&mut self, input: &[T], output: &mut [T]) -> DftResult<()> {
        self.run(input, output, FftDirection::Forward, false)
    }

    /// Computes the inverse transform of `input` into `output`, scaled by `1/len`.
    pub fn inverse_transform(&mut self, input: &[T], output: &mut [T]) -> DftResult<()> {
        self.run(input, output, FftDirection::Inverse, true)
    }

    /// Computes the inverse transform of `input` into `output` without the `1/len` scale.
    pub fn inverse_transform_unnormalized(&mut self, input: &[T], output: &mut [T]) -> DftResult<()> {
        self.run(input, output, FftDirection::Inverse, false)
    }

    /// In-place variant of [`transform`](Plan::transform).
    pub fn transform_in_place(&mut self, buffer: &mut [T]) -> DftResult<()> {
        self.run_in_place(buffer, FftDirection::Forward, false)
    }

    /// In-place variant of [`inverse_transform`](Plan::inverse_transform).
    pub fn inverse_transform_in_place(&mut self, buffer: &mut [T]) -> DftResult<()> {
        self.run_in_place(buffer, FftDirection::Inverse, true)
    }

    /// In-place variant of [`inverse_transform_unnormalized`](Plan::inverse_transform_unnormalized).
    pub fn inverse_transform_unnormalized_in_place(&mut self, buffer: &mut [T]) -> DftResult<()> {
        self.run_in_place(buffer, FftDirection::Inverse, false)
    }

    /// Computes an unnormalized transform of `buffer` in place, for callers that already hold
    /// `Complex` samples.
    pub fn process(&mut self, buffer: &mut [Complex<T>], direction: FftDirection) -> DftResult<()> {
        verify_complex_length(buffer, self.len, BufferRole::Buffer)?;
        self.execute(buffer, direction, false);
        Ok(())
    }

    fn run(
        &mut self,
        input: &[T],
        output: &mut [T],
        direction: FftDirection,
        normalize: bool,
    ) -> DftResult<()> {
        let input = as_complex(input, self.len, BufferRole::Input)?;
        let output = as_complex_mut(output, self.len, BufferRole::Output)?;
        output.copy_from_slice(input);
        self.execute(output, direction, normalize);
        Ok(())
    }

    fn run_in_place(
        &mut self,
        buffer: &mut [T],
        direction: FftDirection,
        normalize: bool,
    ) -> DftResult<()> {
        let buffer = as_complex_mut(buffer, self.len, BufferRole::Buffer)?;
        self.execute(buffer, direction, normalize);
        Ok(())
    }

    fn execute(&mut self, buffer: &mut [Complex<T>], direction: FftDirection, normalize: bool) {
        match &mut self.engine {
            Engine::PowerOfTwo(fft) => fft.perform_fft(buffer, direction),
            Engine::MixedRadix(fft) => fft.perform_fft(buffer, direction),
            Engine::Bluestein(fft) => fft.perform_fft(buffer, direction),
        }
        if normalize {
            scale_in_place(buffer, T::one() / T::from_len(self.len));
        }
    }
}

impl<T> Length for Plan<T> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.len
    }
}

impl<T: FftNum> fmt::Debug for Plan<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plan")
            .field("len", &self.len)
            .field("algorithm", &self.algorithm())
            .finish()
    }
}

/// Picks the engine for a transform of `len` samples.
///
/// Powers of two always use the radix-4 engine. Other lengths use direct factorization unless
/// they are above the threshold, have a prime factor larger than their square root, and the biased
/// cost of Bluestein's two padded transforms is lower than the cost of factorizing directly.
pub(crate) fn select_algorithm(len: usize, options: &PlanOptions) -> DftResult<Algorithm> {
    match options.strategy {
        PlanStrategy::Force(Algorithm::PowerOfTwo) if !len.is_power_of_two() => {
            Err(DftError::UnsupportedStrategy {
                len,
                algorithm: Algorithm::PowerOfTwo,
            })
        }
        PlanStrategy::Force(algorithm) => Ok(algorithm),
        PlanStrategy::Auto => Ok(select_automatically(len, options)),
    }
}

fn select_automatically(len: usize, options: &PlanOptions) -> Algorithm {
    if len.is_power_of_two() {
        return Algorithm::PowerOfTwo;
    }
    if len < options.direct_len_threshold {
        return Algorithm::MixedRadix;
    }

    let largest_factor = largest_prime_factor(len);
    if largest_factor <= len / largest_factor {
        return Algorithm::MixedRadix;
    }

    let direct_cost = cost_guess(len);
    let bluestein_cost = 2.0 * cost_guess(good_size(2 * len - 1)) * options.bluestein_bias;
    if prefers_bluestein(direct_cost, bluestein_cost) {
        Algorithm::Bluestein
    } else {
        Algorithm::MixedRadix
    }
}

// Ties go to direct factorization.
#[inline]
fn prefers_bluestein(direct_cost: f64, bluestein_cost: f64) -> bool {
    bluestein_cost < direct_cost
}
