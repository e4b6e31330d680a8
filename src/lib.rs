//! dftplan computes complex Discrete Fourier Transforms of any length, written in pure Rust.
//!
//! ### Usage
//!
//! The recommended way to use dftplan is to create a [`Plan`](crate::Plan) for the length you need,
//! then reuse it for every transform of that length. Buffers are interleaved real/imaginary arrays:
//! a transform of length `N` reads and writes `2 * N` values, with `buffer[2k]` holding the real part
//! and `buffer[2k + 1]` the imaginary part of sample `k`.
//!
//! ```
//! // Perform a forward transform of size 1234
//! use dftplan::Plan;
//!
//! let mut plan = Plan::<f32>::new(1234)?;
//!
//! let input = vec![0.0f32; 2 * 1234];
//! let mut output = vec![0.0f32; 2 * 1234];
//! plan.transform(&input, &mut output)?;
//! # Ok::<(), dftplan::DftError>(())
//! ```
//! The forward transform computes `X[k] = sum_n x[n] * exp(-2*pi*i*n*k/N)`. The inverse uses `+2*pi*i`
//! and, unless you call one of the `*_unnormalized` methods, scales every output sample by `1/N`.
//!
//! Plans own their scratch space, so every transform method takes `&mut self`. To transform from
//! several threads, create one plan per thread or wrap a plan in a `Mutex`.
//!
//! ### Algorithms
//!
//! Every length is served by one of three engines, picked when the plan is created:
//!
//! - [`Algorithm::PowerOfTwo`] for lengths that are exact powers of two, an in-place radix-4 engine.
//! - [`Algorithm::MixedRadix`] for lengths whose prime factors are small compared to the length. It
//!   factors the length into radices and has hardcoded butterflies for 2, 3, 4, 5, 7 and 11, with
//!   a generic butterfly for every other prime.
//! - [`Algorithm::Bluestein`] for lengths with large prime factors. It re-expresses the transform as a
//!   convolution computed with a mixed-radix transform of a larger, smoother length.
//!
//! The choice between the last two is made from an operation count estimate, which can be tuned
//! or overridden through [`PlanOptions`](crate::PlanOptions).
//!
//! ### Normalization
//!
//! [`Plan::transform`](crate::Plan::transform) and
//! [`Plan::inverse_transform_unnormalized`](crate::Plan::inverse_transform_unnormalized) do not
//! normalize their outputs. Running one after the other multiplies each element by the transform
//! length. [`Plan::inverse_transform`](crate::Plan::inverse_transform) divides by the length, so a
//! forward transform followed by it gives back the original signal, up to rounding.

pub use num_complex;
pub use num_traits;

use std::fmt::Display;

#[macro_use]
mod common;

mod array_utils;
mod error;
mod math_utils;
mod options;
mod plan;
mod twiddles;

/// Individual transform engines. A [`Plan`](crate::Plan) picks one of these automatically.
pub mod algorithm;

pub use crate::common::FftNum;
pub use crate::error::{BufferRole, DftError, DftResult};
pub use crate::math_utils::good_size;
pub use crate::options::{Algorithm, PlanOptions, PlanStrategy};
pub use crate::plan::Plan;

/// A trait that allows transform engines to report their expected input/output size
pub trait Length {
    /// The number of complex samples that this transform processes
    fn len(&self) -> usize;
}

/// Represents a forward or inverse transform
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum FftDirection {
    /// Forward transform, using `exp(-2*pi*i*n*k/N)` as the kernel
    Forward,
    /// Inverse transform, using `exp(+2*pi*i*n*k/N)` as the kernel. dftplan's engines never normalize;
    /// [`Plan::inverse_transform`](crate::Plan::inverse_transform) applies the `1/N` scale afterwards.
    Inverse,
}
impl FftDirection {
    /// Returns the opposite direction of `self`.
    ///
    ///  - If `self` is `FftDirection::Forward`, returns `FftDirection::Inverse`
    ///  - If `self` is `FftDirection::Inverse`, returns `FftDirection::Forward`
    #[inline]
    pub fn opposite_direction(&self) -> FftDirection {
        match self {
            Self::Forward => Self::Inverse,
            Self::Inverse => Self::Forward,
        }
    }
}
impl Display for FftDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::Forward => f.write_str("Forward"),
            Self::Inverse => f.write_str("Inverse"),
        }
    }
}

#[cfg(test)]
mod test_utils;
