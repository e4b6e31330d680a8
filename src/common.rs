use std::fmt::Debug;

use num_complex::Complex;
use num_traits::{Float, FloatConst, NumAssign};

use crate::error::{BufferRole, DftError, DftResult};
use crate::FftDirection;

/// Generic floating point number, implemented for f32 and f64
///
/// Precomputed tables (twiddle factors, Bluestein chirps) are evaluated in `f64` and then
/// converted with [`from_f64_lossy`](FftNum::from_f64_lossy), so `f32` plans get correctly
/// rounded constants.
pub trait FftNum: Float + FloatConst + NumAssign + bytemuck::Pod + Send + Sync + Debug + 'static {
    /// Converts an `f64` to `Self`, rounding to the nearest representable value.
    fn from_f64_lossy(value: f64) -> Self;

    /// Converts a transform length to `Self`.
    #[inline(always)]
    fn from_len(len: usize) -> Self {
        Self::from_f64_lossy(len as f64)
    }
}

impl FftNum for f32 {
    #[inline(always)]
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }
}
impl FftNum for f64 {
    #[inline(always)]
    fn from_f64_lossy(value: f64) -> Self {
        value
    }
}

/// Applies a stored twiddle factor to `value`.
///
/// Twiddle tables hold `exp(+2*pi*i*k/N)`, so forward transforms multiply by the conjugate.
#[inline(always)]
pub(crate) fn twiddle_mul<T: FftNum>(
    twiddle: Complex<T>,
    value: Complex<T>,
    direction: FftDirection,
) -> Complex<T> {
    match direction {
        FftDirection::Forward => Complex {
            re: twiddle.re * value.re + twiddle.im * value.im,
            im: twiddle.re * value.im - twiddle.im * value.re,
        },
        FftDirection::Inverse => Complex {
            re: twiddle.re * value.re - twiddle.im * value.im,
            im: twiddle.re * value.im + twiddle.im * value.re,
        },
    }
}

/// Checks that an interleaved buffer holds exactly `len` complex values.
#[inline]
pub(crate) fn verify_interleaved_length<T>(
    buffer: &[T],
    len: usize,
    role: BufferRole,
) -> DftResult<()> {
    let expected = len * 2;
    if buffer.len() == expected {
        Ok(())
    } else {
        Err(DftError::BufferLength {
            role,
            expected,
            actual: buffer.len(),
        })
    }
}

/// Checks that a complex buffer holds exactly `len` values.
#[inline]
pub(crate) fn verify_complex_length<T>(
    buffer: &[Complex<T>],
    len: usize,
    role: BufferRole,
) -> DftResult<()> {
    if buffer.len() == len {
        Ok(())
    } else {
        Err(DftError::BufferLength {
            role,
            expected: len,
            actual: buffer.len(),
        })
    }
}

// Internal buffers are sized at construction. A mismatch is a planning bug, so panic.
macro_rules! assert_internal_len {
    ($buffer:expr, $len:expr) => {
        assert_eq!(
            $buffer.len(),
            $len,
            "internal buffer has the wrong length. Expected {}, got {}",
            $len,
            $buffer.len()
        )
    };
}
