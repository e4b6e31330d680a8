use num_complex::Complex;

use crate::common::{verify_interleaved_length, FftNum};
use crate::error::{BufferRole, DftError, DftResult};

/// Views an interleaved `[re, im, re, im, ...]` buffer of exactly `2 * len` values as `len` complex
/// values, without copying.
///
/// `Complex<T>` is `#[repr(C)]` with the alignment of `T`, so the only way the cast can fail is a
/// size mismatch, which the length check rules out first.
pub fn as_complex_mut<T: FftNum>(
    buffer: &mut [T],
    len: usize,
    role: BufferRole,
) -> DftResult<&mut [Complex<T>]> {
    verify_interleaved_length(buffer, len, role)?;
    let actual = buffer.len();
    bytemuck::try_cast_slice_mut(buffer).map_err(|_| DftError::BufferLength {
        role,
        expected: len * 2,
        actual,
    })
}

/// Read-only counterpart of [`as_complex_mut`].
pub fn as_complex<T: FftNum>(buffer: &[T], len: usize, role: BufferRole) -> DftResult<&[Complex<T>]> {
    verify_interleaved_length(buffer, len, role)?;
    bytemuck::try_cast_slice(buffer).map_err(|_| DftError::BufferLength {
        role,
        expected: len * 2,
        actual: buffer.len(),
    })
}

/// Multiplies every value in `buffer` by the real factor `scale`.
#[inline]
pub fn scale_in_place<T: FftNum>(buffer: &mut [Complex<T>], scale: T) {
    for value in buffer.iter_mut() {
        *value = *value * scale;
    }
}
