use num_complex::Complex;
use num_traits::Zero;

use super::MixedRadix;
use crate::common::{twiddle_mul, verify_complex_length, FftNum};
use crate::error::{BufferRole, DftResult};
use crate::math_utils::good_size;
use crate::twiddles;
use crate::{FftDirection, Length};

/// Implementation of Bluestein's Algorithm
///
/// This algorithm computes an arbitrary-sized transform in O(nlogn) time. It does this by converting
/// this size-n transform into a circular convolution of size M >= 2N - 1, where M is picked with
/// [`good_size`](crate::good_size) so the convolution's inner transforms only need hardcoded
/// butterflies.
///
/// ~~~
/// // Computes a forward transform of size 1201 (a prime number), using Bluestein's Algorithm
/// use dftplan::algorithm::BluesteinsAlgorithm;
/// use dftplan::num_complex::Complex;
/// use dftplan::FftDirection;
///
/// let mut buffer = vec![Complex::new(1.0f64, 0.0); 1201];
///
/// let mut fft = BluesteinsAlgorithm::new(1201);
/// fft.process(&mut buffer, FftDirection::Forward)?;
/// # Ok::<(), dftplan::DftError>(())
/// ~~~
///
/// Bluestein's Algorithm is relatively expensive compared to direct factorization. It runs two
/// transforms of more than twice the length, so it only pays off when the length has a large prime factor.
pub struct BluesteinsAlgorithm<T> {
    inner_fft: MixedRadix<T>,

    /// `exp(+i*pi*m^2/len)` for `m < len`
    chirp: Box<[Complex<T>]>,
    /// Forward transform of the symmetric chirp, pre-divided by the inner length
    chirp_spectrum: Box<[Complex<T>]>,
    scratch: Box<[Complex<T>]>,

    len: usize,
}

impl<T: FftNum> BluesteinsAlgorithm<T> {
    /// Creates an engine for transforms of size `len`. Planning runs one inner transform of length
    /// `good_size(2 * len - 1)`.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "BluesteinsAlgorithm requires a nonzero length");

        let inner_len = good_size(2 * len - 1);
        let mut inner_fft = MixedRadix::new(inner_len);

        // m^2 mod 2*len, tracked incrementally as a sum of odd numbers
        let table: Vec<Complex<T>> = twiddles::sincos_2pibyn(2 * len);
        let mut chirp = Vec::with_capacity(len);
        chirp.push(Complex::new(T::one(), T::zero()));
        let mut coeff = 0;
        for m in 1..len {
            coeff += 2 * m - 1;
            if coeff >= 2 * len {
                coeff -= 2 * len;
            }
            chirp.push(table[coeff]);
        }

        let scale = T::one() / T::from_len(inner_len);
        let mut chirp_spectrum = vec![Complex::zero(); inner_len];
        chirp_spectrum[0] = chirp[0] * scale;
        for m in 1..len {
            let value = chirp[m] * scale;
            chirp_spectrum[m] = value;
            chirp_spectrum[inner_len - m] = value;
        }
        inner_fft.perform_fft(&mut chirp_spectrum, FftDirection::Forward);

        Self {
            inner_fft,
            chirp: chirp.into_boxed_slice(),
            chirp_spectrum: chirp_spectrum.into_boxed_slice(),
            scratch: vec![Complex::zero(); inner_len].into_boxed_slice(),
            len,
        }
    }

    /// Length of the padded convolution this engine runs internally.
    pub fn inner_len(&self) -> usize {
        self.inner_fft.len()
    }

    /// Computes an unnormalized transform of `buffer` in place.
    pub fn process(&mut self, buffer: &mut [Complex<T>], direction: FftDirection) -> DftResult<()> {
        verify_complex_length(buffer, self.len, BufferRole::Buffer)?;
        self.perform_fft(buffer, direction);
        Ok(())
    }

    pub(crate) fn perform_fft(&mut self, buffer: &mut [Complex<T>], direction: FftDirection) {
        assert_internal_len!(buffer, self.len);

        let (head, tail) = self.scratch.split_at_mut(self.len);

        // the inverse uses the conjugate chirp everywhere, which twiddle_mul handles
        for ((dst, &src), &chirp) in head.iter_mut().zip(buffer.iter()).zip(self.chirp.iter()) {
            *dst = twiddle_mul(chirp, src, direction);
        }
        for value in tail.iter_mut() {
            *value = Complex::zero();
        }

        self.inner_fft.perform_fft(&mut self.scratch, FftDirection::Forward);

        // the chirp is symmetric, so the spectrum of its conjugate is the conjugate of its spectrum.
        // forward multiplies by the spectrum as stored, inverse by its conjugate
        for (value, &spectrum) in self.scratch.iter_mut().zip(self.chirp_spectrum.iter()) {
            *value = twiddle_mul(spectrum, *value, direction.opposite_direction());
        }

        self.inner_fft.perform_fft(&mut self.scratch, FftDirection::Inverse);

        for ((dst, &src), &chirp) in buffer.iter_mut().zip(self.scratch.iter()).zip(self.chirp.iter()) {
            *dst = twiddle_mul(chirp, src, direction);
        }
    }
}
impl<T> Length for BluesteinsAlgorithm<T> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.len
    }
}
