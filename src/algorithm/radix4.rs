use num_complex::Complex;

use crate::common::{twiddle_mul, verify_complex_length, FftNum};
use crate::error::{BufferRole, DftResult};
use crate::twiddles::{self, rotate_90};
use crate::{FftDirection, Length};

/// Transform engine optimized for power-of-two sizes
///
/// Works fully in place: the input is permuted into bit-reversed order, then combined with
/// decimation-in-time radix-4 steps. When the length is an odd power of two, a radix-2 step runs
/// first.
///
/// ~~~
/// // Computes a forward transform of size 4096
/// use dftplan::algorithm::Radix4;
/// use dftplan::num_complex::Complex;
/// use dftplan::FftDirection;
///
/// let mut buffer = vec![Complex::new(0.0f32, 0.0); 4096];
///
/// let fft = Radix4::new(4096);
/// fft.process(&mut buffer, FftDirection::Forward)?;
/// # Ok::<(), dftplan::DftError>(())
/// ~~~
pub struct Radix4<T> {
    /// `exp(+2*pi*i*k/len)` for `k < len / 2`
    twiddles: Box<[Complex<T>]>,
    log2_len: u32,
    len: usize,
}

impl<T: FftNum> Radix4<T> {
    /// Preallocates necessary arrays and precomputes necessary data to efficiently compute the power-of-two transform
    pub fn new(len: usize) -> Self {
        assert!(
            len.is_power_of_two(),
            "Radix4 algorithm requires a power-of-two input size. Got {}",
            len
        );

        Self {
            twiddles: twiddles::sincos_2pibyn_half(len).into_boxed_slice(),
            log2_len: len.trailing_zeros(),
            len,
        }
    }

    /// Computes an unnormalized transform of `buffer` in place.
    pub fn process(&self, buffer: &mut [Complex<T>], direction: FftDirection) -> DftResult<()> {
        verify_complex_length(buffer, self.len, BufferRole::Buffer)?;
        self.perform_fft(buffer, direction);
        Ok(())
    }

    // `exp(+2*pi*i*index/len)` for any `index < len`, from the half table
    #[inline(always)]
    fn root(&self, index: usize) -> Complex<T> {
        let half = self.len / 2;
        if index < half {
            self.twiddles[index]
        } else {
            -self.twiddles[index - half]
        }
    }

    pub(crate) fn perform_fft(&self, buffer: &mut [Complex<T>], direction: FftDirection) {
        assert_internal_len!(buffer, self.len);
        if self.len == 1 {
            return;
        }

        bit_reverse_permute(buffer, self.log2_len);

        let mut m = if self.log2_len % 2 == 1 {
            for pair in buffer.chunks_exact_mut(2) {
                let (a, b) = (pair[0], pair[1]);
                pair[0] = a + b;
                pair[1] = a - b;
            }
            2
        } else {
            1
        };

        // each step merges four transforms of length m into one of length 4m
        while m < self.len {
            let stride = self.len / (4 * m);
            for chunk in buffer.chunks_exact_mut(4 * m) {
                for j in 0..m {
                    let a = chunk[j];
                    let b = twiddle_mul(self.root(2 * j * stride), chunk[j + m], direction);
                    let c = twiddle_mul(self.root(j * stride), chunk[j + 2 * m], direction);
                    let d = twiddle_mul(self.root(3 * j * stride), chunk[j + 3 * m], direction);

                    let sum_ab = a + b;
                    let diff_ab = a - b;
                    let sum_cd = c + d;
                    let diff_cd = rotate_90(c - d, direction);

                    chunk[j] = sum_ab + sum_cd;
                    chunk[j + m] = diff_ab + diff_cd;
                    chunk[j + 2 * m] = sum_ab - sum_cd;
                    chunk[j + 3 * m] = diff_ab - diff_cd;
                }
            }
            m *= 4;
        }
    }
}
impl<T> Length for Radix4<T> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.len
    }
}

fn bit_reverse_permute<T: Copy>(buffer: &mut [T], log2_len: u32) {
    let shift = usize::BITS - log2_len;
    for i in 0..buffer.len() {
        let reversed = i.reverse_bits() >> shift;
        if i < reversed {
            buffer.swap(i, reversed);
        }
    }
}
