use num_complex::Complex;
use num_integer::Roots;
use num_traits::Zero;

use super::butterflies::{
    Butterfly11, Butterfly2, Butterfly3, Butterfly4, Butterfly5, Butterfly7, StageShape,
};
use super::radixn::GenericRadix;
use crate::common::{verify_complex_length, FftNum};
use crate::error::{BufferRole, DftResult};
use crate::twiddles;
use crate::{FftDirection, Length};

/// Upper bound on the number of stages. Every factor is at least 2, so no `usize` length can exceed it.
pub const MAX_FACTORS: usize = usize::BITS as usize;

/// Splits `len` into the radices of a mixed-radix transform, in the order the stages run.
///
/// Factors of 4 come first, then a single factor of 2 (swapped to the very front, so the first
/// stage, which has the largest inner stride, uses a hardcoded butterfly), then the odd primes in
/// ascending order. A length of 1 has no stages.
pub fn factorize(mut len: usize) -> Vec<usize> {
    fn push(factors: &mut Vec<usize>, factor: usize) {
        assert!(
            factors.len() < MAX_FACTORS,
            "factorization exceeded {} stages",
            MAX_FACTORS
        );
        factors.push(factor);
    }

    let mut factors = Vec::new();
    while len % 4 == 0 && len > 0 {
        push(&mut factors, 4);
        len /= 4;
    }
    if len % 2 == 0 && len > 0 {
        len /= 2;
        push(&mut factors, 2);
        let last = factors.len() - 1;
        factors.swap(0, last);
    }

    let mut limit = len.sqrt() + 1;
    let mut divisor = 3;
    while len > 1 && divisor < limit {
        if len % divisor == 0 {
            while len % divisor == 0 {
                push(&mut factors, divisor);
                len /= divisor;
            }
            limit = len.sqrt() + 1;
        }
        divisor += 2;
    }
    if len > 1 {
        push(&mut factors, len);
    }
    factors
}

/// Precomputed data for one stage: its shape and its twiddle factors.
struct Stage<T> {
    radix: usize,
    shape: StageShape,
    /// `(radix - 1) * (ido - 1)` twiddles, `exp(+2*pi*i*j*l1*i/len)` at `(j - 1) * (ido - 1) + i - 1`
    twiddles: Box<[Complex<T>]>,
    /// `exp(+2*pi*i*j/radix)` for `j < radix`, only for stages without a hardcoded butterfly
    period: Box<[Complex<T>]>,
}

enum StageKernel<T> {
    Factor2(Butterfly2<T>),
    Factor3(Butterfly3<T>),
    Factor4(Butterfly4<T>),
    Factor5(Butterfly5<T>),
    Factor7(Butterfly7<T>),
    Factor11(Butterfly11<T>),
    Generic(GenericRadix<T>),
}
impl<T: FftNum> StageKernel<T> {
    fn new(radix: usize, direction: FftDirection) -> Self {
        match radix {
            2 => Self::Factor2(Butterfly2::new(direction)),
            3 => Self::Factor3(Butterfly3::new(direction)),
            4 => Self::Factor4(Butterfly4::new(direction)),
            5 => Self::Factor5(Butterfly5::new(direction)),
            7 => Self::Factor7(Butterfly7::new(direction)),
            11 => Self::Factor11(Butterfly11::new(direction)),
            _ => Self::Generic(GenericRadix::new(radix, direction)),
        }
    }
}

/// Mixed-radix transform for any length.
///
/// The length is factored into radices (see [`factorize`]) and the transform runs one stage per
/// radix, alternating between the caller's buffer and an owned scratch buffer. Radices 2, 3, 4, 5, 7
/// and 11 have hardcoded butterflies; every other prime uses a generic O(radix^2) stage. Lengths
/// with a large prime factor are therefore slow; [`BluesteinsAlgorithm`](super::BluesteinsAlgorithm)
/// handles those better.
///
/// ~~~
/// // Computes a forward transform of size 1200, in place
/// use dftplan::algorithm::MixedRadix;
/// use dftplan::num_complex::Complex;
/// use dftplan::FftDirection;
///
/// let mut buffer = vec![Complex::new(0.0f32, 0.0); 1200];
///
/// let mut fft = MixedRadix::new(1200);
/// fft.process(&mut buffer, FftDirection::Forward)?;
/// # Ok::<(), dftplan::DftError>(())
/// ~~~
pub struct MixedRadix<T> {
    stages: Box<[Stage<T>]>,
    forward_kernels: Box<[StageKernel<T>]>,
    inverse_kernels: Box<[StageKernel<T>]>,
    scratch: Box<[Complex<T>]>,
    len: usize,
}

impl<T: FftNum> MixedRadix<T> {
    /// Preallocates necessary arrays and precomputes necessary data to efficiently compute transforms of size `len`
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "MixedRadix requires a nonzero length");

        let factors = if len > 1 { factorize(len) } else { Vec::new() };

        // every stage draws its twiddles from one table for the full length
        let table: Vec<Complex<T>> = if factors.is_empty() {
            Vec::new()
        } else {
            twiddles::sincos_2pibyn(len)
        };

        let mut stages = Vec::with_capacity(factors.len());
        let mut l1 = 1;
        for &radix in &factors {
            let ido = len / (l1 * radix);
            let shape = StageShape { l1, ido };

            let mut stage_twiddles = Vec::with_capacity((radix - 1) * (ido - 1));
            for j in 1..radix {
                for i in 1..ido {
                    stage_twiddles.push(table[j * l1 * i]);
                }
            }

            let period: Vec<Complex<T>> = if radix > 11 {
                (0..radix).map(|j| table[j * l1 * ido]).collect()
            } else {
                Vec::new()
            };

            stages.push(Stage {
                radix,
                shape,
                twiddles: stage_twiddles.into_boxed_slice(),
                period: period.into_boxed_slice(),
            });
            l1 *= radix;
        }

        let forward_kernels = factors
            .iter()
            .map(|&radix| StageKernel::new(radix, FftDirection::Forward))
            .collect();
        let inverse_kernels = factors
            .iter()
            .map(|&radix| StageKernel::new(radix, FftDirection::Inverse))
            .collect();

        Self {
            stages: stages.into_boxed_slice(),
            forward_kernels,
            inverse_kernels,
            scratch: vec![Complex::zero(); len].into_boxed_slice(),
            len,
        }
    }

    /// The radices of this transform's stages, in the order they run.
    pub fn factors(&self) -> Vec<usize> {
        self.stages.iter().map(|stage| stage.radix).collect()
    }

    /// Computes an unnormalized transform of `buffer` in place.
    pub fn process(&mut self, buffer: &mut [Complex<T>], direction: FftDirection) -> DftResult<()> {
        verify_complex_length(buffer, self.len, BufferRole::Buffer)?;
        self.perform_fft(buffer, direction);
        Ok(())
    }

    pub(crate) fn perform_fft(&mut self, buffer: &mut [Complex<T>], direction: FftDirection) {
        assert_internal_len!(buffer, self.len);

        let kernels = match direction {
            FftDirection::Forward => &self.forward_kernels,
            FftDirection::Inverse => &self.inverse_kernels,
        };
        let scratch = &mut self.scratch[..];

        let mut data_in_scratch = false;
        for (stage, kernel) in self.stages.iter().zip(kernels.iter()) {
            let (src, dst) = if data_in_scratch {
                (&mut *scratch, &mut *buffer)
            } else {
                (&mut *buffer, &mut *scratch)
            };

            let twiddles = &stage.twiddles[..];
            match kernel {
                StageKernel::Factor2(butterfly) => butterfly.pass(stage.shape, src, dst, twiddles),
                StageKernel::Factor3(butterfly) => butterfly.pass(stage.shape, src, dst, twiddles),
                StageKernel::Factor4(butterfly) => butterfly.pass(stage.shape, src, dst, twiddles),
                StageKernel::Factor5(butterfly) => butterfly.pass(stage.shape, src, dst, twiddles),
                StageKernel::Factor7(butterfly) => butterfly.pass(stage.shape, src, dst, twiddles),
                StageKernel::Factor11(butterfly) => {
                    butterfly.pass(stage.shape, src, dst, twiddles)
                }
                StageKernel::Generic(kernel) => {
                    // the generic stage uses dst as a work area and finishes back in src
                    kernel.pass(stage.shape, src, dst, twiddles, &stage.period);
                    continue;
                }
            }
            data_in_scratch = !data_in_scratch;
        }

        if data_in_scratch {
            buffer.copy_from_slice(scratch);
        }
    }
}
impl<T> Length for MixedRadix<T> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.len
    }
}
