use std::marker::PhantomData;

use num_complex::Complex;

use super::butterflies::StageShape;
use crate::common::{twiddle_mul, FftNum};
use crate::twiddles::rotate_90;
use crate::FftDirection;

/// Stage kernel for any odd radix of at least 5, used for primes without a hardcoded butterfly.
///
/// Each output is an O(radix^2) accumulation against the stage's one-period table
/// `exp(+2*pi*i*j/radix)`. Unlike the hardcoded butterflies, this kernel uses `output` as a work
/// area and leaves its result in `input`.
pub struct GenericRadix<T> {
    radix: usize,
    direction: FftDirection,
    _phantom: PhantomData<T>,
}

impl<T: FftNum> GenericRadix<T> {
    pub fn new(radix: usize, direction: FftDirection) -> Self {
        assert!(
            radix >= 5 && radix % 2 == 1,
            "GenericRadix requires an odd radix of at least 5. Got {}",
            radix
        );
        Self {
            radix,
            direction,
            _phantom: PhantomData,
        }
    }

    pub fn pass(
        &self,
        shape: StageShape,
        cc: &mut [Complex<T>],
        ch: &mut [Complex<T>],
        twiddles: &[Complex<T>],
        period: &[Complex<T>],
    ) {
        let ip = self.radix;
        let ido = shape.ido;
        let l1 = shape.l1;
        let idl1 = ido * l1;
        let ipph = (ip + 1) / 2;
        let direction = self.direction;
        debug_assert_eq!(period.len(), ip);

        let cc_at = |i: usize, j: usize, k: usize| shape.input_index(ip, i, j, k);
        // CH and the reordered CX view share one layout
        let ch_at = |i: usize, k: usize, j: usize| shape.output_index(i, k, j);

        // split into x[0] and the sums and differences of every (j, ip - j) pair
        for k in 0..l1 {
            for i in 0..ido {
                ch[ch_at(i, k, 0)] = cc[cc_at(i, 0, k)];
            }
        }
        for j in 1..ipph {
            let jc = ip - j;
            for k in 0..l1 {
                for i in 0..ido {
                    let a = cc[cc_at(i, j, k)];
                    let b = cc[cc_at(i, jc, k)];
                    ch[ch_at(i, k, j)] = a + b;
                    ch[ch_at(i, k, jc)] = a - b;
                }
            }
        }

        // output 0 is the plain sum
        for k in 0..l1 {
            for i in 0..ido {
                let mut sum = ch[ch_at(i, k, 0)];
                for j in 1..ipph {
                    sum += ch[ch_at(i, k, j)];
                }
                cc[ch_at(i, k, 0)] = sum;
            }
        }

        // outputs l and ip - l, before the final recombination: cosine terms go to slot l, the
        // rotated sine terms to slot ip - l
        for l in 1..ipph {
            let lc = ip - l;
            let wal = period[l];
            let wa2l = period[2 * l];
            for ik in 0..idl1 {
                cc[ik + idl1 * l] = ch[ik] + ch[ik + idl1] * wal.re + ch[ik + idl1 * 2] * wa2l.re;
                let sines = ch[ik + idl1 * (ip - 2)] * wa2l.im + ch[ik + idl1 * (ip - 1)] * wal.im;
                cc[ik + idl1 * lc] = rotate_90(sines, direction);
            }

            // (l * j) mod ip, tracked incrementally
            let mut iwal = 2 * l;
            let mut j = 3;
            let mut jc = ip - 3;
            while j + 1 < ipph {
                iwal += l;
                if iwal >= ip {
                    iwal -= ip;
                }
                let xwal = period[iwal];
                iwal += l;
                if iwal >= ip {
                    iwal -= ip;
                }
                let xwal2 = period[iwal];
                for ik in 0..idl1 {
                    let cosines = ch[ik + idl1 * j] * xwal.re + ch[ik + idl1 * (j + 1)] * xwal2.re;
                    cc[ik + idl1 * l] += cosines;
                    let sines = ch[ik + idl1 * jc] * xwal.im + ch[ik + idl1 * (jc - 1)] * xwal2.im;
                    cc[ik + idl1 * lc] += rotate_90(sines, direction);
                }
                j += 2;
                jc -= 2;
            }
            while j < ipph {
                iwal += l;
                if iwal >= ip {
                    iwal -= ip;
                }
                let xwal = period[iwal];
                for ik in 0..idl1 {
                    cc[ik + idl1 * l] += ch[ik + idl1 * j] * xwal.re;
                    let sines = ch[ik + idl1 * jc] * xwal.im;
                    cc[ik + idl1 * lc] += rotate_90(sines, direction);
                }
                j += 1;
                jc -= 1;
            }
        }

        // recombine the cosine and sine halves, then apply the stage twiddles
        for j in 1..ipph {
            let jc = ip - j;
            for k in 0..l1 {
                let a = cc[ch_at(0, k, j)];
                let b = cc[ch_at(0, k, jc)];
                cc[ch_at(0, k, j)] = a + b;
                cc[ch_at(0, k, jc)] = a - b;

                for i in 1..ido {
                    let a = cc[ch_at(i, k, j)];
                    let b = cc[ch_at(i, k, jc)];
                    let twiddle_j = twiddles[shape.twiddle_index(j, i)];
                    let twiddle_jc = twiddles[shape.twiddle_index(jc, i)];
                    cc[ch_at(i, k, j)] = twiddle_mul(twiddle_j, a + b, direction);
                    cc[ch_at(i, k, jc)] = twiddle_mul(twiddle_jc, a - b, direction);
                }
            }
        }
    }
}
