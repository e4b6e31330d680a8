use std::f64::consts::PI;

use num_complex::Complex;

use crate::{common::FftNum, FftDirection};

// Tables below are built as flat [re, im, re, im, ...] arrays. Only the first octant of the unit
// circle is evaluated with sin/cos; every other entry is an exact copy or negation of it, so
// symmetric entries agree bit for bit.

/// Number of flat values written by `calc_first_octant(den)`.
#[inline]
fn octant_len(den: usize) -> usize {
    2 * ((den + 4) >> 3)
}

fn calc_first_octant<T: FftNum>(den: usize, res: &mut [T]) {
    let n = (den + 4) >> 3;
    if n == 0 {
        return;
    }
    res[0] = T::one();
    res[1] = T::zero();
    for i in 1..n {
        let angle = 2.0 * PI * i as f64 / den as f64;
        let (sin, cos) = angle.sin_cos();
        res[2 * i] = T::from_f64_lossy(cos);
        res[2 * i + 1] = T::from_f64_lossy(sin);
    }
}

fn calc_first_quadrant<T: FftNum>(n: usize, res: &mut [T]) {
    let mut p = vec![T::zero(); octant_len(n << 1)];
    calc_first_octant(n << 1, &mut p);

    let ndone = (n + 2) >> 2;
    let mut i = 0;
    let mut idx1 = 0;
    let mut idx2 = 2 * ndone - 2;
    while i + 1 < ndone {
        res[idx1] = p[2 * i];
        res[idx1 + 1] = p[2 * i + 1];
        res[idx2] = p[2 * i + 3];
        res[idx2 + 1] = p[2 * i + 2];
        i += 2;
        idx1 += 2;
        idx2 -= 2;
    }
    if i != ndone {
        res[idx1] = p[2 * i];
        res[idx1 + 1] = p[2 * i + 1];
    }
}

fn calc_first_half<T: FftNum>(n: usize, res: &mut [T]) {
    let mut p = vec![T::zero(); octant_len(n << 2)];
    calc_first_octant(n << 2, &mut p);

    let ndone = (n + 1) >> 1;
    let len = n as isize;
    let mut i = 0;
    let mut i4: isize = 0;

    // octant 0
    while i4 <= len - i4 {
        let x = i4 as usize;
        res[2 * i] = p[2 * x];
        res[2 * i + 1] = p[2 * x + 1];
        i += 1;
        i4 += 4;
    }
    // octant 1
    while i4 - len <= 0 {
        let xm = (len - i4) as usize;
        res[2 * i] = p[2 * xm + 1];
        res[2 * i + 1] = p[2 * xm];
        i += 1;
        i4 += 4;
    }
    // octant 2
    while i4 <= 3 * len - i4 {
        let xm = (i4 - len) as usize;
        res[2 * i] = -p[2 * xm + 1];
        res[2 * i + 1] = p[2 * xm];
        i += 1;
        i4 += 4;
    }
    // octant 3
    while i < ndone {
        let xm = (2 * len - i4) as usize;
        res[2 * i] = -p[2 * xm];
        res[2 * i + 1] = p[2 * xm + 1];
        i += 1;
        i4 += 4;
    }
}

fn fill_first_quadrant<T: FftNum>(n: usize, res: &mut [T]) {
    let quart = n >> 2;
    if n & 7 == 0 {
        res[quart] = T::FRAC_1_SQRT_2();
        res[quart + 1] = T::FRAC_1_SQRT_2();
    }
    let mut i = 2;
    let mut j = 2 * quart - 2;
    while i < quart {
        res[j] = res[i + 1];
        res[j + 1] = res[i];
        i += 2;
        j -= 2;
    }
}

fn fill_first_half<T: FftNum>(n: usize, res: &mut [T]) {
    let half = n >> 1;
    if n & 3 == 0 {
        for i in (0..half).step_by(2) {
            res[i + half] = -res[i + 1];
            res[i + half + 1] = res[i];
        }
    } else {
        let mut i = 2;
        let mut j = 2 * half - 2;
        while i < half {
            res[j] = -res[i];
            res[j + 1] = res[i + 1];
            i += 2;
            j -= 2;
        }
    }
}

fn fill_second_half<T: FftNum>(n: usize, res: &mut [T]) {
    if n & 1 == 0 {
        for i in 0..n {
            res[i + n] = -res[i];
        }
    } else {
        let mut i = 2;
        let mut j = 2 * n - 2;
        while i < n {
            res[j] = res[i];
            res[j + 1] = -res[i + 1];
            i += 2;
            j -= 2;
        }
    }
}

fn sincos_2pibyn_half_flat<T: FftNum>(n: usize, res: &mut [T]) {
    if n & 3 == 0 {
        calc_first_octant(n, res);
        fill_first_quadrant(n, res);
        fill_first_half(n, res);
    } else if n & 1 == 0 {
        calc_first_quadrant(n, res);
        fill_first_half(n, res);
    } else {
        calc_first_half(n, res);
    }
}

fn into_complex<T: FftNum>(flat: &[T], count: usize) -> Vec<Complex<T>> {
    flat.chunks_exact(2)
        .take(count)
        .map(|pair| Complex::new(pair[0], pair[1]))
        .collect()
}

/// Returns `exp(+2*pi*i*k/n)` for `k` in `0..n`.
pub fn sincos_2pibyn<T: FftNum>(n: usize) -> Vec<Complex<T>> {
    if n == 0 {
        return Vec::new();
    }
    let mut flat = vec![T::zero(); 2 * n];
    sincos_2pibyn_half_flat(n, &mut flat);
    fill_second_half(n, &mut flat);
    into_complex(&flat, n)
}

/// Returns `exp(+2*pi*i*k/n)` for `k` in `0..(n + 1) / 2`, the first half of [`sincos_2pibyn`].
pub fn sincos_2pibyn_half<T: FftNum>(n: usize) -> Vec<Complex<T>> {
    if n == 0 {
        return Vec::new();
    }
    let mut flat = vec![T::zero(); 2 * n];
    sincos_2pibyn_half_flat(n, &mut flat);
    into_complex(&flat, (n + 1) / 2)
}

/// Computes a single twiddle factor `exp(-2*pi*i*index/fft_len)` for forward transforms, or its
/// conjugate for inverse transforms. Used for the constants of the hardcoded butterflies.
pub fn compute_twiddle<T: FftNum>(
    index: usize,
    fft_len: usize,
    direction: FftDirection,
) -> Complex<T> {
    let constant = -2f64 * PI / fft_len as f64;
    let angle = constant * index as f64;

    let result = Complex {
        re: T::from_f64_lossy(angle.cos()),
        im: T::from_f64_lossy(angle.sin()),
    };

    match direction {
        FftDirection::Forward => result,
        FftDirection::Inverse => result.conj(),
    }
}

/// Multiplies `value` by `-i` for forward transforms, or by `i` for inverse transforms.
#[inline(always)]
pub fn rotate_90<T: FftNum>(value: Complex<T>, direction: FftDirection) -> Complex<T> {
    match direction {
        FftDirection::Forward => Complex {
            re: value.im,
            im: -value.re,
        },
        FftDirection::Inverse => Complex {
            re: -value.im,
            im: value.re,
        },
    }
}
