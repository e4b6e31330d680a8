use num_complex::Complex;

use rand::distributions::{Distribution, Uniform};
use rand::{rngs::StdRng, SeedableRng};

use crate::error::DftResult;
use crate::{FftDirection, FftNum};

/// The seed for the random number generator used to generate
/// random signals. It's defined here so that we have deterministic
/// tests
const RNG_SEED: [u8; 32] = [
    1, 9, 1, 0, 1, 1, 4, 3, 1, 4, 9, 8, 4, 1, 4, 8, 2, 8, 1, 2, 2, 2, 6, 1, 2, 3, 4, 5, 6, 7, 8, 9,
];

pub fn random_signal<T: FftNum>(length: usize) -> Vec<Complex<T>> {
    let mut rng: StdRng = SeedableRng::from_seed(RNG_SEED);
    let dist = Uniform::new(-10f64, 10f64);
    (0..length)
        .map(|_| {
            Complex::new(
                T::from_f64_lossy(dist.sample(&mut rng)),
                T::from_f64_lossy(dist.sample(&mut rng)),
            )
        })
        .collect()
}

/// Direct O(n^2) evaluation of the transform, in f64. The angle is reduced mod `len` before
/// scaling so large lengths stay accurate.
pub fn naive_dft<T: FftNum>(input: &[Complex<T>], direction: FftDirection) -> Vec<Complex<f64>> {
    let len = input.len();
    let sign = match direction {
        FftDirection::Forward => -1f64,
        FftDirection::Inverse => 1f64,
    };
    let input: Vec<Complex<f64>> = input
        .iter()
        .map(|c| Complex::new(c.re.to_f64().unwrap_or(0.0), c.im.to_f64().unwrap_or(0.0)))
        .collect();

    (0..len)
        .map(|k| {
            input.iter().enumerate().fold(Complex::new(0f64, 0f64), |acc, (n, &x)| {
                let angle = sign * 2f64 * std::f64::consts::PI * ((k * n) % len) as f64 / len as f64;
                acc + x * Complex::from_polar(1f64, angle)
            })
        })
        .collect()
}

/// `||actual - expected|| / ||expected||` in the L2 norm.
pub fn relative_error<T: FftNum>(actual: &[Complex<T>], expected: &[Complex<f64>]) -> f64 {
    assert_eq!(actual.len(), expected.len());
    let mut diff = 0f64;
    let mut norm = 0f64;
    for (a, e) in actual.iter().zip(expected.iter()) {
        let a = Complex::new(a.re.to_f64().unwrap_or(f64::NAN), a.im.to_f64().unwrap_or(f64::NAN));
        diff += (a - e).norm_sqr();
        norm += e.norm_sqr();
    }
    if norm == 0f64 {
        diff.sqrt()
    } else {
        (diff / norm).sqrt()
    }
}

pub fn compare_vectors(vec1: &[Complex<f32>], vec2: &[Complex<f32>]) -> bool {
    assert_eq!(vec1.len(), vec2.len());
    let mut sse = 0f32;
    for (&a, &b) in vec1.iter().zip(vec2.iter()) {
        sse = sse + (a - b).norm();
    }
    (sse / vec1.len() as f32) < 0.1f32
}

/// Runs `process` on a random signal and checks the result against [`naive_dft`].
pub fn check_fft_algorithm<F>(len: usize, direction: FftDirection, mut process: F)
where
    F: FnMut(&mut [Complex<f64>]) -> DftResult<()>,
{
    let input = random_signal::<f64>(len);
    let expected = naive_dft(&input, direction);

    let mut buffer = input.clone();
    process(&mut buffer).unwrap();

    let error = relative_error(&buffer, &expected);
    assert!(
        error < 1e-12,
        "length = {}, direction = {}, relative error = {}",
        len,
        direction,
        error
    );
}
