//! To test the accuracy of our transforms, we compare them against a direct O(n^2) evaluation in
//! f64, and check the identities every correct transform satisfies.

use dftplan::num_complex::Complex;
use dftplan::{Algorithm, FftNum, Plan, PlanOptions, PlanStrategy};
use paste::paste;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

const RNG_SEED: u64 = 1910_11431_4984;

fn random_interleaved<T: FftNum>(len: usize, seed: u64) -> Vec<T> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new(-10f64, 10f64);
    (0..2 * len)
        .map(|_| T::from_f64_lossy(dist.sample(&mut rng)))
        .collect()
}

fn to_f64<T: FftNum>(values: &[T]) -> Vec<f64> {
    values.iter().map(|v| v.to_f64().unwrap_or(f64::NAN)).collect()
}

fn naive_dft(input: &[f64], inverse: bool) -> Vec<f64> {
    let len = input.len() / 2;
    let sign = if inverse { 1f64 } else { -1f64 };
    let samples: Vec<Complex<f64>> = input
        .chunks_exact(2)
        .map(|pair| Complex::new(pair[0], pair[1]))
        .collect();

    let mut output = Vec::with_capacity(2 * len);
    for k in 0..len {
        let mut sum = Complex::new(0f64, 0f64);
        for (n, &x) in samples.iter().enumerate() {
            let angle = sign * 2f64 * std::f64::consts::PI * ((k * n) % len) as f64 / len as f64;
            sum = sum + x * Complex::from_polar(1f64, angle);
        }
        output.push(sum.re);
        output.push(sum.im);
    }
    output
}

fn relative_error(actual: &[f64], expected: &[f64]) -> f64 {
    assert_eq!(actual.len(), expected.len());
    let diff: f64 = actual
        .iter()
        .zip(expected)
        .map(|(a, e)| (a - e) * (a - e))
        .sum();
    let norm: f64 = expected.iter().map(|e| e * e).sum();
    if norm == 0f64 {
        diff.sqrt()
    } else {
        (diff / norm).sqrt()
    }
}

fn check_against_naive<T: FftNum>(len: usize, tolerance: f64) {
    let mut plan = Plan::<T>::new(len).unwrap();
    let input = random_interleaved::<T>(len, RNG_SEED);
    let input_f64 = to_f64(&input);

    let mut output = vec![T::zero(); 2 * len];
    plan.transform(&input, &mut output).unwrap();
    let error = relative_error(&to_f64(&output), &naive_dft(&input_f64, false));
    assert!(
        error < tolerance,
        "forward, length = {}, algorithm = {}, error = {}",
        len,
        plan.algorithm(),
        error
    );

    plan.inverse_transform_unnormalized(&input, &mut output).unwrap();
    let error = relative_error(&to_f64(&output), &naive_dft(&input_f64, true));
    assert!(
        error < tolerance,
        "inverse, length = {}, algorithm = {}, error = {}",
        len,
        plan.algorithm(),
        error
    );
}

macro_rules! accuracy_tests {
    ($($len:literal),*) => {
        paste! {
            $(
                #[test]
                fn [<accuracy_f64_ $len>]() {
                    check_against_naive::<f64>($len, 1e-10);
                }

                #[test]
                fn [<accuracy_f32_ $len>]() {
                    check_against_naive::<f32>($len, 1e-4);
                }
            )*
        }
    }
}

// powers of two, small primes, hardcoded radices, generic radices and Bluestein lengths
accuracy_tests!(1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 12, 13, 16, 17, 23, 32, 47, 49, 64, 97, 100);
accuracy_tests!(101, 121, 128, 169, 210, 243, 256, 289, 997, 1000, 1024, 1200, 2310, 4096);
accuracy_tests!(10, 14, 15, 20, 21, 22, 24, 26, 28, 33, 35, 39, 44, 52, 55, 65, 77, 91, 108);
accuracy_tests!(120, 143, 194, 840, 9240);

#[test]
fn accuracy_large_prime() {
    // 9973 is prime and runs on Bluestein's algorithm
    check_against_naive::<f64>(9973, 1e-10);
}

fn naive_bin(samples: &[Complex<f64>], k: usize, sign: f64) -> Complex<f64> {
    let len = samples.len();
    let mut sum = Complex::new(0f64, 0f64);
    for (n, &x) in samples.iter().enumerate() {
        let angle = sign * 2f64 * std::f64::consts::PI * ((k * n) % len) as f64 / len as f64;
        sum += x * Complex::from_polar(1f64, angle);
    }
    sum
}

#[test]
fn accuracy_long_composite_sampled_bins() {
    // 120120 = 2^3 * 3 * 5 * 7 * 11 * 13, every hardcoded radix plus a generic stage.
    // A full naive reference is too slow here, so compare a spread of bins against it.
    let len = 120120;
    let mut plan = Plan::<f64>::new(len).unwrap();
    assert_eq!(plan.algorithm(), Algorithm::MixedRadix);

    let input = random_interleaved::<f64>(len, RNG_SEED);
    let samples: Vec<Complex<f64>> = input
        .chunks_exact(2)
        .map(|pair| Complex::new(pair[0], pair[1]))
        .collect();
    let bins: Vec<usize> = (0..len).step_by(997).chain([1, 2, len / 2, len - 1]).collect();

    let mut output = vec![0f64; 2 * len];
    for (inverse, sign) in [(false, -1f64), (true, 1f64)] {
        if inverse {
            plan.inverse_transform_unnormalized(&input, &mut output).unwrap();
        } else {
            plan.transform(&input, &mut output).unwrap();
        }

        let mut actual = Vec::with_capacity(2 * bins.len());
        let mut expected = Vec::with_capacity(2 * bins.len());
        for &k in &bins {
            let reference = naive_bin(&samples, k, sign);
            actual.extend_from_slice(&output[2 * k..2 * k + 2]);
            expected.extend_from_slice(&[reference.re, reference.im]);
        }

        let error = relative_error(&actual, &expected);
        assert!(error < 1e-10, "inverse = {}, error = {}", inverse, error);
    }
}

fn round_trip<T: FftNum>(len: usize, options: &PlanOptions, tolerance: f64) {
    let mut plan = Plan::<T>::with_options(len, options).unwrap();
    let input = random_interleaved::<T>(len, RNG_SEED + len as u64);

    let mut spectrum = vec![T::zero(); 2 * len];
    let mut restored = vec![T::zero(); 2 * len];
    plan.transform(&input, &mut spectrum).unwrap();
    plan.inverse_transform(&spectrum, &mut restored).unwrap();

    let error = relative_error(&to_f64(&restored), &to_f64(&input));
    assert!(
        error < tolerance,
        "length = {}, algorithm = {}, error = {}",
        len,
        plan.algorithm(),
        error
    );
}

#[test]
fn test_round_trip() {
    let auto = PlanOptions::default();
    for &len in &[1, 2, 3, 5, 17, 97, 360, 997, 1024, 9240, 9973, 120120] {
        round_trip::<f64>(len, &auto, 1e-12);
        round_trip::<f32>(len, &auto, 1e-4);
    }
}

#[test]
fn test_round_trip_every_engine() {
    for algorithm in [Algorithm::MixedRadix, Algorithm::Bluestein] {
        let options = PlanOptions::default().with_strategy(PlanStrategy::Force(algorithm));
        for len in 1..70 {
            round_trip::<f64>(len, &options, 1e-12);
        }
    }
    let options = PlanOptions::default().with_strategy(PlanStrategy::Force(Algorithm::PowerOfTwo));
    for pow in 0..15 {
        round_trip::<f64>(1 << pow, &options, 1e-12);
    }
}

fn forward_with<T: FftNum>(len: usize, algorithm: Algorithm, input: &[T]) -> Vec<f64> {
    let options = PlanOptions::default().with_strategy(PlanStrategy::Force(algorithm));
    let mut plan = Plan::<T>::with_options(len, &options).unwrap();
    assert_eq!(plan.algorithm(), algorithm);

    let mut output = vec![T::zero(); 2 * len];
    plan.transform(input, &mut output).unwrap();
    to_f64(&output)
}

#[test]
fn test_engines_agree() {
    for &len in &[256, 1024, 8192] {
        let input = random_interleaved::<f64>(len, RNG_SEED);
        let reference = forward_with(len, Algorithm::PowerOfTwo, &input);
        for algorithm in [Algorithm::MixedRadix, Algorithm::Bluestein] {
            let error = relative_error(&forward_with(len, algorithm, &input), &reference);
            assert!(error < 1e-12, "length = {}, {}: error = {}", len, algorithm, error);
        }
    }

    for &len in &[9240, 9973, 120120] {
        let input = random_interleaved::<f64>(len, RNG_SEED);
        let mixed = forward_with(len, Algorithm::MixedRadix, &input);
        let bluestein = forward_with(len, Algorithm::Bluestein, &input);
        let error = relative_error(&bluestein, &mixed);
        assert!(error < 1e-10, "length = {}: error = {}", len, error);
    }
}

#[test]
fn test_linearity() {
    let len = 360;
    let mut plan = Plan::<f64>::new(len).unwrap();
    let x = random_interleaved::<f64>(len, 1);
    let y = random_interleaved::<f64>(len, 2);
    let (a, b) = (2.5f64, -0.75f64);
    let combined: Vec<f64> = x.iter().zip(&y).map(|(x, y)| a * x + b * y).collect();

    let mut fx = vec![0f64; 2 * len];
    let mut fy = vec![0f64; 2 * len];
    let mut fc = vec![0f64; 2 * len];
    plan.transform(&x, &mut fx).unwrap();
    plan.transform(&y, &mut fy).unwrap();
    plan.transform(&combined, &mut fc).unwrap();

    let expected: Vec<f64> = fx.iter().zip(&fy).map(|(x, y)| a * x + b * y).collect();
    assert!(relative_error(&fc, &expected) < 1e-12);
}

#[test]
fn test_parseval() {
    for &len in &[64, 97, 360, 997] {
        let mut plan = Plan::<f64>::new(len).unwrap();
        let input = random_interleaved::<f64>(len, RNG_SEED);
        let mut output = vec![0f64; 2 * len];
        plan.transform(&input, &mut output).unwrap();

        let energy: f64 = input.iter().map(|v| v * v).sum();
        let spectrum_energy: f64 = output.iter().map(|v| v * v).sum::<f64>() / len as f64;
        assert!(
            ((energy - spectrum_energy) / energy).abs() < 1e-12,
            "length = {}",
            len
        );
    }
}

#[test]
fn test_unnormalized_inverse_scale() {
    for &len in &[16, 30, 97] {
        let mut plan = Plan::<f64>::new(len).unwrap();
        let input = random_interleaved::<f64>(len, RNG_SEED);

        let mut normalized = vec![0f64; 2 * len];
        let mut unnormalized = vec![0f64; 2 * len];
        plan.inverse_transform(&input, &mut normalized).unwrap();
        plan.inverse_transform_unnormalized(&input, &mut unnormalized).unwrap();

        let scaled: Vec<f64> = normalized.iter().map(|v| v * len as f64).collect();
        assert!(relative_error(&unnormalized, &scaled) < 1e-13, "length = {}", len);
    }
}
