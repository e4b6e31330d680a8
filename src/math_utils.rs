use num_integer::Roots;
use primal_check::miller_rabin;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct PrimeFactor {
    pub value: usize,
    pub count: usize,
}

/// Factors an integer into its prime factors, in ascending order.
pub fn prime_factors(mut n: usize) -> Vec<PrimeFactor> {
    let mut result = Vec::new();
    if n == 0 {
        return result;
    }

    let trailing_zeros = n.trailing_zeros();
    if trailing_zeros > 0 {
        result.push(PrimeFactor {
            value: 2,
            count: trailing_zeros as usize,
        });
        n >>= trailing_zeros;
    }
    if n > 1 {
        let mut divisor = 3;
        let mut limit = n.sqrt() + 1;
        while divisor < limit {
            let mut count = 0;
            while n % divisor == 0 {
                n /= divisor;
                count += 1;
            }

            if count > 0 {
                result.push(PrimeFactor {
                    value: divisor,
                    count,
                });

                // recalculate the limit to reduce the amount of other factors we need to check
                limit = n.sqrt() + 1;
            }

            divisor += 2;
        }

        if n > 1 {
            result.push(PrimeFactor { value: n, count: 1 });
        }
    }

    result
}

/// Returns the largest prime factor of `n`, or 1 if `n <= 1`.
pub fn largest_prime_factor(n: usize) -> usize {
    // prime lengths are common when this matters, and skipping the trial division saves a lot of work for them
    if n > 1 && miller_rabin(n as u64) {
        return n;
    }
    prime_factors(n)
        .last()
        .map_or(1, |factor| factor.value)
}

/// Estimates the number of operations a mixed-radix transform of length `n` performs.
///
/// Each prime factor contributes its value, with a 10% penalty for factors above 5 that have no
/// cheap hardcoded butterfly. The sum is multiplied by `n`.
pub fn cost_guess(n: usize) -> f64 {
    const LARGE_FACTOR_PENALTY: f64 = 1.1;

    let factor_sum: f64 = prime_factors(n)
        .into_iter()
        .map(|factor| {
            let value = factor.value as f64;
            let weight = if factor.value <= 5 {
                value
            } else {
                LARGE_FACTOR_PENALTY * value
            };
            weight * factor.count as f64
        })
        .sum();

    factor_sum * n as f64
}

/// Returns the smallest integer `>= n` whose prime factors are all in {2, 3, 5, 7, 11}.
///
/// Lengths up to 6 are returned unchanged. Transforms of the returned length only need hardcoded
/// butterflies, which makes it a good choice of padded length for convolutions.
///
/// ```
/// assert_eq!(dftplan::good_size(6), 6);
/// assert_eq!(dftplan::good_size(13), 14);
/// assert_eq!(dftplan::good_size(1993), 2000);
/// ```
pub fn good_size(n: usize) -> usize {
    if n <= 6 {
        return n;
    }

    let mut best = n.saturating_mul(2);
    let mut f2 = 1usize;
    while f2 < best {
        let mut f23 = f2;
        while f23 < best {
            let mut f235 = f23;
            while f235 < best {
                let mut f2357 = f235;
                while f2357 < best {
                    let mut f235711 = f2357;
                    while f235711 < best {
                        if f235711 >= n {
                            best = f235711;
                        }
                        f235711 = f235711.saturating_mul(11);
                    }
                    f2357 = f2357.saturating_mul(7);
                }
                f235 = f235.saturating_mul(5);
            }
            f23 = f23.saturating_mul(3);
        }
        f2 = f2.saturating_mul(2);
    }
    best
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_prime_factors() {
        #[rustfmt::skip]
        let test_list = vec![
            (2, vec![PrimeFactor { value: 2, count: 1 }]),
            (3, vec![PrimeFactor { value: 3, count: 1 }]),
            (6, vec![PrimeFactor { value: 2, count: 1 }, PrimeFactor { value: 3, count: 1 }]),
            (256, vec![PrimeFactor { value: 2, count: 8 }]),
            (768, vec![PrimeFactor { value: 2, count: 8 }, PrimeFactor { value: 3, count: 1 }]),
            (44100, vec![PrimeFactor { value: 2, count: 2 }, PrimeFactor { value: 3, count: 2 }, PrimeFactor { value: 5, count: 2 }, PrimeFactor { value: 7, count: 2 }]),
            (9973, vec![PrimeFactor { value: 9973, count: 1 }]),
        ];

        for (input, expected) in test_list {
            let factors = prime_factors(input);

            assert_eq!(factors, expected);
        }

        assert!(prime_factors(1).is_empty());

        for n in 1..2000 {
            let factors = prime_factors(n);
            let multiplied: usize = factors
                .into_iter()
                .map(|factor| factor.value.pow(factor.count as u32))
                .product();
            assert_eq!(multiplied, n);
        }
    }

    #[test]
    fn test_largest_prime_factor() {
        let test_list = vec![
            (1, 1),
            (2, 2),
            (12, 3),
            (49, 7),
            (97, 97),
            (120120, 13),
            (9973, 9973),
            (2 * 9973, 9973),
            (1 << 20, 2),
        ];
        for (input, expected) in test_list {
            assert_eq!(largest_prime_factor(input), expected, "n = {}", input);
        }
    }

    #[test]
    fn test_cost_guess() {
        assert_eq!(cost_guess(1), 0.0);
        assert_eq!(cost_guess(8), 6.0 * 8.0);
        assert_eq!(cost_guess(15), 8.0 * 15.0);

        // 7 and 13 carry the large factor penalty
        let expected = (2.0 + 1.1 * 7.0 + 1.1 * 13.0) * 182.0;
        assert!((cost_guess(182) - expected).abs() < 1e-9);
    }

    fn is_good_size(mut n: usize) -> bool {
        for p in [2, 3, 5, 7, 11] {
            while n % p == 0 {
                n /= p;
            }
        }
        n == 1
    }

    #[test]
    fn test_good_size() {
        for n in 0..=6 {
            assert_eq!(good_size(n), n);
        }
        for n in 7..5000 {
            let expected = (n..).find(|&m| is_good_size(m)).unwrap();
            assert_eq!(good_size(n), expected, "n = {}", n);
        }
        assert_eq!(good_size(19945), 19965);
        assert_eq!(good_size(1993), 2000);
    }

    #[test]
    fn test_good_size_large() {
        let n = isize::MAX as usize;
        let size = good_size(n);
        assert!(size >= n);
        assert!(is_good_size(size));
    }
}
