//! Factorials, partial factorials and combinations.
//!
//! Exact integer arithmetic is used where it fits in a u64 (`n <= 20`).
//! Products over the whole ball pool (e.g. 80 * 79 * ... ) are carried in
//! `f64` via [`partial_factorial`] so that `80!` is never formed.

/// Largest `n` for which `n!` fits in a u64.
pub const MAX_EXACT_FACTORIAL: u32 = 20;

/// Computes `n!` exactly, or `None` if it overflows a u64.
pub fn checked_factorial(n: u32) -> Option<u64> {
    (2..=u64::from(n)).try_fold(1u64, u64::checked_mul)
}

/// Computes `n!`.
///
/// # Panics
/// Panics if `n > 20`; the result no longer fits in a u64.
pub fn factorial(n: u32) -> u64 {
    checked_factorial(n)
        .unwrap_or_else(|| panic!("{n}! overflows u64 (limit is {MAX_EXACT_FACTORIAL}!)"))
}

/// Product of the top `terms` descending integers starting at `n`:
/// `n * (n - 1) * ... * (n - terms + 1)`.
///
/// Returns 1.0 for `terms == 0`. When `terms > n` the product passes
/// through zero and the result is 0.0.
pub fn partial_factorial(n: u32, terms: u32) -> f64 {
    if terms > n {
        return 0.0;
    }
    (0..terms).fold(1.0, |acc, i| acc * f64::from(n - i))
}

/// "n choose r": `n! / (r! (n - r)!)`, or 0 when `r > n`.
///
/// # Panics
/// Panics if `n > 20` (see [`factorial`]).
pub fn combinations(n: u32, r: u32) -> u64 {
    if r > n {
        return 0;
    }
    factorial(n) / (factorial(r) * factorial(n - r))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_factorials() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(10), 3_628_800);
    }

    #[test]
    fn test_factorial_limit() {
        assert_eq!(checked_factorial(20), Some(2_432_902_008_176_640_000));
        assert_eq!(checked_factorial(21), None);
    }

    #[test]
    #[should_panic(expected = "overflows")]
    fn test_factorial_panics_past_limit() {
        let _ = factorial(21);
    }

    #[test]
    fn test_partial_factorial_examples() {
        assert!((partial_factorial(10, 4) - 5040.0).abs() < f64::EPSILON);
        assert!((partial_factorial(80, 0) - 1.0).abs() < f64::EPSILON);
        assert!((partial_factorial(80, 1) - 80.0).abs() < f64::EPSILON);
        assert!((partial_factorial(20, 2) - 380.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_factorial_full_length_matches_factorial() {
        for n in 0..=MAX_EXACT_FACTORIAL {
            #[allow(clippy::cast_precision_loss)]
            let exact = factorial(n) as f64;
            let partial = partial_factorial(n, n);
            assert!(
                ((partial - exact) / exact).abs() < 1e-12,
                "{n}: partial={partial}, exact={exact}"
            );
        }
    }

    #[test]
    fn test_partial_factorial_past_zero() {
        assert!(partial_factorial(3, 4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_combinations_known_values() {
        assert_eq!(combinations(9, 5), 126);
        assert_eq!(combinations(20, 10), 184_756);
        assert_eq!(combinations(4, 2), 6);
        assert_eq!(combinations(3, 4), 0);
    }

    #[test]
    fn test_combinations_edges() {
        for n in 0..=MAX_EXACT_FACTORIAL {
            assert_eq!(combinations(n, 0), 1, "C({n}, 0)");
            assert_eq!(combinations(n, n), 1, "C({n}, {n})");
        }
    }
}
