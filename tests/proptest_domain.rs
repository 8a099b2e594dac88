//! Property-Based Tests — Domain Layer Invariants
//!
//! Uses `proptest` to verify that the combinatorics and probability
//! engines keep their mathematical invariants across random inputs.

use proptest::prelude::*;

use keno_odds::domain::combinatorics::{
    checked_factorial, combinations, factorial, partial_factorial,
};
use keno_odds::domain::{
    keno_probability, standard_keno_probability, ExpectedValues, GameRules, PayoutTable,
    ProbabilityMatrix,
};

/// Valid rule sets: drawn_balls <= total_balls, 1 <= max_spots <= total_balls,
/// max_spots <= 20. Marking more spots than balls drawn is allowed.
fn game_rules() -> impl Strategy<Value = GameRules> {
    (1u32..=20)
        .prop_flat_map(|max_spots| (Just(max_spots), max_spots..=120))
        .prop_flat_map(|(max_spots, total)| (Just(max_spots), 0..=total, Just(total)))
        .prop_map(|(max_spots, drawn_balls, total_balls)| GameRules {
            total_balls,
            drawn_balls,
            max_spots,
        })
}

// ── Combinatorics Properties ────────────────────────────────

proptest! {
    /// C(n, r) == C(n, n - r).
    #[test]
    fn combinations_are_symmetric(n in 0u32..=20, r in 0u32..=20) {
        prop_assume!(r <= n);
        prop_assert_eq!(combinations(n, r), combinations(n, n - r));
    }

    /// C(n, 0) == C(n, n) == 1.
    #[test]
    fn combinations_edges_are_one(n in 0u32..=20) {
        prop_assert_eq!(combinations(n, 0), 1);
        prop_assert_eq!(combinations(n, n), 1);
    }

    /// Pascal's rule: C(n, r) = C(n - 1, r - 1) + C(n - 1, r).
    #[test]
    fn combinations_follow_pascal(n in 1u32..=20, r in 1u32..=20) {
        prop_assume!(r <= n);
        prop_assert_eq!(
            combinations(n, r),
            combinations(n - 1, r - 1) + combinations(n - 1, r)
        );
    }

    /// C(n, r) = 0 whenever r > n.
    #[test]
    fn combinations_beyond_n_are_zero(n in 0u32..=19, extra in 1u32..=10) {
        prop_assert_eq!(combinations(n, n + extra), 0);
    }

    /// n! = n * (n - 1)! inside the exact range.
    #[test]
    fn factorial_recurrence(n in 1u32..=20) {
        prop_assert_eq!(factorial(n), u64::from(n) * factorial(n - 1));
        prop_assert_eq!(checked_factorial(n), Some(factorial(n)));
    }

    /// P(n, k) = n * P(n - 1, k - 1).
    #[test]
    fn partial_factorial_recurrence(n in 1u32..=80, k in 1u32..=20) {
        prop_assume!(k <= n);
        let lhs = partial_factorial(n, k);
        let rhs = f64::from(n) * partial_factorial(n - 1, k - 1);
        prop_assert!(((lhs - rhs) / lhs).abs() < 1e-12, "lhs={lhs}, rhs={rhs}");
    }

    /// Zero terms is the empty product.
    #[test]
    fn partial_factorial_zero_terms(n in 0u32..=120) {
        prop_assert!((partial_factorial(n, 0) - 1.0).abs() < f64::EPSILON);
    }
}

// ── Probability Properties ──────────────────────────────────

proptest! {
    /// Every probability lies in [0, 1].
    #[test]
    fn probability_in_unit_interval(marked in 0u32..=20, caught in 0u32..=20) {
        let p = standard_keno_probability(marked, caught);
        prop_assert!((0.0..=1.0 + 1e-12).contains(&p), "P({marked}, {caught}) = {p}");
    }

    /// Catching more than marked is impossible.
    #[test]
    fn probability_zero_above_marked(marked in 0u32..=19, extra in 1u32..=5) {
        prop_assert!(standard_keno_probability(marked, marked + extra).abs() < f64::EPSILON);
    }

    /// Total probability law holds for any valid variant.
    #[test]
    fn rows_sum_to_one_for_any_rules(rules in game_rules()) {
        let matrix = ProbabilityMatrix::compute(&rules).expect("strategy yields valid rules");
        prop_assert_eq!(matrix.rows(), rules.max_spots as usize);
        prop_assert_eq!(matrix.columns(), rules.max_spots as usize + 1);
        for marked in 1..=matrix.rows() {
            let sum = matrix.row_sum(marked);
            prop_assert!((sum - 1.0).abs() < 1e-9, "{rules:?}: row {marked} sums to {sum}");
        }
    }

    /// Cells above the diagonal are zero and match the direct formula below it.
    #[test]
    fn matrix_matches_direct_formula(rules in game_rules()) {
        let matrix = ProbabilityMatrix::compute(&rules).expect("strategy yields valid rules");
        for marked in 1..=rules.max_spots {
            for caught in 0..=rules.max_spots {
                let cell = matrix.get(marked as usize, caught as usize);
                if caught > marked {
                    prop_assert!(cell.abs() < f64::EPSILON);
                } else {
                    let direct = keno_probability(&rules, marked, caught);
                    prop_assert!((cell - direct).abs() < f64::EPSILON);
                }
            }
        }
    }
}

// ── Expected Value Properties ───────────────────────────────

proptest! {
    /// Any valid non-negative payout sheet yields finite, non-negative values.
    #[test]
    fn expected_values_finite_non_negative(
        prizes in prop::collection::vec(0u32..=50_000, 1..=45),
    ) {
        // Fill a lower-triangular sheet of up to 9 rows from the flat prize list
        let mut rows = Vec::new();
        let mut remaining = prizes.as_slice();
        for spots in 1..=9usize {
            if remaining.is_empty() {
                break;
            }
            let take = spots.min(remaining.len());
            rows.push(
                remaining[..take]
                    .iter()
                    .map(|&p| rust_decimal::Decimal::from(p))
                    .collect::<Vec<_>>(),
            );
            remaining = &remaining[take..];
        }

        let table = PayoutTable::new(rows).expect("lower-triangular sheet is valid");
        let matrix = ProbabilityMatrix::compute(&GameRules::STANDARD).expect("standard rules");
        let evs = ExpectedValues::compute(&matrix, &table).expect("sheet fits matrix");

        prop_assert_eq!(evs.len(), table.rows());
        for (spots, ev) in evs.iter() {
            prop_assert!(ev.is_finite(), "{spots} spots: {ev}");
            prop_assert!(ev >= 0.0, "{spots} spots: {ev}");
        }
    }
}
