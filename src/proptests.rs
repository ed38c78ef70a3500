// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Property-based tests for polynomial arithmetic.

use crate::polynomial::Polynomial;
use num_rational::Ratio;
use proptest::prelude::*;

fn small_coefficient() -> impl Strategy<Value = i64> {
    -100i64..100i64
}

// degree 0 to 5, never empty
fn small_poly() -> impl Strategy<Value = Polynomial<i64>> {
    proptest::collection::vec(small_coefficient(), 1..=6).prop_map(Polynomial::from_coefficients)
}

proptest! {
    #[test]
    fn poly_add_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(a.try_add(&b), b.try_add(&a));
    }

    #[test]
    fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(a.try_mul(&b), b.try_mul(&a));
    }

    #[test]
    fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
    }

    #[test]
    fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
        let left = &a * &(&b + &c);
        let right = &(&a * &b) + &(&a * &c);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn poly_mul_degree(a in small_poly(), b in small_poly()) {
        let product = &a * &b;
        prop_assert_eq!(
            product.degree(),
            Some(a.degree().unwrap() + b.degree().unwrap())
        );
    }

    #[test]
    fn poly_add_sub_round_trip(p in small_poly(), q in small_poly()) {
        let round_trip = p.try_add(&q).and_then(|sum| sum.try_sub(&q)).unwrap();
        prop_assert_eq!(round_trip.len(), p.len().max(q.len()));
        if q.len() <= p.len() {
            prop_assert_eq!(&round_trip, &p);
        }
        for x in -3..=3 {
            prop_assert_eq!(round_trip.evaluate(&x), p.evaluate(&x));
        }
    }

    #[test]
    fn poly_eval_is_homomorphic(a in small_poly(), b in small_poly(), x in -3i64..=3) {
        prop_assert_eq!((&a + &b).evaluate(&x), a.evaluate(&x) + b.evaluate(&x));
        prop_assert_eq!((&a - &b).evaluate(&x), a.evaluate(&x) - b.evaluate(&x));
        prop_assert_eq!((&a * &b).evaluate(&x), a.evaluate(&x) * b.evaluate(&x));
        prop_assert_eq!(a.mul_scalar(&7).evaluate(&x), a.evaluate(&x) * 7);
    }

    #[test]
    fn poly_get_out_of_range_is_zero(p in small_poly(), exponent in any::<i64>()) {
        prop_assume!(exponent < 0 || exponent >= p.len() as i64);
        prop_assert_eq!(p.get(exponent), 0);
    }

    #[test]
    fn poly_derivative_of_integral(p in small_poly()) {
        let p: Polynomial<Ratio<i64>> = p.into();
        prop_assert_eq!(p.integral().derivative(), p);
    }

    #[test]
    fn poly_derivative_degree(p in small_poly()) {
        prop_assert_eq!(p.derivative().degree(), p.degree().unwrap().checked_sub(1));
    }

    #[test]
    fn poly_parse_explicit_terms(p in small_poly()) {
        let line = p
            .iter()
            .enumerate()
            .map(|(exponent, coefficient)| format!("{}x^{}", coefficient, exponent))
            .collect::<Vec<_>>()
            .join(" ");
        let mut parsed = Polynomial::from_coefficients(vec![0; p.len()]);
        parsed.parse_into(&line).unwrap();
        prop_assert_eq!(&parsed, &p);
        prop_assert_eq!(line.parse::<Polynomial<i64>>(), Ok(p));
    }
}
