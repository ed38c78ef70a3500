// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::polynomial::{unwrap_operation, Polynomial, PolynomialCoefficient, PolynomialError};
use log::debug;
use num_traits::{CheckedAdd, CheckedSub};
use std::cmp;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// combines coefficients of equal exponent, reading missing terms as zero
fn pairwise_op<T: PolynomialCoefficient, Op: Fn(T, T) -> T>(
    lhs: &Polynomial<T>,
    rhs: &Polynomial<T>,
    op: Op,
) -> Result<Polynomial<T>, PolynomialError> {
    if lhs.is_empty() || rhs.is_empty() {
        debug!(
            "rejected pairwise op on empty operand: lhs len {}, rhs len {}",
            lhs.len(),
            rhs.len()
        );
        return Err(PolynomialError::InvalidOperand);
    }
    let len = cmp::max(lhs.len(), rhs.len());
    Ok(Polynomial::from_coefficients(
        (0..len)
            .map(|exponent| op(lhs.get(exponent), rhs.get(exponent)))
            .collect(),
    ))
}

impl<T: PolynomialCoefficient> Polynomial<T> {
    /// The result has the larger of the two degrees, even if its leading
    /// coefficient cancels to zero.
    pub fn try_add(&self, rhs: &Self) -> Result<Self, PolynomialError> {
        pairwise_op(self, rhs, Add::add)
    }
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, PolynomialError> {
        pairwise_op(self, rhs, Sub::sub)
    }
}

impl<'a, T: PolynomialCoefficient> Add for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(self, rhs: Self) -> Self::Output {
        unwrap_operation(self.try_add(rhs))
    }
}

impl<'a, T: PolynomialCoefficient> Add<Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(self, rhs: Polynomial<T>) -> Self::Output {
        self + &rhs
    }
}

impl<'a, T: PolynomialCoefficient> Add<&'a Polynomial<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(self, rhs: &'a Polynomial<T>) -> Self::Output {
        &self + rhs
    }
}

impl<T: PolynomialCoefficient> Add for Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(self, rhs: Polynomial<T>) -> Self::Output {
        &self + &rhs
    }
}

impl<T: PolynomialCoefficient> AddAssign for Polynomial<T> {
    fn add_assign(&mut self, rhs: Polynomial<T>) {
        *self = &*self + &rhs;
    }
}

impl<'a, T: PolynomialCoefficient> AddAssign<&'a Polynomial<T>> for Polynomial<T> {
    fn add_assign(&mut self, rhs: &'a Polynomial<T>) {
        *self = &*self + rhs;
    }
}

impl<T: PolynomialCoefficient> CheckedAdd for Polynomial<T> {
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        self.try_add(rhs).ok()
    }
}

impl<'a, T: PolynomialCoefficient> Sub for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn sub(self, rhs: Self) -> Self::Output {
        unwrap_operation(self.try_sub(rhs))
    }
}

impl<'a, T: PolynomialCoefficient> Sub<Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn sub(self, rhs: Polynomial<T>) -> Self::Output {
        self - &rhs
    }
}

impl<'a, T: PolynomialCoefficient> Sub<&'a Polynomial<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn sub(self, rhs: &'a Polynomial<T>) -> Self::Output {
        &self - rhs
    }
}

impl<T: PolynomialCoefficient> Sub for Polynomial<T> {
    type Output = Polynomial<T>;
    fn sub(self, rhs: Polynomial<T>) -> Self::Output {
        &self - &rhs
    }
}

impl<T: PolynomialCoefficient> SubAssign for Polynomial<T> {
    fn sub_assign(&mut self, rhs: Polynomial<T>) {
        *self = &*self - &rhs;
    }
}

impl<'a, T: PolynomialCoefficient> SubAssign<&'a Polynomial<T>> for Polynomial<T> {
    fn sub_assign(&mut self, rhs: &'a Polynomial<T>) {
        *self = &*self - rhs;
    }
}

impl<T: PolynomialCoefficient> CheckedSub for Polynomial<T> {
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        self.try_sub(rhs).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::assert_binary_op;
    use num_rational::Ratio;

    #[test]
    fn test_add() {
        let test = |l: Polynomial<i32>, r: Polynomial<i32>, expected: Polynomial<i32>| {
            assert_binary_op!(l, r, expected, +, +=);
        };
        test(
            Polynomial::new(vec![3, 0, -4]),
            Polynomial::new(vec![1, 2]),
            Polynomial::new(vec![3, 1, -2]),
        );
        test(
            Polynomial::new(vec![1, 2]),
            Polynomial::new(vec![3, 0, -4]),
            Polynomial::new(vec![3, 1, -2]),
        );
        test(
            Polynomial::from_coefficients(vec![1, 2, 3, 4, -1]),
            Polynomial::from_coefficients(vec![5, 6, 7, 8, 1]),
            Polynomial::from_coefficients(vec![6, 8, 10, 12, 0]),
        );
    }

    #[test]
    fn test_add_ratio() {
        let test = |l: Polynomial<Ratio<i64>>,
                    r: Polynomial<Ratio<i64>>,
                    expected: Polynomial<Ratio<i64>>| {
            assert_binary_op!(l, r, expected, +, +=);
        };
        let r = |n: i64, d: i64| Ratio::new(n, d);
        test(
            Polynomial::from_coefficients(vec![r(1, 3), r(2, 3), r(3, 3), r(4, 3)]),
            Polynomial::from_coefficients(vec![r(8, 5), r(7, 5), r(6, 5), r(5, 5)]),
            Polynomial::from_coefficients(vec![r(29, 15), r(31, 15), r(11, 5), r(7, 3)]),
        );
    }

    #[test]
    fn test_sub() {
        let test = |l: Polynomial<i32>, r: Polynomial<i32>, expected: Polynomial<i32>| {
            assert_binary_op!(l, r, expected, -, -=);
        };
        test(
            Polynomial::new(vec![3, 0, -4]),
            Polynomial::new(vec![1, 2]),
            Polynomial::new(vec![3, -1, -6]),
        );
        test(
            Polynomial::new(vec![1, 2]),
            Polynomial::new(vec![3, 0, -4]),
            Polynomial::new(vec![-3, 1, 6]),
        );
        // cancellation keeps the degree
        test(
            Polynomial::new(vec![1, 2]),
            Polynomial::new(vec![1, 2]),
            Polynomial::new(vec![0, 0]),
        );
    }

    #[test]
    fn test_add_sub_round_trip() {
        let p = Polynomial::new(vec![3, 0, -4]);
        let q = Polynomial::new(vec![1, 2]);
        assert_eq!(p.try_add(&q).and_then(|s| s.try_sub(&q)), Ok(p.clone()));
        // q has the smaller degree, so the round trip widens it
        let widened = q.try_add(&p).and_then(|s| s.try_sub(&p)).unwrap();
        assert_eq!(widened, Polynomial::new(vec![0, 1, 2]));
        assert_ne!(widened, q);
        for x in -5..=5 {
            assert_eq!(widened.evaluate(&x), q.evaluate(&x));
        }
    }

    #[test]
    fn test_empty_operand() {
        let p = Polynomial::new(vec![1, 2]);
        let empty = Polynomial::<i32>::empty();
        assert_eq!(p.try_add(&empty), Err(PolynomialError::InvalidOperand));
        assert_eq!(empty.try_add(&p), Err(PolynomialError::InvalidOperand));
        assert_eq!(empty.try_sub(&empty), Err(PolynomialError::InvalidOperand));
        assert_eq!(p.checked_add(&empty), None);
        assert_eq!(p.checked_sub(&empty), None);
        assert_eq!(p.checked_sub(&p), Some(Polynomial::new(vec![0, 0])));
    }

    #[test]
    #[should_panic(expected = "operand polynomial is empty")]
    fn test_add_empty_panics() {
        let _ = Polynomial::new(vec![1]) + Polynomial::empty();
    }
}
