// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::polynomial::{unwrap_operation, Polynomial, PolynomialCoefficient, PolynomialError};
use log::debug;
use num_traits::CheckedMul;
use std::ops::{Mul, MulAssign};

impl<T: PolynomialCoefficient> Polynomial<T> {
    /// Product of two polynomials; the degree of the result is the sum of
    /// the operand degrees.
    pub fn try_mul(&self, rhs: &Self) -> Result<Self, PolynomialError> {
        if self.is_empty() || rhs.is_empty() {
            debug!(
                "rejected mul on empty operand: lhs len {}, rhs len {}",
                self.len(),
                rhs.len()
            );
            return Err(PolynomialError::InvalidOperand);
        }
        let mut coefficients = vec![T::zero(); self.len() + rhs.len() - 1];
        for (l_index, l_coefficient) in self.iter().enumerate() {
            for (r_index, r_coefficient) in rhs.iter().enumerate() {
                coefficients[l_index + r_index] += l_coefficient.clone() * r_coefficient.clone();
            }
        }
        Ok(Polynomial::from_coefficients(coefficients))
    }
    pub fn mul_scalar(&self, scalar: &T) -> Self {
        Polynomial::from_coefficients(
            self.iter()
                .map(|coefficient| coefficient.clone() * scalar.clone())
                .collect(),
        )
    }
}

impl<'a, T: PolynomialCoefficient> Mul for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: &'a Polynomial<T>) -> Polynomial<T> {
        unwrap_operation(self.try_mul(rhs))
    }
}

impl<'a, T: PolynomialCoefficient> Mul<Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: Polynomial<T>) -> Polynomial<T> {
        self * &rhs
    }
}

impl<'a, T: PolynomialCoefficient> Mul<&'a Polynomial<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: &'a Polynomial<T>) -> Polynomial<T> {
        &self * rhs
    }
}

impl<T: PolynomialCoefficient> Mul for Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: Polynomial<T>) -> Polynomial<T> {
        &self * &rhs
    }
}

impl<T: PolynomialCoefficient> MulAssign for Polynomial<T> {
    fn mul_assign(&mut self, rhs: Polynomial<T>) {
        *self = &*self * rhs;
    }
}

impl<'a, T: PolynomialCoefficient> MulAssign<&'a Polynomial<T>> for Polynomial<T> {
    fn mul_assign(&mut self, rhs: &'a Polynomial<T>) {
        *self = &*self * rhs;
    }
}

impl<T: PolynomialCoefficient> CheckedMul for Polynomial<T> {
    fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        self.try_mul(rhs).ok()
    }
}

impl<'a, T: PolynomialCoefficient> Mul<&'a T> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: &T) -> Polynomial<T> {
        self.mul_scalar(rhs)
    }
}

impl<'a, T: PolynomialCoefficient> Mul<T> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: T) -> Polynomial<T> {
        self.mul_scalar(&rhs)
    }
}

impl<'a, T: PolynomialCoefficient> Mul<&'a T> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(mut self, rhs: &T) -> Polynomial<T> {
        self *= rhs;
        self
    }
}

impl<T: PolynomialCoefficient> Mul<T> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(mut self, rhs: T) -> Polynomial<T> {
        self *= &rhs;
        self
    }
}

impl<T: PolynomialCoefficient> MulAssign<T> for Polynomial<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self *= &rhs;
    }
}

impl<'a, T: PolynomialCoefficient> MulAssign<&'a T> for Polynomial<T> {
    fn mul_assign(&mut self, rhs: &T) {
        self.iter_mut().for_each(|v| *v *= rhs.clone());
    }
}
