// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::traits::{Derivative, Integral, PolynomialEval};
use log::debug;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{Num, NumAssign, PrimInt, Zero};
use std::fmt;
use std::mem;
use std::slice;
use std::vec;
use thiserror::Error;

mod add_sub;
mod mul;
mod parse;

pub use self::parse::MAX_PARSED_DEGREE;

pub trait PolynomialCoefficient: Num + NumAssign + Clone {}

impl<T: Num + NumAssign + Clone> PolynomialCoefficient for T {}

fn fmt_degree(degree: &Option<usize>) -> String {
    match degree {
        Some(degree) => degree.to_string(),
        None => "-1 (empty)".into(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum PolynomialError {
    #[error("operand polynomial is empty")]
    InvalidOperand,
    #[error(
        "exponent {exponent} is out of range for polynomial of degree {}",
        fmt_degree(.degree)
    )]
    IndexOutOfRange {
        exponent: usize,
        degree: Option<usize>,
    },
    #[error(
        "parsed exponent {exponent} exceeds polynomial degree {}",
        fmt_degree(.degree)
    )]
    ParseExponentOutOfRange {
        exponent: usize,
        degree: Option<usize>,
    },
    #[error("invalid coefficient `{text}` at byte {position}")]
    InvalidCoefficient { text: String, position: usize },
    #[error("invalid exponent `{text}` at byte {position}")]
    InvalidExponent { text: String, position: usize },
    #[error("malformed term at byte {position}")]
    MalformedTerm { position: usize },
}

/// panics with the error's message; used by the operator trait impls
fn unwrap_operation<T>(result: Result<Polynomial<T>, PolynomialError>) -> Polynomial<T> {
    result.unwrap_or_else(|err| panic!("{}", err))
}

impl From<PolynomialError> for std::io::Error {
    fn from(err: PolynomialError) -> Self {
        Self::new(std::io::ErrorKind::InvalidInput, err)
    }
}

/// How the variable is spelled when formatting and parsing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Notation {
    pub variable: char,
}

impl Notation {
    pub const fn new(variable: char) -> Self {
        Self { variable }
    }
}

impl Default for Notation {
    fn default() -> Self {
        Self::new('x')
    }
}

/// A dense single-variable polynomial.
///
/// the term at index `n` is `self.coefficients()[n] * pow(x, n)`
///
/// Unlike a normalized polynomial, trailing zero coefficients are kept: the
/// degree is whatever was constructed, so `3x^2 + 0x + 1` and
/// `0x^3 + 3x^2 + 0x + 1` are different values.
///
/// # Invariants
///
/// `self.degree() == self.coefficients().len().checked_sub(1)`; the empty
/// polynomial has no coefficients and no degree.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Polynomial<T> {
    coefficients: Vec<T>,
}

impl<T> Default for Polynomial<T> {
    fn default() -> Self {
        Self {
            coefficients: Vec::default(),
        }
    }
}

impl<T: Clone + Integer> From<Polynomial<T>> for Polynomial<Ratio<T>> {
    fn from(src: Polynomial<T>) -> Self {
        let coefficients = src.into_iter().map(Into::into).collect();
        Self { coefficients }
    }
}

impl<T> Polynomial<T> {
    /// Creates a polynomial from coefficients listed highest degree first.
    ///
    /// ```
    /// use dense_polynomial::polynomial::Polynomial;
    /// let poly = Polynomial::new(vec![3, 0, -4]);
    /// assert_eq!(poly.degree(), Some(2));
    /// assert_eq!(poly.coefficients(), &[-4, 0, 3]);
    /// ```
    pub fn new(mut highest_first: Vec<T>) -> Self {
        highest_first.reverse();
        Self {
            coefficients: highest_first,
        }
    }
    /// Creates a polynomial from coefficients listed lowest degree first.
    pub fn from_coefficients(coefficients: Vec<T>) -> Self {
        Self { coefficients }
    }
    pub fn empty() -> Self {
        Self::default()
    }
    /// Moves the coefficients out, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }
    pub fn into_coefficients(self) -> Vec<T> {
        self.coefficients
    }
    pub fn iter(&self) -> slice::Iter<T> {
        self.coefficients.iter()
    }
    pub fn iter_mut(&mut self) -> slice::IterMut<T> {
        self.coefficients.iter_mut()
    }
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }
    /// returns the coefficient of `x^exponent`, or zero if there is no such term
    ///
    /// Any primitive integer is accepted, so negative exponents read zero:
    ///
    /// ```
    /// use dense_polynomial::polynomial::Polynomial;
    /// let poly = Polynomial::new(vec![3, 0, -4]);
    /// assert_eq!(poly.get(-1), 0);
    /// assert_eq!(poly.get(2u8), 3);
    /// ```
    ///
    /// Fractional exponents are not integers and don't compile:
    ///
    /// ```compile_fail
    /// use dense_polynomial::polynomial::Polynomial;
    /// let poly = Polynomial::new(vec![3, 0, -4]);
    /// poly.get(-0.5);
    /// ```
    pub fn get<E: PrimInt>(&self, exponent: E) -> T
    where
        T: Zero + Clone,
    {
        exponent
            .to_usize()
            .and_then(|exponent| self.coefficients.get(exponent))
            .cloned()
            .unwrap_or_else(T::zero)
    }
    pub fn get_mut(&mut self, exponent: usize) -> Result<&mut T, PolynomialError> {
        let degree = self.degree();
        match self.coefficients.get_mut(exponent) {
            Some(coefficient) => Ok(coefficient),
            None => {
                debug!(
                    "rejected write to exponent {} of polynomial with degree {:?}",
                    exponent, degree
                );
                Err(PolynomialError::IndexOutOfRange { exponent, degree })
            }
        }
    }
    pub fn set(&mut self, exponent: usize, value: T) -> Result<(), PolynomialError> {
        *self.get_mut(exponent)? = value;
        Ok(())
    }
    pub fn display(&self, notation: Notation) -> PolynomialDisplay<T> {
        PolynomialDisplay {
            polynomial: self,
            notation,
        }
    }
}

impl<T: PolynomialCoefficient> Polynomial<T> {
    /// Sums `coefficient * pow(x, n)` term by term, from the constant term up.
    ///
    /// Each power is computed independently with `num_traits::pow`, not by
    /// Horner's rule.
    pub fn evaluate(&self, x: &T) -> T {
        let mut retval = T::zero();
        for (power, coefficient) in self.iter().enumerate() {
            retval += coefficient.clone() * num_traits::pow(x.clone(), power);
        }
        retval
    }
    pub fn derivative(&self) -> Self {
        let mut factor = T::zero();
        let coefficients = self
            .iter()
            .skip(1)
            .map(|coefficient| {
                factor += T::one();
                coefficient.clone() * factor.clone()
            })
            .collect();
        Self { coefficients }
    }
    /// Indefinite integral with a zero constant of integration.
    ///
    /// Integer coefficients divide with truncation; convert to
    /// `Polynomial<Ratio<_>>` first for an exact result.
    pub fn integral(&self) -> Self {
        let mut coefficients = Vec::with_capacity(self.len() + 1);
        coefficients.push(T::zero());
        let mut divisor = T::zero();
        for coefficient in self.iter() {
            divisor += T::one();
            coefficients.push(coefficient.clone() / divisor.clone());
        }
        Self { coefficients }
    }
}

impl<'a, T: PolynomialCoefficient> PolynomialEval<T> for &'a Polynomial<T> {
    fn eval(self, x: &T) -> T {
        self.evaluate(x)
    }
}

impl<'a, T: PolynomialCoefficient> Derivative for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn derivative(self) -> Polynomial<T> {
        Polynomial::derivative(self)
    }
}

impl<'a, T: PolynomialCoefficient> Integral for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn integral(self) -> Polynomial<T> {
        Polynomial::integral(self)
    }
}

impl<T> IntoIterator for Polynomial<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.coefficients.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Polynomial<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Polynomial<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Formats a [`Polynomial`] with a chosen [`Notation`].
#[derive(Copy, Clone, Debug)]
pub struct PolynomialDisplay<'a, T> {
    polynomial: &'a Polynomial<T>,
    notation: Notation,
}

impl<T> fmt::Display for PolynomialDisplay<'_, T>
where
    T: PolynomialCoefficient + PartialOrd + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let zero = T::zero();
        let one = T::one();
        let mut first = true;
        for (power, coefficient) in self.polynomial.iter().enumerate().rev() {
            if !first && *coefficient >= zero {
                write!(f, " + ")?;
            }
            let magnitude = if *coefficient < zero {
                write!(f, " - ")?;
                zero.clone() - coefficient.clone()
            } else {
                coefficient.clone()
            };
            if magnitude != one || power == 0 {
                write!(f, "{}", magnitude)?;
            }
            if power != 0 {
                write!(f, "{}", self.notation.variable)?;
            }
            if power > 1 {
                write!(f, "^{}", power)?;
            }
            first = false;
        }
        Ok(())
    }
}

impl<T> fmt::Display for Polynomial<T>
where
    T: PolynomialCoefficient + PartialOrd + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.display(Notation::default()).fmt(f)
    }
}
