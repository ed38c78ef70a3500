// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Reading polynomials from a single line of text.
//!
//! A line is a sequence of terms, each either a bare number (the constant
//! term) or `<number> <variable> ^ <exponent>`, with optional whitespace
//! between the pieces: `3x^2 -4`, `3 x ^ 2 -4` and `-4 3x^2` all describe
//! the same terms. Numbers are parsed with [`Num::from_str_radix`] in base
//! 10, so `2.5` or `3/4` work for floating-point or rational coefficients.
//!
//! The output of [`fmt::Display`](std::fmt::Display) is not accepted back in
//! general: it separates terms with ` + `/` - `, omits unit coefficients and
//! writes `x` rather than `x^1`.

use crate::polynomial::{Notation, Polynomial, PolynomialCoefficient, PolynomialError};
use log::{debug, trace};
use num_traits::Num;
use std::marker::PhantomData;
use std::str::FromStr;

/// Largest degree [`Polynomial::parse_with`] will allocate for; `parse_into`
/// never allocates and is bounded by the target's degree instead.
pub const MAX_PARSED_DEGREE: usize = 1 << 20;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Term<T> {
    exponent: usize,
    coefficient: T,
}

struct Terms<'a, T> {
    text: &'a str,
    position: usize,
    variable: char,
    _phantom: PhantomData<fn() -> T>,
}

impl<'a, T: PolynomialCoefficient> Terms<'a, T> {
    fn new(text: &'a str, notation: Notation) -> Self {
        Self {
            text,
            position: 0,
            variable: notation.variable,
            _phantom: PhantomData,
        }
    }
    fn rest(&self) -> &'a str {
        &self.text[self.position..]
    }
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }
    fn bump(&mut self, ch: char) {
        self.position += ch.len_utf8();
    }
    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.position += rest.len() - rest.trim_start().len();
    }
    fn take_while<F: Fn(char) -> bool>(&mut self, f: F) -> &'a str {
        let rest = self.rest();
        let len = rest.find(|ch| !f(ch)).unwrap_or_else(|| rest.len());
        self.position += len;
        &rest[..len]
    }
    fn parse_term(&mut self) -> Result<Term<T>, PolynomialError> {
        let variable = self.variable;
        let coefficient_start = self.position;
        let text = self.take_while(|ch| !ch.is_whitespace() && ch != variable && ch != '^');
        if text.is_empty() {
            return Err(PolynomialError::MalformedTerm {
                position: coefficient_start,
            });
        }
        let coefficient =
            <T as Num>::from_str_radix(text, 10).map_err(|_| PolynomialError::InvalidCoefficient {
                text: text.into(),
                position: coefficient_start,
            })?;
        let after_coefficient = self.position;
        self.skip_whitespace();
        if self.peek() != Some(variable) {
            self.position = after_coefficient;
            return Ok(Term {
                exponent: 0,
                coefficient,
            });
        }
        self.bump(variable);
        self.skip_whitespace();
        if self.peek() != Some('^') {
            return Err(PolynomialError::MalformedTerm {
                position: self.position,
            });
        }
        self.bump('^');
        self.skip_whitespace();
        let exponent_start = self.position;
        let digits = self.take_while(|ch| ch.is_ascii_digit());
        if digits.is_empty() {
            return Err(PolynomialError::MalformedTerm {
                position: exponent_start,
            });
        }
        let exponent = digits
            .parse()
            .map_err(|_| PolynomialError::InvalidExponent {
                text: digits.into(),
                position: exponent_start,
            })?;
        Ok(Term {
            exponent,
            coefficient,
        })
    }
}

impl<T: PolynomialCoefficient> Iterator for Terms<'_, T> {
    type Item = Result<Term<T>, PolynomialError>;
    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        if self.rest().is_empty() {
            return None;
        }
        let term = self.parse_term();
        if term.is_err() {
            // stop after the first error
            self.position = self.text.len();
        }
        Some(term)
    }
}

fn parse_terms<T: PolynomialCoefficient>(
    line: &str,
    notation: Notation,
) -> Result<Vec<Term<T>>, PolynomialError> {
    Terms::new(line, notation)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| {
            debug!("failed to parse polynomial {:?}: {}", line, err);
            err
        })
}

impl<T: PolynomialCoefficient> Polynomial<T> {
    /// All terms are checked before any is written, so `self` is left
    /// unchanged on error.
    fn assign_terms(&mut self, terms: Vec<Term<T>>) -> Result<(), PolynomialError> {
        let degree = self.degree();
        if let Some(term) = terms.iter().find(|term| term.exponent >= self.len()) {
            debug!(
                "parsed exponent {} is past degree {:?}",
                term.exponent, degree
            );
            return Err(PolynomialError::ParseExponentOutOfRange {
                exponent: term.exponent,
                degree,
            });
        }
        for Term {
            exponent,
            coefficient,
        } in terms
        {
            trace!("assigning coefficient of x^{}", exponent);
            self.coefficients[exponent] = coefficient;
        }
        Ok(())
    }
    /// Reads terms from `line` into the existing coefficients, overwriting
    /// them; a bare number replaces the constant term.
    ///
    /// The polynomial never grows: a term whose exponent exceeds the current
    /// degree fails with [`PolynomialError::ParseExponentOutOfRange`].
    ///
    /// ```
    /// use dense_polynomial::polynomial::Polynomial;
    /// let mut poly = Polynomial::new(vec![0, 0, 0]);
    /// poly.parse_into("3x^2 -4").unwrap();
    /// assert_eq!(poly, Polynomial::new(vec![3, 0, -4]));
    /// ```
    pub fn parse_into(&mut self, line: &str) -> Result<(), PolynomialError> {
        self.parse_into_with(line, Notation::default())
    }
    pub fn parse_into_with(
        &mut self,
        line: &str,
        notation: Notation,
    ) -> Result<(), PolynomialError> {
        let terms = parse_terms(line, notation)?;
        self.assign_terms(terms)
    }
    /// Parses `line` into a new polynomial whose degree is the largest
    /// exponent mentioned. An empty line gives the empty polynomial.
    ///
    /// Exponents above [`MAX_PARSED_DEGREE`] fail with
    /// [`PolynomialError::ParseExponentOutOfRange`] rather than allocating.
    pub fn parse_with(line: &str, notation: Notation) -> Result<Self, PolynomialError> {
        let terms = parse_terms(line, notation)?;
        let max_exponent = match terms.iter().map(|term| term.exponent).max() {
            Some(max_exponent) => max_exponent,
            None => return Ok(Self::empty()),
        };
        let too_large = PolynomialError::ParseExponentOutOfRange {
            exponent: max_exponent,
            degree: Some(MAX_PARSED_DEGREE),
        };
        if max_exponent > MAX_PARSED_DEGREE {
            debug!(
                "parsed exponent {} is past the parse limit {}",
                max_exponent, MAX_PARSED_DEGREE
            );
            return Err(too_large);
        }
        let len = max_exponent + 1;
        let mut coefficients = Vec::new();
        coefficients.try_reserve_exact(len).map_err(|err| {
            debug!("can't allocate {} coefficients: {}", len, err);
            too_large
        })?;
        coefficients.resize(len, T::zero());
        let mut retval = Self::from_coefficients(coefficients);
        retval.assign_terms(terms)?;
        Ok(retval)
    }
}

impl<T: PolynomialCoefficient> FromStr for Polynomial<T> {
    type Err = PolynomialError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, Notation::default())
    }
}
