// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Dense single-variable polynomials over a generic numeric coefficient type.
//!
//! ```
//! use dense_polynomial::prelude::*;
//! let p = dense_polynomial::poly![3, 0, -4];
//! let q = dense_polynomial::poly![1, 2];
//! assert_eq!((&p * &q).to_string(), "3x^3 + 6x^2 - 4x - 8");
//! assert_eq!(p.evaluate(&2), 8);
//! assert_eq!(p.derivative().to_string(), "6x + 0");
//! ```

pub mod polynomial;
pub mod prelude;
pub mod traits;
#[cfg(test)]
mod util;

#[cfg(test)]
mod proptests;

/// Builds a [`Polynomial`](crate::polynomial::Polynomial) from coefficients
/// listed highest degree first, so `poly![3, 0, -4]` is `3x^2 - 4`.
#[macro_export]
macro_rules! poly {
    ($($coefficient:expr),* $(,)?) => {
        $crate::polynomial::Polynomial::new(vec![$($coefficient),*])
    };
}
