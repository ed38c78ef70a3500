// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
pub use crate::{
    polynomial::{Notation, Polynomial, PolynomialError},
    traits::{Derivative as _, Integral as _, PolynomialEval as _},
};
pub use num_traits::{CheckedAdd as _, CheckedMul as _, CheckedSub as _};
