// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

pub trait PolynomialEval<T> {
    fn eval(self, x: &T) -> T;
}

pub trait Derivative {
    type Output;
    fn derivative(self) -> Self::Output;
}

/// indefinite integral, with the constant of integration set to zero
pub trait Integral {
    type Output;
    fn integral(self) -> Self::Output;
}
