// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

/// Asserts that `$l $op $r` gives `$expected` whichever operand is borrowed,
/// and that the compound assignment `$op_assign` agrees with it.
macro_rules! assert_binary_op {
    ($l:expr, $r:expr, $expected:expr, $op:tt, $op_assign:tt) => {{
        let (l, r, expected) = (&$l, &$r, &$expected);
        assert_eq!(l $op r, *expected, "{:?} {} &{:?}", l, stringify!($op), r);
        assert_eq!(l.clone() $op r, *expected);
        assert_eq!(l $op r.clone(), *expected);
        assert_eq!(l.clone() $op r.clone(), *expected);
        let mut by_ref = l.clone();
        by_ref $op_assign r;
        assert_eq!(by_ref, *expected);
        let mut by_value = l.clone();
        by_value $op_assign r.clone();
        assert_eq!(by_value, *expected);
    }};
}

pub(crate) use assert_binary_op;
