/* ************************************************************************ **
** This file is part of fcsym, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Operator impls.  All operators take their operands by value;
//! both types are small and `Copy`.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{M33, V3};

impl Add for V3 {
    type Output = V3;

    #[inline]
    fn add(self, other: V3) -> V3
    { V3::from_fn(|k| self.0[k] + other.0[k]) }
}

impl Sub for V3 {
    type Output = V3;

    #[inline]
    fn sub(self, other: V3) -> V3
    { V3::from_fn(|k| self.0[k] - other.0[k]) }
}

impl Neg for V3 {
    type Output = V3;

    #[inline]
    fn neg(self) -> V3
    { self.map(|x| -x) }
}

impl Mul<f64> for V3 {
    type Output = V3;

    #[inline]
    fn mul(self, scalar: f64) -> V3
    { self.map(|x| x * scalar) }
}

impl Mul<V3> for f64 {
    type Output = V3;

    #[inline]
    fn mul(self, vector: V3) -> V3
    { vector * self }
}

impl Div<f64> for V3 {
    type Output = V3;

    #[inline]
    fn div(self, scalar: f64) -> V3
    { self.map(|x| x / scalar) }
}

impl AddAssign for V3 {
    #[inline]
    fn add_assign(&mut self, other: V3)
    { *self = *self + other; }
}

impl SubAssign for V3 {
    #[inline]
    fn sub_assign(&mut self, other: V3)
    { *self = *self - other; }
}

impl MulAssign<f64> for V3 {
    #[inline]
    fn mul_assign(&mut self, scalar: f64)
    { *self = *self * scalar; }
}

// ---------------------------------------------------------------------------

impl Add for M33 {
    type Output = M33;

    #[inline]
    fn add(self, other: M33) -> M33
    { M33::from_fn(|r, c| self.0[r].0[c] + other.0[r].0[c]) }
}

impl Sub for M33 {
    type Output = M33;

    #[inline]
    fn sub(self, other: M33) -> M33
    { M33::from_fn(|r, c| self.0[r].0[c] - other.0[r].0[c]) }
}

impl Neg for M33 {
    type Output = M33;

    #[inline]
    fn neg(self) -> M33
    { M33::from_fn(|r, c| -self.0[r].0[c]) }
}

impl Mul<f64> for M33 {
    type Output = M33;

    #[inline]
    fn mul(self, scalar: f64) -> M33
    { M33::from_fn(|r, c| self.0[r].0[c] * scalar) }
}

impl Div<f64> for M33 {
    type Output = M33;

    #[inline]
    fn div(self, scalar: f64) -> M33
    { M33::from_fn(|r, c| self.0[r].0[c] / scalar) }
}

impl AddAssign for M33 {
    #[inline]
    fn add_assign(&mut self, other: M33)
    { *self = *self + other; }
}

impl SubAssign for M33 {
    #[inline]
    fn sub_assign(&mut self, other: M33)
    { *self = *self - other; }
}

impl DivAssign<f64> for M33 {
    #[inline]
    fn div_assign(&mut self, scalar: f64)
    { *self = *self / scalar; }
}

/// Matrix product.
impl Mul for M33 {
    type Output = M33;

    #[inline]
    fn mul(self, other: M33) -> M33
    { M33::from_fn(|r, c| (0..3).map(|k| self.0[r].0[k] * other.0[k].0[c]).sum()) }
}

/// Row vector times matrix.
impl Mul<M33> for V3 {
    type Output = V3;

    #[inline]
    fn mul(self, m: M33) -> V3
    { V3::from_fn(|c| (0..3).map(|k| self.0[k] * m.0[k].0[c]).sum()) }
}

/// Matrix times column vector.
impl Mul<V3> for M33 {
    type Output = V3;

    #[inline]
    fn mul(self, v: V3) -> V3
    { V3::from_fn(|r| V3::dot(&self.0[r], &v)) }
}
