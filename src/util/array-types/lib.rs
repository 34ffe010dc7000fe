/* ************************************************************************ **
** This file is part of fcsym, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Fixed-shape vector and matrix types for three-dimensional crystal math.
//!
//! Everything here is specialized to `f64`, because that is the only scalar
//! type that appears in force-constant work.  The types deref to their
//! backing arrays, so ordinary indexing syntax works on them.

use std::fmt;
use std::ops::{Deref, DerefMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod ops;

/// A 3-dimensional row vector.
#[derive(Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct V3(pub [f64; 3]);

/// A dense 3x3 matrix, stored as three row vectors.
///
/// By convention, vectors in this crate are *row* vectors, so a linear map
/// is applied as `v * m`.  `m * v` treats the argument as a column vector.
#[derive(Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct M33(pub [V3; 3]);

impl Deref for V3 {
    type Target = [f64; 3];

    #[inline(always)]
    fn deref(&self) -> &Self::Target
    { &self.0 }
}

impl DerefMut for V3 {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target
    { &mut self.0 }
}

impl Deref for M33 {
    type Target = [V3; 3];

    #[inline(always)]
    fn deref(&self) -> &Self::Target
    { &self.0 }
}

impl DerefMut for M33 {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target
    { &mut self.0 }
}

// forward the debug impls without the constructor names, so that debug
// output remains valid JSON / Python (a small mercy while debugging)
impl fmt::Debug for V3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.0, f) }
}

impl fmt::Debug for M33 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.0, f) }
}

impl V3 {
    /// Get a zero vector.
    #[inline]
    pub fn zero() -> Self
    { V3([0.0; 3]) }

    /// Construct a vector from a function on indices.
    #[inline]
    pub fn from_fn<F>(mut f: F) -> Self
    where F: FnMut(usize) -> f64,
    { V3([f(0), f(1), f(2)]) }

    /// Apply a function to each element.
    #[inline]
    pub fn map<F>(self, mut f: F) -> Self
    where F: FnMut(f64) -> f64,
    { V3([f(self.0[0]), f(self.0[1]), f(self.0[2])]) }

    /// Get the inner product of two vectors.
    #[inline]
    pub fn dot(a: &V3, b: &V3) -> f64
    { a.0[0] * b.0[0] + a.0[1] * b.0[1] + a.0[2] * b.0[2] }

    /// Get the squared magnitude of the vector.
    #[inline]
    pub fn sqnorm(&self) -> f64
    { V3::dot(self, self) }

    /// Get the magnitude of the vector.
    #[inline]
    pub fn norm(&self) -> f64
    { self.sqnorm().sqrt() }
}

impl M33 {
    /// Get a zero matrix.
    #[inline]
    pub fn zero() -> Self
    { M33([V3::zero(); 3]) }

    /// Get an identity matrix.
    #[inline]
    pub fn eye() -> Self
    { M33::from_fn(|r, c| (r == c) as i32 as f64) }

    /// Construct a matrix from a function on (row, column) indices.
    #[inline]
    pub fn from_fn<F>(mut f: F) -> Self
    where F: FnMut(usize, usize) -> f64,
    { M33([
        V3([f(0, 0), f(0, 1), f(0, 2)]),
        V3([f(1, 0), f(1, 1), f(1, 2)]),
        V3([f(2, 0), f(2, 1), f(2, 2)]),
    ]) }

    /// Construct a matrix from a nested array of rows.
    #[inline]
    pub fn from_array(arr: [[f64; 3]; 3]) -> Self
    { M33([V3(arr[0]), V3(arr[1]), V3(arr[2])]) }

    /// Destructure into a nested array of rows.
    #[inline]
    pub fn into_array(self) -> [[f64; 3]; 3]
    { [self.0[0].0, self.0[1].0, self.0[2].0] }

    /// Matrix transpose.
    #[inline]
    pub fn t(&self) -> M33
    { M33::from_fn(|r, c| self.0[c].0[r]) }

    /// Matrix determinant.
    pub fn det(&self) -> f64 {
        let m = &self.0;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Matrix inverse, by cofactor expansion.
    ///
    /// Panics on singular input, which for the lattices this crate is used
    /// with would indicate a malformed cell.
    pub fn inv(&self) -> M33 {
        let det = self.det();
        assert!(det != 0.0, "matrix not invertible");
        let m = &self.0;
        let cofactor = |r: usize, c: usize| {
            let (r1, r2) = ((r + 1) % 3, (r + 2) % 3);
            let (c1, c2) = ((c + 1) % 3, (c + 2) % 3);
            m[r1][c1] * m[r2][c2] - m[r1][c2] * m[r2][c1]
        };
        // transposed cofactor matrix, over the determinant
        M33::from_fn(|r, c| cofactor(c, r) / det)
    }
}
