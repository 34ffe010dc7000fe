use crate::{M33, V3};

use std::ops::{Div, Mul};

/// A Bravais lattice, with the lattice vectors stored as rows.
///
/// The inverse matrix is computed eagerly on construction, because nearly
/// every use of a lattice needs both directions of the conversion between
/// fractional and cartesian coordinates.
#[derive(Debug, Clone)]
pub struct Lattice {
    matrix: M33,
    inverse: M33,
}

/// Only compares the matrices.  The inverses are derived data.
impl PartialEq for Lattice {
    fn eq(&self, other: &Self) -> bool { self.matrix == other.matrix }
}

impl Lattice {
    /// Construct from a matrix whose rows are the lattice vectors.
    ///
    /// # Panics
    /// Panics if the matrix is singular.
    pub fn new(matrix: &M33) -> Self {
        let inverse = matrix.inv();
        Lattice { matrix: *matrix, inverse }
    }

    pub fn from_vectors(a: &V3, b: &V3, c: &V3) -> Self
    { Self::new(&M33([*a, *b, *c])) }

    pub fn eye() -> Self { Self::cubic(1.0) }

    pub fn cubic(a: f64) -> Self { Self::diagonal(&[a, a, a]) }

    pub fn orthorhombic(a: f64, b: f64, c: f64) -> Self
    { Self::diagonal(&[a, b, c]) }

    pub fn diagonal(dims: &[f64; 3]) -> Self {
        Self::new(&M33::from_fn(|r, c| {
            match r == c {
                true => dims[r],
                false => 0.0,
            }
        }))
    }

    /// Matrix where lattice vectors are rows.
    pub fn matrix(&self) -> &M33 { &self.matrix }

    /// Inverse of the matrix where lattice vectors are rows.
    pub fn inverse_matrix(&self) -> &M33 { &self.inverse }

    pub fn vectors(&self) -> &[V3; 3] { &self.matrix }

    pub fn volume(&self) -> f64 { self.matrix.det().abs() }
}

/// Fractional to cartesian.
impl Mul<&Lattice> for V3 {
    type Output = V3;

    fn mul(self, lattice: &Lattice) -> V3 { self * *lattice.matrix() }
}

/// Cartesian to fractional.
impl Div<&Lattice> for V3 {
    type Output = V3;

    fn div(self, lattice: &Lattice) -> V3 { self * *lattice.inverse_matrix() }
}
