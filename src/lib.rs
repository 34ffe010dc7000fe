//! Symmetry-constrained completion and cleanup of force constant sets.
//!
//! The force constants of a crystal are a rank-4 field `FC[i][j]` of 3x3
//! blocks.  Computing them from first principles is expensive, so one
//! typically computes the blocks for a small set of symmetry-irreducible
//! atoms and lets the space group fill in the rest.  This crate provides
//! the pieces of that workflow:
//!
//! * [`compute_permutation`] identifies how a symmetry operation permutes
//!   the atoms of a structure.
//! * [`select_shortest_images`] finds the shortest periodic images of a
//!   set of relative positions, for use in building such tables.
//! * [`distribute_fc2`] copies computed rows of a force constant field onto
//!   symmetry-equivalent rows.
//! * [`symmetrize_fc`] and [`symmetrize_compact_fc`] clean up numerical
//!   noise by imposing index-permutation symmetry and the acoustic sum
//!   rule.

#[macro_use] extern crate failure;
#[macro_use] extern crate itertools;
#[macro_use] extern crate log;

pub use fcsym_array_types::{M33, V3};
pub use fcsym_soa_ops::{InvalidPermutationError, Perm, Permute};

/// Type of most `Result`s in this crate.
pub type FailResult<T> = Result<T, failure::Error>;

/// Default cartesian distance tolerance, in the same units as the lattice.
///
/// This matches the tolerance conventionally used when calling into spglib.
pub const DEFAULT_TOL: f64 = 1e-5;

mod core;
mod algo;

pub use crate::core::fc::{CompactForceConstants, ForceConstants};
pub use crate::core::lattice::Lattice;
pub use crate::algo::distribute::distribute_fc2;
pub use crate::algo::images::{select_shortest_images, DegenerateImagesError, MAX_IMAGES};
pub use crate::algo::matching::{compute_permutation, PositionMatchError};
pub use crate::algo::symmetrize::{symmetrize_compact_fc, symmetrize_fc};

/// Error on input arrays whose dimensions don't describe the same system.
///
/// All entry points validate shapes up front and return this before writing
/// to any output, so a failed call never leaves partial results behind.
#[derive(Debug, Fail)]
#[fail(display = "mismatched dimension for {}: expected {}, got {}", label, expected, actual)]
pub struct ShapeError {
    pub label: &'static str,
    pub expected: usize,
    pub actual: usize,
}

impl ShapeError {
    pub(crate) fn check(label: &'static str, expected: usize, actual: usize) -> Result<(), ShapeError> {
        match expected == actual {
            true => Ok(()),
            false => Err(ShapeError { label, expected, actual }),
        }
    }
}
