use crate::{FailResult, ShapeError, V3};

use failure::Backtrace;

/// Number of periodic images considered per pair (the 3x3x3 neighborhood).
pub const MAX_IMAGES: usize = 27;

/// All candidate image lengths for a pair were non-finite.
///
/// This never happens for well-formed crystal input; it means the caller's
/// candidate table was built from garbage (NaN positions, infinite cell).
#[derive(Debug, Fail)]
#[fail(display = "no finite image length among candidates for pair {}", pair)]
pub struct DegenerateImagesError {
    pub pair: usize,
    backtrace: Backtrace,
}

/// For each pair, select every candidate image vector tied for shortest.
///
/// A candidate is kept when its length is within `tol` of the minimum of
/// the 27 candidate lengths for that pair.  Kept vectors are written to a
/// prefix of the pair's output row in their original candidate order, and
/// the count (always in `[1, 27]`) goes to `multiplicity`.
///
/// Several images being tied is physically meaningful (atoms at
/// high-symmetry positions), and every tied image must be retained for
/// later symmetrization to come out right, which is why this returns all
/// of them rather than an arbitrary winner.
///
/// Nothing is written until every pair has been checked for a finite
/// minimum, so a failed call leaves the outputs untouched.
pub fn select_shortest_images(
    out_vectors: &mut [[V3; MAX_IMAGES]],
    multiplicity: &mut [u32],
    vectors: &[[V3; MAX_IMAGES]],
    lengths: &[[f64; MAX_IMAGES]],
    tol: f64,
) -> FailResult<()>
{Ok({
    let num_pairs = vectors.len();
    ShapeError::check("image lengths", num_pairs, lengths.len())?;
    ShapeError::check("output image vectors", num_pairs, out_vectors.len())?;
    ShapeError::check("multiplicity", num_pairs, multiplicity.len())?;

    let mut minima = Vec::with_capacity(num_pairs);
    for (pair, lens) in lengths.iter().enumerate() {
        // f64::min ignores NaN, so anything short of a fully degenerate
        // candidate row still produces a finite minimum here.
        let min = lens.iter().cloned().fold(std::f64::INFINITY, f64::min);
        if !min.is_finite() {
            return Err(DegenerateImagesError { pair, backtrace: Backtrace::new() }.into());
        }
        minima.push(min);
    }

    for (out_row, mult, vecs, lens, min) in izip!(&mut *out_vectors, &mut *multiplicity, vectors, lengths, minima) {
        let mut count = 0;
        for (vec, &len) in izip!(vecs, lens) {
            if len - min <= tol {
                out_row[count] = *vec;
                count += 1;
            }
        }
        *mult = count as u32;
    }
})}
