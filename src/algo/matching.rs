use crate::{Lattice, Perm, V3};

use failure::Backtrace;

#[derive(Debug, Fail)]
pub enum PositionMatchError {
    #[fail(display = "positions are too dissimilar")]
    NoMatch(Backtrace),
    #[fail(display = "tried to match position lists of different lengths")]
    LengthMismatch(Backtrace),
}

/// Find the permutation relating two descriptions of the same structure.
///
/// `rotated` is expected to hold the images of the atoms in `positions`
/// under some rigid operation, in arbitrary order.  The output `perm`
/// satisfies, for every `j`, that `positions[perm[j]]` lies within `tol`
/// cartesian distance of `rotated[j]` after minimum-image reduction.
/// Both inputs are fractional coordinates in `lattice`.
///
/// Failure is not fatal; it usually means the operation was not actually
/// a symmetry of the structure at this tolerance, and the caller is free
/// to retry with a looser one.
pub fn compute_permutation(
    lattice: &Lattice,
    positions: &[V3],
    rotated: &[V3],
    tol: f64,
) -> Result<Perm, PositionMatchError>
{
    brute_force_near_identity(lattice, positions, rotated, tol)
        .map_err(|e| {
            warn!("no atom mapping found at tol {:e}: {}", tol, e);
            e
        })
}

// Optimized for permutations near the identity.
// NOTE: Lattice must be reduced so that the voronoi cell fits
//       within the eight unit cells around the origin
fn brute_force_near_identity(
    lattice: &Lattice,
    from_fracs: &[V3],
    to_fracs: &[V3],
    tol: f64,
) -> Result<Perm, PositionMatchError>
{Ok({
    if from_fracs.len() != to_fracs.len() {
        return Err(PositionMatchError::LengthMismatch(Backtrace::new()));
    }
    let n = from_fracs.len();

    const UNSET: usize = std::usize::MAX;
    assert!(n < UNSET);

    let mut perm = vec![UNSET; n];

    // optimization: Rather than filling the out vector in order,
    // we find where each index belongs (e.g. we place the 0, then
    // we place the 1, etc.).
    // Then we can track the first unassigned index.
    //
    // This works best if the permutation is close to the identity.
    // (more specifically, if the max value of 'out[i] - i' is small)
    let mut search_start = 0;

    'from: for from in 0..n {

        // Skip through things filled out of order.
        while search_start < n && perm[search_start] != UNSET {
            search_start += 1;
        }

        for to in search_start..n {
            if perm[to] != UNSET {
                continue;
            }

            let distance2 = {
                let diff = (from_fracs[from] - to_fracs[to]).map(|x| x - x.round());
                let cart = diff * lattice;
                cart.sqnorm()
            };
            if distance2 < tol * tol {
                perm[to] = from;
                continue 'from;
            }
        }
        return Err(PositionMatchError::NoMatch(Backtrace::new()));
    }

    Perm::from_vec(perm).expect("(BUG) invalid perm without match error!?")
})}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::Permute;

    fn random_positions(n: usize) -> Vec<V3>
    { (0..n).map(|_| V3(rand::random())).collect() }

    fn random_problem(n: usize) -> (Vec<V3>, Perm, Vec<V3>)
    {
        let original = random_positions(n);
        let perm = Perm::random(n);
        let permuted = original.clone().permuted_by(&perm);
        (original, perm, permuted)
    }

    fn skewed_lattice() -> Lattice {
        Lattice::from_vectors(
            &V3([1.0, 0.0, 0.0]),
            &V3([0.2, 1.1, 0.0]),
            &V3([-0.1, 0.3, 0.9]),
        )
    }

    #[test]
    fn identity_of_any_size() {
        for n in &[1, 5, 20] {
            let positions = random_positions(*n);
            let output = compute_permutation(
                &skewed_lattice(), &positions, &positions, 1e-5,
            ).unwrap();

            assert_eq!(output, Perm::eye(*n));
        }
    }

    #[test]
    fn recovers_random_permutation() {
        let (original, perm, permuted) = random_problem(20);

        let output = compute_permutation(
            &skewed_lattice(), &original, &permuted, 1e-5,
        ).unwrap();

        assert_eq!(output, perm);
    }

    #[test]
    fn wraps_across_the_cell_boundary() {
        let lattice = Lattice::cubic(4.0);
        let positions = vec![V3([0.999_999, 0.0, 0.0]), V3([0.5, 0.5, 0.5])];
        let rotated = vec![V3([0.000_001, 0.0, 0.0]), V3([0.5, 0.5, 0.5])];

        let output = compute_permutation(&lattice, &positions, &rotated, 1e-4).unwrap();
        assert_eq!(output, Perm::eye(2));
    }

    #[test]
    fn two_atom_cubic_scenarios() {
        let lattice = Lattice::eye();
        let positions = vec![V3([0.0, 0.0, 0.0]), V3([0.5, 0.5, 0.5])];

        // identity rotation
        let output = compute_permutation(&lattice, &positions, &positions, 1e-5).unwrap();
        assert_eq!(output.as_slice(), &[0, 1]);

        // 180 degrees about z, with the list order also swapped.
        // both positions are fixed points modulo the lattice, so the match
        // must come purely from the list swap.
        let rotated: Vec<V3> = vec![positions[1], positions[0]].into_iter()
            .map(|v| V3([-v[0], -v[1], v[2]]))
            .collect();
        let output = compute_permutation(&lattice, &positions, &rotated, 1e-5).unwrap();
        assert_eq!(output.as_slice(), &[1, 0]);
    }

    #[test]
    fn mismatch_is_an_error() {
        let lattice = Lattice::eye();
        let positions = vec![V3([0.0, 0.0, 0.0]), V3([0.5, 0.5, 0.5])];
        let rotated = vec![V3([0.0, 0.0, 0.0]), V3([0.25, 0.25, 0.25])];

        match compute_permutation(&lattice, &positions, &rotated, 1e-5) {
            Err(PositionMatchError::NoMatch(_)) => {},
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let lattice = Lattice::eye();
        let positions = vec![V3([0.0, 0.0, 0.0]), V3([0.5, 0.5, 0.5])];
        let rotated = vec![V3([0.0, 0.0, 0.0])];

        match compute_permutation(&lattice, &positions, &rotated, 1e-5) {
            Err(PositionMatchError::LengthMismatch(_)) => {},
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn tolerance_is_cartesian() {
        // a fractional difference of 1e-4 along the long axis is a cartesian
        // distance of 1e-2, which must not match at tol 1e-3
        let lattice = Lattice::orthorhombic(100.0, 1.0, 1.0);
        let positions = vec![V3([0.0, 0.0, 0.0])];
        let rotated = vec![V3([1e-4, 0.0, 0.0])];

        assert!(compute_permutation(&lattice, &positions, &rotated, 1e-3).is_err());
        assert!(compute_permutation(&lattice, &positions, &rotated, 2e-2).is_ok());
    }
}
