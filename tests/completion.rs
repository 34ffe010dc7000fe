//! Runs the whole completion workflow on a small hand-checkable crystal:
//! match atoms under the symmetry operations, distribute the representative
//! row, then clean up with both symmetrizers.

use fcsym::{
    compute_permutation, distribute_fc2, select_shortest_images,
    symmetrize_compact_fc, symmetrize_fc,
    CompactForceConstants, ForceConstants, Lattice, Perm, M33, V3,
    DEFAULT_TOL, MAX_IMAGES,
};

use approx::assert_abs_diff_eq;

// Two equivalent atoms in a cubic cell, swapped by inversion about the
// midpoint of the pair (atom 1 sits at the body center).
fn positions() -> Vec<V3>
{ vec![V3([0.0, 0.0, 0.0]), V3([0.5, 0.5, 0.5])] }

fn inversion() -> M33
{ M33::from_fn(|r, c| if r == c { -1.0 } else { 0.0 }) }

fn apply_frac_rot(rot: &M33, fracs: &[V3]) -> Vec<V3>
{ fracs.iter().map(|&v| *rot * v).collect() }

fn assert_blocks_close(a: &M33, b: &M33) {
    for r in 0..3 {
        for c in 0..3 {
            assert_abs_diff_eq!(a[r][c], b[r][c], epsilon = 1e-12);
        }
    }
}

#[test]
fn two_atom_completion_pipeline() {
    let lattice = Lattice::cubic(3.0);
    let positions = positions();

    // Derive the atom permutations of the two operations from geometry
    // alone.  (cubic cell: fractional and cartesian rotations coincide)
    let ops = vec![M33::eye(), inversion()];
    let perms: Vec<Perm> = ops.iter()
        .map(|rot| {
            let rotated = apply_frac_rot(rot, &positions);
            compute_permutation(&lattice, &positions, &rotated, DEFAULT_TOL).unwrap()
        })
        .collect();
    assert_eq!(perms[0].as_slice(), &[0, 1]);
    // inversion sends the body-center atom to (-.5,-.5,-.5) == (.5,.5,.5)
    assert_eq!(perms[1].as_slice(), &[0, 1]);

    // Row 0 is computed externally; row 1 is reconstructed through the
    // operation that maps atom 1 onto atom 0.
    let mut fc = ForceConstants::zeros(2);
    *fc.block_mut(0, 0) = M33([
        V3([2.0, 0.3, 0.0]),
        V3([0.3, 2.0, 0.0]),
        V3([0.0, 0.0, 1.5]),
    ]);
    *fc.block_mut(0, 1) = M33([
        V3([-2.0, -0.3, 0.0]),
        V3([-0.3, -2.0, 0.0]),
        V3([0.0, 0.0, -1.5]),
    ]);

    let swap = Perm::from_vec(vec![1, 0]).unwrap();
    distribute_fc2(
        &mut fc,
        &[0, 1],
        &[inversion()],
        &[swap.clone()],
        &[0, 0], // both atoms represented by atom 0
        &[0, 0], // via the one listed operation
    ).unwrap();

    // covariance: FC[1][k] == Rᵗ·FC[0][π(k)]·R
    let r = inversion();
    for k in 0..2 {
        assert_blocks_close(
            fc.block(1, k),
            &(r.t() * *fc.block(0, swap[k]) * r),
        );
    }

    // The input already satisfied both invariants, so symmetrization must
    // not change anything.
    let reference = fc.clone();
    symmetrize_fc(&mut fc);
    for i in 0..2 {
        for j in 0..2 {
            assert_blocks_close(fc.block(i, j), reference.block(i, j));
        }
    }

    // and the invariants hold
    for i in 0..2 {
        let mut sum = M33::zero();
        for j in 0..2 {
            assert_blocks_close(fc.block(i, j), &fc.block(j, i).t());
            sum += *fc.block(i, j);
        }
        assert_blocks_close(&sum, &M33::zero());
    }
}

#[test]
fn compact_storage_agrees_with_full() {
    // same system, stored compactly: only atom 0's row
    let perms = vec![
        Perm::eye(2),
        Perm::from_vec(vec![1, 0]).unwrap(),
    ];

    let mut full = ForceConstants::zeros(2);
    let mut compact = CompactForceConstants::zeros(1, 2);
    for j in 0..2 {
        let noise = M33::from_fn(|r, c| (1 + j) as f64 + 0.01 * (3 * r + c) as f64);
        *full.block_mut(0, j) = noise;
        *compact.block_mut(0, j) = noise;
    }
    // complete the full field so both representations describe the same
    // crystal before cleanup
    distribute_fc2(
        &mut full,
        &[1],
        &[inversion()],
        &[Perm::from_vec(vec![1, 0]).unwrap()],
        &[0, 0],
        &[0, 0],
    ).unwrap();

    symmetrize_fc(&mut full);
    symmetrize_compact_fc(&mut compact, &perms, &[0, 0], &[0]).unwrap();

    for j in 0..2 {
        assert_blocks_close(compact.block(0, j), full.block(0, j));
    }
}

#[test]
fn shortest_images_of_the_pair() {
    // candidate images of the (0,0,0) -> (.5,.5,.5) connecting vector in
    // a unit cubic cell: all eight corner-adjacent images are tied
    let lattice = Lattice::eye();
    let diff = V3([0.5, 0.5, 0.5]);

    let mut vectors = [V3::zero(); MAX_IMAGES];
    let mut lengths = [0.0; MAX_IMAGES];
    let mut index = 0;
    for a in -1..=1 {
        for b in -1..=1 {
            for c in -1..=1 {
                let image = diff + V3([a as f64, b as f64, c as f64]);
                vectors[index] = image;
                lengths[index] = (image * &lattice).norm();
                index += 1;
            }
        }
    }

    let mut out = [[V3::zero(); MAX_IMAGES]];
    let mut multiplicity = [0u32];
    select_shortest_images(&mut out, &mut multiplicity, &[vectors], &[lengths], DEFAULT_TOL)
        .unwrap();

    assert_eq!(multiplicity, [8]);
    for k in 0..8 {
        assert_abs_diff_eq!(
            (out[0][k] * &lattice).norm(),
            0.75f64.sqrt(),
            epsilon = 1e-12,
        );
    }
}
