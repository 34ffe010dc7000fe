use crate::{CompactForceConstants, FailResult, ForceConstants, M33, Perm, ShapeError};

use rayon::prelude::*;

/// Enforce permutation symmetry and the acoustic sum rule, in that order.
///
/// Pass 1 replaces `FC[i][j]` and `FC[j][i]` by the average of `FC[i][j]`
/// and `FC[j][i]ᵗ` (each diagonal block is averaged with its own
/// transpose).  Pass 2 then rebuilds each diagonal block as
/// `-(S + Sᵗ)/2` where `S` sums the rest of the row, so that every row
/// sums to zero while the diagonal stays symmetric under pass 1's rule.
///
/// The order matters: the sum rule is enforced against the already
/// permutation-symmetric off-diagonal blocks.
pub fn symmetrize_fc(fc: &mut ForceConstants) {
    let n = fc.num_atoms();

    // Each output block depends on two blocks of the old field, so rows
    // can be produced independently from a snapshot.  Addition commutes,
    // making this bitwise identical to updating each unordered pair in
    // place.
    let old = fc.raw().to_vec();
    fc.raw_mut()
        .par_chunks_mut(n)
        .enumerate()
        .for_each(|(i, row)| {
            for j in 0..n {
                row[j] = (old[i * n + j] + old[j * n + i].t()) * 0.5;
            }
        });

    // Sum rule.  Row-local, so plain in-place parallelism works.
    fc.raw_mut()
        .par_chunks_mut(n)
        .enumerate()
        .for_each(|(i, row)| {
            let mut sum = M33::zero();
            for j in 0..n {
                if j != i {
                    sum += row[j];
                }
            }
            row[i] = -(sum + sum.t()) * 0.5;
        });
}

/// [`symmetrize_fc`], for a compact field of representative rows only.
///
/// The transposed partner of an off-diagonal block `FC[p][j]` lives in a
/// row this field does not store (the row of supercell atom `j`), so it
/// is located through symmetry instead: pick a symmetry operation `s`
/// whose permutation carries `j` onto its representative `s2p[j]`, and
/// the partner is `FC[s2pp[j]][perms[s][i]]` with `i = p2s[p]` and
/// `s2pp[j]` the compact row index of `s2p[j]`.
///
/// The lookup tables are built and validated before any block is
/// touched; a shape or consistency error leaves `fc` unmodified.
pub fn symmetrize_compact_fc(
    fc: &mut CompactForceConstants,
    perms: &[Perm],
    s2p: &[usize],
    p2s: &[usize],
) -> FailResult<()>
{Ok({
    let np = fc.num_prim();
    let ns = fc.num_super();
    ShapeError::check("s2p", ns, s2p.len())?;
    ShapeError::check("p2s", np, p2s.len())?;
    for perm in perms {
        ShapeError::check("symmetry permutation row", ns, perm.len())?;
    }
    for (p, &i) in p2s.iter().enumerate() {
        ensure!(i < ns, "p2s[{}] = {} out of bounds for {} atoms", p, i, ns);
    }

    // s2pp: compact row index of each atom's representative.
    // sym_of: an operation carrying each atom onto its representative.
    let mut s2pp = Vec::with_capacity(ns);
    let mut sym_of = Vec::with_capacity(ns);
    for (j, &rep) in s2p.iter().enumerate() {
        let pp = p2s.iter().position(|&i| i == rep)
            .ok_or_else(|| format_err!(
                "s2p[{}] = {} does not appear in p2s; maps are inconsistent", j, rep,
            ))?;
        let s = perms.iter().position(|perm| perm[j] == rep)
            .ok_or_else(|| format_err!(
                "no symmetry operation carries atom {} onto its representative {}", j, rep,
            ))?;
        s2pp.push(pp);
        sym_of.push(s);
    }

    // Permutation symmetry, through a same-sized scratch arena; the
    // partner blocks read below may live in any row.
    let old = fc.raw().to_vec();
    fc.raw_mut()
        .par_chunks_mut(ns)
        .enumerate()
        .for_each(|(p, row)| {
            let i = p2s[p];
            for j in 0..ns {
                let partner = match i == j {
                    true => old[p * ns + j],
                    false => old[s2pp[j] * ns + perms[sym_of[j]][i]],
                };
                row[j] = (old[p * ns + j] + partner.t()) * 0.5;
            }
        });

    // Sum rule, as in the full case; each row's diagonal block sits in
    // column p2s[p].
    fc.raw_mut()
        .par_chunks_mut(ns)
        .enumerate()
        .for_each(|(p, row)| {
            let i = p2s[p];
            let mut sum = M33::zero();
            for j in 0..ns {
                if j != i {
                    sum += row[j];
                }
            }
            row[i] = -(sum + sum.t()) * 0.5;
        });
})}
