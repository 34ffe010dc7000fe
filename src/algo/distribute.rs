use crate::{FailResult, ForceConstants, M33, Perm, ShapeError};

use rayon::prelude::*;
use std::collections::BTreeMap;

/// Complete a force constant field from its symmetry-representative rows.
///
/// For each atom `i` in `atom_list` whose representative `d = map_atoms[i]`
/// differs from `i`, the row `FC[i]` is overwritten using the symmetry
/// operation `s = map_syms[i]` that carries `i` onto `d`:
///
/// ```text
/// FC[i][k] = Rᵗ · FC[d][π(k)] · R      R = cart_rots[s], π = perms[s]
/// ```
///
/// which is the requirement that force constants transform covariantly as
/// rank-2 cartesian tensors under the point group.  Atoms whose
/// representative is themselves are left untouched.
///
/// All table shapes are validated before anything is written.
pub fn distribute_fc2(
    fc2: &mut ForceConstants,
    atom_list: &[usize],
    cart_rots: &[M33],
    perms: &[Perm],
    map_atoms: &[usize],
    map_syms: &[usize],
) -> FailResult<()>
{Ok({
    let n = fc2.num_atoms();
    ShapeError::check("map_atoms", n, map_atoms.len())?;
    ShapeError::check("map_syms", n, map_syms.len())?;
    ShapeError::check("cart_rots", perms.len(), cart_rots.len())?;
    for perm in perms {
        ShapeError::check("symmetry permutation row", n, perm.len())?;
    }

    // (atom to fill) -> (symmetry op index).  BTreeMap so that the todo
    // set is deduplicated before we decide which rows get overwritten.
    let mut todo = BTreeMap::new();
    for &i in atom_list {
        ensure!(i < n, "atom_list entry {} out of bounds for {} atoms", i, n);
        let d = map_atoms[i];
        ensure!(d < n, "map_atoms[{}] = {} out of bounds for {} atoms", i, d, n);
        if d == i {
            continue;
        }
        let s = map_syms[i];
        ensure!(s < perms.len(), "map_syms[{}] = {} out of bounds for {} operations", i, s, perms.len());
        ensure!(
            map_atoms[d] == d,
            "representative {} of atom {} is not its own representative", d, i,
        );
        todo.insert(i, s);
    }

    // Source rows are all representative rows, which are never in the todo
    // set, but snapshotting them lets the fill borrow the arena mutably
    // without aliasing the reads.
    let sources: BTreeMap<usize, Vec<M33>> = {
        todo.keys()
            .map(|&i| map_atoms[i])
            .map(|d| (d, fc2.row(d).to_vec()))
            .collect()
    };

    trace!("distributing {} of {} rows", todo.len(), n);

    fc2.raw_mut()
        .par_chunks_mut(n)
        .enumerate()
        .filter(|(i, _)| todo.contains_key(i))
        .for_each(|(i, row)| {
            let s = todo[&i];
            let src = &sources[&map_atoms[i]];
            let r = cart_rots[s];
            let rt = r.t();
            let perm = &perms[s];
            for k in 0..n {
                row[k] = rt * src[perm[k]] * r;
            }
        });
})}
