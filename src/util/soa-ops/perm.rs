/* ************************************************************************ **
** This file is part of fcsym, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;
use std::ops::Index;

/// Represents a reordering operation on atoms.
///
/// The stored vector follows the "pull" convention, comparable to indexing
/// with an integer array in numpy: if the `k`th element is `value`, then
/// applying the permutation pulls the data at index `value` into index `k`.
///
/// This is also the layout of the per-operation rows of a symmetry
/// permutation table, so a `Perm` doubles as an O(1) index lookup into
/// such a row (via `perm[k]`).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Perm(Vec<usize>);

impl fmt::Debug for Perm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.0, f) }
}

#[derive(Debug, Fail)]
#[fail(display = "Tried to construct an invalid permutation.")]
pub struct InvalidPermutationError(::failure::Backtrace);

impl Perm {
    /// The identity permutation of length `n`.
    pub fn eye(n: usize) -> Perm
    { Perm((0..n).collect()) }

    pub fn len(&self) -> usize
    { self.0.len() }

    pub fn is_empty(&self) -> bool
    { self.0.is_empty() }

    /// Construct a perm, validating that the input contains each index
    /// in `0..vec.len()` exactly once.  O(n log n).
    pub fn from_vec(vec: Vec<usize>) -> Result<Perm, InvalidPermutationError> {
        if !Perm::validate_data(&vec) {
            return Err(InvalidPermutationError(::failure::Backtrace::new()));
        }
        Ok(Perm(vec))
    }

    #[must_use = "doesn't assert"]
    fn validate_data(xs: &[usize]) -> bool {
        let mut vec = xs.to_vec();
        vec.sort();
        vec.into_iter().eq(0..xs.len())
    }

    pub fn random(n: usize) -> Perm {
        use rand::Rng;

        let mut vec: Vec<_> = (0..n).collect();
        rand::thread_rng().shuffle(&mut vec);
        Perm(vec)
    }

    /// The permutation that would sort the data, i.e. applying the result
    /// to `xs` produces a sorted vector.
    pub fn argsort<T: Ord>(xs: &[T]) -> Perm {
        let mut vec: Vec<_> = (0..xs.len()).collect();
        vec.sort_by(|&a, &b| xs[a].cmp(&xs[b]));
        Perm(vec)
    }

    pub fn into_vec(self) -> Vec<usize>
    { self.0 }

    pub fn as_slice(&self) -> &[usize]
    { &self.0 }

    #[must_use = "not an in-place operation"]
    pub fn inverted(&self) -> Perm {
        let mut inv = vec![::std::usize::MAX; self.0.len()];
        for (k, &value) in self.0.iter().enumerate() {
            inv[value] = k;
        }
        debug_assert!(Perm::validate_data(&inv));
        Perm(inv)
    }
}

/// O(1) lookup of the index pulled into slot `k`.
impl Index<usize> for Perm {
    type Output = usize;

    #[inline]
    fn index(&self, k: usize) -> &usize
    { &self.0[k] }
}

/// Trait for applying a permutation operation.
///
/// # Laws
///
/// * **Identity:** `data.permuted_by(&Perm::eye(data.len())) == data`
/// * **Compatibility:**
///   `data.permuted_by(&a).permuted_by(&b) == data.permuted_by(&a.permuted_by(&b))`
pub trait Permute: Sized {
    // The receiver gets permuted, not the argument.
    // (relevant when Self is Perm)
    fn permuted_by(self, perm: &Perm) -> Self;
}

impl<T> Permute for Vec<T> {
    fn permuted_by(self, perm: &Perm) -> Vec<T> {
        assert_eq!(
            self.len(), perm.len(),
            "Incorrect permutation length",
        );
        let mut slots: Vec<_> = self.into_iter().map(Some).collect();
        perm.0.iter()
            .map(|&src| slots[src].take().expect("BUG: duplicate index in Perm"))
            .collect()
    }
}

// `Permute` doubles as the group operator.
impl Permute for Perm {
    fn permuted_by(self, perm: &Perm) -> Perm
    { Perm(self.0.permuted_by(perm)) }
}
