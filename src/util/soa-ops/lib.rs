/* ************************************************************************ **
** This file is part of fcsym, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#[macro_use] extern crate failure;

mod perm;

pub use crate::perm::{InvalidPermutationError, Perm, Permute};
