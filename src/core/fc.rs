use crate::{M33, ShapeError};

/// A full force constant field: one 3x3 block for every ordered pair of atoms.
///
/// Blocks are stored row-major, so the blocks `FC[i][..]` describing forces
/// on all atoms due to a displacement of atom `i` are contiguous.
#[derive(Debug, Clone, PartialEq)]
pub struct ForceConstants {
    num_atoms: usize,
    blocks: Vec<M33>,
}

impl ForceConstants {
    pub fn zeros(num_atoms: usize) -> Self {
        ForceConstants { num_atoms, blocks: vec![M33::zero(); num_atoms * num_atoms] }
    }

    /// Wrap an existing row-major `num_atoms * num_atoms` block vector.
    pub fn from_blocks(num_atoms: usize, blocks: Vec<M33>) -> Result<Self, ShapeError> {
        ShapeError::check("fc blocks", num_atoms * num_atoms, blocks.len())?;
        Ok(ForceConstants { num_atoms, blocks })
    }

    pub fn num_atoms(&self) -> usize { self.num_atoms }

    pub fn block(&self, i: usize, j: usize) -> &M33 { &self.blocks[i * self.num_atoms + j] }

    pub fn block_mut(&mut self, i: usize, j: usize) -> &mut M33 { &mut self.blocks[i * self.num_atoms + j] }

    pub fn row(&self, i: usize) -> &[M33] { &self.blocks[i * self.num_atoms..(i + 1) * self.num_atoms] }

    pub fn row_mut(&mut self, i: usize) -> &mut [M33] {
        let n = self.num_atoms;
        &mut self.blocks[i * n..(i + 1) * n]
    }

    pub fn raw(&self) -> &[M33] { &self.blocks }

    pub fn raw_mut(&mut self) -> &mut [M33] { &mut self.blocks }

    pub fn into_blocks(self) -> Vec<M33> { self.blocks }
}

/// A force constant field in phonopy's compact form.
///
/// Only the rows for the `num_prim` independent atoms of the primitive cell
/// are stored; each row still spans all `num_super` atoms of the supercell.
#[derive(Debug, Clone, PartialEq)]
pub struct CompactForceConstants {
    num_prim: usize,
    num_super: usize,
    blocks: Vec<M33>,
}

impl CompactForceConstants {
    pub fn zeros(num_prim: usize, num_super: usize) -> Self {
        CompactForceConstants { num_prim, num_super, blocks: vec![M33::zero(); num_prim * num_super] }
    }

    /// Wrap an existing row-major `num_prim * num_super` block vector.
    pub fn from_blocks(num_prim: usize, num_super: usize, blocks: Vec<M33>) -> Result<Self, ShapeError> {
        ShapeError::check("compact fc blocks", num_prim * num_super, blocks.len())?;
        Ok(CompactForceConstants { num_prim, num_super, blocks })
    }

    pub fn num_prim(&self) -> usize { self.num_prim }

    pub fn num_super(&self) -> usize { self.num_super }

    pub fn block(&self, i: usize, j: usize) -> &M33 { &self.blocks[i * self.num_super + j] }

    pub fn block_mut(&mut self, i: usize, j: usize) -> &mut M33 { &mut self.blocks[i * self.num_super + j] }

    pub fn row(&self, i: usize) -> &[M33] { &self.blocks[i * self.num_super..(i + 1) * self.num_super] }

    pub fn row_mut(&mut self, i: usize) -> &mut [M33] {
        let n = self.num_super;
        &mut self.blocks[i * n..(i + 1) * n]
    }

    pub fn raw(&self) -> &[M33] { &self.blocks }

    pub fn raw_mut(&mut self) -> &mut [M33] { &mut self.blocks }

    pub fn into_blocks(self) -> Vec<M33> { self.blocks }
}
