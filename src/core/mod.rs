pub(crate) mod fc;
pub(crate) mod lattice;
