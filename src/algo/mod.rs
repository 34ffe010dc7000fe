pub(crate) mod distribute;
pub(crate) mod images;
pub(crate) mod matching;
pub(crate) mod symmetrize;
