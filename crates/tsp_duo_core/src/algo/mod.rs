pub(crate) mod christofides;
pub(crate) mod dual_nn;
pub(crate) mod euler;
pub(crate) mod matching;
pub(crate) mod mst;
pub(crate) mod split;
pub(crate) mod two_opt;
