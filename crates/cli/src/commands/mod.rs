pub(crate) mod seed;
pub(crate) mod serve;
