pub(crate) mod cache;
pub(crate) mod convolve;
pub(crate) mod step;
