pub(crate) mod frame;
pub(crate) mod raster;
pub(crate) mod svg;
pub(crate) mod sweep;
