pub(crate) mod scan;
pub(crate) mod session;
