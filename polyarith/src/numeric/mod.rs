pub(crate) mod bitop;
pub(crate) mod format;
pub(crate) mod scalar;
