pub(crate) mod base;
pub(crate) mod basespace;
pub(crate) mod billing;
