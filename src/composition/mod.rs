pub(crate) mod config;
pub(crate) mod constants;
pub(crate) mod request;
