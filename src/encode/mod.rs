//! PNG encoding and artifact delivery.

pub(crate) mod png;
pub(crate) mod sink;
