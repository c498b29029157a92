//! CPU rendering on top of `vello_cpu`.

pub(crate) mod composite;
pub(crate) mod compositor;
pub(crate) mod frame;
pub(crate) mod paint;
pub(crate) mod shadow;
pub(crate) mod surface;
pub(crate) mod text;
