//! Pure layout math: title wrapping, frame and screen placement, cover fit.
//!
//! Nothing here touches pixels; the render stages consume the rectangles computed here.

pub(crate) mod fit;
pub(crate) mod frame;
pub(crate) mod title;
