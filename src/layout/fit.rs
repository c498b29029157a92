use crate::foundation::core::{Rect, Size};

/// Destination rectangle that scales `image` uniformly to cover `target`, centering the crop.
///
/// An image relatively wider than the target is fitted to the target height and cropped left and
/// right; otherwise it is fitted to the target width and cropped top and bottom.
pub fn cover_fit(image: Size, target: Rect) -> Rect {
    let (tw, th) = (target.width(), target.height());
    if image.width <= 0.0 || image.height <= 0.0 || tw <= 0.0 || th <= 0.0 {
        return target;
    }

    let image_aspect = image.width / image.height;
    let target_aspect = tw / th;
    if image_aspect > target_aspect {
        let draw_w = image.width * th / image.height;
        let x0 = target.x0 + (tw - draw_w) / 2.0;
        Rect::new(x0, target.y0, x0 + draw_w, target.y0 + th)
    } else {
        let draw_h = image.height * tw / image.width;
        let y0 = target.y0 + (th - draw_h) / 2.0;
        Rect::new(target.x0, y0, target.x0 + tw, y0 + draw_h)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fit.rs"]
mod tests;
