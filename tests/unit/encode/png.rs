use super::*;
use crate::foundation::core::{Canvas, Rgb8};

#[test]
fn png_roundtrips_size_and_alpha() {
    let canvas = Canvas {
        width: 6,
        height: 4,
    };
    let mut surface = OutputSurface::new(canvas).unwrap();
    surface.fill(Rgb8::new(1, 2, 3));
    let png = encode_png(&surface).unwrap();
    assert_eq!(&png[1..4], b"PNG");

    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (6, 4));
    assert_eq!(decoded.get_pixel(5, 3).0, [1, 2, 3, 255]);
}

#[test]
fn transparent_surface_keeps_alpha_channel() {
    let surface = OutputSurface::new(Canvas {
        width: 3,
        height: 3,
    })
    .unwrap();
    let png = encode_png(&surface).unwrap();
    let decoded = image::load_from_memory(&png).unwrap();
    assert!(decoded.color().has_alpha());
    assert_eq!(decoded.to_rgba8().get_pixel(0, 0).0[3], 0);
}
