use super::*;

fn solid(width: u32, height: u32, rgba: [u8; 4]) -> PreparedImage {
    PreparedImage::from_straight_rgba8(width, height, rgba.repeat((width * height) as usize))
        .unwrap()
}

#[test]
fn paint_dimensions_keep_images_within_limit() {
    assert_eq!(paint_dimensions(1, 1), (1, 1));
    assert_eq!(paint_dimensions(65_535, 40), (65_535, 40));
}

#[test]
fn paint_dimensions_shrink_long_side_keeping_aspect() {
    assert_eq!(paint_dimensions(70_000, 2), (65_535, 2));
    assert_eq!(paint_dimensions(3, 131_070), (2, 65_535));
    assert_eq!(paint_dimensions(131_070, 10), (65_535, 5));
}

#[test]
fn image_paint_matches_source_size() {
    let paint = image_paint(&solid(7, 3, [10, 20, 30, 255])).unwrap();
    assert_eq!(paint.size, Size::new(7.0, 3.0));
}

#[test]
fn oversized_image_paint_is_downscaled() {
    let paint = image_paint(&solid(70_000, 2, [255, 0, 0, 255])).unwrap();
    assert_eq!(paint.size, Size::new(65_535.0, 2.0));
}

#[test]
fn gradient_paint_is_one_pixel_wide() {
    let paint = vertical_gradient_paint(Rgb8::BLACK, Rgb8::WHITE, 1).unwrap();
    assert_eq!(paint.size, Size::new(1.0, 2.0));
    let paint = vertical_gradient_paint(Rgb8::BLACK, Rgb8::WHITE, 300).unwrap();
    assert_eq!(paint.size, Size::new(1.0, 300.0));
}

#[test]
fn rounded_path_radius_is_bounded_by_rect() {
    let rect = Rect::new(0.0, 0.0, 10.0, 4.0);
    let path = rounded_rect_path(rect, 50.0);
    let bounds = vello_cpu::kurbo::Shape::bounding_box(&path);
    assert!((bounds.width() - 10.0).abs() < 1e-6);
    assert!((bounds.height() - 4.0).abs() < 1e-6);
}
