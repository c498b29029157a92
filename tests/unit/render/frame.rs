use super::*;
use crate::{
    composition::constants::{ShadowConstants, SideButton},
    foundation::core::Rgb8,
};

fn canvas() -> Canvas {
    Canvas {
        width: 120,
        height: 240,
    }
}

fn solid(width: u32, height: u32, rgba: [u8; 4]) -> PreparedImage {
    PreparedImage::from_straight_rgba8(width, height, rgba.repeat((width * height) as usize))
        .unwrap()
}

fn small_drawn() -> DrawnFrameConstants {
    DrawnFrameConstants {
        width_fraction: 0.5,
        height_fraction: 0.5,
        body_radius: 10.0,
        screen_inset: 5.0,
        screen_radius: 6.0,
        gradient_top: Rgb8::new(200, 0, 0),
        gradient_bottom: Rgb8::new(0, 0, 200),
        stroke_width: 0.0,
        buttons: vec![SideButton::new(ButtonSide::Left, 20.0, 30.0)],
        ..DrawnFrameConstants::default()
    }
}

#[test]
fn asset_strategy_requires_frame_image() {
    let err = frame_renderer(&FrameStyle::default(), None).err().unwrap();
    assert!(matches!(err, ShotframeError::Asset(_)));
}

#[test]
fn drawn_strategy_ignores_frame_image() {
    let style = FrameStyle::Drawn(DrawnFrameConstants::default());
    let r = frame_renderer(&style, None).unwrap();
    let size = r.frame_size(Canvas::EXPORT);
    assert!((size.width - 1242.0 * 0.85).abs() < 1e-9);
    let screen = r.screen(Rect::new(0.0, 0.0, size.width, size.height));
    assert_eq!(screen.radius, 120.0);
}

#[test]
fn asset_frame_size_follows_image_aspect() {
    let image = solid(50, 100, [0, 0, 0, 255]);
    let r = frame_renderer(&FrameStyle::default(), Some(&image)).unwrap();
    let size = r.frame_size(Canvas::EXPORT);
    assert!((size.width - 1242.0 * 0.9).abs() < 1e-9);
    assert!((size.height - size.width * 2.0).abs() < 1e-9);
}

#[test]
fn asset_frame_draws_artwork_into_frame_rect() {
    let image = solid(10, 20, [255, 0, 0, 255]);
    let constants = AssetFrameConstants {
        shadow: None,
        ..AssetFrameConstants::default()
    };
    let frame = AssetFrame::new(constants, &image).unwrap();
    let mut surface = OutputSurface::new(canvas()).unwrap();
    frame
        .draw(&mut surface, Rect::new(20.0, 40.0, 100.0, 200.0))
        .unwrap();
    assert_eq!(surface.pixel(60, 120), Some([255, 0, 0, 255]));
    assert_eq!(surface.pixel(5, 5), Some([0, 0, 0, 0]));
    assert_eq!(surface.pixel(60, 220), Some([0, 0, 0, 0]));
}

#[test]
fn asset_frame_shadow_falls_below_the_frame() {
    let image = solid(10, 20, [255, 255, 255, 255]);
    let constants = AssetFrameConstants {
        shadow: Some(ShadowConstants {
            opacity: 0.4,
            blur_px: 4.0,
            offset_y_px: 12.0,
            downsample: 1,
        }),
        ..AssetFrameConstants::default()
    };
    let frame = AssetFrame::new(constants, &image).unwrap();
    let mut surface = OutputSurface::new(canvas()).unwrap();
    frame
        .draw(&mut surface, Rect::new(20.0, 40.0, 100.0, 200.0))
        .unwrap();

    let below = surface.pixel(60, 206).unwrap();
    assert_eq!(&below[..3], &[0, 0, 0]);
    assert!(below[3] > 50 && below[3] <= 103, "{below:?}");
    assert_eq!(surface.pixel(60, 120), Some([255, 255, 255, 255]));
    assert_eq!(surface.pixel(60, 30).unwrap()[3], 0);
}

#[test]
fn drawn_frame_paints_gradient_body_and_buttons() {
    let frame = DrawnFrame::new(small_drawn());
    let mut surface = OutputSurface::new(canvas()).unwrap();
    let rect = Rect::new(30.0, 60.0, 90.0, 180.0);
    frame.draw(&mut surface, rect).unwrap();

    let top = surface.pixel(60, 62).unwrap();
    let bottom = surface.pixel(60, 178).unwrap();
    assert_eq!(top[3], 255);
    assert!(top[0] > top[2], "{top:?}");
    assert!(bottom[2] > bottom[0], "{bottom:?}");

    // Left button sticks out of the body.
    assert_eq!(surface.pixel(25, 95), Some([0x1c, 0x1c, 0x20, 255]));
    // Rounded corner stays clear.
    assert_eq!(surface.pixel(30, 60), Some([0, 0, 0, 0]));
    assert_eq!(surface.pixel(10, 10), Some([0, 0, 0, 0]));
}

#[test]
fn drawn_frame_stroke_brightens_the_edge() {
    let constants = DrawnFrameConstants {
        stroke_width: 4.0,
        stroke_alpha: 0.5,
        gradient_top: Rgb8::BLACK,
        gradient_bottom: Rgb8::BLACK,
        ..small_drawn()
    };
    let frame = DrawnFrame::new(constants);
    let mut surface = OutputSurface::new(canvas()).unwrap();
    frame
        .draw(&mut surface, Rect::new(30.0, 60.0, 90.0, 180.0))
        .unwrap();
    let edge = surface.pixel(60, 60).unwrap();
    let inside = surface.pixel(60, 120).unwrap();
    assert!(edge[0] > inside[0], "edge {edge:?} inside {inside:?}");
    assert_eq!(inside, [0, 0, 0, 255]);
}
