use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn title_block(lines: usize, line_height: f64) -> TitleBlock {
    TitleBlock {
        lines: vec!["line".to_owned(); lines],
        font_size: line_height / 1.2,
        line_height,
        top: 80.0,
        height: lines as f64 * line_height,
    }
}

#[test]
fn frame_is_centered_without_title() {
    let c = LayoutConstants::default();
    let size = Size::new(1000.0, 2000.0);
    let f = place_frame(Canvas::EXPORT, size, &TitleBlock::none(&c), &c);
    assert!(approx(f.x0, 121.0));
    assert!(approx(f.y0, (2688.0 - 2000.0) / 2.0));
    assert!(approx(f.width(), 1000.0) && approx(f.height(), 2000.0));
}

#[test]
fn title_shifts_frame_below_block() {
    let c = LayoutConstants::default();
    let title = title_block(2, 100.0);
    let f = place_frame(Canvas::EXPORT, Size::new(1000.0, 1500.0), &title, &c);
    assert!(approx(f.y0, 80.0 + 200.0 + 40.0));
    assert!(approx(f.x0, 121.0));
}

#[test]
fn crop_policy_keeps_overflowing_position() {
    let c = LayoutConstants::default();
    let title = title_block(10, 180.0);
    let f = place_frame(Canvas::EXPORT, Size::new(1000.0, 2000.0), &title, &c);
    assert!(approx(f.y0, 80.0 + 1800.0 + 40.0));
    assert!(f.y1 > 2688.0);
}

#[test]
fn clamp_policy_pulls_frame_up() {
    let c = LayoutConstants {
        overflow: FrameOverflow::Clamp {
            bottom_margin: 50.0,
        },
        ..LayoutConstants::default()
    };
    let title = title_block(10, 180.0);
    let f = place_frame(Canvas::EXPORT, Size::new(1000.0, 2000.0), &title, &c);
    assert!(approx(f.y1, 2688.0 - 50.0));

    let short = title_block(1, 50.0);
    let f = place_frame(Canvas::EXPORT, Size::new(1000.0, 2000.0), &short, &c);
    assert!(approx(f.y0, 80.0 + 50.0 + 40.0));
}

#[test]
fn asset_geometry_uses_fractions_of_frame() {
    let c = AssetFrameConstants::default();
    let size = asset_frame_size(Canvas::EXPORT, &c, 0.5);
    assert!(approx(size.width, 1242.0 * 0.9));
    assert!(approx(size.height, 1242.0 * 0.9 * 2.0));

    let frame = Rect::new(100.0, 200.0, 1100.0, 2200.0);
    let s = asset_screen(frame, &c);
    assert!(approx(s.rect.x0, 100.0 + 40.0));
    assert!(approx(s.rect.y0, 200.0 + 36.0));
    assert!(approx(s.rect.width(), 920.0));
    assert!(approx(s.rect.height(), 1930.0));
    assert!(approx(s.radius, 920.0 * 0.12));
    assert!(frame.contains(s.rect.origin()) && s.rect.x1 <= frame.x1 && s.rect.y1 <= frame.y1);
}

#[test]
fn drawn_geometry_uses_fixed_insets() {
    let c = DrawnFrameConstants::default();
    let size = drawn_frame_size(Canvas::EXPORT, &c);
    assert!(approx(size.width, 1242.0 * 0.85));
    assert!(approx(size.height, 2688.0 * 0.83));

    let frame = Rect::new(0.0, 0.0, 1000.0, 2000.0);
    let s = drawn_screen(frame, &c);
    assert_eq!(s.rect, Rect::new(30.0, 30.0, 970.0, 1970.0));
    assert_eq!(s.radius, 120.0);
}

#[test]
fn island_is_centered_near_screen_top() {
    let frame = Rect::new(100.0, 200.0, 1100.0, 2200.0);
    let screen = Rect::new(140.0, 236.0, 1060.0, 2166.0);
    let island = island_rect(frame, screen, &IslandConstants::default());
    assert!(approx(island.width(), 280.0));
    assert!(approx(island.height(), 280.0 * 0.28));
    assert!(approx(island.center().x, frame.center().x));
    assert!(approx(island.y0, 236.0 + 1930.0 * 0.015));
}

#[test]
fn overflow_check_compares_against_canvas_bottom() {
    let c = LayoutConstants::default();
    let mk = |y0: f64| LayoutResult {
        frame: Rect::new(0.0, y0, 10.0, y0 + 100.0),
        screen: ScreenGeometry {
            rect: Rect::ZERO,
            radius: 0.0,
        },
        island: Rect::ZERO,
        title: TitleBlock::none(&c),
    };
    assert!(!mk(2588.0).frame_overflows(Canvas::EXPORT));
    assert!(mk(2589.0).frame_overflows(Canvas::EXPORT));
}
