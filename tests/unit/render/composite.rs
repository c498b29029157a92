use super::*;

#[test]
fn over_opacity_0_is_noop() {
    let dst = [1, 2, 3, 4];
    assert_eq!(over(dst, [200, 200, 200, 200], 0.0), dst);
}

#[test]
fn over_transparent_src_is_noop() {
    let dst = [10, 20, 30, 40];
    assert_eq!(over(dst, [255, 255, 255, 0], 1.0), dst);
}

#[test]
fn over_opaque_src_replaces_dst() {
    let src = [255, 0, 0, 255];
    assert_eq!(over([0, 0, 0, 255], src, 1.0), src);
}

#[test]
fn over_half_opacity_blends() {
    let out = over([0, 0, 0, 255], [255, 255, 255, 255], 0.4);
    assert_eq!(out[3], 255);
    assert!((i32::from(out[0]) - 102).abs() <= 1, "{out:?}");
}

#[test]
fn over_in_place_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4], 1.0).is_err());
}

#[test]
fn over_in_place_composites_every_pixel() {
    let mut dst = [10u8, 10, 10, 255, 0, 0, 0, 0].to_vec();
    let src = [0u8, 0, 0, 0, 50, 60, 70, 255];
    over_in_place(&mut dst, &src, 1.0).unwrap();
    assert_eq!(dst, vec![10, 10, 10, 255, 50, 60, 70, 255]);
}

#[test]
fn mask_keeps_inside_and_drops_outside() {
    let mut layer = [200u8, 100, 50, 255].repeat(3);
    let mask = [0u8, 0, 0, 255, 0, 0, 0, 0, 0, 0, 0, 128];
    mask_alpha_in_place(&mut layer, &mask).unwrap();
    assert_eq!(&layer[0..4], &[200, 100, 50, 255]);
    assert_eq!(&layer[4..8], &[0, 0, 0, 0]);
    assert_eq!(layer[11], 128);
    assert_eq!(layer[8], 100);
}
