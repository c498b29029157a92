use std::io::Cursor;

use base64::Engine as _;

use super::*;

fn png_bytes(rgba: Vec<u8>, width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_raw(width, height, rgba).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_image_png_dimensions_and_premul() {
    let buf = png_bytes(vec![100u8, 50u8, 200u8, 128u8], 1, 1);

    let prepared = decode_image(&buf).unwrap();
    assert_eq!(prepared.width, 1);
    assert_eq!(prepared.height, 1);
    assert_eq!(
        prepared.rgba8_premul.as_slice(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn decode_image_rejects_garbage() {
    let err = decode_image(b"not an image").unwrap_err();
    assert!(matches!(err, ShotframeError::Asset(_)));
}

#[test]
fn data_url_base64_payload_decodes_to_image() {
    let buf = png_bytes(vec![0, 0, 0, 255, 255, 255, 255, 255], 2, 1);
    let url = format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(&buf)
    );
    let bytes = decode_data_url(&url).unwrap();
    assert_eq!(bytes, buf);
    let img = decode_image(&bytes).unwrap();
    assert_eq!((img.width, img.height), (2, 1));
    assert!((img.aspect_ratio() - 2.0).abs() < 1e-12);
}

#[test]
fn data_url_errors_are_asset_errors() {
    assert!(decode_data_url("image/png;base64,AAAA").is_err());
    assert!(decode_data_url("data:image/png;base64").is_err());
    assert!(decode_data_url("data:image/png;base64,@@@").is_err());
    assert_eq!(decode_data_url("data:text/plain,hi").unwrap(), b"hi".to_vec());
}

#[test]
fn straight_rgba_length_is_checked() {
    assert!(PreparedImage::from_straight_rgba8(2, 2, vec![0; 15]).is_err());
    let img = PreparedImage::from_straight_rgba8(1, 1, vec![255, 0, 0, 0]).unwrap();
    assert_eq!(img.rgba8_premul.as_slice(), &[0, 0, 0, 0]);
}
