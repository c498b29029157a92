use std::sync::Arc;

use super::*;

fn solid_image(width: u32, height: u32) -> PreparedImage {
    PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(vec![255; (width * height * 4) as usize]),
    }
}

#[test]
fn settings_defaults_follow_the_preview_ui() {
    let s = ExportSettings::default();
    assert_eq!(s.background_color.to_hex(), "#0a0a0f");
    assert_eq!(s.title_color, Rgb8::BLACK);
    assert_eq!(s.title_size, 40.0);
    assert!(!s.transparent_background);
    assert!(!s.has_title());
}

#[test]
fn settings_json_accepts_hex_colors() {
    let s = ExportSettings::from_json_str(
        r##"{"background_color":"#ffffff","title_text":"Hello World","title_size":32}"##,
    )
    .unwrap();
    assert_eq!(s.background_color, Rgb8::WHITE);
    assert_eq!(s.title_size, 32.0);
    assert!(s.has_title());
    assert!(ExportSettings::from_json_str(r#"{"title_size":-1}"#).is_err());
}

#[test]
fn whitespace_title_counts_as_no_title() {
    let mut req = CompositionRequest::new(solid_image(2, 2));
    req.title_text = "   ".to_string();
    assert!(!req.has_title());
    req.validate().unwrap();
}

#[test]
fn title_without_font_is_rejected() {
    let settings = ExportSettings {
        title_text: "Hello".to_string(),
        ..ExportSettings::default()
    };
    let req = settings.into_request(solid_image(2, 2), None, None);
    let err = req.validate().unwrap_err();
    assert!(err.to_string().contains("title font"));
}

#[test]
fn empty_user_image_is_rejected() {
    let req = CompositionRequest::new(solid_image(0, 0));
    assert!(req.validate().is_err());
}
