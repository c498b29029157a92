use super::*;
use crate::composition::constants::FrameOverflow;

#[test]
fn empty_json_yields_defaults() {
    let cfg = ExportConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, ExportConfig::default());
}

#[test]
fn partial_json_overrides_selected_fields() {
    let cfg = ExportConfig::from_json_str(
        r#"{
            "layout": { "title_top_margin": 120, "overflow": { "policy": "clamp", "bottom_margin": 50 } },
            "frame": { "kind": "drawn" },
            "title_font": "fonts/Title-Bold.ttf"
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.layout.title_top_margin, 120.0);
    assert_eq!(cfg.layout.reference_preview_width, 330.0);
    assert_eq!(
        cfg.layout.overflow,
        FrameOverflow::Clamp {
            bottom_margin: 50.0
        }
    );
    assert!(matches!(cfg.frame, FrameStyle::Drawn(_)));
    assert_eq!(
        cfg.resolve(cfg.title_font.as_deref().unwrap()),
        PathBuf::from("./fonts/Title-Bold.ttf")
    );
}

#[test]
fn invalid_constants_fail_validation() {
    let err = ExportConfig::from_json_str(r#"{ "layout": { "reference_preview_width": 0 } }"#)
        .unwrap_err();
    assert!(matches!(err, ShotframeError::Validation(_)));
}

#[test]
fn from_path_resolves_assets_root_next_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shotframe.json");
    std::fs::write(&path, r#"{ "assets_root": "assets" }"#).unwrap();

    let cfg = ExportConfig::from_path(&path).unwrap();
    assert_eq!(cfg.assets_root, dir.path().join("assets"));
    assert_eq!(
        cfg.resolve(Path::new("phone-frame.png")),
        dir.path().join("assets").join("phone-frame.png")
    );
}

#[test]
fn from_path_reports_missing_file() {
    let err = ExportConfig::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("open export config"));
}
