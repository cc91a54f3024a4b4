use super::*;

#[test]
fn empty_object_is_the_demo_session() {
    let cfg: SessionConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, SessionConfig::default());
    assert_eq!(cfg.x.as_slice(), &[0.1, 0.5, 1.0, 1.5]);
    assert_eq!(cfg.h.as_slice(), &[1.0, 1.0, 1.0]);
    assert!(cfg.validate().is_ok());
}

#[test]
fn partial_config_overrides_fields() {
    let cfg: SessionConfig = serde_json::from_str(
        r##"{"x":[1,2],"n":3,"render":{"scale":2,"background":"#000000"},"assist":{"language":"Spanish"}}"##,
    )
    .unwrap();
    assert_eq!(cfg.x.as_slice(), &[1.0, 2.0]);
    assert_eq!(cfg.n, 3);
    assert_eq!(cfg.render.scale, 2.0);
    assert!(cfg.render.show_chart);
    assert_eq!(cfg.assist.language, "Spanish");
    assert_eq!(cfg.assist.model, "gemini-2.5-flash");
}

#[test]
fn validate_rejects_bad_values() {
    let bad_interval = SessionConfig {
        interval_ms: 50,
        ..SessionConfig::default()
    };
    assert!(bad_interval.validate().is_err());

    let bad_fps = SessionConfig {
        encode: EncodeSettings { fps: 0 },
        ..SessionConfig::default()
    };
    assert!(bad_fps.validate().is_err());

    let bad_sample = SessionConfig {
        x: Signal::new(vec![1.0, f64::NAN]),
        ..SessionConfig::default()
    };
    assert!(bad_sample.validate().is_err());

    let mut bad_scale = SessionConfig::default();
    bad_scale.render.scale = 0.0;
    assert!(bad_scale.validate().is_err());
}

#[test]
fn into_session_applies_position_and_interval() {
    let cfg = SessionConfig {
        n: 4,
        interval_ms: 500,
        ..SessionConfig::default()
    };
    let session = cfg.into_session();
    assert_eq!(session.n(), 4);
    assert_eq!(session.scan().interval_ms(), 500);
}

#[test]
fn load_reads_and_validates_files() {
    let dir = std::env::temp_dir().join(format!("convoscope-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let good = dir.join("good.json");
    std::fs::write(&good, r#"{"h":[0.5,0.5]}"#).unwrap();
    assert_eq!(SessionConfig::load(&good).unwrap().h.as_slice(), &[0.5, 0.5]);

    let bad = dir.join("bad.json");
    std::fs::write(&bad, r#"{"interval_ms": 5}"#).unwrap();
    assert!(matches!(
        SessionConfig::load(&bad),
        Err(ConvoError::Validation(_))
    ));

    assert!(SessionConfig::load(&dir.join("missing.json")).is_err());
    let _ = std::fs::remove_dir_all(&dir);
}
