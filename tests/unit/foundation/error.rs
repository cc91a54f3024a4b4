use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ConvoError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(ConvoError::parse("x").to_string().contains("parse error:"));
    assert!(ConvoError::render("x").to_string().contains("render error:"));
    assert!(ConvoError::encode("x").to_string().contains("encode error:"));
    assert!(ConvoError::assist("x").to_string().contains("assist error:"));
    assert!(
        ConvoError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ConvoError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let err: ConvoError = serde_json::from_str::<Vec<f64>>("[1,")
        .unwrap_err()
        .into();
    assert!(matches!(err, ConvoError::Serde(_)));
}
