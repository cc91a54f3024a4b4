use super::*;

#[test]
fn signal_signed_lookup() {
    let s = Signal::new(vec![1.0, 2.0, 3.0]);
    assert_eq!(s.at(-1), None);
    assert_eq!(s.at(0), Some(1.0));
    assert_eq!(s.at(2), Some(3.0));
    assert_eq!(s.at(3), None);
}

#[test]
fn signal_serializes_as_plain_array() {
    let s = Signal::new(vec![0.5, -1.0]);
    assert_eq!(serde_json::to_string(&s).unwrap(), "[0.5,-1.0]");
    let de: Signal = serde_json::from_str("[1, 2]").unwrap();
    assert_eq!(de.as_slice(), &[1.0, 2.0]);
}

#[test]
fn signal_validate_rejects_nan() {
    assert!(Signal::new(vec![1.0, f64::NAN]).validate().is_err());
    assert!(Signal::new(vec![1.0, 2.0]).validate().is_ok());
}

#[test]
fn role_labels() {
    assert_eq!(SignalRole::Input.label(), "x[n]");
    assert_eq!(SignalRole::Impulse.label(), "h[n]");
    assert_eq!(SignalRole::Input.other(), SignalRole::Impulse);
}

#[test]
fn index_range_contains_boundaries() {
    let r = IndexRange::new(-2, 3).unwrap();
    assert!(!r.contains(-3));
    assert!(r.contains(-2));
    assert!(r.contains(2));
    assert!(!r.contains(3));
    assert_eq!(r.len(), 5);
    assert!(IndexRange::new(3, 1).is_err());
}

#[test]
fn index_range_clamp() {
    let r = IndexRange::inclusive(-2, 8);
    assert_eq!(r.clamp(-10), -2);
    assert_eq!(r.clamp(100), 8);
    assert_eq!(r.clamp(4), 4);

    let empty = IndexRange::inclusive(5, 2);
    assert!(empty.is_empty());
    assert_eq!(empty.clamp(7), 5);
}

#[test]
fn hex_colors_roundtrip() {
    let c = Rgba8::from_hex("#10b981").unwrap();
    assert_eq!(c, Rgba8::rgb(0x10, 0xb9, 0x81));
    assert_eq!(c.to_hex(), "#10b981");
    assert_eq!(Rgba8::from_hex("#fff").unwrap(), Rgba8::rgb(255, 255, 255));
    assert_eq!(Rgba8::from_hex("#00000080").unwrap().a, 0x80);
    assert!(Rgba8::from_hex("#12").is_err());
    assert!(Rgba8::from_hex("#zzzzzz").is_err());
}
