use super::*;
use crate::dsp::step::{decompose_step, decompose_step_framed};

const X: [f64; 4] = [0.1, 0.5, 1.0, 1.5];
const H: [f64; 3] = [1.0, 1.0, 1.0];

#[test]
fn headline_lists_products_and_sum() {
    let b = Breakdown::build(&X, &H, &decompose_step(&X, &H, 2));
    assert_eq!(b.headline(), "y[2] = Σ w[2, k] = 0.10 + 0.50 + 1.00 = 1.60");
}

#[test]
fn headline_without_overlap() {
    let b = Breakdown::build(&X, &H, &decompose_step(&X, &H, -1));
    assert!(b.is_empty());
    assert_eq!(b.headline(), "y[-1] = Σ w[-1, k] = 0 (no overlap)");
}

#[test]
fn negative_terms_are_subtracted() {
    let b = Breakdown::build(&[1.0, 2.0], &[1.0, -1.0], &decompose_step(&[1.0, 2.0], &[1.0, -1.0], 1));
    assert_eq!(b.headline(), "y[1] = Σ w[1, k] = -1.00 + 2.00 = 1.00");

    let b = Breakdown::build(&[2.0, 1.0], &[1.0, -1.0], &decompose_step(&[2.0, 1.0], &[1.0, -1.0], 1));
    assert_eq!(b.headline(), "y[1] = Σ w[1, k] = -2.00 + 1.00 = -1.00");
}

#[test]
fn detail_lines_follow_framing() {
    let b = Breakdown::build(&X, &H, &decompose_step(&X, &H, 1));
    assert_eq!(
        b.detail_lines(),
        vec![
            "k=0: x[0]·h[1] = 0.1·1 = 0.10".to_string(),
            "k=1: x[1]·h[0] = 0.5·1 = 0.50".to_string(),
        ]
    );

    let b = Breakdown::build(&X, &H, &decompose_step_framed(&X, &H, 1, Framing::ImpulseFixed));
    assert_eq!(
        b.detail_lines(),
        vec![
            "k=0: h[0]·x[1] = 1·0.5 = 0.50".to_string(),
            "k=1: h[1]·x[0] = 1·0.1 = 0.10".to_string(),
        ]
    );
    assert_eq!(b.caption(), "h[k] fixed, x[n-k] sliding");
}

#[test]
fn display_has_caption_headline_and_details() {
    let b = Breakdown::build(&X, &H, &decompose_step(&X, &H, 5));
    let text = b.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("x[k] fixed"));
    assert!(lines[1].ends_with("= 1.50"));
    assert!(lines[2].contains("k=3"));
}
