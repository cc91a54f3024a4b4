use super::*;
use crate::dsp::convolve::convolve;

const X: [f64; 4] = [0.1, 0.5, 1.0, 1.5];
const H: [f64; 3] = [1.0, 1.0, 1.0];

#[test]
fn input_fixed_terms_at_n2() {
    let step = decompose_step(&X, &H, 2);
    assert_eq!(step.framing, Framing::InputFixed);
    let ks: Vec<i64> = step.terms.iter().map(|t| t.k).collect();
    assert_eq!(ks, vec![0, 1, 2]);
    assert_eq!(step.terms[0].value, 0.1);
    assert_eq!(step.terms[2].value, 1.0);
    assert_eq!(step.sum, convolve(&X, &H)[2]);
}

#[test]
fn input_fixed_terms_at_tail() {
    let step = decompose_step(&X, &H, 5);
    let ks: Vec<i64> = step.terms.iter().map(|t| t.k).collect();
    assert_eq!(ks, vec![3]);
    assert_eq!(step.sum, 1.5);
}

#[test]
fn impulse_fixed_indexes_over_h() {
    let step = decompose_step_framed(&X, &H, 4, Framing::ImpulseFixed);
    let ks: Vec<i64> = step.terms.iter().map(|t| t.k).collect();
    // x[n-k] valid for n-k in [0,4) => k in [1,5) intersect [0,3)
    assert_eq!(ks, vec![1, 2]);
    let values: Vec<f64> = step.terms.iter().map(|t| t.value).collect();
    assert_eq!(values, vec![1.5, 1.0]);
}

#[test]
fn sum_matches_convolution_everywhere() {
    let y = convolve(&X, &H);
    for (n, &yn) in y.iter().enumerate() {
        let a = decompose_step(&X, &H, n as i64);
        assert_eq!(a.sum, yn, "input-fixed n={n}");

        let b = decompose_step_framed(&X, &H, n as i64, Framing::ImpulseFixed);
        assert!((b.sum - yn).abs() < 1e-12, "impulse-fixed n={n}");
    }
}

#[test]
fn out_of_range_has_no_overlap() {
    for n in [-5, -1, 6, 7, 100] {
        for framing in [Framing::InputFixed, Framing::ImpulseFixed] {
            let step = decompose_step_framed(&X, &H, n, framing);
            assert!(step.is_empty(), "n={n}");
            assert_eq!(step.sum, 0.0);
        }
    }
}

#[test]
fn empty_operand_has_no_overlap() {
    assert!(decompose_step(&[], &H, 0).is_empty());
    assert!(decompose_step(&X, &[], 0).is_empty());
    assert_eq!(decompose_step(&[], &[], 0).sum, 0.0);
}

#[test]
fn zero_products_are_kept_but_filterable() {
    let step = decompose_step(&[1.0, 0.0, 2.0], &[1.0, 1.0], 1);
    assert_eq!(step.terms.len(), 2);
    assert_eq!(step.nonzero_terms().count(), 1);
}

#[test]
fn framing_roles_and_caption() {
    assert_eq!(Framing::InputFixed.fixed(), crate::SignalRole::Input);
    assert_eq!(Framing::InputFixed.moving(), crate::SignalRole::Impulse);
    assert_eq!(Framing::ImpulseFixed.caption(), "h[k] fixed, x[n-k] sliding");
}
