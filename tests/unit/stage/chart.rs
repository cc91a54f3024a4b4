use super::*;

fn frame() -> Rect {
    Rect::new(0.0, 0.0, 600.0, 200.0)
}

#[test]
fn bar_states_follow_scan() {
    let chart = OutputChart::build(&[1.0, 2.0, 3.0], 1, frame());
    let states: Vec<BarState> = chart.bars.iter().map(|b| b.state).collect();
    assert_eq!(
        states,
        vec![BarState::Done, BarState::Current, BarState::Pending]
    );
    assert_eq!(chart.current, Some(2.0));
}

#[test]
fn scan_outside_output_has_no_current() {
    let before = OutputChart::build(&[1.0, 2.0], -1, frame());
    assert!(before.bars.iter().all(|b| b.state == BarState::Pending));
    assert_eq!(before.current, None);

    let after = OutputChart::build(&[1.0, 2.0], 3, frame());
    assert!(after.bars.iter().all(|b| b.state == BarState::Done));
    assert_eq!(after.current, None);
}

#[test]
fn range_always_contains_zero() {
    let pos = OutputChart::build(&[1.0, 4.0], 0, frame());
    assert_eq!((pos.y_min, pos.y_max), (0.0, 4.0));
    assert_eq!(pos.baseline_y, 200.0);

    let neg = OutputChart::build(&[-2.0, 2.0], 0, frame());
    assert_eq!((neg.y_min, neg.y_max), (-2.0, 2.0));
    assert_eq!(neg.baseline_y, 100.0);
    assert!(neg.bars[0].rect.y0 >= neg.baseline_y - 1e-9);
}

#[test]
fn flat_output_gets_unit_range() {
    let chart = OutputChart::build(&[0.0, 0.0], 0, frame());
    assert_eq!((chart.y_min, chart.y_max), (0.0, 1.0));
    assert_eq!(chart.bars[0].rect.height(), 0.0);
}

#[test]
fn tallest_bar_spans_the_frame() {
    let chart = OutputChart::build(&[1.0, 2.0, 3.0, 3.0, 2.0, 1.0], 0, frame());
    let tallest = chart.bars[2].rect;
    assert!((tallest.height() - 200.0).abs() < 1e-9);
    assert_eq!(chart.bars.len(), 6);
    assert!((chart.bars[0].label_x - 50.0).abs() < 1e-9);
}

#[test]
fn palette_matches_states() {
    assert_eq!(BarState::Current.fill().to_hex(), "#10b981");
    assert_eq!(BarState::Done.fill().to_hex(), "#34d399");
    assert_eq!(BarState::Pending.fill().to_hex(), "#e2e8f0");
    assert!(BarState::Current.stroke().is_some());
    assert!(BarState::Pending.stroke().is_none());
}

#[test]
fn grid_spans_range() {
    let chart = OutputChart::build(&[-1.0, 3.0], 0, frame());
    let grid = chart.grid();
    assert_eq!(grid.len(), 5);
    assert_eq!(grid[0], (-1.0, 200.0));
    assert_eq!(grid[4], (3.0, 0.0));
}
