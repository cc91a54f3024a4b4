use super::*;

#[test]
fn default_session_matches_tool_defaults() {
    let mut s = Session::default();
    assert_eq!(s.x().as_slice(), &DEFAULT_X);
    assert_eq!(s.h().as_slice(), &DEFAULT_H);
    assert_eq!(s.output_len(), 6);
    assert_eq!(s.output().len(), 6);
    assert_eq!(s.n(), 0);
}

#[test]
fn output_is_memoized_across_index_changes() {
    let mut s = Session::default();
    let _ = s.output();
    s.step(1);
    s.step(1);
    let _ = s.output();
    let _ = s.current_value();
    assert_eq!(s.cache_stats(), (2, 1));
}

#[test]
fn current_value_only_inside_output() {
    let mut s = Session::new(Signal::new(vec![1.0, 1.0]), Signal::new(vec![1.0]));
    assert_eq!(s.current_value(), Some(1.0));
    s.step(-1);
    assert_eq!(s.current_value(), None);
    s.step(5);
    assert_eq!(s.n(), 4);
    assert_eq!(s.current_value(), None);
}

#[test]
fn current_step_sum_matches_output() {
    let mut s = Session::default();
    for _ in 0..6 {
        let expected = s.current_value().unwrap_or(0.0);
        assert_eq!(s.current_step().sum, expected);
        s.step(1);
    }
}

#[test]
fn editing_an_operand_resets_scan_and_explanation() {
    let mut s = Session::default();
    s.step(3);
    s.play();
    s.set_explanation("overlap of three samples");

    s.set_draft(SignalRole::Impulse, "1, -1");
    assert!(matches!(s.commit(SignalRole::Impulse), CommitOutcome::Committed(_)));
    assert_eq!(s.n(), 0);
    assert!(!s.scan().is_playing());
    assert!(s.explanation().is_none());
    assert_eq!(s.h().as_slice(), &[1.0, -1.0]);
    assert_eq!(s.output_len(), 5);
}

#[test]
fn reverted_commit_keeps_scan() {
    let mut s = Session::default();
    s.step(2);
    s.set_draft(SignalRole::Input, "??");
    assert_eq!(s.commit(SignalRole::Input), CommitOutcome::Reverted);
    assert_eq!(s.n(), 2);
}

#[test]
fn set_signal_resets() {
    let mut s = Session::default();
    s.step(4);
    s.set_signal(SignalRole::Input, Signal::new(vec![1.0, 1.0, 1.0, 1.0, 1.0]));
    assert_eq!(s.n(), 0);
    assert_eq!(s.signal(SignalRole::Input).len(), 5);
    assert_eq!(s.editor(SignalRole::Input).draft(), "1, 1, 1, 1, 1");
}

#[test]
fn tick_drives_scan_with_output_len() {
    let mut s = Session::default();
    s.play();
    let mut last = TickOutcome::Idle;
    for _ in 0..20 {
        last = s.tick();
        if matches!(last, TickOutcome::Stopped(_)) {
            break;
        }
    }
    assert_eq!(last, TickOutcome::Stopped(7));
}
