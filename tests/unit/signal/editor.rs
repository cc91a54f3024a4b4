use super::*;

fn editor() -> SignalEditor {
    SignalEditor::new(SignalRole::Input, Signal::new(vec![1.0, 2.0]))
}

#[test]
fn draft_starts_from_value() {
    let ed = editor();
    assert_eq!(ed.draft(), "1, 2");
    assert_eq!(ed.len(), 2);
    assert_eq!(ed.role(), SignalRole::Input);
}

#[test]
fn commit_adopts_valid_draft_and_normalizes_text() {
    let mut ed = editor();
    ed.set_draft("3,4.50 ,x");
    let out = ed.commit();
    assert_eq!(out, CommitOutcome::Committed(Signal::new(vec![3.0, 4.5])));
    assert_eq!(ed.value().as_slice(), &[3.0, 4.5]);
    assert_eq!(ed.draft(), "3, 4.5");
}

#[test]
fn commit_reverts_empty_draft() {
    let mut ed = editor();
    ed.set_draft("nothing here");
    assert_eq!(ed.commit(), CommitOutcome::Reverted);
    assert_eq!(ed.value().as_slice(), &[1.0, 2.0]);
    assert_eq!(ed.draft(), "1, 2");
}

#[test]
fn replace_sets_value_and_draft() {
    let mut ed = editor();
    ed.replace(Signal::new(vec![1.0, 1.0, 1.0, 1.0, 1.0]));
    assert_eq!(ed.len(), 5);
    assert_eq!(ed.draft(), "1, 1, 1, 1, 1");
}
