use super::*;

#[test]
fn signal_prompt_quotes_description_and_bounds() {
    let p = signal_prompt("  a decaying exponential ");
    assert!(p.contains("\"a decaying exponential\""));
    assert!(p.contains("between 5 and 15 samples"));
    assert!(p.contains("-5 and 5"));
}

#[test]
fn explain_prompt_carries_signals_and_value() {
    let req = ExplainRequest {
        x: Signal::new(vec![0.1, 0.5, 1.0, 1.5]),
        h: Signal::new(vec![1.0, 1.0, 1.0]),
        n: 2,
        y_n: 1.6,
    };
    let p = explain_prompt(&req, "Spanish");
    assert!(p.contains("step n=2"));
    assert!(p.contains("[0.1, 0.5, 1, 1.5]"));
    assert!(p.contains("[1, 1, 1]"));
    assert!(p.contains("y[2]"));
    assert!(p.contains("1.6"));
    assert!(p.contains("Answer in Spanish"));
}

#[test]
fn reply_parsing_accepts_only_numeric_arrays() {
    assert_eq!(
        parse_signal_reply(" [1, 2.5, -3] ")
            .unwrap()
            .map(Signal::into_inner),
        Some(vec![1.0, 2.5, -3.0])
    );
    assert_eq!(parse_signal_reply("[]").unwrap(), None);
    assert_eq!(parse_signal_reply("{\"a\": 1}").unwrap(), None);
    assert_eq!(parse_signal_reply("[1, \"two\"]").unwrap(), None);
}

#[test]
fn malformed_reply_is_an_error() {
    for text in ["not json", "[1, 2", "   "] {
        assert!(
            matches!(parse_signal_reply(text), Err(ConvoError::Assist(_))),
            "{text:?}"
        );
    }
}
