use super::*;
use crate::assist::offline::OfflineAssistant;

#[test]
fn wait_returns_worker_result() {
    let req = PendingRequest::spawn(|| Ok(41 + 1)).unwrap();
    assert_eq!(req.wait_timeout(Duration::from_secs(5)).unwrap(), 42);
}

#[test]
fn worker_errors_are_forwarded() {
    let req: PendingRequest<u8> = PendingRequest::spawn(|| Err(ConvoError::assist("boom"))).unwrap();
    let err = req.wait_timeout(Duration::from_secs(5)).unwrap_err();
    assert!(err.to_string().contains("boom"));
}

#[test]
fn poll_is_none_until_ready() {
    let (go_tx, go_rx) = mpsc::channel::<()>();
    let req = PendingRequest::spawn(move || {
        go_rx.recv().map_err(|_| ConvoError::assist("gate dropped"))?;
        Ok("done")
    })
    .unwrap();
    assert!(req.poll().is_none());
    go_tx.send(()).unwrap();
    let out = loop {
        if let Some(out) = req.poll() {
            break out;
        }
        std::thread::sleep(Duration::from_millis(5));
    };
    assert_eq!(out.unwrap(), "done");
}

#[test]
fn timeout_cancels() {
    let (_hold, gate) = mpsc::channel::<()>();
    let req = PendingRequest::spawn(move || {
        let _ = gate.recv_timeout(Duration::from_secs(2));
        Ok(())
    })
    .unwrap();
    let err = req.wait_timeout(Duration::from_millis(20)).unwrap_err();
    assert!(matches!(err, ConvoError::Assist(_)));
}

#[test]
fn cancelled_request_reports_cancellation() {
    let (_hold, gate) = mpsc::channel::<()>();
    let req = PendingRequest::spawn(move || {
        let _ = gate.recv_timeout(Duration::from_secs(2));
        Ok(1)
    })
    .unwrap();
    req.cancel();
    assert!(req.is_cancelled());
    assert!(matches!(req.poll(), Some(Err(ConvoError::Assist(_)))));
}

#[test]
fn background_helpers_apply_fallbacks() {
    let a: Arc<dyn Assistant> = Arc::new(OfflineAssistant);
    let sig = spawn_generate(Arc::clone(&a), "nonsense".to_string())
        .unwrap()
        .wait_timeout(Duration::from_secs(5))
        .unwrap();
    assert_eq!(sig.as_slice(), &[1.0, 0.0, 0.0]);

    let req = ExplainRequest {
        x: Signal::new(vec![1.0]),
        h: Signal::new(vec![1.0]),
        n: 0,
        y_n: 1.0,
    };
    let text = spawn_explain(a, req)
        .unwrap()
        .wait_timeout(Duration::from_secs(5))
        .unwrap();
    assert!(text.contains("y[0] = 1"));
}
