use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc,
    },
    time::Duration,
};

use crate::{
    assist::assistant::{
        Assistant, ExplainRequest, explain_step_or_fallback, generate_signal_or_fallback,
    },
    foundation::{
        core::Signal,
        error::{ConvoError, ConvoResult},
    },
};

/// An assistant call running on its own thread.
///
/// The caller keeps ticking the scan while the request is in flight. Dropping
/// or cancelling the handle discards the late reply.
#[derive(Debug)]
pub struct PendingRequest<T> {
    rx: mpsc::Receiver<ConvoResult<T>>,
    cancelled: Arc<AtomicBool>,
}

impl<T: Send + 'static> PendingRequest<T> {
    /// Run `job` on a named worker thread.
    pub fn spawn<F>(job: F) -> ConvoResult<Self>
    where
        F: FnOnce() -> ConvoResult<T> + Send + 'static,
    {
        let (tx, rx) = mpsc::sync_channel(1);
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        std::thread::Builder::new()
            .name("convoscope-assist".to_string())
            .spawn(move || {
                let out = job();
                if !flag.load(Ordering::Acquire) {
                    // Receiver may already be gone.
                    let _ = tx.send(out);
                }
            })
            .map_err(|e| ConvoError::assist(format!("failed to spawn assist worker: {e}")))?;
        Ok(Self { rx, cancelled })
    }

    /// Non-blocking check; `None` while the worker is still busy.
    pub fn poll(&self) -> Option<ConvoResult<T>> {
        if self.is_cancelled() {
            return Some(Err(ConvoError::assist("request cancelled")));
        }
        match self.rx.try_recv() {
            Ok(out) => Some(out),
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => {
                Some(Err(ConvoError::assist("assist worker exited without a reply")))
            }
        }
    }

    /// Block until the reply arrives or `timeout` passes.
    ///
    /// A timed-out request is cancelled.
    pub fn wait_timeout(self, timeout: Duration) -> ConvoResult<T> {
        match self.rx.recv_timeout(timeout) {
            Ok(out) => out,
            Err(mpsc::RecvTimeoutError::Timeout) => {
                self.cancel();
                Err(ConvoError::assist(format!(
                    "no reply within {} ms",
                    timeout.as_millis()
                )))
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                Err(ConvoError::assist("assist worker exited without a reply"))
            }
        }
    }

    /// Discard whatever the worker eventually produces.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// True once [`cancel`](Self::cancel) was called.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Explain a step in the background; the reply is already fallback-substituted.
pub fn spawn_explain(
    assistant: Arc<dyn Assistant>,
    req: ExplainRequest,
) -> ConvoResult<PendingRequest<String>> {
    PendingRequest::spawn(move || Ok(explain_step_or_fallback(assistant.as_ref(), &req)))
}

/// Generate a signal in the background; the reply is already fallback-substituted.
pub fn spawn_generate(
    assistant: Arc<dyn Assistant>,
    description: String,
) -> ConvoResult<PendingRequest<Signal>> {
    PendingRequest::spawn(move || Ok(generate_signal_or_fallback(assistant.as_ref(), &description)))
}

#[cfg(test)]
#[path = "../../tests/unit/assist/request.rs"]
mod tests;
