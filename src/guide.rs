//! # convoscope guide (v0.1.0)
//!
//! A walkthrough of how convoscope turns two short signals into a scanned,
//! step-by-step picture of discrete convolution.
//!
//! For copy/paste commands, start with the repository `README.md`.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Signal`](crate::Signal): a finite, 0-indexed sequence of real samples. Indices outside
//!   `[0, len)` read as zero.
//! - [`convolve`](crate::convolve): the full linear convolution
//!   `y[n] = Σ_k x[k]·h[n-k]`, of length `|x| + |h| - 1` (empty if either operand is empty).
//! - [`decompose_step`](crate::decompose_step): the individual products `x[k]·h[n-k]` that add up
//!   to one output sample, together with their sum.
//! - [`Scan`](crate::Scan): the scanning index `n` plus play/pause state and the playback interval.
//! - [`Session`](crate::Session): both operands, their text editors, the scan and a memoized
//!   output.
//!
//! The convolution core never fails. Empty operands and out-of-range indices produce empty
//! results rather than errors; errors belong to parsing, rendering, encoding and the assistant.
//!
//! ---
//!
//! ## Framing
//!
//! Convolution is commutative, so the same `y[n]` can be read two ways:
//!
//! - [`Framing::InputFixed`](crate::Framing::InputFixed): `x[k]` stays put and `h[n-k]` slides.
//!   This is what [`decompose_step`](crate::decompose_step) reports.
//! - [`Framing::ImpulseFixed`](crate::Framing::ImpulseFixed): `h[k]` stays put and the flipped
//!   input `x[n-k]` slides. The rendered stage uses this framing.
//!
//! Both framings list the same products in a different order and produce the same sum. The
//! `InputFixed` sum is accumulated in the same order as [`convolve`](crate::convolve), so the two
//! agree bit for bit.
//!
//! ---
//!
//! ## Scanning
//!
//! Manual stepping is clamped to [`scan_bounds`](crate::scan_bounds): two indices past either
//! end of the output. Playback advances one index per interval and stops (pausing itself) once
//! `n` reaches [`playback_stop`](crate::playback_stop), one past the last output sample.
//!
//! Editing a signal commits on blur/enter: the text is parsed with
//! [`parse_signal`](crate::parse_signal), and a draft that yields no number reverts to the last
//! committed value. A successful commit resets the scan to `n = 0`, paused.
//!
//! ---
//!
//! ## Rendering
//!
//! A frame is drawn in three layers:
//!
//! 1. [`StageScene`](crate::StageScene) / [`OutputChart`](crate::OutputChart) /
//!    [`Breakdown`](crate::Breakdown): pure geometry and text for index `n`, no IO.
//! 2. [`render_stage_svg`](crate::render_stage_svg): serializes that geometry into an SVG
//!    document whose size depends only on the operand lengths, so every frame of a sweep has the
//!    same dimensions.
//! 3. [`rasterize_svg`](crate::rasterize_svg): parses the SVG with `usvg` (system fonts, loaded
//!    once) and rasterizes it with `resvg` into a premultiplied [`FrameRGBA`](crate::FrameRGBA).
//!
//! [`render_sweep`](crate::render_sweep) renders every index of the scan range, optionally on a
//! `rayon` pool, and [`render_sweep_to_mp4`](crate::render_sweep_to_mp4) pipes the frames into
//! `ffmpeg` batch by batch through [`for_each_sweep_frame`](crate::for_each_sweep_frame),
//! holding each index for one playback interval.
//!
//! ---
//!
//! ## The assistant
//!
//! The [`Assistant`](crate::Assistant) trait is the seam for a generative collaborator. It can
//! generate a signal from a description and explain one step in prose. Implementations are
//! slow and unreliable, so callers go through
//! [`generate_signal_or_fallback`](crate::generate_signal_or_fallback) and
//! [`explain_step_or_fallback`](crate::explain_step_or_fallback), which substitute fixed values
//! and never fail. [`PendingRequest`](crate::PendingRequest) runs a call on its own thread so the
//! scan keeps ticking while it is in flight.
//!
//! Two implementations ship:
//!
//! - `GeminiAssistant` (feature `assist`, on by default): the hosted `generateContent` endpoint.
//! - [`OfflineAssistant`](crate::OfflineAssistant): a keyword table and templated explanations.
