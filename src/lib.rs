//! convoscope is a step-by-step visualizer for discrete linear convolution.
//!
//! Two short signals go in; out come the full output [`convolve`], the
//! individual products behind any one output sample [`decompose_step`], and a
//! scanned picture of the flipped input sliding over the impulse response:
//!
//! - Hold both operands and the scanning index in a [`Session`]
//! - Draw one index as SVG with [`render_stage_svg`] or pixels with [`render_frame`]
//! - Stream a whole sweep into an MP4 with [`render_sweep_to_mp4`]
//! - Ask an [`Assistant`] for a signal or a prose explanation of a step
//!
//! See [`guide`] for the longer tour.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assist;
mod dsp;
mod encode;
mod foundation;
mod playback;
mod render;
mod signal;

/// JSON session configuration.
pub mod config;
/// Long-form crate documentation.
pub mod guide;
/// Stage geometry, colors and layout constants.
pub mod stage;

pub use crate::foundation::core::{IndexRange, Point, Rect, Rgba8, Signal, SignalRole};
pub use crate::foundation::error::{ConvoError, ConvoResult};

pub use crate::dsp::cache::ConvolutionCache;
pub use crate::dsp::convolve::{convolve, output_len, output_support};
pub use crate::dsp::step::{
    Framing, StepDecomposition, StepTerm, decompose_step, decompose_step_framed,
};

pub use crate::signal::editor::{CommitOutcome, SignalEditor};
pub use crate::signal::parse::{format_signal, parse_signal};

pub use crate::playback::scan::{
    DEFAULT_INTERVAL_MS, SCAN_MARGIN, SPEED_SLIDER_MAX, SPEED_SLIDER_MIN, SPEED_SLIDER_STEP, Scan,
    TickOutcome, playback_stop, scan_bounds,
};
pub use crate::playback::session::{DEFAULT_H, DEFAULT_X, Session};

pub use crate::stage::breakdown::{Breakdown, BreakdownTerm};
pub use crate::stage::chart::{Bar, BarState, OutputChart};
pub use crate::stage::layout::{StageLayout, StageRow};
pub use crate::stage::scene::{StageScene, StemMark};

pub use crate::render::frame::{FrameRGBA, RenderSettings};
pub use crate::render::raster::{parse_svg, raster_size, rasterize_svg, rasterize_tree};
pub use crate::render::svg::{DocumentLayout, chart_plot_rect, render_stage_svg, short_num};
pub use crate::render::sweep::{
    RenderThreading, SweepFrame, SweepStats, SweepVideoOpts, for_each_sweep_frame, render_frame,
    render_sweep, render_sweep_to_mp4, sweep_indices,
};

pub use crate::encode::ffmpeg::{Mp4Sink, VideoTarget, ensure_parent_dir, is_ffmpeg_on_path};

pub use crate::assist::assistant::{
    AssistConfig, Assistant, ExplainRequest, FALLBACK_EMPTY_EXPLANATION,
    FALLBACK_FAILED_EXPLANATION, FALLBACK_FAILED_SIGNAL, FALLBACK_UNUSABLE_SIGNAL,
    explain_step_or_fallback, generate_signal_or_fallback,
};
#[cfg(feature = "assist")]
pub use crate::assist::gemini::{GEMINI_BASE_URL, GeminiAssistant};
pub use crate::assist::offline::OfflineAssistant;
pub use crate::assist::prompt::{explain_prompt, parse_signal_reply, signal_prompt};
pub use crate::assist::request::{PendingRequest, spawn_explain, spawn_generate};

pub use crate::config::{EncodeSettings, SessionConfig};
