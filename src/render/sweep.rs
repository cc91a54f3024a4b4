use std::path::Path;

use rayon::prelude::*;

use crate::{
    dsp::convolve::output_len,
    encode::ffmpeg::{Mp4Sink, VideoTarget},
    foundation::{
        core::IndexRange,
        error::{ConvoError, ConvoResult},
    },
    playback::scan::{SCAN_MARGIN, playback_stop},
    render::{frame::FrameRGBA, frame::RenderSettings, raster::rasterize_svg, svg::render_stage_svg},
};

/// Indices a full sweep visits: from `-2` up to the playback stop index.
pub fn sweep_indices(x_len: usize, h_len: usize) -> IndexRange {
    IndexRange::inclusive(-SCAN_MARGIN, playback_stop(output_len(x_len, h_len)))
}

/// Render the stage for `x * h` at index `n` to pixels.
pub fn render_frame(
    x: &[f64],
    h: &[f64],
    n: i64,
    settings: &RenderSettings,
) -> ConvoResult<FrameRGBA> {
    settings.validate()?;
    let svg = render_stage_svg(x, h, n, settings);
    rasterize_svg(&svg, settings.scale)
}

/// Threading knobs for [`render_sweep`].
#[derive(Clone, Debug)]
pub struct RenderThreading {
    /// Rasterize frames on a rayon pool.
    pub parallel: bool,
    /// Pool size; `None` uses rayon's default.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
        }
    }
}

/// One rendered index of a sweep.
#[derive(Clone, Debug)]
pub struct SweepFrame {
    /// Scanning index.
    pub n: i64,
    /// Pixels.
    pub frame: FrameRGBA,
}

/// Render every index of [`sweep_indices`] in order.
#[tracing::instrument(skip(x, h, settings), fields(x_len = x.len(), h_len = h.len()))]
pub fn render_sweep(
    x: &[f64],
    h: &[f64],
    settings: &RenderSettings,
    threading: &RenderThreading,
) -> ConvoResult<Vec<SweepFrame>> {
    let mut frames = Vec::with_capacity(sweep_indices(x.len(), h.len()).len() as usize);
    for_each_sweep_frame(x, h, settings, threading, |sf| {
        frames.push(sf);
        Ok(())
    })?;
    Ok(frames)
}

/// Render the sweep in index order, handing each frame to `visit` as soon as its batch is done.
///
/// With a pool, indices are rasterized one batch of pool-width at a time, so at most that many
/// frames are alive at once. An error from `visit` stops the sweep.
pub fn for_each_sweep_frame<F>(
    x: &[f64],
    h: &[f64],
    settings: &RenderSettings,
    threading: &RenderThreading,
    mut visit: F,
) -> ConvoResult<()>
where
    F: FnMut(SweepFrame) -> ConvoResult<()>,
{
    settings.validate()?;
    let indices: Vec<i64> = sweep_indices(x.len(), h.len()).iter().collect();
    let render = |n: i64| render_frame(x, h, n, settings).map(|frame| SweepFrame { n, frame });

    if !threading.parallel {
        for &n in &indices {
            visit(render(n)?)?;
        }
        return Ok(());
    }

    let pool = build_thread_pool(threading.threads)?;
    let batch = pool.current_num_threads().max(1);
    for chunk in indices.chunks(batch) {
        let rendered: Vec<ConvoResult<SweepFrame>> =
            pool.install(|| chunk.par_iter().map(|&n| render(n)).collect());
        for sf in rendered {
            visit(sf?)?;
        }
    }
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> ConvoResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ConvoError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ConvoError::render(format!("failed to build rayon thread pool: {e}")))
}

/// Options for [`render_sweep_to_mp4`].
#[derive(Clone, Debug)]
pub struct SweepVideoOpts {
    /// Output frame rate.
    pub fps: u32,
    /// How long each index stays on screen.
    pub interval_ms: u64,
    /// Replace an existing file.
    pub overwrite: bool,
    /// Rasterization threading.
    pub threading: RenderThreading,
}

impl Default for SweepVideoOpts {
    fn default() -> Self {
        Self {
            fps: 30,
            interval_ms: crate::playback::scan::DEFAULT_INTERVAL_MS,
            overwrite: true,
            threading: RenderThreading::default(),
        }
    }
}

impl SweepVideoOpts {
    /// Video frames each index is held for, at least one.
    pub fn frames_per_index(&self) -> u64 {
        ((self.interval_ms * u64::from(self.fps) + 500) / 1000).max(1)
    }
}

/// Counters reported by [`render_sweep_to_mp4`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Distinct indices rendered.
    pub indices: u64,
    /// Video frames written.
    pub frames: u64,
}

/// Render the whole sweep and encode it as MP4 through `ffmpeg`.
#[tracing::instrument(skip(x, h, settings, opts), fields(out = %out_path.display()))]
pub fn render_sweep_to_mp4(
    x: &[f64],
    h: &[f64],
    settings: &RenderSettings,
    opts: &SweepVideoOpts,
    out_path: &Path,
) -> ConvoResult<SweepStats> {
    let hold = opts.frames_per_index();
    let mut sink: Option<Mp4Sink> = None;
    let mut indices = 0u64;

    for_each_sweep_frame(x, h, settings, &opts.threading, |sf| {
        if sink.is_none() {
            let target = VideoTarget::for_frame(&sf.frame, out_path, opts.fps, opts.overwrite);
            sink = Some(Mp4Sink::open(target, settings.background)?);
        }
        if let Some(open) = sink.as_mut() {
            open.write_held(&sf.frame, hold)?;
        }
        indices += 1;
        Ok(())
    })?;

    let sink = sink.ok_or_else(|| ConvoError::render("sweep produced no frames"))?;
    let stats = SweepStats {
        indices,
        frames: sink.finish()?,
    };
    tracing::info!(indices = stats.indices, frames = stats.frames, "sweep encoded");
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/render/sweep.rs"]
mod tests;
