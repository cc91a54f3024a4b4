use std::{
    ffi::OsString,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
    process::{Child, ChildStdin, Command, Stdio},
};

use anyhow::Context as _;

use crate::{
    foundation::{
        core::Rgba8,
        error::{ConvoError, ConvoResult},
    },
    render::frame::FrameRGBA,
};

/// True when an `ffmpeg` binary answers `-version`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> ConvoResult<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create output directory '{}'", dir.display()))?;
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Where and how a sweep video is written.
///
/// The pixel size is taken from the first stage frame; every later frame must match it.
#[derive(Clone, Debug)]
pub struct VideoTarget {
    /// Output `.mp4` path.
    pub out_path: PathBuf,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Output frame rate.
    pub fps: u32,
    /// Replace an existing file.
    pub overwrite: bool,
}

impl VideoTarget {
    /// Target sized after `frame`.
    pub fn for_frame(frame: &FrameRGBA, out_path: &Path, fps: u32, overwrite: bool) -> Self {
        Self {
            out_path: out_path.to_path_buf(),
            width: frame.width,
            height: frame.height,
            fps,
            overwrite,
        }
    }

    /// yuv420p needs even dimensions.
    pub fn validate(&self) -> ConvoResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConvoError::validation("video frame size must be non-zero"));
        }
        if self.fps == 0 {
            return Err(ConvoError::validation("video fps must be > 0"));
        }
        if self.width % 2 != 0 || self.height % 2 != 0 {
            return Err(ConvoError::validation(format!(
                "video frame size must be even, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Command line for an `ffmpeg` reading opaque RGBA frames from stdin.
    pub fn ffmpeg_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = [
            if self.overwrite { "-y" } else { "-n" },
            "-hide_banner",
            "-loglevel",
            "error",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgba",
            "-video_size",
        ]
        .into_iter()
        .map(OsString::from)
        .collect();
        args.push(format!("{}x{}", self.width, self.height).into());
        args.push("-framerate".into());
        args.push(self.fps.to_string().into());
        for a in [
            "-i", "-", "-an", "-c:v", "libx264", "-pix_fmt", "yuv420p", "-movflags", "+faststart",
        ] {
            args.push(a.into());
        }
        args.push(self.out_path.clone().into_os_string());
        args
    }
}

/// A running `ffmpeg` that turns stage frames into an MP4.
///
/// Frames are flattened over the page background once and then written as many times as
/// they are held on screen.
pub struct Mp4Sink {
    target: VideoTarget,
    background: Rgba8,
    child: Child,
    stdin: Option<BufWriter<ChildStdin>>,
    opaque: Vec<u8>,
    frames: u64,
}

impl Mp4Sink {
    /// Validate `target` and start `ffmpeg`.
    pub fn open(target: VideoTarget, background: Rgba8) -> ConvoResult<Self> {
        target.validate()?;
        ensure_parent_dir(&target.out_path)?;
        if !target.overwrite && target.out_path.exists() {
            return Err(ConvoError::encode(format!(
                "'{}' already exists",
                target.out_path.display()
            )));
        }

        let mut child = Command::new("ffmpeg")
            .args(target.ffmpeg_args())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ConvoError::encode(format!("failed to start ffmpeg: {e}")))?;
        let stdin = child
            .stdin
            .take()
            .map(BufWriter::new)
            .ok_or_else(|| ConvoError::encode("ffmpeg stdin was not captured"))?;

        tracing::debug!(
            width = target.width,
            height = target.height,
            fps = target.fps,
            "ffmpeg started"
        );
        Ok(Self {
            target,
            background,
            child,
            stdin: Some(stdin),
            opaque: Vec::new(),
            frames: 0,
        })
    }

    /// Write `frame` for `hold` consecutive video frames.
    pub fn write_held(&mut self, frame: &FrameRGBA, hold: u64) -> ConvoResult<()> {
        if frame.width != self.target.width || frame.height != self.target.height {
            return Err(ConvoError::encode(format!(
                "frame is {}x{}, video is {}x{}",
                frame.width, frame.height, self.target.width, self.target.height
            )));
        }
        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| ConvoError::encode("ffmpeg stdin already closed"))?;

        frame.flatten_onto(self.background, &mut self.opaque);
        for _ in 0..hold {
            stdin
                .write_all(&self.opaque)
                .map_err(|e| ConvoError::encode(format!("write to ffmpeg failed: {e}")))?;
            self.frames += 1;
        }
        Ok(())
    }

    /// Close stdin and wait for `ffmpeg`, returning the number of frames written.
    pub fn finish(mut self) -> ConvoResult<u64> {
        if let Some(mut stdin) = self.stdin.take() {
            stdin
                .flush()
                .map_err(|e| ConvoError::encode(format!("flush to ffmpeg failed: {e}")))?;
        }
        let out = self
            .child
            .wait_with_output()
            .map_err(|e| ConvoError::encode(format!("waiting for ffmpeg failed: {e}")))?;
        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr);
            return Err(ConvoError::encode(format!(
                "ffmpeg exited with {}: {}",
                out.status,
                stderr.trim()
            )));
        }
        Ok(self.frames)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
