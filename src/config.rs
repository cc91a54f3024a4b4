//! JSON session configuration.
//!
//! Every field has a default, so `{}` is a valid config describing the stock
//! demo session. Command-line flags override individual fields after loading.

use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    assist::assistant::AssistConfig,
    foundation::{
        core::Signal,
        error::{ConvoError, ConvoResult},
    },
    playback::{
        scan::{DEFAULT_INTERVAL_MS, SPEED_SLIDER_MAX, SPEED_SLIDER_MIN},
        session::{DEFAULT_H, DEFAULT_X, Session},
    },
    render::frame::RenderSettings,
};

/// Video encoding settings.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EncodeSettings {
    /// Output frame rate.
    pub fps: u32,
}

impl Default for EncodeSettings {
    fn default() -> Self {
        Self { fps: 30 }
    }
}

/// Everything needed to start a session and render it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Input signal.
    pub x: Signal,
    /// Impulse response.
    pub h: Signal,
    /// Initial scanning index.
    pub n: i64,
    /// Playback interval between scan advances.
    pub interval_ms: u64,
    /// Stage drawing settings.
    pub render: RenderSettings,
    /// Video settings.
    pub encode: EncodeSettings,
    /// Assistant settings.
    pub assist: AssistConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            x: Signal::from(DEFAULT_X.to_vec()),
            h: Signal::from(DEFAULT_H.to_vec()),
            n: 0,
            interval_ms: DEFAULT_INTERVAL_MS,
            render: RenderSettings::default(),
            encode: EncodeSettings::default(),
            assist: AssistConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> ConvoResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every nested setting.
    pub fn validate(&self) -> ConvoResult<()> {
        self.x.validate()?;
        self.h.validate()?;
        // interval range mirrors the slider range
        let (lo, hi) = (SPEED_SLIDER_MIN, SPEED_SLIDER_MAX);
        if !(lo..=hi).contains(&self.interval_ms) {
            return Err(ConvoError::validation(format!(
                "interval_ms must be in [{lo}, {hi}], got {}",
                self.interval_ms
            )));
        }
        self.render.validate()?;
        if self.encode.fps == 0 {
            return Err(ConvoError::validation("encode fps must be > 0"));
        }
        self.assist.validate()
    }

    /// Session positioned at `n` with the configured interval.
    pub fn into_session(self) -> Session {
        let mut session = Session::new(self.x, self.h);
        session.scan_mut().set_n(self.n);
        session.scan_mut().set_interval_ms(self.interval_ms);
        session
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
