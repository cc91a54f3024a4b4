use crate::foundation::error::{ConvoError, ConvoResult};

pub use kurbo::{Point, Rect};

/// An ordered, finite, 0-indexed sequence of real samples.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Signal(pub Vec<f64>);

impl Signal {
    /// Wrap a sample vector.
    pub fn new(samples: Vec<f64>) -> Self {
        Self(samples)
    }

    /// Borrow the samples.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Consume the signal and return its samples.
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    /// Sample at a signed index, `None` outside `[0, len)`.
    pub fn at(&self, idx: i64) -> Option<f64> {
        sample_at(&self.0, idx)
    }

    /// Reject non-finite samples.
    pub fn validate(&self) -> ConvoResult<()> {
        if let Some(pos) = self.0.iter().position(|v| !v.is_finite()) {
            return Err(ConvoError::validation(format!(
                "signal sample {pos} is not finite"
            )));
        }
        Ok(())
    }
}

impl std::ops::Deref for Signal {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for Signal {
    fn from(samples: Vec<f64>) -> Self {
        Self(samples)
    }
}

impl FromIterator<f64> for Signal {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Signed-index lookup into a sample slice.
pub(crate) fn sample_at(samples: &[f64], idx: i64) -> Option<f64> {
    usize::try_from(idx).ok().and_then(|i| samples.get(i).copied())
}

/// Which of the two operands a signal plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalRole {
    /// The input signal `x`.
    Input,
    /// The impulse response `h`, used as the kernel.
    Impulse,
}

impl SignalRole {
    /// Single-letter symbol used in formulas.
    pub fn symbol(self) -> char {
        match self {
            Self::Input => 'x',
            Self::Impulse => 'h',
        }
    }

    /// Human label, e.g. `x[n]`.
    pub fn label(self) -> String {
        format!("{}[n]", self.symbol())
    }

    /// The other operand.
    pub fn other(self) -> Self {
        match self {
            Self::Input => Self::Impulse,
            Self::Impulse => Self::Input,
        }
    }
}

/// Half-open range of signed indices `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IndexRange {
    /// First index in the range.
    pub start: i64,
    /// One past the last index.
    pub end: i64, // exclusive
}

impl IndexRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: i64, end: i64) -> ConvoResult<Self> {
        if start > end {
            return Err(ConvoError::validation("IndexRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Range covering `[start, last]` inclusive.
    pub fn inclusive(start: i64, last: i64) -> Self {
        Self {
            start,
            end: last.saturating_add(1).max(start),
        }
    }

    /// Number of indices in the range.
    pub fn len(self) -> u64 {
        self.end.saturating_sub(self.start).max(0) as u64
    }

    /// True when the range holds no index.
    pub fn is_empty(self) -> bool {
        self.start >= self.end
    }

    /// Membership test.
    pub fn contains(self, idx: i64) -> bool {
        self.start <= idx && idx < self.end
    }

    /// Clamp an index into the range (returns `start` for empty ranges).
    pub fn clamp(self, idx: i64) -> i64 {
        if self.is_empty() {
            return self.start;
        }
        idx.clamp(self.start, self.end - 1)
    }

    /// Iterate the indices in increasing order.
    pub fn iter(self) -> std::ops::Range<i64> {
        self.start..self.end
    }
}

/// Straight (non-premultiplied) RGBA8 color, serialized as `#rrggbb` or `#rrggbbaa`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> ConvoResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(ConvoError::parse(format!("invalid hex color '{s}'")));
        }
        let byte = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ConvoError::parse(format!("invalid hex color '{s}'")))
        };
        match hex.len() {
            3 => {
                let nib = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| ConvoError::parse(format!("invalid hex color '{s}'")))
                };
                Ok(Self::rgb(nib(0)?, nib(1)?, nib(2)?))
            }
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: byte(6)?,
            }),
            _ => Err(ConvoError::parse(format!("invalid hex color '{s}'"))),
        }
    }

    /// `#rrggbb` when opaque, `#rrggbbaa` otherwise.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Channels as an array.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = ConvoError;

    fn try_from(s: String) -> ConvoResult<Self> {
        Self::from_hex(&s)
    }
}

impl From<Rgba8> for String {
    fn from(c: Rgba8) -> Self {
        c.to_hex()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
