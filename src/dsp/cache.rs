use crate::dsp::convolve::convolve;

/// Memoizes [`convolve`] on the value of its operands.
///
/// Keys compare sample bit patterns, so a changed `-0.0`/`0.0` costs a
/// recompute but never returns a stale output.
#[derive(Clone, Debug, Default)]
pub struct ConvolutionCache {
    entry: Option<CacheEntry>,
    hits: u64,
    misses: u64,
}

#[derive(Clone, Debug)]
struct CacheEntry {
    x: Vec<f64>,
    h: Vec<f64>,
    y: Vec<f64>,
}

impl CacheEntry {
    fn matches(&self, x: &[f64], h: &[f64]) -> bool {
        same_bits(&self.x, x) && same_bits(&self.h, h)
    }
}

fn same_bits(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(p, q)| p.to_bits() == q.to_bits())
}

impl ConvolutionCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `x * h`, recomputing only when the operands changed.
    pub fn get_or_compute(&mut self, x: &[f64], h: &[f64]) -> &[f64] {
        let fresh = match &self.entry {
            Some(entry) => !entry.matches(x, h),
            None => true,
        };

        if fresh {
            self.misses += 1;
            tracing::debug!(x_len = x.len(), h_len = h.len(), "convolution cache miss");
            self.entry = Some(CacheEntry {
                x: x.to_vec(),
                h: h.to_vec(),
                y: convolve(x, h),
            });
        } else {
            self.hits += 1;
        }

        match &self.entry {
            Some(entry) => &entry.y,
            None => &[],
        }
    }

    /// Drop the memoized output.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Lookups served from the memo.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that recomputed.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dsp/cache.rs"]
mod tests;
