use crate::{
    dsp::step::{Framing, StepDecomposition, decompose_step_framed},
    foundation::core::{Point, sample_at},
    stage::layout::{StageLayout, StageRow},
};

/// One drawn stem.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StemMark {
    /// Stage index.
    pub k: i64,
    /// Sample or product value.
    pub value: f64,
    /// Point on the row axis.
    pub base: Point,
    /// Stem head.
    pub tip: Point,
    /// Moving stems only: lies over the fixed operand's support.
    pub overlap: bool,
}

/// Everything the stage draws for a single scanning index.
///
/// The stage shows `h[k]` fixed and `x[n-k]` sliding, so its products follow
/// [`Framing::ImpulseFixed`].
#[derive(Clone, Debug, PartialEq)]
pub struct StageScene {
    /// Scanning index.
    pub n: i64,
    /// Pixel mapping.
    pub layout: StageLayout,
    /// `h[k]` stems.
    pub fixed: Vec<StemMark>,
    /// `x[n-k]` stems inside the visible window.
    pub moving: Vec<StemMark>,
    /// Nonzero `h[k]·x[n-k]` stems.
    pub products: Vec<StemMark>,
    /// Full decomposition behind `products`.
    pub step: StepDecomposition,
}

impl StageScene {
    /// Lay out the stage for `x`, `h` at index `n`.
    pub fn build(x: &[f64], h: &[f64], n: i64) -> Self {
        let layout = StageLayout::new(x.len(), h.len());

        let fixed = h
            .iter()
            .enumerate()
            .map(|(k, &value)| {
                let k = k as i64;
                let (base, tip) = layout.stem(StageRow::Fixed, k, value);
                StemMark {
                    k,
                    value,
                    base,
                    tip,
                    overlap: false,
                }
            })
            .collect();

        let h_len = h.len() as i64;
        let moving = layout
            .ks()
            .filter_map(|k| {
                let value = sample_at(x, n - k)?;
                let (base, tip) = layout.stem(StageRow::Moving, k, value);
                Some(StemMark {
                    k,
                    value,
                    base,
                    tip,
                    overlap: (0..h_len).contains(&k),
                })
            })
            .collect();

        let step = decompose_step_framed(x, h, n, Framing::ImpulseFixed);
        let products = step
            .nonzero_terms()
            .filter(|t| layout.is_visible(t.k))
            .map(|t| {
                let (base, tip) = layout.stem(StageRow::Product, t.k, t.value);
                StemMark {
                    k: t.k,
                    value: t.value,
                    base,
                    tip,
                    overlap: true,
                }
            })
            .collect();

        Self {
            n,
            layout,
            fixed,
            moving,
            products,
            step,
        }
    }

    /// Sum of the drawn products.
    pub fn sum(&self) -> f64 {
        self.step.sum
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/scene.rs"]
mod tests;
