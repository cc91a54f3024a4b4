use std::fmt;

use crate::{
    dsp::step::{Framing, StepDecomposition},
    foundation::core::sample_at,
};

/// One displayed product, with the operand samples that formed it.
#[derive(Clone, Debug, PartialEq)]
pub struct BreakdownTerm {
    /// Index into the fixed operand.
    pub k: i64,
    /// `fixed[k]`.
    pub fixed: f64,
    /// `moving[n-k]`.
    pub moving: f64,
    /// Their product.
    pub value: f64,
}

/// The arithmetic breakdown `y[n] = Σ w[n, k] = … = sum`.
///
/// Zero products are left out, matching what the stage draws.
#[derive(Clone, Debug, PartialEq)]
pub struct Breakdown {
    /// Scanning index.
    pub n: i64,
    /// Framing of `k`.
    pub framing: Framing,
    /// Nonzero products, increasing `k`.
    pub terms: Vec<BreakdownTerm>,
    /// Sum of all products at `n`.
    pub sum: f64,
}

impl Breakdown {
    /// Build from a decomposition of `x * h`.
    pub fn build(x: &[f64], h: &[f64], step: &StepDecomposition) -> Self {
        let (fixed, moving) = match step.framing {
            Framing::InputFixed => (x, h),
            Framing::ImpulseFixed => (h, x),
        };
        let terms = step
            .nonzero_terms()
            .map(|t| BreakdownTerm {
                k: t.k,
                fixed: sample_at(fixed, t.k).unwrap_or(0.0),
                moving: sample_at(moving, step.n - t.k).unwrap_or(0.0),
                value: t.value,
            })
            .collect();
        Self {
            n: step.n,
            framing: step.framing,
            terms,
            sum: step.sum,
        }
    }

    /// True when nothing overlaps at `n`.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// `y[n] = Σ w[n, k] = 0.10 + 0.50 = 0.60`.
    pub fn headline(&self) -> String {
        let n = self.n;
        if self.terms.is_empty() {
            return format!("y[{n}] = Σ w[{n}, k] = 0 (no overlap)");
        }

        let mut out = format!("y[{n}] = Σ w[{n}, k] = ");
        for (i, t) in self.terms.iter().enumerate() {
            if i == 0 {
                out.push_str(&format!("{:.2}", t.value));
            } else if t.value < 0.0 {
                out.push_str(&format!(" - {:.2}", -t.value));
            } else {
                out.push_str(&format!(" + {:.2}", t.value));
            }
        }
        out.push_str(&format!(" = {:.2}", self.sum));
        out
    }

    /// `k=0: x[0]·h[2] = 0.1·1 = 0.10` per term.
    pub fn detail_lines(&self) -> Vec<String> {
        let f = self.framing.fixed().symbol();
        let m = self.framing.moving().symbol();
        self.terms
            .iter()
            .map(|t| {
                format!(
                    "k={k}: {f}[{k}]·{m}[{j}] = {a}·{b} = {v:.2}",
                    k = t.k,
                    j = self.n - t.k,
                    a = t.fixed,
                    b = t.moving,
                    v = t.value,
                )
            })
            .collect()
    }

    /// Perspective caption, e.g. `h[k] fixed, x[n-k] sliding`.
    pub fn caption(&self) -> String {
        self.framing.caption()
    }
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "sum for n = {} ({})", self.n, self.caption())?;
        writeln!(f, "{}", self.headline())?;
        for line in self.detail_lines() {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/breakdown.rs"]
mod tests;
