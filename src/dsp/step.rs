use crate::foundation::core::{SignalRole, sample_at};

/// Which operand stays put while the other one is flipped and slid across it.
///
/// The summation index `k` always ranges over the fixed operand's domain and
/// the moving operand is addressed through `n - k`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Framing {
    /// `k` over `x`'s domain, terms `x[k]·h[n-k]`.
    #[default]
    InputFixed,
    /// `k` over `h`'s domain, terms `h[k]·x[n-k]`.
    ImpulseFixed,
}

impl Framing {
    /// Operand indexed by `k`.
    pub fn fixed(self) -> SignalRole {
        match self {
            Self::InputFixed => SignalRole::Input,
            Self::ImpulseFixed => SignalRole::Impulse,
        }
    }

    /// Operand indexed by `n - k`.
    pub fn moving(self) -> SignalRole {
        self.fixed().other()
    }

    /// Short caption, e.g. `x[k] fixed, h[n-k] sliding`.
    pub fn caption(self) -> String {
        format!(
            "{}[k] fixed, {}[n-k] sliding",
            self.fixed().symbol(),
            self.moving().symbol()
        )
    }
}

/// One contributing product at a fixed scanning index.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StepTerm {
    /// Index into the fixed operand.
    pub k: i64,
    /// `fixed[k]·moving[n-k]`.
    pub value: f64,
}

/// The overlap at scanning index `n`, term by term.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StepDecomposition {
    /// Scanning index.
    pub n: i64,
    /// Framing the terms are indexed in.
    pub framing: Framing,
    /// Contributing terms, increasing `k`.
    pub terms: Vec<StepTerm>,
    /// Sum of `terms`, accumulated in order.
    pub sum: f64,
}

impl StepDecomposition {
    /// No overlap at this index.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms whose product is nonzero; zero products are hidden when displayed.
    pub fn nonzero_terms(&self) -> impl Iterator<Item = &StepTerm> {
        self.terms.iter().filter(|t| t.value != 0.0)
    }
}

/// Decompose `y[n]` with `k` ranging over `x`'s domain (terms `x[k]·h[n-k]`).
///
/// This is the framing used for the arithmetic breakdown. Out-of-range `n`
/// (and empty operands) give no terms and a zero sum.
pub fn decompose_step(x: &[f64], h: &[f64], n: i64) -> StepDecomposition {
    decompose_step_framed(x, h, n, Framing::InputFixed)
}

/// Decompose `y[n]` in an explicit framing.
///
/// Both framings yield the same multiset of products and the same sum (up to
/// floating-point reassociation); only the `k` labels differ.
pub fn decompose_step_framed(x: &[f64], h: &[f64], n: i64, framing: Framing) -> StepDecomposition {
    let (fixed, moving) = match framing {
        Framing::InputFixed => (x, h),
        Framing::ImpulseFixed => (h, x),
    };

    let mut terms = Vec::new();
    let mut sum = 0.0;

    if !fixed.is_empty() && !moving.is_empty() {
        // k in [0, |fixed|) and n - k in [0, |moving|)
        let lo = n.saturating_sub(moving.len() as i64 - 1).max(0);
        let hi = n.min(fixed.len() as i64 - 1);
        for k in lo..=hi {
            let (Some(a), Some(b)) = (sample_at(fixed, k), sample_at(moving, n - k)) else {
                continue;
            };
            let value = a * b;
            sum += value;
            terms.push(StepTerm { k, value });
        }
    }

    StepDecomposition {
        n,
        framing,
        terms,
        sum,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dsp/step.rs"]
mod tests;
