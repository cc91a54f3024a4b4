use crate::foundation::core::IndexRange;

/// Length of the full linear convolution of sequences of length `m` and `n`.
///
/// Returns `m + n - 1`, or 0 when either operand is empty.
pub fn output_len(m: usize, n: usize) -> usize {
    if m == 0 || n == 0 { 0 } else { m + n - 1 }
}

/// Indices `n` for which `y[n]` is defined: `[0, output_len)`.
pub fn output_support(m: usize, n: usize) -> IndexRange {
    IndexRange {
        start: 0,
        end: output_len(m, n) as i64,
    }
}

/// Full linear convolution `y = x * h`.
///
/// Direct double-sum accumulation: every pair `(i, j)` adds `x[i]·h[j]` into
/// `y[i + j]`, visiting `i` in increasing order. For a fixed output index the
/// contributions therefore arrive in increasing `i`, which is the same order
/// [`decompose_step`](crate::decompose_step) sums its terms in, so the two
/// agree bit for bit.
///
/// Either operand empty yields an empty output.
pub fn convolve(x: &[f64], h: &[f64]) -> Vec<f64> {
    let mut y = vec![0.0; output_len(x.len(), h.len())];
    if y.is_empty() {
        return y;
    }

    for (i, &xi) in x.iter().enumerate() {
        for (j, &hj) in h.iter().enumerate() {
            y[i + j] += xi * hj;
        }
    }
    y
}

#[cfg(test)]
#[path = "../../tests/unit/dsp/convolve.rs"]
mod tests;
