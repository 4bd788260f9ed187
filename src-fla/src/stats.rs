//! Summary-statistics helpers shared by the FLM bank.

/// (min, q25, median, q75, max, mean, sd) of a length-n >= 1 sample.
///
/// Quantiles are positional with truncation (`q25 = v[floor(0.25n)]`, same
/// for `q75`); the median is `v[floor(n/2)]` for odd `n` and
/// `(v[n/2] + v[n/2+1]) / 2` for even `n`, which reads one slot past the
/// textbook midpoint on purpose, matching the original implementation's
/// off-by-one exactly (see DESIGN.md). For `n == 2` that would index past
/// the end of the array; there we clamp to the last valid index rather than
/// panic, a divergence recorded in DESIGN.md. Standard deviation uses the
/// unbiased (`n-1`) denominator.
pub fn summary_stats(xs: &[f64]) -> (f64, f64, f64, f64, f64, f64, f64) {
    let n = xs.len();
    assert!(n >= 1, "summary_stats requires at least one sample");
    let mut v = xs.to_vec();
    v.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let min = v[0];
    let max = v[n - 1];
    let q25 = v[((0.25 * n as f64) as usize).min(n - 1)];
    let q75 = v[((0.75 * n as f64) as usize).min(n - 1)];
    let median = if n % 2 == 0 {
        let hi = (n / 2 + 1).min(n - 1);
        (v[n / 2] + v[hi]) / 2.0
    } else {
        v[n / 2]
    };

    let (mean, sd) = mean_std(&v);
    (min, q25, median, q75, max, mean, sd)
}

/// Mean and unbiased (`n-1`) standard deviation.
pub fn mean_std(xs: &[f64]) -> (f64, f64) {
    let n = xs.len() as f64;
    let mean = xs.iter().sum::<f64>() / n;
    let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, var.sqrt())
}

/// Pearson correlation via the identity form `(Σxy - n x̄ȳ) / sqrt((Σx² - n
/// x̄²)(Σy² - n ȳ²))`, with both denominator factors floored at `1e-10`,
/// used by Pairwise's NBC features. FDC uses its own unfloored formula
/// (see `flm::fdc`), which is a deliberate, source-matching divergence.
pub fn pearson_floored(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut product_sum = 0.0;
    let mut x_sqr_sum = 0.0;
    let mut y_sqr_sum = 0.0;
    for i in 0..x.len() {
        product_sum += x[i] * y[i];
        x_sqr_sum += x[i] * x[i];
        y_sqr_sum += y[i] * y[i];
    }

    let mut x_denom = x_sqr_sum - n * mean_x * mean_x;
    if x_denom <= 0.0 {
        x_denom = 1e-10;
    }
    let mut y_denom = y_sqr_sum - n * mean_y * mean_y;
    if y_denom <= 0.0 {
        y_denom = 1e-10;
    }

    (product_sum - n * mean_x * mean_y) / (x_denom.sqrt() * y_denom.sqrt())
}
