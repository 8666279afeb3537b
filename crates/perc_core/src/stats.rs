//! Descriptive statistics over recorded observations.
//!
//! The estimator records one threshold fraction per trial and derives its
//! summary statistics on demand from that sequence. The functions here are
//! numerically stable so that derived values do not drift with trial count.
//!
//! # Algorithms
//!
//! - **Mean**: Kahan compensated summation, O(ε) error independent of n.
//! - **Variance / standard deviation**: Welford's online algorithm with
//!   Bessel's correction (divisor n − 1).
//!   Reference: Welford (1962), "Note on a Method for Calculating Corrected
//!   Sums of Squares and Products", *Technometrics* 4(3).
//! - **Confidence interval**: Gaussian 95% interval `mean ∓ 1.96·s/√n`.

/// Critical value of the standard normal for a two-sided 95% interval.
pub const CONFIDENCE_95: f64 = 1.96;

/// Sums `data` with Kahan compensation.
///
/// Accumulates a correction term recovering low-order bits lost to rounding,
/// so the total error stays O(ε) regardless of length.
///
/// # Examples
/// ```
/// use perc_core::stats::kahan_sum;
/// assert_eq!(kahan_sum(&[1.0, 2.0, 3.0]), 6.0);
/// ```
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut compensation = 0.0;
    for &x in data {
        let y = x - compensation;
        let t = sum + y;
        compensation = (t - sum) - y;
        sum = t;
    }
    sum
}

/// Computes the arithmetic mean.
///
/// # Returns
/// `None` if `data` is empty or contains a non-finite value.
///
/// # Examples
/// ```
/// use perc_core::stats::mean;
/// let v = [1.0, 2.0, 3.0, 4.0];
/// assert!((mean(&v).unwrap() - 2.5).abs() < 1e-15);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() || !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    Some(kahan_sum(data) / data.len() as f64)
}

/// Computes the sample (unbiased) variance with Welford's algorithm.
///
/// Uses Bessel's correction, divisor n − 1. The running formulation avoids
/// the catastrophic cancellation of `E[X²] − (E[X])²`.
///
/// # Returns
/// `None` if `data` has fewer than two observations or contains a non-finite
/// value. A single observation leaves the variance undefined; callers that
/// need a finite value must guard against that case.
///
/// # Examples
/// ```
/// use perc_core::stats::sample_variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((sample_variance(&v).unwrap() - 4.571428571428571).abs() < 1e-12);
/// ```
pub fn sample_variance(data: &[f64]) -> Option<f64> {
    if data.len() < 2 || !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    let mut count = 0_u64;
    let mut running_mean = 0.0;
    let mut m2 = 0.0;
    for &x in data {
        count += 1;
        let delta = x - running_mean;
        running_mean += delta / count as f64;
        m2 += delta * (x - running_mean);
    }
    Some(m2 / (count - 1) as f64)
}

/// Computes the sample standard deviation.
///
/// Equivalent to `sqrt(sample_variance(data))`.
///
/// # Returns
/// `None` if `data` has fewer than two observations or contains a non-finite
/// value.
pub fn sample_std_dev(data: &[f64]) -> Option<f64> {
    sample_variance(data).map(f64::sqrt)
}

/// Computes the two-sided 95% Gaussian confidence interval on the mean.
///
/// Returns `(lo, hi)` where `lo = mean − 1.96·s/√n` and
/// `hi = mean + 1.96·s/√n`. This is a Gaussian approximation, not a coverage
/// guarantee for small n.
///
/// # Returns
/// `None` when the standard deviation is undefined (fewer than two
/// observations) or the input contains a non-finite value.
///
/// # Examples
/// ```
/// use perc_core::stats::{confidence_interval_95, mean};
/// let v = [0.59, 0.61, 0.58, 0.60];
/// let (lo, hi) = confidence_interval_95(&v).unwrap();
/// let m = mean(&v).unwrap();
/// assert!(lo <= m && m <= hi);
/// ```
pub fn confidence_interval_95(data: &[f64]) -> Option<(f64, f64)> {
    let m = mean(data)?;
    let s = sample_std_dev(data)?;
    let half_width = CONFIDENCE_95 * s / (data.len() as f64).sqrt();
    Some((m - half_width, m + half_width))
}
