use crate::error::{Result, XcorError};

/// Mean and sample variance of a count sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub mean: f64,
    pub variance: f64,
}

/// Compute the mean and Bessel-corrected sample variance of `input`.
///
/// The sum of deviations is kept alongside the sum of squared deviations
/// and subtracted back out, compensating for the rounding of the mean.
/// A single-element input yields a NaN variance.
pub fn statistics(input: &[u64]) -> Result<Statistics> {
    if input.is_empty() {
        return Err(XcorError::EmptyInput {
            what: "calculate statistics",
        });
    }
    let n_vals = input.len() as f64;

    let sum = input.iter().sum::<u64>() as f64;
    let mean = sum / n_vals;

    let mut diff_sum = 0.0;
    let mut diff_2_sum = 0.0;
    for &val in input {
        let diff = val as f64 - mean;
        diff_sum += diff;
        diff_2_sum += diff * diff;
    }

    let variance = (diff_2_sum - diff_sum * diff_sum / n_vals) / (n_vals - 1.0);

    Ok(Statistics { mean, variance })
}
