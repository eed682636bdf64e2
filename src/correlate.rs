use crate::error::Result;
use crate::stats::statistics;

/// Cross-correlation coefficient at a single lag (in bins).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LagCorrelation {
    pub lag: i64,
    pub coefficient: f64,
}

/// Cross-correlate two count sequences at every lag in `-max_lag..=max_lag`.
///
/// At lag `l`, element `i` of `input1` is paired with element `i + l` of
/// `input2`. The coefficient is the mean product of deviations over the
/// overlapping pairs, normalized by both standard deviations. Lags without
/// any overlap, or inputs with zero variance, produce NaN or infinite
/// coefficients rather than errors.
pub fn crosscorrelate(
    input1: &[u64],
    input2: &[u64],
    max_lag: usize,
) -> Result<Vec<LagCorrelation>> {
    let stats1 = statistics(input1)?;
    let stats2 = statistics(input2)?;
    log::debug!("statistics: {stats1:?} {stats2:?}");

    let norm = stats1.variance.sqrt() * stats2.variance.sqrt();
    let max_lag = max_lag as i64;

    let corr = (-max_lag..=max_lag)
        .map(|lag| {
            let (seg1, seg2) = overlap(input1, input2, lag);

            let mut sum = 0.0;
            let mut count = 0usize;
            for (&val1, &val2) in seg1.iter().zip(seg2) {
                sum += (val1 as f64 - stats1.mean) * (val2 as f64 - stats2.mean);
                count += 1;
            }

            LagCorrelation {
                lag,
                coefficient: (sum / count as f64) / norm,
            }
        })
        .collect();

    Ok(corr)
}

/// Align the two inputs so that equal positions are `lag` apart.
fn overlap<'a>(input1: &'a [u64], input2: &'a [u64], lag: i64) -> (&'a [u64], &'a [u64]) {
    let shift = lag.unsigned_abs() as usize;
    if lag >= 0 {
        (input1, input2.get(shift..).unwrap_or(&[]))
    } else {
        (input1.get(shift..).unwrap_or(&[]), input2)
    }
}
