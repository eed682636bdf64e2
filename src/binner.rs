use crate::error::{Result, XcorError};
use std::num::NonZeroU64;

/// Bin a sorted sequence of timestamps into per-bin event counts.
///
/// Bin `i` counts the events in `[i * bin_width, (i + 1) * bin_width)`.
/// The number of bins is sized from the last event, so an event larger
/// than the last one is rejected as out of range.
pub fn aggregate(events: &[u64], bin_width: NonZeroU64) -> Result<Vec<u64>> {
    let &last = events.last().ok_or(XcorError::EmptyInput {
        what: "bin events",
    })?;

    let n_bins = u128::from(last / bin_width) + 1;
    let too_many = || XcorError::TooManyBins { n_bins };
    let len = usize::try_from(n_bins).map_err(|_| too_many())?;

    let mut counts = Vec::new();
    counts.try_reserve_exact(len).map_err(|_| too_many())?;
    counts.resize(len, 0);
    for &event in events {
        let index = event / bin_width;
        let len = counts.len();
        let count = counts
            .get_mut(index as usize)
            .ok_or(XcorError::IndexOutOfRange { index, len })?;
        *count += 1;
    }

    Ok(counts)
}
