use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the trace analysis pipeline.
#[derive(Debug, Error)]
pub enum XcorError {
    /// A token that is not the canonical decimal form of a non-negative integer.
    #[error("invalid int: {text:?}")]
    Parse { text: String },

    #[error("can't open {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read input stream")]
    Io(#[from] std::io::Error),

    #[error("can't {what} of an empty sequence")]
    EmptyInput { what: &'static str },

    #[error("can't allocate {n_bins} bins")]
    TooManyBins { n_bins: u128 },

    /// A timestamp landed past the last bin, so the trace is not sorted ascending.
    #[error("bin index {index} is out of range for {len} bins (is the trace sorted?)")]
    IndexOutOfRange { index: u64, len: usize },
}

pub type Result<T> = std::result::Result<T, XcorError>;
