// Error type for the heatmap engine.
// Every variant states *what* was wrong with the request; nothing is retried.
use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Zero dimensions, zero radius, mismatched raw data, bad output slice...
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Backing storage for a heatmap or stamp could not be allocated.
    #[error("out of memory: could not allocate {bytes} bytes")]
    OutOfMemory { bytes: usize },
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Allocate a zero-filled `f32` buffer of `len` cells, surfacing allocation
/// failure instead of aborting the process.
pub(crate) fn try_zeroed(len: usize) -> Result<Vec<f32>> {
    let bytes = len.saturating_mul(std::mem::size_of::<f32>());
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_: TryReserveError| Error::OutOfMemory { bytes })?;
    buf.resize(len, 0.0);
    Ok(buf)
}
