use thiserror::Error;

use crate::mem_pool::PoolKind;

/// Everything the design pipeline and context setup can fail with.
/// The streaming path itself never fails.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// bad shape/parameter combination, mixed real/complex pairing,
    /// or a cell that is still outside the stability triangle
    #[error("configuration error: {0}")]
    Config(String),

    #[error("allocation failure: {requested} bytes from {pool:?}")]
    Allocation { requested: usize, pool: PoolKind },

    /// zero-order polynomial, nothing to solve for
    #[error("numeric degeneracy: {0}")]
    Degenerate(&'static str),
}

impl Error {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
