use alloy_primitives::Address;
use alloy_primitives::utils::UnitsError;
use alloy_transport::{RpcError, TransportErrorKind};
use eyre::Report;

/// Failures reported by a chain adapter.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error(transparent)]
    Transport(#[from] RpcError<TransportErrorKind>),
    #[error("no contract code at {0}")]
    MissingContract(Address),
    #[error("abi decode error: {0}")]
    Decode(#[from] alloy_sol_types::Error),
    #[error("rejected: {0}")]
    Rejected(String),
    #[error(transparent)]
    Internal(Report),
}

impl From<Report> for ChainError {
    fn from(error: Report) -> Self {
        Self::Internal(error)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SwapError {
    #[error("{operation} failed: {source}")]
    ExecutionFailed {
        operation: &'static str,
        #[source]
        source: Box<SwapError>,
    },
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
    #[error("failed to resolve {contract} contract at {address}: {source}")]
    Construction {
        contract: &'static str,
        address: Address,
        #[source]
        source: ChainError,
    },
    #[error("invalid amount {value:?}: {source}")]
    InvalidAmount {
        value: String,
        #[source]
        source: UnitsError,
    },
    #[error("invalid swap parameters: {0}")]
    InvalidParameters(String),
    #[error(transparent)]
    Chain(#[from] ChainError),
}

impl SwapError {
    /// Tags `source` with the name of the operation that failed.
    pub fn execution_failed(operation: &'static str, source: SwapError) -> Self {
        Self::ExecutionFailed { operation, source: Box::new(source) }
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented(_))
    }
}
