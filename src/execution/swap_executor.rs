use crate::chain::ChainAdapter;
use crate::errors::SwapError;
use crate::logic::{SwapParameters, TransactionBuilder};
use alloy_primitives::TxHash;
use std::sync::Arc;
use tracing::{error, info};

pub const EXECUTE_SWAP: &str = "executeSwap";

/// Builds a swap transaction and hands it to the chain adapter for signing and broadcast.
///
/// Failures are never absorbed: every error is tagged with the operation name and returned.
#[derive(Clone)]
pub struct SwapExecutor {
    builder: TransactionBuilder,
    adapter: Arc<dyn ChainAdapter>,
}

impl SwapExecutor {
    pub fn new(builder: TransactionBuilder, adapter: Arc<dyn ChainAdapter>) -> Self {
        Self { builder, adapter }
    }

    pub async fn execute(&self, params: &SwapParameters) -> Result<TxHash, SwapError> {
        match self.build_and_send(params).await {
            Ok(tx_hash) => {
                info!(%tx_hash, token_in = %params.token_in, token_out = %params.token_out, amount_in = %params.amount_in, "Swap submitted");
                Ok(tx_hash)
            }
            Err(e) => {
                error!(token_in = %params.token_in, token_out = %params.token_out, "Error executing swap: {}", e);
                Err(SwapError::execution_failed(EXECUTE_SWAP, e))
            }
        }
    }

    async fn build_and_send(&self, params: &SwapParameters) -> Result<TxHash, SwapError> {
        let tx = self.builder.build_exact_input_single(params).await?;
        Ok(self.adapter.send_transaction(tx).await?)
    }
}
