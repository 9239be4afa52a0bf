use super::adapter::ChainAdapter;
use crate::errors::ChainError;
use alloy_primitives::{Address, Bytes, TxHash};
use alloy_provider::Provider;
use alloy_rpc_types_eth::TransactionRequest;
use async_trait::async_trait;
use tracing::info;

/// [`ChainAdapter`] backed by an alloy [`Provider`].
///
/// Signing is delegated to the provider, so broadcasting requires a provider built with a
/// wallet filler. `sender` is stamped on prepared requests that do not name one.
#[derive(Debug, Clone)]
pub struct AlloyChainAdapter<P> {
    provider: P,
    sender: Option<Address>,
}

impl<P: Provider> AlloyChainAdapter<P> {
    pub fn new(provider: P) -> Self {
        Self { provider, sender: None }
    }

    pub fn with_sender(mut self, sender: Address) -> Self {
        self.sender = Some(sender);
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[async_trait]
impl<P: Provider + 'static> ChainAdapter for AlloyChainAdapter<P> {
    async fn get_code(&self, address: Address) -> Result<Bytes, ChainError> {
        Ok(self.provider.get_code_at(address).await?)
    }

    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, ChainError> {
        Ok(self.provider.call(tx).await?)
    }

    async fn prepare_transaction(&self, mut tx: TransactionRequest) -> Result<TransactionRequest, ChainError> {
        if tx.from.is_none() {
            tx.from = self.sender;
        }
        Ok(tx)
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, ChainError> {
        let pending = self.provider.send_transaction(tx).await?;
        let tx_hash = *pending.tx_hash();
        info!(%tx_hash, "Broadcast transaction");
        Ok(tx_hash)
    }
}
