use crate::errors::ChainError;
use alloy_primitives::{Address, Bytes, TxHash, TxKind};
use alloy_rpc_types_eth::{TransactionInput, TransactionRequest};
use alloy_sol_types::SolCall;
use async_trait::async_trait;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use tracing::debug;

/// Chain client consumed by the swap managers.
///
/// Implementations own keys, nonces and transport. The swap core only builds requests and
/// reads back raw return data or transaction hashes.
#[async_trait]
pub trait ChainAdapter: Send + Sync {
    /// Deployed bytecode at `address`; empty when nothing is deployed.
    async fn get_code(&self, address: Address) -> Result<Bytes, ChainError>;

    /// Read-only simulation (`eth_call`) returning the raw ABI-encoded output.
    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, ChainError>;

    /// Hook to fill sender or chain specific fields on an unsigned request.
    async fn prepare_transaction(&self, tx: TransactionRequest) -> Result<TransactionRequest, ChainError> {
        Ok(tx)
    }

    /// Signs and broadcasts the request.
    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, ChainError>;
}

/// A contract address bound to the adapter that talks to it.
///
/// Handles are resolved once and cloned freely; they carry no mutable state.
#[derive(Clone)]
pub struct ContractHandle {
    label: &'static str,
    address: Address,
    adapter: Arc<dyn ChainAdapter>,
}

impl Debug for ContractHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.label, self.address)
    }
}

impl ContractHandle {
    /// Binds `address`, failing when no code is deployed there.
    pub async fn resolve(adapter: Arc<dyn ChainAdapter>, label: &'static str, address: Address) -> Result<Self, ChainError> {
        let code = adapter.get_code(address).await?;
        if code.is_empty() {
            return Err(ChainError::MissingContract(address));
        }
        debug!(contract = label, %address, code_len = code.len(), "Resolved contract");
        Ok(Self { label, address, adapter })
    }

    pub fn get_address(&self) -> Address {
        self.address
    }

    pub fn get_label(&self) -> &'static str {
        self.label
    }

    /// Unsigned request invoking `call` on this contract.
    pub fn encode<C: SolCall>(&self, call: &C) -> TransactionRequest {
        TransactionRequest {
            to: Some(TxKind::Call(self.address)),
            input: TransactionInput::new(call.abi_encode().into()),
            ..Default::default()
        }
    }

    /// Simulates `call` and decodes its return value.
    pub async fn call<C: SolCall + Sync>(&self, call: &C) -> Result<C::Return, ChainError> {
        let output = self.adapter.call(self.encode(call)).await?;
        Ok(C::abi_decode_returns(&output)?)
    }

    /// Builds the unsigned request for `call`, letting the adapter fill its own fields.
    pub async fn populate_transaction<C: SolCall + Sync>(&self, call: &C) -> Result<TransactionRequest, ChainError> {
        self.adapter.prepare_transaction(self.encode(call)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::MockChainAdapter;
    use crate::managers::contracts::IQuoter;
    use alloy_primitives::U256;
    use alloy_primitives::aliases::{U24, U160};
    use alloy_sol_types::SolValue;

    fn quote_call() -> IQuoter::quoteExactInputSingleCall {
        IQuoter::quoteExactInputSingleCall {
            tokenIn: Address::repeat_byte(0x01),
            tokenOut: Address::repeat_byte(0x02),
            fee: U24::from(3000u32),
            amountIn: U256::from(1_000u64),
            sqrtPriceLimitX96: U160::ZERO,
        }
    }

    #[tokio::test]
    async fn test_resolve_requires_code() {
        let quoter = Address::repeat_byte(0x42);
        let adapter: Arc<dyn ChainAdapter> = Arc::new(MockChainAdapter::new().with_contract(quoter));

        let handle = ContractHandle::resolve(adapter.clone(), "quoter", quoter).await.unwrap();
        assert_eq!(handle.get_address(), quoter);
        assert_eq!(handle.get_label(), "quoter");

        let missing = ContractHandle::resolve(adapter, "router", Address::repeat_byte(0x43)).await;
        assert!(matches!(missing, Err(ChainError::MissingContract(_))));
    }

    #[tokio::test]
    async fn test_call_decodes_return_value() {
        let quoter = Address::repeat_byte(0x42);
        let mock = Arc::new(MockChainAdapter::new().with_contract(quoter));
        mock.respond::<IQuoter::quoteExactInputSingleCall>(quoter, U256::from(777u64).abi_encode().into());

        let handle = ContractHandle::resolve(mock.clone(), "quoter", quoter).await.unwrap();
        let amount_out = handle.call(&quote_call()).await.unwrap();
        assert_eq!(amount_out, U256::from(777u64));

        let calls = mock.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].to, Some(TxKind::Call(quoter)));
    }

    #[tokio::test]
    async fn test_call_surfaces_revert() {
        let quoter = Address::repeat_byte(0x42);
        let mock = Arc::new(MockChainAdapter::new().with_contract(quoter));
        mock.revert::<IQuoter::quoteExactInputSingleCall>(quoter, "SPL");

        let handle = ContractHandle::resolve(mock, "quoter", quoter).await.unwrap();
        let err = handle.call(&quote_call()).await.unwrap_err();
        assert!(err.to_string().contains("SPL"));
    }

    #[tokio::test]
    async fn test_populate_transaction_targets_contract() {
        let quoter = Address::repeat_byte(0x42);
        let mock = Arc::new(MockChainAdapter::new().with_contract(quoter));
        let handle = ContractHandle::resolve(mock.clone(), "quoter", quoter).await.unwrap();

        let call = quote_call();
        let tx = handle.populate_transaction(&call).await.unwrap();
        assert_eq!(tx.to, Some(TxKind::Call(quoter)));
        assert_eq!(tx.input.input().unwrap().as_ref(), call.abi_encode().as_slice());
        assert!(mock.sent_transactions().is_empty());
    }
}
