use super::config::UniswapV3Deployment;
use super::swap_manager::{SwapManager, SwapProtocol};
use crate::chain::{ChainAdapter, ContractHandle};
use crate::errors::SwapError;
use crate::execution::{EXECUTE_SWAP, SwapExecutor};
use crate::logic::{FeeTier, QuoteEngine, QuoteResult, SwapRequest, TransactionBuilder, to_smallest_unit};
use crate::utils::Token;
use alloy_primitives::{Address, TxHash, U256};
use alloy_rpc_types_eth::TransactionRequest;
use async_trait::async_trait;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::{info, warn};

/// Swap manager for a concentrated-liquidity deployment (SwapRouter + Quoter).
///
/// Router and quoter handles are resolved once in [`UniswapV3SwapManager::new`] and shared by
/// every call; the manager itself holds no mutable state.
#[derive(Clone)]
pub struct UniswapV3SwapManager {
    deployment: UniswapV3Deployment,
    quote_engine: QuoteEngine,
    builder: TransactionBuilder,
    executor: SwapExecutor,
}

impl UniswapV3SwapManager {
    pub async fn new(adapter: Arc<dyn ChainAdapter>, deployment: UniswapV3Deployment) -> Result<Self, SwapError> {
        let router = ContractHandle::resolve(adapter.clone(), "router", deployment.router_address)
            .await
            .map_err(|source| SwapError::Construction { contract: "router", address: deployment.router_address, source })?;
        let quoter = ContractHandle::resolve(adapter.clone(), "quoter", deployment.quoter_address)
            .await
            .map_err(|source| SwapError::Construction { contract: "quoter", address: deployment.quoter_address, source })?;

        info!(
            network = %deployment.network,
            router = %deployment.router_address,
            quoter = %deployment.quoter_address,
            default_fee_tier = %deployment.default_fee_tier,
            "Initialized UniswapV3SwapManager"
        );

        let builder = TransactionBuilder::new(router);
        let executor = SwapExecutor::new(builder.clone(), adapter);

        Ok(Self { deployment, quote_engine: QuoteEngine::new(quoter), builder, executor })
    }

    pub fn get_deployment(&self) -> &UniswapV3Deployment {
        &self.deployment
    }

    pub fn quoter_address(&self) -> Address {
        self.quote_engine.get_quoter().get_address()
    }

    fn scale_quote_amount(token_in: &Token, amount_in: &str) -> Option<U256> {
        match to_smallest_unit(amount_in, token_in) {
            Ok(amount) => Some(amount),
            Err(e) => {
                warn!(token_in = %token_in.get_address(), "Quote unavailable: {}", e);
                None
            }
        }
    }
}

#[async_trait]
impl SwapManager for UniswapV3SwapManager {
    fn protocol(&self) -> SwapProtocol {
        SwapProtocol::UniswapV3
    }

    fn router_address(&self) -> Address {
        self.deployment.router_address
    }

    fn default_fee_tier(&self) -> FeeTier {
        self.deployment.default_fee_tier
    }

    fn supported_fee_tiers(&self) -> Vec<FeeTier> {
        FeeTier::iter().collect()
    }

    async fn get_quote_with_fee_tier(&self, token_in: &Token, token_out: &Token, amount_in: &str, fee_tier: FeeTier) -> QuoteResult {
        let Some(amount_in) = Self::scale_quote_amount(token_in, amount_in) else {
            return QuoteResult::Unavailable;
        };
        self.quote_engine.quote(token_in, token_out, amount_in, fee_tier).await
    }

    async fn get_best_quote(&self, token_in: &Token, token_out: &Token, amount_in: &str) -> QuoteResult {
        let Some(amount_in) = Self::scale_quote_amount(token_in, amount_in) else {
            return QuoteResult::Unavailable;
        };
        self.quote_engine.quote_best(token_in, token_out, amount_in, &self.supported_fee_tiers()).await
    }

    async fn populate_swap_transaction(&self, request: &SwapRequest) -> Result<TransactionRequest, SwapError> {
        let params = request.to_parameters(self.default_fee_tier())?;
        self.builder.build_exact_input_single(&params).await
    }

    async fn execute_swap(&self, request: &SwapRequest) -> Result<TxHash, SwapError> {
        let params = request
            .to_parameters(self.default_fee_tier())
            .map_err(|e| SwapError::execution_failed(EXECUTE_SWAP, e))?;
        self.executor.execute(&params).await
    }
}
