use crate::errors::SwapError;
use crate::logic::{AddLiquidityRequest, FeeTier, QuoteResult, RemoveLiquidityRequest, SwapRequest, calculate_fee};
use crate::utils::Token;
use alloy_primitives::{Address, TxHash, U256};
use alloy_rpc_types_eth::TransactionRequest;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SwapProtocol {
    UniswapV3,
}

/// Capability set every AMM backend exposes, so callers can hold an `Arc<dyn SwapManager>`
/// and switch protocols without touching call sites.
///
/// Amounts in requests are human-readable decimals; backends scale them with each token's
/// decimals before building transactions.
#[async_trait]
pub trait SwapManager: Send + Sync {
    fn protocol(&self) -> SwapProtocol;

    /// Entry-point contract that executes swaps.
    fn router_address(&self) -> Address;

    fn default_fee_tier(&self) -> FeeTier {
        FeeTier::default()
    }

    fn supported_fee_tiers(&self) -> Vec<FeeTier>;

    /// Quotes with the default fee tier. Failures come back as [`QuoteResult::Unavailable`].
    async fn get_quote(&self, token_in: &Token, token_out: &Token, amount_in: &str) -> QuoteResult {
        self.get_quote_with_fee_tier(token_in, token_out, amount_in, self.default_fee_tier()).await
    }

    async fn get_quote_with_fee_tier(&self, token_in: &Token, token_out: &Token, amount_in: &str, fee_tier: FeeTier) -> QuoteResult;

    /// Quotes every supported fee tier and returns the largest output.
    async fn get_best_quote(&self, token_in: &Token, token_out: &Token, amount_in: &str) -> QuoteResult;

    /// Builds the unsigned swap transaction without broadcasting it.
    async fn populate_swap_transaction(&self, request: &SwapRequest) -> Result<TransactionRequest, SwapError>;

    /// Builds and broadcasts the swap. Every failure is returned as [`SwapError::ExecutionFailed`].
    async fn execute_swap(&self, request: &SwapRequest) -> Result<TxHash, SwapError>;

    /// `swap_amount * fee_tier_bps / 10000`, rounded down.
    fn calculate_fee(&self, swap_amount: U256, fee_tier_bps: u32) -> U256 {
        calculate_fee(swap_amount, fee_tier_bps)
    }

    /// Whether [`SwapManager::add_liquidity`] and [`SwapManager::remove_liquidity`] are available.
    fn supports_liquidity(&self) -> bool {
        false
    }

    async fn add_liquidity(&self, _request: &AddLiquidityRequest) -> Result<TxHash, SwapError> {
        Err(SwapError::NotImplemented("addLiquidity"))
    }

    async fn remove_liquidity(&self, _request: &RemoveLiquidityRequest) -> Result<TxHash, SwapError> {
        Err(SwapError::NotImplemented("removeLiquidity"))
    }
}
