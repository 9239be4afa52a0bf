use super::fee::FeeTier;
use super::types::{QuoteResult, SwapQuote};
use crate::chain::ContractHandle;
use crate::errors::ChainError;
use crate::managers::contracts::IQuoter;
use crate::utils::Token;
use alloy_primitives::U256;
use alloy_primitives::aliases::U160;
use tracing::{debug, warn};

/// Simulates exact-input single-hop swaps against the quoter contract.
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    quoter: ContractHandle,
}

impl QuoteEngine {
    pub fn new(quoter: ContractHandle) -> Self {
        Self { quoter }
    }

    pub fn get_quoter(&self) -> &ContractHandle {
        &self.quoter
    }

    /// Runs the simulation and propagates any failure.
    pub async fn simulate(&self, token_in: &Token, token_out: &Token, amount_in: U256, fee_tier: FeeTier) -> Result<SwapQuote, ChainError> {
        let call = IQuoter::quoteExactInputSingleCall {
            tokenIn: token_in.get_address(),
            tokenOut: token_out.get_address(),
            fee: fee_tier.as_u24(),
            amountIn: amount_in,
            sqrtPriceLimitX96: U160::ZERO,
        };
        let amount_out = self.quoter.call(&call).await?;

        debug!(
            token_in = %token_in.get_symbol(),
            token_out = %token_out.get_symbol(),
            %fee_tier,
            amount_in = %token_in.format_amount(amount_in),
            amount_out = %token_out.format_amount(amount_out),
            "Simulated exact input single"
        );

        Ok(SwapQuote::new(amount_in, amount_out, vec![token_in.get_address(), token_out.get_address()], fee_tier))
    }

    /// Same as [`QuoteEngine::simulate`] but absorbs failures into [`QuoteResult::Unavailable`].
    pub async fn quote(&self, token_in: &Token, token_out: &Token, amount_in: U256, fee_tier: FeeTier) -> QuoteResult {
        match self.simulate(token_in, token_out, amount_in, fee_tier).await {
            Ok(quote) => QuoteResult::Quoted(quote),
            Err(e) => {
                warn!(
                    token_in = %token_in.get_address(),
                    token_out = %token_out.get_address(),
                    %fee_tier,
                    "Quote unavailable: {}",
                    e
                );
                QuoteResult::Unavailable
            }
        }
    }

    /// Quotes every tier in `fee_tiers` one after another and keeps the largest output.
    pub async fn quote_best(&self, token_in: &Token, token_out: &Token, amount_in: U256, fee_tiers: &[FeeTier]) -> QuoteResult {
        let mut best: Option<SwapQuote> = None;

        for fee_tier in fee_tiers {
            if let QuoteResult::Quoted(quote) = self.quote(token_in, token_out, amount_in, *fee_tier).await {
                if best.as_ref().is_none_or(|current| quote.amount_out > current.amount_out) {
                    best = Some(quote);
                }
            }
        }

        match best {
            Some(quote) => QuoteResult::Quoted(quote),
            None => QuoteResult::Unavailable,
        }
    }
}
