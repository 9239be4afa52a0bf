use super::amounts::to_smallest_unit;
use super::fee::FeeTier;
use crate::errors::SwapError;
use crate::utils::constants::BPS_DENOMINATOR;
use crate::utils::TokenWrapper;
use alloy_primitives::aliases::U160;
use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Estimated relative price movement caused by a swap.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum PriceImpact {
    /// The backend does not estimate price impact.
    #[default]
    NotComputed,
    /// Fractional estimate, `0.01` = 1%.
    Estimated(f64),
}

impl PriceImpact {
    pub fn is_computed(&self) -> bool {
        matches!(self, PriceImpact::Estimated(_))
    }

    pub fn value_or_zero(&self) -> f64 {
        match self {
            PriceImpact::NotComputed => 0.0,
            PriceImpact::Estimated(value) => *value,
        }
    }
}

/// Result of a simulated swap. Produced fresh for every request and never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapQuote {
    /// Input amount in the smallest unit of the input token
    pub amount_in: U256,
    /// Simulated output amount in the smallest unit of the output token
    pub amount_out: U256,
    /// Token addresses from input to output
    pub path: Vec<Address>,
    /// Pool fee tier the simulation routed through
    pub fee_tier: FeeTier,
    pub price_impact: PriceImpact,
}

impl SwapQuote {
    pub fn new(amount_in: U256, amount_out: U256, path: Vec<Address>, fee_tier: FeeTier) -> Self {
        Self { amount_in, amount_out, path, fee_tier, price_impact: PriceImpact::NotComputed }
    }

    /// The zero-valued quote handed out when no quote could be produced.
    pub fn empty() -> Self {
        Self::new(U256::ZERO, U256::ZERO, Vec::new(), FeeTier::default())
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty() || self.amount_out.is_zero()
    }

    pub fn token_in(&self) -> Option<Address> {
        self.path.first().copied()
    }

    pub fn token_out(&self) -> Option<Address> {
        self.path.last().copied()
    }

    /// Output floor that tolerates `slippage_bps` of adverse movement. Never exceeds `amount_out`.
    pub fn minimum_amount_out(&self, slippage_bps: u32) -> U256 {
        let kept_bps = BPS_DENOMINATOR.saturating_sub(slippage_bps);
        crate::logic::fee::calculate_fee(self.amount_out, kept_bps)
    }
}

/// Outcome of a quote request. Quoting failures are absorbed into `Unavailable` instead of
/// being surfaced as errors.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteResult {
    Quoted(SwapQuote),
    Unavailable,
}

impl QuoteResult {
    pub fn is_available(&self) -> bool {
        matches!(self, QuoteResult::Quoted(_))
    }

    pub fn quote(&self) -> Option<&SwapQuote> {
        match self {
            QuoteResult::Quoted(quote) => Some(quote),
            QuoteResult::Unavailable => None,
        }
    }

    /// Collapses the outcome into a quote, using [`SwapQuote::empty`] when unavailable.
    pub fn into_quote_or_empty(self) -> SwapQuote {
        match self {
            QuoteResult::Quoted(quote) => quote,
            QuoteResult::Unavailable => SwapQuote::empty(),
        }
    }
}

impl From<QuoteResult> for Option<SwapQuote> {
    fn from(result: QuoteResult) -> Self {
        match result {
            QuoteResult::Quoted(quote) => Some(quote),
            QuoteResult::Unavailable => None,
        }
    }
}

/// Caller-facing description of an exact-input swap.
///
/// Amounts are human-readable decimals in each token's own units ("1.5" USDC); a blank amount
/// means zero.
#[derive(Debug, Clone)]
pub struct SwapRequest {
    pub token_in: TokenWrapper,
    pub token_out: TokenWrapper,
    pub amount_in: String,
    pub amount_out_min: String,
    pub recipient: Address,
    /// Unix timestamp (seconds) after which the router rejects the swap
    pub deadline: u64,
    /// Falls back to the manager's default tier when `None`
    pub fee_tier: Option<FeeTier>,
}

impl SwapRequest {
    pub fn new(
        token_in: TokenWrapper,
        token_out: TokenWrapper,
        amount_in: impl Into<String>,
        amount_out_min: impl Into<String>,
        recipient: Address,
        deadline: u64,
    ) -> Self {
        Self {
            token_in,
            token_out,
            amount_in: amount_in.into(),
            amount_out_min: amount_out_min.into(),
            recipient,
            deadline,
            fee_tier: None,
        }
    }

    pub fn with_fee_tier(mut self, fee_tier: FeeTier) -> Self {
        self.fee_tier = Some(fee_tier);
        self
    }

    /// Scales the request amounts and resolves the fee tier.
    pub fn to_parameters(&self, default_fee_tier: FeeTier) -> Result<SwapParameters, SwapError> {
        Ok(SwapParameters {
            token_in: self.token_in.get_address(),
            token_out: self.token_out.get_address(),
            fee_tier: self.fee_tier.unwrap_or(default_fee_tier),
            recipient: self.recipient,
            deadline: self.deadline,
            amount_in: to_smallest_unit(&self.amount_in, &self.token_in)?,
            amount_out_minimum: to_smallest_unit(&self.amount_out_min, &self.token_out)?,
            sqrt_price_limit_x96: U160::ZERO,
        })
    }
}

/// Fully scaled single-hop swap parameters, ready for the transaction builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapParameters {
    pub token_in: Address,
    pub token_out: Address,
    pub fee_tier: FeeTier,
    pub recipient: Address,
    pub deadline: u64,
    pub amount_in: U256,
    pub amount_out_minimum: U256,
    /// Zero leaves the pool price unconstrained
    pub sqrt_price_limit_x96: U160,
}

impl SwapParameters {
    /// Checks the parameters against the wall clock.
    pub fn validate(&self) -> Result<(), SwapError> {
        self.validate_at(unix_now())
    }

    pub fn validate_at(&self, now: u64) -> Result<(), SwapError> {
        if self.amount_in.is_zero() {
            return Err(SwapError::InvalidParameters("amount in must be greater than zero".to_string()));
        }
        if self.token_in == self.token_out {
            return Err(SwapError::InvalidParameters(format!("token in and token out are both {}", self.token_in)));
        }
        if self.deadline <= now {
            return Err(SwapError::InvalidParameters(format!("deadline {} is not after {}", self.deadline, now)));
        }
        Ok(())
    }
}

pub fn unix_now() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs()
}

/// Arguments of a liquidity deposit.
#[derive(Debug, Clone)]
pub struct AddLiquidityRequest {
    pub token_a: TokenWrapper,
    pub token_b: TokenWrapper,
    pub amount_a: String,
    pub amount_b: String,
    pub min_amount_a: String,
    pub min_amount_b: String,
    pub recipient: Address,
    pub deadline: u64,
}

/// Arguments of a liquidity withdrawal.
#[derive(Debug, Clone)]
pub struct RemoveLiquidityRequest {
    pub token_a: TokenWrapper,
    pub token_b: TokenWrapper,
    pub liquidity: String,
    pub min_amount_a: String,
    pub min_amount_b: String,
    pub recipient: Address,
    pub deadline: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Token;
    use std::sync::Arc;

    fn request(amount_in: &str) -> SwapRequest {
        SwapRequest::new(
            Arc::new(Token::repeat_byte(0x0a, 6)),
            Arc::new(Token::repeat_byte(0x0b, 18)),
            amount_in,
            "",
            Address::repeat_byte(0x0c),
            unix_now() + 600,
        )
    }

    #[test]
    fn test_empty_quote() {
        let quote = SwapQuote::empty();
        assert_eq!(quote.amount_in, U256::ZERO);
        assert_eq!(quote.amount_out, U256::ZERO);
        assert!(quote.path.is_empty());
        assert_eq!(quote.price_impact.value_or_zero(), 0.0);
        assert!(!quote.price_impact.is_computed());
        assert!(quote.is_empty());
    }

    #[test]
    fn test_quote_result_accessors() {
        let quote = SwapQuote::new(
            U256::from(1u64),
            U256::from(2u64),
            vec![Address::repeat_byte(1), Address::repeat_byte(2)],
            FeeTier::Low,
        );
        let result = QuoteResult::Quoted(quote.clone());
        assert!(result.is_available());
        assert_eq!(result.quote(), Some(&quote));
        assert_eq!(quote.token_in(), Some(Address::repeat_byte(1)));
        assert_eq!(quote.token_out(), Some(Address::repeat_byte(2)));

        assert_eq!(QuoteResult::Unavailable.into_quote_or_empty(), SwapQuote::empty());
        assert_eq!(Option::<SwapQuote>::from(QuoteResult::Unavailable), None);
    }

    #[test]
    fn test_minimum_amount_out() {
        let quote = SwapQuote::new(U256::from(1u64), U256::from(1_000_000u64), vec![], FeeTier::Medium);
        assert_eq!(quote.minimum_amount_out(50), U256::from(995_000u64));
        assert_eq!(quote.minimum_amount_out(0), quote.amount_out);
        assert_eq!(quote.minimum_amount_out(20_000), U256::ZERO);
    }

    #[test]
    fn test_to_parameters() {
        let params = request("1.5").with_fee_tier(FeeTier::High).to_parameters(FeeTier::Medium).unwrap();
        assert_eq!(params.amount_in, U256::from(1_500_000u64));
        assert_eq!(params.amount_out_minimum, U256::ZERO);
        assert_eq!(params.fee_tier, FeeTier::High);
        assert_eq!(params.sqrt_price_limit_x96, U160::ZERO);
        assert!(params.validate().is_ok());

        let params = request("1").to_parameters(FeeTier::Low).unwrap();
        assert_eq!(params.fee_tier, FeeTier::Low);
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        let params = request("").to_parameters(FeeTier::Medium).unwrap();
        assert!(matches!(params.validate(), Err(SwapError::InvalidParameters(_))));

        let mut params = request("1").to_parameters(FeeTier::Medium).unwrap();
        assert!(params.validate_at(params.deadline).is_err());

        params.token_out = params.token_in;
        assert!(params.validate_at(0).is_err());
    }
}
