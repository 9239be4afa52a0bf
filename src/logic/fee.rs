use crate::utils::constants::BPS_DENOMINATOR;
use alloy_primitives::U256;
use alloy_primitives::aliases::U24;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, VariantNames};

/// Pool fee brackets of a concentrated-liquidity AMM.
///
/// Each variant maps 1:1 to the integer the protocol contracts expect in their `fee` argument.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, Default, EnumString, VariantNames, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeTier {
    Lowest,
    Low,
    #[default]
    Medium,
    High,
}

impl FeeTier {
    pub const fn fee(&self) -> u32 {
        match self {
            FeeTier::Lowest => 100,
            FeeTier::Low => 500,
            FeeTier::Medium => 3000,
            FeeTier::High => 10000,
        }
    }

    pub fn as_u24(&self) -> U24 {
        U24::from(self.fee())
    }

    /// Fee as a fraction of the input amount, e.g. `0.003` for `Medium`.
    pub fn as_fraction(&self) -> f64 {
        self.fee() as f64 / 1_000_000f64
    }
}

impl TryFrom<u32> for FeeTier {
    type Error = String;

    fn try_from(fee: u32) -> Result<Self, Self::Error> {
        match fee {
            100 => Ok(FeeTier::Lowest),
            500 => Ok(FeeTier::Low),
            3000 => Ok(FeeTier::Medium),
            10000 => Ok(FeeTier::High),
            other => Err(format!("unsupported fee tier {other}")),
        }
    }
}

/// `swap_amount * fee_bps / 10000`, rounded down.
///
/// The amount is split into quotient and remainder over the denominator so the intermediate
/// product never exceeds 256 bits; only a result above `U256::MAX` (fee_bps > 10000) saturates.
pub fn calculate_fee(swap_amount: U256, fee_bps: u32) -> U256 {
    let denominator = U256::from(BPS_DENOMINATOR);
    let bps = U256::from(fee_bps);
    let (quotient, remainder) = swap_amount.div_rem(denominator);

    quotient.saturating_mul(bps).saturating_add(remainder * bps / denominator)
}
