/// Logic Layer
///
/// This layer is responsible for:
/// - Fee tiers and fee arithmetic
/// - Scaling human-readable amounts into token units
/// - Quote simulation against the quoter
/// - Building unsigned router transactions

pub mod amounts;
pub mod fee;
pub mod quote_engine;
pub mod transaction_builder;
pub mod types;

pub use amounts::to_smallest_unit;
pub use fee::{FeeTier, calculate_fee};
pub use quote_engine::QuoteEngine;
pub use transaction_builder::TransactionBuilder;
pub use types::{
    AddLiquidityRequest, PriceImpact, QuoteResult, RemoveLiquidityRequest, SwapParameters, SwapQuote, SwapRequest,
};
