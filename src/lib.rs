// Layered architecture
pub mod chain;      // Chain Adapter Layer: contract handles, simulation, broadcast
pub mod logic;      // Logic Layer: fee tiers, amounts, quoting, transaction building
pub mod execution;  // Execution Layer: build + submit
pub mod managers;   // Swap Managers: backend-agnostic trait and protocol backends

// Common utilities and types
pub mod errors;
pub mod utils;

pub use chain::{AlloyChainAdapter, ChainAdapter, ContractHandle, MockChainAdapter};
pub use errors::{ChainError, SwapError};
pub use execution::SwapExecutor;
pub use logic::{
    AddLiquidityRequest, FeeTier, PriceImpact, QuoteEngine, QuoteResult, RemoveLiquidityRequest, SwapParameters,
    SwapQuote, SwapRequest, TransactionBuilder, calculate_fee,
};
pub use managers::{SwapManager, SwapProtocol, UniswapV3Deployment, UniswapV3SwapManager};
pub use utils::{Token, TokenWrapper};
