/// Swap Managers
///
/// [`SwapManager`] is the backend-agnostic capability set; each AMM protocol provides one
/// implementation built from an injected deployment config.

pub mod config;
pub mod contracts;
pub mod swap_manager;
pub mod uniswap_v3;

pub use config::UniswapV3Deployment;
pub use swap_manager::{SwapManager, SwapProtocol};
pub use uniswap_v3::UniswapV3SwapManager;
