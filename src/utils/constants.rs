use alloy_primitives::{Address, address};

pub const WETH: Address = address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");

/// Denominator for basis-point arithmetic (10000 = 100%).
pub const BPS_DENOMINATOR: u32 = 10_000;

#[non_exhaustive]
pub struct UniswapV3Address;

impl UniswapV3Address {
    // Ethereum mainnet
    pub const MAINNET_ROUTER: Address = address!("E592427A0AEce92De3Edee1F18E0157C05861564");
    pub const MAINNET_QUOTER: Address = address!("b27308f9F90D607463bb33eA1BeBb41C27CE5AB6");
}
