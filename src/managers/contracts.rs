use alloy_sol_types::sol;

// Concentrated-liquidity periphery contracts (SwapRouter / Quoter)
sol! {
    /// Router: state-mutating swap entry point
    #[derive(Debug, PartialEq, Eq)]
    interface ISwapRouter {
        struct ExactInputSingleParams {
            address tokenIn;
            address tokenOut;
            uint24 fee;
            address recipient;
            uint256 deadline;
            uint256 amountIn;
            uint256 amountOutMinimum;
            uint160 sqrtPriceLimitX96;
        }

        function exactInputSingle(ExactInputSingleParams calldata params) external payable returns (uint256 amountOut);
    }

    /// Quoter: read-only simulation entry point
    #[derive(Debug, PartialEq, Eq)]
    interface IQuoter {
        function quoteExactInputSingle(address tokenIn, address tokenOut, uint24 fee, uint256 amountIn, uint160 sqrtPriceLimitX96) external returns (uint256 amountOut);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_sol_types::SolCall;

    #[test]
    fn test_selectors() {
        assert_eq!(ISwapRouter::exactInputSingleCall::SELECTOR, [0x41, 0x4b, 0xf3, 0x89]);
        assert_eq!(IQuoter::quoteExactInputSingleCall::SELECTOR, [0xf7, 0x72, 0x9d, 0x43]);
    }
}
