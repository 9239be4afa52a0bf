use super::types::SwapParameters;
use crate::chain::ContractHandle;
use crate::errors::SwapError;
use crate::managers::contracts::ISwapRouter;
use alloy_primitives::U256;
use alloy_rpc_types_eth::TransactionRequest;
use tracing::debug;

/// Turns validated [`SwapParameters`] into unsigned router transactions.
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    router: ContractHandle,
}

impl TransactionBuilder {
    pub fn new(router: ContractHandle) -> Self {
        Self { router }
    }

    pub fn get_router(&self) -> &ContractHandle {
        &self.router
    }

    pub fn exact_input_single_call(params: &SwapParameters) -> ISwapRouter::exactInputSingleCall {
        ISwapRouter::exactInputSingleCall {
            params: ISwapRouter::ExactInputSingleParams {
                tokenIn: params.token_in,
                tokenOut: params.token_out,
                fee: params.fee_tier.as_u24(),
                recipient: params.recipient,
                deadline: U256::from(params.deadline),
                amountIn: params.amount_in,
                amountOutMinimum: params.amount_out_minimum,
                sqrtPriceLimitX96: params.sqrt_price_limit_x96,
            },
        }
    }

    /// Unsigned request for the router's exact-input single-hop swap. Nothing is broadcast.
    pub async fn build_exact_input_single(&self, params: &SwapParameters) -> Result<TransactionRequest, SwapError> {
        params.validate()?;

        let call = Self::exact_input_single_call(params);
        let tx = self.router.populate_transaction(&call).await?;

        debug!(
            router = %self.router.get_address(),
            token_in = %params.token_in,
            token_out = %params.token_out,
            fee = params.fee_tier.fee(),
            amount_in = %params.amount_in,
            amount_out_minimum = %params.amount_out_minimum,
            deadline = params.deadline,
            "Built exactInputSingle transaction"
        );

        Ok(tx)
    }
}
