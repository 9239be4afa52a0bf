use crate::errors::SwapError;
use crate::utils::Token;
use alloy_primitives::U256;
use alloy_primitives::utils::parse_units;

/// Scales a human-readable decimal amount into the token's smallest unit (`value * 10^decimals`).
///
/// A blank amount is treated as zero. Amounts finer than the token's precision are rejected
/// rather than truncated; trailing zeros in the fraction don't count.
pub fn to_smallest_unit(value: &str, token: &Token) -> Result<U256, SwapError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(U256::ZERO);
    }
    if trimmed.starts_with('-') {
        return Err(SwapError::InvalidParameters(format!("negative amount {trimmed}")));
    }
    if let Some((_, fraction)) = trimmed.split_once('.') {
        let decimals = token.get_decimals();
        if fraction.trim_end_matches('0').len() > usize::from(decimals) {
            return Err(SwapError::InvalidParameters(format!(
                "amount {trimmed} has more than {decimals} decimal places for {}",
                token.get_symbol()
            )));
        }
    }

    parse_units(trimmed, token.get_decimals())
        .map(|parsed| parsed.get_absolute())
        .map_err(|source| SwapError::InvalidAmount { value: value.to_string(), source })
}
