use alloy_primitives::utils::format_units;
use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Token metadata as provided by the token registry. Immutable once built.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Token {
    address: Address,
    decimals: u8,
    name: Option<String>,
    symbol: Option<String>,
}

pub type TokenWrapper = Arc<Token>;

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.get_address()
    }
}

impl Eq for Token {}

impl Token {
    pub fn new_with_data(address: Address, symbol: Option<String>, name: Option<String>, decimals: Option<u8>) -> Token {
        Token { address, symbol, name, decimals: decimals.unwrap_or(18) }
    }

    // For testing purposes
    pub fn repeat_byte(byte: u8, decimals: u8) -> Token {
        Token { address: Address::repeat_byte(byte), decimals, ..Token::default() }
    }

    pub fn get_symbol(&self) -> String {
        self.symbol.clone().unwrap_or(self.address.to_string())
    }

    pub fn get_decimals(&self) -> u8 {
        self.decimals
    }

    pub fn get_address(&self) -> Address {
        self.address
    }

    /// Renders a smallest-unit amount as a decimal string, e.g. `1500000` -> `"1.500000"` for 6 decimals.
    pub fn format_amount(&self, value: U256) -> String {
        format_units(value, self.decimals).unwrap_or_else(|_| value.to_string())
    }
}
