//! Response shapes of the Alchemy token API (`alchemy_getTokenBalances`,
//! `alchemy_getTokenMetadata`).

use alloy::primitives::{Address, U256};
use serde::Deserialize;

use super::types::{RawTokenBalance, TokenMetadata};

pub const GET_TOKEN_BALANCES: &str = "alchemy_getTokenBalances";
pub const GET_TOKEN_METADATA: &str = "alchemy_getTokenMetadata";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalancesResponse {
    #[serde(default)]
    pub token_balances: Vec<TokenBalanceEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalanceEntry {
    pub contract_address: Address,
    /// Null when the provider could not read the balance
    #[serde(default)]
    pub token_balance: Option<U256>,
}

#[derive(Debug, Deserialize)]
pub struct TokenMetadataResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub decimals: Option<u8>,
    #[serde(default)]
    pub logo: Option<String>,
}

impl From<TokenBalancesResponse> for Vec<RawTokenBalance> {
    fn from(response: TokenBalancesResponse) -> Self {
        response
            .token_balances
            .into_iter()
            .map(|entry| RawTokenBalance {
                contract: entry.contract_address,
                balance: entry.token_balance.unwrap_or(U256::ZERO),
            })
            .collect()
    }
}

impl From<TokenMetadataResponse> for TokenMetadata {
    fn from(response: TokenMetadataResponse) -> Self {
        Self {
            name: response.name.filter(|s| !s.is_empty()),
            symbol: response.symbol.filter(|s| !s.is_empty()),
            decimals: response.decimals,
            logo: response.logo.filter(|s| !s.is_empty()),
        }
    }
}
