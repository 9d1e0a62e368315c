use thiserror::Error;

use crate::route::Route;

/// Represents the type of search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Block number (decimal digits only, kept verbatim)
    BlockNumber(String),
    /// Transaction hash (0x + 64 hex chars)
    TxHash(String),
    /// Ethereum address (0x + 40 hex chars)
    Address(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Please enter search content")]
    Empty,
    #[error(
        "Invalid search term. Please enter a valid block number, transaction hash, or Ethereum address."
    )]
    Invalid(String),
}

impl SearchQuery {
    /// Parse a search string into a typed query
    pub fn parse(input: &str) -> Result<Self, SearchError> {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Err(SearchError::Empty);
        }

        // Digits first: a block number can never look like a hash
        if trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Ok(Self::BlockNumber(trimmed.to_string()));
        }

        let Some(hex_part) = trimmed.strip_prefix("0x") else {
            return Err(SearchError::Invalid(trimmed.to_string()));
        };

        if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SearchError::Invalid(trimmed.to_string()));
        }

        match hex_part.len() {
            64 => Ok(Self::TxHash(trimmed.to_string())),
            40 => Ok(Self::Address(trimmed.to_string())),
            _ => Err(SearchError::Invalid(trimmed.to_string())),
        }
    }

    /// The route this query navigates to
    pub fn into_route(self) -> Route {
        match self {
            Self::BlockNumber(num) => Route::Block(num),
            Self::TxHash(hash) => Route::Transaction(hash),
            Self::Address(addr) => Route::Address(addr),
        }
    }

    /// Returns a human-readable description of the query type
    pub fn description(&self) -> String {
        match self {
            Self::BlockNumber(num) => format!("Block: {num}"),
            Self::TxHash(hash) => format!("Transaction: {hash}"),
            Self::Address(addr) => format!("Address: {addr}"),
        }
    }
}
