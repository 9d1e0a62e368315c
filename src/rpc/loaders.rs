//! Fetch sequences behind each explorer screen.

use alloy::primitives::{Address, TxHash, U256};
use anyhow::{anyhow, Context, Result};
use futures::future::try_join_all;
use tracing::warn;

use super::{
    AddressDetails, BlockInfo, ChainClient, HomeData, RawTokenBalance, TokenBalance, TxDetails,
};

/// Blocks shown in the home screen's "latest blocks" list
pub const LATEST_BLOCK_COUNT: u64 = 10;
/// Transactions of the newest block shown on the home screen
pub const LATEST_TX_COUNT: usize = 10;

/// Block numbers from `height` downwards, clamped at genesis
pub fn latest_block_numbers(height: u64, count: u64) -> Vec<u64> {
    (0..count).filter_map(|i| height.checked_sub(i)).collect()
}

pub async fn load_home<C: ChainClient + ?Sized>(client: &C) -> Result<HomeData> {
    let height = client.block_number().await?;

    let blocks = try_join_all(
        latest_block_numbers(height, LATEST_BLOCK_COUNT)
            .into_iter()
            .map(|number| async move {
                client
                    .block(number)
                    .await?
                    .ok_or_else(|| anyhow!("Block {number} not found (RPC returned null)"))
            }),
    );

    let latest = async {
        client
            .block_with_transactions(height)
            .await?
            .ok_or_else(|| anyhow!("Block {height} not found (RPC returned null)"))
    };

    let (latest_blocks, latest) = tokio::try_join!(blocks, latest)?;

    let mut latest_transactions = latest.transactions;
    latest_transactions.truncate(LATEST_TX_COUNT);

    Ok(HomeData {
        latest_blocks,
        latest_transactions,
    })
}

/// `Ok(None)` when the chain has no such block
pub async fn load_block<C: ChainClient + ?Sized>(
    client: &C,
    number: &str,
) -> Result<Option<BlockInfo>> {
    let number: u64 = number
        .parse()
        .with_context(|| format!("Invalid block number: {number}"))?;

    client
        .block_with_transactions(number)
        .await
        .with_context(|| format!("Failed to fetch block #{number}"))
}

/// `Ok(None)` when the transaction is unknown; the receipt is only
/// requested once the transaction itself resolved.
pub async fn load_transaction<C: ChainClient + ?Sized>(
    client: &C,
    hash: &str,
) -> Result<Option<TxDetails>> {
    let hash: TxHash = hash
        .parse()
        .with_context(|| format!("Invalid transaction hash: {hash}"))?;

    let Some(tx) = client
        .transaction(hash)
        .await
        .with_context(|| format!("Failed to fetch transaction {hash:?}"))?
    else {
        return Ok(None);
    };

    let receipt = client
        .transaction_receipt(hash)
        .await
        .with_context(|| format!("Failed to fetch receipt for {hash:?}"))?;

    Ok(Some(TxDetails { tx, receipt }))
}

/// ETH balance plus token holdings. Token failures never fail the load.
pub async fn load_address<C: ChainClient + ?Sized>(
    client: &C,
    address: &str,
) -> Result<AddressDetails> {
    let parsed: Address = address
        .parse()
        .with_context(|| format!("Invalid address: {address}"))?;

    let (balance, tokens) = tokio::join!(
        client.balance(parsed),
        load_token_balances(client, parsed)
    );

    let balance = balance.with_context(|| format!("Failed to fetch balance of {address}"))?;

    let tokens = tokens.unwrap_or_else(|e| {
        warn!(address = %address, error = %format!("{e:#}"), "token balances unavailable");
        Vec::new()
    });

    Ok(AddressDetails {
        address: address.to_string(),
        balance,
        tokens,
    })
}

/// Non-zero ERC-20 balances with their metadata, all-or-nothing
pub async fn load_token_balances<C: ChainClient + ?Sized>(
    client: &C,
    address: Address,
) -> Result<Vec<TokenBalance>> {
    let held: Vec<RawTokenBalance> = client
        .token_balances(address)
        .await?
        .into_iter()
        .filter(|t| t.balance != U256::ZERO)
        .collect();

    let metadata = try_join_all(held.iter().map(|t| client.token_metadata(t.contract)))
        .await
        .context("Failed to fetch token metadata")?;

    Ok(held
        .into_iter()
        .zip(metadata)
        .map(|(raw, metadata)| TokenBalance {
            contract: raw.contract,
            balance: raw.balance,
            metadata,
        })
        .collect())
}
