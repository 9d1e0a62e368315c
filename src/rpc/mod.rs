mod alchemy;
pub mod loaders;
mod types;

pub use loaders::*;
pub use types::*;

use alloy::{
    eips::BlockNumberOrTag,
    network::Ethereum,
    primitives::{Address, TxHash, U256},
    providers::{Provider, ProviderBuilder, RootProvider},
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

type HttpProvider = RootProvider<Ethereum>;

/// Read-only chain queries the explorer screens are built from
#[async_trait]
pub trait ChainClient: Send + Sync {
    async fn block_number(&self) -> Result<u64>;

    /// Block header and transaction count, without transaction bodies
    async fn block(&self, number: u64) -> Result<Option<BlockInfo>>;

    async fn block_with_transactions(&self, number: u64) -> Result<Option<BlockInfo>>;

    async fn transaction(&self, hash: TxHash) -> Result<Option<TxInfo>>;

    async fn transaction_receipt(&self, hash: TxHash) -> Result<Option<ReceiptInfo>>;

    async fn balance(&self, address: Address) -> Result<U256>;

    async fn token_balances(&self, address: Address) -> Result<Vec<RawTokenBalance>>;

    async fn token_metadata(&self, contract: Address) -> Result<TokenMetadata>;
}

/// JSON-RPC client over HTTP
pub struct RpcClient {
    provider: HttpProvider,
}

impl RpcClient {
    pub fn new(rpc_url: &str) -> Result<Self> {
        let url = rpc_url.parse().context("Invalid RPC URL")?;
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .network::<Ethereum>()
            .connect_http(url);

        Ok(Self { provider })
    }
}

#[async_trait]
impl ChainClient for RpcClient {
    async fn block_number(&self) -> Result<u64> {
        self.provider
            .get_block_number()
            .await
            .context("Failed to fetch latest block number")
    }

    async fn block(&self, number: u64) -> Result<Option<BlockInfo>> {
        let block = self
            .provider
            .get_block_by_number(BlockNumberOrTag::Number(number))
            .await
            .with_context(|| format!("RPC call get_block_by_number({number}) failed"))?;

        Ok(block.as_ref().map(BlockInfo::from_block))
    }

    async fn block_with_transactions(&self, number: u64) -> Result<Option<BlockInfo>> {
        let block = self
            .provider
            .get_block_by_number(BlockNumberOrTag::Number(number))
            .full()
            .await
            .with_context(|| format!("RPC call get_block_by_number({number}).full() failed"))?;

        Ok(block.as_ref().map(BlockInfo::from_block))
    }

    async fn transaction(&self, hash: TxHash) -> Result<Option<TxInfo>> {
        let tx = self
            .provider
            .get_transaction_by_hash(hash)
            .await
            .with_context(|| format!("RPC call get_transaction_by_hash({hash:?}) failed"))?;

        Ok(tx.as_ref().map(TxInfo::from_tx))
    }

    async fn transaction_receipt(&self, hash: TxHash) -> Result<Option<ReceiptInfo>> {
        let receipt = self
            .provider
            .get_transaction_receipt(hash)
            .await
            .with_context(|| format!("RPC call get_transaction_receipt({hash:?}) failed"))?;

        Ok(receipt.as_ref().map(ReceiptInfo::from_receipt))
    }

    async fn balance(&self, address: Address) -> Result<U256> {
        self.provider
            .get_balance(address)
            .await
            .with_context(|| format!("RPC call get_balance({address:?}) failed"))
    }

    async fn token_balances(&self, address: Address) -> Result<Vec<RawTokenBalance>> {
        let response: alchemy::TokenBalancesResponse = self
            .provider
            .raw_request(alchemy::GET_TOKEN_BALANCES.into(), (address, "erc20"))
            .await
            .with_context(|| format!("RPC call {}({address:?}) failed", alchemy::GET_TOKEN_BALANCES))?;

        debug!(
            address = ?address,
            count = response.token_balances.len(),
            "token balances received"
        );
        Ok(response.into())
    }

    async fn token_metadata(&self, contract: Address) -> Result<TokenMetadata> {
        let response: alchemy::TokenMetadataResponse = self
            .provider
            .raw_request(alchemy::GET_TOKEN_METADATA.into(), (contract,))
            .await
            .with_context(|| {
                format!("RPC call {}({contract:?}) failed", alchemy::GET_TOKEN_METADATA)
            })?;

        Ok(response.into())
    }
}
