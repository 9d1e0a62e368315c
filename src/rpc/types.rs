use alloy::{
    consensus::Transaction as TxTrait,
    network::TransactionResponse,
    primitives::{Address, Bytes, U256},
};

// ============================================================================
// Data Types
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct BlockInfo {
    pub number: u64,
    pub hash: String,
    pub parent_hash: String,
    pub timestamp: u64,
    pub miner: String,
    pub gas_limit: u64,
    pub gas_used: u64,
    pub difficulty: U256,
    pub total_difficulty: Option<U256>,
    pub nonce: String,
    pub extra_data: String,
    pub size: Option<u64>,
    pub tx_count: usize,
    /// Empty unless the block was fetched with full transactions
    pub transactions: Vec<TxSummary>,
}

impl BlockInfo {
    pub fn from_block(block: &alloy::rpc::types::Block) -> Self {
        Self {
            number: block.header.number,
            hash: format!("{:?}", block.header.hash),
            parent_hash: format!("{:?}", block.header.parent_hash),
            timestamp: block.header.timestamp,
            miner: format!("{:?}", block.header.beneficiary),
            gas_limit: block.header.gas_limit,
            gas_used: block.header.gas_used,
            difficulty: block.header.difficulty,
            total_difficulty: block.header.total_difficulty,
            nonce: format!("{:?}", block.header.nonce),
            extra_data: format!("{}", block.header.extra_data),
            size: block.header.size.and_then(|s| s.try_into().ok()),
            tx_count: block.transactions.len(),
            transactions: block.transactions.txns().map(TxSummary::from_tx).collect(),
        }
    }

    /// Gas used as a percentage of the gas limit
    pub fn gas_utilization(&self) -> f64 {
        if self.gas_limit == 0 {
            return 0.0;
        }
        (self.gas_used as f64 / self.gas_limit as f64) * 100.0
    }
}

/// Lightweight transaction summary for block and home lists
#[derive(Debug, Clone, PartialEq)]
pub struct TxSummary {
    pub hash: String,
    pub from: String,
    pub to: Option<String>,
    pub value: U256,
}

impl TxSummary {
    pub fn from_tx(tx: &alloy::rpc::types::Transaction) -> Self {
        Self {
            hash: format!("{:?}", tx.tx_hash()),
            from: format!("{:?}", tx.from()),
            to: tx.to().map(|a| format!("{a:?}")),
            value: tx.value(),
        }
    }

    pub fn is_contract_creation(&self) -> bool {
        self.to.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TxInfo {
    pub hash: String,
    pub from: String,
    pub to: Option<String>,
    pub value: U256,
    pub gas_price: Option<u128>,
    pub gas_limit: u64,
    pub nonce: u64,
    /// None while the transaction is still pending
    pub block_number: Option<u64>,
    pub input: Bytes,
}

impl TxInfo {
    pub fn from_tx(tx: &alloy::rpc::types::Transaction) -> Self {
        Self {
            hash: format!("{:?}", tx.tx_hash()),
            from: format!("{:?}", tx.from()),
            to: tx.to().map(|a| format!("{a:?}")),
            value: tx.value(),
            gas_price: <_ as TransactionResponse>::gas_price(tx),
            gas_limit: tx.gas_limit(),
            nonce: tx.nonce(),
            block_number: tx.block_number(),
            input: tx.input().clone(),
        }
    }

    pub fn is_contract_creation(&self) -> bool {
        self.to.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogInfo {
    pub index: Option<u64>,
    pub address: String,
    pub topics: Vec<String>,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptInfo {
    pub status: bool,
    pub gas_used: u64,
    pub effective_gas_price: u128,
    pub contract_address: Option<String>,
    pub logs: Vec<LogInfo>,
}

impl ReceiptInfo {
    pub fn from_receipt(receipt: &alloy::rpc::types::TransactionReceipt) -> Self {
        let logs = receipt
            .inner
            .logs()
            .iter()
            .map(|log| LogInfo {
                index: log.log_index,
                address: format!("{:?}", log.address()),
                topics: log.topics().iter().map(|t| format!("{t:?}")).collect(),
                data: format!("{}", log.data().data),
            })
            .collect();

        Self {
            status: receipt.status(),
            gas_used: receipt.gas_used,
            effective_gas_price: receipt.effective_gas_price,
            contract_address: receipt.contract_address.map(|a| format!("{a:?}")),
            logs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxStatus {
    Pending,
    Success,
    Failed,
}

impl TxStatus {
    pub fn from_receipt(receipt: Option<&ReceiptInfo>) -> Self {
        match receipt {
            None => TxStatus::Pending,
            Some(r) if r.status => TxStatus::Success,
            Some(_) => TxStatus::Failed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TxStatus::Pending => "Pending",
            TxStatus::Success => "Success",
            TxStatus::Failed => "Failed",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TxStatus::Pending => "⏳",
            TxStatus::Success => "✓",
            TxStatus::Failed => "✗",
        }
    }
}

/// A transaction together with its receipt, once mined
#[derive(Debug, Clone, PartialEq)]
pub struct TxDetails {
    pub tx: TxInfo,
    pub receipt: Option<ReceiptInfo>,
}

impl TxDetails {
    pub fn status(&self) -> TxStatus {
        TxStatus::from_receipt(self.receipt.as_ref())
    }

    /// Fee paid in wei; unknown until a receipt exists
    pub fn fee(&self) -> Option<U256> {
        let receipt = self.receipt.as_ref()?;
        let price = self.tx.gas_price.unwrap_or(receipt.effective_gas_price);
        Some(U256::from(price) * U256::from(receipt.gas_used))
    }

    /// Gas used as a percentage of the gas limit
    pub fn gas_utilization(&self) -> Option<f64> {
        let receipt = self.receipt.as_ref()?;
        if self.tx.gas_limit == 0 {
            return Some(0.0);
        }
        Some((receipt.gas_used as f64 / self.tx.gas_limit as f64) * 100.0)
    }
}

/// Raw ERC-20 balance as reported by the provider
#[derive(Debug, Clone, PartialEq)]
pub struct RawTokenBalance {
    pub contract: Address,
    pub balance: U256,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenMetadata {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub decimals: Option<u8>,
    pub logo: Option<String>,
}

/// Token balance for a specific token
#[derive(Debug, Clone, PartialEq)]
pub struct TokenBalance {
    pub contract: Address,
    pub balance: U256,
    pub metadata: TokenMetadata,
}

impl TokenBalance {
    pub fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or("Unknown Token")
    }

    pub fn symbol(&self) -> &str {
        self.metadata.symbol.as_deref().unwrap_or("?")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddressDetails {
    pub address: String,
    pub balance: U256,
    pub tokens: Vec<TokenBalance>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeData {
    pub latest_blocks: Vec<BlockInfo>,
    pub latest_transactions: Vec<TxSummary>,
}
