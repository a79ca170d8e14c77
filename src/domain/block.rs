//! Block types returned by the algod v1 API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::transaction::{Transaction, TransactionList};

// ============================================================================
// Block Header
// ============================================================================

/// Typed view of the header fields of a block.
///
/// Every field is optional; a field the node leaves out or sends as `null`
/// is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockHeader {
    /// Block number (round).
    pub round: Option<u64>,
    /// Block hash.
    pub hash: Option<String>,
    pub previous_block_hash: Option<String>,
    pub seed: Option<String>,
    /// Address of the block proposer.
    pub proposer: Option<String>,
    pub period: Option<u64>,
    pub txn_root: Option<String>,
    /// Block timestamp in seconds since the Unix epoch.
    pub timestamp: Option<i64>,
    pub current_protocol: Option<String>,
}

// ============================================================================
// Block
// ============================================================================

/// A block as returned by `/v1/block/{round}`.
///
/// Keeps the JSON object exactly as the node sent it alongside a typed view
/// of the header and transactions. Serializing a `Block` yields the original
/// object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Block {
    header: BlockHeader,
    transactions: Vec<Transaction>,
    raw: Map<String, Value>,
}

impl Block {
    #[must_use]
    pub fn header(&self) -> &BlockHeader {
        &self.header
    }

    /// Transactions included in the block; empty when `txns` is absent.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of transactions in the block.
    #[must_use]
    pub fn txn_count(&self) -> usize {
        self.transactions.len()
    }

    /// Block timestamp as a UTC datetime, if present and representable.
    #[must_use]
    pub fn datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.header
            .timestamp
            .and_then(|ts| chrono::DateTime::from_timestamp(ts, 0))
    }

    /// The block object as sent by the node.
    #[must_use]
    pub fn as_json(&self) -> &Map<String, Value> {
        &self.raw
    }

    #[must_use]
    pub fn into_json(self) -> Map<String, Value> {
        self.raw
    }
}

impl TryFrom<Map<String, Value>> for Block {
    type Error = serde_json::Error;

    fn try_from(raw: Map<String, Value>) -> Result<Self, Self::Error> {
        let header = BlockHeader::deserialize(&Value::Object(raw.clone()))?;
        let transactions = match raw.get("txns") {
            Some(txns) if !txns.is_null() => TransactionList::deserialize(txns)?.transactions,
            _ => Vec::new(),
        };

        Ok(Self {
            header,
            transactions,
            raw,
        })
    }
}

impl From<Block> for Map<String, Value> {
    fn from(block: Block) -> Self {
        block.raw
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_block_from_json() {
        let block: Block = serde_json::from_value(json!({
            "hash": "BLOCKHASH",
            "previousBlockHash": "PREVHASH",
            "seed": "SEED",
            "proposer": "PROPOSER",
            "round": 100,
            "period": 0,
            "txnRoot": "ROOT",
            "reward": 1000,
            "timestamp": 1_560_000_000,
            "currentProtocol": "v24",
            "txns": {"transactions": [{"type": "pay", "tx": "T1"}]}
        }))
        .unwrap();

        assert_eq!(block.header().round, Some(100));
        assert_eq!(block.header().previous_block_hash.as_deref(), Some("PREVHASH"));
        assert_eq!(block.txn_count(), 1);
        assert_eq!(block.transactions()[0].id, "T1");
        assert_eq!(block.as_json().get("reward"), Some(&json!(1000)));
        assert_eq!(
            block.datetime().map(|dt| dt.timestamp()),
            Some(1_560_000_000)
        );
    }

    #[test]
    fn test_empty_block_has_no_transactions() {
        let block: Block = serde_json::from_value(json!({"round": 1})).unwrap();
        assert_eq!(block.txn_count(), 0);
        assert_eq!(block.datetime(), None);
    }

    #[test]
    fn test_sparse_block_serializes_as_sent() {
        let sent = json!({
            "round": 100,
            "hash": null,
            "txns": {"transactions": [{"type": "pay", "tx": "T1"}]}
        });
        let block: Block = serde_json::from_value(sent.clone()).unwrap();

        assert_eq!(block.header().hash, None);
        assert_eq!(block.header().seed, None);
        assert_eq!(serde_json::to_value(&block).unwrap(), sent);
    }

    #[test]
    fn test_null_txns_is_empty() {
        let block: Block = serde_json::from_value(json!({"round": 2, "txns": null})).unwrap();
        assert_eq!(block.txn_count(), 0);
    }

    #[test]
    fn test_non_object_block_is_rejected() {
        assert!(serde_json::from_value::<Block>(json!([1, 2])).is_err());
    }
}
