//! Node status, version, and ledger supply types.
//!
//! These mirror the JSON objects returned by `/v1/status`, `/versions`, and
//! `/v1/ledger/supply`.

use serde::{Deserialize, Serialize};

// ============================================================================
// Node Status
// ============================================================================

/// Current state of the node, as returned by `/v1/status` and
/// `/v1/status/wait-for-block-after/{round}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeStatus {
    /// Last round the node has seen.
    pub last_round: u64,
    /// Consensus protocol of the last round.
    pub last_consensus_version: String,
    /// Consensus protocol the next round will use.
    pub next_consensus_version: String,
    /// Round at which the next consensus version applies.
    pub next_consensus_version_round: u64,
    /// Whether this node supports the next consensus version.
    pub next_consensus_version_supported: bool,
    /// Nanoseconds since the last round was seen.
    pub time_since_last_round: i64,
    /// Nanoseconds spent catching up; zero once caught up.
    pub catchup_time: i64,
    pub has_synced_since_startup: bool,
    pub stopped_at_unsupported_round: bool,
}

impl NodeStatus {
    /// Returns `true` if the node reports no catchup in progress.
    #[must_use]
    pub fn is_caught_up(&self) -> bool {
        self.catchup_time == 0
    }
}

// ============================================================================
// Versions
// ============================================================================

/// Build information of the running node binary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildVersion {
    pub major: u64,
    pub minor: u64,
    pub build_number: u64,
    pub commit_hash: String,
    pub branch: String,
    pub channel: String,
}

/// Supported API versions and genesis information from `/versions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Versions {
    /// API versions the node serves (e.g. `["v1"]`).
    pub versions: Vec<String>,
    /// Genesis ID of the network.
    pub genesis_id: String,
    /// Base64-encoded genesis hash.
    pub genesis_hash_b64: String,
    /// Node build details.
    pub build: BuildVersion,
}

// ============================================================================
// Ledger Supply
// ============================================================================

/// Supply details for the node's ledger, in microAlgos.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Supply {
    /// Round the supply figures were computed at.
    pub round: u64,
    /// Total money in the ledger.
    pub total_money: u64,
    /// Money held by online accounts.
    pub online_money: u64,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_status_from_json() {
        let status: NodeStatus = serde_json::from_value(json!({
            "lastRound": 4_200_000,
            "lastConsensusVersion": "v24",
            "nextConsensusVersion": "v24",
            "nextConsensusVersionRound": 4_200_001,
            "nextConsensusVersionSupported": true,
            "timeSinceLastRound": 1_500_000_000i64,
            "catchupTime": 0
        }))
        .unwrap();

        assert_eq!(status.last_round, 4_200_000);
        assert_eq!(status.last_consensus_version, "v24");
        assert!(status.next_consensus_version_supported);
        assert!(status.is_caught_up());
        assert!(!status.has_synced_since_startup);
    }

    #[test]
    fn test_versions_from_json() {
        let versions: Versions = serde_json::from_value(json!({
            "versions": ["v1"],
            "genesis_id": "testnet-v1.0",
            "genesis_hash_b64": "SGO1GKSzyE7IEPItTxCByw9x8FmnrCDexi9/cOUJOiI=",
            "build": {"major": 2, "minor": 0, "build_number": 3, "commit_hash": "abc", "branch": "rel/stable", "channel": "stable"}
        }))
        .unwrap();

        assert_eq!(versions.versions, vec!["v1".to_string()]);
        assert_eq!(versions.genesis_id, "testnet-v1.0");
        assert_eq!(versions.build.channel, "stable");
    }

    #[test]
    fn test_supply_from_json() {
        let supply: Supply = serde_json::from_value(json!({
            "round": 10,
            "totalMoney": 10_000_000_000_000_000u64,
            "onlineMoney": 9_000_000
        }))
        .unwrap();

        assert_eq!(supply.round, 10);
        assert_eq!(supply.total_money, 10_000_000_000_000_000);
        assert_eq!(supply.online_money, 9_000_000);
    }
}
