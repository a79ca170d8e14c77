//! Account types returned by the algod v1 API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Account
// ============================================================================

/// Account state as returned by `/v1/account/{address}`.
///
/// Amounts are in microAlgos. Asset holdings, participation keys, and any
/// other fields the node reports are kept in [`Account::extra`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    /// Round the account information is valid for.
    pub round: u64,
    /// The Algorand address (58 characters).
    pub address: String,
    /// Balance including pending rewards.
    pub amount: u64,
    #[serde(rename = "pendingrewards")]
    pub pending_rewards: u64,
    #[serde(rename = "amountwithoutpendingrewards")]
    pub amount_without_pending_rewards: u64,
    /// Total rewards the account has received.
    pub rewards: u64,
    /// Delegation status (`Offline`, `Online`, `NotParticipating`).
    pub status: String,
    /// Fields not modelled above, preserved as sent by the node.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Account {
    /// Returns the balance formatted in Algos (not microAlgos).
    #[must_use]
    pub fn balance_in_algos(&self) -> f64 {
        self.amount as f64 / 1_000_000.0
    }

    /// Returns `true` if the account is registered online.
    #[must_use]
    pub fn is_online(&self) -> bool {
        self.status.eq_ignore_ascii_case("online")
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
    fn test_account_from_json() {
        let account: Account = serde_json::from_value(json!({
            "round": 1234,
            "address": "ADDR",
            "amount": 2_500_000,
            "pendingrewards": 500,
            "amountwithoutpendingrewards": 2_499_500,
            "rewards": 10_000,
            "status": "Online",
            "participation": {"votefst": 0, "votelst": 3_000_000}
        }))
        .unwrap();

        assert_eq!(account.round, 1234);
        assert_eq!(account.pending_rewards, 500);
        assert_eq!(account.amount_without_pending_rewards, 2_499_500);
        assert!(account.is_online());
        assert!((account.balance_in_algos() - 2.5).abs() < f64::EPSILON);
        assert!(account.extra.contains_key("participation"));
    }

    #[test]
    fn test_account_defaults_missing_fields() {
        let account: Account = serde_json::from_value(json!({"address": "ADDR"})).unwrap();
        assert_eq!(account.amount, 0);
        assert!(!account.is_online());
        assert!(account.extra.is_empty());
    }
}
