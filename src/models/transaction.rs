//! Transaction models

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::utils::errors::PanelError;

/// Gas estimates for newly added transactions are drawn from this range.
pub const GAS_ESTIMATE_MIN: u64 = 21_000;
pub const GAS_ESTIMATE_MAX: u64 = 121_000;

/// A simulated transaction queued in the batch panel.
///
/// Everything except `selected` is immutable after creation. The `to` and
/// `amount` fields are free text and intentionally unvalidated ("Unlimited"
/// is a legitimate amount).
#[derive(Debug, Clone, Serialize)]
pub struct TransactionRecord {
    pub id: String,
    pub kind: String,
    pub to: String,
    pub amount: String,
    pub gas_estimate: u64,
    pub selected: bool,
    pub created_at: DateTime<Utc>,
}

impl TransactionRecord {
    /// Create a fresh record. New records always start selected.
    pub fn new(kind: &str, to: &str, amount: &str, gas_estimate: u64) -> Self {
        TransactionRecord {
            id: Uuid::new_v4().to_string(),
            kind: kind.to_string(),
            to: to.to_string(),
            amount: amount.to_string(),
            gas_estimate,
            selected: true,
            created_at: Utc::now(),
        }
    }

    fn seeded(kind: &str, to: &str, amount: &str, gas_estimate: u64, selected: bool) -> Self {
        let mut record = TransactionRecord::new(kind, to, amount, gas_estimate);
        record.selected = selected;
        record
    }
}

/// The three demo transactions every session starts with.
pub fn seed_records() -> Vec<TransactionRecord> {
    vec![
        TransactionRecord::seeded(
            "Transfer",
            "0x742d35Cc6639C0532fEb5027f11d6E5a3d6Ac",
            "0.1",
            21_000,
            true,
        ),
        TransactionRecord::seeded(
            "Swap",
            "0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984",
            "100",
            150_000,
            true,
        ),
        TransactionRecord::seeded(
            "Approve",
            "0xA0b86a33E6411A3b9e3e79C9f75e5a08f2e9c63d",
            "Unlimited",
            45_000,
            false,
        ),
    ]
}

/// A transaction under construction in the add form.
#[derive(Debug, Clone, Default)]
pub struct DraftTransaction {
    pub kind: String,
    pub to: String,
    pub amount: String,
}

impl DraftTransaction {
    /// All three fields must be filled before the draft can be submitted.
    pub fn is_complete(&self) -> bool {
        !self.kind.is_empty() && !self.to.is_empty() && !self.amount.is_empty()
    }

    pub fn clear(&mut self) {
        self.kind.clear();
        self.to.clear();
        self.amount.clear();
    }
}

/// Editable fields of a [`DraftTransaction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Kind,
    To,
    Amount,
}

impl std::str::FromStr for DraftField {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kind" | "type" => Ok(DraftField::Kind),
            "to" | "address" => Ok(DraftField::To),
            "amount" => Ok(DraftField::Amount),
            other => Err(PanelError::UnknownField(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_records() {
        let seeds = seed_records();
        assert_eq!(seeds.len(), 3);
        assert!(seeds[0].selected);
        assert!(seeds[1].selected);
        assert!(!seeds[2].selected);
        assert_eq!(seeds[0].gas_estimate + seeds[1].gas_estimate, 171_000);
        assert_eq!(seeds[2].amount, "Unlimited");
    }

    #[test]
    fn test_seed_ids_unique() {
        let seeds = seed_records();
        assert_ne!(seeds[0].id, seeds[1].id);
        assert_ne!(seeds[1].id, seeds[2].id);
        assert_ne!(seeds[0].id, seeds[2].id);
    }

    #[test]
    fn test_draft_completeness() {
        let mut draft = DraftTransaction::default();
        assert!(!draft.is_complete());

        draft.kind = "Transfer".to_string();
        draft.to = "0xabc".to_string();
        assert!(!draft.is_complete());

        draft.amount = "1.5".to_string();
        assert!(draft.is_complete());

        draft.clear();
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_draft_field_parsing() {
        assert_eq!("kind".parse::<DraftField>().unwrap(), DraftField::Kind);
        assert_eq!("TO".parse::<DraftField>().unwrap(), DraftField::To);
        assert_eq!("amount".parse::<DraftField>().unwrap(), DraftField::Amount);
        assert!("gas".parse::<DraftField>().is_err());
    }
}
