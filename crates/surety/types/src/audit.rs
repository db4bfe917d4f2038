//! Audit journal types: governance receipts
//!
//! Every committed governance change produces a receipt. Rejected calls
//! commit nothing and leave no receipt.

use crate::Account;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What a receipt records
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReceiptKind {
    /// Operational flag changed
    OperatingStatus,
    /// A module was added to the caller allow-list
    CallerAuthorized,
    /// A module was removed from the caller allow-list
    CallerDeauthorized,
    /// An airline was admitted to the registry
    AirlineRegistered,
    /// Funding was accepted for an airline
    AirlineFunded,
    /// An admission vote was opened
    VoteOpened,
    /// A vote was counted
    VoteCast,
}

/// A receipt for a committed governance change
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GovernanceReceipt {
    /// Unique receipt identifier
    pub receipt_id: String,
    /// Type of receipt
    pub kind: ReceiptKind,
    /// The account that triggered the change
    pub actor: Account,
    /// Human-readable description
    pub description: String,
    /// When the receipt was created
    pub timestamp: DateTime<Utc>,
    /// Additional metadata
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

impl GovernanceReceipt {
    pub fn new(kind: ReceiptKind, actor: Account, description: impl Into<String>) -> Self {
        Self {
            receipt_id: uuid::Uuid::new_v4().to_string(),
            kind,
            actor,
            description: description.into(),
            timestamp: Utc::now(),
            metadata: HashMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Append-only record of governance receipts
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AuditJournal {
    /// All receipts, oldest first
    pub receipts: Vec<GovernanceReceipt>,
}

impl AuditJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log a receipt
    pub fn log_receipt(&mut self, receipt: GovernanceReceipt) {
        self.receipts.push(receipt);
    }

    /// Get all receipts for a specific actor
    pub fn receipts_for_actor(&self, actor: &Account) -> Vec<&GovernanceReceipt> {
        self.receipts.iter().filter(|r| r.actor == *actor).collect()
    }

    /// Get all receipts of a given kind
    pub fn receipts_of_kind(&self, kind: &ReceiptKind) -> Vec<&GovernanceReceipt> {
        self.receipts.iter().filter(|r| r.kind == *kind).collect()
    }

    /// Total number of receipts
    pub fn receipt_count(&self) -> usize {
        self.receipts.len()
    }
}
