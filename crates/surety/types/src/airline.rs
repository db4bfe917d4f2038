//! Airline records: registration and funding state
//!
//! A record is created the first time an account is registered or funded
//! and is never deleted. Registration and funding are orthogonal flags.

use crate::{Account, Amount};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registration and funding state of a single airline
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AirlineRecord {
    /// The airline's account
    pub account: Account,
    /// Whether the airline is admitted to the registry
    pub registered: bool,
    /// Whether the airline has paid at least the minimum funding
    pub funded: bool,
    /// Total accepted funding
    pub funded_balance: Amount,
    /// When the airline was admitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<DateTime<Utc>>,
}

impl AirlineRecord {
    /// Create an unregistered, unfunded record
    pub fn new(account: Account) -> Self {
        Self {
            account,
            registered: false,
            funded: false,
            funded_balance: Amount::zero(),
            registered_at: None,
        }
    }

    /// Create a record that is already registered
    pub fn registered(account: Account) -> Self {
        let mut record = Self::new(account);
        record.mark_registered();
        record
    }

    /// Mark the airline registered. Returns false if it already was.
    pub fn mark_registered(&mut self) -> bool {
        if self.registered {
            return false;
        }
        self.registered = true;
        self.registered_at = Some(Utc::now());
        true
    }

    /// Credit accepted funding. The funded flag never reverts.
    pub fn credit(&mut self, amount: Amount) {
        self.funded = true;
        self.funded_balance = self.funded_balance.saturating_add(amount);
    }

    /// Registered and funded
    pub fn in_good_standing(&self) -> bool {
        self.registered && self.funded
    }
}
