//! Flight identity, as seen by the governance layer
//!
//! Flight storage itself lives outside this crate; the governance layer
//! only needs a key to hand to the schedule it guards.

use crate::Account;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifies a single scheduled flight
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlightKey {
    /// Operating airline
    pub airline: Account,
    /// Flight code, e.g. "ND1309"
    pub flight: String,
    /// Scheduled departure
    pub departure: DateTime<Utc>,
}

impl FlightKey {
    pub fn new(airline: Account, flight: impl Into<String>, departure: DateTime<Utc>) -> Self {
        Self {
            airline,
            flight: flight.into(),
            departure,
        }
    }
}

impl std::fmt::Display for FlightKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}@{}",
            self.airline,
            self.flight,
            self.departure.timestamp()
        )
    }
}
