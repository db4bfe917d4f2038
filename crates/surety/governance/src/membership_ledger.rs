//! Membership Ledger — source of truth for airline standing
//!
//! Stores registration and funding state for every airline the registry
//! has seen. It does NOT decide who may be admitted; callers check
//! standing and consensus before asking the ledger to register anyone.

use std::collections::HashMap;

use surety_types::{
    Account, AirlineRecord, Amount, AuditJournal, GovernanceError, GovernanceReceipt,
    GovernanceResult, ReceiptKind,
};
use tracing::info;

/// Registration and funding state, keyed by account
pub struct MembershipLedger {
    airlines: HashMap<Account, AirlineRecord>,
    min_funding: Amount,
}

impl MembershipLedger {
    /// Create a ledger with `owner` pre-registered and unfunded
    pub fn new(owner: Account, min_funding: Amount) -> Self {
        let mut airlines = HashMap::new();
        airlines.insert(owner.clone(), AirlineRecord::registered(owner));
        Self {
            airlines,
            min_funding,
        }
    }

    /// Register `account`. No-op if it is already registered.
    pub fn register_airline(
        &mut self,
        account: &Account,
        actor: &Account,
        journal: &mut AuditJournal,
    ) -> GovernanceResult<()> {
        let record = self
            .airlines
            .entry(account.clone())
            .or_insert_with(|| AirlineRecord::new(account.clone()));

        if !record.mark_registered() {
            return Ok(());
        }

        info!(airline = %account, by = %actor, "Airline registered");

        journal.log_receipt(
            GovernanceReceipt::new(
                ReceiptKind::AirlineRegistered,
                actor.clone(),
                format!("Airline registered: {}", account),
            )
            .with_metadata("airline", account.0.clone()),
        );

        Ok(())
    }

    /// Accept funding for `account`.
    ///
    /// Amounts below the minimum are rejected without touching the ledger.
    /// Funding is accepted whether or not the airline is registered.
    pub fn fund_airline(
        &mut self,
        account: &Account,
        amount: Amount,
        payer: &Account,
        journal: &mut AuditJournal,
    ) -> GovernanceResult<()> {
        if amount < self.min_funding {
            return Err(GovernanceError::InsufficientFunding {
                offered: amount,
                minimum: self.min_funding,
            });
        }

        let record = self
            .airlines
            .entry(account.clone())
            .or_insert_with(|| AirlineRecord::new(account.clone()));
        record.credit(amount);

        info!(
            airline = %account,
            amount = %amount,
            balance = %record.funded_balance,
            "Airline funded"
        );

        journal.log_receipt(
            GovernanceReceipt::new(
                ReceiptKind::AirlineFunded,
                payer.clone(),
                format!("Funding: {} for {}", amount, account),
            )
            .with_metadata("airline", account.0.clone())
            .with_metadata("amount", amount.to_string()),
        );

        Ok(())
    }

    // --- Query methods ---

    pub fn is_airline_registered(&self, account: &Account) -> bool {
        self.get_airline(account).is_some_and(|a| a.registered)
    }

    pub fn is_airline_funded(&self, account: &Account) -> bool {
        self.get_airline(account).is_some_and(|a| a.funded)
    }

    /// Fail unless `account` is registered, then unless it is funded
    pub fn require_good_standing(&self, account: &Account) -> GovernanceResult<()> {
        if !self.is_airline_registered(account) {
            return Err(GovernanceError::CallerNotRegistered(account.clone()));
        }
        if !self.is_airline_funded(account) {
            return Err(GovernanceError::CallerNotFunded(account.clone()));
        }
        Ok(())
    }

    pub fn get_airline(&self, account: &Account) -> Option<&AirlineRecord> {
        self.airlines.get(account)
    }

    pub fn funded_balance(&self, account: &Account) -> Amount {
        self.get_airline(account)
            .map(|a| a.funded_balance)
            .unwrap_or_default()
    }

    pub fn min_funding(&self) -> Amount {
        self.min_funding
    }

    /// Number of registered airlines
    pub fn registered_count(&self) -> usize {
        self.airlines.values().filter(|a| a.registered).count()
    }

    /// Number of funded airlines (registered or not)
    pub fn funded_count(&self) -> usize {
        self.airlines.values().filter(|a| a.funded).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (MembershipLedger, AuditJournal, Account) {
        let owner = Account::new("owner");
        (
            MembershipLedger::new(owner.clone(), Amount::whole_units(10)),
            AuditJournal::new(),
            owner,
        )
    }

    #[test]
    fn test_owner_preregistered_unfunded() {
        let (ledger, _, owner) = setup();
        assert!(ledger.is_airline_registered(&owner));
        assert!(!ledger.is_airline_funded(&owner));
        assert_eq!(ledger.registered_count(), 1);
        assert_eq!(
            ledger.require_good_standing(&owner),
            Err(GovernanceError::CallerNotFunded(owner))
        );
    }

    #[test]
    fn test_register_is_idempotent() {
        let (mut ledger, mut journal, owner) = setup();
        let airline = Account::new("air-1");

        assert!(!ledger.is_airline_registered(&airline));
        ledger
            .register_airline(&airline, &owner, &mut journal)
            .unwrap();
        ledger
            .register_airline(&airline, &owner, &mut journal)
            .unwrap();

        assert!(ledger.is_airline_registered(&airline));
        assert_eq!(ledger.registered_count(), 2);
        assert_eq!(journal.receipt_count(), 1);
    }

    #[test]
    fn test_funding_below_minimum_leaves_ledger_untouched() {
        let (mut ledger, mut journal, owner) = setup();

        let result = ledger.fund_airline(&owner, Amount::whole_units(9), &owner, &mut journal);
        assert!(matches!(
            result,
            Err(GovernanceError::InsufficientFunding { .. })
        ));
        assert!(!ledger.is_airline_funded(&owner));
        assert!(ledger.funded_balance(&owner).is_zero());
        assert_eq!(journal.receipt_count(), 0);
    }

    #[test]
    fn test_funding_at_threshold_boundary() {
        let (mut ledger, mut journal, owner) = setup();
        let one_short = Amount::new(Amount::whole_units(10).0 - 1);

        assert!(ledger
            .fund_airline(&owner, one_short, &owner, &mut journal)
            .is_err());
        ledger
            .fund_airline(&owner, Amount::whole_units(10), &owner, &mut journal)
            .unwrap();

        assert!(ledger.is_airline_funded(&owner));
        assert!(ledger.require_good_standing(&owner).is_ok());
    }

    #[test]
    fn test_repeat_funding_accrues_balance() {
        let (mut ledger, mut journal, owner) = setup();

        ledger
            .fund_airline(&owner, Amount::whole_units(10), &owner, &mut journal)
            .unwrap();
        ledger
            .fund_airline(&owner, Amount::whole_units(12), &owner, &mut journal)
            .unwrap();
        assert!(ledger
            .fund_airline(&owner, Amount::whole_units(1), &owner, &mut journal)
            .is_err());

        assert!(ledger.is_airline_funded(&owner));
        assert_eq!(ledger.funded_balance(&owner), Amount::whole_units(22));
    }

    #[test]
    fn test_unregistered_airline_can_be_funded() {
        let (mut ledger, mut journal, owner) = setup();
        let airline = Account::new("air-1");

        ledger
            .fund_airline(&airline, Amount::whole_units(10), &owner, &mut journal)
            .unwrap();

        assert!(ledger.is_airline_funded(&airline));
        assert!(!ledger.is_airline_registered(&airline));
        assert_eq!(ledger.funded_count(), 1);
        assert_eq!(
            ledger.require_good_standing(&airline),
            Err(GovernanceError::CallerNotRegistered(airline))
        );
    }
}
