//! Operational Switch — the registry-wide circuit breaker
//!
//! Every mutating entry point consults the switch before doing anything
//! else. Only the owner may flip it; read-only queries ignore it.

use surety_types::{
    Account, AuditJournal, GovernanceError, GovernanceReceipt, GovernanceResult, ReceiptKind,
};
use tracing::warn;

/// Owner-controlled pause flag
pub struct OperationalSwitch {
    owner: Account,
    operational: bool,
}

impl OperationalSwitch {
    /// Create an operational switch owned by `owner`
    pub fn new(owner: Account) -> Self {
        Self {
            owner,
            operational: true,
        }
    }

    pub fn is_operational(&self) -> bool {
        self.operational
    }

    /// Set the operational flag. Fails with `Unauthorized` for anyone but
    /// the owner, whatever the requested value.
    pub fn set_operating_status(
        &mut self,
        operational: bool,
        caller: &Account,
        journal: &mut AuditJournal,
    ) -> GovernanceResult<()> {
        if *caller != self.owner {
            return Err(GovernanceError::Unauthorized(caller.clone()));
        }

        if self.operational == operational {
            return Ok(());
        }
        self.operational = operational;

        warn!(operational = operational, owner = %caller, "Operating status changed");

        journal.log_receipt(
            GovernanceReceipt::new(
                ReceiptKind::OperatingStatus,
                caller.clone(),
                format!("Operating status set to {}", operational),
            )
            .with_metadata("operational", operational.to_string()),
        );

        Ok(())
    }

    /// Fail with `ContractPaused` unless operational
    pub fn require_operational(&self) -> GovernanceResult<()> {
        if self.operational {
            Ok(())
        } else {
            Err(GovernanceError::ContractPaused)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (OperationalSwitch, AuditJournal, Account) {
        let owner = Account::new("owner");
        (
            OperationalSwitch::new(owner.clone()),
            AuditJournal::new(),
            owner,
        )
    }

    #[test]
    fn test_initially_operational() {
        let (switch, _, _) = setup();
        assert!(switch.is_operational());
        assert!(switch.require_operational().is_ok());
    }

    #[test]
    fn test_non_owner_rejected_for_any_value() {
        let (mut switch, mut journal, _) = setup();
        let intruder = Account::new("intruder");

        for value in [false, true] {
            let result = switch.set_operating_status(value, &intruder, &mut journal);
            assert_eq!(result, Err(GovernanceError::Unauthorized(intruder.clone())));
        }
        assert!(switch.is_operational());
        assert_eq!(journal.receipt_count(), 0);
    }

    #[test]
    fn test_owner_pause_and_resume() {
        let (mut switch, mut journal, owner) = setup();

        switch
            .set_operating_status(false, &owner, &mut journal)
            .unwrap();
        assert_eq!(switch.require_operational(), Err(GovernanceError::ContractPaused));

        switch.set_operating_status(true, &owner, &mut journal).unwrap();
        assert!(switch.is_operational());
        assert_eq!(journal.receipt_count(), 2);
    }

    #[test]
    fn test_owner_setting_same_value_is_noop() {
        let (mut switch, mut journal, owner) = setup();
        switch.set_operating_status(true, &owner, &mut journal).unwrap();
        assert!(switch.is_operational());
        assert_eq!(journal.receipt_count(), 0);
    }
}
