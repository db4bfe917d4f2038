//! External balances and two-phase transfers
//!
//! Funding moves value from a payer's external balance into the registry.
//! The amount is held first and only settles once the ledger accepts the
//! deposit; a rejected deposit refunds the hold in full.

use crate::{Account, Amount, GovernanceError, GovernanceResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Amount debited from a payer and awaiting commit or refund
#[must_use = "a held transfer must be committed or refunded"]
#[derive(Debug, PartialEq, Eq)]
pub struct HeldTransfer {
    payer: Account,
    amount: Amount,
}

impl HeldTransfer {
    pub fn payer(&self) -> &Account {
        &self.payer
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

/// External balances of payers plus the registry's settled total
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Wallets {
    balances: HashMap<Account, Amount>,
    settled: Amount,
}

impl Wallets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add to an account's external balance
    pub fn credit(&mut self, account: &Account, amount: Amount) {
        let balance = self.balances.entry(account.clone()).or_default();
        *balance = balance.saturating_add(amount);
    }

    pub fn balance_of(&self, account: &Account) -> Amount {
        self.balances.get(account).copied().unwrap_or_default()
    }

    /// Total committed into the registry
    pub fn settled(&self) -> Amount {
        self.settled
    }

    /// Tentatively debit `amount` from `payer`
    pub fn hold(&mut self, payer: &Account, amount: Amount) -> GovernanceResult<HeldTransfer> {
        let available = self.balance_of(payer);
        let remaining =
            available
                .checked_sub(amount)
                .ok_or(GovernanceError::InsufficientBalance {
                    required: amount,
                    available,
                })?;
        self.balances.insert(payer.clone(), remaining);

        Ok(HeldTransfer {
            payer: payer.clone(),
            amount,
        })
    }

    /// Settle a held transfer into the registry
    pub fn commit(&mut self, held: HeldTransfer) -> Amount {
        self.settled = self.settled.saturating_add(held.amount);
        held.amount
    }

    /// Return a held transfer to its payer
    pub fn refund(&mut self, held: HeldTransfer) -> Amount {
        self.credit(&held.payer, held.amount);
        held.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn funded_wallets() -> (Wallets, Account) {
        let payer = Account::new("payer");
        let mut wallets = Wallets::new();
        wallets.credit(&payer, Amount::whole_units(20));
        (wallets, payer)
    }

    #[test]
    fn test_hold_and_commit() {
        let (mut wallets, payer) = funded_wallets();

        let held = wallets.hold(&payer, Amount::whole_units(10)).unwrap();
        assert_eq!(wallets.balance_of(&payer), Amount::whole_units(10));
        assert_eq!(held.payer(), &payer);

        assert_eq!(wallets.commit(held), Amount::whole_units(10));
        assert_eq!(wallets.settled(), Amount::whole_units(10));
        assert_eq!(wallets.balance_of(&payer), Amount::whole_units(10));
    }

    #[test]
    fn test_hold_and_refund() {
        let (mut wallets, payer) = funded_wallets();

        let held = wallets.hold(&payer, Amount::whole_units(9)).unwrap();
        wallets.refund(held);

        assert_eq!(wallets.balance_of(&payer), Amount::whole_units(20));
        assert!(wallets.settled().is_zero());
    }

    #[test]
    fn test_hold_exceeding_balance() {
        let (mut wallets, payer) = funded_wallets();

        let err = wallets.hold(&payer, Amount::whole_units(21)).unwrap_err();
        assert!(matches!(err, GovernanceError::InsufficientBalance { .. }));
        assert_eq!(wallets.balance_of(&payer), Amount::whole_units(20));
    }
}
