//! Governance Facade — the logic layer
//!
//! The facade is the entry point for external callers. It surrounds the
//! storage layer without owning it: each call borrows the context. Every
//! privileged call is checked in a fixed order so callers can tell why
//! they were rejected:
//!
//! 1. operational switch (`ContractPaused`)
//! 2. this module's authorization (`CallerNotAuthorized`)
//! 3. caller standing, where required (`CallerNotRegistered`, `CallerNotFunded`)
//! 4. delegation to the consensus engine, the ledger, or a collaborator

use surety_types::{
    Account, Amount, FlightKey, GovernanceError, GovernanceResult, ModuleId, NominationOutcome,
    VoteOutcome, Wallets,
};
use tracing::{info, warn};

use crate::context::GovernanceContext;

/// Opaque flight-schedule storage reached through the facade
pub trait FlightSchedule {
    /// Store a flight operated by `airline`
    fn register_flight(&mut self, airline: &Account, flight: &FlightKey) -> GovernanceResult<()>;
}

/// Logic-layer entry point for airlines and payers
pub struct GovernanceFacade {
    module: ModuleId,
    owner: Account,
    testing_mode: bool,
}

impl GovernanceFacade {
    /// Create a facade acting as `module`, administered by `owner`
    pub fn new(module: ModuleId, owner: Account) -> Self {
        Self {
            module,
            owner,
            testing_mode: false,
        }
    }

    pub fn module(&self) -> &ModuleId {
        &self.module
    }

    // =========================================================================
    // PRIVILEGED OPERATIONS
    // =========================================================================

    /// Nominate `candidate` for admission on behalf of `caller`
    pub fn register_airline(
        &self,
        ctx: &mut GovernanceContext,
        candidate: &Account,
        caller: &Account,
    ) -> GovernanceResult<NominationOutcome> {
        self.require_standing(ctx, caller)?;
        ctx.nominate(&self.module, candidate, caller)
    }

    /// Vote for a pending candidate on behalf of `caller`
    pub fn cast_vote(
        &self,
        ctx: &mut GovernanceContext,
        candidate: &Account,
        caller: &Account,
    ) -> GovernanceResult<VoteOutcome> {
        self.require_standing(ctx, caller)?;
        ctx.cast_vote(&self.module, candidate, caller)
    }

    /// Fund `account` with `amount` paid from `caller`'s wallet.
    ///
    /// An amount below the minimum is rejected before the payer's wallet
    /// is touched. Otherwise the payment is held before the ledger is asked
    /// to accept it and is refunded in full if the ledger rejects it.
    pub fn fund_airline(
        &self,
        ctx: &mut GovernanceContext,
        wallets: &mut Wallets,
        account: &Account,
        amount: Amount,
        caller: &Account,
    ) -> GovernanceResult<()> {
        ctx.guard(&self.module)?;

        let minimum = ctx.ledger().min_funding();
        if amount < minimum {
            return Err(GovernanceError::InsufficientFunding {
                offered: amount,
                minimum,
            });
        }

        let held = wallets.hold(caller, amount)?;
        match ctx.fund_airline(&self.module, account, amount, caller) {
            Ok(()) => {
                wallets.commit(held);
                Ok(())
            }
            Err(err) => {
                let refunded = wallets.refund(held);
                warn!(
                    payer = %caller,
                    airline = %account,
                    amount = %refunded,
                    error = %err,
                    "Funding rejected, payment refunded"
                );
                Err(err)
            }
        }
    }

    /// Register a flight with the schedule on behalf of `caller`, who must
    /// be the airline operating it
    pub fn register_flight<S: FlightSchedule>(
        &self,
        ctx: &GovernanceContext,
        schedule: &mut S,
        caller: &Account,
        flight: &FlightKey,
    ) -> GovernanceResult<()> {
        self.require_standing(ctx, caller)?;
        if flight.airline != *caller {
            return Err(GovernanceError::Unauthorized(caller.clone()));
        }
        schedule.register_flight(caller, flight)
    }

    /// Toggle testing mode. Owner only.
    pub fn set_testing_mode(
        &mut self,
        ctx: &GovernanceContext,
        mode: bool,
        caller: &Account,
    ) -> GovernanceResult<()> {
        ctx.guard(&self.module)?;
        if *caller != self.owner {
            return Err(GovernanceError::Unauthorized(caller.clone()));
        }

        self.testing_mode = mode;
        info!(testing_mode = mode, "Testing mode changed");
        Ok(())
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    pub fn is_testing_mode(&self) -> bool {
        self.testing_mode
    }

    pub fn is_operational(&self, ctx: &GovernanceContext) -> bool {
        ctx.is_operational()
    }

    pub fn is_airline_registered(&self, ctx: &GovernanceContext, account: &Account) -> bool {
        ctx.is_airline_registered(account)
    }

    pub fn is_airline_funded(&self, ctx: &GovernanceContext, account: &Account) -> bool {
        ctx.is_airline_funded(account)
    }

    fn require_standing(&self, ctx: &GovernanceContext, caller: &Account) -> GovernanceResult<()> {
        ctx.guard(&self.module)?;
        ctx.ledger().require_good_standing(caller)
    }
}
