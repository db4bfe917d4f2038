//! Governance Context — the storage layer
//!
//! Owns every piece of shared governance state: the operational switch,
//! the caller allow-list, the membership ledger, the open votes, and the
//! audit journal. Mutating entry points take the invoking module and
//! reject, in order, when paused and when the module is not authorized.
//! Caller standing is the logic layer's concern, except where the
//! consensus engine re-checks it for nominations and votes.

use surety_types::{
    Account, Amount, AuditJournal, GovernanceResult, ModuleId, NominationOutcome, VoteOutcome,
};
use tracing::info;

use crate::{
    authorization_registry::AuthorizationRegistry, config::GovernanceConfig,
    consensus_engine::ConsensusEngine, membership_ledger::MembershipLedger,
    operational_switch::OperationalSwitch,
};

/// All governance state, created once at initialization
pub struct GovernanceContext {
    owner: Account,
    switch: OperationalSwitch,
    authorizations: AuthorizationRegistry,
    ledger: MembershipLedger,
    consensus: ConsensusEngine,
    journal: AuditJournal,
    config: GovernanceConfig,
}

impl GovernanceContext {
    /// Create a context with default configuration
    pub fn new(owner: Account) -> Self {
        Self::with_config(owner, GovernanceConfig::default())
    }

    /// Create a context; `owner` is pre-registered and unfunded
    pub fn with_config(owner: Account, config: GovernanceConfig) -> Self {
        info!(
            owner = %owner,
            consensus_threshold = config.consensus_threshold,
            min_funding = %config.min_funding(),
            "Governance context created"
        );

        Self {
            switch: OperationalSwitch::new(owner.clone()),
            authorizations: AuthorizationRegistry::new(owner.clone()),
            ledger: MembershipLedger::new(owner.clone(), config.min_funding()),
            consensus: ConsensusEngine::new(config.consensus_threshold),
            journal: AuditJournal::new(),
            owner,
            config,
        }
    }

    // =========================================================================
    // OWNER OPERATIONS
    // =========================================================================

    pub fn set_operating_status(
        &mut self,
        operational: bool,
        caller: &Account,
    ) -> GovernanceResult<()> {
        self.switch
            .set_operating_status(operational, caller, &mut self.journal)
    }

    pub fn authorize_caller(&mut self, module: ModuleId, caller: &Account) -> GovernanceResult<()> {
        self.authorizations
            .authorize_caller(module, caller, &mut self.journal)
    }

    pub fn deauthorize_caller(
        &mut self,
        module: &ModuleId,
        caller: &Account,
    ) -> GovernanceResult<()> {
        self.authorizations
            .deauthorize_caller(module, caller, &mut self.journal)
    }

    // =========================================================================
    // GUARDED STORAGE OPERATIONS
    // =========================================================================

    /// Reject with `ContractPaused`, then with `CallerNotAuthorized`
    pub fn guard(&self, invoker: &ModuleId) -> GovernanceResult<()> {
        self.switch.require_operational()?;
        self.authorizations.require_authorized(invoker)
    }

    /// Register `account` directly, bypassing consensus and closing any
    /// open vote for it
    pub fn register_airline(
        &mut self,
        invoker: &ModuleId,
        account: &Account,
        actor: &Account,
    ) -> GovernanceResult<()> {
        self.guard(invoker)?;
        self.consensus
            .admit_directly(account, actor, &mut self.ledger, &mut self.journal)
    }

    pub fn fund_airline(
        &mut self,
        invoker: &ModuleId,
        account: &Account,
        amount: Amount,
        payer: &Account,
    ) -> GovernanceResult<()> {
        self.guard(invoker)?;
        self.ledger
            .fund_airline(account, amount, payer, &mut self.journal)
    }

    pub fn nominate(
        &mut self,
        invoker: &ModuleId,
        candidate: &Account,
        by: &Account,
    ) -> GovernanceResult<NominationOutcome> {
        self.guard(invoker)?;
        self.consensus
            .nominate(candidate, by, &mut self.ledger, &mut self.journal)
    }

    pub fn cast_vote(
        &mut self,
        invoker: &ModuleId,
        candidate: &Account,
        by: &Account,
    ) -> GovernanceResult<VoteOutcome> {
        self.guard(invoker)?;
        self.consensus
            .cast_vote(candidate, by, &mut self.ledger, &mut self.journal)
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    pub fn owner(&self) -> &Account {
        &self.owner
    }

    pub fn config(&self) -> &GovernanceConfig {
        &self.config
    }

    pub fn is_operational(&self) -> bool {
        self.switch.is_operational()
    }

    pub fn is_caller_authorized(&self, module: &ModuleId) -> bool {
        self.authorizations.is_caller_authorized(module)
    }

    pub fn is_airline_registered(&self, account: &Account) -> bool {
        self.ledger.is_airline_registered(account)
    }

    pub fn is_airline_funded(&self, account: &Account) -> bool {
        self.ledger.is_airline_funded(account)
    }

    pub fn ledger(&self) -> &MembershipLedger {
        &self.ledger
    }

    pub fn consensus(&self) -> &ConsensusEngine {
        &self.consensus
    }

    pub fn journal(&self) -> &AuditJournal {
        &self.journal
    }
}
