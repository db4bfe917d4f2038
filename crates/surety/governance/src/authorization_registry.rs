//! Authorization Registry — which logic modules may mutate the registry
//!
//! The storage layer only accepts mutating calls from modules on this
//! allow-list. The allow-list itself is owner-administered.

use std::collections::HashSet;

use surety_types::{
    Account, AuditJournal, GovernanceError, GovernanceReceipt, GovernanceResult, ModuleId,
    ReceiptKind,
};
use tracing::{info, warn};

/// Owner-administered allow-list of calling modules
pub struct AuthorizationRegistry {
    owner: Account,
    authorized: HashSet<ModuleId>,
}

impl AuthorizationRegistry {
    pub fn new(owner: Account) -> Self {
        Self {
            owner,
            authorized: HashSet::new(),
        }
    }

    /// Allow `module` to invoke mutating storage operations
    pub fn authorize_caller(
        &mut self,
        module: ModuleId,
        caller: &Account,
        journal: &mut AuditJournal,
    ) -> GovernanceResult<()> {
        self.require_owner(caller)?;

        if !self.authorized.insert(module.clone()) {
            return Ok(());
        }

        info!(module = %module, owner = %caller, "Caller module authorized");

        journal.log_receipt(
            GovernanceReceipt::new(
                ReceiptKind::CallerAuthorized,
                caller.clone(),
                format!("Module authorized: {}", module),
            )
            .with_metadata("module", module.0),
        );

        Ok(())
    }

    /// Remove `module` from the allow-list
    pub fn deauthorize_caller(
        &mut self,
        module: &ModuleId,
        caller: &Account,
        journal: &mut AuditJournal,
    ) -> GovernanceResult<()> {
        self.require_owner(caller)?;

        if !self.authorized.remove(module) {
            return Ok(());
        }

        warn!(module = %module, owner = %caller, "Caller module deauthorized");

        journal.log_receipt(
            GovernanceReceipt::new(
                ReceiptKind::CallerDeauthorized,
                caller.clone(),
                format!("Module deauthorized: {}", module),
            )
            .with_metadata("module", module.0.clone()),
        );

        Ok(())
    }

    pub fn is_caller_authorized(&self, module: &ModuleId) -> bool {
        self.authorized.contains(module)
    }

    /// Fail with `CallerNotAuthorized` unless `module` is on the allow-list
    pub fn require_authorized(&self, module: &ModuleId) -> GovernanceResult<()> {
        if self.is_caller_authorized(module) {
            Ok(())
        } else {
            Err(GovernanceError::CallerNotAuthorized(module.clone()))
        }
    }

    pub fn authorized_count(&self) -> usize {
        self.authorized.len()
    }

    fn require_owner(&self, caller: &Account) -> GovernanceResult<()> {
        if *caller == self.owner {
            Ok(())
        } else {
            Err(GovernanceError::Unauthorized(caller.clone()))
        }
    }
}
