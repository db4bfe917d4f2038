//! Shared fixtures for integration tests.

#![allow(dead_code)]

use surety_governance::{GovernanceContext, GovernanceFacade};
use surety_types::{Account, Amount, ModuleId, NominationOutcome, VoteOutcome, Wallets};
use tracing_subscriber::EnvFilter;

/// Install a test subscriber once; respects `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// A deployed registry: storage context, an authorized app facade, and
/// wallets holding 100 units for each test account.
pub struct Deployment {
    pub ctx: GovernanceContext,
    pub app: GovernanceFacade,
    pub wallets: Wallets,
    pub owner: Account,
    pub accounts: Vec<Account>,
}

pub fn deploy() -> Deployment {
    init_tracing();

    let owner = Account::new("0x627306090abaB3A6e1400e9345bC60c78a8BEf57");
    let app_module = ModuleId::new("flight-surety-app");

    let mut ctx = GovernanceContext::new(owner.clone());
    ctx.authorize_caller(app_module.clone(), &owner)
        .expect("owner can authorize the app module");

    let accounts: Vec<Account> = std::iter::once(owner.clone())
        .chain((1..10).map(|i| Account::new(format!("0xtest{:02}", i))))
        .collect();

    let mut wallets = Wallets::new();
    for account in &accounts {
        wallets.credit(account, Amount::whole_units(100));
    }

    Deployment {
        ctx,
        app: GovernanceFacade::new(app_module, owner.clone()),
        wallets,
        owner,
        accounts,
    }
}

impl Deployment {
    /// Fund `account` with the minimum, paid by itself
    pub fn fund(&mut self, account: &Account) {
        self.app
            .fund_airline(
                &mut self.ctx,
                &mut self.wallets,
                account,
                Amount::whole_units(10),
                account,
            )
            .expect("minimum funding is accepted");
    }

    /// Fund the owner, then admit and fund airlines until `n` funded
    /// members are registered. Below the threshold the owner admits
    /// directly; past it the earliest members vote the next one in.
    /// Returns the members in order.
    pub fn grow_to(&mut self, n: usize) -> Vec<Account> {
        let owner = self.owner.clone();
        self.fund(&owner);

        let mut members = vec![owner.clone()];
        for account in self.accounts[1..n].to_vec() {
            let outcome = self
                .app
                .register_airline(&mut self.ctx, &account, &owner)
                .expect("funded owner can nominate");
            if let NominationOutcome::VoteOpened(_) = outcome {
                for voter in &members[1..] {
                    let vote = self
                        .app
                        .cast_vote(&mut self.ctx, &account, voter)
                        .expect("funded member can vote");
                    if vote == VoteOutcome::ConsensusReached {
                        break;
                    }
                }
            }
            assert!(self.ctx.is_airline_registered(&account));
            self.fund(&account);
            members.push(account);
        }
        members
    }
}
