//! Surety Governance Runtime
//!
//! The governance core of the airline registry: it decides, for every
//! privileged call, whether the caller is entitled to act.
//!
//! ## Core Components
//!
//! - **OperationalSwitch** — owner-controlled pause flag checked by every mutation
//! - **AuthorizationRegistry** — allow-list of logic modules that may mutate storage
//! - **MembershipLedger** — registration and funding state per airline
//! - **ConsensusEngine** — direct admission below the threshold, majority vote above it
//! - **GovernanceContext** — the storage layer owning all of the above
//! - **GovernanceFacade** — the logic layer that checks caller standing and delegates
//!
//! All operations are synchronous and take `&mut` for mutation, so calls
//! are serialized. A call either commits fully or fails without effects.

pub mod authorization_registry;
pub mod config;
pub mod consensus_engine;
pub mod context;
pub mod facade;
pub mod membership_ledger;
pub mod operational_switch;

pub use authorization_registry::AuthorizationRegistry;
pub use config::{ConfigError, GovernanceConfig};
pub use consensus_engine::ConsensusEngine;
pub use context::GovernanceContext;
pub use facade::{FlightSchedule, GovernanceFacade};
pub use membership_ledger::MembershipLedger;
pub use operational_switch::OperationalSwitch;
