//! Surety Domain Types
//!
//! This crate defines the domain types for the airline governance registry:
//! the identities that act on it, the records it keeps, and the outcomes
//! and receipts its operations produce.
//!
//! # Key Concepts
//!
//! - **Airline**: an account that may hold registration and funding status.
//! - **Funding threshold**: the minimum deposit before an airline is funded.
//! - **Vote Record**: an open admission vote for a candidate airline, with a
//!   quorum fixed when the vote opens.
//! - **Caller Authorization**: the allow-list of logic modules that may
//!   mutate the registry.
//! - **Audit Journal**: receipts for every committed governance change.
//!
//! # Architecture
//!
//! This is a pure types crate with no runtime dependencies. All types
//! implement `Clone`, `Debug`, `Serialize`, `Deserialize`. IDs use the
//! newtype pattern and implement `Display` and `new()`.

#![deny(unsafe_code)]

mod airline;
mod amount;
mod audit;
mod errors;
mod flight;
mod identity;
mod vote;
mod wallet;

pub use airline::*;
pub use amount::*;
pub use audit::*;
pub use errors::*;
pub use flight::*;
pub use identity::*;
pub use vote::*;
pub use wallet::*;
