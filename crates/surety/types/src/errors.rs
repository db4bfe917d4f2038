//! Error types for the governance layer

use crate::{Account, Amount, ModuleId};

/// Errors that can occur in governance operations
///
/// Every rejected precondition maps to exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GovernanceError {
    #[error("Contract is currently not operational")]
    ContractPaused,

    #[error("Caller is not contract owner: {0}")]
    Unauthorized(Account),

    #[error("Calling module is not authorized: {0}")]
    CallerNotAuthorized(ModuleId),

    #[error("Caller is not a registered airline: {0}")]
    CallerNotRegistered(Account),

    #[error("Caller airline is not funded: {0}")]
    CallerNotFunded(Account),

    #[error("Airline can not be funded, Ether amount is not enough: offered {offered}, minimum {minimum}")]
    InsufficientFunding { offered: Amount, minimum: Amount },

    #[error("No pending vote for candidate: {0}")]
    NoPendingVote(Account),

    #[error("Duplicate vote by {voter} for candidate {candidate}")]
    DuplicateVote { candidate: Account, voter: Account },

    #[error("Airline already registered: {0}")]
    AlreadyRegistered(Account),

    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: Amount, available: Amount },

    #[error("Collaborator rejected request: {0}")]
    Collaborator(String),
}

/// Result type alias for governance operations
pub type GovernanceResult<T> = Result<T, GovernanceError>;
