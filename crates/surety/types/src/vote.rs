//! Admission votes and their outcomes
//!
//! Once the registry is large enough, a new airline is admitted only after
//! a majority of registered members vote for it. The quorum is fixed when
//! the vote opens and does not follow later changes in membership.

use crate::Account;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An open admission vote for a candidate airline
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    /// The airline seeking admission
    pub candidate: Account,
    /// Members that have voted for the candidate
    pub voters: BTreeSet<Account>,
    /// Votes needed for admission, fixed at creation
    pub required_votes: usize,
    /// Member that opened the vote
    pub opened_by: Account,
    /// When the vote was opened
    pub opened_at: DateTime<Utc>,
}

impl VoteRecord {
    /// Open a vote. The nominator's vote is counted immediately.
    pub fn open(candidate: Account, opened_by: Account, required_votes: usize) -> Self {
        let mut voters = BTreeSet::new();
        voters.insert(opened_by.clone());
        Self {
            candidate,
            voters,
            required_votes,
            opened_by,
            opened_at: Utc::now(),
        }
    }

    pub fn has_voted(&self, voter: &Account) -> bool {
        self.voters.contains(voter)
    }

    /// Record a vote. Returns false if the voter already voted.
    pub fn add_vote(&mut self, voter: Account) -> bool {
        self.voters.insert(voter)
    }

    pub fn vote_count(&self) -> usize {
        self.voters.len()
    }

    pub fn is_satisfied(&self) -> bool {
        self.voters.len() >= self.required_votes
    }
}

/// Majority quorum: ceil(registered / 2)
pub fn majority_of(registered: usize) -> usize {
    registered.div_ceil(2)
}

/// Result of nominating a candidate
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NominationOutcome {
    /// Candidate was registered without a vote
    Admitted,
    /// A new vote was opened for the candidate
    VoteOpened(VoteRecord),
    /// A vote was already open; the existing record is returned unchanged
    VotePending(VoteRecord),
}

impl NominationOutcome {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Self::Admitted)
    }

    /// The vote record, if the candidate is awaiting votes
    pub fn vote(&self) -> Option<&VoteRecord> {
        match self {
            Self::Admitted => None,
            Self::VoteOpened(record) | Self::VotePending(record) => Some(record),
        }
    }
}

/// Result of casting a vote
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteOutcome {
    /// Vote counted, quorum not yet met
    VoteRecorded { count: usize, required: usize },
    /// Quorum met; the candidate is now registered
    ConsensusReached,
}
