//! Consensus Engine — admission of new airlines
//!
//! While the registry is below the consensus threshold, any airline in
//! good standing can admit a candidate directly. At or above the
//! threshold, a nomination opens a vote and the candidate is admitted
//! once a majority of the members registered at that moment have voted.
//!
//! Per candidate: Unregistered -> (Registered | PendingVote),
//! PendingVote -> (PendingVote | Registered). Registered is terminal.

use std::collections::HashMap;

use surety_types::{
    majority_of, Account, AuditJournal, GovernanceError, GovernanceReceipt, GovernanceResult,
    NominationOutcome, ReceiptKind, VoteOutcome, VoteRecord,
};
use tracing::{debug, info};

use crate::membership_ledger::MembershipLedger;

/// Tracks open admission votes and decides direct admission vs vote
pub struct ConsensusEngine {
    /// Open votes, at most one per candidate
    votes: HashMap<Account, VoteRecord>,
    /// Registered count at which admission requires a vote
    threshold: usize,
}

impl ConsensusEngine {
    pub fn new(threshold: usize) -> Self {
        Self {
            votes: HashMap::new(),
            threshold,
        }
    }

    /// Nominate `candidate` for admission on behalf of `by`
    pub fn nominate(
        &mut self,
        candidate: &Account,
        by: &Account,
        ledger: &mut MembershipLedger,
        journal: &mut AuditJournal,
    ) -> GovernanceResult<NominationOutcome> {
        ledger.require_good_standing(by)?;

        if ledger.is_airline_registered(candidate) {
            return Err(GovernanceError::AlreadyRegistered(candidate.clone()));
        }

        if let Some(existing) = self.votes.get(candidate) {
            return Ok(NominationOutcome::VotePending(existing.clone()));
        }

        let registered = ledger.registered_count();
        if registered < self.threshold {
            ledger.register_airline(candidate, by, journal)?;
            return Ok(NominationOutcome::Admitted);
        }

        let record = VoteRecord::open(candidate.clone(), by.clone(), majority_of(registered));

        // A quorum of one is met by the nominator alone.
        if record.is_satisfied() {
            ledger.register_airline(candidate, by, journal)?;
            return Ok(NominationOutcome::Admitted);
        }

        info!(
            candidate = %candidate,
            nominated_by = %by,
            required = record.required_votes,
            "Admission vote opened"
        );

        journal.log_receipt(
            GovernanceReceipt::new(
                ReceiptKind::VoteOpened,
                by.clone(),
                format!("Admission vote opened for {}", candidate),
            )
            .with_metadata("candidate", candidate.0.clone())
            .with_metadata("required_votes", record.required_votes.to_string()),
        );

        self.votes.insert(candidate.clone(), record.clone());
        Ok(NominationOutcome::VoteOpened(record))
    }

    /// Cast a vote by `by` for a pending `candidate`
    pub fn cast_vote(
        &mut self,
        candidate: &Account,
        by: &Account,
        ledger: &mut MembershipLedger,
        journal: &mut AuditJournal,
    ) -> GovernanceResult<VoteOutcome> {
        ledger.require_good_standing(by)?;

        // Registration elsewhere closes the vote.
        if ledger.is_airline_registered(candidate) {
            self.votes.remove(candidate);
            return Err(GovernanceError::NoPendingVote(candidate.clone()));
        }

        let record = self
            .votes
            .get_mut(candidate)
            .ok_or_else(|| GovernanceError::NoPendingVote(candidate.clone()))?;

        if !record.add_vote(by.clone()) {
            return Err(GovernanceError::DuplicateVote {
                candidate: candidate.clone(),
                voter: by.clone(),
            });
        }

        let count = record.vote_count();
        let required = record.required_votes;

        debug!(
            candidate = %candidate,
            voter = %by,
            votes = count,
            required = required,
            "Vote recorded"
        );

        journal.log_receipt(
            GovernanceReceipt::new(
                ReceiptKind::VoteCast,
                by.clone(),
                format!("Vote for {}", candidate),
            )
            .with_metadata("candidate", candidate.0.clone())
            .with_metadata("votes", count.to_string()),
        );

        if count < required {
            return Ok(VoteOutcome::VoteRecorded { count, required });
        }

        self.votes.remove(candidate);
        ledger.register_airline(candidate, by, journal)?;

        info!(candidate = %candidate, votes = count, "Consensus reached");

        Ok(VoteOutcome::ConsensusReached)
    }

    /// Register `candidate` outside of consensus, discarding any open vote
    pub fn admit_directly(
        &mut self,
        candidate: &Account,
        actor: &Account,
        ledger: &mut MembershipLedger,
        journal: &mut AuditJournal,
    ) -> GovernanceResult<()> {
        ledger.register_airline(candidate, actor, journal)?;

        if let Some(record) = self.votes.remove(candidate) {
            info!(
                candidate = %candidate,
                votes = record.vote_count(),
                "Open vote discarded on direct registration"
            );
        }
        Ok(())
    }

    // --- Query methods ---

    /// The open vote for `candidate`, if any
    pub fn pending_vote(&self, candidate: &Account) -> Option<&VoteRecord> {
        self.votes.get(candidate)
    }

    /// Number of open votes
    pub fn pending_count(&self) -> usize {
        self.votes.len()
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Whether admission currently requires a vote
    pub fn requires_vote(&self, ledger: &MembershipLedger) -> bool {
        ledger.registered_count() >= self.threshold
    }
}
