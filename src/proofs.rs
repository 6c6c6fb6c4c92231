//! Non-interactive Chaum-Pedersen proofs, made non-interactive with the challenge hash in
//! `crate::hash`.
//!
//! Every proof offers two ways to check it:
//!
//! * `verify`: run every named sub-check and return the full `Verification` record
//! * `is_valid`: the same checks collapsed into a `bool`; a rejection is logged at `warn` level
//!   together with the names of the checks that failed
//!
//! Neither ever panics or returns an error: an invalid proof is an expected input.
use std::fmt;

pub mod constant;
pub mod decryption;
pub mod disjunctive;
pub mod generic;

/// The outcome of each named sub-check of a proof verification, in the order they were run
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Verification {
    checks: Vec<(&'static str, bool)>,
}

impl Verification {
    pub fn new() -> Self {
        return Self::default();
    }

    /// Record the outcome of one sub-check
    pub fn check(&mut self, name: &'static str, passed: bool) -> &mut Self {
        self.checks.push((name, passed));
        return self;
    }

    /// Fold in all checks of a nested verification
    pub fn extend(&mut self, other: &Verification) -> &mut Self {
        self.checks.extend_from_slice(&other.checks);
        return self;
    }

    /// The recorded outcome of the named check, if it was run
    pub fn get(&self, name: &str) -> Option<bool> {
        return self
            .checks
            .iter()
            .find(|(check, _)| *check == name)
            .map(|(_, passed)| *passed);
    }

    /// True iff every recorded check passed
    pub fn is_ok(&self) -> bool {
        return self.checks.iter().all(|(_, passed)| *passed);
    }

    pub fn failures(&self) -> Vec<&'static str> {
        return self
            .checks
            .iter()
            .filter(|(_, passed)| !passed)
            .map(|(check, _)| *check)
            .collect();
    }

    /// Collapse into a verdict, logging the failing checks under `proof` on rejection
    pub(crate) fn log_verdict(&self, proof: &str) -> bool {
        let ok = self.is_ok();
        if !ok {
            log::warn!("{} rejected: {}", proof, self);
        }
        return ok;
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            return write!(f, "all {} checks passed", self.checks.len());
        }
        return write!(f, "failed checks [{}]", self.failures().join(", "));
    }
}
