//! Ballots, tallies and election contexts for a single 1-of-n contest
use crate::{
    arithmetics::{ElementModP, ElementModQ},
    elgamal::Ciphertext,
    keys::{KeyPair, PublicKey},
    proofs::{constant::ConstantProof, decryption::DecryptionProof, disjunctive::DisjunctiveProof},
};

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct PlaintextSelection {
    /// Candidate name
    pub name: String,

    /// 1 is a vote for the candidate, 0 is no vote
    pub choice: u64,
}

impl PlaintextSelection {
    pub fn new(name: &str, choice: u64) -> Self {
        return Self {
            name: name.to_string(),
            choice,
        };
    }
}

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct PlaintextBallot {
    /// Opaque identifier shared with every encryption of this ballot
    pub ballot_id: String,
    pub selections: Vec<PlaintextSelection>,
}

impl PlaintextBallot {
    pub fn new(ballot_id: &str, selections: Vec<PlaintextSelection>) -> Self {
        return Self {
            ballot_id: ballot_id.to_string(),
            selections,
        };
    }

    /// A ballot with one selection per candidate, voting for `choice` if it is one of them
    pub fn single_choice(ballot_id: &str, names: &[String], choice: Option<&str>) -> Self {
        let selections = names
            .iter()
            .map(|name| PlaintextSelection::new(name, (Some(name.as_str()) == choice) as u64))
            .collect();
        return Self::new(ballot_id, selections);
    }

    pub fn num_selections(&self) -> usize {
        return self.selections.len();
    }

    /// More than one vote cast in total
    pub fn is_overvoted(&self) -> bool {
        return match self.votes_cast() {
            Some(votes_cast) => votes_cast > 1,
            None => true,
        };
    }

    /// Sum of all choices; `None` if it does not fit in a u64
    pub fn votes_cast(&self) -> Option<u64> {
        return self
            .selections
            .iter()
            .try_fold(0u64, |sum, s| sum.checked_add(s.choice));
    }
}

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct CiphertextSelection {
    /// Candidate name, or `PLACEHOLDER_NAME` for the placeholder
    pub name: String,
    pub ciphertext: Ciphertext,
    pub zero_or_one_proof: DisjunctiveProof,
}

/// An encrypted ballot. The last selection is the placeholder, so the plaintexts of all
/// selections always sum to exactly one, which `valid_sum_proof` attests.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct CiphertextBallot {
    pub ballot_id: String,
    pub selections: Vec<CiphertextSelection>,
    pub valid_sum_proof: ConstantProof,
}

impl CiphertextBallot {
    pub fn num_selections(&self) -> usize {
        return self.selections.len();
    }
}

/// Homomorphic sum of one candidate's selections across many ballots
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct CiphertextSelectionTally {
    pub name: String,
    pub total: Ciphertext,
}

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct PlaintextSelectionWithProof {
    pub selection: PlaintextSelection,

    /// The decrypted value is consistent with the ciphertext
    pub decryption_proof: DecryptionProof,
}

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct PlaintextBallotWithProofs {
    pub ballot_id: String,
    pub selections: Vec<PlaintextSelectionWithProof>,
}

impl PlaintextBallotWithProofs {
    pub fn num_selections(&self) -> usize {
        return self.selections.len();
    }

    /// Drop the proofs
    pub fn to_plaintext(&self) -> PlaintextBallot {
        let selections = self
            .selections
            .iter()
            .map(|with_proof| with_proof.selection.clone())
            .collect();
        return PlaintextBallot::new(&self.ballot_id, selections);
    }
}

/// What any observer of the election knows
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct PublicElectionContext {
    pub election_name: String,

    /// Candidates of the 1-of-n contest
    pub names: Vec<String>,
    pub public_key: PublicKey,

    /// Bound into every proof challenge of this election
    pub base_hash: ElementModQ,
}

/// What only the election administrator knows
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct PrivateElectionContext {
    pub election_name: String,
    pub names: Vec<String>,
    pub keypair: KeyPair,
    pub base_hash: ElementModQ,
}

impl PrivateElectionContext {
    pub fn new(
        election_name: &str,
        names: &[&str],
        keypair: KeyPair,
        base_hash: ElementModQ,
    ) -> Self {
        return Self {
            election_name: election_name.to_string(),
            names: names.iter().map(|name| name.to_string()).collect(),
            keypair,
            base_hash,
        };
    }

    pub fn to_public(&self) -> PublicElectionContext {
        return PublicElectionContext {
            election_name: self.election_name.clone(),
            names: self.names.clone(),
            public_key: *self.keypair.get_pk(),
            base_hash: self.base_hash,
        };
    }
}

/// Either view of an election; operations that only need public data accept both
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum ElectionContext {
    Public(PublicElectionContext),
    Private(PrivateElectionContext),
}

impl ElectionContext {
    pub fn get_public_key(&self) -> &ElementModP {
        return match self {
            Self::Public(context) => &context.public_key,
            Self::Private(context) => context.keypair.get_pk(),
        };
    }

    pub fn get_base_hash(&self) -> &ElementModQ {
        return match self {
            Self::Public(context) => &context.base_hash,
            Self::Private(context) => &context.base_hash,
        };
    }

    pub fn get_names(&self) -> &[String] {
        return match self {
            Self::Public(context) => &context.names,
            Self::Private(context) => &context.names,
        };
    }

    pub fn get_election_name(&self) -> &str {
        return match self {
            Self::Public(context) => &context.election_name,
            Self::Private(context) => &context.election_name,
        };
    }

    /// The key pair, only available from the private view
    pub fn get_keypair(&self) -> Option<&KeyPair> {
        return match self {
            Self::Public(_) => None,
            Self::Private(context) => Some(&context.keypair),
        };
    }

    pub fn to_public(&self) -> PublicElectionContext {
        return match self {
            Self::Public(context) => context.clone(),
            Self::Private(context) => context.to_public(),
        };
    }
}

impl From<PublicElectionContext> for ElectionContext {
    fn from(context: PublicElectionContext) -> Self {
        return Self::Public(context);
    }
}

impl From<PrivateElectionContext> for ElectionContext {
    fn from(context: PrivateElectionContext) -> Self {
        return Self::Private(context);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetics::rand_q;

    #[test]
    fn test_overvote() {
        let names = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let ballot = PlaintextBallot::single_choice("b1", &names, Some("B"));
        assert_eq!(ballot.num_selections(), 3);
        assert_eq!(ballot.selections[1], PlaintextSelection::new("B", 1));
        assert!(!ballot.is_overvoted());
        assert!(!PlaintextBallot::single_choice("b2", &names, None).is_overvoted());

        let overvoted = PlaintextBallot::new(
            "b3",
            vec![PlaintextSelection::new("A", 1), PlaintextSelection::new("B", 1)],
        );
        assert!(overvoted.is_overvoted());
        assert_eq!(overvoted.votes_cast(), Some(2));

        let overflowing = PlaintextBallot::new(
            "b4",
            vec![PlaintextSelection::new("A", u64::MAX), PlaintextSelection::new("B", 1)],
        );
        assert_eq!(overflowing.votes_cast(), None);
        assert!(overflowing.is_overvoted());
    }

    #[test]
    fn test_context_views() {
        let keypair = KeyPair::random();
        let private = PrivateElectionContext::new("mayor", &["A", "B"], keypair, rand_q());
        let public = private.to_public();
        assert_eq!(public.public_key, *keypair.get_pk());

        let private: ElectionContext = private.into();
        let public: ElectionContext = public.into();
        assert_eq!(private.get_public_key(), public.get_public_key());
        assert_eq!(private.get_base_hash(), public.get_base_hash());
        assert_eq!(private.get_names(), public.get_names());
        assert_eq!(private.get_election_name(), "mayor");
        assert_eq!(private.to_public(), public.to_public());
        assert_eq!(private.get_keypair(), Some(&keypair));
        assert_eq!(public.get_keypair(), None);
    }
}
