//! Encrypting, validating, tallying and decrypting ballots of a 1-of-n contest
use crate::{
    arithmetics::{ElementModQ, TWO_MOD_Q, ZERO_MOD_Q},
    election::{
        CiphertextBallot, CiphertextSelection, CiphertextSelectionTally, ElectionContext,
        PlaintextBallot, PlaintextBallotWithProofs, PlaintextSelection,
        PlaintextSelectionWithProof, PrivateElectionContext,
    },
    elgamal::{add_all, Ciphertext},
    errors::{ElectionError, Result},
    nonces::Nonces,
    proofs::{constant::ConstantProof, decryption::DecryptionProof, disjunctive::DisjunctiveProof},
    PLACEHOLDER_NAME,
};
use indexmap::IndexMap;
use log::{debug, warn};

/// Every ballot, placeholder included, encrypts exactly this many votes
const VOTES_PER_BALLOT: u64 = 1;

/// Encrypt one selection with `seed_nonce` as the encryption nonce and attach a proof that it
/// encrypts 0 or 1. Returns the encryption nonce alongside.
pub fn encrypt_selection(
    context: &ElectionContext,
    selection: &PlaintextSelection,
    seed_nonce: &ElementModQ,
) -> Result<(CiphertextSelection, ElementModQ)> {
    let public_key = context.get_public_key();
    let ciphertext = Ciphertext::encrypt(selection.choice, seed_nonce, public_key)?;
    let zero_or_one_proof = DisjunctiveProof::make(
        &ciphertext,
        selection.choice,
        seed_nonce,
        public_key,
        context.get_base_hash(),
        seed_nonce,
    )?;
    let encrypted = CiphertextSelection {
        name: selection.name.clone(),
        ciphertext,
        zero_or_one_proof,
    };
    return Ok((encrypted, *seed_nonce));
}

/// Encrypt every selection of the ballot plus a placeholder that brings the number of votes
/// to exactly one, and prove that sum. Choices other than 0 or 1 are malformed, and overvoted
/// ballots are rejected.
pub fn encrypt_ballot(
    context: &ElectionContext,
    ballot: &PlaintextBallot,
    seed_nonce: &ElementModQ,
) -> Result<CiphertextBallot> {
    if let Some(selection) = ballot.selections.iter().find(|s| s.choice > 1) {
        return Err(ElectionError::Malformed(format!(
            "ballot {}: choice {} for {} is neither 0 nor 1",
            ballot.ballot_id, selection.choice, selection.name
        )));
    }
    if ballot.is_overvoted() {
        warn!("ballot {} is overvoted", ballot.ballot_id);
        return Err(ElectionError::Overvote(ballot.ballot_id.clone()));
    }
    if ballot.selections.iter().any(|s| s.name == PLACEHOLDER_NAME) {
        return Err(ElectionError::Malformed(format!(
            "ballot {} uses the reserved name {}",
            ballot.ballot_id, PLACEHOLDER_NAME
        )));
    }

    // one nonce per selection, the last one for the placeholder
    let num_selections = ballot.num_selections();
    let nonces = Nonces::new(seed_nonce).take(num_selections + 1);

    let mut selections = Vec::with_capacity(num_selections + 1);
    for (selection, nonce) in ballot.selections.iter().zip(&nonces) {
        let (encrypted, _) = encrypt_selection(context, selection, nonce)?;
        selections.push(encrypted);
    }
    let votes_cast = ballot.selections.iter().filter(|s| s.choice == 1).count() as u64;
    let placeholder = PlaintextSelection::new(PLACEHOLDER_NAME, (votes_cast == 0) as u64);
    let (encrypted, _) = encrypt_selection(context, &placeholder, &nonces[num_selections])?;
    selections.push(encrypted);

    let total = add_all(selections.iter().map(|s| &s.ciphertext))
        .ok_or_else(|| ElectionError::Malformed("ballot has no selections".to_string()))?;
    let aggregate_nonce = nonces.iter().fold(ZERO_MOD_Q, |sum, nonce| sum + *nonce);
    let valid_sum_proof = ConstantProof::make(
        &total,
        votes_cast + placeholder.choice,
        &aggregate_nonce,
        context.get_public_key(),
        seed_nonce,
        context.get_base_hash(),
    );

    debug!(
        "encrypted ballot {} with {} selections",
        ballot.ballot_id,
        selections.len()
    );
    return Ok(CiphertextBallot {
        ballot_id: ballot.ballot_id.clone(),
        selections,
        valid_sum_proof,
    });
}

/// Encrypt a batch, one nonce of the `seed_nonce` sequence per ballot. The first failure fails
/// the whole batch.
pub fn encrypt_ballots(
    context: &ElectionContext,
    ballots: &[PlaintextBallot],
    seed_nonce: &ElementModQ,
) -> Result<Vec<CiphertextBallot>> {
    return ballots
        .iter()
        .zip(Nonces::new(seed_nonce).iter())
        .map(|(ballot, nonce)| encrypt_ballot(context, ballot, &nonce))
        .collect();
}

pub fn validate_encrypted_selection(
    context: &ElectionContext,
    selection: &CiphertextSelection,
) -> bool {
    return selection.zero_or_one_proof.is_valid(
        &selection.ciphertext,
        context.get_public_key(),
        context.get_base_hash(),
    );
}

/// Check every selection's proof, then check the sum proof against the homomorphic sum of the
/// selections as they appear on the ballot. The sum proof must claim exactly one vote.
pub fn validate_encrypted_ballot(context: &ElectionContext, ballot: &CiphertextBallot) -> bool {
    if ballot.valid_sum_proof.constant != VOTES_PER_BALLOT {
        warn!(
            "ballot {} claims {} votes instead of {}",
            ballot.ballot_id, ballot.valid_sum_proof.constant, VOTES_PER_BALLOT
        );
        return false;
    }
    for selection in &ballot.selections {
        if !validate_encrypted_selection(context, selection) {
            warn!(
                "ballot {}: selection {} failed validation",
                ballot.ballot_id, selection.name
            );
            return false;
        }
    }
    let total = match add_all(ballot.selections.iter().map(|s| &s.ciphertext)) {
        Some(total) => total,
        None => {
            warn!("ballot {} has no selections", ballot.ballot_id);
            return false;
        }
    };
    return ballot.valid_sum_proof.is_valid(
        &total,
        context.get_public_key(),
        context.get_base_hash(),
    );
}

/// Decrypt one selection with the secret key and prove the decryption, using `seed` for the proof
pub fn decrypt_selection(
    context: &PrivateElectionContext,
    selection: &CiphertextSelection,
    seed: &ElementModQ,
) -> Result<PlaintextSelectionWithProof> {
    let secret_key = context.keypair.get_sk();
    let choice = selection.ciphertext.decrypt(secret_key)?;
    let decryption_proof =
        DecryptionProof::make(&selection.ciphertext, secret_key, seed, &context.base_hash);
    return Ok(PlaintextSelectionWithProof {
        selection: PlaintextSelection::new(&selection.name, choice),
        decryption_proof,
    });
}

/// Decrypt every selection but the trailing placeholder
pub fn decrypt_ballot(
    context: &PrivateElectionContext,
    ballot: &CiphertextBallot,
    seed: &ElementModQ,
) -> Result<PlaintextBallotWithProofs> {
    let num_candidates = ballot.num_selections().saturating_sub(1);
    let selections = ballot.selections[..num_candidates]
        .iter()
        .zip(Nonces::new(seed).iter())
        .map(|(selection, nonce)| decrypt_selection(context, selection, &nonce))
        .collect::<Result<Vec<PlaintextSelectionWithProof>>>()?;
    debug!("decrypted ballot {}", ballot.ballot_id);
    return Ok(PlaintextBallotWithProofs {
        ballot_id: ballot.ballot_id.clone(),
        selections,
    });
}

pub fn validate_decrypted_selection(
    context: &ElectionContext,
    plaintext: &PlaintextSelectionWithProof,
    ciphertext: &CiphertextSelection,
) -> bool {
    if plaintext.selection.name != ciphertext.name {
        warn!(
            "decrypted selection {} does not match ciphertext selection {}",
            plaintext.selection.name, ciphertext.name
        );
        return false;
    }
    return plaintext.decryption_proof.is_valid(
        plaintext.selection.choice,
        &ciphertext.ciphertext,
        context.get_public_key(),
        context.get_base_hash(),
    );
}

/// Check each decrypted selection against the selection at the same position of `ciphertext`
pub fn validate_decrypted_ballot(
    context: &ElectionContext,
    plaintext: &PlaintextBallotWithProofs,
    ciphertext: &CiphertextBallot,
) -> bool {
    if plaintext.ballot_id != ciphertext.ballot_id
        || plaintext.num_selections() > ciphertext.num_selections()
    {
        warn!(
            "decrypted ballot {} does not line up with ciphertext ballot {}",
            plaintext.ballot_id, ciphertext.ballot_id
        );
        return false;
    }
    return plaintext
        .selections
        .iter()
        .zip(&ciphertext.selections)
        .all(|(plaintext, ciphertext)| validate_decrypted_selection(context, plaintext, ciphertext));
}

/// Homomorphically add up each name's selections across all ballots, placeholder included.
/// Names appear in the order they are first seen.
pub fn tally_encrypted_ballots(ballots: &[CiphertextBallot]) -> Vec<CiphertextSelectionTally> {
    let mut totals: IndexMap<&str, Ciphertext> = IndexMap::new();
    for ballot in ballots {
        for selection in &ballot.selections {
            totals
                .entry(selection.name.as_str())
                .and_modify(|total| *total = *total + selection.ciphertext)
                .or_insert(selection.ciphertext);
        }
    }
    debug!("tallied {} ballots into {} totals", ballots.len(), totals.len());
    return totals
        .into_iter()
        .map(|(name, total)| CiphertextSelectionTally {
            name: name.to_string(),
            total,
        })
        .collect();
}

pub fn decrypt_tally(
    context: &PrivateElectionContext,
    selection: &CiphertextSelectionTally,
    seed: &ElementModQ,
) -> Result<PlaintextSelectionWithProof> {
    let secret_key = context.keypair.get_sk();
    let choice = selection.total.decrypt(secret_key)?;
    let decryption_proof =
        DecryptionProof::make(&selection.total, secret_key, seed, &context.base_hash);
    return Ok(PlaintextSelectionWithProof {
        selection: PlaintextSelection::new(&selection.name, choice),
        decryption_proof,
    });
}

/// Decrypt every tally, one nonce of the `seed` sequence per entry
pub fn decrypt_tallies(
    context: &PrivateElectionContext,
    tally: &[CiphertextSelectionTally],
    seed: &ElementModQ,
) -> Result<Vec<PlaintextSelectionWithProof>> {
    return tally
        .iter()
        .zip(Nonces::new(seed).iter())
        .map(|(selection, nonce)| decrypt_tally(context, selection, &nonce))
        .collect();
}

/// Check the decrypted tally by re-deriving a decryption proof for its ciphertext from the
/// fixed seed 2 rather than trusting the attached one. Needs the secret key, so a public
/// context never validates.
pub fn validate_tally(
    context: &ElectionContext,
    tally_plaintext: &PlaintextSelectionWithProof,
    tally_ciphertext: &CiphertextSelectionTally,
) -> bool {
    let keypair = match context.get_keypair() {
        Some(keypair) => keypair,
        None => {
            warn!("tally validation requires the private election context");
            return false;
        }
    };
    if tally_plaintext.selection.name != tally_ciphertext.name {
        warn!(
            "decrypted tally {} does not match ciphertext tally {}",
            tally_plaintext.selection.name, tally_ciphertext.name
        );
        return false;
    }
    let proof = DecryptionProof::make(
        &tally_ciphertext.total,
        keypair.get_sk(),
        &TWO_MOD_Q,
        context.get_base_hash(),
    );
    return proof.is_valid(
        tally_plaintext.selection.choice,
        &tally_ciphertext.total,
        keypair.get_pk(),
        context.get_base_hash(),
    );
}

pub fn validate_tallies(
    context: &ElectionContext,
    tally_plaintext: &[PlaintextSelectionWithProof],
    tally_ciphertext: &[CiphertextSelectionTally],
) -> bool {
    if tally_plaintext.len() != tally_ciphertext.len() {
        warn!(
            "{} decrypted tallies for {} ciphertext tallies",
            tally_plaintext.len(),
            tally_ciphertext.len()
        );
        return false;
    }
    return tally_plaintext
        .iter()
        .zip(tally_ciphertext)
        .all(|(plaintext, ciphertext)| validate_tally(context, plaintext, ciphertext));
}

/// Add up plaintext ballots per candidate, in the candidate order of the context
pub fn tally_plaintext_ballots(
    context: &ElectionContext,
    ballots: &[PlaintextBallot],
) -> PlaintextBallot {
    let mut totals: IndexMap<&str, u64> = IndexMap::new();
    for selection in ballots.iter().flat_map(|ballot| &ballot.selections) {
        *totals.entry(selection.name.as_str()).or_insert(0) += selection.choice;
    }
    let selections = context
        .get_names()
        .iter()
        .map(|name| {
            let total = totals.get(name.as_str()).copied().unwrap_or(0);
            PlaintextSelection::new(name, total)
        })
        .collect();
    return PlaintextBallot::new("TOTALS", selections);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        arithmetics::{rand_q, ElementModP, ONE_MOD_Q},
        election::PrivateElectionContext,
        keys::KeyPair,
    };
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::collections::BTreeSet;

    fn private_context() -> PrivateElectionContext {
        let keypair = KeyPair::random();
        return PrivateElectionContext::new("test election", &["A", "B"], keypair, rand_q());
    }

    fn random_ballots(
        context: &PrivateElectionContext,
        count: usize,
        seed: u64,
    ) -> Vec<PlaintextBallot> {
        let mut rng = StdRng::seed_from_u64(seed);
        return (0..count)
            .map(|i| {
                // index == names.len() is an undervote
                let index = rng.gen_range(0..=context.names.len());
                let choice = context.names.get(index).map(|name| name.as_str());
                PlaintextBallot::single_choice(&format!("ballot-{}", i), &context.names, choice)
            })
            .collect();
    }

    #[test]
    fn test_encrypt_decrypt_ballot() {
        let private = private_context();
        let context = ElectionContext::from(private.clone());
        let ballot = PlaintextBallot::new(
            "ballot-1",
            vec![PlaintextSelection::new("A", 1), PlaintextSelection::new("B", 0)],
        );
        let encrypted = encrypt_ballot(&context, &ballot, &rand_q()).unwrap();
        assert_eq!(encrypted.num_selections(), 3);
        assert_eq!(encrypted.selections[2].name, PLACEHOLDER_NAME);
        assert_eq!(encrypted.valid_sum_proof.constant, 1);
        assert!(validate_encrypted_ballot(&context, &encrypted));
        // validation only needs public data
        let public = ElectionContext::from(private.to_public());
        assert!(validate_encrypted_ballot(&public, &encrypted));

        let decrypted = decrypt_ballot(&private, &encrypted, &rand_q()).unwrap();
        assert_eq!(decrypted.to_plaintext(), ballot);
        assert!(validate_decrypted_ballot(&public, &decrypted, &encrypted));
    }

    #[test]
    fn test_undervote_fills_placeholder() {
        let private = private_context();
        let context = ElectionContext::from(private.clone());
        let ballot = PlaintextBallot::single_choice("empty", &private.names, None);
        let encrypted = encrypt_ballot(&context, &ballot, &rand_q()).unwrap();
        assert!(validate_encrypted_ballot(&context, &encrypted));
        let placeholder = &encrypted.selections[2];
        assert_eq!(placeholder.ciphertext.decrypt(private.keypair.get_sk()), Ok(1));
    }

    #[test]
    fn test_encryption_deterministic() {
        let context = ElectionContext::from(private_context());
        let ballot = PlaintextBallot::single_choice("b", context.get_names(), Some("B"));
        let seed = rand_q();
        assert_eq!(
            encrypt_ballot(&context, &ballot, &seed).unwrap(),
            encrypt_ballot(&context, &ballot, &seed).unwrap()
        );
        let selection = PlaintextSelection::new("A", 0);
        let (encrypted, nonce) = encrypt_selection(&context, &selection, &seed).unwrap();
        assert_eq!(nonce, seed);
        assert!(validate_encrypted_selection(&context, &encrypted));
    }

    #[test]
    fn test_rejected_ballots() {
        let context = ElectionContext::from(private_context());
        let overvoted = PlaintextBallot::new(
            "over",
            vec![PlaintextSelection::new("A", 1), PlaintextSelection::new("B", 1)],
        );
        assert_eq!(
            encrypt_ballot(&context, &overvoted, &rand_q()),
            Err(ElectionError::Overvote("over".to_string()))
        );

        let reserved =
            PlaintextBallot::new("reserved", vec![PlaintextSelection::new(PLACEHOLDER_NAME, 0)]);
        assert!(matches!(
            encrypt_ballot(&context, &reserved, &rand_q()),
            Err(ElectionError::Malformed(_))
        ));

        let overflowing = PlaintextBallot::new(
            "overflow",
            vec![PlaintextSelection::new("A", u64::MAX), PlaintextSelection::new("B", 1)],
        );
        assert!(matches!(
            encrypt_ballot(&context, &overflowing, &rand_q()),
            Err(ElectionError::Malformed(_))
        ));
        let two = PlaintextBallot::new("two", vec![PlaintextSelection::new("A", 2)]);
        assert!(matches!(
            encrypt_ballot(&context, &two, &rand_q()),
            Err(ElectionError::Malformed(_))
        ));

        let good = PlaintextBallot::single_choice("good", context.get_names(), Some("A"));
        assert_eq!(
            encrypt_ballots(&context, &[good, overvoted], &rand_q()),
            Err(ElectionError::Overvote("over".to_string()))
        );
    }

    #[test]
    fn test_tampered_ballot_rejected() {
        let context = ElectionContext::from(private_context());
        let ballot = PlaintextBallot::single_choice("b", context.get_names(), Some("A"));
        let encrypted = encrypt_ballot(&context, &ballot, &rand_q()).unwrap();

        // a valid encryption of 1 for B, with its own valid proof, still breaks the sum
        let (forged, _) =
            encrypt_selection(&context, &PlaintextSelection::new("B", 1), &rand_q()).unwrap();
        assert!(validate_encrypted_selection(&context, &forged));
        let mut tampered = encrypted.clone();
        tampered.selections[1] = forged;
        assert!(!validate_encrypted_ballot(&context, &tampered));

        // swapping ciphertexts between selections breaks the disjunctive proofs
        let mut swapped = encrypted.clone();
        swapped.selections[0].ciphertext = encrypted.selections[1].ciphertext;
        assert!(!validate_encrypted_ballot(&context, &swapped));

        let mut reordered = encrypted.clone();
        reordered.selections.swap(0, 1);
        assert!(validate_encrypted_ballot(&context, &reordered));

        let mut wrong_constant = encrypted;
        wrong_constant.valid_sum_proof.constant = 2;
        assert!(!validate_encrypted_ballot(&context, &wrong_constant));
    }

    #[test]
    fn test_double_vote_rejected() {
        let context = ElectionContext::from(private_context());
        let choices = [("A", 1), ("B", 1), (PLACEHOLDER_NAME, 0)];
        let nonces = Nonces::new(&rand_q()).take(choices.len());
        let selections: Vec<CiphertextSelection> = choices
            .iter()
            .zip(&nonces)
            .map(|((name, choice), nonce)| {
                let selection = PlaintextSelection::new(name, *choice);
                encrypt_selection(&context, &selection, nonce).unwrap().0
            })
            .collect();
        let total = add_all(selections.iter().map(|s| &s.ciphertext)).unwrap();
        let aggregate_nonce = nonces[0] + nonces[1] + nonces[2];
        let valid_sum_proof = ConstantProof::make(
            &total,
            2,
            &aggregate_nonce,
            context.get_public_key(),
            &rand_q(),
            context.get_base_hash(),
        );
        // every proof on the ballot is sound on its own
        assert!(valid_sum_proof.is_valid(&total, context.get_public_key(), context.get_base_hash()));
        assert!(selections.iter().all(|s| validate_encrypted_selection(&context, s)));

        let ballot = CiphertextBallot {
            ballot_id: "double".to_string(),
            selections,
            valid_sum_proof,
        };
        assert!(!validate_encrypted_ballot(&context, &ballot));
    }

    #[test]
    fn test_tally() {
        let private = private_context();
        let context = ElectionContext::from(private.clone());
        let ballots = random_ballots(&private, 4, 2021);
        let encrypted = encrypt_ballots(&context, &ballots, &rand_q()).unwrap();
        assert_eq!(encrypted.len(), ballots.len());
        // no group element repeats across ballots and selections
        let mut elements: Vec<ElementModP> = vec![];
        for ballot in &encrypted {
            elements.push(ballot.valid_sum_proof.pad);
            elements.push(ballot.valid_sum_proof.data);
            for selection in &ballot.selections {
                let proof = &selection.zero_or_one_proof;
                elements.push(*selection.ciphertext.get_pad());
                elements.push(*selection.ciphertext.get_data());
                elements.extend([proof.a0, proof.b0, proof.a1, proof.b1]);
            }
        }
        let distinct: BTreeSet<ElementModP> = elements.iter().copied().collect();
        assert_eq!(distinct.len(), elements.len());

        let tally = tally_encrypted_ballots(&encrypted);
        let names: Vec<&str> = tally.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", PLACEHOLDER_NAME]);

        let decrypted = decrypt_tallies(&private, &tally, &rand_q()).unwrap();
        assert!(validate_tallies(&context, &decrypted, &tally));
        for (plaintext, ciphertext) in decrypted.iter().zip(&tally) {
            assert!(plaintext.decryption_proof.is_valid(
                plaintext.selection.choice,
                &ciphertext.total,
                context.get_public_key(),
                context.get_base_hash(),
            ));
        }

        let expected = tally_plaintext_ballots(&context, &ballots);
        let candidates: Vec<PlaintextSelection> = decrypted
            .iter()
            .map(|d| d.selection.clone())
            .filter(|s| s.name != PLACEHOLDER_NAME)
            .collect();
        assert_eq!(expected.ballot_id, "TOTALS");
        assert_eq!(candidates, expected.selections);
        let votes: u64 = decrypted.iter().map(|d| d.selection.choice).sum();
        assert_eq!(votes, ballots.len() as u64);

        // the public view cannot re-derive proofs
        let public = ElectionContext::from(private.to_public());
        assert!(!validate_tallies(&public, &decrypted, &tally));
        assert!(!validate_tallies(&context, &decrypted[1..], &tally));
    }

    #[test]
    fn test_tally_missing_ballot() {
        let private = private_context();
        let context = ElectionContext::from(private.clone());
        let ballots = vec![
            PlaintextBallot::single_choice("b1", &private.names, Some("A")),
            PlaintextBallot::single_choice("b2", &private.names, Some("A")),
            PlaintextBallot::single_choice("b3", &private.names, Some("B")),
        ];
        let encrypted = encrypt_ballots(&context, &ballots, &rand_q()).unwrap();
        let full = tally_encrypted_ballots(&encrypted);
        let decrypted = decrypt_tallies(&private, &full, &rand_q()).unwrap();
        assert!(validate_tallies(&context, &decrypted, &full));

        // the tally of all but the first ballot does not match the published totals
        let partial = tally_encrypted_ballots(&encrypted[1..]);
        assert!(!validate_tallies(&context, &decrypted, &partial));
    }

    #[test]
    fn test_decrypted_ballot_mismatch() {
        let private = private_context();
        let context = ElectionContext::from(private.clone());
        let b1 = PlaintextBallot::single_choice("b1", &private.names, Some("A"));
        let b2 = PlaintextBallot::single_choice("b2", &private.names, Some("B"));
        let encrypted = encrypt_ballots(&context, &[b1, b2], &ONE_MOD_Q).unwrap();
        let decrypted = decrypt_ballot(&private, &encrypted[0], &rand_q()).unwrap();
        assert!(validate_decrypted_ballot(&context, &decrypted, &encrypted[0]));

        let mut relabeled = decrypted.clone();
        relabeled.ballot_id = "b2".to_string();
        assert!(!validate_decrypted_ballot(&context, &relabeled, &encrypted[1]));

        let mut flipped = decrypted;
        flipped.selections[0].selection.choice = 0;
        assert!(!validate_decrypted_ballot(&context, &flipped, &encrypted[0]));
    }

    #[test]
    fn test_plaintext_tally_order() {
        let context = ElectionContext::from(private_context());
        let ballots = vec![
            PlaintextBallot::new("b1", vec![PlaintextSelection::new("B", 1)]),
            PlaintextBallot::new("b2", vec![PlaintextSelection::new("B", 1)]),
        ];
        let totals = tally_plaintext_ballots(&context, &ballots);
        assert_eq!(
            totals.selections,
            vec![PlaintextSelection::new("A", 0), PlaintextSelection::new("B", 2)]
        );
    }
}
