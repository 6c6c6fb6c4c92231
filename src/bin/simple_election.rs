//! A sample election procedure
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
use simple_electionguard::{
    arithmetics::rand_q,
    election::{ElectionContext, PlaintextBallot, PrivateElectionContext},
    hash::{hash_elems, Hashable},
    keys::KeyPair,
    voting, PLACEHOLDER_NAME,
};

const ELECTION_NAME: &str = "simple election";
const CANDIDATES: [&str; 3] = ["Alice", "Bob", "Carol"];
const VOTERS: usize = 10;
const RNG_SEED: u64 = 2020;

fn main() {
    env_logger::init();

    // the base hash binds every proof to this election and its key
    let keypair = KeyPair::random();
    let candidates: Vec<Hashable> = CANDIDATES.iter().map(|&name| Hashable::Str(name)).collect();
    let base_hash = hash_elems(&[
        ELECTION_NAME.into(),
        Hashable::List(candidates),
        keypair.get_pk().into(),
    ]);
    let private = PrivateElectionContext::new(ELECTION_NAME, &CANDIDATES, keypair, base_hash);
    let public = ElectionContext::from(private.to_public());

    // Each voter picks a candidate or abstains
    let mut rng = StdRng::seed_from_u64(RNG_SEED);
    let ballots: Vec<PlaintextBallot> = (0..VOTERS)
        .map(|voter| {
            let choice = CANDIDATES.get(rng.gen_range(0..=CANDIDATES.len())).copied();
            PlaintextBallot::single_choice(&format!("voter-{}", voter), &private.names, choice)
        })
        .collect();
    let encrypted = match voting::encrypt_ballots(&public, &ballots, &rand_q()) {
        Ok(encrypted) => encrypted,
        Err(e) => panic!("Ballots could not be encrypted: {}", e),
    };
    info!("{} ballots encrypted", encrypted.len());

    // Anyone can check the ballots with the public context
    for ballot in &encrypted {
        if !voting::validate_encrypted_ballot(&public, ballot) {
            panic!("Ballot {} failed to validate", ballot.ballot_id);
        }
    }

    // Tally the ballots and release the decryption with proofs
    let tally = voting::tally_encrypted_ballots(&encrypted);
    let decrypted = match voting::decrypt_tallies(&private, &tally, &rand_q()) {
        Ok(decrypted) => decrypted,
        Err(e) => panic!("Tally could not be decrypted: {}", e),
    };
    for (plaintext, ciphertext) in decrypted.iter().zip(&tally) {
        let proven = plaintext.decryption_proof.is_valid(
            plaintext.selection.choice,
            &ciphertext.total,
            public.get_public_key(),
            public.get_base_hash(),
        );
        if !proven {
            panic!("Decryption of {} failed to be verified", ciphertext.name);
        }
    }
    if !voting::validate_tallies(&ElectionContext::from(private.clone()), &decrypted, &tally) {
        panic!("The tally failed to validate");
    }

    // The released tally must agree with the plaintext ballots
    let expected = voting::tally_plaintext_ballots(&public, &ballots);
    for selection in &expected.selections {
        let released = decrypted
            .iter()
            .find(|d| d.selection.name == selection.name)
            .map(|d| d.selection.choice);
        if released != Some(selection.choice) {
            panic!("the final tally for {} is incorrect!", selection.name);
        }
        println!("{}: {}", selection.name, selection.choice);
    }
    let abstained = decrypted
        .iter()
        .find(|d| d.selection.name == PLACEHOLDER_NAME)
        .map_or(0, |d| d.selection.choice);
    println!("abstained: {}", abstained);
    println!("The election is a success!");
}
