//! Proof that a claimed plaintext is the decryption of a ciphertext. It is a generic proof over
//! the pairs (g, K) and (pad, pad^s): the second power, the blinding factor, is recomputed by
//! the verifier as data / g^m.
use super::{generic::GenericProof, Verification};
use crate::{
    arithmetics::{g_pow_p, int_to_q, ElementModQ, G_MOD_P},
    elgamal::Ciphertext,
    keys::{PublicKey, SecretKey},
};

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct DecryptionProof {
    pub proof: GenericProof,
}

impl DecryptionProof {
    pub fn make(
        ciphertext: &Ciphertext,
        secret_key: &SecretKey,
        seed: &ElementModQ,
        base_hash: &ElementModQ,
    ) -> Self {
        let proof = GenericProof::make(&G_MOD_P, ciphertext.get_pad(), secret_key, seed, base_hash);
        return Self { proof };
    }

    pub fn verify(
        &self,
        plaintext: u64,
        ciphertext: &Ciphertext,
        public_key: &PublicKey,
        base_hash: &ElementModQ,
    ) -> Verification {
        let mut verification = Verification::new();
        let blinder = int_to_q(plaintext)
            .and_then(|plaintext| ciphertext.get_data().div(&g_pow_p(&plaintext)));
        match blinder {
            Some(blinder) => {
                verification.check("plaintext_in_range", true);
                verification.extend(&self.proof.verify(
                    &G_MOD_P,
                    public_key,
                    ciphertext.get_pad(),
                    &blinder,
                    base_hash,
                    true,
                ));
            }
            None => {
                verification.check("plaintext_in_range", false);
            }
        }
        return verification;
    }

    pub fn is_valid(
        &self,
        plaintext: u64,
        ciphertext: &Ciphertext,
        public_key: &PublicKey,
        base_hash: &ElementModQ,
    ) -> bool {
        return self
            .verify(plaintext, ciphertext, public_key, base_hash)
            .log_verdict("decryption proof");
    }
}
