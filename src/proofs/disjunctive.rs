//! Proof that a ciphertext encrypts 0 or 1 without revealing which.
//!
//! The prover runs the real protocol for the branch matching the plaintext and simulates the
//! other branch from a chosen sub-challenge. The overall challenge c is the hash of the
//! transcript and the sub-challenges are only constrained by c0 + c1 = c, so the prover can
//! close exactly one branch honestly and a verifier cannot tell which.
use super::Verification;
use crate::{
    arithmetics::{g_pow_p, ElementModP, ElementModQ},
    elgamal::Ciphertext,
    errors::{ElectionError, Result},
    hash::hash_elems,
    keys::PublicKey,
    nonces::Nonces,
};

const NONCE_HEADER: &str = "disjoint-chaum-pedersen-proof";

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct DisjunctiveProof {
    /// Commitment pair of the "plaintext is 0" branch
    pub a0: ElementModP,
    pub b0: ElementModP,
    /// Commitment pair of the "plaintext is 1" branch
    pub a1: ElementModP,
    pub b1: ElementModP,
    pub c0: ElementModQ,
    pub c1: ElementModQ,
    /// hash(base_hash, alpha, beta, a0, b0, a1, b1)
    pub c: ElementModQ,
    pub v0: ElementModQ,
    pub v1: ElementModQ,
}

fn challenge(
    base_hash: &ElementModQ,
    ciphertext: &Ciphertext,
    a0: &ElementModP,
    b0: &ElementModP,
    a1: &ElementModP,
    b1: &ElementModP,
) -> ElementModQ {
    return hash_elems(&[
        base_hash.into(),
        ciphertext.get_pad().into(),
        ciphertext.get_data().into(),
        a0.into(),
        b0.into(),
        a1.into(),
        b1.into(),
    ]);
}

impl DisjunctiveProof {
    /// Prove that `ciphertext`, encrypted with `nonce` under `public_key`, holds `plaintext`,
    /// which must be 0 or 1
    pub fn make(
        ciphertext: &Ciphertext,
        plaintext: u64,
        nonce: &ElementModQ,
        public_key: &PublicKey,
        base_hash: &ElementModQ,
        seed: &ElementModQ,
    ) -> Result<Self> {
        return match plaintext {
            0 => Ok(Self::make_zero(ciphertext, nonce, public_key, base_hash, seed)),
            1 => Ok(Self::make_one(ciphertext, nonce, public_key, base_hash, seed)),
            _ => Err(ElectionError::OutOfRange(format!(
                "disjunctive proof covers plaintexts 0 and 1, got {}",
                plaintext
            ))),
        };
    }

    /// Real branch 0, simulated branch 1
    pub fn make_zero(
        ciphertext: &Ciphertext,
        nonce: &ElementModQ,
        public_key: &PublicKey,
        base_hash: &ElementModQ,
        seed: &ElementModQ,
    ) -> Self {
        let (alpha, beta) = (ciphertext.get_pad(), ciphertext.get_data());
        let nonces = Nonces::with_header(seed, NONCE_HEADER);
        let (c1, v1, u0) = (nonces.get(0), nonces.get(1), nonces.get(2));

        let a0 = g_pow_p(&u0);
        let b0 = public_key.pow(&u0);
        let minus_c1 = -c1;
        let a1 = g_pow_p(&v1) * alpha.pow(&minus_c1);
        let b1 = public_key.pow(&v1) * g_pow_p(&c1) * beta.pow(&minus_c1);

        let c = challenge(base_hash, ciphertext, &a0, &b0, &a1, &b1);
        let c0 = c - c1;
        let v0 = ElementModQ::a_plus_bc(&u0, &c0, nonce);
        return Self { a0, b0, a1, b1, c0, c1, c, v0, v1 };
    }

    /// Simulated branch 0, real branch 1
    pub fn make_one(
        ciphertext: &Ciphertext,
        nonce: &ElementModQ,
        public_key: &PublicKey,
        base_hash: &ElementModQ,
        seed: &ElementModQ,
    ) -> Self {
        let (alpha, beta) = (ciphertext.get_pad(), ciphertext.get_data());
        let nonces = Nonces::with_header(seed, NONCE_HEADER);
        let (c0, v0, u1) = (nonces.get(0), nonces.get(1), nonces.get(2));

        let minus_c0 = -c0;
        let a0 = g_pow_p(&v0) * alpha.pow(&minus_c0);
        let b0 = public_key.pow(&v0) * beta.pow(&minus_c0);
        let a1 = g_pow_p(&u1);
        let b1 = public_key.pow(&u1);

        let c = challenge(base_hash, ciphertext, &a0, &b0, &a1, &b1);
        let c1 = c - c0;
        let v1 = ElementModQ::a_plus_bc(&u1, &c1, nonce);
        return Self { a0, b0, a1, b1, c0, c1, c, v0, v1 };
    }

    pub fn verify(
        &self,
        ciphertext: &Ciphertext,
        public_key: &PublicKey,
        base_hash: &ElementModQ,
    ) -> Verification {
        let (alpha, beta) = (ciphertext.get_pad(), ciphertext.get_data());
        let Self { a0, b0, a1, b1, c0, c1, c, v0, v1 } = self;
        let expected = challenge(base_hash, ciphertext, a0, b0, a1, b1);

        let mut verification = Verification::new();
        verification
            .check("in_bounds_alpha", alpha.is_valid_residue())
            .check("in_bounds_beta", beta.is_valid_residue())
            .check("in_bounds_a0", a0.is_valid_residue())
            .check("in_bounds_b0", b0.is_valid_residue())
            .check("in_bounds_a1", a1.is_valid_residue())
            .check("in_bounds_b1", b1.is_valid_residue())
            .check("in_bounds_c0", c0.is_in_bounds())
            .check("in_bounds_c1", c1.is_in_bounds())
            .check("in_bounds_v0", v0.is_in_bounds())
            .check("in_bounds_v1", v1.is_in_bounds())
            .check("consistent_c", *c0 + *c1 == *c && *c == expected)
            .check("consistent_gv0", g_pow_p(v0) == *a0 * alpha.pow(c0))
            .check("consistent_gv1", g_pow_p(v1) == *a1 * alpha.pow(c1))
            .check("consistent_kv0", public_key.pow(v0) == *b0 * beta.pow(c0))
            .check(
                "consistent_gc1kv1",
                g_pow_p(c1) * public_key.pow(v1) == *b1 * beta.pow(c1),
            );
        return verification;
    }

    pub fn is_valid(
        &self,
        ciphertext: &Ciphertext,
        public_key: &PublicKey,
        base_hash: &ElementModQ,
    ) -> bool {
        return self
            .verify(ciphertext, public_key, base_hash)
            .log_verdict("disjunctive Chaum-Pedersen proof");
    }
}
