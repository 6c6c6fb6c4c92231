//! Proof that a ciphertext encrypts a known small constant
use super::Verification;
use crate::{
    arithmetics::{g_pow_p, int_to_q, ElementModP, ElementModQ},
    elgamal::Ciphertext,
    hash::hash_elems,
    keys::PublicKey,
    nonces::Nonces,
    SANE_CONSTANT_BOUND,
};

const NONCE_HEADER: &str = "constant-chaum-pedersen-proof";

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct ConstantProof {
    /// g^u
    pub pad: ElementModP,
    /// K^u
    pub data: ElementModP,
    pub challenge: ElementModQ,
    /// u + c * r
    pub response: ElementModQ,
    pub constant: u64,
}

impl ConstantProof {
    /// Prove that `ciphertext`, encrypted with `nonce` under `public_key`, holds `constant`
    pub fn make(
        ciphertext: &Ciphertext,
        constant: u64,
        nonce: &ElementModQ,
        public_key: &PublicKey,
        seed: &ElementModQ,
        base_hash: &ElementModQ,
    ) -> Self {
        let u = Nonces::with_header(seed, NONCE_HEADER).get(0);
        let pad = g_pow_p(&u);
        let data = public_key.pow(&u);
        let challenge = hash_elems(&[
            base_hash.into(),
            ciphertext.get_pad().into(),
            ciphertext.get_data().into(),
            (&pad).into(),
            (&data).into(),
        ]);
        let response = ElementModQ::a_plus_bc(&u, &challenge, nonce);
        return Self {
            pad,
            data,
            challenge,
            response,
            constant,
        };
    }

    pub fn verify(
        &self,
        ciphertext: &Ciphertext,
        public_key: &PublicKey,
        base_hash: &ElementModQ,
    ) -> Verification {
        let (alpha, beta) = (ciphertext.get_pad(), ciphertext.get_data());
        let (a, b, c, v) = (&self.pad, &self.data, &self.challenge, &self.response);
        let constant_q = int_to_q(self.constant);
        let expected = hash_elems(&[
            base_hash.into(),
            alpha.into(),
            beta.into(),
            a.into(),
            b.into(),
        ]);

        let mut verification = Verification::new();
        verification
            .check("in_bounds_alpha", alpha.is_valid_residue())
            .check("in_bounds_beta", beta.is_valid_residue())
            .check("in_bounds_a", a.is_valid_residue())
            .check("in_bounds_b", b.is_valid_residue())
            .check("in_bounds_c", c.is_in_bounds())
            .check("in_bounds_v", v.is_in_bounds())
            .check("in_bounds_constant", constant_q.is_some())
            // keeps the eventual discrete log search tractable
            .check("sane_constant", self.constant < SANE_CONSTANT_BOUND)
            .check("same_c", *c == expected)
            .check("consistent_gv", g_pow_p(v) == *a * alpha.pow(c))
            .check(
                "consistent_kv",
                // g^(c * constant) * K^v == b * beta^c
                constant_q.map_or(false, |constant| {
                    g_pow_p(&(*c * constant)) * public_key.pow(v) == *b * beta.pow(c)
                }),
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
            .log_verdict("constant Chaum-Pedersen proof");
    }
}
