//! Proof of knowledge of an exponent x shared by two pairs (g, g^x) and (h, h^x)
use super::Verification;
use crate::{
    arithmetics::{ElementModP, ElementModQ},
    errors::{ElectionError, Result},
    hash::hash_elems,
    nonces::Nonces,
};

const NONCE_HEADER: &str = "generic-chaum-pedersen-proof";

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct GenericProof {
    /// g^w
    pub a: ElementModP,
    /// h^w
    pub b: ElementModP,
    /// hash(base_hash, a, b)
    pub c: ElementModQ,
    /// w + x * c
    pub r: ElementModQ,
}

impl GenericProof {
    pub fn new(a: ElementModP, b: ElementModP, c: ElementModQ, r: ElementModQ) -> Self {
        return Self { a, b, c, r };
    }

    /// Prove knowledge of x. The commitment exponent w is the first element of the nonce
    /// sequence of `seed`.
    pub fn make(
        g: &ElementModP,
        h: &ElementModP,
        x: &ElementModQ,
        seed: &ElementModQ,
        base_hash: &ElementModQ,
    ) -> Self {
        let w = Nonces::with_header(seed, NONCE_HEADER).get(0);
        let a = g.pow(&w);
        let b = h.pow(&w);
        let c = hash_elems(&[base_hash.into(), (&a).into(), (&b).into()]);
        let r = ElementModQ::a_plus_bc(&w, x, &c);
        return Self::new(a, b, c, r);
    }

    /// Simulate a transcript for a chosen challenge without knowing x. The result satisfies both
    /// algebraic checks but not the challenge hash, so it only passes with `check_c == false`.
    pub fn make_fake(
        g: &ElementModP,
        gx: &ElementModP,
        h: &ElementModP,
        hx: &ElementModP,
        c: &ElementModQ,
        seed: &ElementModQ,
    ) -> Result<Self> {
        let r = Nonces::with_header(seed, NONCE_HEADER).get(0);
        let not_invertible = || ElectionError::Malformed("zero is not invertible".to_string());
        let a = g.pow(&r).div(&gx.pow(c)).ok_or_else(not_invertible)?;
        let b = h.pow(&r).div(&hx.pow(c)).ok_or_else(not_invertible)?;
        return Ok(Self::new(a, b, *c, r));
    }

    /// Check the transcript against the two pairs. `check_c == false` skips the challenge hash,
    /// which only makes sense for simulated transcripts.
    pub fn verify(
        &self,
        g: &ElementModP,
        gx: &ElementModP,
        h: &ElementModP,
        hx: &ElementModP,
        base_hash: &ElementModQ,
        check_c: bool,
    ) -> Verification {
        let mut verification = Verification::new();
        verification
            .check("in_bounds_a", self.a.is_valid_residue())
            .check("in_bounds_b", self.b.is_valid_residue())
            .check("in_bounds_g", g.is_valid_residue())
            .check("in_bounds_gx", gx.is_valid_residue())
            .check("in_bounds_h", h.is_valid_residue())
            .check("in_bounds_hx", hx.is_valid_residue())
            .check("in_bounds_c", self.c.is_in_bounds())
            .check("in_bounds_r", self.r.is_in_bounds());
        if check_c {
            let expected = hash_elems(&[base_hash.into(), (&self.a).into(), (&self.b).into()]);
            verification.check("hash_good", self.c == expected);
        }
        // a * gx^c == g^(w + xc) == g^r
        verification
            .check("good_g", self.a * gx.pow(&self.c) == g.pow(&self.r))
            .check("good_h", self.b * hx.pow(&self.c) == h.pow(&self.r));
        return verification;
    }

    pub fn is_valid(
        &self,
        g: &ElementModP,
        gx: &ElementModP,
        h: &ElementModP,
        hx: &ElementModP,
        base_hash: &ElementModQ,
        check_c: bool,
    ) -> bool {
        return self
            .verify(g, gx, h, hx, base_hash, check_c)
            .log_verdict("generic Chaum-Pedersen proof");
    }
}
