//! The key pairs
use crate::{
    arithmetics::{g_pow_p, rand_range_q, ElementModP, ElementModQ, TWO_MOD_Q},
    errors::{ElectionError, Result},
};

/// An ElGamal public key g^s (mod P)
pub type PublicKey = ElementModP;

/// An ElGamal secret key s in [2, Q)
pub type SecretKey = ElementModQ;

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct KeyPair {
    pk: PublicKey,
    sk: SecretKey,
}

impl KeyPair {
    /// Instantiate an instance with no check
    pub fn new(pk: PublicKey, sk: SecretKey) -> Self {
        Self { pk, sk }
    }

    pub fn get_pk(&self) -> &PublicKey {
        &self.pk
    }

    pub fn get_sk(&self) -> &SecretKey {
        &self.sk
    }

    /// Derive the key pair (s, g^s) from a secret s. Secrets below 2 are rejected: 0 and 1 give
    /// public keys that reveal them.
    pub fn from_secret(sk: &SecretKey) -> Result<Self> {
        if *sk < TWO_MOD_Q {
            return Err(ElectionError::OutOfRange(
                "ElGamal secret key needs to be in [2, Q)".to_string(),
            ));
        }
        return Ok(Self::new(g_pow_p(sk), *sk));
    }

    /// Generate a key pair from a uniformly random secret in [2, Q)
    pub fn random() -> Self {
        let sk = rand_range_q(&TWO_MOD_Q);
        return Self::new(g_pow_p(&sk), sk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetics::{ElementModQ, ONE_MOD_Q, ZERO_MOD_Q};

    #[test]
    fn test_keypair_from_secret() {
        let keypair = KeyPair::from_secret(&ElementModQ::from_u64(2)).unwrap();
        assert_eq!(*keypair.get_pk(), g_pow_p(&TWO_MOD_Q));
        assert!(keypair.get_pk().is_valid_residue());
    }

    #[test]
    fn test_small_secrets_rejected() {
        assert!(matches!(
            KeyPair::from_secret(&ZERO_MOD_Q),
            Err(ElectionError::OutOfRange(_))
        ));
        assert!(KeyPair::from_secret(&ONE_MOD_Q).is_err());
    }

    #[test]
    fn test_random_keygen() {
        let keypair = KeyPair::random();
        assert!(*keypair.get_sk() >= TWO_MOD_Q);
        assert_eq!(*keypair.get_pk(), g_pow_p(keypair.get_sk()));
        assert_eq!(KeyPair::from_secret(keypair.get_sk()).unwrap(), keypair);
    }
}
