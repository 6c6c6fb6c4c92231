//! Exponential ElGamal: the plaintext sits in the exponent of g, so multiplying ciphertexts
//! component-wise adds their plaintexts
use crate::{
    arithmetics::{discrete_log, g_pow_p, ElementModP, ElementModQ},
    errors::{ElectionError, Result},
    hash::{hash_elems, CryptoHash},
    keys::{PublicKey, SecretKey},
};
use std::ops::Add;

/// An encryption (g^r, K^r * g^m) of the integer m under public key K with nonce r
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct Ciphertext {
    /// g^r, also called alpha
    pad: ElementModP,

    /// K^r * g^m, also called beta
    data: ElementModP,
}

impl Ciphertext {
    pub fn new(pad: ElementModP, data: ElementModP) -> Self {
        return Self { pad, data };
    }

    pub fn get_pad(&self) -> &ElementModP {
        return &self.pad;
    }

    pub fn get_data(&self) -> &ElementModP {
        return &self.data;
    }

    /// Encrypt `message` under `public_key`. A zero nonce would publish g^m in the clear, so it
    /// is rejected.
    pub fn encrypt(message: u64, nonce: &ElementModQ, public_key: &PublicKey) -> Result<Self> {
        if nonce.is_zero() {
            return Err(ElectionError::ZeroNonce);
        }
        let pad = g_pow_p(nonce);
        let data = public_key.pow(nonce) * g_pow_p(&ElementModQ::from_u64(message));
        return Ok(Self::new(pad, data));
    }

    /// Decrypt given the blinding factor K^r = pad^s
    pub fn decrypt_known_product(&self, product: &ElementModP) -> Result<u64> {
        let g_pow_m = self.data.div(product).ok_or_else(|| {
            ElectionError::Malformed("blinding factor is not invertible".to_string())
        })?;
        return discrete_log(&g_pow_m).ok_or_else(|| {
            ElectionError::OutOfRange("plaintext is beyond discrete log search".to_string())
        });
    }

    /// Decrypt with the secret key
    pub fn decrypt(&self, secret_key: &SecretKey) -> Result<u64> {
        return self.decrypt_known_product(&self.pad.pow(secret_key));
    }

    /// Decrypt with the public key and the nonce used to encrypt
    pub fn decrypt_known_nonce(&self, public_key: &PublicKey, nonce: &ElementModQ) -> Result<u64> {
        return self.decrypt_known_product(&public_key.pow(nonce));
    }
}

impl Add for Ciphertext {
    type Output = Ciphertext;

    /// Homomorphic addition; both operands must be encrypted under the same public key
    fn add(self, rhs: Ciphertext) -> Ciphertext {
        return Ciphertext::new(self.pad * rhs.pad, self.data * rhs.data);
    }
}

impl CryptoHash for Ciphertext {
    fn crypto_hash(&self) -> ElementModQ {
        return hash_elems(&[(&self.pad).into(), (&self.data).into()]);
    }
}

/// Homomorphically add one or more ciphertexts; `None` for an empty input
pub fn add_all<'a, I>(ciphertexts: I) -> Option<Ciphertext>
where
    I: IntoIterator<Item = &'a Ciphertext>,
{
    return ciphertexts.into_iter().copied().reduce(|sum, next| sum + next);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        arithmetics::{rand_q, rand_range_q, ONE_MOD_Q, ZERO_MOD_Q},
        keys::KeyPair,
    };
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_encrypt_decrypt() {
        let keypair = KeyPair::random();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..5 {
            let message: u64 = rng.gen_range(0..100);
            let nonce = rand_range_q(&ONE_MOD_Q);
            let ciphertext = Ciphertext::encrypt(message, &nonce, keypair.get_pk()).unwrap();
            assert!(ciphertext.get_pad().is_valid_residue());
            assert!(ciphertext.get_data().is_valid_residue());
            assert_eq!(ciphertext.decrypt(keypair.get_sk()), Ok(message));
            assert_eq!(
                ciphertext.decrypt_known_nonce(keypair.get_pk(), &nonce),
                Ok(message)
            );
        }
    }

    #[test]
    fn test_zero_nonce_rejected() {
        let keypair = KeyPair::random();
        assert_eq!(
            Ciphertext::encrypt(1, &ZERO_MOD_Q, keypair.get_pk()),
            Err(ElectionError::ZeroNonce)
        );
    }

    #[test]
    fn test_homomorphic_add() {
        let keypair = KeyPair::random();
        let c1 = Ciphertext::encrypt(13, &rand_range_q(&ONE_MOD_Q), keypair.get_pk()).unwrap();
        let c2 = Ciphertext::encrypt(29, &rand_range_q(&ONE_MOD_Q), keypair.get_pk()).unwrap();
        let c3 = Ciphertext::encrypt(0, &rand_range_q(&ONE_MOD_Q), keypair.get_pk()).unwrap();
        assert_eq!((c1 + c2).decrypt(keypair.get_sk()), Ok(42));

        let sum = add_all(&[c1, c2, c3]).unwrap();
        assert_eq!(sum, c3 + c2 + c1);
        assert_eq!(sum.decrypt(keypair.get_sk()), Ok(42));
        assert!(add_all(Vec::<&Ciphertext>::new()).is_none());
    }

    #[test]
    fn test_same_nonce_same_ciphertext() {
        let keypair = KeyPair::random();
        let nonce = rand_q();
        let c1 = Ciphertext::encrypt(1, &nonce, keypair.get_pk()).unwrap();
        let c2 = Ciphertext::encrypt(1, &nonce, keypair.get_pk()).unwrap();
        assert_eq!(c1, c2);
        assert_eq!(c1.crypto_hash(), c2.crypto_hash());
        let c3 = Ciphertext::encrypt(0, &nonce, keypair.get_pk()).unwrap();
        assert_ne!(c1.crypto_hash(), c3.crypto_hash());
    }
}
