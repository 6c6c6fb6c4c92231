//! Fiat-Shamir challenge hashing. The challenge is a pure function of the ordered inputs: each
//! input is framed with a type tag (and a length where the width varies) before it is absorbed,
//! so inputs of different shapes never share an encoding.
use crate::{
    arithmetics::{ElementModP, ElementModQ},
    BigInt,
};
use crypto_bigint::Encoding;
use digest::Digest;
use sha3::Sha3_256;

const TAG_NONE: u8 = 0x00;
const TAG_P: u8 = 0x01;
const TAG_Q: u8 = 0x02;
const TAG_STR: u8 = 0x03;
const TAG_INT: u8 = 0x04;
const TAG_LIST: u8 = 0x05;

/// One input to `hash_elems`
#[derive(Debug, Clone)]
pub enum Hashable<'a> {
    P(&'a ElementModP),
    Q(&'a ElementModQ),
    Str(&'a str),
    Int(u64),
    /// An absent value; hashes to a sentinel no real value can produce
    None,
    /// A nested sequence, absorbed as the hash of its contents
    List(Vec<Hashable<'a>>),
}

/// Values that know how to reduce themselves to a single hash
pub trait CryptoHash {
    fn crypto_hash(&self) -> ElementModQ;
}

impl<'a> From<&'a ElementModP> for Hashable<'a> {
    fn from(elem: &'a ElementModP) -> Self {
        return Hashable::P(elem);
    }
}

impl<'a> From<&'a ElementModQ> for Hashable<'a> {
    fn from(elem: &'a ElementModQ) -> Self {
        return Hashable::Q(elem);
    }
}

impl<'a> From<Option<&'a ElementModQ>> for Hashable<'a> {
    fn from(elem: Option<&'a ElementModQ>) -> Self {
        match elem {
            Some(elem) => Hashable::Q(elem),
            None => Hashable::None,
        }
    }
}

impl<'a> From<&'a str> for Hashable<'a> {
    fn from(s: &'a str) -> Self {
        return Hashable::Str(s);
    }
}

impl<'a> From<u64> for Hashable<'a> {
    fn from(i: u64) -> Self {
        return Hashable::Int(i);
    }
}

impl<'a> From<Vec<Hashable<'a>>> for Hashable<'a> {
    fn from(items: Vec<Hashable<'a>>) -> Self {
        return Hashable::List(items);
    }
}

/// Hash zero or more inputs, in order, into an element mod Q
pub fn hash_elems(items: &[Hashable]) -> ElementModQ {
    let mut hasher = Sha3_256::new();
    for item in items {
        absorb(&mut hasher, item);
    }
    let digest = hasher.finalize();

    let mut wide = [0u8; BigInt::BYTES];
    wide[BigInt::BYTES - digest.len()..].copy_from_slice(&digest);
    return ElementModQ::reduce(&BigInt::from_be_slice(&wide));
}

fn absorb(hasher: &mut Sha3_256, item: &Hashable) {
    match item {
        Hashable::None => hasher.update([TAG_NONE]),
        Hashable::P(elem) => {
            hasher.update([TAG_P]);
            hasher.update(elem.value().to_be_bytes());
        }
        Hashable::Q(elem) => {
            hasher.update([TAG_Q]);
            hasher.update(elem.to_be_bytes());
        }
        Hashable::Str(s) => {
            hasher.update([TAG_STR]);
            hasher.update((s.len() as u64).to_be_bytes());
            hasher.update(s.as_bytes());
        }
        Hashable::Int(i) => {
            hasher.update([TAG_INT]);
            hasher.update(i.to_be_bytes());
        }
        Hashable::List(items) => {
            hasher.update([TAG_LIST]);
            hasher.update((items.len() as u64).to_be_bytes());
            hasher.update(hash_elems(items).to_be_bytes());
        }
    }
}
