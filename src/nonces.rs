//! Deterministic nonce sequences. A sequence is an unbounded, indexable stream of elements mod Q
//! derived from one seed: element i is hash(seed, i), so any element can be recomputed on demand
//! and nothing is materialized until it is asked for.
use crate::{
    arithmetics::ElementModQ,
    hash::{hash_elems, Hashable},
};
use std::ops::Range;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Nonces {
    seed: ElementModQ,
}

impl Nonces {
    pub fn new(seed: &ElementModQ) -> Self {
        return Self { seed: *seed };
    }

    /// A sequence whose seed is first bound to a domain-separation label
    pub fn with_header(seed: &ElementModQ, header: &str) -> Self {
        return Self::with_headers(seed, &[Hashable::Str(header)]);
    }

    /// A sequence whose seed is first bound to zero or more domain-separation labels
    pub fn with_headers(seed: &ElementModQ, headers: &[Hashable]) -> Self {
        if headers.is_empty() {
            return Self::new(seed);
        }
        let seed = hash_elems(&[seed.into(), Hashable::List(headers.to_vec())]);
        return Self { seed };
    }

    pub fn get_seed(&self) -> &ElementModQ {
        return &self.seed;
    }

    /// The element at `index`
    pub fn get(&self, index: u64) -> ElementModQ {
        return hash_elems(&[(&self.seed).into(), Hashable::Int(index)]);
    }

    /// The element at `index`, further separated by per-call labels
    pub fn get_with_headers(&self, index: u64, headers: &[&str]) -> ElementModQ {
        let mut items: Vec<Hashable> = vec![(&self.seed).into(), Hashable::Int(index)];
        items.extend(headers.iter().map(|header| Hashable::Str(header)));
        return hash_elems(&items);
    }

    pub fn slice(&self, range: Range<u64>) -> Vec<ElementModQ> {
        return range.map(|index| self.get(index)).collect();
    }

    /// The first `count` elements
    pub fn take(&self, count: usize) -> Vec<ElementModQ> {
        return self.slice(0..count as u64);
    }

    /// Walk the sequence from the start; the iterator never ends
    pub fn iter(&self) -> impl Iterator<Item = ElementModQ> {
        let nonces = *self;
        return (0u64..).map(move |index| nonces.get(index));
    }
}
