//! Homomorphic ElGamal ballots with Chaum-Pedersen proofs over the ElectionGuard 4096-bit group
use crypto_bigint::U4096;

/// Use the same big integer type everywhere
pub const LIMBS: usize = U4096::LIMBS;
pub type BigInt = U4096;

/// Discrete-log recovery searches no further than this, which bounds plaintexts and tallies
pub const DLOG_MAX: u64 = 1_000_000_000;

/// Constant-sum proofs claiming a constant at or above this bound are rejected, so that the
/// claimed total can always be recovered by `discrete_log`
pub const SANE_CONSTANT_BOUND: u64 = 1_000_000_000;

/// Reserved selection name for the synthetic selection that balances every ballot to one vote
pub const PLACEHOLDER_NAME: &str = "PLACEHOLDER";

pub mod arithmetics;
pub mod election;
pub mod elgamal;
pub mod errors;
pub mod hash;
pub mod keys;
pub mod nonces;
pub mod proofs;
pub mod voting;
