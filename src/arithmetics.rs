//! Modular arithmetic over the ElectionGuard group: elements of the integers mod P that live in
//! the order-Q subgroup, and exponents in the ring of integers mod Q
//!
//! Every exponent we ever raise to is an integer mod Q (or Q itself when checking subgroup
//! membership), so exponentiation only walks the low 256 bits of the exponent.
use crate::{BigInt, DLOG_MAX, LIMBS};
use crypto_bigint::{
    modular::runtime_mod::{DynResidue, DynResidueParams},
    rand_core::OsRng,
    Encoding, NonZero, RandomMod,
};
use lazy_static::lazy_static;
use std::{
    collections::BTreeMap,
    fmt,
    ops::{Add, Mul, Neg, Sub},
    sync::{Mutex, PoisonError},
};

/// Number of significant bits in Q
const Q_BITS: usize = 256;

/// Number of bytes needed to render an element mod Q
const Q_BYTES: usize = Q_BITS / 8;

/// Powers of g up to this exponent are memoized by `discrete_log`; larger ones are searched
/// afresh from the largest memoized power
const DLOG_CACHE_MAX: u64 = 1 << 16;

/// The 4096-bit prime modulus P
pub const P: BigInt = BigInt::from_be_hex(concat!(
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
    "93C467E37DB0C7A4D1BE3F810152CB56A1CECC3AF65CC0190C03DF34709AFFBD",
    "8E4B59FA03A9F0EED0649CCB621057D11056AE9132135A08E43B4673D74BAFEA",
    "58DEB878CC86D733DBE7BF38154B36CF8A96D1567899AAAE0C09D4C8B6B7B86F",
    "D2A1EA1DE62FF8643EC7C271827977225E6AC2F0BD61C746961542A3CE3BEA5D",
    "B54FE70E63E6D09F8FC28658E80567A47CFDE60EE741E5D85A7BD46931CED822",
    "0365594964B839896FCAABCCC9B31959C083F22AD3EE591C32FAB2C7448F2A05",
    "7DB2DB49EE52E0182741E53865F004CC8E704B7C5C40BF304C4D8C4F13EDF604",
    "7C555302D2238D8CE11DF2424F1B66C2C5D238D0744DB679AF2890487031F9C0",
    "AEA1C4BB6FE9554EE528FDF1B05E5B256223B2F09215F3719F9C7CCC69DDF172",
    "D0D6234217FCC0037F18B93EF5389130B7A661E5C26E54214068BBCAFEA32A67",
    "818BD3075AD1F5C7E9CC3D1737FB28171BAF84DBB6612B7881C1A48E439CD03A",
    "92BF52225A2B38E6542E9F722BCE15A381B5753EA842763381CCAE83512B3051",
    "1B32E5E8D80362149AD030AABA5F3A5798BB22AA7EC1B6D0F17903F4E234EA60",
    "34AA85973F79A93FFB82A75C47C03D43D2F9CA02D03199BACEDDD45334DBC6B5",
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
));

/// The 256-bit prime order Q of the subgroup generated by G, Q = 2^256 - 189
pub const Q: BigInt = BigInt::from_be_hex(concat!(
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF43",
));

/// Generator of the order-Q subgroup of the integers mod P
pub const G: BigInt = BigInt::from_be_hex(concat!(
    "037DE384F98F6E038D2A3141825B33D5D45EC4CC64CFD15E750D6798F5196CF2",
    "A142CDF33F6EF853840EC7D4EC804794CFB0CFB65363B2566387B98EE0E3DEF1",
    "B706FA55D5038FFB4A62DCBB93B1DDD8D3B308DA86D1C3A525EF356FE5BB5931",
    "4E65633480B396E1DD4B795F78DE07D86B0E2A05BE6AF78FD7F736FCBA6C032E",
    "26E050AF50A03C65FA7B6C87F4554CB57F3DABCBAD8EB9D8FDEBEEF58570669A",
    "CC3EDA17DBFC47B8B3C39AA08B829B28872E62B5D1B13A98F09D40AC20C2AB74",
    "A6750E7C8750B5141E221C41F55BBA31D8E41422B64D2CBA7AAA0E9FD8785702",
    "F6932825BF45DE8386D24900742062C1322B37C50AF182158090C35DA9355E6C",
    "F7F72DA39A2284FDFB1918B2A2A30E69501FA2342B728263DF23F1DB8355BDE1",
    "EB276FB3685F371672CEB313FDAB069CC9B11AB6C59BCE62BAAD96AAC96B0DBE",
    "0C7E71FCB22552545A5D1CEDEEE01E4BC0CDBDB76B6AD45F09AF5E71114A005F",
    "93AD97B8FE09274E76C94B2008926B38CAEC94C95E96D628F6BC80662BA06207",
    "801328B2C6A60526BF7CD02D9661385AC3B1CBDB50F759D0E9F61C11A07BF421",
    "8F299BCB2900520076EBD2D95A3DEE96D4809EF34ABEB83FDBA8A12C5CA82757",
    "288A89C931CF564F00E8A317AE1E1D828E61369BA0DDBADB10C136F8691101AD",
    "82DC54775AB8353840D9992197D80A6E94B38AC417CDDF40B0C73ABF03E8E0AA",
));

lazy_static! {
    static ref P_PARAMS: DynResidueParams<LIMBS> = DynResidueParams::new(&P);
    static ref Q_PARAMS: DynResidueParams<LIMBS> = DynResidueParams::new(&Q);
    static ref Q_NONZERO: NonZero<BigInt> = NonZero::new(Q).unwrap();
    static ref DLOG_CACHE: Mutex<DlogCache> = Mutex::new(DlogCache::new());
}

/// Powers of g met by earlier `discrete_log` searches, so later searches resume from the
/// largest one instead of from g^0
struct DlogCache {
    powers: BTreeMap<ElementModP, u64>,
    max_elem: ElementModP,
    max_exp: u64,
}

impl DlogCache {
    fn new() -> Self {
        let mut powers = BTreeMap::new();
        powers.insert(ONE_MOD_P, 0);
        return Self {
            powers,
            max_elem: ONE_MOD_P,
            max_exp: 0,
        };
    }
}

/// An element of the ring of integers mod Q, i.e. a value in [0, Q)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct ElementModQ {
    elem: BigInt,
}

/// An element of the integers mod P, i.e. a value in [0, P). Ciphertexts and proof commitments
/// must additionally be members of the order-Q subgroup; see `is_valid_residue`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct ElementModP {
    elem: BigInt,
}

pub const ZERO_MOD_Q: ElementModQ = ElementModQ::unchecked(BigInt::ZERO);
pub const ONE_MOD_Q: ElementModQ = ElementModQ::unchecked(BigInt::ONE);
pub const TWO_MOD_Q: ElementModQ = ElementModQ::unchecked(BigInt::from_u8(2));

pub const ZERO_MOD_P: ElementModP = ElementModP::unchecked(BigInt::ZERO);
pub const ONE_MOD_P: ElementModP = ElementModP::unchecked(BigInt::ONE);
pub const G_MOD_P: ElementModP = ElementModP::unchecked(G);

impl ElementModQ {
    /// Checked conversion: `None` unless 0 <= elem < Q
    pub fn new(elem: BigInt) -> Option<Self> {
        if elem < Q {
            return Some(Self::unchecked(elem));
        }
        return None;
    }

    /// Wrap a value already known to be below Q
    pub(crate) const fn unchecked(elem: BigInt) -> Self {
        return Self { elem };
    }

    /// Every u64 is far below Q, so this conversion cannot fail
    pub fn from_u64(val: u64) -> Self {
        return Self::unchecked(BigInt::from_u64(val));
    }

    /// Reduce an arbitrary integer mod Q
    pub fn reduce(elem: &BigInt) -> Self {
        return Self::unchecked(*elem % *Q_NONZERO);
    }

    pub fn value(&self) -> &BigInt {
        return &self.elem;
    }

    pub fn is_zero(&self) -> bool {
        return self.elem == BigInt::ZERO;
    }

    /// 0 <= elem < Q
    pub fn is_in_bounds(&self) -> bool {
        return self.elem < Q;
    }

    /// 0 < elem < Q
    pub fn is_in_bounds_no_zero(&self) -> bool {
        return !self.is_zero() && self.is_in_bounds();
    }

    /// Big-endian encoding of the 256 significant bits
    pub fn to_be_bytes(&self) -> [u8; Q_BYTES] {
        let wide = self.elem.to_be_bytes();
        let mut bytes = [0u8; Q_BYTES];
        bytes.copy_from_slice(&wide[wide.len() - Q_BYTES..]);
        return bytes;
    }

    /// Compute a + b * c (mod Q)
    pub fn a_plus_bc(a: &Self, b: &Self, c: &Self) -> Self {
        return *a + *b * *c;
    }

    fn to_residue(&self) -> DynResidue<LIMBS> {
        return DynResidue::new(&self.elem, *Q_PARAMS);
    }
}

impl ElementModP {
    /// Checked conversion: `None` unless 0 <= elem < P
    pub fn new(elem: BigInt) -> Option<Self> {
        if elem < P {
            return Some(Self::unchecked(elem));
        }
        return None;
    }

    pub(crate) const fn unchecked(elem: BigInt) -> Self {
        return Self { elem };
    }

    pub fn value(&self) -> &BigInt {
        return &self.elem;
    }

    /// 0 <= elem < P
    pub fn is_in_bounds(&self) -> bool {
        return self.elem < P;
    }

    /// 0 < elem < P
    pub fn is_in_bounds_no_zero(&self) -> bool {
        return self.elem != BigInt::ZERO && self.is_in_bounds();
    }

    /// In bounds and a member of the order-Q subgroup, i.e. elem^Q == 1 (mod P)
    pub fn is_valid_residue(&self) -> bool {
        if !self.is_in_bounds() {
            return false;
        }
        return self.pow_raw(&Q) == ONE_MOD_P;
    }

    /// Raise to an exponent mod Q
    pub fn pow(&self, exponent: &ElementModQ) -> Self {
        return self.pow_raw(exponent.value());
    }

    /// Multiplicative inverse mod P; zero has none
    pub fn inverse(&self) -> Option<Self> {
        let (inverse, invertible) = self.to_residue().invert();
        let invertible: bool = invertible.into();
        if invertible {
            return Some(Self::unchecked(inverse.retrieve()));
        }
        return None;
    }

    /// self * other^-1 (mod P)
    pub fn div(&self, other: &Self) -> Option<Self> {
        return other.inverse().map(|inverse| *self * inverse);
    }

    fn pow_raw(&self, exponent: &BigInt) -> Self {
        let power = self.to_residue().pow_bounded_exp(exponent, Q_BITS);
        return Self::unchecked(power.retrieve());
    }

    fn to_residue(&self) -> DynResidue<LIMBS> {
        return DynResidue::new(&self.elem, *P_PARAMS);
    }
}

/// g^e (mod P)
pub fn g_pow_p(exponent: &ElementModQ) -> ElementModP {
    return G_MOD_P.pow(exponent);
}

/// Checked conversion of a small integer into the integers mod P
pub fn int_to_p(val: u64) -> Option<ElementModP> {
    return ElementModP::new(BigInt::from_u64(val));
}

/// Checked conversion of a small integer into the integers mod Q
pub fn int_to_q(val: u64) -> Option<ElementModQ> {
    return ElementModQ::new(BigInt::from_u64(val));
}

/// Uniformly sample from [0, Q)
pub fn rand_q() -> ElementModQ {
    return ElementModQ::unchecked(BigInt::random_mod(&mut OsRng, &Q_NONZERO));
}

/// Uniformly sample from [start, Q)
pub fn rand_range_q(start: &ElementModQ) -> ElementModQ {
    let width: Option<NonZero<BigInt>> = NonZero::new(Q.wrapping_sub(&start.elem)).into();
    return match width {
        Some(width) => {
            ElementModQ::unchecked(BigInt::random_mod(&mut OsRng, &width).wrapping_add(&start.elem))
        }
        // unreachable: every ElementModQ is below Q, so the width is at least one
        None => *start,
    };
}

/// Brute-force discrete log base g. The search walks g^1, g^2, ... from the largest power
/// memoized so far and gives up past `DLOG_MAX`, which is what bounds plaintexts and tallies to
/// small integers.
pub fn discrete_log(element: &ElementModP) -> Option<u64> {
    if !element.is_in_bounds() {
        return None;
    }
    // the cache is only ever extended, so a panic mid-search leaves it consistent
    let mut cache = DLOG_CACHE.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(exp) = cache.powers.get(element) {
        return Some(*exp);
    }

    let generator = G_MOD_P.to_residue();
    let target = element.to_residue();
    let mut power = cache.max_elem.to_residue();
    let mut exp = cache.max_exp;
    while exp < DLOG_MAX {
        power = power.mul(&generator);
        exp += 1;
        if exp <= DLOG_CACHE_MAX {
            let elem = ElementModP::unchecked(power.retrieve());
            cache.powers.insert(elem, exp);
            cache.max_elem = elem;
            cache.max_exp = exp;
        }
        if power == target {
            return Some(exp);
        }
    }
    return None;
}

impl Add for ElementModQ {
    type Output = ElementModQ;

    fn add(self, rhs: ElementModQ) -> ElementModQ {
        return ElementModQ::unchecked(self.elem.add_mod(&rhs.elem, &Q));
    }
}

impl Sub for ElementModQ {
    type Output = ElementModQ;

    fn sub(self, rhs: ElementModQ) -> ElementModQ {
        return ElementModQ::unchecked(self.elem.sub_mod(&rhs.elem, &Q));
    }
}

impl Mul for ElementModQ {
    type Output = ElementModQ;

    fn mul(self, rhs: ElementModQ) -> ElementModQ {
        let product = self.to_residue().mul(&rhs.to_residue());
        return ElementModQ::unchecked(product.retrieve());
    }
}

impl Neg for ElementModQ {
    type Output = ElementModQ;

    fn neg(self) -> ElementModQ {
        return ZERO_MOD_Q - self;
    }
}

impl Mul for ElementModP {
    type Output = ElementModP;

    fn mul(self, rhs: ElementModP) -> ElementModP {
        let product = self.to_residue().mul(&rhs.to_residue());
        return ElementModP::unchecked(product.retrieve());
    }
}

impl fmt::Display for ElementModQ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode_upper(self.to_be_bytes()))
    }
}

impl fmt::Display for ElementModP {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode_upper(self.elem.to_be_bytes()))
    }
}
