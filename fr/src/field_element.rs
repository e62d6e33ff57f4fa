use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Div;
use std::ops::DivAssign;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Neg;
use std::ops::Sub;
use std::ops::SubAssign;

use arbitrary::Arbitrary;
use arbitrary::Unstructured;
use get_size2::GetSize;
use num_bigint::BigUint;
use num_traits::ConstOne;
use num_traits::ConstZero;
use num_traits::One;
use num_traits::Zero;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use crate::arithmetic::{self, Limbs};
use crate::backend::{self, Backend};
use crate::constants::{self, HALF_MODULUS_PLUS_ONE, LIMBS, R, R2};
use crate::traits::{FiniteField, Inverse, ModPowU64};

/// Element of the scalar field ℤ_q with
/// q = 11502027791375260645628074404575422495959608200132055716665986169834464870401.
///
/// Stored in Montgomery form on four 64-bit limbs, least significant limb
/// first: the value `v` is kept as `v * 2^256 mod q`, always fully reduced.
///
/// None of the arithmetic runs in constant time. Reductions, comparisons,
/// inversion and square roots branch on the operand values, so this type must
/// not be used where timing side channels matter.
#[derive(Copy, Clone, Default, Hash, PartialEq, Eq)]
pub struct Element(pub(crate) Limbs);

impl GetSize for Element {
    fn get_stack_size() -> usize {
        std::mem::size_of::<Self>()
    }

    fn get_heap_size(&self) -> usize {
        0
    }
}

impl<'a> Arbitrary<'a> for Element {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        u.arbitrary::<[u8; constants::BYTES]>()
            .map(|bytes| Element::from_bytes(&bytes))
    }
}

impl Serialize for Element {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Element {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

impl Element {
    pub const LIMBS: usize = LIMBS;
    pub const BITS: usize = constants::BITS;
    pub const BYTES: usize = constants::BYTES;

    /// The modulus q, least significant limb first.
    pub const MODULUS: [u64; LIMBS] = constants::MODULUS;

    /// The multiplication backend in use.
    pub const BACKEND: Backend = Backend::ACTIVE;

    /// Lift a plain integer into Montgomery form.
    #[inline]
    pub fn from_u64(value: u64) -> Self {
        Self(backend::mul(&[value, 0, 0, 0], &R2))
    }

    /// Interpret the limbs as a regular (non-Montgomery) integer and convert
    /// it to Montgomery form. Any 256-bit input is accepted and reduced.
    #[inline]
    pub fn from_regular(limbs: [u64; LIMBS]) -> Self {
        Self(backend::mul(&limbs, &R2))
    }

    /// The regular (non-Montgomery) representative, in `[0, q)`.
    #[inline]
    pub fn to_regular(&self) -> [u64; LIMBS] {
        backend::from_mont(&self.0)
    }

    /// Wrap limbs that are already in Montgomery form. The caller must
    /// ensure the value is below q.
    #[inline]
    pub const fn from_raw_limbs(limbs: [u64; LIMBS]) -> Self {
        Self(limbs)
    }

    /// The stored Montgomery limbs.
    #[inline]
    pub const fn raw_limbs(&self) -> [u64; LIMBS] {
        self.0
    }

    pub fn set(&mut self, x: &Self) -> &mut Self {
        *self = *x;
        self
    }

    pub fn set_zero(&mut self) -> &mut Self {
        *self = Self::ZERO;
        self
    }

    pub fn set_one(&mut self) -> &mut Self {
        *self = Self::ONE;
        self
    }

    pub fn set_u64(&mut self, value: u64) -> &mut Self {
        *self = Self::from_u64(value);
        self
    }

    /// Whether the regular value fits in one word.
    pub fn is_uint64(&self) -> bool {
        arithmetic::fits_u64(&self.to_regular())
    }

    /// Low word of the regular value. Only meaningful if
    /// [`is_uint64`](Self::is_uint64) holds.
    pub fn uint64(&self) -> u64 {
        self.to_regular()[0]
    }

    #[must_use]
    #[inline]
    pub fn double(&self) -> Self {
        Self(arithmetic::double(&self.0))
    }

    /// x / 2 mod q
    #[must_use]
    #[inline]
    pub fn halve(&self) -> Self {
        Self(arithmetic::halve(&self.0))
    }

    /// Same routine as multiplication, without a dedicated squaring
    /// schedule.
    #[must_use]
    #[inline]
    pub fn square(&self) -> Self {
        *self * *self
    }

    /// Multiply using a specific backend rather than [`Backend::ACTIVE`].
    #[must_use]
    pub fn mul_with(&self, rhs: &Self, backend: Backend) -> Self {
        Self(backend.mul(&self.0, &rhs.0))
    }

    /// Square-and-multiply, most significant bit first. `x^0 = 1`.
    #[must_use]
    pub fn pow(&self, exponent: &BigUint) -> Self {
        self.pow_by_bits(exponent.bits(), |i| exponent.bit(i))
    }

    #[must_use]
    pub fn pow_u64(&self, exponent: u64) -> Self {
        let bit_len = u64::from(u64::BITS - exponent.leading_zeros());
        self.pow_by_bits(bit_len, |i| (exponent >> i) & 1 == 1)
    }

    /// Exponentiation by a fixed 256-bit exponent given as limbs.
    pub(crate) fn pow_limbs(&self, exponent: &Limbs) -> Self {
        let bit_len = bit_len_of(exponent) as u64;
        self.pow_by_bits(bit_len, |i| bit_of(exponent, i) == 1)
    }

    fn pow_by_bits(&self, bit_len: u64, bit: impl Fn(u64) -> bool) -> Self {
        if bit_len == 0 {
            return Self::ONE;
        }

        let mut acc = *self;
        for i in (0..bit_len - 1).rev() {
            acc = acc.square();
            if bit(i) {
                acc *= *self;
            }
        }

        acc
    }

    /// Multiply in place by a small constant. 0, 1, 2, 3 and 5 use
    /// addition chains; anything else is a regular multiplication.
    pub fn mul_by_constant(&mut self, c: u8) -> &mut Self {
        match c {
            0 => {
                self.set_zero();
            }
            1 => {}
            2 => *self = self.double(),
            3 => *self = self.double() + *self,
            5 => *self = self.double().double() + *self,
            _ => *self *= Self::from_u64(u64::from(c)),
        }
        self
    }

    /// `(a, b) <- (a + b, a - b)`
    pub fn butterfly(a: &mut Self, b: &mut Self) {
        let t = *a;
        *a += *b;
        *b = t - *b;
    }

    /// The `i`th bit of the regular value, least significant bit first.
    pub fn bit(&self, i: u64) -> u64 {
        bit_of(&self.to_regular(), i)
    }

    /// Minimum number of bits needed to represent the regular value, 0 for
    /// zero.
    pub fn bit_len(&self) -> usize {
        bit_len_of(&self.to_regular())
    }

    /// Whether the regular value is strictly larger than that of its
    /// negation, i.e. larger than (q - 1) / 2.
    pub fn lexicographically_largest(&self) -> bool {
        let (_, borrow) =
            arithmetic::sub_limbs(&self.to_regular(), &HALF_MODULUS_PLUS_ONE);
        borrow == 0
    }
}

fn bit_of(limbs: &Limbs, i: u64) -> u64 {
    let word = (i / 64) as usize;
    if word >= LIMBS {
        return 0;
    }
    (limbs[word] >> (i % 64)) & 1
}

fn bit_len_of(limbs: &Limbs) -> usize {
    limbs
        .iter()
        .rposition(|&limb| limb != 0)
        .map(|top| 64 * top + (u64::BITS - limbs[top].leading_zeros()) as usize)
        .unwrap_or(0)
}

/// Prints the regular value in decimal. If it does not fit in a word but
/// its negation does, prints the negation with a leading minus instead.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let regular = self.to_regular();
        if arithmetic::fits_u64(&regular) {
            return write!(f, "{}", regular[0]);
        }

        let negated = (-*self).to_regular();
        if arithmetic::fits_u64(&negated) {
            return write!(f, "-{}", negated[0]);
        }

        write!(f, "{}", constants::limbs_to_big_uint(&regular))
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Element({self})")
    }
}

/// Orders by regular value, not by the Montgomery limbs.
impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.to_regular();
        let rhs = other.to_regular();
        lhs.iter().rev().cmp(rhs.iter().rev())
    }
}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Zero for Element {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        arithmetic::is_zero(&self.0)
    }
}

impl ConstZero for Element {
    const ZERO: Self = Self([0; LIMBS]);
}

impl One for Element {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }

    #[inline]
    fn is_one(&self) -> bool {
        self == &Self::ONE
    }
}

impl ConstOne for Element {
    const ONE: Self = Self(R);
}

impl Add for Element {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(arithmetic::add(&self.0, &rhs.0))
    }
}

impl AddAssign for Element {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs
    }
}

impl Sub for Element {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(arithmetic::sub(&self.0, &rhs.0))
    }
}

impl SubAssign for Element {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs
    }
}

impl Mul for Element {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(backend::mul(&self.0, &rhs.0))
    }
}

impl MulAssign for Element {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Neg for Element {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(arithmetic::neg(&self.0))
    }
}

/// `x / 0 = 0`, following [`Inverse`].
impl Div for Element {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, other: Self) -> Self {
        self * other.inverse()
    }
}

impl DivAssign for Element {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl ModPowU64 for Element {
    #[inline]
    fn mod_pow_u64(&self, pow: u64) -> Self {
        self.pow_u64(pow)
    }
}

impl FiniteField for Element {}
