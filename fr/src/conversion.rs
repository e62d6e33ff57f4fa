//! Conversions between [`Element`] and integers, bytes, big integers and
//! strings.

use std::any::type_name;
use std::any::Any;
use std::str::FromStr;

use log::debug;
use num_bigint::BigInt;
use num_bigint::BigUint;
use num_bigint::Sign;
use num_bigint::TryFromBigIntError;

use crate::arithmetic::{self, Limbs};
use crate::constants::{self, modulus_ref, BYTES, LIMBS, MODULUS};
use crate::error::{FieldError, ParseElementError, Result};
use crate::field_element::Element;
use crate::parse::parse_big_int;

impl Element {
    /// Big-endian encoding of the regular value.
    pub fn bytes(&self) -> [u8; BYTES] {
        let regular = self.to_regular();
        let mut out = [0u8; BYTES];
        for (chunk, limb) in out.chunks_exact_mut(8).zip(regular.iter().rev()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }
        out
    }

    /// Same as [`bytes`](Self::bytes), as a vector.
    pub fn marshal(&self) -> Vec<u8> {
        self.bytes().to_vec()
    }

    /// Interpret `bytes` as a big-endian unsigned integer of any length
    /// and reduce it modulo q.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.len() > BYTES {
            return Self::from_big_uint(&BigUint::from_bytes_be(bytes));
        }

        let mut padded = [0u8; BYTES];
        padded[BYTES - bytes.len()..].copy_from_slice(bytes);
        Self::from_regular(limbs_from_be_bytes(&padded))
    }

    pub fn set_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        *self = Self::from_bytes(bytes);
        self
    }

    /// Reduce an arbitrary non-negative integer modulo q.
    pub fn from_big_uint(value: &BigUint) -> Self {
        if value < modulus_ref() {
            return Self::from_regular(limbs_from_big_uint(value));
        }
        let reduced = value % modulus_ref();
        Self::from_regular(limbs_from_big_uint(&reduced))
    }

    /// Reduce an arbitrary integer modulo q. Negative values map to their
    /// representative in `[0, q)`.
    pub fn from_big_int(value: &BigInt) -> Self {
        let element = Self::from_big_uint(value.magnitude());
        match value.sign() {
            Sign::Minus => -element,
            Sign::NoSign | Sign::Plus => element,
        }
    }

    pub fn set_big_uint(&mut self, value: &BigUint) -> &mut Self {
        *self = Self::from_big_uint(value);
        self
    }

    pub fn set_big_int(&mut self, value: &BigInt) -> &mut Self {
        *self = Self::from_big_int(value);
        self
    }

    /// The regular value as a big integer, in `[0, q)`.
    pub fn to_big_uint(&self) -> BigUint {
        constants::limbs_to_big_uint(&self.to_regular())
    }

    /// The stored Montgomery limbs as a big integer.
    pub fn to_big_uint_montgomery(&self) -> BigUint {
        constants::limbs_to_big_uint(&self.0)
    }

    pub fn to_big_int(&self) -> BigInt {
        BigInt::from(self.to_big_uint())
    }

    /// Parse an integer literal and reduce it modulo q. On error `self` is
    /// left untouched.
    pub fn set_string(&mut self, number: &str) -> Result<&mut Self> {
        *self = number.parse()?;
        Ok(self)
    }

    /// Set the element from a dynamically typed value.
    ///
    /// Accepts `Element`, `&Element`, `u64`, `i64`, `i32`, `String`, `&str`,
    /// `BigUint`, `BigInt` (or references to the big integers) and
    /// big-endian byte buffers (`Vec<u8>`, `&[u8]` or `[u8; 32]`). Anything
    /// else fails with [`FieldError::UnsupportedInputType`].
    pub fn try_from_any<T: Any>(value: &T) -> Result<Self> {
        let value = value as &dyn Any;

        if let Some(fe) = value.downcast_ref::<Element>() {
            return Ok(*fe);
        }
        if let Some(fe) = value.downcast_ref::<&Element>() {
            return Ok(**fe);
        }
        if let Some(v) = value.downcast_ref::<u64>() {
            return Ok(Self::from(*v));
        }
        if let Some(v) = value.downcast_ref::<i64>() {
            return Ok(Self::from(*v));
        }
        if let Some(v) = value.downcast_ref::<i32>() {
            return Ok(Self::from(*v));
        }
        if let Some(s) = value.downcast_ref::<String>() {
            return Ok(s.parse()?);
        }
        if let Some(s) = value.downcast_ref::<&str>() {
            return Ok(s.parse()?);
        }
        if let Some(v) = value.downcast_ref::<BigUint>() {
            return Ok(Self::from_big_uint(v));
        }
        if let Some(v) = value.downcast_ref::<&BigUint>() {
            return Ok(Self::from_big_uint(v));
        }
        if let Some(v) = value.downcast_ref::<BigInt>() {
            return Ok(Self::from_big_int(v));
        }
        if let Some(v) = value.downcast_ref::<&BigInt>() {
            return Ok(Self::from_big_int(v));
        }
        if let Some(bytes) = value.downcast_ref::<Vec<u8>>() {
            return Ok(Self::from_bytes(bytes));
        }
        if let Some(bytes) = value.downcast_ref::<&[u8]>() {
            return Ok(Self::from_bytes(bytes));
        }
        if let Some(bytes) = value.downcast_ref::<[u8; BYTES]>() {
            return Ok(Self::from_bytes(bytes));
        }

        let name = type_name::<T>();
        debug!("rejected field element input of type {name}");
        Err(FieldError::UnsupportedInputType(name))
    }
}

fn limbs_from_be_bytes(bytes: &[u8; BYTES]) -> Limbs {
    let mut limbs = [0u64; LIMBS];
    for (limb, chunk) in limbs.iter_mut().rev().zip(bytes.chunks_exact(8)) {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        *limb = u64::from_be_bytes(word);
    }
    limbs
}

/// `value` must be below 2^256.
fn limbs_from_big_uint(value: &BigUint) -> Limbs {
    let mut limbs = [0u64; LIMBS];
    for (limb, digit) in limbs.iter_mut().zip(value.iter_u64_digits()) {
        *limb = digit;
    }
    limbs
}

impl FromStr for Element {
    type Err = ParseElementError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        parse_big_int(s).map(|value| Self::from_big_int(&value))
    }
}

impl From<u64> for Element {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

macro_rules! impl_from_small_unsigned_int_for_fe {
    ($($t:ident),+ $(,)?) => {$(
        impl From<$t> for Element {
            fn from(value: $t) -> Self {
                Self::from_u64(u64::from(value))
            }
        }
    )+};
}

impl_from_small_unsigned_int_for_fe!(u8, u16, u32, bool);

impl From<usize> for Element {
    fn from(value: usize) -> Self {
        Self::from_u64(value as u64)
    }
}

impl From<u128> for Element {
    fn from(value: u128) -> Self {
        Self::from_regular([value as u64, (value >> 64) as u64, 0, 0])
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        let magnitude = Self::from_u64(value.unsigned_abs());
        if value < 0 {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl From<i128> for Element {
    fn from(value: i128) -> Self {
        let magnitude = Self::from(value.unsigned_abs());
        if value < 0 {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl From<isize> for Element {
    fn from(value: isize) -> Self {
        Self::from(value as i64)
    }
}

macro_rules! impl_from_small_signed_int_for_fe {
    ($($t:ident),+ $(,)?) => {$(
        impl From<$t> for Element {
            fn from(value: $t) -> Self {
                i64::from(value).into()
            }
        }
    )+};
}

impl_from_small_signed_int_for_fe!(i8, i16, i32);

impl From<&BigUint> for Element {
    fn from(value: &BigUint) -> Self {
        Self::from_big_uint(value)
    }
}

impl From<BigUint> for Element {
    fn from(value: BigUint) -> Self {
        Self::from_big_uint(&value)
    }
}

impl From<&BigInt> for Element {
    fn from(value: &BigInt) -> Self {
        Self::from_big_int(value)
    }
}

impl From<BigInt> for Element {
    fn from(value: BigInt) -> Self {
        Self::from_big_int(&value)
    }
}

impl From<[u8; BYTES]> for Element {
    fn from(bytes: [u8; BYTES]) -> Self {
        Self::from_bytes(&bytes)
    }
}

impl From<Element> for [u8; BYTES] {
    fn from(fe: Element) -> Self {
        fe.bytes()
    }
}

impl From<Element> for BigUint {
    fn from(fe: Element) -> Self {
        fe.to_big_uint()
    }
}

impl From<&Element> for BigUint {
    fn from(fe: &Element) -> Self {
        fe.to_big_uint()
    }
}

macro_rules! impl_try_from_fe_for_int {
    ($($t:ident),+ $(,)?) => {$(
        impl TryFrom<Element> for $t {
            type Error = TryFromBigIntError<()>;

            fn try_from(
                value: Element,
            ) -> std::result::Result<Self, Self::Error> {
                $t::try_from(&value.to_big_uint())
            }
        }

        impl TryFrom<&Element> for $t {
            type Error = TryFromBigIntError<()>;

            fn try_from(
                value: &Element,
            ) -> std::result::Result<Self, Self::Error> {
                $t::try_from(&value.to_big_uint())
            }
        }
    )+};
}

impl_try_from_fe_for_int!(u8, u16, u32, u64, u128, usize);

impl Element {
    /// Whether the limbs encode a value below q, i.e. are a valid stored
    /// representation.
    pub fn is_canonical_limbs(limbs: &[u64; LIMBS]) -> bool {
        !arithmetic::geq(limbs, &MODULUS)
    }

    /// Wrap Montgomery limbs, rejecting values that are not below q.
    pub fn try_from_raw_limbs(limbs: [u64; LIMBS]) -> Option<Self> {
        Self::is_canonical_limbs(&limbs).then_some(Self(limbs))
    }
}
