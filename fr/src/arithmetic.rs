//! Limb-level helpers and the reduction core shared by every operation.
//!
//! Nothing in here runs in constant time: comparisons and reductions
//! branch on the operand values.

use crate::constants::{LIMBS, MODULUS};

pub(crate) type Limbs = [u64; LIMBS];

/// a + b + carry, returning (sum, carry).
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// a - b - borrow, returning (difference, borrow) with borrow in {0, 1}.
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let (d0, b0) = a.overflowing_sub(b);
    let (d1, b1) = d0.overflowing_sub(borrow);
    (d1, (b0 | b1) as u64)
}

/// a + b * c + carry, returning (low, high).
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) * (c as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

#[inline]
pub(crate) fn add_limbs(a: &Limbs, b: &Limbs) -> (Limbs, u64) {
    let mut out = [0u64; LIMBS];
    let mut carry = 0;
    for i in 0..LIMBS {
        (out[i], carry) = adc(a[i], b[i], carry);
    }
    (out, carry)
}

#[inline]
pub(crate) fn sub_limbs(a: &Limbs, b: &Limbs) -> (Limbs, u64) {
    let mut out = [0u64; LIMBS];
    let mut borrow = 0;
    for i in 0..LIMBS {
        (out[i], borrow) = sbb(a[i], b[i], borrow);
    }
    (out, borrow)
}

/// Unsigned comparison, most significant limb first.
#[inline]
pub(crate) fn geq(a: &Limbs, b: &Limbs) -> bool {
    for i in (0..LIMBS).rev() {
        if a[i] != b[i] {
            return a[i] > b[i];
        }
    }
    true
}

#[inline]
pub(crate) fn is_zero(a: &Limbs) -> bool {
    (a[3] | a[2] | a[1] | a[0]) == 0
}

#[inline]
pub(crate) fn is_one(a: &Limbs) -> bool {
    a[0] == 1 && (a[3] | a[2] | a[1]) == 0
}

#[inline]
pub(crate) fn fits_u64(a: &Limbs) -> bool {
    (a[3] | a[2] | a[1]) == 0
}

/// Logical right shift by one bit across the limb chain.
#[inline]
pub(crate) fn shr1(a: &Limbs) -> Limbs {
    [
        a[0] >> 1 | a[1] << 63,
        a[1] >> 1 | a[2] << 63,
        a[2] >> 1 | a[3] << 63,
        a[3] >> 1,
    ]
}

/// Subtracts q once if `z >= q`.
///
/// Every caller guarantees `z < 2q`, so a single subtraction is enough.
#[inline]
pub(crate) fn reduce(z: Limbs) -> Limbs {
    if geq(&z, &MODULUS) {
        sub_limbs(&z, &MODULUS).0
    } else {
        z
    }
}

/// (x + y) mod q. q < 2^253 so the sum never carries out of the top limb.
#[inline]
pub(crate) fn add(x: &Limbs, y: &Limbs) -> Limbs {
    reduce(add_limbs(x, y).0)
}

#[inline]
pub(crate) fn double(x: &Limbs) -> Limbs {
    add(x, x)
}

/// (x - y) mod q
#[inline]
pub(crate) fn sub(x: &Limbs, y: &Limbs) -> Limbs {
    let (z, borrow) = sub_limbs(x, y);
    if borrow != 0 {
        add_limbs(&z, &MODULUS).0
    } else {
        z
    }
}

/// (q - x) mod q
#[inline]
pub(crate) fn neg(x: &Limbs) -> Limbs {
    if is_zero(x) {
        return [0; LIMBS];
    }
    sub_limbs(&MODULUS, x).0
}

/// x / 2 mod q: make the value even by adding q, then shift.
#[inline]
pub(crate) fn halve(x: &Limbs) -> Limbs {
    if x[0] & 1 == 1 {
        shr1(&add_limbs(x, &MODULUS).0)
    } else {
        shr1(x)
    }
}
