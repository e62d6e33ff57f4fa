//! Montgomery multiplication with separated operand scanning.

use crate::arithmetic::{adc, mac, reduce, Limbs};
use crate::constants::{INV, LIMBS, MODULUS};

pub(super) fn mul(x: &Limbs, y: &Limbs) -> Limbs {
    let mut t = [0u64; 2 * LIMBS];

    for i in 0..LIMBS {
        let mut carry = 0;
        for j in 0..LIMBS {
            (t[i + j], carry) = mac(t[i + j], x[i], y[j], carry);
        }
        t[i + LIMBS] = carry;
    }

    montgomery_reduce(t)
}

pub(super) fn from_mont(z: &Limbs) -> Limbs {
    let mut t = [0u64; 2 * LIMBS];
    t[..LIMBS].copy_from_slice(z);
    montgomery_reduce(t)
}

/// t * R^-1 mod q for t < q * R.
///
/// The running sum stays below 2qR < 2^510, so nothing carries out of the
/// top limb.
fn montgomery_reduce(mut t: [u64; 2 * LIMBS]) -> Limbs {
    for i in 0..LIMBS {
        let m = t[i].wrapping_mul(INV);
        let mut carry = 0;
        for j in 0..LIMBS {
            (t[i + j], carry) = mac(t[i + j], m, MODULUS[j], carry);
        }
        for limb in &mut t[i + LIMBS..] {
            if carry == 0 {
                break;
            }
            (*limb, carry) = adc(*limb, carry, 0);
        }
    }

    reduce([t[4], t[5], t[6], t[7]])
}
