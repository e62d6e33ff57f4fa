//! Montgomery multiplication with coarsely integrated operand scanning.
//!
//! Relies on the top limb of q being below `(2^64 - 1) / 2 - 1`, which lets
//! the per-round carry fit in a single word ("no-carry" variant).

use crate::arithmetic::{mac, reduce, Limbs};
use crate::constants::{INV, LIMBS, MODULUS};

pub(super) fn mul(x: &Limbs, y: &Limbs) -> Limbs {
    let mut t = [0u64; LIMBS];

    for &xi in x {
        // t + xi * y, then fold in m * q so the low limb cancels and the
        // window shifts down by one limb.
        let (lo, mut c1) = mac(t[0], xi, y[0], 0);
        let m = lo.wrapping_mul(INV);
        let (_, mut c2) = mac(lo, m, MODULUS[0], 0);

        for j in 1..LIMBS {
            let (lo, hi) = mac(t[j], xi, y[j], c1);
            c1 = hi;
            let (lo, hi) = mac(lo, m, MODULUS[j], c2);
            c2 = hi;
            t[j - 1] = lo;
        }

        t[LIMBS - 1] = c1 + c2;
    }

    // t < 2q
    reduce(t)
}

/// The reduction rounds of [`mul`] with y = 1.
pub(super) fn from_mont(z: &Limbs) -> Limbs {
    let mut t = *z;

    for _ in 0..LIMBS {
        let m = t[0].wrapping_mul(INV);
        let (_, mut carry) = mac(t[0], m, MODULUS[0], 0);
        for j in 1..LIMBS {
            (t[j - 1], carry) = mac(t[j], m, MODULUS[j], carry);
        }
        t[LIMBS - 1] = carry;
    }

    reduce(t)
}
