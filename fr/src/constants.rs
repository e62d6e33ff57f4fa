//! Modulus and derived Montgomery constants of the scalar field.
//!
//! All multi-word constants are stored as four 64-bit limbs, least
//! significant limb first.

use std::sync::OnceLock;

use num_bigint::BigUint;

/// Number of 64-bit limbs in an element.
pub const LIMBS: usize = 4;

/// Number of bits needed to represent the modulus.
pub const BITS: usize = 253;

/// Length of the canonical byte encoding.
pub const BYTES: usize = LIMBS * 8;

/// The field modulus in decimal.
pub const MODULUS_STR: &str =
    "11502027791375260645628074404575422495959608200132055716665986169834464870401";

/// q
pub const MODULUS: [u64; LIMBS] = [
    1860204336533995521,
    14466829657984787300,
    2737202078770428568,
    1832378743606059307,
];

/// -q^{-1} mod 2^64
pub(crate) const INV: u64 = 2184305180030271487;

/// R mod q with R = 2^256, i.e. one in Montgomery form.
pub(crate) const R: [u64; LIMBS] = [
    18291444782079148022,
    2905656009828539926,
    9521467359714817544,
    122956637648958544,
];

/// R^2 mod q
pub(crate) const R2: [u64; LIMBS] = [
    6242551132904523857,
    16951295617263545407,
    10923821274252739203,
    584663452775307866,
];

/// (q - 1) / 2
pub(crate) const LEGENDRE_EXP: [u64; LIMBS] = [
    930102168266997760,
    7233414828992393650,
    10591973076239990092,
    916189371803029653,
];

/// (q - 1) / 2 + 1, the smallest value strictly larger than its negation.
pub(crate) const HALF_MODULUS_PLUS_ONE: [u64; LIMBS] = [
    930102168266997761,
    7233414828992393650,
    10591973076239990092,
    916189371803029653,
];

/// S in q - 1 = 2^S * T.
pub(crate) const TWO_ADICITY: u32 = 22;

/// (T - 1) / 2
pub(crate) const SQRT_EXP: [u64; LIMBS] = [
    9927842552664029697,
    2663089255798135244,
    4270070281000555423,
    218436568213,
];

/// 7^T in Montgomery form. 7 is the smallest quadratic non-residue.
pub(crate) const NON_RESIDUE_POW_T: [u64; LIMBS] = [
    2675275753227370406,
    18180984726441494600,
    9289909143059162211,
    12979261504110204,
];

static MODULUS_BIG: OnceLock<BigUint> = OnceLock::new();

/// The modulus as an arbitrary-precision integer.
pub fn modulus() -> BigUint {
    modulus_ref().clone()
}

pub(crate) fn modulus_ref() -> &'static BigUint {
    MODULUS_BIG.get_or_init(|| limbs_to_big_uint(&MODULUS))
}

pub(crate) fn limbs_to_big_uint(limbs: &[u64; LIMBS]) -> BigUint {
    let mut bytes = [0u8; BYTES];
    for (chunk, limb) in bytes.chunks_exact_mut(8).zip(limbs.iter().rev()) {
        chunk.copy_from_slice(&limb.to_be_bytes());
    }
    BigUint::from_bytes_be(&bytes)
}

#[cfg(test)]
mod tests {
    use num_traits::One;

    use super::*;

    fn big(limbs: &[u64; LIMBS]) -> BigUint {
        limbs_to_big_uint(limbs)
    }

    #[test]
    fn modulus_matches_its_decimal_form() {
        let q: BigUint = MODULUS_STR.parse().unwrap();
        assert_eq!(q, modulus());
        assert_eq!(BITS as u64, q.bits());
    }

    #[test]
    fn inv_is_negated_inverse_of_lowest_limb() {
        assert_eq!(u64::MAX, INV.wrapping_mul(MODULUS[0]));
    }

    #[test]
    fn montgomery_radix_constants() {
        let q = modulus();
        let r = BigUint::one() << 256;
        assert_eq!(&r % &q, big(&R));
        assert_eq!((&r * &r) % &q, big(&R2));
    }

    #[test]
    fn square_root_constants() {
        let q = modulus();
        let q_minus_one = &q - 1u32;
        let t = &q_minus_one >> TWO_ADICITY;
        assert!(t.bit(0));
        assert_eq!(q_minus_one, &t << TWO_ADICITY);
        assert_eq!((&t - 1u32) >> 1, big(&SQRT_EXP));
        assert_eq!(&q_minus_one >> 1, big(&LEGENDRE_EXP));
        assert_eq!((&q_minus_one >> 1) + 1u32, big(&HALF_MODULUS_PLUS_ONE));

        let r = (BigUint::one() << 256) % &q;
        let expected = (BigUint::from(7u32).modpow(&t, &q) * r) % &q;
        assert_eq!(expected, big(&NON_RESIDUE_POW_T));
    }

    #[test]
    fn seven_is_a_non_residue() {
        let q = modulus();
        let euler = BigUint::from(7u32).modpow(&big(&LEGENDRE_EXP), &q);
        assert_eq!(&q - 1u32, euler);
    }
}
