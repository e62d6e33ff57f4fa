//! Quadratic residuosity and square roots.
//!
//! q - 1 = 2^22 * T with T odd, so square roots use Tonelli-Shanks with 7 as
//! the fixed non-residue.

use num_traits::ConstZero;
use num_traits::One;
use num_traits::Zero;

use crate::constants::{LEGENDRE_EXP, NON_RESIDUE_POW_T, SQRT_EXP, TWO_ADICITY};
use crate::field_element::Element;

impl Element {
    /// Legendre symbol of the element: 0 for zero, 1 for a non-zero square
    /// and -1 otherwise.
    pub fn legendre(&self) -> i8 {
        let l = self.pow_limbs(&LEGENDRE_EXP);
        if l.is_zero() {
            0
        } else if l.is_one() {
            1
        } else {
            -1
        }
    }

    /// A square root of the element, or `None` if it is not a square.
    ///
    /// Which of the two roots is returned is whatever the algorithm lands
    /// on; it is not normalized.
    #[must_use]
    pub fn sqrt(&self) -> Option<Self> {
        // w = x^((T-1)/2), y = x^((T+1)/2), b = x^T
        let w = self.pow_limbs(&SQRT_EXP);
        let mut y = *self * w;
        let mut b = w * y;
        let mut g = Element::from_raw_limbs(NON_RESIDUE_POW_T);
        let mut r = TWO_ADICITY;

        // b^(2^(S-1)) = x^((q-1)/2)
        let mut t = b;
        for _ in 0..r - 1 {
            t = t.square();
        }
        if t.is_zero() {
            return Some(Self::ZERO);
        }
        if !t.is_one() {
            return None;
        }

        loop {
            let mut m = 0;
            t = b;
            while !t.is_one() {
                t = t.square();
                m += 1;
            }

            if m == 0 {
                return Some(y);
            }

            // t = g^(2^(r-m-1))
            t = g;
            for _ in 0..r - m - 1 {
                t = t.square();
            }

            g = t.square();
            y *= t;
            b *= g;
            r = m;
        }
    }

    /// Set `self` to a square root of `x`. If `x` is not a square, `self`
    /// is left untouched and `None` is returned.
    pub fn set_sqrt(&mut self, x: &Self) -> Option<&mut Self> {
        let root = x.sqrt()?;
        *self = root;
        Some(self)
    }

    /// Whether the element has a square root. Zero counts as a square.
    pub fn is_square(&self) -> bool {
        self.legendre() >= 0
    }
}
