//! Field inversion by the binary extended Euclidean algorithm.

use num_traits::ConstZero;
use num_traits::Zero;

use crate::arithmetic::{self, Limbs};
use crate::constants::{LIMBS, MODULUS, R2};
use crate::field_element::Element;
use crate::traits::Inverse;

impl Inverse for Element {
    /// Binary extended GCD on (q, x), tracking Bézout coefficients that are
    /// already scaled by R^2. Since x is stored as `xR`, the coefficient that
    /// ends up paired with 1 is `(xR)^-1 * R^2 = x^-1 * R`, which is the
    /// Montgomery form of the inverse.
    ///
    /// The inverse of zero is zero.
    fn inverse(&self) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }

        let mut u = MODULUS;
        let mut v = self.0;
        let mut r: Limbs = [0; LIMBS];
        let mut s = R2;

        loop {
            while v[0] & 1 == 0 {
                v = arithmetic::shr1(&v);
                s = arithmetic::halve(&s);
            }
            while u[0] & 1 == 0 {
                u = arithmetic::shr1(&u);
                r = arithmetic::halve(&r);
            }

            if arithmetic::geq(&v, &u) {
                v = arithmetic::sub_limbs(&v, &u).0;
                s = arithmetic::sub(&s, &r);
            } else {
                u = arithmetic::sub_limbs(&u, &v).0;
                r = arithmetic::sub(&r, &s);
            }

            if arithmetic::is_one(&u) {
                return Self(r);
            }
            if arithmetic::is_one(&v) {
                return Self(s);
            }
        }
    }
}

impl Element {
    /// Replace `self` with its inverse. Zero stays zero.
    pub fn invert(&mut self) -> &mut Self {
        *self = Inverse::inverse(self);
        self
    }
}
