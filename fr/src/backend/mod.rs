//! Montgomery multiplication backends.
//!
//! [`Backend::Cios`] is the reference algorithm. [`Backend::Sos`] computes the
//! same function with a different schedule and is selected with the `sos`
//! cargo feature. Both produce identical, fully reduced limbs for every pair
//! of inputs below q.

mod cios;
mod sos;

use crate::arithmetic::Limbs;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Coarsely integrated operand scanning.
    Cios,
    /// Separated operand scanning: full 512-bit product, then reduction.
    Sos,
}

impl Backend {
    /// The backend used by [`Element`](crate::Element) arithmetic.
    #[cfg(not(feature = "sos"))]
    pub const ACTIVE: Backend = Backend::Cios;

    /// The backend used by [`Element`](crate::Element) arithmetic.
    #[cfg(feature = "sos")]
    pub const ACTIVE: Backend = Backend::Sos;

    pub const fn name(self) -> &'static str {
        match self {
            Backend::Cios => "cios",
            Backend::Sos => "sos",
        }
    }

    /// x * y * R^-1 mod q
    #[inline]
    pub(crate) fn mul(self, x: &Limbs, y: &Limbs) -> Limbs {
        match self {
            Backend::Cios => cios::mul(x, y),
            Backend::Sos => sos::mul(x, y),
        }
    }

    /// z * R^-1 mod q
    #[inline]
    pub(crate) fn from_mont(self, z: &Limbs) -> Limbs {
        match self {
            Backend::Cios => cios::from_mont(z),
            Backend::Sos => sos::from_mont(z),
        }
    }
}

#[inline(always)]
pub(crate) fn mul(x: &Limbs, y: &Limbs) -> Limbs {
    Backend::ACTIVE.mul(x, y)
}

#[inline(always)]
pub(crate) fn from_mont(z: &Limbs) -> Limbs {
    Backend::ACTIVE.from_mont(z)
}
