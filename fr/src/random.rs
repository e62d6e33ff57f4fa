//! Random field elements.

use log::warn;
use rand::distr::Distribution;
use rand::distr::StandardUniform;
use rand::rngs::OsRng;
use rand::Rng;
use rand::TryCryptoRng;

use crate::arithmetic::{self, Limbs};
use crate::constants::{BYTES, LIMBS, MODULUS};
use crate::error::{FieldError, Result};
use crate::field_element::Element;

impl Element {
    /// Map 32 random bytes to an element. Each 8-byte chunk, read
    /// big-endian, becomes one limb of the Montgomery representation; the
    /// top limb is reduced modulo the top limb of q and a final conditional
    /// subtraction brings the value below q.
    ///
    /// The result is close to, but not exactly, uniform.
    pub fn from_random_bytes(bytes: &[u8; BYTES]) -> Self {
        let mut limbs: Limbs = [0; LIMBS];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_be_bytes(word);
        }
        limbs[LIMBS - 1] %= MODULUS[LIMBS - 1];
        Self(arithmetic::reduce(limbs))
    }

    /// Draw an element using randomness from `rng`. A failing source is
    /// reported as [`FieldError::RandomSource`] carrying its message.
    pub fn random_from<R>(rng: &mut R) -> Result<Self>
    where
        R: TryCryptoRng + ?Sized,
    {
        let mut bytes = [0u8; BYTES];
        rng.try_fill_bytes(&mut bytes).map_err(|err| {
            warn!("failed to read random bytes for field element: {err}");
            FieldError::RandomSource(err.to_string())
        })?;
        Ok(Self::from_random_bytes(&bytes))
    }

    /// Draw an element from the operating system's randomness source.
    pub fn random() -> Result<Self> {
        Self::random_from(&mut OsRng)
    }

    pub fn set_random_from<R>(&mut self, rng: &mut R) -> Result<&mut Self>
    where
        R: TryCryptoRng + ?Sized,
    {
        *self = Self::random_from(rng)?;
        Ok(self)
    }

    /// Set `self` to a random element, using the operating system's
    /// randomness source. On failure `self` is left untouched.
    pub fn set_random(&mut self) -> Result<&mut Self> {
        self.set_random_from(&mut OsRng)
    }
}

impl Distribution<Element> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Element {
        let mut bytes = [0u8; BYTES];
        rng.fill_bytes(&mut bytes);
        Element::from_random_bytes(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use num_traits::ConstZero;
    use num_traits::Zero;
    use proptest::prop_assert;
    use rand::SeedableRng;
    use rand::TryRngCore;
    use rand_chacha::ChaCha20Rng;
    use test_strategy::proptest;

    use super::*;

    struct FailingRng;

    impl TryRngCore for FailingRng {
        type Error = &'static str;

        fn try_next_u32(&mut self) -> std::result::Result<u32, Self::Error> {
            Err("entropy pool drained")
        }

        fn try_next_u64(&mut self) -> std::result::Result<u64, Self::Error> {
            Err("entropy pool drained")
        }

        fn try_fill_bytes(
            &mut self,
            _dest: &mut [u8],
        ) -> std::result::Result<(), Self::Error> {
            Err("entropy pool drained")
        }
    }

    impl TryCryptoRng for FailingRng {}

    #[proptest]
    fn random_bytes_give_reduced_limbs(bytes: [u8; BYTES]) {
        let fe = Element::from_random_bytes(&bytes);
        prop_assert!(!arithmetic::geq(&fe.raw_limbs(), &MODULUS));
    }

    #[test]
    fn random_bytes_are_read_big_endian_per_limb() {
        let mut bytes = [0u8; BYTES];
        bytes[7] = 5;
        bytes[15] = 1;
        let fe = Element::from_random_bytes(&bytes);
        assert_eq!([5, 1, 0, 0], fe.raw_limbs());
    }

    #[test]
    fn all_ones_bytes_are_reduced() {
        let fe = Element::from_random_bytes(&[0xff; BYTES]);
        let top = u64::MAX % MODULUS[3];
        let expected = arithmetic::reduce([u64::MAX, u64::MAX, u64::MAX, top]);
        assert_eq!(expected, fe.raw_limbs());
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let mut a = ChaCha20Rng::seed_from_u64(42);
        let mut b = ChaCha20Rng::seed_from_u64(42);
        let x = Element::random_from(&mut a).unwrap();
        let y = Element::random_from(&mut b).unwrap();
        assert_eq!(x, y);
        assert_ne!(x, Element::random_from(&mut a).unwrap());
    }

    #[test]
    fn sampling_matches_random_from() {
        let mut a = ChaCha20Rng::seed_from_u64(7);
        let mut b = ChaCha20Rng::seed_from_u64(7);
        let sampled: Element = a.random();
        assert_eq!(sampled, Element::random_from(&mut b).unwrap());
    }

    #[test]
    fn failing_source_is_reported_and_leaves_self_untouched() {
        let mut fe = Element::from_u64(9);
        let err = fe.set_random_from(&mut FailingRng).unwrap_err();
        assert_eq!(
            FieldError::RandomSource("entropy pool drained".into()),
            err
        );
        assert_eq!(Element::from_u64(9), fe);
    }

    #[test]
    fn os_randomness_is_available() {
        let mut fe = Element::ZERO;
        fe.set_random().unwrap();
        let other = Element::random().unwrap();
        assert!(!(fe.is_zero() && other.is_zero()));
    }
}
