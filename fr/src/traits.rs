use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Div;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Neg;
use std::ops::Sub;
use std::ops::SubAssign;
use std::str::FromStr;

use log::trace;
use num_traits::ConstOne;
use num_traits::ConstZero;
use num_traits::One;
use num_traits::Zero;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub trait ModPowU64 {
    #[must_use]
    fn mod_pow_u64(&self, pow: u64) -> Self;
}

/// Multiplicative inverse, total over the field: the inverse of zero is
/// zero.
pub trait Inverse
where
    Self: Sized + Zero,
{
    #[must_use]
    fn inverse(&self) -> Self;

    /// Like [`inverse`](Self::inverse), but `None` for zero.
    fn checked_inverse(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self.inverse())
        }
    }
}

pub trait AddGroup:
    Copy
    + ConstZero
    + Zero
    + Add<Output = Self>
    + Sub<Output = Self>
    + AddAssign
    + SubAssign
{
}

impl<T> AddGroup for T where
    T: Copy
        + ConstZero
        + Zero
        + Add<Output = T>
        + Sub<Output = T>
        + AddAssign
        + SubAssign
{
}

pub trait MulGroup:
    Copy + ConstOne + One + Mul<Output = Self> + Div<Output = Self> + MulAssign
{
}

impl<T> MulGroup for T where
    T: Copy + ConstOne + One + Mul<Output = T> + Div<Output = T> + MulAssign
{
}

pub trait FieldCore:
    Debug + Display + Default + Eq + Ord + Serialize + DeserializeOwned + Hash
{
}

impl<T> FieldCore for T where
    T: Debug
        + Display
        + Default
        + Eq
        + Ord
        + Serialize
        + DeserializeOwned
        + Hash
{
}

pub trait FieldConversions:
    From<u64> + From<i64> + From<u32> + From<i32> + FromStr
{
}

impl<T> FieldConversions for T where
    T: From<u64> + From<i64> + From<u32> + From<i32> + FromStr
{
}

pub trait FiniteField:
    AddGroup
    + MulGroup
    + FieldCore
    + Neg<Output = Self>
    + Inverse
    + ModPowU64
    + FieldConversions
    + Send
    + Sync
{
    /// Montgomery batch inversion: one field inversion plus three
    /// multiplications per element.
    ///
    /// Zeros are skipped and come back as zero, so the output always has
    /// the length of the input.
    fn batch_invert(input: &[Self]) -> Vec<Self> {
        let mut result = vec![Self::ZERO; input.len()];
        if input.is_empty() {
            return result;
        }

        let mut acc = Self::ONE;
        let mut zeros = 0usize;
        for (value, prefix) in input.iter().zip(result.iter_mut()) {
            if value.is_zero() {
                zeros += 1;
                continue;
            }
            *prefix = acc;
            acc *= *value;
        }

        if zeros > 0 {
            trace!("batch inversion skipped {zeros} zeros in {}", input.len());
        }

        acc = acc.inverse();

        for (value, out) in input.iter().zip(result.iter_mut()).rev() {
            if value.is_zero() {
                continue;
            }
            *out = *out * acc;
            acc *= *value;
        }

        result
    }
}
