pub use crate::{fe, fe_array, fe_vec};
pub use crate::{
    backend::Backend,
    error::{FieldError, ParseElementError},
    field_element::Element,
    traits::{FiniteField, Inverse, ModPowU64},
};

pub use num_traits::{ConstOne, ConstZero, One, Zero};
