//! Arithmetic in the scalar field of the BLS24-315 curve.
//!
//! The field has prime order
//! q = 11502027791375260645628074404575422495959608200132055716665986169834464870401.
//! Elements are kept in Montgomery form on four 64-bit limbs; see
//! [`Element`].
//!
//! ```
//! use fr::prelude::*;
//!
//! let x = fe!(3);
//! let y = x.inverse();
//! assert_eq!(x * y, Element::ONE);
//! assert_eq!(fe!(4).sqrt().map(|r| r.square()), Some(fe!(4)));
//! ```

pub(crate) mod arithmetic;
pub mod backend;
pub mod constants;
mod conversion;
pub mod error;
pub mod field_element;
mod inversion;
pub mod macros;
mod parse;
pub mod prelude;
mod random;
mod sqrt;
pub mod traits;

pub use constants::modulus;
pub use error::{FieldError, ParseElementError, Result};
pub use field_element::Element;
