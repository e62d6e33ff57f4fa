//! Shorthand for building [`Element`](crate::field_element::Element)s.

/// Simplifies constructing [`Element`](crate::field_element::Element)s.
///
/// Accepts anything `Element` implements `From` for, including negative
/// integers.
///
/// ```
/// use fr::prelude::*;
///
/// let a = fe!(42);
/// assert_eq!(a, Element::from(42));
/// assert_eq!(fe!(-1) + fe!(1), Element::ZERO);
/// ```
#[macro_export]
macro_rules! fe {
    ($value:expr) => {
        $crate::field_element::Element::from($value)
    };
}

/// Create a [`Vec`] of [`Element`](crate::field_element::Element)s.
///
/// ```
/// use fr::prelude::*;
///
/// let repeated = fe_vec![7; 3];
/// assert_eq!(repeated, vec![Element::from(7); 3]);
/// ```
#[macro_export]
macro_rules! fe_vec {
    ($b:expr; $n:expr) => {
        vec![$crate::field_element::Element::from($b); $n]
    };
    ($($b:expr),* $(,)?) => {
        vec![$($crate::field_element::Element::from($b)),*]
    };
}

/// Create an array of [`Element`](crate::field_element::Element)s.
///
/// ```
/// use fr::prelude::*;
///
/// let arr = fe_array![1, 2, 3];
/// assert_eq!(arr, [Element::from(1), Element::from(2), Element::from(3)]);
/// ```
#[macro_export]
macro_rules! fe_array {
    ($b:expr; $n:expr) => {
        [$crate::field_element::Element::from($b); $n]
    };
    ($($b:expr),* $(,)?) => {
        [$($crate::field_element::Element::from($b)),*]
    };
}
