mod integration;

#[cfg(test)]
mod tests {
    use fr::prelude::*;
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;

    /// Any element, built from four random limbs reduced mod q.
    #[derive(Debug, Clone, Copy)]
    struct Fe(Element);

    impl Arbitrary for Fe {
        fn arbitrary(g: &mut Gen) -> Self {
            let (a, b, c, d) = <(u64, u64, u64, u64)>::arbitrary(g);
            Fe(Element::from_regular([a, b, c, d]))
        }
    }

    #[quickcheck]
    fn backends_agree_on_products(x: Fe, y: Fe) -> bool {
        let (x, y) = (x.0, y.0);
        x.mul_with(&y, Backend::Cios) == x.mul_with(&y, Backend::Sos)
    }

    #[quickcheck]
    fn active_backend_is_used_by_the_operator(x: Fe, y: Fe) -> bool {
        let (x, y) = (x.0, y.0);
        x * y == x.mul_with(&y, Element::BACKEND)
    }

    #[quickcheck]
    fn backends_agree_on_squares(x: Fe) -> bool {
        let x = x.0;
        x.mul_with(&x, Backend::Cios) == x.mul_with(&x, Backend::Sos)
    }

    #[quickcheck]
    fn stored_limbs_stay_below_modulus(x: Fe, y: Fe) -> bool {
        let below = |fe: Element| {
            Element::try_from_raw_limbs(fe.raw_limbs()).is_some()
        };
        let (x, y) = (x.0, y.0);
        [x + y, x - y, x * y, -x, x.double(), x.halve(), x.inverse()]
            .into_iter()
            .all(below)
    }

    #[quickcheck]
    fn batch_inversion_matches_single_inversion(xs: Vec<Fe>) -> bool {
        let xs: Vec<Element> = xs.into_iter().map(|fe| fe.0).collect();
        Element::batch_invert(&xs)
            .into_iter()
            .zip(xs.iter())
            .all(|(inv, x)| inv == x.inverse())
    }

    #[quickcheck]
    fn sqrt_of_square_is_plus_or_minus(x: Fe) -> bool {
        let x = x.0;
        match x.square().sqrt() {
            Some(r) => r == x || r == -x,
            None => false,
        }
    }

    #[test]
    fn backend_names() {
        assert_eq!("cios", Backend::Cios.name());
        assert_eq!("sos", Backend::Sos.name());
        assert_eq!(Backend::ACTIVE, Element::BACKEND);
    }
}
