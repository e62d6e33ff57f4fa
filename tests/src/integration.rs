#[cfg(test)]
mod integration_tests {
    use fr::constants::{BYTES, MODULUS_STR};
    use fr::prelude::*;
    use fr::Result;
    use num_bigint::{BigInt, BigUint};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn five_converts_back_to_five() {
        let five = Element::from_u64(5);
        assert_eq!([5, 0, 0, 0], five.to_regular());
        assert_eq!(BigUint::from(5u32), five.to_big_uint());
        assert_eq!("5", five.to_string());
    }

    #[test]
    fn two_times_its_inverse_is_one() {
        let two = Element::from_u64(2);
        assert_eq!(Element::ONE, two.inverse() * two);
        assert_eq!(Element::ONE, two / two);
    }

    #[test]
    fn square_root_of_four() {
        let four = Element::from_u64(4);
        let r = four.sqrt().expect("4 is a square");
        assert_eq!(four, r.square());
        assert!(r == fe!(2) || r == -fe!(2));
    }

    #[test]
    fn legendre_of_zero() {
        assert_eq!(0, Element::from_u64(0).legendre());
        assert_eq!(Some(Element::ZERO), Element::ZERO.sqrt());
    }

    #[test]
    fn encoded_modulus_decodes_to_zero() {
        let q: BigUint = MODULUS_STR.parse().unwrap();
        let mut bytes = [0u8; BYTES];
        let be = q.to_bytes_be();
        bytes[BYTES - be.len()..].copy_from_slice(&be);

        assert_eq!(Element::ZERO, Element::from_bytes(&bytes));
        assert_eq!(Element::ZERO, Element::from(bytes));
        assert_eq!(q, fr::modulus());
    }

    #[test]
    fn batch_invert_with_a_zero_in_the_middle() {
        let input = fe_array![2, 0, 3];
        let output = Element::batch_invert(&input);
        assert_eq!(
            vec![fe!(2).inverse(), Element::ZERO, fe!(3).inverse()],
            output
        );
    }

    #[test]
    fn canonical_bytes_round_trip() -> Result<()> {
        let mut rng = ChaCha20Rng::seed_from_u64(2024);
        for _ in 0..64 {
            let fe = Element::random_from(&mut rng)?;
            let bytes = fe.bytes();
            assert_eq!(bytes, Element::from_bytes(&bytes).bytes());
            assert_eq!(bytes.to_vec(), fe.marshal());
        }
        Ok(())
    }

    #[test]
    fn aliasing_in_place_multiplication() -> Result<()> {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let x = Element::random_from(&mut rng)?;

        let mut z = x;
        z *= z;
        let tmp = x * x;
        assert_eq!(tmp, z);
        Ok(())
    }

    #[test]
    fn random_values_are_reduced() -> Result<()> {
        let q = fr::modulus();
        let mut fe = Element::ZERO;
        for _ in 0..32 {
            fe.set_random()?;
            assert!(fe.to_big_uint() < q);
            assert!(fe.to_big_uint_montgomery() < q);
        }
        Ok(())
    }

    #[test]
    fn display_prefers_short_signed_form() {
        assert_eq!("-1", (-Element::ONE).to_string());
        assert_eq!("-1", fe!(-1).to_string());
        let big = fe!(1u128 << 100);
        let two_100 = BigUint::from(1u32) << 100u32;
        assert_eq!(two_100.to_string(), big.to_string());
        let negated = fr::modulus() - &two_100;
        assert_eq!(negated.to_string(), (-big).to_string());

        assert_eq!("-18446744073709551615", (-fe!(u64::MAX)).to_string());
        let two_64 = BigUint::from(1u32) << 64u32;
        let negated = fr::modulus() - two_64;
        assert_eq!(negated.to_string(), (-fe!(1u128 << 64)).to_string());
    }

    #[test]
    fn parsing_is_fallible() {
        assert_eq!(fe!(0x1f), "0x_1f".parse::<Element>().unwrap());
        assert_eq!(fe!(-8), "-0o10".parse::<Element>().unwrap());
        assert!(matches!(
            "1__0".parse::<Element>(),
            Err(ParseElementError::MisplacedUnderscore { position: 2 })
        ));

        let mut fe = fe!(1);
        let err = fe.set_string("0x").unwrap_err();
        assert_eq!(FieldError::Parse(ParseElementError::MissingDigits), err);
        assert_eq!(fe!(1), fe);
    }

    #[test]
    fn big_integers_reduce_modulo_q() {
        let q = BigInt::from(fr::modulus());
        assert_eq!(Element::ZERO, Element::from_big_int(&q));
        assert_eq!(-Element::ONE, Element::from_big_int(&BigInt::from(-1)));
        assert_eq!(Element::ONE, Element::from_big_int(&(-&q + 1)));
        assert_eq!(fe!(-3), Element::from_big_int(&(&q * 5 - 3)));
    }

    #[test]
    fn ordering_uses_regular_values() {
        let mut values = fe_vec![5, -1, 0, 3];
        values.sort();
        assert_eq!(fe_vec![0, 3, 5, -1], values);
        assert!(fe!(-1).lexicographically_largest());
        assert!(!fe!(1).lexicographically_largest());
    }

    #[test]
    fn serde_uses_decimal_strings() {
        let values = fe_vec![0, 42, -7];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(r#"["0","42","-7"]"#, json);
        let back: Vec<Element> = serde_json::from_str(&json).unwrap();
        assert_eq!(values, back);
        assert!(serde_json::from_str::<Element>(r#""0b2""#).is_err());
    }

    #[test]
    fn dynamic_input_rejects_unknown_types() {
        assert_eq!(fe!(3), Element::try_from_any(&3u64).unwrap());
        assert_eq!(
            Err(FieldError::UnsupportedInputType("char")),
            Element::try_from_any(&'3')
        );
    }
}
