//! Integer literals with an optional sign and base prefix.
//!
//! `0x`/`0X` selects base 16, `0b`/`0B` base 2, `0o`/`0O` or a bare leading
//! `0` base 8, and anything else base 10. An underscore may follow the base
//! prefix or a digit, as long as a digit comes after it.

use num_bigint::{BigInt, BigUint, Sign};

use crate::error::ParseElementError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prev {
    Start,
    Prefix,
    Digit,
    Underscore,
}

fn split_radix(s: &str) -> (u32, &str, bool) {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' | b'X' => return (16, &s[2..], true),
            b'b' | b'B' => return (2, &s[2..], true),
            b'o' | b'O' => return (8, &s[2..], true),
            // the leading zero is itself a digit
            _ => return (8, s, false),
        }
    }
    (10, s, false)
}

pub(crate) fn parse_big_int(s: &str) -> Result<BigInt, ParseElementError> {
    if s.is_empty() {
        return Err(ParseElementError::Empty);
    }

    let (sign, unsigned, sign_len) = match s.as_bytes()[0] {
        b'-' => (Sign::Minus, &s[1..], 1),
        b'+' => (Sign::Plus, &s[1..], 1),
        _ => (Sign::Plus, s, 0),
    };

    let (radix, body, has_prefix) = split_radix(unsigned);
    let offset = sign_len + (unsigned.len() - body.len());

    let mut digits = Vec::with_capacity(body.len());
    let mut prev = if has_prefix { Prev::Prefix } else { Prev::Start };
    let mut misplaced = None;

    for (i, c) in body.char_indices() {
        if c == '_' {
            if !matches!(prev, Prev::Prefix | Prev::Digit) {
                misplaced.get_or_insert(offset + i);
            }
            prev = Prev::Underscore;
            continue;
        }

        let digit = c
            .to_digit(radix)
            .ok_or(ParseElementError::InvalidDigit { digit: c, radix })?;
        digits.push(digit as u8);
        prev = Prev::Digit;
    }

    if digits.is_empty() {
        return Err(ParseElementError::MissingDigits);
    }
    if prev == Prev::Underscore {
        misplaced.get_or_insert(s.len() - 1);
    }
    if let Some(position) = misplaced {
        return Err(ParseElementError::MisplacedUnderscore { position });
    }

    let magnitude = BigUint::from_radix_be(&digits, radix)
        .ok_or(ParseElementError::MissingDigits)?;
    Ok(BigInt::from_biguint(sign, magnitude))
}
