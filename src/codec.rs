//! Identifier codec
//!
//! Maps backend integer keys to short public codes and back. The encoding
//! is plain positional base-70 over [`ALPHABET`], most significant digit
//! first, so codes stay short while hiding row counts and ordering from
//! casual inspection. Pure functions, no I/O.

use std::fmt;

/// 70 个字符，顺序即数位值
///
/// Contains URL-reserved characters (`!`, `@`, `#`, `$`, `^`, `~`, `[`,
/// `]`, `(`, `)`, `*`); links built from codes must percent-encode them.
/// Changing this string invalidates every code already handed out.
pub const ALPHABET: &str = "ab2c3d4e5f6g7h8i9AjBkCmDnEoFpGqHrJsKtLuMvNwOxPyQzR~S!T@U#V$W^X*Y(Z)][-";

const BASE: u64 = 70;

const DIGITS: &[u8; 70] = b"ab2c3d4e5f6g7h8i9AjBkCmDnEoFpGqHrJsKtLuMvNwOxPyQzR~S!T@U#V$W^X*Y(Z)][-";

/// Reverse lookup table, `INVALID` for bytes outside the alphabet.
const INVALID: u8 = u8::MAX;

const LOOKUP: [u8; 256] = build_lookup();

const fn build_lookup() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < DIGITS.len() {
        table[DIGITS[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Reasons a string is not a valid code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The empty string is never a code.
    Empty,
    /// `character` at char index `position` is not in the alphabet.
    InvalidCharacter { character: char, position: usize },
    /// The value does not fit in a `u64`.
    Overflow,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "code is empty"),
            Self::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "invalid character {:?} at position {}",
                character, position
            ),
            Self::Overflow => write!(f, "code is out of range"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Encode a non-negative integer as a code. `encode(0)` is `"a"`.
pub fn encode(mut n: u64) -> String {
    if n == 0 {
        return (DIGITS[0] as char).to_string();
    }

    // u64::MAX 在 base-70 下是 11 位
    let mut buf = Vec::with_capacity(11);
    while n > 0 {
        buf.push(DIGITS[(n % BASE) as usize]);
        n /= BASE;
    }
    buf.reverse();

    // Alphabet is pure ASCII.
    buf.into_iter().map(char::from).collect()
}

/// Decode a code back into its integer.
///
/// Leading `a` characters are zero digits and are accepted, so every
/// string over the alphabet decodes; only [`encode`]'s output is canonical.
pub fn decode(code: &str) -> Result<u64, DecodeError> {
    if code.is_empty() {
        return Err(DecodeError::Empty);
    }

    let mut value: u64 = 0;
    for (position, character) in code.chars().enumerate() {
        let digit = digit_of(character).ok_or(DecodeError::InvalidCharacter {
            character,
            position,
        })?;
        value = value
            .checked_mul(BASE)
            .and_then(|v| v.checked_add(digit))
            .ok_or(DecodeError::Overflow)?;
    }

    Ok(value)
}

/// Cheap structural check: non-empty and every character in the alphabet.
/// Does not check that the value fits in a `u64`.
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty() && code.chars().all(|c| digit_of(c).is_some())
}

#[inline]
fn digit_of(c: char) -> Option<u64> {
    if !c.is_ascii() {
        return None;
    }
    match LOOKUP[c as usize] {
        INVALID => None,
        d => Some(d as u64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_shape() {
        assert_eq!(ALPHABET.len(), 70);
        assert_eq!(ALPHABET.as_bytes(), DIGITS);
        let unique: std::collections::HashSet<char> = ALPHABET.chars().collect();
        assert_eq!(unique.len(), 70);
    }

    #[test]
    fn test_encode_small_values() {
        assert_eq!(encode(0), "a");
        assert_eq!(encode(1), "b");
        assert_eq!(encode(69), "-");
        assert_eq!(encode(70), "ba");
        assert_eq!(encode(4900), "baa");
    }

    #[test]
    fn test_encode_max() {
        assert_eq!(encode(u64::MAX), "4L5(VKZJ9^i");
        assert_eq!(decode("4L5(VKZJ9^i"), Ok(u64::MAX));
    }

    #[test]
    fn test_decode_known_values() {
        assert_eq!(decode("a"), Ok(0));
        assert_eq!(decode("2tE"), Ok(12345));
        assert_eq!(decode("2(d~"), Ok(1_000_000));
    }

    #[test]
    fn test_decode_leading_zero_digits() {
        assert_eq!(decode("aab"), Ok(1));
        assert_eq!(decode("aaaaaaaaaaaaaaaaaaaa"), Ok(0));
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode(""), Err(DecodeError::Empty));
    }

    #[test]
    fn test_decode_invalid_character() {
        assert_eq!(
            decode("ab1"),
            Err(DecodeError::InvalidCharacter {
                character: '1',
                position: 2
            })
        );
        // 易混淆字符不在字母表里
        for bad in ["0", "1", "l", "I", " ", "/", "%", "é"] {
            assert!(
                matches!(decode(bad), Err(DecodeError::InvalidCharacter { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_decode_overflow() {
        assert_eq!(decode("-----------"), Err(DecodeError::Overflow));
        assert_eq!(decode("4L5(VKZJ9^j"), Err(DecodeError::Overflow));
    }

    #[test]
    fn test_is_valid_code() {
        assert!(is_valid_code("b"));
        assert!(is_valid_code("zzzzzzzzzz"));
        assert!(!is_valid_code(""));
        assert!(!is_valid_code("favicon.ico"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(DecodeError::Empty.to_string(), "code is empty");
        assert!(
            DecodeError::InvalidCharacter {
                character: '0',
                position: 3
            }
            .to_string()
            .contains("position 3")
        );
    }
}
