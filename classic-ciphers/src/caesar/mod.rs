//! Case-preserving shift cipher over the Latin alphabet.

use crate::errors::CipherError;
use crate::preset::alphabet::{letter_at, letter_index};
use crate::ring::Ring;

/// Reduces any integer shift into `[0, 26)`, e.g. `-7` becomes `19`.
pub fn normalize_shift(shift: i64) -> i64 {
    Ring::alphabet().normalize(shift)
}

/// Parses a shift amount, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns `CipherError::MalformedShift` if the text is not an integer.
///
/// # Example
///
/// ```
/// # use classic_ciphers::caesar::parse_shift;
/// assert_eq!(parse_shift(" -7 ").unwrap(), -7);
/// assert!(parse_shift("three").is_err());
/// ```
pub fn parse_shift(text: &str) -> Result<i64, CipherError> {
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .map_err(|e| CipherError::MalformedShift(format!("{:?} ({})", trimmed, e)))
}

/// Shifts every letter of `message` by `shift`, keeping its case.
///
/// Whitespace is removed. There is no separate decrypt mode: shifting by
/// `-shift` undoes a shift by `shift`.
///
/// # Errors
///
/// Returns `CipherError::InvalidCharacter` for anything that is not a Latin letter.
///
/// # Example
///
/// ```
/// # use classic_ciphers::caesar::transform;
/// assert_eq!(transform("Hello", 3).unwrap(), "Khoor");
/// assert_eq!(transform("XYZ", -1).unwrap(), "WXY");
/// ```
pub fn transform(message: &str, shift: i64) -> Result<String, CipherError> {
    let ring = Ring::alphabet();
    let shift = normalize_shift(shift);
    log::trace!("shifting {} chars by {}", message.len(), shift);

    message
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            let (index, case) = letter_index(c)?;
            Ok(letter_at(ring.add(index, shift), case))
        })
        .collect()
}

pub fn encrypt(plaintext: &str, shift: i64) -> Result<String, CipherError> {
    transform(plaintext, shift)
}

pub fn decrypt(ciphertext: &str, shift: i64) -> Result<String, CipherError> {
    transform(ciphertext, Ring::alphabet().neg(shift))
}
