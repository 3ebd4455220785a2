use crate::errors::CipherError;
use crate::ring::Ring;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const UPPERCASE_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Case class of a letter.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Case {
    Upper,
    Lower,
}

lazy_static! {
    /// Index (0 to 25) to uppercase letter.
    pub static ref INDEX_TO_UPPERCASE_MAP: HashMap<u8, char> = UPPERCASE_LETTERS
        .chars()
        .enumerate()
        .map(|(i, ch)| (i as u8, ch))
        .collect();

    /// Index (0 to 25) to lowercase letter.
    pub static ref INDEX_TO_LOWERCASE_MAP: HashMap<u8, char> = LOWERCASE_LETTERS
        .chars()
        .enumerate()
        .map(|(i, ch)| (i as u8, ch))
        .collect();

    /// Any Latin letter to its index and case class.
    pub static ref LETTER_TO_INDEX_MAP: HashMap<char, (u8, Case)> = {
        let mut map = HashMap::new();

        for (&index, &ch) in INDEX_TO_UPPERCASE_MAP.iter() {
            map.insert(ch, (index, Case::Upper));
        }
        for (&index, &ch) in INDEX_TO_LOWERCASE_MAP.iter() {
            map.insert(ch, (index, Case::Lower));
        }

        map
    };
}

/// Looks up the alphabet index and case of `ch`.
///
/// # Errors
///
/// Returns `CipherError::InvalidCharacter` for anything outside `A-Z` / `a-z`.
pub fn letter_index(ch: char) -> Result<(i64, Case), CipherError> {
    LETTER_TO_INDEX_MAP
        .get(&ch)
        .map(|&(index, case)| (index as i64, case))
        .ok_or(CipherError::InvalidCharacter(ch))
}

/// Renders `index` (reduced mod 26 first) as a letter of the given case.
pub fn letter_at(index: i64, case: Case) -> char {
    let index = Ring::alphabet().normalize(index) as u8;
    match case {
        Case::Upper => INDEX_TO_UPPERCASE_MAP[&index],
        Case::Lower => INDEX_TO_LOWERCASE_MAP[&index],
    }
}
