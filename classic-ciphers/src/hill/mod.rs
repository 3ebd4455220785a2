//! # Hill Cipher
//!
//! A 2×2 Hill cipher over the Latin alphabet. Text is stripped of whitespace,
//! padded to even length, split into letter pairs and every pair is multiplied
//! by the key matrix mod 26. Decryption is the same transform applied with the
//! inverse key.

pub mod key;

pub use key::HillKey;

use crate::errors::CipherError;
use crate::preset::alphabet::{Case, letter_at, letter_index};
use crate::ring::matrix_ops::matrix_vector_mul;
use crate::ring::{Ring, Vector};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Letter appended to odd-length messages.
pub const DEFAULT_PADDING: char = 'z';

/// Hill cipher engine. Holds only the padding letter.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HillCipher {
    padding: char,
}

impl Default for HillCipher {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
        }
    }
}

/// Encryption and decryption of one input text, the two rows the legacy
/// program printed as a table.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HillReport {
    pub encryption: String,
    pub decryption: String,
}

impl HillReport {
    pub fn to_json(&self) -> Result<String, CipherError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl HillCipher {
    /// Creates an engine padding odd-length messages with `padding`.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidParameters` if `padding` is not an ASCII letter.
    pub fn try_with(padding: char) -> Result<Self, CipherError> {
        if !padding.is_ascii_alphabetic() {
            return Err(CipherError::InvalidParameters(format!(
                "Padding must be a Latin letter, got {:?}",
                padding
            )));
        }

        Ok(Self {
            padding: padding.to_ascii_lowercase(),
        })
    }

    pub fn padding(&self) -> char {
        self.padding
    }

    /// Strips whitespace, pads to even length and folds case to lowercase.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_ciphers::hill::HillCipher;
    /// let hill = HillCipher::default();
    /// assert_eq!(hill.normalize("ab"), "ab");
    /// assert_eq!(hill.normalize("A bC"), "abcz");
    /// ```
    pub fn normalize(&self, message: &str) -> String {
        let mut normalized: String = message
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        if normalized.chars().count() % 2 != 0 {
            normalized.push(self.padding);
        }

        normalized
    }

    /// Splits the normalized message into consecutive letter pairs as residues.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidCharacter` for anything that is not a Latin letter.
    pub fn blocks(&self, message: &str) -> Result<Vec<Vector>, CipherError> {
        let indices = self
            .normalize(message)
            .chars()
            .map(|c| letter_index(c).map(|(index, _)| index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(indices.into_iter().tuples().map(|(x, y)| [x, y]).collect())
    }

    /// Applies `key` to every block of `message` and renders uppercase letters.
    ///
    /// Serves both directions: pass the inverse key to decrypt.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_ciphers::hill::{HillCipher, HillKey};
    /// let hill = HillCipher::default();
    /// let key = HillKey::new(3, 3, 2, 5);
    /// assert_eq!(hill.transform("help", &key).unwrap(), "HIAT");
    /// ```
    pub fn transform(&self, message: &str, key: &HillKey) -> Result<String, CipherError> {
        let ring = Ring::alphabet();
        let matrix = key.matrix();

        let blocks = self.blocks(message)?;
        log::trace!("transforming {} blocks with {}", blocks.len(), key);

        Ok(blocks
            .iter()
            .flat_map(|block| matrix_vector_mul(&matrix, block, &ring))
            .map(|value| letter_at(value, Case::Upper))
            .collect())
    }

    pub fn encrypt(&self, plaintext: &str, key: &HillKey) -> Result<String, CipherError> {
        self.transform(plaintext, key)
    }

    /// Transforms `ciphertext` with the inverse of `key`.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::NonInvertibleKey` before touching the text when
    /// `key` has no inverse mod 26.
    pub fn decrypt(&self, ciphertext: &str, key: &HillKey) -> Result<String, CipherError> {
        let inverse = key.inverse()?;
        self.transform(ciphertext, &inverse)
    }

    /// Runs `text` through both the key and its inverse.
    ///
    /// Both rows are derived from the same input text; `decryption` is not
    /// the decryption of `encryption`.
    pub fn report(&self, text: &str, key: &HillKey) -> Result<HillReport, CipherError> {
        let inverse = key.inverse()?;

        Ok(HillReport {
            encryption: self.transform(text, key)?,
            decryption: self.transform(text, &inverse)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textbook_key() -> HillKey {
        HillKey::new(3, 3, 2, 5)
    }

    #[test]
    fn test_encrypt_and_decrypt_help() -> Result<(), CipherError> {
        let hill = HillCipher::default();
        let ciphertext = hill.encrypt("help", &textbook_key())?;
        assert_eq!(ciphertext, "HIAT");
        assert_eq!(hill.decrypt(&ciphertext, &textbook_key())?, "HELP");
        Ok(())
    }

    #[test]
    fn test_odd_length_is_padded_once() -> Result<(), CipherError> {
        let hill = HillCipher::default();
        assert_eq!(hill.normalize("ab"), "ab");
        assert_eq!(hill.normalize("abc"), "abcz");
        assert_eq!(hill.blocks("abc")?, vec![[0, 1], [2, 25]]);

        let ciphertext = hill.encrypt("abc", &textbook_key())?;
        assert_eq!(ciphertext.len(), 4);
        assert_eq!(hill.decrypt(&ciphertext, &textbook_key())?, "ABCZ");
        Ok(())
    }

    #[test]
    fn test_whitespace_and_case_are_normalized() -> Result<(), CipherError> {
        let hill = HillCipher::default();
        let spaced = hill.encrypt(" He L\tp ", &textbook_key())?;
        assert_eq!(spaced, hill.encrypt("help", &textbook_key())?);
        assert!(!spaced.contains(char::is_whitespace));
        Ok(())
    }

    #[test]
    fn test_empty_message() -> Result<(), CipherError> {
        let hill = HillCipher::default();
        assert_eq!(hill.encrypt("", &textbook_key())?, "");
        assert_eq!(hill.encrypt("   ", &textbook_key())?, "");
        Ok(())
    }

    #[test]
    fn test_custom_padding() -> Result<(), CipherError> {
        let hill = HillCipher::try_with('X')?;
        assert_eq!(hill.padding(), 'x');
        assert_eq!(hill.normalize("abc"), "abcx");
        assert!(HillCipher::try_with('1').is_err());
        assert!(HillCipher::try_with(' ').is_err());
        Ok(())
    }

    #[test]
    fn test_rejects_non_letters() {
        let hill = HillCipher::default();
        assert!(matches!(
            hill.encrypt("help!", &textbook_key()),
            Err(CipherError::InvalidCharacter('!'))
        ));
        assert!(matches!(
            hill.encrypt("h3lp", &textbook_key()),
            Err(CipherError::InvalidCharacter('3'))
        ));
    }

    #[test]
    fn test_decrypt_with_singular_key_fails() {
        let hill = HillCipher::default();
        let key = HillKey::new(2, 4, 4, 8);
        // encryption still runs, the key just cannot be undone
        assert!(hill.encrypt("help", &key).is_ok());
        assert!(matches!(
            hill.decrypt("help", &key),
            Err(CipherError::NonInvertibleKey { determinant: 0, .. })
        ));
        assert!(hill.report("help", &key).is_err());
    }

    #[test]
    fn test_report_uses_same_input_for_both_rows() -> Result<(), CipherError> {
        let hill = HillCipher::default();
        let report = hill.report("help", &textbook_key())?;
        assert_eq!(report.encryption, "HIAT");
        assert_eq!(
            report.decryption,
            hill.transform("help", &textbook_key().inverse()?)?
        );

        let json = report.to_json()?;
        let back: HillReport = serde_json::from_str(&json)?;
        assert_eq!(back, report);
        Ok(())
    }
}
