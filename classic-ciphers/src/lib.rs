//! Classical ciphers over the 26-letter Latin alphabet: a case-preserving
//! shift (Caesar) cipher and a 2×2 Hill cipher with modular key inversion.
//!
//! ```
//! use classic_ciphers::caesar;
//! use classic_ciphers::hill::{HillCipher, HillKey};
//!
//! assert_eq!(caesar::encrypt("Hello", 3).unwrap(), "Khoor");
//!
//! let hill = HillCipher::default();
//! let key: HillKey = "3 3 2 5".parse().unwrap();
//! let ciphertext = hill.encrypt("help", &key).unwrap();
//! assert_eq!(hill.decrypt(&ciphertext, &key).unwrap(), "HELP");
//! ```

pub mod caesar;
pub mod errors;
pub mod hill;
pub mod preset;
pub mod ring;
