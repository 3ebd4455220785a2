//! Implementation of ring ops using modular arithmetic.

use crate::errors::CipherError;

use super::{ALPHABET_SIZE, extended_gcd};

use serde::{Deserialize, Serialize};

/// Represents a finite ring Z_k using modular arithmetic.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub modulus: u64,
}

impl Default for Ring {
    fn default() -> Self {
        Ring::alphabet()
    }
}

impl Ring {
    /// The ring Z_26 every cipher in this crate works in.
    pub const fn alphabet() -> Self {
        Ring {
            modulus: ALPHABET_SIZE,
        }
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_ciphers::ring::Ring;
    /// assert_eq!(Ring::alphabet().modulus(), 26);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_ciphers::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.normalize(29), 3);
    /// assert_eq!(ring.normalize(-7), 19);
    /// assert_eq!(ring.normalize(-52), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        let m = self.modulus as i64;

        ((value % m) + m) % m
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_ciphers::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.add(25, 3), 2);
    /// assert_eq!(ring.add(-2, 5), 3);
    /// ```
    pub fn add(&self, a: i64, b: i64) -> i64 {
        self.normalize(self.normalize(a) + self.normalize(b))
    }

    /// Computes `(a - b) mod modulus`.
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        self.normalize(self.normalize(a) - self.normalize(b))
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally to prevent overflow during multiplication before the modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_ciphers::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.mul(9, 3), 1);
    /// assert_eq!(ring.mul(-2, 6), 14);
    /// assert_eq!(ring.mul(13, 2), 0);
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        let result = (a_norm as i128 * b_norm as i128) % (self.modulus as i128);

        self.normalize(result as i64)
    }

    /// Computes the additive inverse `-a mod modulus`.
    pub fn neg(&self, a: i64) -> i64 {
        self.sub(0, a)
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::NoInverse` if `a` is 0 or shares a factor with the modulus.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_ciphers::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.inv(3).unwrap(), 9);
    /// assert_eq!(ring.inv(-15).unwrap(), 19);
    /// assert!(ring.inv(13).is_err());
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, CipherError> {
        let a_norm = self.normalize(a);
        if a_norm == 0 {
            return Err(CipherError::NoInverse(format!(
                "Cannot invert 0 in mod {}",
                self.modulus
            )));
        }

        let (g, u, _) = extended_gcd(a_norm, self.modulus as i64);
        if g != 1 {
            return Err(CipherError::NoInverse(format!(
                "Modular inverse does not exist for {} mod {} (gcd={})",
                a_norm, self.modulus, g
            )));
        }

        Ok(self.normalize(u))
    }
}
