use crate::errors::CipherError;
use crate::ring::matrix_ops::{adjugate, determinant, matrix_scale};
use crate::ring::{Matrix, Ring, extended_gcd, gcd, modular_inverse};

use rand::Rng;
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// A 2×2 Hill key `[[a, b], [c, d]]` acting as `(x, y) -> (ax + by, cx + dy) mod 26`.
///
/// Entries are kept exactly as supplied; reduction happens when the key is
/// applied or inverted.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct HillKey {
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub d: i64,
}

impl HillKey {
    pub const fn new(a: i64, b: i64, c: i64, d: i64) -> Self {
        Self { a, b, c, d }
    }

    /// Parses four whitespace-separated integers, row by row.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::MalformedKey` unless the text holds exactly four integers.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_ciphers::hill::HillKey;
    /// let key = HillKey::parse("3 3 2 5").unwrap();
    /// assert_eq!(key, HillKey::new(3, 3, 2, 5));
    /// assert!(HillKey::parse("3 3 2").is_err());
    /// assert!(HillKey::parse("3 3 2 x").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, CipherError> {
        let entries = text
            .split_whitespace()
            .map(|token| {
                token.parse::<i64>().map_err(|e| {
                    CipherError::MalformedKey(format!("{:?} is not an integer ({})", token, e))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        match entries.as_slice() {
            &[a, b, c, d] => Ok(Self::new(a, b, c, d)),
            other => Err(CipherError::MalformedKey(format!(
                "expected 4 numbers, got {}",
                other.len()
            ))),
        }
    }

    /// Draws a key uniformly from the invertible 2×2 matrices over Z_26.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            let key = Self::new(
                rng.random_range(0..26),
                rng.random_range(0..26),
                rng.random_range(0..26),
                rng.random_range(0..26),
            );
            if key.is_invertible() {
                log::debug!("generated invertible key {} after {} draws", key, attempts);
                return key;
            }
        }
    }

    pub fn matrix(&self) -> Matrix {
        [[self.a, self.b], [self.c, self.d]]
    }

    pub fn from_matrix(m: Matrix) -> Self {
        Self::new(m[0][0], m[0][1], m[1][0], m[1][1])
    }

    /// `ad - bc` reduced into `[0, 26)`.
    pub fn determinant(&self) -> i64 {
        determinant(&self.matrix(), &Ring::alphabet())
    }

    /// The adjugate `[[d, -b], [-c, a]]` reduced into `[0, 26)`.
    pub fn adjugate(&self) -> Self {
        Self::from_matrix(adjugate(&self.matrix(), &Ring::alphabet()))
    }

    /// True when `gcd(det, 26) == 1`.
    pub fn is_invertible(&self) -> bool {
        gcd(self.determinant(), Ring::alphabet().modulus() as i64) == 1
    }

    /// All entries reduced into `[0, 26)`.
    pub fn normalized(&self) -> Self {
        let ring = Ring::alphabet();
        Self::from_matrix(self.matrix().map(|row| row.map(|v| ring.normalize(v))))
    }

    /// Computes the inverse key mod 26.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::NonInvertibleKey` when the determinant shares a
    /// factor with 26.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_ciphers::hill::HillKey;
    /// let inverse = HillKey::new(3, 3, 2, 5).inverse().unwrap();
    /// assert_eq!(inverse, HillKey::new(15, 17, 20, 9));
    /// assert!(HillKey::new(2, 4, 4, 8).inverse().is_err());
    /// ```
    pub fn inverse(&self) -> Result<Self, CipherError> {
        let ring = Ring::alphabet();
        let determinant = self.determinant();

        let inv_det = ring.inv(determinant).map_err(|e| {
            let g = gcd(determinant, ring.modulus() as i64);
            log::debug!("key {} rejected: det={} gcd={} ({})", self, determinant, g, e);
            CipherError::NonInvertibleKey { determinant, gcd: g }
        })?;

        Ok(Self::from_matrix(matrix_scale(
            &adjugate(&self.matrix(), &ring),
            inv_det,
            &ring,
        )))
    }

    /// Adjugate scaled by the reduced Bézout coefficient of the determinant.
    ///
    /// Only a true inverse when [`HillKey::is_invertible`] holds; for any other
    /// key the result is deterministic but does not undo the key.
    pub fn inverse_unchecked(&self) -> Self {
        let ring = Ring::alphabet();
        let m = ring.modulus() as i64;

        let determinant = self.determinant();
        let (_, u, _) = extended_gcd(determinant, m);
        let inv_det = modular_inverse(u, m);
        log::trace!("det={} inv_det={}", determinant, inv_det);

        Self::from_matrix(matrix_scale(&adjugate(&self.matrix(), &ring), inv_det, &ring))
    }
}

impl FromStr for HillKey {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HillKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[[{}, {}], [{}, {}]]", self.a, self.b, self.c, self.d)
    }
}
