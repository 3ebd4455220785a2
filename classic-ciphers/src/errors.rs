#[derive(thiserror::Error, Debug)]
pub enum CipherError {
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, k) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),

    /// Hill key text that is not exactly four integers.
    #[error("Key must be 4 numbers: {0}")]
    MalformedKey(String),
    /// Caesar shift text that is not an integer.
    #[error("Shift must be a number: {0}")]
    MalformedShift(String),
    #[error("Key is not invertible mod 26: determinant {determinant} shares factor {gcd} with 26")]
    NonInvertibleKey { determinant: i64, gcd: i64 },

    #[error("Character {0:?} is not a Latin letter")]
    InvalidCharacter(char),

    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
