//! # Ring Module
//!
//! Provides the [`Ring`] struct for representing finite rings Z_k, the
//! extended Euclidean algorithm and 2×2 matrix arithmetic over a ring.

pub mod helper;
pub mod math;
pub mod matrix_ops;

/// Number of letters in the Latin alphabet, the modulus of every cipher here.
pub const ALPHABET_SIZE: u64 = 26;

/// A pair of residues, the unit a 2×2 key matrix acts on.
pub type Vector = [i64; 2];
/// A 2×2 matrix stored row by row.
pub type Matrix = [[i64; 2]; 2];

pub use helper::{extended_gcd, gcd, modular_inverse};
pub use math::Ring;
