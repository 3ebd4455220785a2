use num_integer::Integer;

/// Computes the greatest common divisor of two numbers.
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a.abs()
}

/// Finds (g, u, v) such that u·a + v·b = g = gcd(a, b).
///
/// Iterates quotient/remainder updates (floor division) until the remainder
/// reaches zero, carrying the Bézout coefficients along.
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_s, mut s) = (1i64, 0i64);
    let (mut old_t, mut t) = (0i64, 1i64);

    while r != 0 {
        let q = Integer::div_floor(&old_r, &r);

        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
        (old_t, t) = (t, old_t - q * t);
    }

    (old_r, old_s, old_t)
}

/// Reduces `a` into the canonical residue range `[0, m)`.
///
/// Applied to the Bézout coefficient of `a` this yields `a^-1 mod m`, but only
/// when `gcd(a, m) == 1`; the caller has to check that.
pub fn modular_inverse(a: i64, m: i64) -> i64 {
    ((a % m) + m) % m
}
