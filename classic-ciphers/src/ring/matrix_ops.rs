use crate::ring::{Matrix, Ring, Vector};

/// A·x where A is a 2×2 matrix and x a column pair.
///
/// Each entry of the result is reduced into `[0, modulus)`.
pub fn matrix_vector_mul(a: &Matrix, x: &Vector, ring: &Ring) -> Vector {
    let mut y = [0i64; 2];
    for (i, row) in a.iter().enumerate() {
        y[i] = row
            .iter()
            .zip(x)
            .fold(0, |sum, (&a_ij, &x_j)| ring.add(sum, ring.mul(a_ij, x_j)));
    }
    y
}

/// Computes the matrix product `C = AB` modulo the ring's modulus.
pub fn matrix_mul(a: &Matrix, b: &Matrix, ring: &Ring) -> Matrix {
    let mut c = [[0i64; 2]; 2];
    for i in 0..2 {
        for j in 0..2 {
            c[i][j] = (0..2).fold(0, |sum, k| ring.add(sum, ring.mul(a[i][k], b[k][j])));
        }
    }
    c
}

/// Scales every entry of `a` by `factor` modulo the ring's modulus.
pub fn matrix_scale(a: &Matrix, factor: i64, ring: &Ring) -> Matrix {
    a.map(|row| row.map(|v| ring.mul(v, factor)))
}

/// `ad - bc` reduced into `[0, modulus)`.
///
/// Entries are reduced before multiplying, so any `i64` entries are safe.
pub fn determinant(a: &Matrix, ring: &Ring) -> i64 {
    ring.sub(ring.mul(a[0][0], a[1][1]), ring.mul(a[0][1], a[1][0]))
}

/// The adjugate `[[d, -b], [-c, a]]` reduced into `[0, modulus)`.
pub fn adjugate(a: &Matrix, ring: &Ring) -> Matrix {
    [
        [ring.normalize(a[1][1]), ring.neg(a[0][1])],
        [ring.neg(a[1][0]), ring.normalize(a[0][0])],
    ]
}

/// Creates the 2×2 identity matrix.
pub fn identity_matrix() -> Matrix {
    [[1, 0], [0, 1]]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_ring() -> Ring {
        Ring::alphabet()
    }

    #[test]
    fn test_matrix_vector_mul() {
        let ring = test_ring();
        let key = [[3, 3], [2, 5]];
        // h = 7, e = 4
        assert_eq!(matrix_vector_mul(&key, &[7, 4], &ring), [7, 8]);
        // l = 11, p = 15
        assert_eq!(matrix_vector_mul(&key, &[11, 15], &ring), [0, 19]);
    }

    #[test]
    fn test_matrix_vector_mul_negative_entries() {
        let ring = test_ring();
        let key = [[-1, 0], [0, -27]];
        assert_eq!(matrix_vector_mul(&key, &[1, 2], &ring), [25, 24]);
    }

    #[test]
    fn test_matrix_mul_identity() {
        let ring = test_ring();
        let a = [[3, 3], [2, 5]];
        assert_eq!(matrix_mul(&a, &identity_matrix(), &ring), a);
        assert_eq!(matrix_mul(&identity_matrix(), &a, &ring), a);
    }

    #[test]
    fn test_adjugate_gives_determinant_multiple() {
        let ring = test_ring();
        let a = [[3, 3], [2, 5]];
        let det = determinant(&a, &ring);
        assert_eq!(det, 9);
        assert_eq!(adjugate(&a, &ring), [[5, 23], [24, 3]]);

        // A · adj(A) = det · I
        let product = matrix_mul(&a, &adjugate(&a, &ring), &ring);
        assert_eq!(product, matrix_scale(&identity_matrix(), det, &ring));
    }

    #[test]
    fn test_determinant_of_extreme_entries() {
        let ring = test_ring();
        // i64::MIN ≡ 18 and i64::MAX ≡ 7 (mod 26): 18·7 - 1·1 = 125 ≡ 21
        let a = [[i64::MIN, 1], [1, i64::MAX]];
        assert_eq!(determinant(&a, &ring), 21);
        assert_eq!(adjugate(&a, &ring), [[7, 25], [25, 18]]);

        // 5_000_000_000 ≡ 8: 8·1 - 8·8 = -56 ≡ 22
        let big = 5_000_000_000;
        assert_eq!(determinant(&[[big, big], [big, 1]], &ring), 22);
    }

    #[test]
    fn test_matrix_scale_normalizes() {
        let ring = test_ring();
        let scaled = matrix_scale(&[[5, -3], [-2, 3]], 3, &ring);
        assert_eq!(scaled, [[15, 17], [20, 9]]);
    }
}
