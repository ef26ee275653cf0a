//! Slice kernels shared by the std::arrays and std::vectors programs.
//!
//! The kernels only see `&mut [f64]`, so the two programs differ purely in
//! where their buffers live (stack arrays vs. heap vectors).

/// `1/(j + 1)` evaluated as an integer division: `1.0` at `j == 0`, else `0.0`.
#[inline]
pub fn integer_reciprocal(j: usize) -> f64 {
    (1 / (j + 1)) as f64
}

/// `a[j] = 1/n + j`
pub fn fill_initial(a: &mut [f64], n: f64) {
    let inv_n = 1.0 / n;
    for (j, v) in a.iter_mut().enumerate() {
        *v = inv_n + j as f64;
    }
}

/// `iterations` passes of `a[j] += j - offset`.
pub fn drift(a: &mut [f64], offset: f64, iterations: usize) {
    for _ in 0..iterations {
        for (j, v) in a.iter_mut().enumerate() {
            *v += j as f64 - offset;
        }
    }
}

/// `iterations` passes of the copy chain:
/// `a[j] += n + 1/(j+1)`, then `b = a`, `c = b`, `d = c`, `e = d` element-wise.
///
/// All five buffers must have the same length.
pub fn copy_chain<B: AsMut<[f64]>>(buffers: &mut [B; 5], n: f64, iterations: usize) {
    let [a, b, c, d, e] = buffers;
    let (a, b, c, d, e) = (a.as_mut(), b.as_mut(), c.as_mut(), d.as_mut(), e.as_mut());
    debug_assert!(
        [b.len(), c.len(), d.len(), e.len()]
            .iter()
            .all(|&len| len == a.len())
    );

    for _ in 0..iterations {
        let rows = a
            .iter_mut()
            .zip(b.iter_mut())
            .zip(c.iter_mut())
            .zip(d.iter_mut())
            .zip(e.iter_mut());
        for (j, ((((a, b), c), d), e)) in rows.enumerate() {
            *a += n + integer_reciprocal(j);
            *b = *a;
            *c = *b;
            *d = *c;
            *e = *d;
        }
    }
}

/// Left-to-right sum, matching a plain accumulation loop.
pub fn checksum(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |r, v| r + v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_reciprocal() {
        assert_eq!(integer_reciprocal(0), 1.0);
        assert_eq!(integer_reciprocal(1), 0.0);
        assert_eq!(integer_reciprocal(999), 0.0);
    }

    #[test]
    fn test_fill_initial() {
        let mut a = [0.0; 4];
        fill_initial(&mut a, 0.5);
        assert_eq!(a, [2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_drift_zero_iterations_is_noop() {
        let mut a = vec![1.0, 2.0, 3.0];
        drift(&mut a, 0.75, 0);
        assert_eq!(a, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_drift_single_pass() {
        let mut a = [0.0; 3];
        drift(&mut a, 0.5, 1);
        assert_eq!(a, [-0.5, 0.5, 1.5]);
    }

    #[test]
    fn test_copy_chain_single_pass() {
        let mut buffers = [[10.0, 20.0, 30.0], [0.0; 3], [0.0; 3], [0.0; 3], [0.0; 3]];
        copy_chain(&mut buffers, 0.5, 1);
        // j == 0 picks up the integer reciprocal, the rest only n.
        assert_eq!(buffers[0], [11.5, 20.5, 30.5]);
        for k in 1..5 {
            assert_eq!(buffers[k], buffers[0]);
        }
    }

    #[test]
    fn test_copy_chain_accepts_vectors() {
        let mut buffers: [Vec<f64>; 5] = std::array::from_fn(|_| vec![0.0; 8]);
        copy_chain(&mut buffers, 0.75, 3);
        assert_eq!(buffers[0][0], 3.0 * 1.75);
        assert_eq!(buffers[0][7], 3.0 * 0.75);
        assert_eq!(buffers[4], buffers[0]);
    }

    #[test]
    fn test_checksum() {
        assert_eq!(checksum(&[]), 0.0);
        assert_eq!(checksum(&[1.5, 2.5, -1.0]), 3.0);
    }
}
