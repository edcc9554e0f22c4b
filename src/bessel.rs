use scilib::math::bessel;

use crate::DrumError;

/// Step used to bracket sign changes of J_m. Consecutive positive zeros of
/// J_m are separated by roughly pi, so this can never skip over a zero.
const SCAN_STEP: f64 = 0.1;

const BISECTION_TOLERANCE: f64 = 1e-12;

/// Order-m Bessel function of the first kind, evaluated at `x`.
pub fn j_m(order: u32, x: f64) -> f64 {
    bessel::j_n(order as i32, x)
}

/// The `index`-th positive zero of J_m, 1-indexed in ascending order.
///
/// J_m is positive on (0, j_{m,1}), so scanning upward from just above the
/// origin (or above `order`, since j_{m,1} > m) and bisecting each bracketed
/// sign change enumerates the zeros in order.
pub fn jn_zero(order: u32, index: usize) -> Result<f64, DrumError> {
    if index == 0 {
        return Err(DrumError::InvalidRadialIndex);
    }

    let mut found = 0;
    let mut lo = order as f64 + SCAN_STEP;
    let mut f_lo = j_m(order, lo);

    loop {
        let hi = lo + SCAN_STEP;
        let f_hi = j_m(order, hi);

        if f_lo.signum() != f_hi.signum() {
            found += 1;
            if found == index {
                return Ok(bisect(order, lo, hi));
            }
        }

        lo = hi;
        f_lo = f_hi;
    }
}

fn bisect(order: u32, mut lo: f64, mut hi: f64) -> f64 {
    let mut f_lo = j_m(order, lo);

    while hi - lo > BISECTION_TOLERANCE {
        let mid = 0.5 * (lo + hi);
        let f_mid = j_m(order, mid);

        if f_lo.signum() != f_mid.signum() {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }

    0.5 * (lo + hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_j_m_at_origin() {
        assert_relative_eq!(j_m(0, 0.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(j_m(3, 0.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_known_zeros() {
        // Published values of j_{m,n}.
        assert_relative_eq!(jn_zero(0, 1).unwrap(), 2.404825557695773, epsilon = 1e-6);
        assert_relative_eq!(jn_zero(0, 2).unwrap(), 5.520078110286311, epsilon = 1e-6);
        assert_relative_eq!(jn_zero(1, 1).unwrap(), 3.831705970207512, epsilon = 1e-6);
        assert_relative_eq!(jn_zero(3, 2).unwrap(), 9.761023129981670, epsilon = 1e-6);
    }

    #[test]
    fn test_zeros_are_ascending() {
        let mut prev = 0.0;
        for index in 1..=5 {
            let zero = jn_zero(2, index).unwrap();
            assert!(zero > prev);
            prev = zero;
        }
    }

    #[test]
    fn test_zero_index_must_be_positive() {
        assert!(jn_zero(3, 0).is_err());
    }

    #[test]
    fn test_function_vanishes_at_zero() {
        let zero = jn_zero(3, 2).unwrap();
        assert!(j_m(3, zero).abs() < 1e-8);
    }
}
