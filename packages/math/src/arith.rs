//! Integer arithmetic helpers: gcd/lcm, binomials and closed-form sums.

/// Greatest common divisor (Euclid).
pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// Least common multiple. `lcm(0, x) == 0`.
pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

/// Smallest number evenly divisible by every integer in `1..=limit`.
///
/// ```
/// use math::arith::lcm_range;
///
/// assert_eq!(lcm_range(10), 2520);
/// assert_eq!(lcm_range(0), 1);
/// ```
pub fn lcm_range(limit: u64) -> u64 {
    (1..=limit).fold(1, lcm)
}

/// Binomial coefficient C(n, k), or None if it does not fit in a u128.
///
/// Uses the multiplicative form C(n, i + 1) = C(n, i) * (n - i) / (i + 1).
/// The common factor of C(n, i) and i + 1 is divided out first, so no
/// intermediate value exceeds the result.
///
/// ```
/// use math::arith::binomial;
///
/// assert_eq!(binomial(4, 2), Some(6));
/// assert_eq!(binomial(40, 20), Some(137846528820));
/// assert_eq!(binomial(132, 66), None);
/// ```
pub fn binomial(n: u64, k: u64) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result = 1u128;
    for i in 0..k {
        let m = i + 1;
        let g = gcd(m, (result % m as u128) as u64);
        // m / g is coprime to result / g, so it divides n - i
        result = (result / g as u128).checked_mul(((n - i) / (m / g)) as u128)?;
    }
    Some(result)
}

/// 1 + 2 + ... + n
pub fn sum_to(n: u64) -> u64 {
    n * (n + 1) / 2
}

/// 1² + 2² + ... + n²
pub fn sum_of_squares(n: u64) -> u64 {
    n * (n + 1) * (2 * n + 1) / 6
}

/// (1 + 2 + ... + n)²
pub fn square_of_sum(n: u64) -> u64 {
    let s = sum_to(n);
    s * s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_lcm() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(0, 6), 0);
    }

    #[test]
    fn test_lcm_range() {
        assert_eq!(lcm_range(1), 1);
        assert_eq!(lcm_range(10), 2520);
        assert_eq!(lcm_range(20), 232792560);
    }

    #[test]
    fn test_binomial_edges() {
        assert_eq!(binomial(0, 0), Some(1));
        assert_eq!(binomial(5, 0), Some(1));
        assert_eq!(binomial(5, 5), Some(1));
        assert_eq!(binomial(5, 6), Some(0));
        assert_eq!(binomial(52, 5), Some(2598960));
    }

    #[test]
    fn test_binomial_u128_boundary() {
        // C(130, 65) is the largest central coefficient that fits
        assert_eq!(
            binomial(130, 65),
            Some(95067625827960698145584333020095113100)
        );
        assert_eq!(binomial(132, 66), None);
        assert_eq!(binomial(200, 1), Some(200));
    }

    #[test]
    fn test_binomial_matches_pascal() {
        let mut row = vec![1u128];
        for n in 1..=60u64 {
            let mut next = vec![1u128; row.len() + 1];
            for j in 1..row.len() {
                next[j] = row[j - 1] + row[j];
            }
            row = next;
            for (k, &v) in row.iter().enumerate() {
                assert_eq!(binomial(n, k as u64), Some(v), "C({}, {})", n, k);
            }
        }
    }

    #[test]
    fn test_closed_forms_match_brute_force() {
        for n in 0..50u64 {
            assert_eq!(sum_to(n), (1..=n).sum::<u64>());
            assert_eq!(sum_of_squares(n), (1..=n).map(|i| i * i).sum::<u64>());
        }
        assert_eq!(square_of_sum(10), 3025);
        assert_eq!(sum_of_squares(10), 385);
    }
}
