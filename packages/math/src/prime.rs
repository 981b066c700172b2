//! Prime number utilities including sieves, iterators, and factorization.

use crate::arith::gcd;

/// Iterator that generates prime numbers.
///
/// Maintains an internal list of found primes and checks each candidate
/// only against primes up to its square root.
///
/// # Example
///
/// ```
/// use math::prime::Primes;
///
/// let first_ten: Vec<u64> = Primes::new().take(10).collect();
/// assert_eq!(first_ten, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
/// ```
pub struct Primes {
    found: Vec<u64>,
    candidate: u64,
}

impl Primes {
    pub fn new() -> Self {
        Primes {
            found: Vec::new(),
            candidate: 2,
        }
    }
}

impl Default for Primes {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let c = self.candidate;
            self.candidate += if c == 2 { 1 } else { 2 };

            let sqrt_c = c.isqrt();
            let is_prime = self
                .found
                .iter()
                .take_while(|&&p| p <= sqrt_c)
                .all(|&p| c % p != 0);

            if is_prime {
                self.found.push(c);
                return Some(c);
            }
        }
    }
}

/// Returns an iterator over prime numbers: 2, 3, 5, 7, 11, ...
pub fn primes() -> Primes {
    Primes::new()
}

/// Returns the nth prime number (1-indexed: nth_prime(1) = 2, nth_prime(2) = 3, ...).
///
/// Returns None if n is 0.
///
/// # Example
///
/// ```
/// use math::prime::nth_prime;
///
/// assert_eq!(nth_prime(1), Some(2));
/// assert_eq!(nth_prime(6), Some(13));
/// assert_eq!(nth_prime(0), None);
/// ```
pub fn nth_prime(n: usize) -> Option<u64> {
    if n == 0 {
        return None;
    }
    Primes::new().nth(n - 1)
}

/// Check if a number is prime.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n.is_multiple_of(2) {
        return false;
    }
    let sqrt_n = n.isqrt();
    for i in (3..=sqrt_n).step_by(2) {
        if n.is_multiple_of(i) {
            return false;
        }
    }
    true
}

/// Largest prime strictly below n, or None if there is none (n <= 2).
///
/// ```
/// use math::prime::prev_prime;
///
/// assert_eq!(prev_prime(14), Some(13));
/// assert_eq!(prev_prime(13), Some(11));
/// assert_eq!(prev_prime(2), None);
/// ```
pub fn prev_prime(n: u64) -> Option<u64> {
    (2..n).rev().find(|&c| is_prime(c))
}

/// Finds all prime numbers less than a given limit `n`.
pub fn primes_below(n: u32) -> Vec<u32> {
    if n < 3 {
        return vec![];
    }
    let n_usize = n as usize;
    let mut sieve = vec![true; n_usize];
    sieve[0] = false;
    sieve[1] = false;

    for i in 2..=n_usize.isqrt() {
        if sieve[i] {
            for multiple in (i * i..n_usize).step_by(i) {
                sieve[multiple] = false;
            }
        }
    }

    (2..n_usize)
        .filter_map(|i| if sieve[i] { Some(i as u32) } else { None })
        .collect()
}

/// Returns the largest prime factor of n.
///
/// Returns None if n < 2.
///
/// # Example
///
/// ```
/// use math::prime::largest_prime_factor;
///
/// assert_eq!(largest_prime_factor(84), Some(7)); // 84 = 2^2 * 3 * 7
/// assert_eq!(largest_prime_factor(2), Some(2));
/// assert_eq!(largest_prime_factor(1), None);
/// ```
pub fn largest_prime_factor(mut n: u64) -> Option<u64> {
    if n < 2 {
        return None;
    }

    let mut largest = None;
    let mut factor = 2;

    while factor * factor <= n {
        while n.is_multiple_of(factor) {
            largest = Some(factor);
            n /= factor;
        }
        factor += 1;
    }
    if n > 1 {
        largest = Some(n);
    }
    largest
}

/// Largest prime factor found by walking primes downwards from `isqrt(n)`.
///
/// The first prime `p` that divides `n` splits off a cofactor `n / p`, which is
/// searched the same way. If no prime up to `isqrt(n)` divides `n`, then `n`
/// is itself prime. Returns None if n < 2.
///
/// ```
/// use math::prime::largest_prime_factor_descending;
///
/// assert_eq!(largest_prime_factor_descending(13195), Some(29));
/// assert_eq!(largest_prime_factor_descending(14), Some(7));
/// ```
pub fn largest_prime_factor_descending(n: u64) -> Option<u64> {
    if n < 2 {
        return None;
    }
    let mut bound = n.isqrt() + 1;
    while let Some(p) = prev_prime(bound) {
        if n.is_multiple_of(p) {
            let largest = largest_prime_factor_descending(n / p).map_or(p, |f| f.max(p));
            return Some(largest);
        }
        bound = p;
    }
    Some(n)
}

/// The polynomial map `x -> (x^2 + c) mod n` used to drive [`find_factor`].
///
/// Squares in 128-bit arithmetic so any `u64` modulus is safe.
pub fn rho_polynomial(n: u64, c: u64) -> impl Fn(u64) -> u64 {
    move |x| ((x as u128 * x as u128 + c as u128) % n as u128) as u64
}

/// Pollard's rho: look for a non-trivial factor of `n` with Floyd's
/// tortoise-and-hare cycle detection over the map `g`, starting at 2.
///
/// The tortoise advances one step and the hare two per round until
/// `gcd(|x - y|, n)` leaves 1. Returns None ("failure") when that gcd is `n`
/// itself, which always happens for prime `n`. A different `g` may succeed
/// where one fails.
///
/// # Example
///
/// ```
/// use math::prime::{find_factor, rho_polynomial};
///
/// assert_eq!(find_factor(8051, rho_polynomial(8051, 1)), Some(97)); // 83 * 97
/// assert_eq!(find_factor(13, rho_polynomial(13, 1)), None);
/// ```
pub fn find_factor<G>(n: u64, g: G) -> Option<u64>
where
    G: Fn(u64) -> u64,
{
    if n < 2 {
        return None;
    }

    let mut x = 2u64;
    let mut y = x;
    let mut d = 1u64;

    while d == 1 {
        x = g(x);
        y = g(g(y));
        d = gcd(x.abs_diff(y), n);
    }

    if d == n { None } else { Some(d) }
}

/// Count the number of divisors of n using prime factorization.
///
/// Takes a slice of primes that must include all primes up to sqrt(n).
/// Panics if the last prime in the slice is less than sqrt(n).
///
/// # Example
///
/// ```
/// use math::prime::count_divisors;
///
/// let primes = vec![2, 3, 5, 7];
/// assert_eq!(count_divisors(28, &primes), 6); // 1, 2, 4, 7, 14, 28
/// assert_eq!(count_divisors(12, &primes), 6); // 1, 2, 3, 4, 6, 12
/// ```
pub fn count_divisors(mut n: u64, primes: &[u64]) -> u32 {
    if n <= 1 {
        return n as u32;
    }

    let sqrt_n = n.isqrt();
    let last_prime = *primes.last().expect("primes slice cannot be empty");
    if last_prime < sqrt_n {
        panic!(
            "primes slice insufficient: last prime {} < sqrt({})",
            last_prime, n
        );
    }

    let mut count = 1u32;

    for &p in primes {
        if p * p > n {
            break;
        }
        let mut exp = 0;
        while n % p == 0 {
            exp += 1;
            n /= p;
        }
        if exp > 0 {
            count *= exp + 1;
        }
    }

    // If remainder > 1, it's a prime factor with exponent 1
    if n > 1 {
        count *= 2;
    }

    count
}

/// All divisors of n in ascending order, found by trial division up to isqrt(n).
///
/// ```
/// use math::prime::divisors;
///
/// assert_eq!(divisors(28), vec![1, 2, 4, 7, 14, 28]);
/// assert_eq!(divisors(36).len(), 9);
/// ```
pub fn divisors(n: u64) -> Vec<u64> {
    let mut small = Vec::new();
    let mut large = Vec::new();
    for d in 1..=n.isqrt() {
        if n.is_multiple_of(d) {
            small.push(d);
            // A square root appears only once.
            if d != n / d {
                large.push(n / d);
            }
        }
    }
    small.extend(large.into_iter().rev());
    small
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primes_below_10() {
        assert_eq!(primes_below(10), vec![2, 3, 5, 7]);
    }

    #[test]
    fn test_primes_below_small_bounds() {
        assert_eq!(primes_below(0), Vec::<u32>::new());
        assert_eq!(primes_below(1), Vec::<u32>::new());
        assert_eq!(primes_below(2), Vec::<u32>::new());
        assert_eq!(primes_below(3), vec![2]);
    }

    #[test]
    fn test_primes_iterator_vs_sieve() {
        // Compare iterator output against sieve for primes below 100,000
        let limit = 100_000u32;
        let sieve_primes = primes_below(limit);
        let iter_primes: Vec<u64> = Primes::new().take_while(|&p| p < limit as u64).collect();
        let sieve_as_u64: Vec<u64> = sieve_primes.iter().map(|&p| p as u64).collect();
        assert_eq!(iter_primes, sieve_as_u64);
    }

    #[test]
    fn test_is_prime_vs_sieve() {
        let sieve = primes_below(10_000);
        let trial: Vec<u32> = (0..10_000u32).filter(|&n| is_prime(n as u64)).collect();
        assert_eq!(trial, sieve);
    }

    #[test]
    fn test_nth_prime() {
        assert_eq!(nth_prime(0), None);
        assert_eq!(nth_prime(1), Some(2));
        assert_eq!(nth_prime(2), Some(3));
        assert_eq!(nth_prime(6), Some(13));
        assert_eq!(nth_prime(1000), Some(7919));
    }

    #[test]
    fn test_prev_prime() {
        assert_eq!(prev_prime(0), None);
        assert_eq!(prev_prime(3), Some(2));
        assert_eq!(prev_prime(100), Some(97));
    }

    #[test]
    fn test_largest_prime_factor() {
        assert_eq!(largest_prime_factor(0), None);
        assert_eq!(largest_prime_factor(1), None);
        assert_eq!(largest_prime_factor(2), Some(2));
        assert_eq!(largest_prime_factor(84), Some(7)); // 84 = 2^2 * 3 * 7
        assert_eq!(largest_prime_factor(100), Some(5));
        assert_eq!(largest_prime_factor(13195), Some(29));
    }

    #[test]
    fn test_descending_search_agrees_with_trial_division() {
        for n in 0..3000u64 {
            assert_eq!(
                largest_prime_factor_descending(n),
                largest_prime_factor(n),
                "mismatch for n={}",
                n
            );
        }
    }

    #[test]
    fn test_find_factor_splits_composites() {
        let n = 600851475143;
        let d = find_factor(n, rho_polynomial(n, 1)).unwrap();
        assert_eq!(d, 71);
        assert!(n.is_multiple_of(d));

        // x -> x^2 happens to work here too
        assert_eq!(find_factor(n, rho_polynomial(n, 0)), Some(71));
        assert_eq!(find_factor(10403, rho_polynomial(10403, 1)), Some(101));
    }

    #[test]
    fn test_find_factor_fails_on_primes() {
        for p in [2u64, 3, 13, 7919, 104743] {
            assert_eq!(find_factor(p, rho_polynomial(p, 1)), None, "p={}", p);
        }
        assert_eq!(find_factor(1, rho_polynomial(1, 1)), None);
    }

    #[test]
    fn test_count_divisors() {
        let primes: Vec<u64> = Primes::new().take(100).collect();
        assert_eq!(count_divisors(1, &primes), 1);
        assert_eq!(count_divisors(2, &primes), 2); // 1, 2
        assert_eq!(count_divisors(6, &primes), 4); // 1, 2, 3, 6
        assert_eq!(count_divisors(28, &primes), 6); // 1, 2, 4, 7, 14, 28
        assert_eq!(count_divisors(36, &primes), 9); // 1, 2, 3, 4, 6, 9, 12, 18, 36
    }

    #[test]
    fn test_count_divisors_matches_divisor_list() {
        let primes: Vec<u64> = Primes::new().take(100).collect();
        for n in 1..2000u64 {
            assert_eq!(count_divisors(n, &primes) as usize, divisors(n).len(), "n={}", n);
        }
    }

    #[test]
    #[should_panic(expected = "primes slice insufficient")]
    fn test_count_divisors_insufficient_primes() {
        let primes = vec![2, 3]; // sqrt(100) = 10, but max prime is 3
        count_divisors(100, &primes);
    }

    #[test]
    fn test_divisors_edges() {
        assert_eq!(divisors(0), Vec::<u64>::new());
        assert_eq!(divisors(1), vec![1]);
        assert_eq!(divisors(16), vec![1, 2, 4, 8, 16]);
    }
}
