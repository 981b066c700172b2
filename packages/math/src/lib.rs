pub mod arith;
pub mod bigint;
pub mod digits;
pub mod error;
pub mod factorial;
pub mod fibonacci;
pub mod prime;
pub mod sequence;

pub use arith::{binomial, gcd, lcm, lcm_range};
pub use bigint::BigInt;
pub use digits::{digit_sum, is_palindrome, parse_digits};
pub use error::{MathError, Result};
pub use factorial::{FactorialCache, big_factorial, factorial};
pub use fibonacci::{EvenFibonacci, Fibonacci, even_fibonacci, fibonacci, nth_fibonacci};
pub use prime::{
    Primes, count_divisors, divisors, find_factor, is_prime, largest_prime_factor,
    largest_prime_factor_descending, nth_prime, prev_prime, primes, primes_below, rho_polynomial,
};
pub use sequence::{CollatzCache, TriangleNumbers, collatz_step, triangle_number};
