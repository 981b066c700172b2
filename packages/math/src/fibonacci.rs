/// Iterator that generates Fibonacci numbers.
///
/// # Example
///
/// ```
/// use math::fibonacci::Fibonacci;
///
/// // Get first 10 Fibonacci numbers
/// let fibs: Vec<u64> = Fibonacci::new().take(10).collect();
/// assert_eq!(fibs, vec![1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
/// ```
pub struct Fibonacci {
    curr: Option<u64>,
    next: Option<u64>,
}

impl Fibonacci {
    pub fn new() -> Self {
        Self::with_start(1, 1)
    }

    /// Start with custom initial values (a, b) where the sequence is a, b, a+b, ...
    pub fn with_start(a: u64, b: u64) -> Self {
        Fibonacci {
            curr: Some(a),
            next: Some(b),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    // The last term that fits in a u64 is still yielded; the iterator ends
    // on the call after it.
    fn next(&mut self) -> Option<Self::Item> {
        let curr = self.curr?;
        self.curr = self.next;
        self.next = self.next.and_then(|n| n.checked_add(curr));
        Some(curr)
    }
}

/// Returns an iterator over Fibonacci numbers starting with 1, 1, 2, 3, 5, ...
///
/// # Example
///
/// ```
/// use math::fibonacci::fibonacci;
///
/// let first_five: Vec<u64> = fibonacci().take(5).collect();
/// assert_eq!(first_five, vec![1, 1, 2, 3, 5]);
/// ```
pub fn fibonacci() -> Fibonacci {
    Fibonacci::new()
}

/// Get the nth Fibonacci number (1-indexed: F(1) = 1, F(2) = 1, F(3) = 2, ...)
///
/// Returns None for 0 and past the last term that fits in a u64.
///
/// # Example
///
/// ```
/// use math::fibonacci::nth_fibonacci;
///
/// assert_eq!(nth_fibonacci(1), Some(1));
/// assert_eq!(nth_fibonacci(10), Some(55));
/// assert_eq!(nth_fibonacci(0), None);
/// ```
pub fn nth_fibonacci(n: usize) -> Option<u64> {
    if n == 0 {
        return None;
    }
    Fibonacci::new().nth(n - 1)
}

/// Iterator over the even Fibonacci numbers only: 2, 8, 34, 144, ...
///
/// Every third Fibonacci number is even, and consecutive even terms satisfy
/// `E(k+1) = 4 * E(k) + E(k-1)`, so the odd terms are never generated.
///
/// # Example
///
/// ```
/// use math::fibonacci::even_fibonacci;
///
/// let evens: Vec<u64> = even_fibonacci().take(4).collect();
/// assert_eq!(evens, vec![2, 8, 34, 144]);
/// ```
pub struct EvenFibonacci {
    prev: u64,
    curr: Option<u64>,
}

impl EvenFibonacci {
    pub fn new() -> Self {
        EvenFibonacci {
            prev: 0,
            curr: Some(2),
        }
    }
}

impl Default for EvenFibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for EvenFibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let curr = self.curr?;
        self.curr = curr
            .checked_mul(4)
            .and_then(|n| n.checked_add(self.prev));
        self.prev = curr;
        Some(curr)
    }
}

pub fn even_fibonacci() -> EvenFibonacci {
    EvenFibonacci::new()
}
