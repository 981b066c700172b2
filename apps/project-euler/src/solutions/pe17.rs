use math::{MathError, Result};

const ONES: [&str; 20] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Write `n` out in British English, e.g. 342 -> "three hundred and forty two".
///
/// Only 1..=1000 is supported.
pub fn number_to_words(n: u32) -> Result<String> {
    if !(1..=1000).contains(&n) {
        return Err(MathError::OutOfRange {
            value: n as u64,
            min: 1,
            max: 1000,
        });
    }
    if n == 1000 {
        return Ok("one thousand".to_string());
    }

    let mut words = String::new();
    let mut rest = n as usize;

    if rest >= 100 {
        words.push_str(ONES[rest / 100]);
        words.push_str(" hundred");
        rest %= 100;
        if rest > 0 {
            words.push_str(" and ");
        }
    }

    if rest >= 20 {
        words.push_str(TENS[rest / 10]);
        if rest % 10 > 0 {
            words.push(' ');
            words.push_str(ONES[rest % 10]);
        }
    } else if rest > 0 {
        words.push_str(ONES[rest]);
    }

    Ok(words)
}

/// Letters used to write `n`, not counting spaces.
pub fn letter_count(n: u32) -> Result<usize> {
    Ok(number_to_words(n)?
        .chars()
        .filter(char::is_ascii_alphabetic)
        .count())
}

/// PE17: Number Letter Counts
/// Letters used writing out every number from 1 to `limit`.
pub fn number_letter_counts(limit: u32) -> Result<usize> {
    (1..=limit).map(letter_count).sum()
}

pub fn solve() -> Result<String> {
    Ok(number_letter_counts(1000)?.to_string())
}
