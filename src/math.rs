use std::io::Write;

/// Write one `Countdown: <n>` line per value from `from` down to 0.
/// Negative starting values produce no output.
///
/// Iterative on purpose: the naive recursive version is bounded by the call
/// stack for large inputs.
pub fn countdown<W: Write>(from: i64, out: &mut W) -> std::io::Result<()> {
    let mut n = from;
    while n >= 0 {
        writeln!(out, "Countdown: {n}")?;
        n -= 1;
    }
    Ok(())
}

/// Sum of 1..=n, 0 for n <= 0. Equals n(n+1)/2 for n >= 0.
pub fn sum_to(n: i64) -> i64 {
    let mut total = 0;
    let mut i = n;
    while i > 0 {
        total += i;
        i -= 1;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn countdown_output(from: i64) -> String {
        let mut buf = Vec::new();
        countdown(from, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_countdown_negative_is_silent() {
        assert_eq!(countdown_output(-1), "");
    }

    #[test]
    fn test_countdown_zero_is_one_line() {
        assert_eq!(countdown_output(0), "Countdown: 0\n");
    }

    #[test]
    fn test_countdown_descends_to_zero() {
        assert_eq!(
            countdown_output(3),
            "Countdown: 3\nCountdown: 2\nCountdown: 1\nCountdown: 0\n"
        );
    }

    #[test]
    fn test_countdown_line_count() {
        // n + 1 lines for n >= 0
        let lines = countdown_output(10);
        assert_eq!(lines.lines().count(), 11);
    }

    #[test]
    fn test_sum_to_base_cases() {
        assert_eq!(sum_to(0), 0);
        assert_eq!(sum_to(-5), 0);
        assert_eq!(sum_to(1), 1);
    }

    #[test]
    fn test_sum_to_ten_is_55() {
        assert_eq!(sum_to(10), 55);
    }

    #[test]
    fn test_sum_to_matches_triangular_formula() {
        for n in 0..100i64 {
            assert_eq!(sum_to(n), n * (n + 1) / 2);
        }
    }
}
