/*!
    Single pass writer of the header line and the random number sequence.
 */

use std::io::{self, Write};

use rand::Rng;

use crate::cli::GenerationConfig;

/// Writes `"<count> <lower> <upper>"` followed by `count` uniformly
/// distributed integers from the inclusive range, each trailed by a space,
/// and a final newline. Every draw is independent; nothing is buffered
/// here, callers pick the sink (and wrap it in `BufWriter` if needed).
pub fn emit<W: Write>(config: &GenerationConfig, rng: &mut impl Rng, mut out: W) -> io::Result<()> {
    writeln!(
        out,
        "{} {} {}",
        config.count, config.lower_bound, config.upper_bound
    )?;
    for _ in 0..config.count {
        let n: u64 = rng.gen_range(config.lower_bound..=config.upper_bound);
        write!(out, "{} ", n)?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(count: u64, lower: u64, upper: u64) -> GenerationConfig {
        GenerationConfig {
            count,
            lower_bound: lower,
            upper_bound: upper,
            output: None,
        }
    }

    fn run(config: &GenerationConfig) -> String {
        let mut buf = Vec::new();
        emit(config, &mut rand::thread_rng(), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_matches_resolved_config() {
        let out = run(&config(5, 10, 20));
        assert_eq!(out.lines().next(), Some("5 10 20"));
    }

    #[test]
    fn emits_exactly_count_numbers() {
        for count in [0u64, 1, 7, 1000] {
            let out = run(&config(count, 0, 100));
            let numbers = out.lines().nth(1).unwrap_or("");
            assert_eq!(numbers.split_whitespace().count() as u64, count);
        }
    }

    #[test]
    fn numbers_stay_within_bounds() {
        let out = run(&config(500, 10, 20));
        for token in out.lines().nth(1).unwrap().split_whitespace() {
            let n: u64 = token.parse().unwrap();
            assert!((10..=20).contains(&n), "{} out of bounds", n);
        }
    }

    #[test]
    fn degenerate_range_repeats_single_value() {
        let out = run(&config(4, 7, 7));
        assert_eq!(out, "4 7 7\n7 7 7 7 \n");
    }

    #[test]
    fn zero_count_writes_header_and_bare_newline() {
        assert_eq!(run(&config(0, 1, 5)), "0 1 5\n\n");
    }

    #[test]
    fn full_u64_range_does_not_panic() {
        let out = run(&config(3, 0, u64::MAX));
        assert_eq!(out.lines().nth(1).unwrap().split_whitespace().count(), 3);
    }
}
