/*!
    Command line surface and resolution of the generation parameters.
 */

use std::path::PathBuf;

use clap::Parser;

/// Largest value a bound may take; also the default upper bound.
pub const MAX_BOUND: u64 = u64::MAX;

/// Numbers generated when the positional count is absent or empty.
pub const DEFAULT_COUNT: u64 = 1000;

/// Range used when no `-l` option is given or its value cannot be parsed.
pub const DEFAULT_BOUNDS: (u64, u64) = (0, MAX_BOUND);

/// Raw command line options as typed by the user.
/// Unknown flags and malformed option syntax make clap print a one-line
/// error with usage hint to stderr and exit with status 2;
/// `-h`/`--help` prints usage and exits with status 0.
#[derive(Parser, Debug)]
#[command(name = "numgen")]
#[command(about = "Writes a header line and a batch of uniformly distributed random integers")]
pub struct Cli {
    /// Inclusive bounds of generated numbers, two comma separated integers.
    /// Malformed values silently fall back to the full u64 range.
    #[arg(short = 'l', long = "limits", value_name = "a,b", allow_hyphen_values = true)]
    pub limits: Option<String>,

    /// Output file; numbers go to standard output when omitted.
    #[arg(short = 'o', long = "ofile", value_name = "PATH")]
    pub ofile: Option<PathBuf>,

    /// How many numbers to generate (1000 when absent or empty).
    #[arg(value_name = "COUNT", value_parser = parse_count)]
    pub count: Option<u64>,
}

/// Fully resolved parameters of one generation run.
/// Built once from [`Cli`], immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub count: u64,
    pub lower_bound: u64,
    pub upper_bound: u64,
    /// `None` means standard output.
    pub output: Option<PathBuf>,
}

impl GenerationConfig {
    /// Applies defaults and bounds normalization to raw options.
    pub fn resolve(cli: Cli) -> Self {
        let (lower_bound, upper_bound) = match &cli.limits {
            Some(arg) => parse_bounds(arg),
            None => DEFAULT_BOUNDS,
        };
        GenerationConfig {
            count: cli.count.unwrap_or(DEFAULT_COUNT),
            lower_bound,
            upper_bound,
            output: cli.ofile,
        }
    }
}

/// Positional count: empty value means "use the default".
/// Anything else must be a non-negative integer, otherwise clap turns
/// the error into a usage failure (exit status 2).
fn parse_count(arg: &str) -> Result<u64, String> {
    if arg.is_empty() {
        return Ok(DEFAULT_COUNT);
    }
    match arg.trim().parse::<u64>() {
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid count '{}': {}", arg, e)),
    }
}

/// Parses the `-l a,b` value into normalized `(lower, upper)` bounds.
/// Values are clamped into `[0, MAX_BOUND]` and swapped when inverted.
/// Anything that is not exactly two integers yields [`DEFAULT_BOUNDS`].
// NOTE: The silent fallback is kept for compatibility with existing callers.
//       Arguably a malformed `-l` should be a usage error instead.
pub fn parse_bounds(arg: &str) -> (u64, u64) {
    let parts: Vec<&str> = arg.split(',').collect();
    if parts.len() != 2 {
        return DEFAULT_BOUNDS;
    }
    // i128 gives room to clamp negative and oversized values instead of
    // rejecting them at parse time.
    match (parts[0].trim().parse::<i128>(), parts[1].trim().parse::<i128>()) {
        (Ok(a), Ok(b)) => {
            let lower = a.clamp(0, MAX_BOUND as i128) as u64;
            let upper = b.clamp(0, MAX_BOUND as i128) as u64;
            if lower > upper {
                (upper, lower)
            } else {
                (lower, upper)
            }
        }
        _ => DEFAULT_BOUNDS,
    }
}
