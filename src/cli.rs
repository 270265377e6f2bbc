//! Command-line argument handling for the edge-list generator.

use std::fmt;

/// Probability used for each pair when `--p` is not given.
pub const DEFAULT_EDGE_PROBABILITY: f64 = 0.5;

// ============================================================================
// Options
// ============================================================================

/// Parsed command-line options.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    /// Number of vertices.
    pub n: usize,
    /// Probability that any given pair becomes an edge.
    pub p: f64,
    /// Deterministic seed; `None` means a fresh draw per run.
    pub seed: Option<u64>,
}

// ============================================================================
// Errors
// ============================================================================

/// Missing or malformed command-line input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidInput {
    /// The required vertex-count argument was not given.
    MissingSize,
    /// The vertex-count argument was not a non-negative integer.
    BadSize(String),
    /// `--p` was given without a value, or with one outside `[0, 1]`.
    BadProbability(String),
    /// `--seed` was given without a value, or with a non-integer one.
    BadSeed(String),
    /// An argument the program does not understand.
    UnknownArgument(String),
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::MissingSize => {
                write!(f, "missing vertex count (expected a non-negative integer)")
            }
            InvalidInput::BadSize(s) => {
                write!(f, "invalid vertex count {s:?} (expected a non-negative integer)")
            }
            InvalidInput::BadProbability(s) => {
                write!(f, "invalid edge probability {s:?} (expected a number in [0, 1])")
            }
            InvalidInput::BadSeed(s) => {
                write!(f, "invalid seed {s:?} (expected an unsigned integer)")
            }
            InvalidInput::UnknownArgument(s) => write!(f, "unrecognized argument {s:?}"),
        }
    }
}

impl std::error::Error for InvalidInput {}

// ============================================================================
// Parsing
// ============================================================================

/// Parses the argument list (program name excluded).
///
/// Exactly one positional argument is required, the vertex count N. Optional
/// flags: `--p P` (edge probability, default 0.5) and `--seed SEED`.
///
/// # Errors
/// Returns [`InvalidInput`] if the vertex count is missing or malformed, a
/// flag value is missing or out of range, or an argument is not recognized.
pub fn parse_args(args: &[String]) -> Result<Options, InvalidInput> {
    let mut n: Option<usize> = None;
    let mut p = DEFAULT_EDGE_PROBABILITY;
    let mut seed = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--p" => {
                let v = args
                    .get(i + 1)
                    .ok_or_else(|| InvalidInput::BadProbability("<missing>".to_string()))?;
                p = v
                    .parse()
                    .map_err(|_| InvalidInput::BadProbability(v.clone()))?;
                if !(0.0..=1.0).contains(&p) {
                    return Err(InvalidInput::BadProbability(v.clone()));
                }
                i += 2;
            }
            "--seed" => {
                let v = args
                    .get(i + 1)
                    .ok_or_else(|| InvalidInput::BadSeed("<missing>".to_string()))?;
                seed = Some(v.parse().map_err(|_| InvalidInput::BadSeed(v.clone()))?);
                i += 2;
            }
            arg if arg.starts_with("--") => {
                return Err(InvalidInput::UnknownArgument(arg.to_string()));
            }
            arg => {
                if n.is_some() {
                    return Err(InvalidInput::UnknownArgument(arg.to_string()));
                }
                n = Some(arg.parse().map_err(|_| InvalidInput::BadSize(arg.to_string()))?);
                i += 1;
            }
        }
    }

    match n {
        Some(n) => Ok(Options { n, p, seed }),
        None => Err(InvalidInput::MissingSize),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options, InvalidInput> {
        let owned: Vec<String> = args.iter().map(ToString::to_string).collect();
        parse_args(&owned)
    }

    // -------------------------------------------------------------------------
    // Accepted inputs
    // -------------------------------------------------------------------------

    #[test]
    fn bare_size_uses_defaults() {
        let opts = parse(&["12"]).unwrap();
        assert_eq!(
            opts,
            Options {
                n: 12,
                p: DEFAULT_EDGE_PROBABILITY,
                seed: None,
            }
        );
    }

    #[test]
    fn zero_is_a_valid_size() {
        assert_eq!(parse(&["0"]).unwrap().n, 0);
    }

    #[test]
    fn flags_may_precede_or_follow_the_size() {
        let a = parse(&["--p", "0.25", "10", "--seed", "7"]).unwrap();
        let b = parse(&["10", "--seed", "7", "--p", "0.25"]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.n, 10);
        assert!((a.p - 0.25).abs() < f64::EPSILON);
        assert_eq!(a.seed, Some(7));
    }

    #[test]
    fn probability_bounds_are_inclusive() {
        assert!((parse(&["5", "--p", "0"]).unwrap().p - 0.0).abs() < f64::EPSILON);
        assert!((parse(&["5", "--p", "1"]).unwrap().p - 1.0).abs() < f64::EPSILON);
    }

    // -------------------------------------------------------------------------
    // Rejected inputs
    // -------------------------------------------------------------------------

    #[test]
    fn missing_size_is_rejected() {
        assert_eq!(parse(&[]).unwrap_err(), InvalidInput::MissingSize);
        assert_eq!(
            parse(&["--seed", "7"]).unwrap_err(),
            InvalidInput::MissingSize
        );
    }

    #[test]
    fn non_numeric_size_is_rejected() {
        assert_eq!(
            parse(&["abc"]).unwrap_err(),
            InvalidInput::BadSize("abc".to_string())
        );
        assert_eq!(
            parse(&["-3"]).unwrap_err(),
            InvalidInput::BadSize("-3".to_string())
        );
        assert_eq!(
            parse(&["3.5"]).unwrap_err(),
            InvalidInput::BadSize("3.5".to_string())
        );
    }

    #[test]
    fn out_of_range_probability_is_rejected() {
        assert!(matches!(
            parse(&["5", "--p", "1.5"]).unwrap_err(),
            InvalidInput::BadProbability(_)
        ));
        assert!(matches!(
            parse(&["5", "--p", "-0.1"]).unwrap_err(),
            InvalidInput::BadProbability(_)
        ));
        assert!(matches!(
            parse(&["5", "--p"]).unwrap_err(),
            InvalidInput::BadProbability(_)
        ));
    }

    #[test]
    fn malformed_seed_is_rejected() {
        assert!(matches!(
            parse(&["5", "--seed", "x"]).unwrap_err(),
            InvalidInput::BadSeed(_)
        ));
        assert!(matches!(
            parse(&["5", "--seed"]).unwrap_err(),
            InvalidInput::BadSeed(_)
        ));
    }

    #[test]
    fn unknown_flag_and_extra_positional_are_rejected() {
        assert_eq!(
            parse(&["5", "--frobnicate"]).unwrap_err(),
            InvalidInput::UnknownArgument("--frobnicate".to_string())
        );
        assert_eq!(
            parse(&["5", "6"]).unwrap_err(),
            InvalidInput::UnknownArgument("6".to_string())
        );
    }

    // -------------------------------------------------------------------------
    // Error messages
    // -------------------------------------------------------------------------

    #[test]
    fn display_is_human_readable() {
        let msg = InvalidInput::BadSize("abc".to_string()).to_string();
        assert!(msg.contains("vertex count"));
        assert!(msg.contains("abc"));

        let msg = InvalidInput::MissingSize.to_string();
        assert!(msg.contains("missing"));
    }
}
