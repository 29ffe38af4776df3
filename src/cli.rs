// ============================================================================
// Command-Line Interface
// Argument parsing, validation and report rendering for the binary
// ============================================================================

use crate::domain::SummationType;
use crate::engine::PiComputation;
use clap::{Parser, ValueEnum};
use std::fmt;

/// Usage line printed to stdout on any argument error.
pub const USAGE: &str = "USAGE: chudnovsky-pi <n digits of pi>";

const BANNER: &str = "****************************";

#[derive(Parser, Debug)]
#[command(name = "chudnovsky-pi")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print digits of pi computed with the Chudnovsky series", long_about = None)]
pub struct Cli {
    /// Number of decimal digits of pi to print (truncated, not rounded)
    pub digits: Option<String>,

    /// Series evaluation strategy
    #[arg(long, value_enum, default_value_t = StrategyArg::Recurrence)]
    pub strategy: StrategyArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyArg {
    /// Term recurrence at working precision
    Recurrence,
    /// Exact binary splitting, rounded once
    BinarySplitting,
}

impl From<StrategyArg> for SummationType {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Recurrence => SummationType::TermRecurrence,
            StrategyArg::BinarySplitting => SummationType::BinarySplitting,
        }
    }
}

/// Argument problem detected before the pipeline runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// No digit count given
    MissingDigits,
    /// Digit count is not a string of decimal digits
    NotANumber(String),
    /// Digit count does not fit in 64 bits
    OutOfRange(String),
    /// Rejected by the argument parser
    Invalid(String),
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::MissingDigits => write!(f, "missing digit count"),
            UsageError::NotANumber(arg) => write!(f, "not a decimal digit count: {:?}", arg),
            UsageError::OutOfRange(arg) => write!(f, "digit count out of range: {}", arg),
            UsageError::Invalid(reason) => write!(f, "invalid arguments: {}", reason),
        }
    }
}

impl std::error::Error for UsageError {}

/// Validate the positional digit count.
///
/// Accepts only a non-empty run of ASCII decimal digits; signs, spaces and
/// other characters are rejected.
pub fn parse_digits(arg: Option<&str>) -> Result<u64, UsageError> {
    let arg = arg.ok_or(UsageError::MissingDigits)?;
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UsageError::NotANumber(arg.to_string()));
    }
    arg.parse()
        .map_err(|_| UsageError::OutOfRange(arg.to_string()))
}

/// Render the stdout report for a finished run.
pub fn render_report(computation: &PiComputation) -> String {
    let spec = &computation.spec;
    format!(
        "Requested # digits of precision: {requested}\n   \
         Actual # digits of precision: {actual}\n\
         \n\
         {BANNER}\n\
         PI to {requested} digits\n\
         {BANNER}\n\
         {digits}\n",
        requested = spec.requested_digits,
        actual = spec.achievable_decimal_digits,
        digits = computation.digits.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PiEngineBuilder;
    use crate::interfaces::NoOpEventHandler;
    use std::sync::Arc;

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_digits(Some("50")), Ok(50));
        assert_eq!(parse_digits(Some("0")), Ok(0));
        assert_eq!(parse_digits(Some("007")), Ok(7));
    }

    #[test]
    fn test_parse_digits_rejects() {
        assert_eq!(parse_digits(None), Err(UsageError::MissingDigits));
        for bad in ["", "abc", "12a", "-5", "+5", " 5", "1.5", "٣"] {
            assert!(
                matches!(parse_digits(Some(bad)), Err(UsageError::NotANumber(_))),
                "accepted {:?}",
                bad
            );
        }
        assert!(matches!(
            parse_digits(Some("99999999999999999999999")),
            Err(UsageError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["chudnovsky-pi", "25"]).unwrap();
        assert_eq!(cli.digits.as_deref(), Some("25"));
        assert_eq!(cli.strategy, StrategyArg::Recurrence);

        let cli =
            Cli::try_parse_from(["chudnovsky-pi", "--strategy", "binary-splitting", "9"]).unwrap();
        assert_eq!(SummationType::from(cli.strategy), SummationType::BinarySplitting);

        let cli = Cli::try_parse_from(["chudnovsky-pi"]).unwrap();
        assert_eq!(parse_digits(cli.digits.as_deref()), Err(UsageError::MissingDigits));

        assert!(Cli::try_parse_from(["chudnovsky-pi", "1", "2"]).is_err());
    }

    #[test]
    fn test_render_report() {
        let engine = PiEngineBuilder::new()
            .build(Arc::new(NoOpEventHandler))
            .unwrap();
        let report = render_report(&engine.compute(10).unwrap());

        assert_eq!(
            report,
            "Requested # digits of precision: 10\n\
             \x20  Actual # digits of precision: 21\n\
             \n\
             ****************************\n\
             PI to 10 digits\n\
             ****************************\n\
             3.141592653\n"
        );
    }
}
