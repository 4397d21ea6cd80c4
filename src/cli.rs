//! Command-line interface parsing for aniday
//!
//! Both arguments are optional; missing components default to the current
//! local date. Range validation happens in the date layer so out-of-range
//! values are reported uniformly, before any I/O.

use clap::Parser;

/// Aniday - anime character birthdays from the terminal
#[derive(Parser, Debug)]
#[command(name = "aniday")]
#[command(about = "List anime character birthdays for a day and month")]
#[command(version)]
pub struct Cli {
    /// Day of month in [1-31]; defaults to today
    #[arg(short, long, value_name = "DAY")]
    pub day: Option<i32>,

    /// Month in [1-12]; defaults to the current month
    #[arg(short, long, value_name = "MONTH")]
    pub month: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args() {
        let cli = Cli::parse_from(["aniday"]);
        assert!(cli.day.is_none());
        assert!(cli.month.is_none());
    }

    #[test]
    fn test_parse_short_flags() {
        let cli = Cli::parse_from(["aniday", "-d", "14", "-m", "2"]);
        assert_eq!(cli.day, Some(14));
        assert_eq!(cli.month, Some(2));
    }

    #[test]
    fn test_parse_long_flags() {
        let cli = Cli::parse_from(["aniday", "--day", "31", "--month", "12"]);
        assert_eq!(cli.day, Some(31));
        assert_eq!(cli.month, Some(12));
    }

    #[test]
    fn test_day_alone_is_accepted() {
        let cli = Cli::parse_from(["aniday", "--day", "7"]);
        assert_eq!(cli.day, Some(7));
        assert!(cli.month.is_none());
    }

    #[test]
    fn test_non_numeric_day_is_a_parse_error() {
        let result = Cli::try_parse_from(["aniday", "--day", "soon"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_out_of_range_values_parse_here() {
        // The parser accepts any integer; range checks live in the date layer.
        let cli = Cli::parse_from(["aniday", "-d", "42", "-m", "13"]);
        assert_eq!(cli.day, Some(42));
        assert_eq!(cli.month, Some(13));
    }
}
