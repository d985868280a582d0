//! Line parser for the `NAME=COUNT[M]` timer file format

use clap::ValueEnum;

use super::ParseError;
use crate::state::Timer;

/// Longest accepted timer name, in characters
pub const MAX_NAME_LEN: usize = 79;

/// How the COUNT of a timer line is read.
///
/// Earlier timer files stored a raw second count; later ones store minutes.
/// The trailing `M` is accepted in both cases and never changes the unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Units {
    #[default]
    Minutes,
    Seconds,
}

impl Units {
    /// Convert a count in these units to seconds, `None` on overflow
    pub fn to_seconds(self, count: u64) -> Option<u64> {
        match self {
            Units::Minutes => count.checked_mul(60),
            Units::Seconds => Some(count),
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Units::Minutes => f.write_str("minutes"),
            Units::Seconds => f.write_str("seconds"),
        }
    }
}

/// Parse one line of a timer file.
///
/// Comments (`#...`) and blank lines produce `Ok(None)`.
pub fn parse_line(line: &str, units: Units) -> Result<Option<Timer>, ParseError> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (name, count) = line.split_once('=').ok_or(ParseError::MissingSeparator)?;
    if name.is_empty() {
        return Err(ParseError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ParseError::NameTooLong { max: MAX_NAME_LEN });
    }

    let digits = count.strip_suffix('M').unwrap_or(count);
    let invalid = || ParseError::InvalidCount(count.to_string());
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let seconds = digits
        .parse::<u64>()
        .ok()
        .and_then(|n| units.to_seconds(n))
        .ok_or_else(invalid)?;

    Ok(Some(Timer::new(name, seconds)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(line: &str) -> Option<(String, u64)> {
        parse_line(line, Units::Minutes)
            .expect("line should parse")
            .map(|t| (t.name().to_string(), t.remaining(0)))
    }

    #[test]
    fn minutes_line_becomes_seconds() {
        assert_eq!(parsed("Lunch=30M"), Some(("Lunch".to_string(), 1800)));
        assert_eq!(parsed("Lunch=30M\n"), Some(("Lunch".to_string(), 1800)));
        assert_eq!(parsed("Lunch=30M\r\n"), Some(("Lunch".to_string(), 1800)));
        assert_eq!(parsed("Zero=0M"), Some(("Zero".to_string(), 0)));
    }

    #[test]
    fn suffix_is_optional() {
        assert_eq!(parsed("Tea=4"), Some(("Tea".to_string(), 240)));
    }

    #[test]
    fn seconds_units_read_raw_count() {
        let timer = parse_line("Egg=300M", Units::Seconds).unwrap().unwrap();
        assert_eq!(timer.remaining(0), 300);
    }

    #[test]
    fn comments_and_blank_lines_produce_nothing() {
        assert_eq!(parsed("#comment"), None);
        assert_eq!(parsed("# Work=25M"), None);
        assert_eq!(parsed(""), None);
        assert_eq!(parsed("\n"), None);
    }

    #[test]
    fn name_keeps_spaces_and_stops_at_first_separator() {
        assert_eq!(parsed("Deep work=90M"), Some(("Deep work".to_string(), 5400)));
        assert_eq!(
            parse_line("a=b=3M", Units::Minutes),
            Err(ParseError::InvalidCount("b=3M".to_string()))
        );
    }

    #[test]
    fn malformed_lines_are_rejected() {
        assert_eq!(parse_line("BadLine", Units::Minutes), Err(ParseError::MissingSeparator));
        assert_eq!(parse_line("=5M", Units::Minutes), Err(ParseError::EmptyName));
        for count in ["", "M", "-5M", "+5M", "5 M", "5m", "1.5M", "abc"] {
            let line = format!("Work={}", count);
            assert_eq!(
                parse_line(&line, Units::Minutes),
                Err(ParseError::InvalidCount(count.to_string())),
                "line {:?}",
                line
            );
        }
    }

    #[test]
    fn name_length_is_bounded() {
        let ok = format!("{}=1M", "n".repeat(MAX_NAME_LEN));
        assert!(parse_line(&ok, Units::Minutes).unwrap().is_some());

        let long = format!("{}=1M", "n".repeat(MAX_NAME_LEN + 1));
        assert_eq!(
            parse_line(&long, Units::Minutes),
            Err(ParseError::NameTooLong { max: MAX_NAME_LEN })
        );
    }

    #[test]
    fn overflowing_counts_are_rejected() {
        let line = format!("Forever={}M", u64::MAX);
        assert!(matches!(
            parse_line(&line, Units::Minutes),
            Err(ParseError::InvalidCount(_))
        ));
        assert!(parse_line(&line, Units::Seconds).unwrap().is_some());
    }
}
