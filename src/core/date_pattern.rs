//! Date string encoding driven by a textual pattern such as `yyyy-MM-dd` or
//! `dd/MM/yyyy`.
//!
//! Patterns are compiled once into a `chrono` format description. Parsing
//! consumes the whole input and fails on any mismatch, trailing characters
//! included. Input is only accepted in the exact form the pattern formats
//! it: padded fields need their padding, whitespace is matched literally and
//! names must keep their casing.

use chrono::NaiveDate;

use crate::error::{ChartError, ChartResult};

pub const DEFAULT_DATE_PATTERN: &str = "yyyy-MM-dd";

/// Compiled date pattern.
///
/// Supported fields: `yyyy`/`y` (full year), `yy` (two-digit year), `M`,
/// `MM`, `MMM`, `MMMM` (month number/name), `d`, `dd` (day of month), `EEE`,
/// `EEEE` (weekday name). Text inside single quotes is literal, `''` is a
/// quote, and any non-letter character is literal too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    source: String,
    format: String,
}

impl DatePattern {
    pub fn new(pattern: &str) -> ChartResult<Self> {
        let format = compile(pattern)?;
        Ok(Self {
            source: pattern.to_owned(),
            format,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn format(&self, date: NaiveDate) -> String {
        date.format(&self.format).to_string()
    }

    pub fn parse(&self, input: &str) -> ChartResult<NaiveDate> {
        let date = NaiveDate::parse_from_str(input, &self.format)
            .map_err(|err| self.parse_error(input, err.to_string()))?;
        // chrono skips whitespace and accepts unpadded numbers.
        let canonical = self.format(date);
        if canonical != input {
            return Err(self.parse_error(
                input,
                format!("input does not match the pattern layout, expected `{canonical}`"),
            ));
        }
        Ok(date)
    }

    fn parse_error(&self, input: &str, reason: String) -> ChartError {
        ChartError::DateParse {
            input: input.to_owned(),
            pattern: self.source.clone(),
            reason,
        }
    }
}

impl Default for DatePattern {
    fn default() -> Self {
        Self {
            source: DEFAULT_DATE_PATTERN.to_owned(),
            format: "%Y-%m-%d".to_owned(),
        }
    }
}

pub fn format_date(date: NaiveDate, pattern: &str) -> ChartResult<String> {
    Ok(DatePattern::new(pattern)?.format(date))
}

pub fn parse_date(input: &str, pattern: &str) -> ChartResult<NaiveDate> {
    DatePattern::new(pattern)?.parse(input)
}

fn compile(pattern: &str) -> ChartResult<String> {
    let invalid = |reason: String| ChartError::InvalidDatePattern {
        pattern: pattern.to_owned(),
        reason,
    };

    let chars: Vec<char> = pattern.chars().collect();
    let mut format = String::with_capacity(pattern.len() * 2);
    let (mut has_year, mut has_month, mut has_day) = (false, false, false);
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if ch == '\'' {
            if chars.get(i + 1) == Some(&'\'') {
                format.push('\'');
                i += 2;
                continue;
            }
            i += 1;
            loop {
                match chars.get(i) {
                    None => return Err(invalid("unterminated quoted literal".to_owned())),
                    Some('\'') if chars.get(i + 1) == Some(&'\'') => {
                        format.push('\'');
                        i += 2;
                    }
                    Some('\'') => {
                        i += 1;
                        break;
                    }
                    Some(&literal) => {
                        push_literal(&mut format, literal);
                        i += 1;
                    }
                }
            }
            continue;
        }

        if !ch.is_ascii_alphabetic() {
            if ch.is_alphabetic() {
                return Err(invalid(format!("unsupported field `{ch}`")));
            }
            push_literal(&mut format, ch);
            i += 1;
            continue;
        }

        let run = chars[i..].iter().take_while(|&&c| c == ch).count();
        let directive = match (ch, run) {
            ('y', 2) => "%y",
            ('y', _) => "%Y",
            ('M', 1) => "%-m",
            ('M', 2) => "%m",
            ('M', 3) => "%b",
            ('M', _) => "%B",
            ('d', 1) => "%-d",
            ('d', 2) => "%d",
            ('E', 1..=3) => "%a",
            ('E', _) => "%A",
            _ => {
                return Err(invalid(format!(
                    "unsupported field `{}`",
                    ch.to_string().repeat(run)
                )));
            }
        };
        match ch {
            'y' => has_year = true,
            'M' => has_month = true,
            'd' => has_day = true,
            _ => {}
        }
        format.push_str(directive);
        i += run;
    }

    if !(has_year && has_month && has_day) {
        return Err(invalid(
            "pattern must contain year, month and day fields".to_owned(),
        ));
    }
    Ok(format)
}

fn push_literal(format: &mut String, ch: char) {
    if ch == '%' {
        format.push_str("%%");
    } else {
        format.push(ch);
    }
}
