//! Parsing of combined `DD/MM HHhMM` timestamps.
use core::fmt;
use core::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::options::DEFAULT_YEAR;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{value:?} does not match DD/MM HHhMM: {reason}")]
pub struct ParseHeureError {
    pub value: String,
    pub reason: String,
}

/// A day/month/hour/minute stamp as written in bracket exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Heure {
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl Heure {
    /// Parse `s` as `DD/MM HHhMM`, checking the day exists in `year`.
    ///
    /// `29/02` is only accepted for leap years.
    pub fn parse(s: &str, year: i32) -> Result<Self, ParseHeureError> {
        let fail = |reason: &str| ParseHeureError {
            value: s.to_string(),
            reason: reason.to_string(),
        };
        let [day, month, hour, minute] = scan(s).map_err(fail)?;
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(fail(&format!("no such day in {year}")));
        }
        if NaiveTime::from_hms_opt(hour, minute, 0).is_none() {
            return Err(fail("time out of range"));
        }
        Ok(Self {
            month,
            day,
            hour,
            minute,
        })
    }

    /// `YYYY-MM-DD`
    pub fn date_string(&self, year: i32) -> String {
        format!("{:04}-{:02}-{:02}", year, self.month, self.day)
    }

    /// `HH:MM`
    pub fn time_string(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

/// Splits `D[D]/M[M]<whitespace>H[H]hM[M]` into its four numbers.
fn scan(s: &str) -> Result<[u32; 4], &'static str> {
    let mut rest = s;
    let day = digits(&mut rest)?;
    expect(&mut rest, '/')?;
    let month = digits(&mut rest)?;
    let trimmed = rest.trim_start();
    if trimmed.len() == rest.len() {
        return Err("missing whitespace between date and time");
    }
    rest = trimmed;
    let hour = digits(&mut rest)?;
    expect(&mut rest, 'h')?;
    let minute = digits(&mut rest)?;
    if !rest.is_empty() {
        return Err("trailing input");
    }
    Ok([day, month, hour, minute])
}

/// One or two ASCII digits.
fn digits<'a>(rest: &mut &'a str) -> Result<u32, &'static str> {
    let s: &'a str = *rest;
    let len = s
        .bytes()
        .take(3)
        .take_while(|b| b.is_ascii_digit())
        .count();
    match len {
        0 => Err("expected a digit"),
        1 | 2 => {
            let (num, tail) = s.split_at(len);
            *rest = tail;
            num.parse().map_err(|_| "expected a digit")
        }
        _ => Err("field longer than two digits"),
    }
}

fn expect<'a>(rest: &mut &'a str, sep: char) -> Result<(), &'static str> {
    let s: &'a str = *rest;
    match s.strip_prefix(sep) {
        Some(tail) => {
            *rest = tail;
            Ok(())
        }
        None if sep == '/' => Err("expected '/' between day and month"),
        None => Err("expected 'h' between hour and minute"),
    }
}

impl FromStr for Heure {
    type Err = ParseHeureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heure::parse(s, DEFAULT_YEAR)
    }
}

impl fmt::Display for Heure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}/{:02} {:02}h{:02}",
            self.day, self.month, self.hour, self.minute
        )
    }
}
