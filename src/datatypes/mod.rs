//! The XML Schema date/time datatypes.
//!
//! Each datatype is a [`TemporalGrammar`] strategy supplying its lexical
//! grammar and canonical form; calendar math and ordering come from the
//! shared [`calendar`](crate::calendar) and [`order`](crate::order) modules.

pub(crate) mod date;
pub(crate) mod date_time;
pub(crate) mod day;
pub(crate) mod duration;
pub(crate) mod month;
pub(crate) mod month_day;
pub(crate) mod time;
pub(crate) mod year;
pub(crate) mod year_month;

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::calendar::{carry_days, days_in_month, normalize};
use crate::error::{InvalidValueError, UnknownDatatype};
use crate::facet::{Facet, TEMPORAL_FACETS};
use crate::lexer::{LexicalError, Scanner};
use crate::numeric::{MAX_COMPONENT, append_padded, parse_digits};
use crate::order::{compare_dates, compare_order};
use crate::timezone::Zone;
use crate::types::{Marker, PartialOrdering, TemporalValue};

/// Lexical grammar and canonical form of one temporal datatype.
pub trait TemporalGrammar: Send + Sync {
    fn name(&self) -> &'static str;

    /// Parses, validates and normalizes a literal.
    fn parse(&self, literal: &str) -> Result<TemporalValue, LexicalError>;

    fn format(&self, value: &TemporalValue) -> String;

    /// `strict` selects exclusive (`<`, `>`) over inclusive (`<=`, `>=`)
    /// semantics; point-in-time datatypes do not distinguish them.
    fn compare(&self, a: &TemporalValue, b: &TemporalValue, _strict: bool) -> PartialOrdering {
        compare_dates(a, b)
    }

    /// Value identity. For point-in-time datatypes an absent timezone is read
    /// as UTC here, unlike in [`compare`](Self::compare).
    fn is_equal(&self, a: &TemporalValue, b: &TemporalValue) -> bool {
        compare_order(a, b) == PartialOrdering::Equal
    }

    fn facets(&self) -> &'static [Facet] {
        TEMPORAL_FACETS
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Datatype {
    DateTime,
    Time,
    Date,
    GYearMonth,
    GYear,
    GMonthDay,
    GDay,
    GMonth,
    Duration,
}

impl Datatype {
    pub const ALL: [Datatype; 9] = [
        Datatype::DateTime,
        Datatype::Time,
        Datatype::Date,
        Datatype::GYearMonth,
        Datatype::GYear,
        Datatype::GMonthDay,
        Datatype::GDay,
        Datatype::GMonth,
        Datatype::Duration,
    ];

    pub fn grammar(self) -> &'static dyn TemporalGrammar {
        match self {
            Datatype::DateTime => &date_time::DateTime,
            Datatype::Time => &time::Time,
            Datatype::Date => &date::Date,
            Datatype::GYearMonth => &year_month::GYearMonth,
            Datatype::GYear => &year::GYear,
            Datatype::GMonthDay => &month_day::GMonthDay,
            Datatype::GDay => &day::GDay,
            Datatype::GMonth => &month::GMonth,
            Datatype::Duration => &duration::Duration,
        }
    }

    pub fn name(self) -> &'static str {
        self.grammar().name()
    }

    pub fn from_name(name: &str) -> Option<Datatype> {
        Self::ALL.into_iter().find(|datatype| datatype.name() == name)
    }

    pub fn facets(self) -> &'static [Facet] {
        self.grammar().facets()
    }

    /// Validates `literal` against this datatype.
    ///
    /// Every internal failure is reported as an [`InvalidValueError`] naming
    /// only the literal and the datatype; no partial value is returned.
    pub fn validate(self, literal: &str) -> Result<DateTimeData, InvalidValueError> {
        let grammar = self.grammar();
        match grammar.parse(literal) {
            Ok(value) => Ok(DateTimeData {
                datatype: self,
                value,
            }),
            Err(err) => {
                debug!(datatype = grammar.name(), literal, reason = %err, "rejected literal");
                Err(InvalidValueError::new(literal, grammar.name()))
            }
        }
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Datatype {
    type Err = UnknownDatatype;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Datatype::from_name(s).ok_or_else(|| UnknownDatatype(s.to_string()))
    }
}

/// A validated temporal value together with its datatype.
#[derive(Clone, Copy, Debug)]
pub struct DateTimeData {
    datatype: Datatype,
    value: TemporalValue,
}

impl DateTimeData {
    pub fn datatype(&self) -> Datatype {
        self.datatype
    }

    pub fn value(&self) -> &TemporalValue {
        &self.value
    }

    pub fn canonical(&self) -> String {
        self.datatype.grammar().format(&self.value)
    }

    /// Values of different datatypes are never ordered.
    pub fn compare(&self, other: &DateTimeData, strict: bool) -> PartialOrdering {
        if self.datatype != other.datatype {
            return PartialOrdering::Indeterminate;
        }
        self.datatype
            .grammar()
            .compare(&self.value, &other.value, strict)
    }
}

/// Value identity. For point-in-time datatypes this ignores timezone
/// presence, so `---15Z == ---15` holds while [`DateTimeData::compare`]
/// reports the same pair as `Indeterminate`.
impl PartialEq for DateTimeData {
    fn eq(&self, other: &Self) -> bool {
        self.datatype == other.datatype
            && self.datatype.grammar().is_equal(&self.value, &other.value)
    }
}

impl fmt::Display for DateTimeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

// --- Shared scanning for point-in-time grammars ---

/// `-?YYYY+`: at least four digits, no leading zero beyond four.
pub(crate) fn scan_year(scanner: &mut Scanner<'_>) -> Result<i64, LexicalError> {
    let negative = scanner.eat(b'-');
    let (start, end) = scanner.digit_run();
    if end - start < 4 {
        return Err(LexicalError::new("year must have at least four digits", start));
    }
    if end - start > 4 && scanner.bytes()[start] == b'0' {
        return Err(LexicalError::new(
            "leading zeros are not allowed in a year of more than four digits",
            start,
        ));
    }
    let year = parse_digits(scanner.bytes(), start, end)?;
    if negative && year == 0 {
        return Err(LexicalError::new("year zero has no negative form", start));
    }
    Ok(if negative { -year } else { year })
}

pub(crate) fn scan_month(scanner: &mut Scanner<'_>) -> Result<i64, LexicalError> {
    scanner.fixed_digits(2, "month must be two digits")
}

pub(crate) fn scan_day(scanner: &mut Scanner<'_>) -> Result<i64, LexicalError> {
    scanner.fixed_digits(2, "day must be two digits")
}

/// `YYYY-MM-DD` into `value`.
pub(crate) fn scan_date(
    scanner: &mut Scanner<'_>,
    value: &mut TemporalValue,
) -> Result<(), LexicalError> {
    value.year = scan_year(scanner)?;
    scanner.expect(b'-', "expected '-' after the year")?;
    value.month = scan_month(scanner)?;
    scanner.expect(b'-', "expected '-' after the month")?;
    value.day = scan_day(scanner)?;
    Ok(())
}

/// `hh:mm:ss(.s+)?` into `value`.
pub(crate) fn scan_time(
    scanner: &mut Scanner<'_>,
    value: &mut TemporalValue,
) -> Result<(), LexicalError> {
    value.hour = scanner.fixed_digits(2, "hour must be two digits")?;
    scanner.expect(b':', "expected ':' after the hour")?;
    value.minute = scanner.fixed_digits(2, "minute must be two digits")?;
    scanner.expect(b':', "expected ':' after the minute")?;
    value.second = scanner.fixed_digits(2, "second must be two digits")?;
    value.fraction = scanner.optional_fraction()?;
    Ok(())
}

/// The fields a datatype's lexical form carries.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Fields {
    pub year: bool,
    pub month: bool,
    pub day: bool,
    pub time: bool,
}

impl Fields {
    pub const ALL: Fields = Fields {
        year: true,
        month: true,
        day: true,
        time: true,
    };
}

/// Keeps the carried fields of `value` and re-pins the rest.
pub(crate) fn project(value: &TemporalValue, fields: Fields) -> TemporalValue {
    let mut out = TemporalValue::pinned().with_marker(value.marker);
    if fields.year {
        out.year = value.year;
    }
    if fields.month {
        out.month = value.month;
    }
    if fields.day {
        out.day = value.day;
    }
    if fields.time {
        out.hour = value.hour;
        out.minute = value.minute;
        out.second = value.second;
        out.fraction = value.fraction;
    }
    out
}

/// Reads the optional zone suffix, validates field ranges, folds any offset
/// into the value and drops what the offset moved into fields the datatype
/// does not carry.
pub(crate) fn finish(
    scanner: &mut Scanner<'_>,
    value: TemporalValue,
    fields: Fields,
) -> Result<TemporalValue, LexicalError> {
    let zone = scanner.zone_suffix()?;
    resolve(scanner, value, zone, fields)
}

/// [`finish`] for a zone suffix the caller has already read.
pub(crate) fn resolve(
    scanner: &Scanner<'_>,
    mut value: TemporalValue,
    zone: Option<Zone>,
    fields: Fields,
) -> Result<TemporalValue, LexicalError> {
    check_ranges(scanner, &mut value)?;
    let value = match zone {
        None => value,
        Some(Zone::Utc) => value.with_marker(Marker::Utc),
        Some(Zone::Offset(minutes)) => normalize(&value, minutes),
    };
    // the canonical year must stay within what the year grammar reads back
    if value.year.abs() > MAX_COMPONENT {
        return Err(scanner.error("year out of range after normalization"));
    }
    Ok(project(&value, fields))
}

fn check_ranges(scanner: &Scanner<'_>, value: &mut TemporalValue) -> Result<(), LexicalError> {
    if !(1..=12).contains(&value.month) {
        return Err(scanner.error("month must be 1-12"));
    }
    if value.day < 1 || value.day > days_in_month(value.year, value.month) {
        return Err(scanner.error("day is out of range for the month"));
    }
    if value.hour == 24 && value.minute == 0 && value.second == 0 && value.fraction.is_zero() {
        value.hour = 0;
        (value.year, value.month, value.day) = carry_days(value.year, value.month, value.day + 1);
    } else if value.hour > 23 {
        return Err(scanner.error("hour must be 0-23, unless 24:00:00"));
    }
    if value.minute > 59 {
        return Err(scanner.error("minute must be 0-59"));
    }
    if value.second > 59 {
        return Err(scanner.error("second must be 0-59"));
    }
    Ok(())
}

// --- Shared formatting ---

pub(crate) fn append_two(buf: &mut String, value: i64) {
    append_padded(buf, value, 2);
}

pub(crate) fn append_year(buf: &mut String, year: i64) {
    append_padded(buf, year, 4);
}

pub(crate) fn append_date(buf: &mut String, value: &TemporalValue) {
    append_year(buf, value.year);
    buf.push('-');
    append_two(buf, value.month);
    buf.push('-');
    append_two(buf, value.day);
}

pub(crate) fn append_time(buf: &mut String, value: &TemporalValue) {
    append_two(buf, value.hour);
    buf.push(':');
    append_two(buf, value.minute);
    buf.push(':');
    append_two(buf, value.second);
    if !value.fraction.is_zero() {
        buf.push('.');
        buf.push_str(&value.fraction.digits());
    }
}

pub(crate) fn append_zone(buf: &mut String, value: &TemporalValue) {
    if value.marker == Marker::Utc {
        buf.push('Z');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn names_round_trip() {
        for datatype in Datatype::ALL {
            assert_eq!(Datatype::from_name(datatype.name()), Some(datatype));
            assert_eq!(datatype.to_string().parse::<Datatype>().unwrap(), datatype);
        }
        assert_eq!(
            "gday".parse::<Datatype>().unwrap_err(),
            UnknownDatatype("gday".to_string())
        );
    }

    #[test]
    fn facets_advertise_order_relations() {
        for datatype in Datatype::ALL {
            let facets = datatype.facets();
            assert!(facets.contains(&Facet::MinInclusive));
            assert!(facets.contains(&Facet::MaxExclusive));
            assert!(!facets.contains(&Facet::Length));
        }
    }

    #[test]
    fn boundary_error_names_literal_and_type() {
        let err = Datatype::GDay.validate("---15X").unwrap_err();
        assert_eq!(err, InvalidValueError::new("---15X", "gDay"));
        assert_eq!(
            err.to_string(),
            "cvc-datatype-valid.1.2.1: '---15X' is not a valid value for 'gDay'"
        );

        let err = Datatype::Duration.validate("P").unwrap_err();
        assert_eq!(err.datatype, "duration");
    }

    #[test]
    fn empty_and_non_ascii_literals_are_rejected() {
        for datatype in Datatype::ALL {
            assert!(datatype.validate("").is_err(), "{datatype}");
            assert!(datatype.validate("−P1Y—").is_err(), "{datatype}");
        }
    }

    #[test]
    fn canonical_forms_round_trip() {
        let samples = [
            (Datatype::DateTime, "2002-10-10T12:00:00-05:00"),
            (Datatype::DateTime, "-0044-03-15T10:30:00.250"),
            (Datatype::Time, "13:20:00+14:00"),
            (Datatype::Date, "2004-02-29Z"),
            (Datatype::GYearMonth, "1999-05-01:00"),
            (Datatype::GYear, "12004"),
            (Datatype::GMonthDay, "--02-29"),
            (Datatype::GDay, "---01+05:00"),
            (Datatype::GMonth, "--12Z"),
            (Datatype::Duration, "-P1Y2M3DT4H5M6.75S"),
            (Datatype::Duration, "PT0S"),
        ];
        for (datatype, literal) in samples {
            let value = datatype.validate(literal).unwrap();
            let again = datatype.validate(&value.canonical()).unwrap();
            assert_eq!(value, again, "{literal}");
            assert_eq!(value.value(), again.value(), "{literal}");
            assert_eq!(again.canonical(), value.canonical());
        }
    }

    #[test]
    fn values_of_different_datatypes_are_unordered() {
        let day = Datatype::GDay.validate("---15").unwrap();
        let month = Datatype::GMonth.validate("--01").unwrap();
        assert_eq!(day.compare(&month, false), PartialOrdering::Indeterminate);
        assert_ne!(day, month);
    }

    #[test]
    fn hour_twenty_four_rolls_to_next_day() {
        let value = Datatype::DateTime.validate("1999-12-31T24:00:00Z").unwrap();
        assert_eq!(value.canonical(), "2000-01-01T00:00:00Z");
        assert!(Datatype::DateTime.validate("1999-12-31T24:00:01").is_err());
        assert!(Datatype::DateTime.validate("1999-12-31T24:00:00.5").is_err());
    }

    #[test]
    fn year_rules() {
        assert!(Datatype::GYear.validate("999").is_err());
        assert!(Datatype::GYear.validate("01999").is_err());
        assert!(Datatype::GYear.validate("0000").is_ok());
        assert_eq!(Datatype::GYear.validate("-0001").unwrap().canonical(), "-0001");
        assert_eq!(Datatype::GYear.validate("10000").unwrap().canonical(), "10000");
        assert!(Datatype::GYear.validate("-0000").is_err());
        assert!(Datatype::Date.validate("-0000-01-01").is_err());
    }

    #[test]
    fn normalization_cannot_leave_the_year_range() {
        for (datatype, literal) in [
            (Datatype::DateTime, "2147483647-12-31T23:00:00-01:00"),
            (Datatype::DateTime, "2147483647-12-31T24:00:00"),
            (Datatype::DateTime, "-2147483647-01-01T00:00:00+01:00"),
            (Datatype::GYear, "-2147483647+01:00"),
        ] {
            assert!(datatype.validate(literal).is_err(), "{literal}");
        }
        for (datatype, literal) in [
            (Datatype::DateTime, "2147483647-12-31T22:59:59-01:00"),
            (Datatype::GYear, "-2147483647Z"),
            (Datatype::GYear, "2147483647"),
        ] {
            let value = datatype.validate(literal).unwrap();
            let again = datatype.validate(&value.canonical()).unwrap();
            assert_eq!(value.value(), again.value(), "{literal}");
        }
    }

    proptest! {
        #[test]
        fn prop_date_time_round_trip(
            year in -9999i64..9999,
            month in 1i64..=12,
            day in 1i64..=28,
            hour in 0i64..24,
            minute in 0i64..60,
            second in 0i64..60,
            millis in 0u32..1000,
            offset in proptest::option::of(-14i64..=14),
        ) {
            let mut literal = String::new();
            append_year(&mut literal, year);
            literal.push_str(&format!("-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}.{millis:03}"));
            if let Some(hours) = offset {
                literal.push_str(&format!("{}{:02}:00", if hours < 0 { '-' } else { '+' }, hours.abs()));
            }
            let value = Datatype::DateTime.validate(&literal).unwrap();
            let again = Datatype::DateTime.validate(&value.canonical()).unwrap();
            prop_assert_eq!(value.value(), again.value());
        }

        #[test]
        fn prop_duration_round_trip(
            negative in any::<bool>(),
            fields in proptest::collection::vec(proptest::option::of(0u32..100_000), 6),
            fraction in proptest::option::of(0u32..1_000_000),
        ) {
            let mut literal = String::from(if negative { "-P" } else { "P" });
            for (amount, designator) in fields[..3].iter().zip(["Y", "M", "D"]) {
                if let Some(amount) = amount {
                    literal.push_str(&format!("{amount}{designator}"));
                }
            }
            let mut time = String::new();
            for (amount, designator) in fields[3..].iter().zip(["H", "M", "S"]) {
                if let Some(amount) = amount {
                    time.push_str(&amount.to_string());
                    if designator == "S" {
                        if let Some(fraction) = fraction {
                            time.push_str(&format!(".{fraction}"));
                        }
                    }
                    time.push_str(designator);
                }
            }
            if !time.is_empty() {
                literal.push('T');
                literal.push_str(&time);
            }
            prop_assume!(literal.len() > 2 && !literal.ends_with('P'));

            let value = Datatype::Duration.validate(&literal).unwrap();
            let again = Datatype::Duration.validate(&value.canonical()).unwrap();
            prop_assert_eq!(value.value(), again.value());
        }
    }
}
