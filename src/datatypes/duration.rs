use super::TemporalGrammar;
use crate::lexer::{LexicalError, Scanner};
use crate::numeric::parse_digits;
use crate::order::compare_duration;
use crate::types::{Fraction, Marker, PartialOrdering, TemporalValue};

/// `duration`: `-?PnYnMnDTnHnMnS`, fraction allowed on seconds only.
pub(crate) struct Duration;

struct Component {
    amount: i64,
    fraction: Option<Fraction>,
    designator: u8,
    offset: usize,
}

/// Reads `digits(.digits)? designator`.
fn scan_component(scanner: &mut Scanner<'_>) -> Result<Component, LexicalError> {
    let offset = scanner.offset();
    let (start, end) = scanner.digit_run();
    if start == end {
        return Err(scanner.error("expected digits before a designator"));
    }
    let amount = parse_digits(scanner.bytes(), start, end)?;
    let fraction = if scanner.peek() == Some(b'.') {
        Some(scanner.optional_fraction()?)
    } else {
        None
    };
    match scanner.advance() {
        Some(designator) if designator.is_ascii_uppercase() => Ok(Component {
            amount,
            fraction,
            designator,
            offset,
        }),
        _ => Err(LexicalError::new("expected a designator", scanner.offset())),
    }
}

impl TemporalGrammar for Duration {
    fn name(&self) -> &'static str {
        "duration"
    }

    fn parse(&self, literal: &str) -> Result<TemporalValue, LexicalError> {
        let mut scanner = Scanner::new(literal);
        let negative = scanner.eat(b'-');
        scanner.expect(b'P', "duration must start with 'P' or '-P'")?;
        let sign = if negative { -1 } else { 1 };

        let mut value = TemporalValue::default();
        let mut any_component = false;

        // Y, M, D must appear in that order, each at most once.
        let mut rank = 0;
        while !scanner.is_at_end() && scanner.peek() != Some(b'T') {
            let component = scan_component(&mut scanner)?;
            if component.fraction.is_some() {
                return Err(LexicalError::new(
                    "only seconds may have a fractional part",
                    component.offset,
                ));
            }
            let (slot, next_rank) = match component.designator {
                b'Y' if rank < 1 => (&mut value.year, 1),
                b'M' if rank < 2 => (&mut value.month, 2),
                b'D' if rank < 3 => (&mut value.day, 3),
                _ => {
                    return Err(LexicalError::new(
                        "unexpected date designator",
                        component.offset,
                    ));
                }
            };
            *slot = sign * component.amount;
            rank = next_rank;
            any_component = true;
        }

        if scanner.eat(b'T') {
            let mut rank = 0;
            let mut any_time = false;
            while !scanner.is_at_end() {
                let component = scan_component(&mut scanner)?;
                if component.fraction.is_some() && component.designator != b'S' {
                    return Err(LexicalError::new(
                        "only seconds may have a fractional part",
                        component.offset,
                    ));
                }
                let (slot, next_rank) = match component.designator {
                    b'H' if rank < 1 => (&mut value.hour, 1),
                    b'M' if rank < 2 => (&mut value.minute, 2),
                    b'S' if rank < 3 => (&mut value.second, 3),
                    _ => {
                        return Err(LexicalError::new(
                            "unexpected time designator",
                            component.offset,
                        ));
                    }
                };
                *slot = sign * component.amount;
                if let Some(fraction) = component.fraction {
                    value.fraction = if negative { fraction.negate() } else { fraction };
                }
                rank = next_rank;
                any_time = true;
            }
            if !any_time {
                return Err(scanner.error("'T' must be followed by a time component"));
            }
            any_component = true;
        }

        if !any_component {
            return Err(scanner.error("duration needs at least one component"));
        }
        value.marker = if negative {
            Marker::Negative
        } else {
            Marker::Absent
        };
        Ok(value)
    }

    /// Always emits all seven components, e.g. `P0Y0M0DT0H0M0.0S`.
    fn format(&self, value: &TemporalValue) -> String {
        let mut buf = String::with_capacity(32);
        if value.is_negative() {
            buf.push('-');
        }
        buf.push_str(&format!(
            "P{}Y{}M{}DT{}H{}M{}.{}S",
            value.year.unsigned_abs(),
            value.month.unsigned_abs(),
            value.day.unsigned_abs(),
            value.hour.unsigned_abs(),
            value.minute.unsigned_abs(),
            value.second.unsigned_abs(),
            value.fraction.digits(),
        ));
        buf
    }

    fn compare(&self, a: &TemporalValue, b: &TemporalValue, strict: bool) -> PartialOrdering {
        compare_duration(a, b, strict)
    }

    fn is_equal(&self, a: &TemporalValue, b: &TemporalValue) -> bool {
        compare_duration(a, b, true) == PartialOrdering::Equal
    }
}
