use super::{Fields, TemporalGrammar, append_two, append_zone, finish, scan_day, scan_month};
use crate::lexer::{LexicalError, Scanner};
use crate::types::TemporalValue;

const MONTH_DAY_FIELDS: Fields = Fields {
    year: false,
    month: true,
    day: true,
    time: false,
};

/// `gMonthDay`: `--MM-DD` with an optional zone. Checked against the pinned
/// leap year, so `--02-29` is accepted.
pub(crate) struct GMonthDay;

impl TemporalGrammar for GMonthDay {
    fn name(&self) -> &'static str {
        "gMonthDay"
    }

    fn parse(&self, literal: &str) -> Result<TemporalValue, LexicalError> {
        let mut scanner = Scanner::new(literal);
        scanner.expect_str("--", "gMonthDay must start with '--'")?;
        let mut value = TemporalValue::pinned();
        value.month = scan_month(&mut scanner)?;
        scanner.expect(b'-', "expected '-' after the month")?;
        value.day = scan_day(&mut scanner)?;
        finish(&mut scanner, value, MONTH_DAY_FIELDS)
    }

    fn format(&self, value: &TemporalValue) -> String {
        let mut buf = String::with_capacity(8);
        buf.push_str("--");
        append_two(&mut buf, value.month);
        buf.push('-');
        append_two(&mut buf, value.day);
        append_zone(&mut buf, value);
        buf
    }
}
