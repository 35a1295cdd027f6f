use super::{Fields, TemporalGrammar, append_two, append_year, append_zone, finish, scan_month, scan_year};
use crate::lexer::{LexicalError, Scanner};
use crate::types::TemporalValue;

const YEAR_MONTH_FIELDS: Fields = Fields {
    year: true,
    month: true,
    day: false,
    time: false,
};

/// `gYearMonth`: `-?YYYY+-MM` with an optional zone.
pub(crate) struct GYearMonth;

impl TemporalGrammar for GYearMonth {
    fn name(&self) -> &'static str {
        "gYearMonth"
    }

    fn parse(&self, literal: &str) -> Result<TemporalValue, LexicalError> {
        let mut scanner = Scanner::new(literal);
        let mut value = TemporalValue::pinned();
        value.year = scan_year(&mut scanner)?;
        scanner.expect(b'-', "expected '-' after the year")?;
        value.month = scan_month(&mut scanner)?;
        value.day = 1;
        finish(&mut scanner, value, YEAR_MONTH_FIELDS)
    }

    fn format(&self, value: &TemporalValue) -> String {
        let mut buf = String::with_capacity(9);
        append_year(&mut buf, value.year);
        buf.push('-');
        append_two(&mut buf, value.month);
        append_zone(&mut buf, value);
        buf
    }
}
