use super::{Fields, TemporalGrammar, append_date, append_time, append_zone, finish, scan_date, scan_time};
use crate::lexer::{LexicalError, Scanner};
use crate::types::TemporalValue;

/// `dateTime`: `date 'T' time` with an optional zone.
pub(crate) struct DateTime;

impl TemporalGrammar for DateTime {
    fn name(&self) -> &'static str {
        "dateTime"
    }

    fn parse(&self, literal: &str) -> Result<TemporalValue, LexicalError> {
        let mut scanner = Scanner::new(literal);
        let mut value = TemporalValue::default();
        scan_date(&mut scanner, &mut value)?;
        scanner.expect(b'T', "expected 'T' between the date and the time")?;
        scan_time(&mut scanner, &mut value)?;
        finish(&mut scanner, value, Fields::ALL)
    }

    fn format(&self, value: &TemporalValue) -> String {
        let mut buf = String::with_capacity(32);
        append_date(&mut buf, value);
        buf.push('T');
        append_time(&mut buf, value);
        append_zone(&mut buf, value);
        buf
    }
}
