use super::{Fields, TemporalGrammar, append_time, append_zone, finish, scan_time};
use crate::lexer::{LexicalError, Scanner};
use crate::types::TemporalValue;

const TIME_FIELDS: Fields = Fields {
    year: false,
    month: false,
    day: false,
    time: true,
};

/// `time`: `hh:mm:ss(.s+)?` on the pinned date. An offset that crosses
/// midnight wraps the clock and leaves the date pinned.
pub(crate) struct Time;

impl TemporalGrammar for Time {
    fn name(&self) -> &'static str {
        "time"
    }

    fn parse(&self, literal: &str) -> Result<TemporalValue, LexicalError> {
        let mut scanner = Scanner::new(literal);
        let mut value = TemporalValue::pinned();
        scan_time(&mut scanner, &mut value)?;
        finish(&mut scanner, value, TIME_FIELDS)
    }

    fn format(&self, value: &TemporalValue) -> String {
        let mut buf = String::with_capacity(16);
        append_time(&mut buf, value);
        append_zone(&mut buf, value);
        buf
    }
}
