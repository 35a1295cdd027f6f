use super::{Fields, TemporalGrammar, append_year, append_zone, finish, scan_year};
use crate::lexer::{LexicalError, Scanner};
use crate::types::TemporalValue;

const YEAR_FIELDS: Fields = Fields {
    year: true,
    month: false,
    day: false,
    time: false,
};

/// `gYear`: `-?YYYY+` with an optional zone.
pub(crate) struct GYear;

impl TemporalGrammar for GYear {
    fn name(&self) -> &'static str {
        "gYear"
    }

    fn parse(&self, literal: &str) -> Result<TemporalValue, LexicalError> {
        let mut scanner = Scanner::new(literal);
        let mut value = TemporalValue::pinned();
        value.year = scan_year(&mut scanner)?;
        value.month = 1;
        value.day = 1;
        finish(&mut scanner, value, YEAR_FIELDS)
    }

    fn format(&self, value: &TemporalValue) -> String {
        let mut buf = String::with_capacity(6);
        append_year(&mut buf, value.year);
        append_zone(&mut buf, value);
        buf
    }
}
