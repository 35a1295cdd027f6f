use super::{Fields, TemporalGrammar, append_two, append_zone, resolve};
use crate::lexer::{LexicalError, Scanner};
use crate::types::TemporalValue;

const DAY_PARSING: &str = "error in day parsing";

const DAY_FIELDS: Fields = Fields {
    year: false,
    month: false,
    day: true,
    time: false,
};

/// `gDay`: `---DD` with an optional zone.
pub(crate) struct GDay;

impl TemporalGrammar for GDay {
    fn name(&self) -> &'static str {
        "gDay"
    }

    fn parse(&self, literal: &str) -> Result<TemporalValue, LexicalError> {
        let mut scanner = Scanner::new(literal);
        scanner.expect_str("---", DAY_PARSING)?;
        let mut value = TemporalValue::pinned();
        value.day = scanner.fixed_digits(2, DAY_PARSING)?;
        let zone = scanner
            .zone_suffix()
            .map_err(|err| LexicalError::new(DAY_PARSING, err.offset))?;
        resolve(&scanner, value, zone, DAY_FIELDS)
    }

    fn format(&self, value: &TemporalValue) -> String {
        let mut buf = String::with_capacity(6);
        buf.push_str("---");
        append_two(&mut buf, value.day);
        append_zone(&mut buf, value);
        buf
    }
}
