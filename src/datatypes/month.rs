use super::{Fields, TemporalGrammar, append_two, append_zone, finish, scan_month};
use crate::lexer::{LexicalError, Scanner};
use crate::types::TemporalValue;

const MONTH_FIELDS: Fields = Fields {
    year: false,
    month: true,
    day: false,
    time: false,
};

/// `gMonth`: `--MM` with an optional zone.
pub(crate) struct GMonth;

impl TemporalGrammar for GMonth {
    fn name(&self) -> &'static str {
        "gMonth"
    }

    fn parse(&self, literal: &str) -> Result<TemporalValue, LexicalError> {
        let mut scanner = Scanner::new(literal);
        scanner.expect_str("--", "gMonth must start with '--'")?;
        let mut value = TemporalValue::pinned();
        value.month = scan_month(&mut scanner)?;
        finish(&mut scanner, value, MONTH_FIELDS)
    }

    fn format(&self, value: &TemporalValue) -> String {
        let mut buf = String::with_capacity(5);
        buf.push_str("--");
        append_two(&mut buf, value.month);
        append_zone(&mut buf, value);
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::Datatype;
    use crate::types::{PINNED_DAY, PINNED_YEAR, PartialOrdering};

    #[test]
    fn parses_month() {
        let value = GMonth.parse("--05").unwrap();
        assert_eq!(value.month, 5);
        assert_eq!(value.year, PINNED_YEAR);
        assert_eq!(value.day, PINNED_DAY);
    }

    #[test]
    fn offsets_can_cross_a_month_boundary() {
        assert_eq!(Datatype::GMonth.validate("--12Z").unwrap().canonical(), "--12Z");
        assert_eq!(Datatype::GMonth.validate("--05-05:00").unwrap().canonical(), "--05Z");
    }

    #[test]
    fn malformed_months() {
        for bad in ["--5", "--13", "--00", "-05", "---05", "--05--", "--05-", "--05Z ", "05"] {
            assert!(GMonth.parse(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn months_order_chronologically() {
        let may = Datatype::GMonth.validate("--05").unwrap();
        let june = Datatype::GMonth.validate("--06").unwrap();
        assert_eq!(may.compare(&june, true), PartialOrdering::Less);
        assert_eq!(may.compare(&may, true), PartialOrdering::Equal);
    }
}
