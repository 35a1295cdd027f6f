use super::{Fields, TemporalGrammar, append_date, append_zone, finish, scan_date};
use crate::lexer::{LexicalError, Scanner};
use crate::types::TemporalValue;

const DATE_FIELDS: Fields = Fields {
    year: true,
    month: true,
    day: true,
    time: false,
};

pub(crate) struct Date;

impl TemporalGrammar for Date {
    fn name(&self) -> &'static str {
        "date"
    }

    fn parse(&self, literal: &str) -> Result<TemporalValue, LexicalError> {
        let mut scanner = Scanner::new(literal);
        let mut value = TemporalValue::pinned();
        scan_date(&mut scanner, &mut value)?;
        finish(&mut scanner, value, DATE_FIELDS)
    }

    fn format(&self, value: &TemporalValue) -> String {
        let mut buf = String::with_capacity(11);
        append_date(&mut buf, value);
        append_zone(&mut buf, value);
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::Datatype;
    use crate::types::{Marker, PartialOrdering};

    #[test]
    fn parses_date() {
        let value = Date.parse("2004-02-29Z").unwrap();
        assert_eq!((value.year, value.month, value.day), (2004, 2, 29));
        assert_eq!(value.marker, Marker::Utc);
        assert_eq!((value.hour, value.minute, value.second), (0, 0, 0));
    }

    #[test]
    fn leap_rules_apply() {
        assert!(Date.parse("2000-02-29").is_ok());
        assert!(Date.parse("1900-02-29").is_err());
        assert!(Date.parse("2001-02-29").is_err());
        assert!(Date.parse("-0004-02-29").is_ok());
    }

    #[test]
    fn offset_moves_the_date() {
        assert_eq!(Datatype::Date.validate("2000-01-01+01:00").unwrap().canonical(), "1999-12-31Z");
        assert_eq!(Datatype::Date.validate("2000-01-01-01:00").unwrap().canonical(), "2000-01-01Z");
    }

    #[test]
    fn malformed_dates() {
        for bad in ["2000-1-01", "2000-01-1", "2000/01/01", "2000-13-01", "2000-04-31", "2000-01-01T00:00:00", "2000-01-01Z ", "20000-01"] {
            assert!(Date.parse(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn dates_order_across_zones() {
        let utc = Datatype::Date.validate("2000-01-15Z").unwrap();
        let far = Datatype::Date.validate("2000-01-20").unwrap();
        let near = Datatype::Date.validate("2000-01-15").unwrap();
        assert_eq!(utc.compare(&far, true), PartialOrdering::Less);
        assert_eq!(utc.compare(&near, true), PartialOrdering::Indeterminate);
    }
}
