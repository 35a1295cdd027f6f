use crate::lexer::LexicalError;

pub const MAX_OFFSET_HOURS: i64 = 14;
pub const MAX_OFFSET_MINUTES: i64 = MAX_OFFSET_HOURS * 60;

/// A resolved timezone suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Zone {
    Utc,
    /// Signed offset from UTC in minutes, east positive.
    Offset(i64),
}

impl Zone {
    pub fn offset_minutes(self) -> i64 {
        match self {
            Zone::Utc => 0,
            Zone::Offset(minutes) => minutes,
        }
    }
}

/// Parses `Z`, `(+|-)hh` or `(+|-)hh:mm` starting at `start`; the suffix must
/// run to the end of `bytes`.
pub fn parse_zone(bytes: &[u8], start: usize) -> Result<Zone, LexicalError> {
    let sign = match bytes.get(start) {
        Some(b'Z') => {
            if start + 1 != bytes.len() {
                return Err(LexicalError::new(
                    "unexpected characters after 'Z'",
                    start + 1,
                ));
            }
            return Ok(Zone::Utc);
        }
        Some(b'+') => 1,
        Some(b'-') => -1,
        Some(_) => return Err(LexicalError::new("invalid time zone designator", start)),
        None => return Err(LexicalError::new("missing time zone", start)),
    };

    let mut pos = start + 1;
    let hours = parse_two_digit(bytes, pos)
        .ok_or_else(|| LexicalError::new("time zone hours must be two digits", pos))?;
    pos += 2;

    let mut minutes = 0;
    if pos < bytes.len() {
        if bytes[pos] != b':' {
            return Err(LexicalError::new("expected ':' in time zone", pos));
        }
        pos += 1;
        minutes = parse_two_digit(bytes, pos)
            .ok_or_else(|| LexicalError::new("time zone minutes must be two digits", pos))?;
        pos += 2;
        if pos != bytes.len() {
            return Err(LexicalError::new("unexpected characters after time zone", pos));
        }
    }

    if hours > MAX_OFFSET_HOURS || (hours == MAX_OFFSET_HOURS && minutes != 0) {
        return Err(LexicalError::new(
            "time zone offset must be within -14:00..+14:00",
            start,
        ));
    }
    if minutes > 59 {
        return Err(LexicalError::new(
            "time zone minutes must be 0-59",
            start,
        ));
    }
    Ok(Zone::Offset(sign * (hours * 60 + minutes)))
}

fn parse_two_digit(bytes: &[u8], pos: usize) -> Option<i64> {
    if pos + 2 > bytes.len() {
        return None;
    }
    let d1 = bytes[pos].wrapping_sub(b'0');
    let d2 = bytes[pos + 1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(i64::from(d1 * 10 + d2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(s: &str) -> Result<Zone, LexicalError> {
        parse_zone(s.as_bytes(), 0)
    }

    #[test]
    fn utc_designator() {
        assert_eq!(zone("Z").unwrap(), Zone::Utc);
        assert!(zone("Zx").is_err());
        assert!(zone("z").is_err());
    }

    #[test]
    fn signed_offsets() {
        assert_eq!(zone("+05:30").unwrap(), Zone::Offset(330));
        assert_eq!(zone("-08:00").unwrap(), Zone::Offset(-480));
        assert_eq!(zone("+14:00").unwrap(), Zone::Offset(840));
        assert_eq!(zone("-00:00").unwrap(), Zone::Offset(0));
    }

    #[test]
    fn minutes_may_be_omitted() {
        assert_eq!(zone("+03").unwrap(), Zone::Offset(180));
        assert_eq!(zone("-11").unwrap().offset_minutes(), -660);
    }

    #[test]
    fn malformed_offsets_are_rejected() {
        for bad in ["+", "-", "+5", "+05:", "+05:3", "+0530", "+05:30:00", "+15:00", "+14:30", "+05:60", "X"] {
            assert!(zone(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn suffix_starts_at_offset() {
        assert_eq!(parse_zone(b"---15-05:00", 5).unwrap(), Zone::Offset(-300));
        assert_eq!(parse_zone(b"---15", 5).unwrap_err().offset, 5);
    }
}
