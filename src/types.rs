use std::cmp::Ordering;
use std::fmt;

// Placeholders for the fields a partial datatype does not carry. 2000 is a
// leap year so that --02-29 stays valid.
pub const PINNED_YEAR: i64 = 2000;
pub const PINNED_MONTH: i64 = 1;
pub const PINNED_DAY: i64 = 15;

pub(crate) const MAX_FRACTION_DIGITS: usize = 18;

/// Timezone state of a value, or the polarity of a duration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Marker {
    #[default]
    Absent,
    Utc,
    Negative,
}

/// Fractional part of a second: `numerator / 10^scale`.
///
/// Trailing zeros are stripped on construction, so `.5` and `.50` share one
/// representation and derived equality agrees with numeric equality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: i64,
    scale: u8,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction {
        numerator: 0,
        scale: 0,
    };

    pub(crate) fn new(mut numerator: i64, mut scale: u8) -> Self {
        if numerator == 0 {
            return Self::ZERO;
        }
        while scale > 0 && numerator % 10 == 0 {
            numerator /= 10;
            scale -= 1;
        }
        Self { numerator, scale }
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn scale(&self) -> u8 {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    pub(crate) fn negate(self) -> Self {
        Self {
            numerator: -self.numerator,
            scale: self.scale,
        }
    }

    /// Adds two fractions, returning the whole seconds carried out and a
    /// remainder in `[0, 1)`.
    pub(crate) fn add(self, other: Fraction) -> (i64, Fraction) {
        let scale = self.scale.max(other.scale);
        let unit = pow10(scale);
        let sum = self.aligned(scale) + other.aligned(scale);
        let carry = sum.div_euclid(unit);
        let rest = sum.rem_euclid(unit);
        // |sum| < 2 * 10^18, so both parts fit back into i64
        (carry as i64, Fraction::new(rest as i64, scale))
    }

    fn aligned(&self, scale: u8) -> i128 {
        self.numerator as i128 * pow10(scale - self.scale)
    }

    /// Digits of the magnitude, left-padded to the scale; `"0"` when zero.
    pub fn digits(&self) -> String {
        if self.scale == 0 {
            return "0".to_string();
        }
        format!(
            "{:0width$}",
            self.numerator.unsigned_abs(),
            width = self.scale as usize
        )
    }
}

fn pow10(exp: u8) -> i128 {
    10i128.pow(exp as u32)
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let scale = self.scale.max(other.scale);
        self.aligned(scale).cmp(&other.aligned(scale))
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Fixed-shape representation shared by every temporal datatype.
///
/// Point-in-time values hold proleptic Gregorian fields; partial datatypes
/// pin the fields they do not carry to [`PINNED_YEAR`], [`PINNED_MONTH`] and
/// [`PINNED_DAY`]. Durations keep their components unnormalized, all sharing
/// one sign.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TemporalValue {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
    pub fraction: Fraction,
    pub marker: Marker,
}

impl TemporalValue {
    pub const fn date_time(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            fraction: Fraction::ZERO,
            marker: Marker::Absent,
        }
    }

    pub const fn utc(year: i64, month: i64, day: i64, hour: i64, minute: i64, second: i64) -> Self {
        let mut value = Self::date_time(year, month, day, hour, minute, second);
        value.marker = Marker::Utc;
        value
    }

    pub(crate) const fn pinned() -> Self {
        Self::date_time(PINNED_YEAR, PINNED_MONTH, PINNED_DAY, 0, 0, 0)
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn is_negative(&self) -> bool {
        self.marker == Marker::Negative
    }
}

/// Outcome of an order comparison between two temporal values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PartialOrdering {
    Less,
    Equal,
    Greater,
    Indeterminate,
}

impl PartialOrdering {
    pub fn is_determinate(self) -> bool {
        self != PartialOrdering::Indeterminate
    }

    pub fn to_ordering(self) -> Option<Ordering> {
        match self {
            PartialOrdering::Less => Some(Ordering::Less),
            PartialOrdering::Equal => Some(Ordering::Equal),
            PartialOrdering::Greater => Some(Ordering::Greater),
            PartialOrdering::Indeterminate => None,
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            PartialOrdering::Less => PartialOrdering::Greater,
            PartialOrdering::Greater => PartialOrdering::Less,
            other => other,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            PartialOrdering::Less => "<",
            PartialOrdering::Equal => "=",
            PartialOrdering::Greater => ">",
            PartialOrdering::Indeterminate => "<>",
        }
    }
}

impl From<Ordering> for PartialOrdering {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => PartialOrdering::Less,
            Ordering::Equal => PartialOrdering::Equal,
            Ordering::Greater => PartialOrdering::Greater,
        }
    }
}

impl fmt::Display for PartialOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
