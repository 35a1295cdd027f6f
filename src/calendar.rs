//! Proleptic Gregorian arithmetic shared by every datatype: month lengths,
//! offset normalization and duration addition.

use crate::numeric::{fquotient, fquotient_range, modulo, modulo_range};
use crate::types::{Marker, TemporalValue};

const DAYS_PER_400_YEARS: i64 = 146_097;

pub fn is_leap_year(year: i64) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Length of `month` in `year`; months outside `1..=12` wrap into the
/// neighbouring years.
pub fn days_in_month(year: i64, month: i64) -> i64 {
    let year = year + fquotient_range(month, 1, 13);
    match modulo_range(month, 1, 13) {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

fn shift_month(year: i64, month: i64, delta: i64) -> (i64, i64) {
    let temp = month + delta;
    (year + fquotient_range(temp, 1, 13), modulo_range(temp, 1, 13))
}

/// Brings `day` into the bounds of its month, carrying into month and year.
/// `month` must already be in `1..=12`.
pub fn carry_days(year: i64, month: i64, day: i64) -> (i64, i64, i64) {
    // Every 400-year span holds the same number of days, so whole cycles can
    // move straight into the year before stepping month by month.
    let cycles = day / DAYS_PER_400_YEARS;
    let mut year = year + cycles * 400;
    let mut month = month;
    let mut day = day - cycles * DAYS_PER_400_YEARS;

    loop {
        let carry = if day < 1 {
            let (prev_year, prev_month) = shift_month(year, month, -1);
            day += days_in_month(prev_year, prev_month);
            -1
        } else if day > days_in_month(year, month) {
            day -= days_in_month(year, month);
            1
        } else {
            break;
        };
        (year, month) = shift_month(year, month, carry);
    }
    (year, month, day)
}

/// Folds a UTC offset into the value and marks it UTC.
///
/// The offset is subtracted from the time of day and the borrow or carry is
/// propagated minute → hour → day → month → year.
pub fn normalize(value: &TemporalValue, offset_minutes: i64) -> TemporalValue {
    let mut out = *value;

    let temp = value.minute - offset_minutes;
    let carry = fquotient(temp, 60);
    out.minute = modulo(temp, 60);

    let temp = value.hour + carry;
    let carry = fquotient(temp, 24);
    out.hour = modulo(temp, 24);

    (out.year, out.month, out.day) = carry_days(value.year, value.month, value.day + carry);
    out.marker = Marker::Utc;
    out
}

/// Adds a duration to a resolved date-time, yielding a UTC date-time.
pub fn add_duration(duration: &TemporalValue, anchor: &TemporalValue) -> TemporalValue {
    let temp = anchor.month + duration.month;
    let month = modulo_range(temp, 1, 13);
    let year = anchor.year + duration.year + fquotient_range(temp, 1, 13);

    let (carry, fraction) = anchor.fraction.add(duration.fraction);

    let temp = anchor.second + duration.second + carry;
    let carry = fquotient(temp, 60);
    let second = modulo(temp, 60);

    let temp = anchor.minute + duration.minute + carry;
    let carry = fquotient(temp, 60);
    let minute = modulo(temp, 60);

    let temp = anchor.hour + duration.hour + carry;
    let carry = fquotient(temp, 24);
    let hour = modulo(temp, 24);

    let (year, month, day) = carry_days(year, month, anchor.day + duration.day + carry);

    TemporalValue {
        year,
        month,
        day,
        hour,
        minute,
        second,
        fraction,
        marker: Marker::Utc,
    }
}
