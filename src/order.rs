//! Order relations: field-wise comparison, point-in-time comparison across
//! timezone presence, and the duration partial order.

use tracing::trace;

use crate::calendar::{add_duration, normalize};
use crate::timezone::MAX_OFFSET_MINUTES;
use crate::types::{Marker, PartialOrdering, TemporalValue};

/// Reference date-times for the duration order. They straddle months of 28,
/// 30 and 31 days and both a leap and a common year, so that one pair of
/// durations disagreeing anywhere disagrees on at least one of them.
pub const ANCHORS: [TemporalValue; 4] = [
    TemporalValue::utc(1696, 9, 1, 0, 0, 0),
    TemporalValue::utc(1697, 2, 1, 0, 0, 0),
    TemporalValue::utc(1903, 3, 1, 0, 0, 0),
    TemporalValue::utc(1903, 7, 1, 0, 0, 0),
];

/// Lexicographic comparison of the numeric fields, most significant first.
/// The marker does not take part.
pub fn compare_order(a: &TemporalValue, b: &TemporalValue) -> PartialOrdering {
    let lhs = (a.year, a.month, a.day, a.hour, a.minute, a.second, a.fraction);
    let rhs = (b.year, b.month, b.day, b.hour, b.minute, b.second, b.fraction);
    lhs.cmp(&rhs).into()
}

/// Compares two point-in-time values.
///
/// When exactly one side carries a timezone, the other is tried at the two
/// extreme offsets (+14:00 and -14:00); only an answer that holds for both is
/// determinate.
pub fn compare_dates(a: &TemporalValue, b: &TemporalValue) -> PartialOrdering {
    if a.marker == b.marker {
        return compare_order(a, b);
    }
    if a.marker == Marker::Utc {
        let earliest = normalize(b, MAX_OFFSET_MINUTES);
        if compare_order(a, &earliest) == PartialOrdering::Less {
            return PartialOrdering::Less;
        }
        let latest = normalize(b, -MAX_OFFSET_MINUTES);
        if compare_order(a, &latest) == PartialOrdering::Greater {
            return PartialOrdering::Greater;
        }
        return PartialOrdering::Indeterminate;
    }
    if b.marker == Marker::Utc {
        return compare_dates(b, a).reverse();
    }
    PartialOrdering::Indeterminate
}

/// Compares two durations under the partial order `x <= y` iff `s + x <= s + y`
/// for every date-time `s`, approximated by the four [`ANCHORS`].
///
/// With `strict` (exclusive facets) any disagreement between anchors is
/// indeterminate; otherwise an anchor reporting equality yields to one
/// reporting a direction.
pub fn compare_duration(a: &TemporalValue, b: &TemporalValue, strict: bool) -> PartialOrdering {
    if compare_order(a, b) == PartialOrdering::Equal {
        return PartialOrdering::Equal;
    }

    let mut result = PartialOrdering::Indeterminate;
    for (i, anchor) in ANCHORS.iter().enumerate() {
        let at_anchor = compare_order(&add_duration(a, anchor), &add_duration(b, anchor));
        trace!(anchor = i, result = %at_anchor, "duration anchor comparison");
        result = if i == 0 {
            at_anchor
        } else {
            combine_results(result, at_anchor, strict)
        };
        if result == PartialOrdering::Indeterminate {
            break;
        }
    }
    result
}

/// Merges the running result with the comparison at the next anchor.
pub fn combine_results(
    current: PartialOrdering,
    next: PartialOrdering,
    strict: bool,
) -> PartialOrdering {
    if next == PartialOrdering::Indeterminate {
        return PartialOrdering::Indeterminate;
    }
    if current == next {
        return current;
    }
    if strict {
        return PartialOrdering::Indeterminate;
    }
    match (current, next) {
        (PartialOrdering::Equal, other) | (other, PartialOrdering::Equal) => other,
        _ => PartialOrdering::Indeterminate,
    }
}
