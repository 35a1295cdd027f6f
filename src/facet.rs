use std::fmt;

/// Constraining facets a datatype accepts. Enforcing them belongs to the
/// schema layer; datatypes only advertise which ones apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facet {
    Length,
    MinLength,
    MaxLength,
    Pattern,
    Enumeration,
    WhiteSpace,
    MaxInclusive,
    MaxExclusive,
    MinInclusive,
    MinExclusive,
}

impl Facet {
    pub fn name(self) -> &'static str {
        match self {
            Facet::Length => "length",
            Facet::MinLength => "minLength",
            Facet::MaxLength => "maxLength",
            Facet::Pattern => "pattern",
            Facet::Enumeration => "enumeration",
            Facet::WhiteSpace => "whiteSpace",
            Facet::MaxInclusive => "maxInclusive",
            Facet::MaxExclusive => "maxExclusive",
            Facet::MinInclusive => "minInclusive",
            Facet::MinExclusive => "minExclusive",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub(crate) const TEMPORAL_FACETS: &[Facet] = &[
    Facet::Pattern,
    Facet::WhiteSpace,
    Facet::Enumeration,
    Facet::MaxInclusive,
    Facet::MinInclusive,
    Facet::MaxExclusive,
    Facet::MinExclusive,
];

pub(crate) const LIST_FACETS: &[Facet] = &[
    Facet::Length,
    Facet::MinLength,
    Facet::MaxLength,
    Facet::Pattern,
    Facet::Enumeration,
    Facet::WhiteSpace,
];
