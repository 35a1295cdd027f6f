//! Validation, canonicalization and ordering of the XML Schema date/time
//! datatypes (`dateTime`, `time`, `date`, the `g*` partial types and
//! `duration`), plus lists of them.
//!
//! ```
//! use xsdt::{Datatype, PartialOrdering};
//!
//! let a = Datatype::DateTime.validate("2002-10-10T12:00:00-05:00").unwrap();
//! let b = Datatype::DateTime.validate("2002-10-10T17:00:00Z").unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.canonical(), "2002-10-10T17:00:00Z");
//!
//! let month = Datatype::Duration.validate("P1M").unwrap();
//! let days = Datatype::Duration.validate("P30D").unwrap();
//! assert_eq!(month.compare(&days, false), PartialOrdering::Indeterminate);
//! ```

pub mod calendar;
pub mod datatypes;
pub mod error;
pub mod facet;
pub mod lexer;
pub mod list;
pub mod numeric;
pub mod order;
pub mod timezone;
pub mod types;

pub use datatypes::{Datatype, DateTimeData, TemporalGrammar};
pub use error::{InvalidValueError, UnknownDatatype};
pub use facet::Facet;
pub use list::{ListData, ListDatatype};
pub use types::{Fraction, Marker, PartialOrdering, TemporalValue};
