//! Whitespace-separated lists of temporal values.

use std::fmt;
use std::sync::OnceLock;

use tracing::debug;

use crate::datatypes::{Datatype, DateTimeData};
use crate::error::InvalidValueError;
use crate::facet::{Facet, LIST_FACETS};

/// An ordered sequence of validated items. The canonical form is built on
/// first request and reused afterwards.
#[derive(Debug, Default)]
pub struct ListData<T> {
    items: Vec<T>,
    canonical: OnceLock<String>,
}

impl<T> ListData<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            canonical: OnceLock::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `None` past the end.
    pub fn item(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T: fmt::Display> ListData<T> {
    /// Items' canonical forms joined by single spaces; empty for an empty list.
    pub fn canonical(&self) -> &str {
        self.canonical.get_or_init(|| {
            let mut buf = String::new();
            for (i, item) in self.items.iter().enumerate() {
                if i > 0 {
                    buf.push(' ');
                }
                buf.push_str(&item.to_string());
            }
            buf
        })
    }
}

impl<T: Clone> Clone for ListData<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            canonical: self.canonical.clone(),
        }
    }
}

/// Element-wise, order-sensitive.
impl<T: PartialEq> PartialEq for ListData<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: fmt::Display> fmt::Display for ListData<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}

impl<T> From<Vec<T>> for ListData<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for ListData<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a ListData<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn is_list_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// A list datatype whose items are one temporal datatype.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListDatatype {
    item: Datatype,
}

impl ListDatatype {
    pub fn new(item: Datatype) -> Self {
        Self { item }
    }

    pub fn item(&self) -> Datatype {
        self.item
    }

    pub fn facets(&self) -> &'static [Facet] {
        LIST_FACETS
    }

    /// Splits on XML whitespace and validates every item. The first invalid
    /// item's error is returned as is.
    pub fn validate(&self, literal: &str) -> Result<ListData<DateTimeData>, InvalidValueError> {
        let items = literal
            .split(is_list_separator)
            .filter(|token| !token.is_empty())
            .map(|token| self.item.validate(token))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(item = self.item.name(), count = items.len(), "validated list");
        Ok(ListData::new(items))
    }

    /// Number of items, the quantity measured by the length facets.
    pub fn length(&self, value: &ListData<DateTimeData>) -> usize {
        value.len()
    }
}

impl fmt::Display for ListDatatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "list of {}", self.item)
    }
}
