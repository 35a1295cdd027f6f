use thiserror::Error;

/// A literal rejected by a datatype. Carries only the literal and the
/// datatype name; the internal reason is logged, not exposed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("cvc-datatype-valid.1.2.1: '{literal}' is not a valid value for '{datatype}'")]
pub struct InvalidValueError {
    pub literal: String,
    pub datatype: String,
}

impl InvalidValueError {
    pub fn new(literal: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
            datatype: datatype.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown datatype '{0}'")]
pub struct UnknownDatatype(pub String);
