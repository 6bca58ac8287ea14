use thiserror::Error;

/// Broad category of a [`DecodeError`], without the field details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeErrorKind {
    MissingField,
    TypeMismatch,
    InvalidEnumValue,
    MalformedBody,
}

/// Errors raised while mapping an API response into posts or tags.
///
/// Field names are reported as paths relative to the response root, so a bad rating on the
/// fourth post of a list shows up as `post[3].rating`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A required field is not present in the object.
    #[error("Response is missing the required field `{field}`")]
    MissingField { field: String },

    /// The field exists but holds a JSON value of the wrong type (or out of range).
    #[error("Field `{field}` has the wrong type, expected {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },

    /// The field is a string, but not one of the values the API documents for it.
    #[error("Field `{field}` has an unrecognized value: {value:?}")]
    InvalidEnumValue { field: String, value: String },

    /// The body could not be parsed as JSON at all.
    #[error("Response body is not valid JSON: {message}")]
    MalformedBody { message: String },
}

impl From<serde_json::Error> for DecodeError {
    fn from(source: serde_json::Error) -> Self {
        Self::MalformedBody {
            message: source.to_string(),
        }
    }
}

impl DecodeError {
    #[must_use]
    pub const fn kind(&self) -> DecodeErrorKind {
        match self {
            Self::MissingField { .. } => DecodeErrorKind::MissingField,
            Self::TypeMismatch { .. } => DecodeErrorKind::TypeMismatch,
            Self::InvalidEnumValue { .. } => DecodeErrorKind::InvalidEnumValue,
            Self::MalformedBody { .. } => DecodeErrorKind::MalformedBody,
        }
    }

    /// Path of the offending field, if the error is tied to one.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field }
            | Self::TypeMismatch { field, .. }
            | Self::InvalidEnumValue { field, .. } => Some(field),
            Self::MalformedBody { .. } => None,
        }
    }

    /// Prefixes the field path with the location of the enclosing value.
    pub(crate) fn within(self, parent: &str) -> Self {
        let nest = |field: String| {
            if field.is_empty() {
                parent.to_string()
            } else {
                format!("{parent}.{field}")
            }
        };

        match self {
            Self::MissingField { field } => Self::MissingField { field: nest(field) },
            Self::TypeMismatch { field, expected } => Self::TypeMismatch {
                field: nest(field),
                expected,
            },
            Self::InvalidEnumValue { field, value } => Self::InvalidEnumValue {
                field: nest(field),
                value,
            },
            Self::MalformedBody { .. } => self,
        }
    }
}
