//! Errors raised while building catalogs or generating a program.
//!
//! Every variant is fatal: generation has no partial-output mode because the
//! downstream compiler needs a complete translation unit.

use std::fmt;
use std::path::PathBuf;

/// Which table a failed lookup was made against.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// An element (value) type.
    Element,
    /// A key or priority type of a two-parameter container.
    Key,
    /// A container family name.
    Container,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TypeKind::Element => "element type",
            TypeKind::Key => "key type",
            TypeKind::Container => "container family",
        };
        f.write_str(s)
    }
}

/// Error produced by the generator.
#[derive(Debug, thiserror::Error)]
pub enum CoverageError {
    /// A referenced type or family is absent from the static configuration.
    #[error("unknown {kind} `{name}`")]
    UnknownType { name: String, kind: TypeKind },

    /// The fixed test block could not be read.
    #[error("cannot read fixed test block `{}`: {source}", .path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A catalog entry lists fewer literals than ordering checks need.
    #[error("element type `{name}` has {count} value(s), at least {min} required", min = crate::MIN_VALUES)]
    TooFewValues { name: String, count: usize },

    /// A catalog declares the same type twice.
    #[error("type `{name}` is declared more than once")]
    DuplicateType { name: String },
}

impl CoverageError {
    /// Unknown element type.
    pub fn unknown_element(name: impl Into<String>) -> Self {
        CoverageError::UnknownType {
            name: name.into(),
            kind: TypeKind::Element,
        }
    }

    /// Unknown key type.
    pub fn unknown_key(name: impl Into<String>) -> Self {
        CoverageError::UnknownType {
            name: name.into(),
            kind: TypeKind::Key,
        }
    }

    /// Unknown container family.
    pub fn unknown_container(name: impl Into<String>) -> Self {
        CoverageError::UnknownType {
            name: name.into(),
            kind: TypeKind::Container,
        }
    }

    /// Whether this is a failed catalog or family lookup.
    pub fn is_unknown_type(&self) -> bool {
        matches!(self, CoverageError::UnknownType { .. })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn unknown_type_message_names_the_table() {
        let err = CoverageError::unknown_container("Bag");
        assert_eq!(err.to_string(), "unknown container family `Bag`");
        assert!(err.is_unknown_type());
    }

    #[test]
    fn too_few_values_reports_minimum() {
        let err = CoverageError::TooFewValues {
            name: "Thing".to_string(),
            count: 1,
        };
        assert_eq!(
            err.to_string(),
            "element type `Thing` has 1 value(s), at least 2 required"
        );
        assert!(!err.is_unknown_type());
    }

    #[test]
    fn resource_error_keeps_io_source() {
        let err = CoverageError::ResourceNotFound {
            path: PathBuf::from("fixed_tests"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("cannot read fixed test block `fixed_tests`"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
