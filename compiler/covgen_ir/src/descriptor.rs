//! Generated type descriptors.
//!
//! A `TypeDescriptor` names one concrete instantiation: a bare element
//! type, a one-parameter container of an element, or a two-parameter
//! container of a key and an element. Key and element are descriptors
//! themselves, so nested instantiations compose.
//!
//! Identity is the rendered C++ type expression: two descriptors are equal
//! exactly when `render()` produces the same text.

use std::fmt;
use std::hash::{Hash, Hasher};

/// One generated type instantiation.
#[derive(Clone, Debug)]
pub enum TypeDescriptor {
    /// Element type on its own, e.g. `int`.
    Bare(String),
    /// `Container<Element>`.
    Unary {
        container: String,
        element: Box<TypeDescriptor>,
    },
    /// `Container<Key, Element>`.
    Binary {
        container: String,
        key: Box<TypeDescriptor>,
        element: Box<TypeDescriptor>,
    },
}

impl TypeDescriptor {
    pub fn bare(name: impl Into<String>) -> Self {
        TypeDescriptor::Bare(name.into())
    }

    pub fn unary(container: impl Into<String>, element: TypeDescriptor) -> Self {
        TypeDescriptor::Unary {
            container: container.into(),
            element: Box::new(element),
        }
    }

    pub fn binary(
        container: impl Into<String>,
        key: TypeDescriptor,
        element: TypeDescriptor,
    ) -> Self {
        TypeDescriptor::Binary {
            container: container.into(),
            key: Box::new(key),
            element: Box::new(element),
        }
    }

    /// Enclosing container, if any.
    pub fn container(&self) -> Option<&str> {
        match self {
            TypeDescriptor::Bare(_) => None,
            TypeDescriptor::Unary { container, .. } | TypeDescriptor::Binary { container, .. } => {
                Some(container.as_str())
            }
        }
    }

    /// Innermost value type; a bare descriptor is its own element.
    pub fn element(&self) -> &TypeDescriptor {
        match self {
            TypeDescriptor::Bare(_) => self,
            TypeDescriptor::Unary { element, .. } | TypeDescriptor::Binary { element, .. } => {
                element.as_ref()
            }
        }
    }

    /// Key type of a two-parameter instantiation.
    pub fn key(&self) -> Option<&TypeDescriptor> {
        match self {
            TypeDescriptor::Binary { key, .. } => Some(key.as_ref()),
            _ => None,
        }
    }

    /// Variable name: `container[_key]_element`, lowercased.
    ///
    /// Unique per descriptor as long as container and type names in the
    /// catalog are distinct and contain no underscores.
    pub fn name(&self) -> String {
        let mut out = String::new();
        self.push_name(&mut out);
        out.to_lowercase()
    }

    fn push_name(&self, out: &mut String) {
        match self {
            TypeDescriptor::Bare(name) => out.push_str(name),
            TypeDescriptor::Unary { container, element } => {
                out.push_str(container);
                out.push('_');
                element.push_name(out);
            }
            TypeDescriptor::Binary {
                container,
                key,
                element,
            } => {
                out.push_str(container);
                out.push('_');
                key.push_name(out);
                out.push('_');
                element.push_name(out);
            }
        }
    }

    /// Canonical C++ type expression.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Bare(name) => f.write_str(name),
            TypeDescriptor::Unary { container, element } => write!(f, "{container}<{element}>"),
            TypeDescriptor::Binary {
                container,
                key,
                element,
            } => write!(f, "{container}<{key}, {element}>"),
        }
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.render() == other.render()
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.render().hash(state);
    }
}
