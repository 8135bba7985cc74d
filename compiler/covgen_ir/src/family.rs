//! Container families and their static classification.
//!
//! Each family names one C++ container template and records how it is
//! parameterized (`Arity`) and how its initializer is shaped (`Shape`).
//! Behavior keys off these attributes, never off the template's spelling.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::CoverageError;

/// Group of families emitted together into one generated function.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FamilyGroup {
    /// Sequential, single type parameter.
    Linear,
    /// Unordered, hash-keyed.
    Hash,
    /// Sorted, order-keyed.
    Tree,
    /// Everything else (priority queues).
    Other,
}

impl FamilyGroup {
    /// Groups in emission order.
    pub const ALL: [FamilyGroup; 4] = [
        FamilyGroup::Linear,
        FamilyGroup::Hash,
        FamilyGroup::Tree,
        FamilyGroup::Other,
    ];

    /// Suffix used for the group's generated function name.
    pub fn as_str(self) -> &'static str {
        match self {
            FamilyGroup::Linear => "linear",
            FamilyGroup::Hash => "hash",
            FamilyGroup::Tree => "tree",
            FamilyGroup::Other => "other",
        }
    }
}

impl fmt::Display for FamilyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a family is parameterized.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Arity {
    /// `Container<Element>`.
    Unary,
    /// `Container<Key, Element>`, expanded over every key type.
    Binary,
    /// Spelled `Container<Element>`, but its initializer carries an implied
    /// key of `default_key` (a priority queue's priority).
    ImplicitKey { default_key: String },
}

/// Initializer shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A flat list of values or pairs.
    Flat,
    /// Fixed row count, each row holding the full value list.
    Grid { rows: usize },
}

/// One container template.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContainerFamily {
    pub name: String,
    pub group: FamilyGroup,
    pub arity: Arity,
    pub shape: Shape,
}

impl ContainerFamily {
    /// A flat one-parameter family.
    pub fn unary(name: impl Into<String>, group: FamilyGroup) -> Self {
        Self {
            name: name.into(),
            group,
            arity: Arity::Unary,
            shape: Shape::Flat,
        }
    }

    /// A flat key/element family.
    pub fn binary(name: impl Into<String>, group: FamilyGroup) -> Self {
        Self {
            name: name.into(),
            group,
            arity: Arity::Binary,
            shape: Shape::Flat,
        }
    }

    /// A flat family whose key is implied by `default_key`.
    pub fn implicit_key(
        name: impl Into<String>,
        group: FamilyGroup,
        default_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            group,
            arity: Arity::ImplicitKey {
                default_key: default_key.into(),
            },
            shape: Shape::Flat,
        }
    }

    /// Replace the shape.
    #[must_use]
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// Whether expansion pairs every element with every key type.
    pub fn is_keyed(&self) -> bool {
        matches!(self.arity, Arity::Binary)
    }

    /// Header stem for the family's include directive.
    pub fn header_stem(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Ordered, immutable set of container families.
#[derive(Clone, Debug, Default)]
pub struct FamilyTable {
    families: Vec<ContainerFamily>,
    by_name: FxHashMap<String, usize>,
}

impl FamilyTable {
    /// Build a table, rejecting duplicate names.
    pub fn new(families: Vec<ContainerFamily>) -> Result<Self, CoverageError> {
        let mut by_name = FxHashMap::default();
        for (i, family) in families.iter().enumerate() {
            if by_name.insert(family.name.clone(), i).is_some() {
                return Err(CoverageError::DuplicateType {
                    name: family.name.clone(),
                });
            }
        }
        Ok(Self { families, by_name })
    }

    /// Look up a family by template name.
    pub fn get(&self, name: &str) -> Result<&ContainerFamily, CoverageError> {
        self.by_name
            .get(name)
            .map(|&i| &self.families[i])
            .ok_or_else(|| CoverageError::unknown_container(name))
    }

    /// All families in declared order.
    pub fn iter(&self) -> impl Iterator<Item = &ContainerFamily> {
        self.families.iter()
    }

    /// Families of one group, in declared order.
    pub fn in_group(&self, group: FamilyGroup) -> impl Iterator<Item = &ContainerFamily> {
        self.families.iter().filter(move |f| f.group == group)
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}
