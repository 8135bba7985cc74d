//! Value catalog: representative literals for each element type.
//!
//! Every element type maps to an ordered list of C++ literal spellings.
//! The lists hold at least [`MIN_VALUES`] entries chosen to differ in order
//! and content, so equality and ordering inside the inspected containers
//! are actually exercised.

use rustc_hash::FxHashMap;

use crate::CoverageError;

/// Minimum number of literals per element type.
pub const MIN_VALUES: usize = 2;

/// Immutable mapping from element type name to literal values.
///
/// Preserves declaration order for iteration; lookups go through an index.
#[derive(Clone, Debug, Default)]
pub struct ValueCatalog {
    entries: Vec<(String, Vec<String>)>,
    index: FxHashMap<String, usize>,
}

impl ValueCatalog {
    /// Start building a catalog.
    pub fn builder() -> ValueCatalogBuilder {
        ValueCatalogBuilder::default()
    }

    /// Literal values for `type_name`, in declared order.
    pub fn values_for(&self, type_name: &str) -> Result<&[String], CoverageError> {
        self.index
            .get(type_name)
            .map(|&i| self.entries[i].1.as_slice())
            .ok_or_else(|| CoverageError::unknown_element(type_name))
    }

    /// Whether `type_name` has an entry.
    pub fn contains(&self, type_name: &str) -> bool {
        self.index.contains_key(type_name)
    }

    /// Type names in declared order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder for [`ValueCatalog`].
///
/// Entries are validated in [`build`](Self::build); the first offending
/// entry wins.
#[derive(Debug, Default)]
pub struct ValueCatalogBuilder {
    entries: Vec<(String, Vec<String>)>,
}

impl ValueCatalogBuilder {
    /// Add an element type with its literals.
    #[must_use]
    pub fn entry<I, S>(mut self, type_name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.push((
            type_name.into(),
            values.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Validate and freeze the catalog.
    pub fn build(self) -> Result<ValueCatalog, CoverageError> {
        let mut index = FxHashMap::default();
        for (i, (name, values)) in self.entries.iter().enumerate() {
            if values.len() < MIN_VALUES {
                return Err(CoverageError::TooFewValues {
                    name: name.clone(),
                    count: values.len(),
                });
            }
            if index.insert(name.clone(), i).is_some() {
                return Err(CoverageError::DuplicateType { name: name.clone() });
            }
        }
        Ok(ValueCatalog {
            entries: self.entries,
            index,
        })
    }
}
