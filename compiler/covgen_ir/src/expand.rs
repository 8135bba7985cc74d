//! Container expansion.
//!
//! Turns a family name into every `TypeDescriptor` it must be exercised
//! with. Order follows the configured type lists so generated output diffs
//! cleanly between runs.

use tracing::debug;

use crate::{CoverageConfig, CoverageError, FamilyGroup, TypeDescriptor};

/// Expands families over the configured element and key types.
pub struct ContainerExpander<'a> {
    config: &'a CoverageConfig,
}

impl<'a> ContainerExpander<'a> {
    pub fn new(config: &'a CoverageConfig) -> Self {
        Self { config }
    }

    /// All descriptors for one family.
    ///
    /// Keyed families produce the element-major cross product of element
    /// types and key types; every other family produces one descriptor per
    /// element type.
    pub fn expand(&self, container: &str) -> Result<Vec<TypeDescriptor>, CoverageError> {
        let family = self.config.families.get(container)?;
        let elements = &self.config.element_types;

        let descriptors: Vec<_> = if family.is_keyed() {
            let keys = &self.config.key_types;
            elements
                .iter()
                .flat_map(move |element| {
                    keys.iter().map(move |key| {
                        TypeDescriptor::binary(
                            family.name.as_str(),
                            TypeDescriptor::bare(key.as_str()),
                            TypeDescriptor::bare(element.as_str()),
                        )
                    })
                })
                .collect()
        } else {
            elements
                .iter()
                .map(|element| {
                    TypeDescriptor::unary(family.name.as_str(), TypeDescriptor::bare(element.as_str()))
                })
                .collect()
        };

        debug!(container, count = descriptors.len(), "expanded family");
        Ok(descriptors)
    }

    /// Descriptors of every family in `group`, families in table order.
    pub fn expand_group(&self, group: FamilyGroup) -> Result<Vec<TypeDescriptor>, CoverageError> {
        let mut out = Vec::new();
        for family in self.config.families.in_group(group) {
            out.extend(self.expand(&family.name)?);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests;
