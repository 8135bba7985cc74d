//! Initializer construction.
//!
//! Builds the brace-enclosed C++ initializer list for a `TypeDescriptor`.
//! Rules, first match wins:
//!
//! 1. Grid-shaped family: `rows` copies of the element's full value list.
//! 2. Implied-key family spelled with one parameter: rebuild as the
//!    two-parameter descriptor with the default key and recurse.
//! 3. Two parameters: key and element values zipped pairwise.
//! 4. One parameter: the element's value list.

use covgen_ir::{Arity, CoverageConfig, CoverageError, Shape, TypeDescriptor};

/// Builds initializer literals from the value catalog.
pub struct InitializerBuilder<'a> {
    config: &'a CoverageConfig,
}

impl<'a> InitializerBuilder<'a> {
    pub fn new(config: &'a CoverageConfig) -> Self {
        Self { config }
    }

    /// Initializer for `descriptor`.
    pub fn build(&self, descriptor: &TypeDescriptor) -> Result<String, CoverageError> {
        match descriptor {
            // A bare type initializes from its first literal.
            TypeDescriptor::Bare(name) => {
                let values = self.element_values(name)?;
                Ok(values[0].clone())
            }
            TypeDescriptor::Unary { container, element } => {
                let family = self.config.families.get(container)?;
                if let Shape::Grid { rows } = family.shape {
                    return self.grid(element, rows);
                }
                if let Arity::ImplicitKey { default_key } = &family.arity {
                    let keyed = TypeDescriptor::binary(
                        container.as_str(),
                        TypeDescriptor::bare(default_key.as_str()),
                        (**element).clone(),
                    );
                    return self.build(&keyed);
                }
                let values = self.element_values(&element.render())?;
                Ok(brace_list(values))
            }
            TypeDescriptor::Binary {
                container,
                key,
                element,
            } => {
                let family = self.config.families.get(container)?;
                if let Shape::Grid { rows } = family.shape {
                    return self.grid(element, rows);
                }
                let keys = self.key_values(&key.render())?;
                let values = self.element_values(&element.render())?;
                let pairs: Vec<String> = keys
                    .iter()
                    .zip(values)
                    .map(|(k, v)| format!("{{{k}, {v}}}"))
                    .collect();
                Ok(brace_list(&pairs))
            }
        }
    }

    fn grid(&self, element: &TypeDescriptor, rows: usize) -> Result<String, CoverageError> {
        let row = brace_list(self.element_values(&element.render())?);
        Ok(brace_list(&vec![row; rows]))
    }

    fn element_values(&self, name: &str) -> Result<&'a [String], CoverageError> {
        self.config.values.values_for(name)
    }

    fn key_values(&self, name: &str) -> Result<&'a [String], CoverageError> {
        self.config
            .values
            .values_for(name)
            .map_err(|_| CoverageError::unknown_key(name))
    }
}

/// `{a, b, c}`.
fn brace_list(items: &[String]) -> String {
    format!("{{{}}}", items.join(", "))
}
