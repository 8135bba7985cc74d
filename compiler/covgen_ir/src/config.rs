//! Generator configuration.
//!
//! `CoverageConfig` bundles the immutable tables every stage reads: the
//! family table, the element and key type lists, and the value catalog.
//! It is built once at startup and passed by reference.

use crate::{ContainerFamily, CoverageError, FamilyGroup, FamilyTable, Shape, ValueCatalog};

/// Rows in a generated `Grid` initializer.
const GRID_ROWS: usize = 3;

/// Long enough to defeat small-string storage in the inspected `string`.
const LONG_STRING: &str = "abcdefghjiklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ\
                           abcdefghjiklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Immutable configuration for one generation run.
#[derive(Clone, Debug)]
pub struct CoverageConfig {
    /// Container families, in include and emission order.
    pub families: FamilyTable,
    /// Element types, in expansion order.
    pub element_types: Vec<String>,
    /// Key types for keyed families, in expansion order.
    pub key_types: Vec<String>,
    /// Literal values per type.
    pub values: ValueCatalog,
    /// Header stem of the support library's infrastructure include.
    pub infrastructure_header: String,
    /// Prefix of each group function, e.g. `stanford` for `stanford_linear`.
    pub group_prefix: String,
}

impl CoverageConfig {
    /// Configuration with the key type list equal to the element list.
    pub fn new(
        families: FamilyTable,
        element_types: Vec<String>,
        values: ValueCatalog,
    ) -> Self {
        Self {
            families,
            key_types: element_types.clone(),
            element_types,
            values,
            infrastructure_header: "bits".to_string(),
            group_prefix: "stanford".to_string(),
        }
    }

    /// Replace the key type list.
    #[must_use]
    pub fn with_key_types(mut self, key_types: Vec<String>) -> Self {
        self.key_types = key_types;
        self
    }

    /// Name of the generated function for `group`.
    pub fn group_function(&self, group: FamilyGroup) -> String {
        format!("{}_{}", self.group_prefix, group.as_str())
    }

    /// The Stanford C++ library collections and element types.
    pub fn stanford() -> Result<Self, CoverageError> {
        use FamilyGroup::{Hash, Linear, Other, Tree};

        let families = FamilyTable::new(vec![
            ContainerFamily::unary("Deque", Linear),
            ContainerFamily::unary("Grid", Linear).with_shape(Shape::Grid { rows: GRID_ROWS }),
            ContainerFamily::unary("Queue", Linear),
            ContainerFamily::unary("Stack", Linear),
            ContainerFamily::unary("Vector", Linear),
            ContainerFamily::binary("HashMap", Hash),
            ContainerFamily::unary("HashSet", Hash),
            ContainerFamily::binary("Map", Tree),
            ContainerFamily::unary("Set", Tree),
            ContainerFamily::implicit_key("PriorityQueue", Other, "int"),
        ])?;

        let values = ValueCatalog::builder()
            .entry("bool", ["false", "true"])
            .entry("char", ["'b'", "'B'"])
            .entry("double", ["3.14159", "-0.25"])
            .entry("int", ["106", "1891"])
            .entry("string", [quoted("stanford"), quoted(LONG_STRING)])
            .entry("GridLocation", ["{3, 14}", "{0, 7}"])
            .entry("Thing", [thing_literal("purple"), thing_literal("green")])
            .build()?;

        let element_types = values.types().map(str::to_string).collect();
        Ok(Self::new(families, element_types, values))
    }
}

fn quoted(s: &str) -> String {
    format!("\"{s}\"")
}

/// A `Thing` compound literal whose number is its label's length.
fn thing_literal(label: &str) -> String {
    format!("(Thing){{{}, \"{label}\"}}", label.len())
}

#[cfg(test)]
mod tests;
