use pretty_assertions::assert_eq;

use super::*;
use crate::Arity;

#[test]
fn stanford_families_in_order() -> Result<(), CoverageError> {
    let config = CoverageConfig::stanford()?;
    let names: Vec<_> = config.families.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Deque",
            "Grid",
            "Queue",
            "Stack",
            "Vector",
            "HashMap",
            "HashSet",
            "Map",
            "Set",
            "PriorityQueue"
        ]
    );
    assert_eq!(config.families.get("Grid")?.shape, Shape::Grid { rows: 3 });
    assert_eq!(
        config.families.get("PriorityQueue")?.arity,
        Arity::ImplicitKey {
            default_key: "int".to_string()
        }
    );
    Ok(())
}

#[test]
fn stanford_key_types_equal_element_types() -> Result<(), CoverageError> {
    let config = CoverageConfig::stanford()?;
    assert_eq!(
        config.element_types,
        ["bool", "char", "double", "int", "string", "GridLocation", "Thing"]
    );
    assert_eq!(config.key_types, config.element_types);
    Ok(())
}

#[test]
fn thing_literal_counts_label() -> Result<(), CoverageError> {
    let config = CoverageConfig::stanford()?;
    assert_eq!(
        config.values.values_for("Thing")?,
        ["(Thing){6, \"purple\"}", "(Thing){5, \"green\"}"]
    );
    Ok(())
}

#[test]
fn long_string_is_one_literal() -> Result<(), CoverageError> {
    let config = CoverageConfig::stanford()?;
    let strings = config.values.values_for("string")?;
    assert_eq!(strings[0], "\"stanford\"");
    assert_eq!(strings[1].len(), 2 + 2 * 52);
    assert!(!strings[1].contains(' '));
    Ok(())
}

#[test]
fn group_function_names() -> Result<(), CoverageError> {
    let config = CoverageConfig::stanford()?;
    assert_eq!(config.group_function(FamilyGroup::Linear), "stanford_linear");
    assert_eq!(config.group_function(FamilyGroup::Other), "stanford_other");
    Ok(())
}
