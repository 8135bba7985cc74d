use pretty_assertions::assert_eq;
use rustc_hash::FxHashSet;

use super::*;

#[test]
fn unary_family_one_per_element() -> Result<(), CoverageError> {
    let config = CoverageConfig::stanford()?;
    let types = ContainerExpander::new(&config).expand("Vector")?;
    let rendered: Vec<_> = types.iter().map(TypeDescriptor::render).collect();
    assert_eq!(
        rendered,
        [
            "Vector<bool>",
            "Vector<char>",
            "Vector<double>",
            "Vector<int>",
            "Vector<string>",
            "Vector<GridLocation>",
            "Vector<Thing>",
        ]
    );
    assert!(types.iter().all(|t| t.key().is_none()));
    Ok(())
}

#[test]
fn keyed_family_is_element_major_cross_product() -> Result<(), CoverageError> {
    let config = CoverageConfig::stanford()?;
    let types = ContainerExpander::new(&config).expand("Map")?;
    assert_eq!(types.len(), 7 * 7);
    assert_eq!(types[0].render(), "Map<bool, bool>");
    assert_eq!(types[1].render(), "Map<char, bool>");
    assert_eq!(types[7].render(), "Map<bool, char>");
    assert_eq!(types[48].render(), "Map<Thing, Thing>");
    Ok(())
}

#[test]
fn implicit_key_family_is_unary() -> Result<(), CoverageError> {
    let config = CoverageConfig::stanford()?;
    let types = ContainerExpander::new(&config).expand("PriorityQueue")?;
    assert_eq!(types.len(), 7);
    assert_eq!(types[3].render(), "PriorityQueue<int>");
    assert_eq!(types[3].name(), "priorityqueue_int");
    Ok(())
}

#[test]
fn unconfigured_family_fails() -> Result<(), CoverageError> {
    let config = CoverageConfig::stanford()?;
    let err = ContainerExpander::new(&config).expand("LinkedList").err();
    assert!(matches!(
        err,
        Some(CoverageError::UnknownType { ref name, kind: crate::TypeKind::Container }) if name == "LinkedList"
    ));
    Ok(())
}

#[test]
fn narrower_key_list_shrinks_cross_product() -> Result<(), CoverageError> {
    let config = CoverageConfig::stanford()?.with_key_types(vec!["int".to_string(), "string".to_string()]);
    let types = ContainerExpander::new(&config).expand("HashMap")?;
    assert_eq!(types.len(), 7 * 2);
    assert_eq!(types[1].name(), "hashmap_string_bool");
    Ok(())
}

#[test]
fn group_expansion_concatenates_families() -> Result<(), CoverageError> {
    let config = CoverageConfig::stanford()?;
    let expander = ContainerExpander::new(&config);
    let tree = expander.expand_group(FamilyGroup::Tree)?;
    assert_eq!(tree.len(), 49 + 7);
    assert_eq!(tree[49].render(), "Set<bool>");
    Ok(())
}

#[test]
fn names_are_unique_across_catalog() -> Result<(), CoverageError> {
    let config = CoverageConfig::stanford()?;
    let expander = ContainerExpander::new(&config);
    let mut names = FxHashSet::default();
    let mut total = 0;
    for family in config.families.iter() {
        for t in expander.expand(&family.name)? {
            total += 1;
            assert!(names.insert(t.name()), "duplicate name {}", t.name());
        }
    }
    // 8 unary families of 7, 2 keyed families of 49
    assert_eq!(total, 8 * 7 + 2 * 49);
    Ok(())
}
