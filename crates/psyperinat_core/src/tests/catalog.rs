//! Tests for catalog loading, validation and overrides

use rustc_hash::FxHashMap;

use super::param;
use crate::births::BirthRegistry;
use crate::catalog::{ParameterCatalog, prevalence_parameter};
use crate::error::{CatalogError, LookupError};
use crate::model::{Category, Condition};
use crate::registry::CostModel;

#[test]
fn baseline_catalog_parses() {
    let catalog = ParameterCatalog::baseline().expect("baseline catalog must parse");

    assert_eq!(catalog.len(), 46);
    for category in Category::ALL {
        assert!(
            catalog.params_in(category).count() > 0,
            "category {:?} has no parameters",
            category.tag()
        );
    }
    for condition in Condition::ALL {
        assert!(catalog.contains(prevalence_parameter(condition)));
    }
}

#[test]
fn baseline_catalog_satisfies_standard_model() {
    let catalog = ParameterCatalog::baseline().unwrap();
    CostModel::standard()
        .validate(&catalog)
        .expect("every standard component dependency must exist in the baseline");
}

#[test]
fn missing_column_is_rejected() {
    let csv = "nom_variable,category,mini,maxi,val,unit\na,medical,0,1,0.5,€\n";
    match ParameterCatalog::from_reader(csv.as_bytes()) {
        Err(CatalogError::MissingColumn("step")) => {}
        other => panic!("expected MissingColumn(\"step\"), got {other:?}"),
    }
}

#[test]
fn unknown_category_is_rejected() {
    let csv = "nom_variable,category,mini,maxi,val,step,unit,explication\n\
               a,depression_pere,0,1,0.5,0.1,€,\n";
    match ParameterCatalog::from_reader(csv.as_bytes()) {
        Err(CatalogError::UnknownCategory { name, category }) => {
            assert_eq!(name, "a");
            assert_eq!(category, "depression_pere");
        }
        other => panic!("expected UnknownCategory, got {other:?}"),
    }
}

#[test]
fn inconsistent_bounds_are_rejected() {
    let mut p = param("a", Category::Medical, 5.0);
    p.min = 10.0;
    p.max = 1.0;
    assert!(matches!(
        ParameterCatalog::new(vec![p]),
        Err(CatalogError::InvalidBounds { .. })
    ));

    let mut p = param("a", Category::Medical, 5.0);
    p.default = p.max + 1.0;
    assert!(matches!(
        ParameterCatalog::new(vec![p]),
        Err(CatalogError::DefaultOutOfRange { .. })
    ));

    let mut p = param("a", Category::Medical, 5.0);
    p.step = 0.0;
    assert!(matches!(
        ParameterCatalog::new(vec![p]),
        Err(CatalogError::NonPositiveStep { .. })
    ));
}

#[test]
fn duplicate_names_are_rejected() {
    let result = ParameterCatalog::new(vec![
        param("a", Category::Medical, 1.0),
        param("a", Category::Economique, 2.0),
    ]);
    match result {
        Err(CatalogError::DuplicateName(name)) => assert_eq!(name, "a"),
        other => panic!("expected DuplicateName, got {other:?}"),
    }
}

#[test]
fn with_values_returns_a_fresh_overridden_copy() {
    let baseline = ParameterCatalog::new(vec![
        param("a", Category::Medical, 1.0),
        param("b", Category::Medical, 2.0),
    ])
    .unwrap();

    let overrides = FxHashMap::from_iter([("a".to_string(), 7.0)]);
    let overridden = baseline.with_values(&overrides).unwrap();

    assert_eq!(overridden.value("a").unwrap(), 7.0);
    assert_eq!(overridden.value("b").unwrap(), 2.0, "unnamed parameters keep their value");
    assert_eq!(baseline.value("a").unwrap(), 1.0, "the baseline is never mutated");
}

#[test]
fn with_values_rejects_unknown_names() {
    let baseline = ParameterCatalog::new(vec![param("a", Category::Medical, 1.0)]).unwrap();
    let overrides = FxHashMap::from_iter([("does not exist".to_string(), 1.0)]);
    match baseline.with_values(&overrides) {
        Err(LookupError::UnknownParameter(name)) => assert_eq!(name, "does not exist"),
        other => panic!("expected UnknownParameter, got {other:?}"),
    }
}

#[test]
fn lookup_preserves_order() {
    let catalog = ParameterCatalog::new(vec![
        param("a", Category::Medical, 1.0),
        param("b", Category::Medical, 2.0),
        param("c", Category::Medical, 3.0),
    ])
    .unwrap();

    let names: Vec<String> = ["c", "a", "b"].iter().map(|s| s.to_string()).collect();
    assert_eq!(catalog.lookup(&names).unwrap(), vec![3.0, 1.0, 2.0]);

    let names: Vec<String> = ["a", "d"].iter().map(|s| s.to_string()).collect();
    assert!(matches!(
        catalog.lookup(&names),
        Err(LookupError::UnknownParameter(_))
    ));
}

#[test]
fn prevalences_convert_percentages_to_fractions() {
    let catalog = ParameterCatalog::baseline().unwrap();
    let prevalences = catalog.prevalences();

    assert_eq!(prevalences.len(), 3);
    for (&condition, &fraction) in &prevalences {
        assert!(
            (0.0..=1.0).contains(&fraction),
            "prevalence of {:?} is {fraction}, not a fraction",
            condition.label()
        );
    }
    assert_eq!(prevalences[&Condition::Depression], 0.12);
}

#[test]
fn prevalences_skip_absent_conditions() {
    let catalog = super::scenario_catalog();
    let prevalences = catalog.prevalences();
    assert_eq!(prevalences.len(), 1);
    assert_eq!(prevalences[&Condition::Depression], 0.10);
}

#[test]
fn baseline_births_registry_parses() {
    let registry = BirthRegistry::baseline().expect("baseline births table must parse");

    assert!(!registry.territories().is_empty());
    assert_eq!(registry.count("France métropolitaine").unwrap(), 697_000.0);
    assert!(matches!(
        registry.count("Atlantide"),
        Err(LookupError::UnknownTerritory(_))
    ));
}

#[test]
fn births_registry_rejects_bad_rows() {
    let csv = "territoire,naissances\nA,1000\nA,2000\n";
    assert!(matches!(
        BirthRegistry::from_reader(csv.as_bytes()),
        Err(CatalogError::DuplicateTerritory(_))
    ));

    let csv = "territoire,naissances\nA,-3\n";
    assert!(matches!(
        BirthRegistry::from_reader(csv.as_bytes()),
        Err(CatalogError::NegativeBirthCount { .. })
    ));

    let csv = "territoire,population\nA,1000\n";
    assert!(matches!(
        BirthRegistry::from_reader(csv.as_bytes()),
        Err(CatalogError::MissingColumn("naissances"))
    ));
}
