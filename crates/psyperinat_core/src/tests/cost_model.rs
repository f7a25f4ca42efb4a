//! Tests for the component registry and the per-case computation

use rustc_hash::FxHashMap;

use crate::catalog::ParameterCatalog;
use crate::error::ModelError;
use crate::model::{Condition, Sector, Sufferer};
use crate::registry::CostModel;

#[test]
fn standard_model_covers_all_conditions_and_sufferers() {
    let model = CostModel::standard();
    for condition in Condition::ALL {
        for sufferer in Sufferer::ALL {
            assert!(
                model
                    .components()
                    .iter()
                    .any(|c| c.condition == condition && c.sufferer == sufferer),
                "no component for {} / {}",
                condition.label(),
                sufferer.label()
            );
        }
    }
}

#[test]
fn component_amounts_follow_their_formulas() {
    let catalog = ParameterCatalog::baseline().unwrap();
    let (table, _) = CostModel::standard().compute(&catalog).unwrap();

    // Baseline defaults: 6 GP consultations at 25 € each
    let gp = table
        .items()
        .iter()
        .find(|i| {
            i.condition == Condition::Depression
                && i.sufferer == Sufferer::Mere
                && i.label == "Consultations de médecine générale"
        })
        .expect("GP consultations line item");
    assert_eq!(gp.amounts.get(Sector::SanteSocial), 6.0 * 25.0);
    assert_eq!(gp.amounts.get(Sector::SocieteEntiere), 0.0);

    // 2% hospitalized, 21 days at 700 €/day
    let hospital = table
        .items()
        .iter()
        .find(|i| {
            i.condition == Condition::Depression && i.label == "Hospitalisation psychiatrique"
        })
        .expect("hospitalization line item");
    let expected = 0.02 * 700.0 * 21.0;
    assert!(
        (hospital.amounts.total() - expected).abs() < 1e-9,
        "expected {expected}, got {}",
        hospital.amounts.total()
    );
}

#[test]
fn rows_aggregate_their_line_items() {
    let catalog = ParameterCatalog::baseline().unwrap();
    let (table, _) = CostModel::standard().compute(&catalog).unwrap();

    for row in table.rows() {
        let items_total: f64 = table
            .items()
            .iter()
            .filter(|i| i.condition == row.condition)
            .map(|i| i.amounts.total())
            .sum();
        assert!(
            (row.total() - items_total).abs() < 1e-9,
            "row total {} != sum of line items {} for {}",
            row.total(),
            items_total,
            row.condition.label()
        );
    }
}

#[test]
fn changing_a_parameter_only_moves_dependent_components() {
    let catalog = ParameterCatalog::baseline().unwrap();
    let model = CostModel::standard();
    let (before, _) = model.compute(&catalog).unwrap();

    let overrides = FxHashMap::from_iter([("Coût d'une visite de PMI".to_string(), 90.0)]);
    let (after, _) = model.compute(&catalog.with_values(&overrides).unwrap()).unwrap();

    for (b, a) in before.items().iter().zip(after.items()) {
        let depends = model
            .components()
            .iter()
            .find(|c| c.label == b.label && c.condition == b.condition && c.sufferer == b.sufferer)
            .map(|c| c.depends_on.iter().any(|d| d == "Coût d'une visite de PMI"))
            .unwrap();
        if depends {
            assert_ne!(b.amounts, a.amounts, "dependent item {:?} did not move", b.label);
        } else {
            assert_eq!(
                b.amounts, a.amounts,
                "independent item {:?} changed",
                b.label
            );
        }
    }
}

#[test]
fn compute_is_deterministic() {
    let catalog = ParameterCatalog::baseline().unwrap();
    let model = CostModel::standard();

    let (table_a, repartition_a) = model.compute(&catalog).unwrap();
    let (table_b, repartition_b) = model.compute(&catalog).unwrap();

    assert_eq!(table_a, table_b);
    assert_eq!(repartition_a, repartition_b);
}

#[test]
fn missing_dependency_names_parameter_and_component() {
    let catalog = super::scenario_catalog();
    match CostModel::standard().validate(&catalog) {
        Err(ModelError::MissingParameter {
            parameter,
            component,
        }) => {
            assert!(!parameter.is_empty());
            assert!(!component.is_empty());
        }
        other => panic!("expected MissingParameter, got {other:?}"),
    }
}

#[test]
fn repartition_fractions_sum_to_one() {
    let catalog = ParameterCatalog::baseline().unwrap();
    let (_, repartition) = CostModel::standard().compute(&catalog).unwrap();

    let sum: f64 = repartition.iter().map(|(_, f)| f).sum();
    assert!((sum - 1.0).abs() < 1e-6, "fractions sum to {sum}");
}
