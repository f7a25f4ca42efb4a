//! Integration tests for the cost model pipeline
//!
//! Tests are organized by topic:
//! - `catalog` - Catalog loading, validation and overrides
//! - `cost_model` - The component registry and per-case computation
//! - `aggregate` - Prevalence weighting, population scaling, repartition
//! - `evaluation` - The end-to-end `evaluate` entry point

use crate::catalog::{Parameter, ParameterCatalog};
use crate::model::{Category, Condition, Sector, Sufferer};
use crate::registry::{CostComponent, CostModel};

mod catalog;
mod cost_model;

/// A parameter with permissive bounds, for tests that only care about the
/// default value
fn param(name: &str, category: Category, default: f64) -> Parameter {
    Parameter::new(name, category, 0.0, default.abs() * 10.0 + 1.0, default, 0.5, "€")
}

/// A one-condition catalog: a public care cost, a productivity cost and a
/// 10% prevalence for depression
fn scenario_catalog() -> ParameterCatalog {
    ParameterCatalog::new(vec![
        param("Coût public d'une dépression", Category::DepressionMere, 1000.0),
        param(
            "Coût de productivité d'une dépression",
            Category::DepressionMere,
            500.0,
        ),
        param("Prévalence de la dépression", Category::DepressionMere, 10.0),
    ])
    .unwrap()
}

fn scenario_total(v: &[f64]) -> f64 {
    v[0] + v[1]
}

/// The matching model: the combined cost splits 60/40 between the health
/// system and lost productivity
fn scenario_model() -> CostModel {
    const DEPS: [&str; 2] = [
        "Coût public d'une dépression",
        "Coût de productivité d'une dépression",
    ];

    fn public_share(v: &[f64]) -> f64 {
        scenario_total(v) * 0.6
    }

    fn productivity_share(v: &[f64]) -> f64 {
        scenario_total(v) * 0.4
    }

    CostModel::new(vec![
        CostComponent::new(
            "Coûts publics",
            Condition::Depression,
            Sufferer::Mere,
            Sector::SanteSocial,
            &DEPS,
            public_share,
        ),
        CostComponent::new(
            "Perte de productivité",
            Condition::Depression,
            Sufferer::Mere,
            Sector::SocieteEntiere,
            &DEPS,
            productivity_share,
        ),
    ])
}
