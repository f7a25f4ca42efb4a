//! The library entry point for one full evaluation
//!
//! Runs the whole pipeline against an overridden copy of the baseline
//! catalog and returns every derived view in one immutable result set. Each
//! call is stateless and independent; a failed evaluation leaves nothing
//! behind, so callers keep rendering their previous result.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::aggregate::{effective_birth_count, repartition_by_sector, scale_to_population};
use crate::catalog::ParameterCatalog;
use crate::error::EvaluateError;
use crate::model::{CombinedRow, CostTable, PerBirth, PerCase, RepartitionTable, Sector};
use crate::registry::CostModel;

/// Everything one evaluation produces. All currency figures are raw
/// full-precision numbers; formatting is the presentation layer's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Cost per afflicted case, by condition / sufferer / sector
    pub per_case: CostTable<PerCase>,
    /// Expected cost per birth (per-case × prevalence)
    pub per_birth: CostTable<PerBirth>,
    /// Element-wise sum of the per-birth rows across conditions
    pub combined: CombinedRow,
    /// Sector fractions of the per-birth total
    pub repartition: RepartitionTable,
    /// Sector fractions applied to the population-wide total
    pub sector_amounts: [(Sector, f64); 3],
    /// The headline number: combined per-birth total × birth count
    pub population_total: f64,
    /// The multiplier actually used (after the fallback-to-1 rule)
    pub birth_count: f64,
}

/// Evaluate the standard cost model.
///
/// `overrides` replaces `current_value` for the named parameters of a fresh
/// copy of `catalog`; an unknown name aborts the evaluation. `birth_count`
/// follows the fallback rule of
/// [`effective_birth_count`](crate::aggregate::effective_birth_count).
pub fn evaluate(
    catalog: &ParameterCatalog,
    overrides: &FxHashMap<String, f64>,
    birth_count: Option<f64>,
) -> Result<EvaluationResult, EvaluateError> {
    evaluate_model(&CostModel::standard(), catalog, overrides, birth_count)
}

/// Evaluate an explicit cost model, for callers carrying a custom registry
pub fn evaluate_model(
    model: &CostModel,
    catalog: &ParameterCatalog,
    overrides: &FxHashMap<String, f64>,
    birth_count: Option<f64>,
) -> Result<EvaluationResult, EvaluateError> {
    let catalog = catalog.with_values(overrides)?;
    model.validate(&catalog)?;

    let (per_case, _per_case_repartition) = model.compute(&catalog)?;
    let per_birth = per_case.scale_to_births(&catalog.prevalences())?;
    let combined = per_birth.total_across_conditions();

    // Sector shares follow the per-birth table, weighted by prevalence
    let repartition = per_birth.repartition();

    let birth_count = effective_birth_count(birth_count);
    let population_total = scale_to_population(combined.total(), Some(birth_count));
    let sector_amounts = repartition_by_sector(&repartition, population_total);

    Ok(EvaluationResult {
        per_case,
        per_birth,
        combined,
        repartition,
        sector_amounts,
        population_total,
        birth_count,
    })
}
