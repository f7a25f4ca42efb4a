//! The cost model: a fixed registry of named cost components
//!
//! Each component declares the catalog parameters it depends on and a pure
//! closed-form formula combining them. The registry is enumerable and is
//! validated against a catalog before any computation runs, so a missing
//! dependency is caught at load time rather than mid-evaluation.
//!
//! Traceability contract: a component's amount depends on exactly the
//! parameters it declares. Recomputing with only other parameters changed
//! leaves the component bit-identical.

use crate::catalog::ParameterCatalog;
use crate::error::ModelError;
use crate::model::{
    Condition, CostLineItem, CostTable, PerCase, RepartitionTable, Sector, SectorAmounts, Sufferer,
};

/// A formula combining looked-up parameter values, in declaration order
pub type Formula = fn(&[f64]) -> f64;

/// One cost driver: which (condition, sufferer) it belongs to, which sector
/// pays for it, and how it is computed
#[derive(Debug, Clone)]
pub struct CostComponent {
    pub label: String,
    pub condition: Condition,
    pub sufferer: Sufferer,
    pub sector: Sector,
    /// Catalog parameter names, in the order the formula consumes them
    pub depends_on: Vec<String>,
    pub formula: Formula,
}

impl CostComponent {
    pub fn new(
        label: impl Into<String>,
        condition: Condition,
        sufferer: Sufferer,
        sector: Sector,
        depends_on: &[&str],
        formula: Formula,
    ) -> CostComponent {
        CostComponent {
            label: label.into(),
            condition,
            sufferer,
            sector,
            depends_on: depends_on.iter().map(|s| s.to_string()).collect(),
            formula,
        }
    }
}

// Formula shapes shared by the standard registry. Probabilities and rates
// are catalog percentages (0..100), converted here; durations and counts
// are used as-is.

/// count × unit cost
fn count_times_unit_cost(v: &[f64]) -> f64 {
    v[0] * v[1]
}

/// rate(%) × unit cost
fn rate_times_unit_cost(v: &[f64]) -> f64 {
    v[0] / 100.0 * v[1]
}

/// rate(%) × unit cost × duration (or rate × annual cost × years)
fn rate_times_unit_cost_times_duration(v: &[f64]) -> f64 {
    v[0] / 100.0 * v[1] * v[2]
}

/// months off work × annual earnings
fn months_of_earnings(v: &[f64]) -> f64 {
    v[0] / 12.0 * v[1]
}

/// quality-of-life loss index × duration in years × QALY value
fn qaly_loss(v: &[f64]) -> f64 {
    v[0] * v[1] * v[2]
}

/// A set of cost components evaluated together against one catalog
#[derive(Debug, Clone)]
pub struct CostModel {
    components: Vec<CostComponent>,
}

impl CostModel {
    pub fn new(components: Vec<CostComponent>) -> CostModel {
        CostModel { components }
    }

    pub fn components(&self) -> &[CostComponent] {
        &self.components
    }

    /// Check that every declared dependency exists in the catalog.
    ///
    /// Run this right after loading a catalog; it is also re-run by
    /// [`CostModel::compute`] so no formula can ever silently default.
    pub fn validate(&self, catalog: &ParameterCatalog) -> Result<(), ModelError> {
        for component in &self.components {
            for name in &component.depends_on {
                if !catalog.contains(name) {
                    return Err(ModelError::MissingParameter {
                        parameter: name.clone(),
                        component: component.label.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Evaluate every component against the catalog's current values.
    ///
    /// Pure and deterministic: the same catalog always produces the same
    /// tables. Monetary values stay full-precision `f64`; rounding is a
    /// presentation concern.
    pub fn compute(
        &self,
        catalog: &ParameterCatalog,
    ) -> Result<(CostTable<PerCase>, RepartitionTable), ModelError> {
        let mut items = Vec::with_capacity(self.components.len());
        for component in &self.components {
            let values = catalog.lookup(&component.depends_on).map_err(|_| {
                // lookup already names the parameter; attach the component
                missing_dependency(component, catalog)
            })?;
            let amount = (component.formula)(&values);
            items.push(CostLineItem {
                label: component.label.clone(),
                condition: component.condition,
                sufferer: component.sufferer,
                amounts: SectorAmounts::single(component.sector, amount),
            });
        }
        let table = CostTable::from_items(items);
        let repartition = table.repartition();
        Ok((table, repartition))
    }

    /// The standard registry: the cost drivers of the underlying perinatal
    /// cost model, one entry per published driver
    pub fn standard() -> CostModel {
        use Condition::{Anxiete, Depression, Psychose};
        use Sector::{AutreSecteurPublic, SanteSocial, SocieteEntiere};
        use Sufferer::{Bebe, Mere};

        let components = vec![
            // ---- Dépression / Mère ----
            CostComponent::new(
                "Consultations de médecine générale",
                Depression,
                Mere,
                SanteSocial,
                &[
                    "Nombre de consultations de médecine générale pour une dépression",
                    "Coût d'une consultation de médecine générale",
                ],
                count_times_unit_cost,
            ),
            CostComponent::new(
                "Consultations psychiatriques",
                Depression,
                Mere,
                SanteSocial,
                &[
                    "Nombre de consultations psychiatriques pour une dépression",
                    "Coût d'une consultation psychiatrique",
                ],
                count_times_unit_cost,
            ),
            CostComponent::new(
                "Hospitalisation psychiatrique",
                Depression,
                Mere,
                SanteSocial,
                &[
                    "Taux d'hospitalisation pour une dépression",
                    "Coût d'une journée d'hospitalisation psychiatrique",
                    "Durée d'hospitalisation pour une dépression",
                ],
                rate_times_unit_cost_times_duration,
            ),
            CostComponent::new(
                "Perte de productivité",
                Depression,
                Mere,
                SocieteEntiere,
                &[
                    "Mois d'absence du travail pour une dépression",
                    "Salaire annuel moyen",
                ],
                months_of_earnings,
            ),
            CostComponent::new(
                "Perte de qualité de vie",
                Depression,
                Mere,
                SocieteEntiere,
                &[
                    "Indice de perte de qualité de vie",
                    "Durée d'une dépression périnatale",
                    "Valeur d'une année de QALY",
                ],
                qaly_loss,
            ),
            CostComponent::new(
                "Suicides",
                Depression,
                Mere,
                SocieteEntiere,
                &["Taux de suicide lié à la dépression", "Prix d'une vie"],
                rate_times_unit_cost,
            ),
            // ---- Dépression / Bébé ----
            CostComponent::new(
                "Naissances prématurées",
                Depression,
                Bebe,
                SanteSocial,
                &[
                    "Surcroît de prématurité lié à la dépression",
                    "Coût d'une naissance prématurée",
                ],
                rate_times_unit_cost,
            ),
            CostComponent::new(
                "Visites de PMI",
                Depression,
                Bebe,
                SanteSocial,
                &[
                    "Visites de PMI supplémentaires pour un bébé de mère dépressive",
                    "Coût d'une visite de PMI",
                ],
                count_times_unit_cost,
            ),
            CostComponent::new(
                "Suivi éducatif spécialisé",
                Depression,
                Bebe,
                AutreSecteurPublic,
                &[
                    "Taux de recours au suivi spécialisé après une dépression",
                    "Coût annuel d'un suivi éducatif spécialisé",
                    "Durée du suivi spécialisé après une dépression",
                ],
                rate_times_unit_cost_times_duration,
            ),
            CostComponent::new(
                "Perte de revenus futurs",
                Depression,
                Bebe,
                SocieteEntiere,
                &[
                    "Perte de revenus futurs d'un enfant exposé à la dépression",
                    "Salaire annuel moyen",
                    "Durée de vie active",
                ],
                rate_times_unit_cost_times_duration,
            ),
            // ---- Anxiété / Mère ----
            CostComponent::new(
                "Consultations de médecine générale",
                Anxiete,
                Mere,
                SanteSocial,
                &[
                    "Nombre de consultations pour une anxiété",
                    "Coût d'une consultation de médecine générale",
                ],
                count_times_unit_cost,
            ),
            CostComponent::new(
                "Perte de productivité",
                Anxiete,
                Mere,
                SocieteEntiere,
                &[
                    "Mois d'absence du travail pour une anxiété",
                    "Salaire annuel moyen",
                ],
                months_of_earnings,
            ),
            CostComponent::new(
                "Perte de qualité de vie",
                Anxiete,
                Mere,
                SocieteEntiere,
                &[
                    "Indice de perte de qualité de vie pour une anxiété",
                    "Durée d'une anxiété périnatale",
                    "Valeur d'une année de QALY",
                ],
                qaly_loss,
            ),
            // ---- Anxiété / Bébé ----
            CostComponent::new(
                "Naissances prématurées",
                Anxiete,
                Bebe,
                SanteSocial,
                &[
                    "Surcroît de prématurité lié à l'anxiété",
                    "Coût d'une naissance prématurée",
                ],
                rate_times_unit_cost,
            ),
            CostComponent::new(
                "Visites de PMI",
                Anxiete,
                Bebe,
                SanteSocial,
                &[
                    "Visites de PMI supplémentaires pour un bébé de mère anxieuse",
                    "Coût d'une visite de PMI",
                ],
                count_times_unit_cost,
            ),
            CostComponent::new(
                "Suivi des troubles émotionnels",
                Anxiete,
                Bebe,
                AutreSecteurPublic,
                &[
                    "Taux de troubles émotionnels chez l'enfant exposé à l'anxiété",
                    "Coût annuel d'un suivi éducatif spécialisé",
                    "Durée du suivi des troubles émotionnels",
                ],
                rate_times_unit_cost_times_duration,
            ),
            // ---- Psychose / Mère ----
            CostComponent::new(
                "Hospitalisation psychiatrique",
                Psychose,
                Mere,
                SanteSocial,
                &[
                    "Taux d'hospitalisation pour une psychose",
                    "Coût d'une journée d'hospitalisation psychiatrique",
                    "Durée d'hospitalisation pour une psychose",
                ],
                rate_times_unit_cost_times_duration,
            ),
            CostComponent::new(
                "Consultations psychiatriques",
                Psychose,
                Mere,
                SanteSocial,
                &[
                    "Nombre de consultations psychiatriques pour une psychose",
                    "Coût d'une consultation psychiatrique",
                ],
                count_times_unit_cost,
            ),
            CostComponent::new(
                "Perte de productivité",
                Psychose,
                Mere,
                SocieteEntiere,
                &[
                    "Mois d'absence du travail pour une psychose",
                    "Salaire annuel moyen",
                ],
                months_of_earnings,
            ),
            CostComponent::new(
                "Perte de qualité de vie",
                Psychose,
                Mere,
                SocieteEntiere,
                &[
                    "Perte de qualité de vie pour une psychose",
                    "Durée d'une psychose périnatale",
                    "Valeur d'une année de QALY",
                ],
                qaly_loss,
            ),
            CostComponent::new(
                "Suicides",
                Psychose,
                Mere,
                SocieteEntiere,
                &["Taux de suicide lié à la psychose", "Prix d'une vie"],
                rate_times_unit_cost,
            ),
            // ---- Psychose / Bébé ----
            CostComponent::new(
                "Naissances prématurées",
                Psychose,
                Bebe,
                SanteSocial,
                &[
                    "Surcroît de prématurité lié à la psychose",
                    "Coût d'une naissance prématurée",
                ],
                rate_times_unit_cost,
            ),
            CostComponent::new(
                "Visites de PMI",
                Psychose,
                Bebe,
                SanteSocial,
                &[
                    "Visites de PMI supplémentaires pour un bébé de mère psychotique",
                    "Coût d'une visite de PMI",
                ],
                count_times_unit_cost,
            ),
            CostComponent::new(
                "Placement en famille d'accueil",
                Psychose,
                Bebe,
                AutreSecteurPublic,
                &[
                    "Taux de placement après une psychose",
                    "Coût annuel d'un placement en famille d'accueil",
                    "Durée de placement après une psychose",
                ],
                rate_times_unit_cost_times_duration,
            ),
        ];

        CostModel::new(components)
    }
}

/// Recover which declared dependency is absent so the error can name both
/// the parameter and the component that needed it
fn missing_dependency(component: &CostComponent, catalog: &ParameterCatalog) -> ModelError {
    let parameter = component
        .depends_on
        .iter()
        .find(|name| !catalog.contains(name))
        .cloned()
        .unwrap_or_default();
    ModelError::MissingParameter {
        parameter,
        component: component.label.clone(),
    }
}
