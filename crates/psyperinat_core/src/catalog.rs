//! The parameter catalog
//!
//! The catalog is the single source of every number the cost model reads:
//! prevalences, unit costs, durations, probabilities. It is loaded once at
//! startup from a CSV file (columns `nom_variable, category, mini, maxi,
//! val, step, unit, explication`) and never mutated in place; each
//! recomputation works on a fresh overridden copy produced by
//! [`ParameterCatalog::with_values`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, LookupError};
use crate::model::{Category, Condition};

/// The shipped baseline catalog
const BASELINE_CSV: &str = include_str!("../data/variables.csv");

/// Columns a catalog file must carry, in no particular order
const REQUIRED_COLUMNS: [&str; 7] = [
    "nom_variable",
    "category",
    "mini",
    "maxi",
    "val",
    "step",
    "unit",
];

/// One row of the catalog: a named, bounded, unit-tagged input value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub category: Category,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
    /// Display unit, e.g. "%", "€", "jours"
    pub unit: String,
    /// Free-text help shown next to the widget; presentation-only
    pub explanation: String,
    /// Value used at evaluation time; starts at `default`
    pub current_value: f64,
}

impl Parameter {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        min: f64,
        max: f64,
        default: f64,
        step: f64,
        unit: impl Into<String>,
    ) -> Parameter {
        Parameter {
            name: name.into(),
            category,
            min,
            max,
            default,
            step,
            unit: unit.into(),
            explanation: String::new(),
            current_value: default,
        }
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.min > self.max {
            return Err(CatalogError::InvalidBounds {
                name: self.name.clone(),
                min: self.min,
                max: self.max,
            });
        }
        if self.default < self.min || self.default > self.max {
            return Err(CatalogError::DefaultOutOfRange {
                name: self.name.clone(),
                default: self.default,
                min: self.min,
                max: self.max,
            });
        }
        if self.step <= 0.0 {
            return Err(CatalogError::NonPositiveStep {
                name: self.name.clone(),
                step: self.step,
            });
        }
        Ok(())
    }
}

/// Raw CSV row, field names matching the file header
#[derive(Debug, Deserialize)]
struct CatalogRow {
    nom_variable: String,
    category: String,
    mini: f64,
    maxi: f64,
    val: f64,
    step: f64,
    unit: String,
    #[serde(default)]
    explication: String,
}

/// The immutable baseline set of parameters, indexed by name
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterCatalog {
    params: Vec<Parameter>,
    index: FxHashMap<String, usize>,
}

impl ParameterCatalog {
    /// Build a catalog from an explicit parameter list, enforcing bounds
    /// consistency and name uniqueness
    pub fn new(params: Vec<Parameter>) -> Result<ParameterCatalog, CatalogError> {
        let mut index = FxHashMap::default();
        for (i, param) in params.iter().enumerate() {
            param.validate()?;
            if index.insert(param.name.clone(), i).is_some() {
                return Err(CatalogError::DuplicateName(param.name.clone()));
            }
        }
        Ok(ParameterCatalog { params, index })
    }

    /// Load a catalog from a CSV file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<ParameterCatalog, CatalogError> {
        Self::from_reader(File::open(path)?)
    }

    /// Parse a catalog from any CSV source
    pub fn from_reader(reader: impl Read) -> Result<ParameterCatalog, CatalogError> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(CatalogError::MissingColumn(column));
            }
        }

        let mut params = Vec::new();
        for row in csv_reader.deserialize() {
            let row: CatalogRow = row?;
            let category = Category::from_tag(&row.category).ok_or_else(|| {
                CatalogError::UnknownCategory {
                    name: row.nom_variable.clone(),
                    category: row.category.clone(),
                }
            })?;
            params.push(Parameter {
                name: row.nom_variable,
                category,
                min: row.mini,
                max: row.maxi,
                default: row.val,
                step: row.step,
                unit: row.unit,
                explanation: row.explication,
                current_value: row.val,
            });
        }
        Self::new(params)
    }

    /// The catalog shipped with the crate (`data/variables.csv`)
    pub fn baseline() -> Result<ParameterCatalog, CatalogError> {
        Self::from_reader(BASELINE_CSV.as_bytes())
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// All parameters, in catalog order
    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    /// Parameters of one category, in catalog order
    pub fn params_in(&self, category: Category) -> impl Iterator<Item = &Parameter> {
        self.params.iter().filter(move |p| p.category == category)
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.index.get(name).map(|&i| &self.params[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Current value of one named parameter
    pub fn value(&self, name: &str) -> Result<f64, LookupError> {
        self.get(name)
            .map(|p| p.current_value)
            .ok_or_else(|| LookupError::UnknownParameter(name.to_string()))
    }

    /// Current values of the named parameters, preserving their order
    pub fn lookup(&self, names: &[String]) -> Result<Vec<f64>, LookupError> {
        names.iter().map(|name| self.value(name)).collect()
    }

    /// A fresh catalog with `current_value` replaced for the named
    /// parameters. Unnamed parameters keep their previous value; naming a
    /// parameter the catalog does not define is an error.
    pub fn with_values(
        &self,
        overrides: &FxHashMap<String, f64>,
    ) -> Result<ParameterCatalog, LookupError> {
        for name in overrides.keys() {
            if !self.contains(name) {
                return Err(LookupError::UnknownParameter(name.clone()));
            }
        }
        let mut catalog = self.clone();
        for param in &mut catalog.params {
            if let Some(&value) = overrides.get(&param.name) {
                param.current_value = value;
            }
        }
        Ok(catalog)
    }

    /// Prevalence fraction in [0, 1] per condition, read from the
    /// "Prévalence de …" parameters (catalog unit: %).
    ///
    /// Conditions whose prevalence parameter is absent get no entry;
    /// `scale_to_births` rejects them if the cost table mentions them.
    pub fn prevalences(&self) -> FxHashMap<Condition, f64> {
        let mut prevalences = FxHashMap::default();
        for &condition in Condition::ALL.iter() {
            if let Some(param) = self.get(prevalence_parameter(condition)) {
                prevalences.insert(condition, param.current_value / 100.0);
            }
        }
        prevalences
    }
}

/// Name of the catalog parameter carrying a condition's prevalence
pub fn prevalence_parameter(condition: Condition) -> &'static str {
    match condition {
        Condition::Depression => "Prévalence de la dépression",
        Condition::Anxiete => "Prévalence de l'anxiété",
        Condition::Psychose => "Prévalence de la psychose",
    }
}
