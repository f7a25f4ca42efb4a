use std::fmt;

use crate::model::Condition;

/// Errors raised while loading or validating one of the two input tables
/// (parameter catalog, births registry). All of these are fatal at startup.
#[derive(Debug, Clone)]
pub enum CatalogError {
    /// A required column is absent from the file header
    MissingColumn(&'static str),
    /// A row carries a category tag the catalog does not define
    UnknownCategory { name: String, category: String },
    /// `min > max`
    InvalidBounds { name: String, min: f64, max: f64 },
    /// Default value outside `[min, max]`
    DefaultOutOfRange {
        name: String,
        default: f64,
        min: f64,
        max: f64,
    },
    /// Slider step must be strictly positive
    NonPositiveStep { name: String, step: f64 },
    /// Two rows share the same `nom_variable`
    DuplicateName(String),
    /// Two rows share the same `territoire`
    DuplicateTerritory(String),
    /// A territory carries a negative birth count
    NegativeBirthCount { territory: String, count: f64 },
    /// The file could not be read or parsed at all
    Parse(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::MissingColumn(column) => {
                write!(f, "malformed catalog: missing column {column:?}")
            }
            CatalogError::UnknownCategory { name, category } => {
                write!(f, "parameter {name:?} has unknown category {category:?}")
            }
            CatalogError::InvalidBounds { name, min, max } => {
                write!(f, "parameter {name:?} has min {min} greater than max {max}")
            }
            CatalogError::DefaultOutOfRange {
                name,
                default,
                min,
                max,
            } => {
                write!(
                    f,
                    "parameter {name:?} has default {default} outside [{min}, {max}]"
                )
            }
            CatalogError::NonPositiveStep { name, step } => {
                write!(f, "parameter {name:?} has non-positive step {step}")
            }
            CatalogError::DuplicateName(name) => {
                write!(f, "duplicate parameter name {name:?}")
            }
            CatalogError::DuplicateTerritory(name) => {
                write!(f, "duplicate territory {name:?}")
            }
            CatalogError::NegativeBirthCount { territory, count } => {
                write!(f, "territory {territory:?} has negative birth count {count}")
            }
            CatalogError::Parse(msg) => write!(f, "failed to parse input table: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}

/// Errors related to name-based lookups against loaded tables.
///
/// These indicate an integration error (the caller passed a name the table
/// does not define) and are never silently ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupError {
    UnknownParameter(String),
    UnknownCondition(Condition),
    UnknownTerritory(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::UnknownParameter(name) => {
                write!(f, "parameter {name:?} not found in catalog")
            }
            LookupError::UnknownCondition(condition) => {
                write!(f, "no prevalence entry for condition {:?}", condition.label())
            }
            LookupError::UnknownTerritory(name) => {
                write!(f, "territory {name:?} not found in births registry")
            }
        }
    }
}

impl std::error::Error for LookupError {}

/// Errors raised by the cost model itself
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A formula's dependency is absent from the catalog. Fatal: silently
    /// defaulting would zero a cost component and misreport the total.
    MissingParameter { parameter: String, component: String },
    Lookup(LookupError),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::MissingParameter {
                parameter,
                component,
            } => {
                write!(
                    f,
                    "parameter {parameter:?} required by cost component {component:?} is missing"
                )
            }
            ModelError::Lookup(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::Lookup(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LookupError> for ModelError {
    fn from(err: LookupError) -> Self {
        ModelError::Lookup(err)
    }
}

/// Umbrella error for the `evaluate` entry point
#[derive(Debug, Clone)]
pub enum EvaluateError {
    Catalog(CatalogError),
    Model(ModelError),
    Lookup(LookupError),
}

impl fmt::Display for EvaluateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluateError::Catalog(e) => write!(f, "{e}"),
            EvaluateError::Model(e) => write!(f, "{e}"),
            EvaluateError::Lookup(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvaluateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EvaluateError::Catalog(e) => Some(e),
            EvaluateError::Model(e) => Some(e),
            EvaluateError::Lookup(e) => Some(e),
        }
    }
}

impl From<CatalogError> for EvaluateError {
    fn from(err: CatalogError) -> Self {
        EvaluateError::Catalog(err)
    }
}

impl From<ModelError> for EvaluateError {
    fn from(err: ModelError) -> Self {
        EvaluateError::Model(err)
    }
}

impl From<LookupError> for EvaluateError {
    fn from(err: LookupError) -> Self {
        EvaluateError::Lookup(err)
    }
}
