//! Perinatal mental-health cost model
//!
//! This crate estimates the aggregate societal cost of the three perinatal
//! mental-health conditions (depression, anxiety, psychosis), broken down
//! by sufferer (mother / infant), by payer sector (health & social care,
//! other public spending, society at large) and by scale (per case, per
//! birth, territory-wide).
//!
//! The pipeline is a deterministic transformation of a parameter catalog:
//!
//! 1. load the catalog and override the values the user adjusted
//! 2. evaluate the fixed registry of cost components (per-case table)
//! 3. weight each condition by its prevalence (per-birth table)
//! 4. sum across conditions and scale by a territory's birth count
//! 5. split the total back into per-sector amounts
//!
//! ```ignore
//! use psyperinat_core::{ParameterCatalog, evaluate};
//! use rustc_hash::FxHashMap;
//!
//! let catalog = ParameterCatalog::baseline()?;
//! let overrides = FxHashMap::from_iter([
//!     ("Prévalence de la dépression".to_string(), 15.0),
//! ]);
//! let result = evaluate(&catalog, &overrides, Some(697_000.0))?;
//! println!("{:.0} €", result.population_total);
//! ```
//!
//! Every step is a pure function over immutable inputs; the only I/O is
//! the one-time load of the two CSV tables (catalog and births registry).

#![warn(clippy::all)]

pub mod aggregate;
pub mod births;
pub mod catalog;
pub mod error;
pub mod evaluate;
pub mod model;
pub mod registry;

#[cfg(test)]
mod tests;

pub use births::{BirthRegistry, Territory};
pub use catalog::{Parameter, ParameterCatalog, prevalence_parameter};
pub use error::{CatalogError, EvaluateError, LookupError, ModelError};
pub use evaluate::{EvaluationResult, evaluate, evaluate_model};
pub use model::{
    Category, CombinedRow, Condition, ConditionRow, CostLineItem, CostTable, PerBirth, PerCase,
    RepartitionTable, Scale, Sector, SectorAmounts, Sufferer,
};
pub use registry::{CostComponent, CostModel};
