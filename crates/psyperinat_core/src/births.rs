//! The births reference table
//!
//! Maps a territory name to its annual birth count. The cost model never
//! reads this table; it only supplies the scalar handed to
//! [`crate::aggregate::scale_to_population`], and the list of names shown
//! in the territory selector.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, LookupError};

const BASELINE_CSV: &str = include_str!("../data/naissances.csv");

const REQUIRED_COLUMNS: [&str; 2] = ["territoire", "naissances"];

/// One territory and its annual birth count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Territory {
    #[serde(rename = "territoire")]
    pub name: String,
    #[serde(rename = "naissances")]
    pub births: f64,
}

/// Ordered territory → birth count table
#[derive(Debug, Clone, PartialEq)]
pub struct BirthRegistry {
    entries: Vec<Territory>,
    index: FxHashMap<String, usize>,
}

impl BirthRegistry {
    pub fn new(entries: Vec<Territory>) -> Result<BirthRegistry, CatalogError> {
        let mut index = FxHashMap::default();
        for (i, entry) in entries.iter().enumerate() {
            if entry.births < 0.0 || !entry.births.is_finite() {
                return Err(CatalogError::NegativeBirthCount {
                    territory: entry.name.clone(),
                    count: entry.births,
                });
            }
            if index.insert(entry.name.clone(), i).is_some() {
                return Err(CatalogError::DuplicateTerritory(entry.name.clone()));
            }
        }
        Ok(BirthRegistry { entries, index })
    }

    /// Load a births table from a CSV file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<BirthRegistry, CatalogError> {
        Self::from_reader(File::open(path)?)
    }

    /// Parse a births table from any CSV source
    pub fn from_reader(reader: impl Read) -> Result<BirthRegistry, CatalogError> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(CatalogError::MissingColumn(column));
            }
        }

        let mut entries = Vec::new();
        for row in csv_reader.deserialize() {
            let entry: Territory = row?;
            entries.push(entry);
        }
        Self::new(entries)
    }

    /// The births table shipped with the crate (`data/naissances.csv`)
    pub fn baseline() -> Result<BirthRegistry, CatalogError> {
        Self::from_reader(BASELINE_CSV.as_bytes())
    }

    /// All territories, in table order
    pub fn territories(&self) -> &[Territory] {
        &self.entries
    }

    /// Birth count for one territory
    pub fn count(&self, territory: &str) -> Result<f64, LookupError> {
        self.index
            .get(territory)
            .map(|&i| self.entries[i].births)
            .ok_or_else(|| LookupError::UnknownTerritory(territory.to_string()))
    }
}
