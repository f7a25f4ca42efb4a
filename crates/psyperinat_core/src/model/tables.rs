//! Cost breakdown tables produced by the model
//!
//! `CostTable` is tagged by a scale marker (`PerCase` or `PerBirth`) so the
//! aggregation pipeline ordering is enforced by the type system: prevalence
//! weighting turns a `CostTable<PerCase>` into a `CostTable<PerBirth>`, and
//! only the per-birth table can be summed across conditions.

use std::marker::PhantomData;
use std::ops::{Add, AddAssign};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::dimensions::{Condition, Sector, Sufferer};
use crate::error::LookupError;

/// Scale a cost table is expressed at
pub trait Scale {
    /// Display label, e.g. "par cas"
    const LABEL: &'static str;
}

/// Expected cost given a birth is affected by the condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerCase;

impl Scale for PerCase {
    const LABEL: &'static str = "par cas";
}

/// Expected cost per birth, affected or not (per-case × prevalence)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerBirth;

impl Scale for PerBirth {
    const LABEL: &'static str = "par naissance";
}

/// Currency amounts broken down by payer sector, indexed by `Sector::ALL`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SectorAmounts([f64; 3]);

impl SectorAmounts {
    pub const ZERO: SectorAmounts = SectorAmounts([0.0; 3]);

    /// A breakdown with a single non-zero sector
    pub fn single(sector: Sector, amount: f64) -> SectorAmounts {
        let mut amounts = [0.0; 3];
        amounts[sector.index()] = amount;
        SectorAmounts(amounts)
    }

    pub fn get(&self, sector: Sector) -> f64 {
        self.0[sector.index()]
    }

    /// Sum across all three sectors
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn scaled(&self, factor: f64) -> SectorAmounts {
        SectorAmounts(self.0.map(|a| a * factor))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Sector, f64)> + '_ {
        Sector::ALL.iter().map(|&s| (s, self.get(s)))
    }
}

impl Add for SectorAmounts {
    type Output = SectorAmounts;

    fn add(self, rhs: SectorAmounts) -> SectorAmounts {
        SectorAmounts([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
        ])
    }
}

impl AddAssign for SectorAmounts {
    fn add_assign(&mut self, rhs: SectorAmounts) {
        *self = *self + rhs;
    }
}

/// One named cost component for one (condition, sufferer) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostLineItem {
    pub label: String,
    pub condition: Condition,
    pub sufferer: Sufferer,
    pub amounts: SectorAmounts,
}

/// Aggregated costs for one condition, both sufferers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConditionRow {
    pub condition: Condition,
    pub mere: SectorAmounts,
    pub bebe: SectorAmounts,
}

impl ConditionRow {
    pub fn sufferer(&self, sufferer: Sufferer) -> SectorAmounts {
        match sufferer {
            Sufferer::Mere => self.mere,
            Sufferer::Bebe => self.bebe,
        }
    }

    /// Grand total across both sufferers and all sectors
    pub fn total(&self) -> f64 {
        self.mere.total() + self.bebe.total()
    }

    /// Amount borne by one sector, both sufferers combined
    pub fn sector(&self, sector: Sector) -> f64 {
        self.mere.get(sector) + self.bebe.get(sector)
    }

    fn scaled(&self, factor: f64) -> ConditionRow {
        ConditionRow {
            condition: self.condition,
            mere: self.mere.scaled(factor),
            bebe: self.bebe.scaled(factor),
        }
    }
}

/// The element-wise sum of all condition rows of a per-birth table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombinedRow {
    pub mere: SectorAmounts,
    pub bebe: SectorAmounts,
}

impl CombinedRow {
    pub const LABEL: &'static str = "Toutes maladies confondues";

    pub fn total(&self) -> f64 {
        self.mere.total() + self.bebe.total()
    }

    pub fn sector(&self, sector: Sector) -> f64 {
        self.mere.get(sector) + self.bebe.get(sector)
    }
}

/// Per-condition, per-sufferer, per-sector cost breakdown at scale `S`,
/// with the individual line items it was aggregated from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostTable<S> {
    rows: Vec<ConditionRow>,
    items: Vec<CostLineItem>,
    #[serde(skip)]
    _scale: PhantomData<S>,
}

impl<S: Scale> CostTable<S> {
    /// Aggregate line items into condition rows. Rows appear in
    /// `Condition::ALL` order, only for conditions with at least one item.
    pub(crate) fn from_items(items: Vec<CostLineItem>) -> CostTable<S> {
        let mut rows = Vec::new();
        for &condition in Condition::ALL.iter() {
            let mut mere = SectorAmounts::ZERO;
            let mut bebe = SectorAmounts::ZERO;
            let mut present = false;
            for item in items.iter().filter(|i| i.condition == condition) {
                present = true;
                match item.sufferer {
                    Sufferer::Mere => mere += item.amounts,
                    Sufferer::Bebe => bebe += item.amounts,
                }
            }
            if present {
                rows.push(ConditionRow {
                    condition,
                    mere,
                    bebe,
                });
            }
        }
        CostTable {
            rows,
            items,
            _scale: PhantomData,
        }
    }

    pub fn rows(&self) -> &[ConditionRow] {
        &self.rows
    }

    pub fn items(&self) -> &[CostLineItem] {
        &self.items
    }

    pub fn row(&self, condition: Condition) -> Option<&ConditionRow> {
        self.rows.iter().find(|r| r.condition == condition)
    }

    /// Fraction of the table's total cost borne by each sector.
    ///
    /// An all-zero table yields all-zero fractions rather than NaN.
    pub fn repartition(&self) -> RepartitionTable {
        let total: f64 = self.rows.iter().map(|r| r.total()).sum();
        if total == 0.0 {
            return RepartitionTable::ZERO;
        }
        let mut fractions = [0.0; 3];
        for (i, &sector) in Sector::ALL.iter().enumerate() {
            let sector_total: f64 = self.rows.iter().map(|r| r.sector(sector)).sum();
            fractions[i] = sector_total / total;
        }
        RepartitionTable { fractions }
    }
}

impl CostTable<PerCase> {
    /// Weight each condition's entire row by that condition's prevalence
    /// fraction, turning per-case costs into expected costs per birth.
    ///
    /// Every condition present in the table must have a prevalence entry.
    pub fn scale_to_births(
        &self,
        prevalences: &FxHashMap<Condition, f64>,
    ) -> Result<CostTable<PerBirth>, LookupError> {
        let mut rows = Vec::with_capacity(self.rows.len());
        let mut items = Vec::with_capacity(self.items.len());
        for row in &self.rows {
            let prevalence = *prevalences
                .get(&row.condition)
                .ok_or(LookupError::UnknownCondition(row.condition))?;
            rows.push(row.scaled(prevalence));
        }
        for item in &self.items {
            let prevalence = *prevalences
                .get(&item.condition)
                .ok_or(LookupError::UnknownCondition(item.condition))?;
            items.push(CostLineItem {
                label: item.label.clone(),
                condition: item.condition,
                sufferer: item.sufferer,
                amounts: item.amounts.scaled(prevalence),
            });
        }
        Ok(CostTable {
            rows,
            items,
            _scale: PhantomData,
        })
    }
}

impl CostTable<PerBirth> {
    /// Element-wise sum of all condition rows.
    ///
    /// Only defined on the per-birth table: per-case rows of conditions with
    /// differing prevalences are not population-comparable, so summing them
    /// would be meaningless.
    pub fn total_across_conditions(&self) -> CombinedRow {
        let mut mere = SectorAmounts::ZERO;
        let mut bebe = SectorAmounts::ZERO;
        for row in &self.rows {
            mere += row.mere;
            bebe += row.bebe;
        }
        CombinedRow { mere, bebe }
    }
}

/// Fraction of total cost attributable to each payer sector.
///
/// Fractions sum to 1 up to floating-point tolerance (or are all zero for
/// an empty table).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepartitionTable {
    fractions: [f64; 3],
}

impl RepartitionTable {
    pub const ZERO: RepartitionTable = RepartitionTable { fractions: [0.0; 3] };

    pub fn fraction(&self, sector: Sector) -> f64 {
        self.fractions[sector.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Sector, f64)> + '_ {
        Sector::ALL.iter().map(|&s| (s, self.fraction(s)))
    }
}
