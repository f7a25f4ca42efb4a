mod dimensions;
mod tables;

pub use dimensions::{Category, Condition, Sector, Sufferer};
pub use tables::{
    CombinedRow, ConditionRow, CostLineItem, CostTable, PerBirth, PerCase, RepartitionTable, Scale,
    SectorAmounts,
};
