//! The three axes of the cost breakdown
//!
//! Every cost figure produced by the model is indexed by a condition
//! (which perinatal disorder), a sufferer (who bears the consequences)
//! and a payer sector (who bears the cost).

use serde::{Deserialize, Serialize};

/// One of the three perinatal mental-health conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Condition {
    Depression,
    Anxiete,
    Psychose,
}

impl Condition {
    pub const ALL: [Condition; 3] = [Condition::Depression, Condition::Anxiete, Condition::Psychose];

    /// Display label, as printed in result tables
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Depression => "Dépression",
            Condition::Anxiete => "Anxiété",
            Condition::Psychose => "Psychose",
        }
    }
}

/// The affected party a cost component is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sufferer {
    Mere,
    Bebe,
}

impl Sufferer {
    pub const ALL: [Sufferer; 2] = [Sufferer::Mere, Sufferer::Bebe];

    pub fn label(&self) -> &'static str {
        match self {
            Sufferer::Mere => "Mères",
            Sufferer::Bebe => "Bébés",
        }
    }
}

/// The payer sector bearing a cost component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    /// Health and social care system
    SanteSocial,
    /// Other public spending (child welfare, special education, justice)
    AutreSecteurPublic,
    /// Society at large (productivity losses, quality of life, deaths)
    SocieteEntiere,
}

impl Sector {
    pub const ALL: [Sector; 3] = [
        Sector::SanteSocial,
        Sector::AutreSecteurPublic,
        Sector::SocieteEntiere,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Sector::SanteSocial => "Santé & social",
            Sector::AutreSecteurPublic => "Autre secteur public",
            Sector::SocieteEntiere => "Société entière",
        }
    }

    /// Position in `Sector::ALL`, used to index `SectorAmounts`
    pub(crate) fn index(&self) -> usize {
        match self {
            Sector::SanteSocial => 0,
            Sector::AutreSecteurPublic => 1,
            Sector::SocieteEntiere => 2,
        }
    }
}

/// Catalog category a parameter belongs to: one per (condition, sufferer)
/// pair, plus the two cross-cutting groups of unit costs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    DepressionMere,
    DepressionBebe,
    AnxieteMere,
    AnxieteBebe,
    PsychoseMere,
    PsychoseBebe,
    Medical,
    Economique,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::DepressionMere,
        Category::DepressionBebe,
        Category::AnxieteMere,
        Category::AnxieteBebe,
        Category::PsychoseMere,
        Category::PsychoseBebe,
        Category::Medical,
        Category::Economique,
    ];

    /// Parse the tag used in the catalog CSV's `category` column
    pub fn from_tag(tag: &str) -> Option<Category> {
        match tag {
            "depression_mere" => Some(Category::DepressionMere),
            "depression_bebe" => Some(Category::DepressionBebe),
            "anxiete_mere" => Some(Category::AnxieteMere),
            "anxiete_bebe" => Some(Category::AnxieteBebe),
            "psychose_mere" => Some(Category::PsychoseMere),
            "psychose_bebe" => Some(Category::PsychoseBebe),
            "medical" => Some(Category::Medical),
            "economique" => Some(Category::Economique),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Category::DepressionMere => "depression_mere",
            Category::DepressionBebe => "depression_bebe",
            Category::AnxieteMere => "anxiete_mere",
            Category::AnxieteBebe => "anxiete_bebe",
            Category::PsychoseMere => "psychose_mere",
            Category::PsychoseBebe => "psychose_bebe",
            Category::Medical => "medical",
            Category::Economique => "economique",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::DepressionMere => "Dépression / Mère",
            Category::DepressionBebe => "Dépression / Bébé",
            Category::AnxieteMere => "Anxiété / Mère",
            Category::AnxieteBebe => "Anxiété / Bébé",
            Category::PsychoseMere => "Psychose / Mère",
            Category::PsychoseBebe => "Psychose / Bébé",
            Category::Medical => "Variables médicales",
            Category::Economique => "Variables économiques",
        }
    }

    /// The (condition, sufferer) pair for condition-specific categories;
    /// `None` for the cross-cutting `Medical` / `Economique` groups
    pub fn condition(&self) -> Option<(Condition, Sufferer)> {
        match self {
            Category::DepressionMere => Some((Condition::Depression, Sufferer::Mere)),
            Category::DepressionBebe => Some((Condition::Depression, Sufferer::Bebe)),
            Category::AnxieteMere => Some((Condition::Anxiete, Sufferer::Mere)),
            Category::AnxieteBebe => Some((Condition::Anxiete, Sufferer::Bebe)),
            Category::PsychoseMere => Some((Condition::Psychose, Sufferer::Mere)),
            Category::PsychoseBebe => Some((Condition::Psychose, Sufferer::Bebe)),
            Category::Medical | Category::Economique => None,
        }
    }
}
