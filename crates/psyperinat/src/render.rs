//! Plain-text rendering of evaluation results
//!
//! Mirrors the tables of the original interface: one recap table per scale
//! (per case, per birth), the compact headline figure, and the per-sector
//! repartition of the territory-wide total.

use psyperinat_core::{
    BirthRegistry, Category, CombinedRow, CostTable, EvaluationResult, ParameterCatalog, Scale,
    Sector, Sufferer,
};

use crate::format::{format_compact_eur, format_eur, format_pct};

/// Right-pad or left-pad cells into aligned columns. The first column is
/// left-aligned, numeric columns are right-aligned.
fn layout(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let render_row = |cells: &[String], out: &mut String| {
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            let pad = widths[i] - cell.chars().count();
            if i == 0 {
                out.push_str(cell);
                out.push_str(&" ".repeat(pad));
            } else {
                out.push_str(&" ".repeat(pad));
                out.push_str(cell);
            }
        }
        out.push('\n');
    };

    let header_cells: Vec<String> = header.iter().map(|h| h.to_string()).collect();
    render_row(&header_cells, &mut out);
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));
    out.push('\n');
    for row in rows {
        render_row(row, &mut out);
    }
    out
}

const COST_HEADER: [&str; 7] = [
    "Maladie",
    "Coût total",
    "Mères",
    "Bébés",
    "Santé & social",
    "Autre secteur public",
    "Société entière",
];

fn cost_row(label: &str, mere_total: f64, bebe_total: f64, sectors: [f64; 3]) -> Vec<String> {
    vec![
        label.to_string(),
        format_eur(mere_total + bebe_total),
        format_eur(mere_total),
        format_eur(bebe_total),
        format_eur(sectors[0]),
        format_eur(sectors[1]),
        format_eur(sectors[2]),
    ]
}

/// Render one cost table, with an optional combined row appended
fn render_cost_table<S: Scale>(table: &CostTable<S>, combined: Option<&CombinedRow>) -> String {
    let mut rows = Vec::new();
    for row in table.rows() {
        rows.push(cost_row(
            row.condition.label(),
            row.sufferer(Sufferer::Mere).total(),
            row.sufferer(Sufferer::Bebe).total(),
            [
                row.sector(Sector::SanteSocial),
                row.sector(Sector::AutreSecteurPublic),
                row.sector(Sector::SocieteEntiere),
            ],
        ));
    }
    if let Some(combined) = combined {
        rows.push(cost_row(
            CombinedRow::LABEL,
            combined.mere.total(),
            combined.bebe.total(),
            [
                combined.sector(Sector::SanteSocial),
                combined.sector(Sector::AutreSecteurPublic),
                combined.sector(Sector::SocieteEntiere),
            ],
        ));
    }
    layout(&COST_HEADER, &rows)
}

/// The full report printed after an evaluation
pub fn render_report(result: &EvaluationResult) -> String {
    let mut out = String::new();

    out.push_str(
        "Les coûts associés aux problèmes de santé mentale périnatale chaque année représentent :\n",
    );
    out.push_str(&format!(
        "\n    {}\n\n",
        format_compact_eur(result.population_total)
    ));
    out.push_str(&format!(
        "(coût par naissance : {}, pour {} naissances)\n\n",
        format_eur(result.combined.total()),
        format_eur(result.birth_count).trim_end_matches(" €"),
    ));

    out.push_str("Tableau récapitulatif du coût par cas (en €)\n\n");
    out.push_str(&render_cost_table(&result.per_case, None));
    out.push('\n');

    out.push_str("Tableau récapitulatif du coût par naissance (en €)\n\n");
    out.push_str(&render_cost_table(&result.per_birth, Some(&result.combined)));
    out.push('\n');

    out.push_str("Répartition des coûts par secteur payeur\n\n");
    for (sector, amount) in result.sector_amounts {
        out.push_str(&format!(
            "  {:<22} {:>16}  ({})\n",
            sector.label(),
            format_eur(amount),
            format_pct(result.repartition.fraction(sector)),
        ));
    }

    out
}

/// The catalog listing behind `--list`: every parameter grouped by
/// category, with bounds, default and explanation
pub fn render_catalog(catalog: &ParameterCatalog) -> String {
    let mut out = String::new();
    for category in Category::ALL {
        out.push_str(&format!("{}\n", category.label()));
        for p in catalog.params_in(category) {
            out.push_str(&format!(
                "  {} : {} {} (plage {} à {}, pas {})\n",
                p.name, p.current_value, p.unit, p.min, p.max, p.step
            ));
            if !p.explanation.is_empty() {
                out.push_str(&format!("      {}\n", p.explanation));
            }
        }
        out.push('\n');
    }
    out
}

/// The territory listing behind `--territoires`
pub fn render_territories(registry: &BirthRegistry) -> String {
    let rows: Vec<Vec<String>> = registry
        .territories()
        .iter()
        .map(|t| {
            vec![
                t.name.clone(),
                format_eur(t.births).trim_end_matches(" €").to_string(),
            ]
        })
        .collect();
    layout(&["Territoire", "Naissances par an"], &rows)
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashMap;

    use psyperinat_core::{ParameterCatalog, evaluate};

    use super::*;

    fn sample_result() -> EvaluationResult {
        let catalog = ParameterCatalog::baseline().unwrap();
        evaluate(&catalog, &FxHashMap::default(), Some(697_000.0)).unwrap()
    }

    #[test]
    fn report_contains_all_conditions_and_the_combined_row() {
        let report = render_report(&sample_result());

        for label in ["Dépression", "Anxiété", "Psychose", CombinedRow::LABEL] {
            assert!(report.contains(label), "report is missing {label:?}");
        }
        assert!(report.contains("par cas"));
        assert!(report.contains("par naissance"));
    }

    #[test]
    fn catalog_listing_groups_by_category() {
        let catalog = ParameterCatalog::baseline().unwrap();
        let listing = render_catalog(&catalog);

        assert!(listing.contains("Variables médicales"));
        assert!(listing.contains("Prévalence de la dépression"));
    }

    #[test]
    fn territory_listing_includes_every_territory() {
        let registry = BirthRegistry::baseline().unwrap();
        let listing = render_territories(&registry);

        for territory in registry.territories() {
            assert!(listing.contains(&territory.name));
        }
    }
}
