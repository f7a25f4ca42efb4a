mod format;
mod logging;
mod render;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, bail};
use rustc_hash::FxHashMap;

use psyperinat_core::{BirthRegistry, ParameterCatalog, evaluate};

/// Estimate the public cost of perinatal mental-health conditions
#[derive(Parser, Debug)]
#[command(name = "psyperinat")]
#[command(about = "Estime le coût des maladies psypérinatales")]
struct Args {
    /// Path to a parameter catalog CSV (default: the embedded baseline)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Path to a births table CSV (default: the embedded baseline)
    #[arg(long)]
    births: Option<PathBuf>,

    /// Territory whose birth count scales the total (see --territoires)
    #[arg(short, long)]
    territory: Option<String>,

    /// Explicit annual birth count, overrides --territory
    #[arg(long)]
    birth_count: Option<f64>,

    /// Override a parameter, e.g. --set "Prévalence de la dépression=15"
    #[arg(long = "set", value_name = "NOM=VALEUR")]
    set: Vec<String>,

    /// Print the parameter catalog grouped by category and exit
    #[arg(long)]
    list: bool,

    /// Print the known territories and their birth counts and exit
    #[arg(long)]
    territoires: bool,

    /// Print the raw evaluation result as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

/// Parse repeated `--set "NAME=VALUE"` pairs into an override map
fn parse_overrides(pairs: &[String]) -> Result<FxHashMap<String, f64>> {
    let mut overrides = FxHashMap::default();
    for pair in pairs {
        let Some((name, value)) = pair.split_once('=') else {
            bail!("--set attend NOM=VALEUR, reçu {pair:?}");
        };
        let name = name.trim();
        let value: f64 = value
            .trim()
            .parse()
            .wrap_err_with(|| format!("valeur invalide pour {name:?}"))?;
        if overrides.insert(name.to_string(), value).is_some() {
            bail!("paramètre {name:?} fourni deux fois");
        }
    }
    Ok(overrides)
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init_logging(&args.log_level);

    let catalog = match &args.catalog {
        Some(path) => ParameterCatalog::load(path)
            .wrap_err_with(|| format!("lecture du catalogue {}", path.display()))?,
        None => ParameterCatalog::baseline()?,
    };
    let births = match &args.births {
        Some(path) => BirthRegistry::load(path)
            .wrap_err_with(|| format!("lecture de la table des naissances {}", path.display()))?,
        None => BirthRegistry::baseline()?,
    };
    tracing::debug!(
        parameters = catalog.len(),
        territories = births.territories().len(),
        "tables chargées"
    );

    if args.list {
        print!("{}", render::render_catalog(&catalog));
        return Ok(());
    }
    if args.territoires {
        print!("{}", render::render_territories(&births));
        return Ok(());
    }

    let overrides = parse_overrides(&args.set)?;

    let birth_count = match (args.birth_count, &args.territory) {
        (Some(count), _) => Some(count),
        (None, Some(territory)) => Some(births.count(territory)?),
        (None, None) => {
            tracing::debug!("aucun territoire sélectionné, total ramené à une naissance");
            None
        }
    };

    let result = evaluate(&catalog, &overrides, birth_count)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render::render_report(&result));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn overrides_parse_names_with_spaces() {
        let pairs = vec!["Prévalence de la dépression=15.5".to_string()];
        let overrides = parse_overrides(&pairs).unwrap();
        assert_eq!(overrides["Prévalence de la dépression"], 15.5);
    }

    #[test]
    fn malformed_overrides_are_rejected() {
        assert!(parse_overrides(&["pas de signe égal".to_string()]).is_err());
        assert!(parse_overrides(&["a=xyz".to_string()]).is_err());
        assert!(parse_overrides(&["a=1".to_string(), "a=2".to_string()]).is_err());
    }

    #[test]
    fn catalog_files_round_trip_through_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"nom_variable,category,mini,maxi,val,step,unit,explication\n\
              Cout test,medical,0,10,5,1,\xe2\x82\xac,\n",
        )
        .unwrap();

        let catalog = ParameterCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.value("Cout test").unwrap(), 5.0);
    }
}
