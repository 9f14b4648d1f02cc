use unimatch::catalog::Catalog;
use unimatch::cli::{Cli, Commands, ConfigAction};
use unimatch::config::Config;
use unimatch::engine::RecommendationEngine;
use unimatch::error::{Result, UnimatchError};
use unimatch::profile::{Profile, Query};
use unimatch::ranking::RankTable;
use unimatch::results::{ResultRow, ResultSet, SortMode};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Initialize logging
    init_logging(cli.verbose);

    // Handle commands
    match cli.command {
        Commands::Recommend {
            query,
            profile,
            catalog,
            rankings,
            sort,
            all,
            json,
        } => {
            cmd_recommend(cli.config, query, profile, catalog, rankings, &sort, all, json)?;
        }
        Commands::Validate { catalog } => {
            cmd_validate(&catalog)?;
        }
        Commands::Config { action } => {
            cmd_config(cli.config, action)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("unimatch=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("unimatch=info"))
    };

    fmt().with_env_filter(filter).with_target(false).init();
}

#[allow(clippy::too_many_arguments)]
fn cmd_recommend(
    config_path: Option<PathBuf>,
    query_text: Option<String>,
    profile_path: Option<PathBuf>,
    catalog_path: Option<PathBuf>,
    rankings_path: Option<PathBuf>,
    sort: &str,
    all: bool,
    json: bool,
) -> Result<()> {
    let config = load_config(config_path)?;

    let courses_file = catalog_path.unwrap_or_else(|| config.catalog.courses_file.clone());
    let rankings_file = rankings_path.unwrap_or_else(|| config.catalog.rankings_file.clone());

    let catalog = Catalog::load(&courses_file)?;
    let ranks = RankTable::load(&rankings_file);
    let engine = RecommendationEngine::new(catalog, ranks, config.engine.clone())?;

    let mut results = match &profile_path {
        Some(path) => {
            let profile = read_profile(path)?;
            engine.recommend(&profile)
        }
        None => {
            let query = Query::from_text(query_text.as_deref().unwrap_or(""));
            engine.recommend_query(&query)
        }
    };

    if sort == "universities" {
        results.sort_by(SortMode::ByBestUniversities);
    }

    if json {
        print_json(&results)?;
    } else {
        print_batches(&mut results, all);
    }

    Ok(())
}

fn cmd_validate(path: &Path) -> Result<()> {
    let catalog = Catalog::load(path)?;
    if catalog.is_empty() {
        return Err(UnimatchError::EmptyCatalog);
    }

    let unknown_tariffs = catalog
        .courses()
        .iter()
        .filter(|c| c.tariff_points.is_none())
        .count();

    println!("✓ Catalog is valid");
    println!("  Courses: {}", catalog.len());
    println!("  Courses without parsable tariff points: {}", unknown_tariffs);

    Ok(())
}

fn cmd_config(config_path: Option<PathBuf>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = load_config(config_path)?;
            let json = serde_json::to_string_pretty(&config).map_err(|e| UnimatchError::Json {
                source: e,
                context: "Failed to serialize config".to_string(),
            })?;
            println!("{}", json);
        }
        ConfigAction::Validate { file } => {
            let path = match file {
                Some(path) => path,
                None => Config::default_path()?,
            };
            let config = Config::load(&path)?;
            println!("✓ Configuration is valid");
            println!("  Schema version: {}", config.meta.schema_version);
        }
        ConfigAction::Init { force } => {
            let path = Config::default_path()?;

            if path.exists() && !force {
                println!("Configuration file already exists at: {}", path.display());
                println!("Use --force to overwrite");
                return Ok(());
            }

            // Create parent directory
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| UnimatchError::Io {
                    source: e,
                    context: format!("Failed to create config directory: {:?}", parent),
                })?;
            }

            let config = Config::default();
            config.save(&path)?;

            println!("✓ Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

fn load_config(config_path: Option<PathBuf>) -> Result<Config> {
    let path = match config_path {
        Some(path) => path,
        None => Config::default_path()?,
    };

    if !path.exists() {
        tracing::warn!(
            "Config file not found, using defaults. Run 'unimatch config init' to create one."
        );
        return Ok(Config::default());
    }

    Config::load(&path)
}

fn read_profile(path: &Path) -> Result<Profile> {
    let content = std::fs::read_to_string(path).map_err(|e| UnimatchError::Io {
        source: e,
        context: format!("Failed to read profile file: {:?}", path),
    })?;
    serde_json::from_str(&content).map_err(|e| UnimatchError::Json {
        source: e,
        context: format!("Failed to parse profile file: {:?}", path),
    })
}

fn print_json(results: &ResultSet) -> Result<()> {
    let json = serde_json::to_string_pretty(results.rows()).map_err(|e| UnimatchError::Json {
        source: e,
        context: "Failed to serialize results".to_string(),
    })?;
    println!("{}", json);
    Ok(())
}

fn print_batches(results: &mut ResultSet, all: bool) {
    if results.is_empty() {
        println!("No matching courses found.");
        return;
    }

    loop {
        for row in results.next_batch() {
            print_row(row);
        }
        if !all || results.is_exhausted() {
            break;
        }
    }

    if !results.is_exhausted() {
        println!(
            "Showing {} of {} results. Re-run with --all for the full set.",
            results.delivered(),
            results.len()
        );
    }
}

fn print_row(row: &ResultRow) {
    println!("{} at {} ({})", row.title, row.university, row.qualification);
    println!(
        "  Score: {:.2}  Rank: {}  Duration: {}  Mode: {}",
        row.score, row.rank_label, row.duration, row.study_mode
    );
    if let Some(points) = row.tariff_points {
        println!("  Tariff points required: {}", points);
    }
    println!("  {}", row.explanation);
    println!("  {}", row.url);
    println!();
}
