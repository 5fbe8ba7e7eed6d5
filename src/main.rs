// src/main.rs
use clap::{Parser, ValueEnum};
use std::collections::BTreeMap;
use std::path::PathBuf;
use strategy_extractor::dashboard::{DashboardLoader, INSIGHTS_MARKER, PLAYBOOK_MARKER, TABLE_ROLES};
use strategy_extractor::dataset::StaticDataset;
use strategy_extractor::extractors::BulletExtractor;
use strategy_extractor::storage::StorageManager;
use strategy_extractor::utils::{self, AppError};
use strategy_extractor::ExtractionCache;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Source {
    /// Extract tables and bullets from the DOCX strategy document
    Docx,
    /// Emit the built-in strategy dataset
    Static,
}

/// Command Line Interface for the SCM strategy data extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Where the dashboard data comes from
    #[arg(long, value_enum, default_value_t = Source::Docx)]
    source: Source,

    /// Path to the strategy document
    #[arg(short, long, default_value = "refer.docx")]
    docx: PathBuf,

    /// Output directory for extracted content
    #[arg(short, long, default_value = "./output")]
    output_dir: String,

    /// Minimum number of tables the document must contain (default: 6)
    #[arg(long)]
    min_tables: Option<usize>,

    /// Section marker to collect bullets from (repeatable)
    #[arg(short, long = "section")]
    sections: Vec<String>,

    /// Regex for headings that close a bullet section
    #[arg(long)]
    heading_pattern: Option<String>,
}

/// Table minimum from the command line, then `MIN_TABLES`, then the number of table roles.
/// Values below the number of table roles are rejected.
fn resolve_min_tables(arg: Option<usize>, env: Option<&str>) -> Result<usize, AppError> {
    let min_tables = if let Some(n) = arg {
        tracing::debug!("Using min tables {} from command-line argument", n);
        n
    } else if let Some(raw) = env {
        let n = raw
            .trim()
            .parse::<usize>()
            .map_err(|_| AppError::Config(format!("MIN_TABLES must be a number, got '{}'", raw)))?;
        tracing::debug!("Using min tables {} from MIN_TABLES", n);
        n
    } else {
        tracing::debug!("Using default min tables {}", TABLE_ROLES.len());
        TABLE_ROLES.len()
    };

    if min_tables < TABLE_ROLES.len() {
        return Err(AppError::Config(format!(
            "min tables must be at least {} (one per dashboard table role), got {}",
            TABLE_ROLES.len(),
            min_tables
        )));
    }
    Ok(min_tables)
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Initialize storage
    let storage = StorageManager::new(&args.output_dir)?;

    if args.source == Source::Static {
        let path = storage.save_static_dataset(StaticDataset::get())?;
        tracing::info!("Static dataset written to {}", path.display());
        return Ok(());
    }

    // 4. Configure extraction
    let min_tables = resolve_min_tables(args.min_tables, std::env::var("MIN_TABLES").ok().as_deref())?;
    let extractor = match &args.heading_pattern {
        Some(pattern) => BulletExtractor::with_heading_pattern(pattern)?,
        None => BulletExtractor::default(),
    };
    let markers = if args.sections.is_empty() {
        vec![INSIGHTS_MARKER.to_string(), PLAYBOOK_MARKER.to_string()]
    } else {
        args.sections.clone()
    };

    // 5. Load and validate the dashboard data; a table shortfall halts here
    let cache = ExtractionCache::global();
    let dashboard = DashboardLoader::new(cache)
        .with_min_tables(min_tables)
        .with_bullet_extractor(extractor.clone())
        .load(&args.docx)?;
    tracing::info!(
        "Dashboard ready: {} competitors, {} insights, {} playbook steps{}",
        dashboard.competitors.len(),
        dashboard.insights.len(),
        dashboard.playbook.len(),
        if dashboard.playbook_is_default { " (default)" } else { "" }
    );

    // 6. Collect the raw extraction results (served from the cache)
    let tables = cache.tables(&args.docx)?;
    let mut bullets = BTreeMap::new();
    for marker in &markers {
        let items = cache.bullets_with(&extractor, &args.docx, marker)?;
        if items.is_empty() {
            tracing::warn!("No bullets found for section marker '{}'", marker);
        }
        bullets.insert(marker.clone(), items.to_vec());
    }

    // 7. Save everything
    storage.save_tables(&args.docx, &tables)?;
    storage.save_bullets(&args.docx, &bullets)?;
    storage.save_dashboard(&args.docx, &dashboard)?;
    storage.save_extraction_metadata(&args.docx, &tables, &bullets)?;

    tracing::info!("Processing finished. {} tables, {} bullet lists", tables.len(), bullets.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_tables_resolution_order() {
        assert_eq!(resolve_min_tables(Some(8), Some("7")).unwrap(), 8);
        assert_eq!(resolve_min_tables(None, Some(" 7 ")).unwrap(), 7);
        assert_eq!(resolve_min_tables(None, None).unwrap(), 6);
    }

    #[test]
    fn test_non_numeric_env_is_config_error() {
        let err = resolve_min_tables(None, Some("six")).unwrap_err();
        assert!(matches!(err, AppError::Config(ref msg) if msg.contains("'six'")));
    }

    #[test]
    fn test_min_tables_below_roles_is_rejected() {
        assert!(matches!(resolve_min_tables(Some(3), None), Err(AppError::Config(_))));
        assert!(matches!(resolve_min_tables(None, Some("5")), Err(AppError::Config(_))));
    }

    #[test]
    fn test_cli_parses_repeated_sections() {
        let args = Args::parse_from([
            "strategy-extractor",
            "--source",
            "static",
            "--section",
            "Section D",
            "--section",
            "E4. Pilot Playbook",
            "--min-tables",
            "7",
        ]);
        assert_eq!(args.source, Source::Static);
        assert_eq!(args.sections, vec!["Section D", "E4. Pilot Playbook"]);
        assert_eq!(args.min_tables, Some(7));
        assert_eq!(args.docx, PathBuf::from("refer.docx"));
    }
}
