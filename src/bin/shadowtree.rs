//! Shadowtree CLI — build and search per-author shadow trees from a catalog file.
//!
//! Usage:
//!   shadowtree build <target> <toc-file> [--config path] [--output path]
//!   shadowtree find <target> <toc-file> [segment...] [--config path]
//!   shadowtree titles <toc-file>
//!   shadowtree locate <toc-file> <hebrew-label>

use clap::{Parser, Subcommand};
use serde::Serialize;
use shadowtree::{
    category_path, load_toc, ClassifierConfig, Classifier, PathQuery, ShadowForest, TitleIndex,
    TocNode,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "shadowtree",
    version,
    about = "Per-author shadow trees of commentaries and translations"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the shadow forest for a root text and print it as JSON
    Build {
        /// Root text the works depend on (e.g. Genesis)
        target: String,
        /// Catalog table of contents (JSON)
        toc: PathBuf,
        /// Classifier rules (YAML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Write the forest here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// List the authors with a work at an exact path
    Find {
        /// Root text the works depend on (e.g. Genesis)
        target: String,
        /// Catalog table of contents (JSON)
        toc: PathBuf,
        /// Path segments; defaults to Tanakh / Torah / <target>
        segments: Vec<String>,
        /// Classifier rules (YAML)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the Hebrew → English title map
    Titles {
        /// Catalog table of contents (JSON)
        toc: PathBuf,
    },
    /// Print the category path of a node by its Hebrew label
    Locate {
        /// Catalog table of contents (JSON)
        toc: PathBuf,
        /// Hebrew label to look for
        label: String,
    },
}

/// Default config location (~/.config/shadowtree/config.yaml)
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("shadowtree").join("config.yaml"))
}

fn load_config(path: Option<PathBuf>) -> Result<ClassifierConfig, String> {
    match path {
        Some(path) => ClassifierConfig::load(&path)
            .map_err(|e| format!("Failed to load config '{}': {}", path.display(), e)),
        None => match default_config_path().filter(|p| p.is_file()) {
            Some(path) => ClassifierConfig::load(&path)
                .map_err(|e| format!("Failed to load config '{}': {}", path.display(), e)),
            None => Ok(ClassifierConfig::default()),
        },
    }
}

fn open_toc(path: &Path) -> Result<Vec<TocNode>, String> {
    load_toc(path).map_err(|e| format!("Failed to read catalog '{}': {}", path.display(), e))
}

fn build_forest(
    target: &str,
    toc: &Path,
    config: Option<PathBuf>,
) -> Result<ShadowForest, String> {
    let config = load_config(config)?;
    let toc = open_toc(toc)?;
    Ok(Classifier::new(config).build(&toc, target))
}

fn print_json<T: Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_build(
    target: &str,
    toc: &Path,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
) -> i32 {
    let forest = match build_forest(target, toc, config) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let Some(output) = output else {
        return print_json(&forest);
    };
    let written = serde_json::to_string_pretty(&forest)
        .map_err(|e| e.to_string())
        .and_then(|json| std::fs::write(&output, json).map_err(|e| e.to_string()));
    match written {
        Ok(()) => {
            println!(
                "Wrote {} authors ({} works) to {}",
                forest.len(),
                forest.terminal_count(),
                output.display()
            );
            0
        }
        Err(e) => {
            eprintln!("Error: cannot write '{}': {}", output.display(), e);
            1
        }
    }
}

fn cmd_find(target: &str, toc: &Path, segments: Vec<String>, config: Option<PathBuf>) -> i32 {
    let forest = match build_forest(target, toc, config) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let query = if segments.is_empty() {
        PathQuery::torah_book(target)
    } else {
        PathQuery::new(segments)
    };
    print_json(&query.execute(&forest))
}

fn cmd_titles(toc: &Path) -> i32 {
    match open_toc(toc) {
        Ok(toc) => print_json(TitleIndex::build(&toc).as_map()),
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_locate(toc: &Path, label: &str) -> i32 {
    let toc = match open_toc(toc) {
        Ok(toc) => toc,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    match category_path(&toc, label) {
        Some(path) => print_json(&path),
        None => {
            eprintln!("Error: '{}' not found in catalog", label);
            1
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Build {
            target,
            toc,
            config,
            output,
        } => cmd_build(&target, &toc, config, output),
        Commands::Find {
            target,
            toc,
            segments,
            config,
        } => cmd_find(&target, &toc, segments, config),
        Commands::Titles { toc } => cmd_titles(&toc),
        Commands::Locate { toc, label } => cmd_locate(&toc, &label),
    };
    std::process::exit(code);
}
