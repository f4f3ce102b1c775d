//! docdata: turn a documentation parser's record dump into normalized
//! JSON data artifacts.
//!
//! Reads a dump (a JSON array of record objects) from a file or stdin,
//! keeps the documented entities, normalizes each one, and writes two
//! artifacts: a longname-keyed data map (`data.js`, a CommonJS module)
//! and a sorted name index (`names.json`).

mod emit;
mod model;
mod normalize;
mod params;
mod pipeline;
mod store;
mod tags;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docdata",
    about = "Generate documentation data artifacts from a parser record dump"
)]
struct Cli {
    /// Record dump file (JSON array). If omitted, reads from stdin.
    dump: Option<PathBuf>,

    /// Output path for the documentation data map
    #[arg(long, default_value = "../data/data.js")]
    data: PathBuf,

    /// Output path for the sorted name index
    #[arg(long, default_value = "../data/names.json")]
    names: PathBuf,

    /// Command named in the generated-file banner
    #[arg(long, default_value = "docdata")]
    regen_command: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let input = match &cli.dump {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            input
        }
    };

    let store = store::RecordStore::from_json(&input)?;
    let docs = pipeline::build_doc_set(store);

    for path in [&cli.data, &cli.names] {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create output directory: {}", parent.display())
                })?;
            }
        }
    }

    let config = emit::EmitConfig {
        data_path: cli.data,
        names_path: cli.names,
        regen_command: cli.regen_command,
    };
    emit::write_artifacts(&docs, &config)
}
