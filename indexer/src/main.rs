use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use search_core::{build_index, normalize, top_k, DocumentList, KeywordIndex, NoiseWords, DEFAULT_LIMIT};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build an in-memory keyword index and run two-keyword OR queries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Sources {
    /// File listing the documents to index, whitespace separated
    #[arg(long, conflicts_with = "docs_dir")]
    docs: Option<PathBuf>,
    /// Index every .txt file under this directory instead
    #[arg(long)]
    docs_dir: Option<PathBuf>,
    /// File of noise words that are never indexed
    #[arg(long)]
    noise: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Top documents containing either keyword
    Search {
        #[command(flatten)]
        sources: Sources,
        kw1: String,
        kw2: String,
        /// Maximum number of documents returned
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Occurrence list of a keyword, in index order
    Show {
        #[command(flatten)]
        sources: Sources,
        keyword: String,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Document and keyword counts
    Stats {
        #[command(flatten)]
        sources: Sources,
    },
}

#[derive(Serialize)]
struct SearchOutput<'a> {
    kw1: &'a str,
    kw2: &'a str,
    documents: Option<Vec<&'a str>>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { sources, kw1, kw2, limit, json } => {
            let (index, noise) = load_index(&sources)?;
            let kw1 = query_keyword(&kw1, &noise);
            let kw2 = query_keyword(&kw2, &noise);
            let documents = top_k(&index, &kw1, &kw2, limit);
            if json {
                let out = SearchOutput { kw1: &kw1, kw2: &kw2, documents };
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                match documents {
                    Some(docs) => docs.iter().for_each(|d| println!("{d}")),
                    None => println!("no matches"),
                }
            }
        }
        Commands::Show { sources, keyword, json } => {
            let (index, noise) = load_index(&sources)?;
            let keyword = query_keyword(&keyword, &noise);
            let occs = index.occurrences(&keyword).unwrap_or_default();
            if json {
                println!("{}", serde_json::to_string_pretty(occs)?);
            } else {
                for o in occs {
                    println!("({},{})", o.document, o.frequency);
                }
            }
        }
        Commands::Stats { sources } => {
            let (index, _) = load_index(&sources)?;
            println!("documents: {}", index.document_count());
            println!("keywords: {}", index.len());
        }
    }
    Ok(())
}

fn load_index(sources: &Sources) -> Result<(KeywordIndex, NoiseWords)> {
    let noise = match &sources.noise {
        Some(path) => NoiseWords::load(path).with_context(|| format!("loading noise words from {}", path.display()))?,
        None => NoiseWords::new(),
    };
    let list = match (&sources.docs, &sources.docs_dir) {
        (Some(path), _) => DocumentList::load(path).with_context(|| format!("loading document list {}", path.display()))?,
        (None, Some(dir)) => DocumentList::from_dir(dir).with_context(|| format!("scanning {}", dir.display()))?,
        (None, None) => bail!("one of --docs or --docs-dir is required"),
    };
    tracing::info!(documents = list.len(), noise_words = noise.len(), "building index");
    let index = build_index(list.documents(), noise.clone()).context("index build failed")?;
    Ok((index, noise))
}

/// Query keywords go through the same normalization as document tokens. A rejected
/// keyword keeps its lowercase form, which never matches an indexed keyword.
fn query_keyword(raw: &str, noise: &NoiseWords) -> String {
    normalize(raw, noise).unwrap_or_else(|| raw.trim().to_lowercase())
}
