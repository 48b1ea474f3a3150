use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lse_core::source::{load_document_list, load_stop_words};
use lse_core::tokenizer::normalize;
use lse_core::{build_index, FsSource, KeywordIndex, Occurrence, StopWords, DEFAULT_LIMIT};
use serde::Serialize;

use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build a keyword index over a document list and query it", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Args)]
pub struct Corpus {
    /// File listing one document per line; names resolve relative to it
    #[arg(long, default_value = "docs.txt")]
    pub docs: PathBuf,
    /// Stop-word file, one word per line (built-in English list if omitted)
    #[arg(long)]
    pub noise: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank documents containing either keyword
    Search {
        #[command(flatten)]
        corpus: Corpus,
        /// Maximum number of documents to print
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
        kw1: String,
        kw2: String,
    },
    /// Print every keyword with its ranked occurrences
    Dump {
        #[command(flatten)]
        corpus: Corpus,
        /// Emit JSON instead of plain text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show the keyword form of each token, or `-` when it is rejected
    Keyword {
        #[arg(long)]
        noise: Option<PathBuf>,
        #[arg(required = true)]
        tokens: Vec<String>,
    },
}

#[derive(Serialize)]
struct KeywordEntry<'a> {
    keyword: &'a str,
    occurrences: &'a [Occurrence],
}

/// Executes one command, writing its report to `out`.
pub fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    match cli.command {
        Commands::Search { corpus, limit, kw1, kw2 } => {
            let index = load_index(&corpus)?;
            match index.top_matches(&kw1.to_lowercase(), &kw2.to_lowercase(), limit) {
                Some(docs) => {
                    for doc in docs {
                        writeln!(out, "{doc}")?;
                    }
                }
                None => writeln!(out, "no result")?,
            }
            Ok(())
        }
        Commands::Dump { corpus, json } => {
            let index = load_index(&corpus)?;
            dump(&index, json, out)
        }
        Commands::Keyword { noise, tokens } => {
            let stop_words = stop_words(noise.as_deref())?;
            for token in tokens {
                let word = normalize(&token, &stop_words);
                writeln!(out, "{token}\t{}", word.as_deref().unwrap_or("-"))?;
            }
            Ok(())
        }
    }
}

fn stop_words(noise: Option<&Path>) -> Result<StopWords> {
    match noise {
        Some(path) => load_stop_words(path).context("loading stop words"),
        None => Ok(StopWords::english()),
    }
}

fn load_index(corpus: &Corpus) -> Result<KeywordIndex> {
    let stop_words = stop_words(corpus.noise.as_deref())?;
    let docs = load_document_list(&corpus.docs).context("loading document list")?;
    let root = corpus.docs.parent().unwrap_or_else(|| Path::new("."));
    tracing::info!(num_docs = docs.len(), stop_words = stop_words.len(), "building index");
    build_index(&FsSource::new(root), &docs, stop_words).context("building index")
}

fn dump(index: &KeywordIndex, json: bool, out: &mut dyn Write) -> Result<()> {
    let entries: Vec<KeywordEntry> = index
        .keywords()
        .into_iter()
        .filter_map(|keyword| index.get(keyword).map(|occurrences| KeywordEntry { keyword, occurrences }))
        .collect();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
        return Ok(());
    }
    for entry in entries {
        let ranked: Vec<String> = entry
            .occurrences
            .iter()
            .map(|occ| format!("({},{})", occ.document, occ.frequency))
            .collect();
        writeln!(out, "{} {}", entry.keyword, ranked.join(" "))?;
    }
    Ok(())
}
