// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! campus-search: query a JSON corpus of placement records from the terminal.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use campus_search::{check_index, Document, SearchConfig, SearchIndex};

mod cli;
use cli::display::{render_popular, render_results, render_statistics, render_suggestions};
use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => SearchConfig::from_file(path)?,
        None => SearchConfig::default(),
    };

    match &cli.command {
        Commands::Search(args) => {
            let index = load_corpus(&args.corpus, config)?;
            let query = args.to_query(index.config().default_page_size);
            let results = index.search(&query).context("invalid query")?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print!("{}", render_results(&results));
            }
        }
        Commands::Suggest {
            corpus,
            text,
            limit,
        } => {
            let index = load_corpus(corpus, config)?;
            print!("{}", render_suggestions(&index.suggestions(text, *limit)));
        }
        Commands::Popular { corpus, limit } => {
            let index = load_corpus(corpus, config)?;
            print!("{}", render_popular(&index.popular_terms(*limit)));
        }
        Commands::Stats { corpus, json } => {
            let index = load_corpus(corpus, config)?;
            let stats = index.statistics();
            if *json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print!("{}", render_statistics(&stats));
            }
        }
    }
    Ok(())
}

/// Read a JSON array of documents and index it.
fn load_corpus(path: &Path, config: SearchConfig) -> Result<SearchIndex> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read corpus {}", path.display()))?;
    let docs: Vec<Document> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse corpus {}", path.display()))?;

    let mut index = SearchIndex::with_config(config);
    index.add_documents(docs);
    check_index(&index).context("corpus produced an inconsistent index")?;
    info!(
        corpus = %path.display(),
        documents = index.len(),
        terms = index.term_count(),
        "corpus loaded"
    );
    Ok(index)
}

fn init_tracing(cli: &Cli) {
    let filter = match cli.verbose {
        0 => "warn",
        1 => "warn,campus_search=debug",
        _ => "debug,campus_search=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.log_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
