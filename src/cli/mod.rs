// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the campus-search command-line interface.
//!
//! Four subcommands, each loading a JSON corpus (an array of documents) into a
//! fresh index: `search` runs a full structured query, `suggest` looks up
//! "did you mean" terms, `popular` lists the most common tokens and `stats`
//! prints an index snapshot.

pub mod display;

use campus_search::{DateRange, Filters, Query, SortField, SortOrder, TypeFilter};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "campus-search",
    about = "Full-text search over campus placement records",
    version
)]
pub struct Cli {
    /// JSON file overriding scoring weights and page limits
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a query against a corpus and display the result page
    Search(SearchArgs),

    /// Suggest indexed terms resembling the first word of TEXT
    Suggest {
        /// Path to the corpus JSON file
        corpus: PathBuf,

        /// Text to find suggestions for
        text: String,

        #[arg(short, long, default_value = "5")]
        limit: usize,
    },

    /// List the tokens that appear in the most documents
    Popular {
        /// Path to the corpus JSON file
        corpus: PathBuf,

        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Print document and term counts
    Stats {
        /// Path to the corpus JSON file
        corpus: PathBuf,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
pub struct SearchArgs {
    /// Path to the corpus JSON file
    pub corpus: PathBuf,

    /// Free-text query. Quote a phrase to require it verbatim.
    pub query: String,

    /// Restrict to one document type (drive, student, company, application, job, resume)
    #[arg(long = "type", default_value = "all")]
    pub kind: TypeFilter,

    /// Location substring; repeat to accept any of several
    #[arg(long)]
    pub location: Vec<String>,

    /// Skill substring; repeat to accept any of several
    #[arg(long = "skill")]
    pub skills: Vec<String>,

    #[arg(long)]
    pub category: Vec<String>,

    #[arg(long)]
    pub status: Vec<String>,

    /// Earliest date, inclusive (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub from: Option<String>,

    /// Latest date, inclusive (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub to: Option<String>,

    #[arg(long, value_enum, default_value_t = SortArg::Relevance)]
    pub sort: SortArg,

    #[arg(long, value_enum, default_value_t = OrderArg::Desc)]
    pub order: OrderArg,

    /// 1-based page number
    #[arg(long, default_value = "1")]
    pub page: usize,

    /// Page size (defaults to the configured page size)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Relevance,
    Date,
    Title,
    Salary,
}

impl From<SortArg> for SortField {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Relevance => SortField::Relevance,
            SortArg::Date => SortField::Date,
            SortArg::Title => SortField::Title,
            SortArg::Salary => SortField::Salary,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Asc => SortOrder::Asc,
            OrderArg::Desc => SortOrder::Desc,
        }
    }
}

impl SearchArgs {
    /// Build the structured query these flags describe.
    ///
    /// `default_limit` applies when `--limit` is absent.
    pub fn to_query(&self, default_limit: usize) -> Query {
        let date_range = match (&self.from, &self.to) {
            (None, None) => None,
            (start, end) => Some(DateRange {
                start: start.clone(),
                end: end.clone(),
            }),
        };
        let filters = Filters {
            location: self.location.clone(),
            skills: self.skills.clone(),
            category: self.category.clone(),
            status: self.status.clone(),
            date_range,
            ..Filters::default()
        };
        Query::new(self.query.clone())
            .of_type(self.kind)
            .filters(filters)
            .sort(self.sort.into(), self.order.into())
            .page(self.page, self.limit.unwrap_or(default_limit))
    }
}
