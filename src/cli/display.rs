// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the campus-search CLI.
//!
//! Plain tables with a little color. OneDark for dark terminals, One Light for
//! light ones. Respects `NO_COLOR` and drops escapes entirely when stdout is not a
//! terminal, so piped output stays greppable.
//!
//! # Theme detection order
//!
//! 1. `CAMPUS_SEARCH_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme
//!
//! Every `render_*` function returns a `String` rather than printing, so the
//! layout can be asserted in tests.

use campus_search::{SearchResults, Statistics, TermFrequency};
use std::fmt::Write as _;
use std::io::IsTerminal;
use std::sync::OnceLock;

/// Widest title shown in a results table before truncation.
const TITLE_WIDTH: usize = 48;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("CAMPUS_SEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg" where bg 7+ (except 8) is a light background
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only for a terminal, and never under `NO_COLOR`.
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

/// Apply a theme color with optional modifiers.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Length as displayed, skipping ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Cut to `max` characters, marking the cut with an ellipsis.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

pub fn timing_ms(value: f64) -> String {
    let text = format!("{:.2}ms", value);
    if value < 1.0 {
        themed(GREEN, &[], &text)
    } else if value < 10.0 {
        themed(YELLOW, &[], &text)
    } else {
        text
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// RENDERERS
// ═══════════════════════════════════════════════════════════════════════════

/// Results table, then facets, then suggestions when the page is empty.
pub fn render_results(results: &SearchResults) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} results, page {} of {} ({})",
        themed(BLUE, &[BOLD], &results.total.to_string()),
        results.page,
        results.total_pages,
        timing_ms(results.search_time)
    );

    if !results.documents.is_empty() {
        out.push('\n');
        let _ = writeln!(
            out,
            "{}",
            themed(
                GRAY,
                &[],
                &format!("{:>7}  {:<11}  {:<12}  {}", "SCORE", "TYPE", "ID", "TITLE")
            )
        );
        for hit in &results.documents {
            let doc = &hit.document;
            let _ = writeln!(
                out,
                "{:>7}  {}  {}  {}",
                format!("{:.2}", hit.score),
                pad_right(&themed(CYAN, &[], doc.kind.as_str()), 11),
                pad_right(&truncate(&doc.id, 12), 12),
                truncate(&doc.title, TITLE_WIDTH)
            );
        }
    }

    let facet_rows = [
        (
            "location",
            results
                .facets
                .location
                .iter()
                .map(|(k, v)| (k.clone(), *v))
                .collect::<Vec<_>>(),
        ),
        (
            "type",
            results
                .facets
                .kind
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        ),
        (
            "category",
            results
                .facets
                .category
                .iter()
                .map(|(k, v)| (k.clone(), *v))
                .collect(),
        ),
    ];
    if facet_rows.iter().any(|(_, buckets)| !buckets.is_empty()) {
        out.push('\n');
        for (name, buckets) in &facet_rows {
            if buckets.is_empty() {
                continue;
            }
            let joined: Vec<String> = buckets
                .iter()
                .map(|(value, count)| format!("{} ({})", value, count))
                .collect();
            let label = pad_right(&format!("{}:", name), 10);
            let _ = writeln!(out, "{} {}", label, joined.join(", "));
        }
    }

    if !results.suggestions.is_empty() {
        out.push('\n');
        let _ = writeln!(
            out,
            "Did you mean: {}",
            themed(YELLOW, &[], &results.suggestions.join(", "))
        );
    }
    out
}

pub fn render_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return "No suggestions\n".to_string();
    }
    let mut out = String::new();
    for suggestion in suggestions {
        let _ = writeln!(out, "{}", suggestion);
    }
    out
}

pub fn render_popular(terms: &[TermFrequency]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        themed(GRAY, &[], &format!("{:>5}  {}", "DOCS", "TERM"))
    );
    for term in terms {
        let _ = writeln!(out, "{:>5}  {}", term.doc_count, term.term);
    }
    out
}

pub fn render_statistics(stats: &Statistics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", pad_right("documents:", 16), stats.total_documents);
    let _ = writeln!(out, "{} {}", pad_right("terms:", 16), stats.total_terms);
    let _ = writeln!(
        out,
        "{} {:.1}",
        pad_right("avg length:", 16),
        stats.average_document_length
    );
    for (kind, count) in &stats.documents_by_type {
        let _ = writeln!(out, "  {} {}", pad_right(kind.as_str(), 14), count);
    }
    out
}
