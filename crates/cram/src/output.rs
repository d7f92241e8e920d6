//! Output formatting for the `cram` CLI.

use std::process::ExitCode;

use comfy_table::Table;
use cram_keywords::{ContextKeyword, RankedKeyword};
use serde::Serialize;

/// Prints any serializable value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize output: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints ranked keywords as a table with per-signal scores.
pub fn print_keyword_table(keywords: &[RankedKeyword]) {
    if keywords.is_empty() {
        println!("No keywords found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Keyword", "Score", "YAKE", "PMI", "Embedding", "Domain", "Position",
    ]);

    for keyword in keywords {
        table.add_row(vec![
            keyword.term.clone(),
            format!("{:.3}", keyword.score),
            format!("{:.3}", keyword.scores.yake),
            format!("{:.3}", keyword.scores.statistical),
            format!("{:.3}", keyword.scores.embedding),
            format!("{:.3}", keyword.scores.domain),
            format!("{:.3}", keyword.scores.positional),
        ]);
    }

    println!("{table}");
}

/// Prints context-annotated keywords as a table.
pub fn print_context_table(keywords: &[ContextKeyword]) {
    if keywords.is_empty() {
        println!("No keywords found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Keyword", "Score", "Offset", "Context"]);

    for keyword in keywords {
        let (offset, snippet) = match &keyword.context {
            Some(context) => (context.offset.to_string(), flatten(&context.snippet)),
            None => ("-".to_string(), "-".to_string()),
        };
        table.add_row(vec![
            keyword.keyword.term.clone(),
            format!("{:.3}", keyword.keyword.score),
            offset,
            snippet,
        ]);
    }

    println!("{table}");
}

/// Collapses newlines so snippets stay on one table row.
fn flatten(snippet: &str) -> String {
    snippet.split_whitespace().collect::<Vec<_>>().join(" ")
}
