//! Implementations of the `cram` subcommands.

use std::{
    collections::HashSet,
    fs,
    io::{self, Read},
    path::Path,
    process::ExitCode,
};

use cram_keywords::{ExtractParams, KeywordRanker, Language};

use crate::{
    args::{ContextCommand, ExtractCommand, InputArgs, RankerArgs},
    output,
};

/// Implements `cram extract`.
pub fn cmd_extract(cmd: &ExtractCommand) -> ExitCode {
    let Some(text) = read_input(&cmd.input) else {
        return ExitCode::FAILURE;
    };
    let Some(ranker) = build_ranker(&cmd.ranker) else {
        return ExitCode::FAILURE;
    };

    let params = ExtractParams {
        num_keywords: cmd.num_keywords,
        min_length: cmd.min_length,
    };
    let keywords = ranker.extract(&text, &params);

    if cmd.output.json {
        output::print_json(&keywords)
    } else {
        output::print_keyword_table(&keywords);
        ExitCode::SUCCESS
    }
}

/// Implements `cram context`.
pub fn cmd_context(cmd: &ContextCommand) -> ExitCode {
    let Some(text) = read_input(&cmd.input) else {
        return ExitCode::FAILURE;
    };
    let Some(ranker) = build_ranker(&cmd.ranker) else {
        return ExitCode::FAILURE;
    };

    let keywords = ranker.extract_with_context(&text, cmd.window);

    if cmd.output.json {
        output::print_json(&keywords)
    } else {
        output::print_context_table(&keywords);
        ExitCode::SUCCESS
    }
}

/// Reads the input document: a supported file, or stdin for `-`.
///
/// Prints an error and returns `None` on failure.
fn read_input(input: &InputArgs) -> Option<String> {
    if input.file == "-" {
        let mut text = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut text) {
            eprintln!("error: failed to read stdin: {e}");
            return None;
        }
        return Some(text);
    }

    let fields = (!input.fields.is_empty()).then_some(input.fields.as_slice());
    match cram_ingest::load(Path::new(&input.file), fields) {
        Ok(document) => Some(document.text),
        Err(e) => {
            eprintln!("error: {e}");
            None
        }
    }
}

/// Constructs the ranker from CLI flags.
///
/// Prints an error and returns `None` on failure.
fn build_ranker(args: &RankerArgs) -> Option<KeywordRanker> {
    let language = match args.language.as_deref() {
        Some(s) => match s.parse::<Language>() {
            Ok(language) => language,
            Err(e) => {
                eprintln!("error: {e}");
                return None;
            }
        },
        None => Language::default(),
    };

    let domain_vocab = match args.domain_vocab.as_deref() {
        Some(path) => match load_vocabulary(path) {
            Ok(vocab) => Some(vocab),
            Err(e) => {
                eprintln!("error: failed to read domain vocabulary: {e}");
                return None;
            }
        },
        None => None,
    };

    match KeywordRanker::new(language, args.embeddings.as_deref(), domain_vocab) {
        Ok(ranker) => Some(ranker),
        Err(e) => {
            eprintln!("error: {e}");
            None
        }
    }
}

/// Loads a domain vocabulary file: one term per line, blank lines and `#`
/// comments ignored.
fn load_vocabulary(path: &Path) -> io::Result<HashSet<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect())
}
