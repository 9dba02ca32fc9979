//! Command implementations for the wordgrep CLI.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::WordgrepConfig;
use crate::error::{GrepError, Result};
use crate::grep::Grepper;
use crate::matcher::{PatternCompiler, RegexCompiler, WildcardCompiler};
use crate::service::{GrepRequest, GrepService};
use crate::store::WordStore;

/// Execute a CLI command.
pub fn execute_command(args: WordgrepArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Search(search_args) => {
            let results = search_words(search_args, config)?;
            output_result(&results, &args)
        }
        Command::Stats(stats_args) => {
            let stats = word_list_stats(stats_args, config)?;
            output_result(&stats, &args)
        }
    }
}

/// Load the configuration file if one was given, defaults otherwise.
fn load_config(args: &WordgrepArgs) -> Result<WordgrepConfig> {
    match &args.config {
        Some(path) => {
            debug!("loading configuration from {}", path.display());
            let config = WordgrepConfig::load_from_file(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))?;
            Ok(config)
        }
        None => Ok(WordgrepConfig::default()),
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Search the word list and collect the results.
pub fn search_words(args: &SearchArgs, mut config: WordgrepConfig) -> Result<SearchResults> {
    if let Some(words) = &args.words {
        config.store.path = words.clone();
    }
    if args.ignore_case {
        config.matcher.case_insensitive = true;
    }
    if args.parallel {
        config.grep.parallel = true;
    }
    config.validate()?;

    info!(
        "searching {} for {:?} ({:?})",
        config.store.path.display(),
        args.pattern,
        args.syntax
    );

    let store = Arc::new(WordStore::with_config(config.store.clone()));
    match args.syntax {
        PatternSyntax::Regex => {
            let grepper = Grepper::with_compiler(
                RegexCompiler::new(config.matcher.clone()),
                config.grep.clone(),
            )?;
            run_search(GrepService::new(store, grepper), args)
        }
        PatternSyntax::Wildcard => {
            let grepper = Grepper::with_compiler(
                WildcardCompiler::new(config.matcher.clone()),
                config.grep.clone(),
            )?;
            run_search(GrepService::new(store, grepper), args)
        }
    }
}

fn run_search<C: PatternCompiler>(service: GrepService<C>, args: &SearchArgs) -> Result<SearchResults> {
    let start_time = Instant::now();
    let request = GrepRequest::new(args.pattern.as_str()).with_highlight(args.highlight);
    let response = service.handle(&request)?;
    let duration = start_time.elapsed();

    let total_matches = response.match_count();
    if let Some(message) = response.error {
        return Err(GrepError::InvalidPattern(message));
    }
    let Some(matches) = response.matches else {
        return Err(GrepError::invalid_pattern("no pattern supplied"));
    };

    Ok(SearchResults {
        pattern: response.pattern,
        total_matches,
        duration_ms: millis(duration),
        highlight: response.highlight,
        matches: if args.count { None } else { Some(matches) },
    })
}

/// Load the word list and compute its statistics.
pub fn word_list_stats(args: &StatsArgs, mut config: WordgrepConfig) -> Result<WordListStats> {
    if let Some(words) = &args.words {
        config.store.path = words.clone();
    }

    let store = WordStore::with_config(config.store);
    let start_time = Instant::now();
    let words = store.get_words()?;
    let duration = start_time.elapsed();

    let unique: HashSet<&str> = words.iter().collect();
    Ok(WordListStats {
        path: store.path().to_string_lossy().to_string(),
        total_words: words.len(),
        unique_words: unique.len(),
        empty_lines: words.iter().filter(|w| w.is_empty()).count(),
        longest_word: words.iter().map(|w| w.chars().count()).max().unwrap_or(0),
        load_ms: millis(duration),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::Path;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::grep::MatchRecord;

    fn word_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn parse(args: &[&str]) -> WordgrepArgs {
        WordgrepArgs::try_parse_from(args).unwrap()
    }

    fn search(path: &Path, extra: &[&str]) -> Result<SearchResults> {
        let path = path.to_str().unwrap();
        let mut argv = vec!["wordgrep", "search"];
        argv.extend_from_slice(extra);
        argv.extend_from_slice(&["--words", path]);

        let args = parse(&argv);
        match &args.command {
            Command::Search(search_args) => search_words(search_args, WordgrepConfig::default()),
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_search_uses_word_file_override() {
        let file = word_file("cat\ndog\ncatalog\n");
        let results = search(file.path(), &["cat"]).unwrap();

        assert_eq!(results.pattern, "cat");
        assert_eq!(results.total_matches, 2);
        assert!(!results.highlight);
        assert_eq!(
            results.matches,
            Some(vec![MatchRecord::from("cat"), MatchRecord::from("catalog")])
        );
    }

    #[test]
    fn test_search_highlight() {
        let file = word_file("cat\ndog\ncatalog\n");
        let results = search(file.path(), &["log", "--highlight"]).unwrap();

        assert!(results.highlight);
        assert_eq!(
            results.matches,
            Some(vec![MatchRecord::segmented("cata", "log", "")])
        );
    }

    #[test]
    fn test_search_wildcard_syntax() {
        let file = word_file("cat\ncot\ncoat\ncats\n");
        let results = search(file.path(), &["c?t", "--syntax", "wildcard"]).unwrap();

        assert_eq!(
            results.matches,
            Some(vec![MatchRecord::from("cat"), MatchRecord::from("cot")])
        );
    }

    #[test]
    fn test_search_ignore_case() {
        let file = word_file("Cat\ncat\ndog\n");
        let results = search(file.path(), &["^CAT$", "-i"]).unwrap();
        assert_eq!(results.total_matches, 2);
    }

    #[test]
    fn test_search_count_drops_matches() {
        let file = word_file("cat\ndog\ncatalog\n");
        let results = search(file.path(), &["cat", "--count"]).unwrap();

        assert_eq!(results.total_matches, 2);
        assert_eq!(results.matches, None);
    }

    #[test]
    fn test_search_invalid_pattern() {
        let file = word_file("cat\n");
        let result = search(file.path(), &["["]);
        assert!(matches!(result, Err(GrepError::InvalidPattern(_))));
    }

    #[test]
    fn test_search_empty_pattern_is_rejected() {
        let file = word_file("cat\ndog\ncatalog\n");
        match search(file.path(), &[""]) {
            Err(GrepError::InvalidPattern(msg)) => assert_eq!(msg, "no pattern supplied"),
            other => panic!("expected InvalidPattern, got {other:?}"),
        }
    }

    #[test]
    fn test_search_missing_word_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = search(&dir.path().join("missing.txt"), &["cat"]);
        assert!(matches!(result, Err(GrepError::Io(_))));
    }

    #[test]
    fn test_word_list_stats() {
        let file = word_file("cat\n\ndog\ncat\ncafé\n");
        let path = file.path().to_str().unwrap();
        let args = parse(&["wordgrep", "stats", "-w", path]);

        let Command::Stats(stats_args) = &args.command else {
            panic!("Expected Stats command");
        };
        let stats = word_list_stats(stats_args, WordgrepConfig::default()).unwrap();

        assert_eq!(stats.path, path);
        assert_eq!(stats.total_words, 5);
        assert_eq!(stats.unique_words, 4);
        assert_eq!(stats.empty_lines, 1);
        assert_eq!(stats.longest_word, 4);
    }

    #[test]
    fn test_execute_command_reports_invalid_pattern() {
        let file = word_file("cat\n");
        let path = file.path().to_str().unwrap();
        let args = parse(&["wordgrep", "-q", "search", "(", "-w", path]);

        assert!(matches!(
            execute_command(args),
            Err(GrepError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_execute_command_json_search() {
        let file = word_file("cat\ndog\n");
        let path = file.path().to_str().unwrap();
        let args = parse(&["wordgrep", "-f", "json", "search", "dog", "-w", path]);

        assert!(execute_command(args).is_ok());
    }

    #[test]
    fn test_missing_config_file_carries_path() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("wordgrep.json");
        let args = parse(&[
            "wordgrep",
            "--config",
            config_path.to_str().unwrap(),
            "stats",
        ]);

        match execute_command(args) {
            Err(GrepError::Anyhow(e)) => {
                assert!(e.to_string().contains("wordgrep.json"));
                assert!(matches!(e.downcast_ref::<GrepError>(), Some(GrepError::Io(_))));
            }
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_config_file_word_list_is_used() {
        let words = word_file("alpha\nbeta\n");
        let mut config = NamedTempFile::new().unwrap();
        write!(
            config,
            r#"{{"store": {{"path": {}}}}}"#,
            serde_json::to_string(words.path().to_str().unwrap()).unwrap()
        )
        .unwrap();
        config.flush().unwrap();

        let args = parse(&[
            "wordgrep",
            "-c",
            config.path().to_str().unwrap(),
            "search",
            "a$",
        ]);
        let loaded = load_config(&args).unwrap();
        let Command::Search(search_args) = &args.command else {
            panic!("Expected Search command");
        };

        let results = search_words(search_args, loaded).unwrap();
        assert_eq!(
            results.matches,
            Some(vec![MatchRecord::from("alpha"), MatchRecord::from("beta")])
        );
    }
}
