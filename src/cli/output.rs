//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WordgrepArgs};
use crate::error::Result;
use crate::grep::MatchRecord;

/// Result structure for search operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub pattern: String,
    pub total_matches: usize,
    pub duration_ms: u64,
    pub highlight: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<MatchRecord>>,
}

/// Word list statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordListStats {
    pub path: String,
    pub total_words: usize,
    pub unique_words: usize,
    pub empty_lines: usize,
    pub longest_word: usize,
    pub load_ms: u64,
}

/// Rendering for the human output format.
pub trait HumanOutput {
    fn render_human(&self, verbosity: u8) -> String;
}

impl HumanOutput for SearchResults {
    fn render_human(&self, verbosity: u8) -> String {
        let mut out = String::new();

        if let Some(matches) = &self.matches {
            for record in matches {
                out.push_str(&render_record(record));
                out.push('\n');
            }
        }

        if self.matches.is_none() || verbosity > 1 {
            out.push_str(&format!(
                "{} matches ({} ms)\n",
                self.total_matches, self.duration_ms
            ));
        }
        out
    }
}

impl HumanOutput for WordListStats {
    fn render_human(&self, _verbosity: u8) -> String {
        format!(
            "Word List Statistics:\n\
             ═════════════════════\n\
             Path:          {}\n\
             Total words:   {}\n\
             Unique words:  {}\n\
             Empty lines:   {}\n\
             Longest word:  {} chars\n\
             Load time:     {} ms\n",
            self.path,
            self.total_words,
            self.unique_words,
            self.empty_lines,
            self.longest_word,
            self.load_ms
        )
    }
}

/// Render a match with its matched span in brackets.
pub fn render_record(record: &MatchRecord) -> String {
    match record.segments() {
        Some((before, matched, after)) => format!("{before}[{matched}]{after}"),
        None => record.word().into_owned(),
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &WordgrepArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(result: &T, args: &WordgrepArgs) -> Result<()> {
    print!("{}", result.render_human(args.verbosity()));
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WordgrepArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
