//! Command-line interface for the `dsvedit` binary
//!
//! Supports:
//! - Opening a DSV file with a configured, flagged or detected dialect
//! - Applying an edit script (YAML list of [`DsvMsg`])
//! - Dumping the transaction history as JSON lines

use std::path::PathBuf;

use clap::Parser;

use crate::config::DsvConfig;
use crate::dsv::{ChangeDescriptor, Dialect, EditableDsvModel, MemoryLog, TransactionLog};
use crate::messages::DsvMsg;
use crate::update::update;

/// Apply structural edits to a delimiter-separated file
#[derive(Parser, Debug)]
#[command(name = "dsvedit", version, about = "Apply structural edits to a DSV file")]
pub struct CliArgs {
    /// DSV file to edit
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Edit script: a YAML list of edit messages
    #[arg(short, long, value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Write the edited document here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Column delimiter (escapes like \t are accepted)
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Row delimiter (escapes like \r\n are accepted)
    #[arg(long)]
    pub row_delimiter: Option<String>,

    /// Quote character
    #[arg(long)]
    pub quote: Option<char>,

    /// Detect the delimiter from the content instead of the file extension
    #[arg(long)]
    pub detect: bool,

    /// Write the transaction history as JSON lines to this file
    #[arg(long, value_name = "FILE")]
    pub history: Option<PathBuf>,
}

impl CliArgs {
    /// Pick the dialect: flags override the config, which overrides detection
    pub fn resolve_dialect(&self, config: &DsvConfig, content: &str) -> Dialect {
        let mut dialect = match &config.dialect {
            Some(dialect) if !self.detect => dialect.clone(),
            _ if self.detect => Dialect::detect(content),
            _ => self
                .input
                .extension()
                .and_then(|ext| ext.to_str())
                .map(Dialect::from_extension)
                .unwrap_or_default()
                .with_detected_row_delimiter(content),
        };

        if let Some(delimiter) = &self.delimiter {
            dialect.delimiter = unescape(delimiter);
        }
        if let Some(row_delimiter) = &self.row_delimiter {
            dialect.row_delimiter = unescape(row_delimiter);
        }
        if self.quote.is_some() {
            dialect.quote = self.quote;
        }
        dialect
    }
}

/// Expand `\n`, `\r`, `\t` and `\\` typed on a shell
pub fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Parse an edit script
pub fn parse_script(text: &str) -> Result<Vec<DsvMsg>, serde_yaml::Error> {
    serde_yaml::from_str(text)
}

/// Apply every message in order, returning the changes that took effect
pub fn run_script<L: TransactionLog>(
    model: &mut EditableDsvModel<L>,
    msgs: Vec<DsvMsg>,
) -> Vec<ChangeDescriptor> {
    let mut applied = Vec::new();
    for (step, msg) in msgs.into_iter().enumerate() {
        match update(model, msg) {
            Some(change) => {
                tracing::info!(step, ?change, "applied");
                applied.push(change);
            }
            None => tracing::debug!(step, "no change"),
        }
    }
    applied
}

/// One JSON object per committed transaction, oldest first
pub fn history_json_lines(log: &MemoryLog) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    for record in log.records() {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    Ok(out)
}
