use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

use dsv_edit::cli::{history_json_lines, parse_script, run_script, CliArgs};
use dsv_edit::config::DsvConfig;
use dsv_edit::dsv::EditableDsvModel;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    dsv_edit::tracing::init();

    let config = DsvConfig::load();
    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let dialect = args.resolve_dialect(&config, &content);
    tracing::debug!(?dialect, path = %args.input.display(), "opening");

    let mut model =
        EditableDsvModel::with_log(&content, dialect, config.history(), config.model_options())
            .with_context(|| format!("Failed to index {}", args.input.display()))?;

    if let Some(script_path) = &args.script {
        let script = fs::read_to_string(script_path)
            .with_context(|| format!("Failed to read script {}", script_path.display()))?;
        let msgs = parse_script(&script)
            .with_context(|| format!("Invalid edit script {}", script_path.display()))?;
        let applied = run_script(&mut model, msgs);
        tracing::info!(changes = applied.len(), "script finished");
    }

    let result = model.raw_data();
    match &args.output {
        Some(path) => fs::write(path, &result)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => std::io::stdout()
            .write_all(result.as_bytes())
            .context("Failed to write to stdout")?,
    }

    if let Some(path) = &args.history {
        let lines = history_json_lines(model.log()).context("Failed to serialize history")?;
        fs::write(path, lines).with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(())
}
