//! Handlers for the `data` command group: export, import and reset.

use std::fs;
use std::path::Path;

use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use serde_json::json;
use tracing::info;

use crate::adapter::inbound::cli::command::DataCommand;
use crate::adapter::inbound::cli::session::Session;
use crate::adapter::inbound::cli::{output, paths};
use crate::error::Result;

/// Execute a `data` subcommand.
pub fn execute(session: &Session, command: &DataCommand) -> Result<()> {
    match command {
        DataCommand::Export(args) => {
            let path = args
                .output
                .clone()
                .unwrap_or_else(|| paths::export_file_name(chrono::Local::now().date_naive()));
            export(session, &path)
        }
        DataCommand::Import(args) => import(session, &args.path),
        DataCommand::Reset(args) => reset(session, args.yes),
    }
}

fn export(session: &Session, path: &Path) -> Result<()> {
    let mut store = session.open_store();
    let trains = store.export_all();
    let document = serde_json::to_string_pretty(&trains)?;
    fs::write(path, document)?;
    info!(path = %path.display(), count = trains.len(), "Exported trains");

    if output::is_json() {
        output::json_output(json!({
            "command": "data.export",
            "path": path.display().to_string(),
            "count": trains.len(),
        }));
        return Ok(());
    }
    output::success(&format!("Exported {} trains", trains.len()));
    output::field("Path", path.display());
    Ok(())
}

fn import(session: &Session, path: &Path) -> Result<()> {
    let payload = fs::read_to_string(path)?;
    let mut store = session.open_store();
    let trains = store.import_replace(&payload)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "data.import",
            "path": path.display().to_string(),
            "count": trains.len(),
        }));
        return Ok(());
    }
    output::success(&format!("Imported {} trains", trains.len()));
    output::note("The previous collection was replaced");
    Ok(())
}

fn reset(session: &Session, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Discard every train and restore the sample data?")
            .default(false)
            .interact()?;
        if !confirmed {
            output::note("Cancelled");
            return Ok(());
        }
    }

    let mut store = session.open_store();
    let trains = store.reset_to_default();

    if output::is_json() {
        output::json_output(json!({
            "command": "data.reset",
            "count": trains.len(),
        }));
        return Ok(());
    }
    output::success(&format!("Restored {} sample trains", trains.len()));
    Ok(())
}
