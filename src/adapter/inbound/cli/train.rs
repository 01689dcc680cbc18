//! Handlers for the `train` command group.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::board::format_departure;
use crate::adapter::inbound::cli::command::{
    TrainAddArgs, TrainCommand, TrainDeleteArgs, TrainListArgs, TrainUpdateArgs,
};
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::cli::session::Session;
use crate::domain::corridor::{self, Corridor};
use crate::domain::error::ValidationError;
use crate::domain::id::{CorridorId, TrainId};
use crate::domain::train::{parse_departure, NewTrain, TrainPatch, TrainRecord, TrainStatus};
use crate::error::{Error, Result};

#[derive(Tabled)]
struct TrainRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Corridor")]
    corridor: String,
    #[tabled(rename = "Departure")]
    departure: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

impl From<&TrainRecord> for TrainRow {
    fn from(train: &TrainRecord) -> Self {
        Self {
            id: train.id.to_string(),
            corridor: train.corridor.to_string(),
            departure: format_departure(train.departure_timestamp),
            status: train.status.label(),
        }
    }
}

/// Render trains as a table.
pub(super) fn table(trains: &[TrainRecord]) -> String {
    Table::new(trains.iter().map(TrainRow::from)).to_string()
}

/// Execute a `train` subcommand.
pub fn execute(session: &Session, command: &TrainCommand) -> Result<()> {
    match command {
        TrainCommand::List(args) => list(session, args),
        TrainCommand::Add(args) => add(session, args),
        TrainCommand::Update(args) => update(session, args),
        TrainCommand::Delete(args) => delete(session, args),
    }
}

/// Reject corridor ids that are not in the catalog.
fn catalog_corridor(catalog: &[Corridor], raw: &str) -> Result<CorridorId> {
    let id = CorridorId::new(raw.trim());
    if corridor::find(catalog, &id).is_none() {
        return Err(ValidationError::UnknownCorridor {
            corridor: raw.to_string(),
        }
        .into());
    }
    Ok(id)
}

fn list(session: &Session, args: &TrainListArgs) -> Result<()> {
    let corridor = args.corridor.as_deref().map(|raw| CorridorId::new(raw.trim()));
    let mut store = session.open_store();
    let trains = store.list(corridor.as_ref());

    if output::is_json() {
        output::json_output(json!({
            "command": "train.list",
            "trains": trains,
        }));
        return Ok(());
    }

    output::section("Trains");
    if trains.is_empty() {
        output::note("No live trains");
        return Ok(());
    }
    output::lines(&table(&trains));
    Ok(())
}

fn add(session: &Session, args: &TrainAddArgs) -> Result<()> {
    let corridor = catalog_corridor(&session.config.corridors, &args.corridor)?;
    let departure = parse_departure(&args.departure)?;
    let status: TrainStatus = args.status.parse()?;

    let mut store = session.open_store();
    let record = store.add(NewTrain::new(corridor, departure, status))?;
    report("train.add", "Train added", &record);
    Ok(())
}

fn update(session: &Session, args: &TrainUpdateArgs) -> Result<()> {
    let patch = TrainPatch {
        corridor: args
            .corridor
            .as_deref()
            .map(|raw| catalog_corridor(&session.config.corridors, raw))
            .transpose()?,
        departure_timestamp: args.departure.as_deref().map(parse_departure).transpose()?,
        status: args
            .status
            .as_deref()
            .map(str::parse::<TrainStatus>)
            .transpose()?,
    };
    if patch.is_empty() {
        output::warning("Nothing to change");
        output::hint("pass --corridor, --departure or --status");
        return Ok(());
    }

    let mut store = session.open_store();
    let record = store.update(&TrainId::new(args.id.trim()), &patch)?;
    report("train.update", "Train updated", &record);
    Ok(())
}

fn delete(session: &Session, args: &TrainDeleteArgs) -> Result<()> {
    let id = TrainId::new(args.id.trim());

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete train {id}?"))
            .default(false)
            .interact()?;
        if !confirmed {
            output::note("Cancelled");
            return Ok(());
        }
    }

    let mut store = session.open_store();
    if !store.delete(&id) {
        return Err(Error::NotFound { id });
    }

    if output::is_json() {
        output::json_output(json!({
            "command": "train.delete",
            "id": id,
        }));
        return Ok(());
    }
    output::success(&format!("Deleted train {}", output::highlight(&id)));
    Ok(())
}

fn report(command: &str, message: &str, record: &TrainRecord) {
    if output::is_json() {
        output::json_output(json!({
            "command": command,
            "train": record,
        }));
        return;
    }

    output::success(message);
    output::field("ID", output::highlight(&record.id));
    output::field("Corridor", &record.corridor);
    output::field("Departure", format_departure(record.departure_timestamp));
    output::field("Status", output::status(record.status));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_corridor_accepts_known_ids() {
        let catalog = Corridor::builtin();
        let id = catalog_corridor(&catalog, " BRV_MOSNOV ").unwrap();
        assert_eq!(id.as_str(), "BRV_MOSNOV");
    }

    #[test]
    fn catalog_corridor_rejects_unknown_ids() {
        let catalog = Corridor::builtin();
        let err = catalog_corridor(&catalog, "NOWHERE").unwrap_err();
        assert!(err.is_validation());
    }
}
