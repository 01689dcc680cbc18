//! Handler for `admin`: every live train, grouped by corridor.

use serde_json::json;

use crate::adapter::inbound::cli::session::Session;
use crate::adapter::inbound::cli::{output, train};
use crate::application::view;
use crate::domain::train::TrainStatus;
use crate::error::Result;

/// Execute `admin`.
pub fn execute(session: &Session) -> Result<()> {
    let mut store = session.open_store();
    let board = view::admin_board(&mut store, &session.config.corridors);

    if output::is_json() {
        output::json_output(json!({
            "command": "admin",
            "persistence": store.snapshot_enabled(),
            "board": board,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Live trains", board.status_counts.total());
    for status in TrainStatus::ALL {
        output::field(status.label(), board.status_counts.get(status));
    }
    if !store.snapshot_enabled() {
        output::warning("Persistence disabled; changes last for this command only");
    }

    for corridor in &board.corridors {
        output::section(&format!(
            "{} {}",
            corridor.corridor.name,
            output::muted(format!("({})", corridor.total))
        ));
        if corridor.trains.is_empty() {
            output::note("No trains");
            continue;
        }
        output::lines(&train::table(&corridor.trains));
    }

    if !board.uncatalogued.is_empty() {
        output::section("Unknown corridors");
        output::warning("These trains reference corridors missing from the catalog");
        output::lines(&train::table(&board.uncatalogued));
    }

    Ok(())
}
