//! Handler for `board`: the public capacity view.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::json;
use tabled::{Table, Tabled};
use tracing::info;

use crate::adapter::inbound::cli::command::{BoardArgs, BoardCommand};
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::cli::session::Session;
use crate::application::view::{self, CorridorBoard};
use crate::error::Result;

#[derive(Tabled)]
struct PublicRow {
    #[tabled(rename = "Departure")]
    departure: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

/// Departure as shown in tables.
pub(super) fn format_departure(departure: DateTime<Utc>) -> String {
    departure.format("%a %d.%m.%Y %H:%M UTC").to_string()
}

/// Execute `board` and `board watch`.
pub async fn execute(session: &Session, args: &BoardArgs) -> Result<()> {
    let limit = args.limit.unwrap_or(session.config.board.public_limit);

    match &args.command {
        None => show(session, limit),
        Some(BoardCommand::Watch(watch)) => {
            let secs = watch
                .interval
                .unwrap_or(session.config.board.refresh_interval_secs)
                .max(1);
            self::watch(session, limit, Duration::from_secs(secs)).await
        }
    }
}

fn show(session: &Session, limit: usize) -> Result<()> {
    let mut store = session.open_store();
    let boards = view::public_board(&mut store, &session.config.corridors, limit);
    render(&boards, Utc::now());
    Ok(())
}

async fn watch(session: &Session, limit: usize, every: Duration) -> Result<()> {
    info!(interval_secs = every.as_secs(), "Watching public board");
    let mut ticker = tokio::time::interval(every);
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                // Reopen each tick so edits from other invocations show up.
                show(session, limit)?;
            }
            _ = &mut shutdown => {
                info!("Stopped watching");
                return Ok(());
            }
        }
    }
}

fn render(boards: &[CorridorBoard], now: DateTime<Utc>) {
    if output::is_json() {
        output::json_output(json!({
            "command": "board",
            "generated_at": now,
            "corridors": boards,
        }));
        return;
    }
    if output::is_quiet() {
        return;
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Updated", format_departure(now));

    for board in boards {
        output::section(&board.corridor.name);
        if board.trains.is_empty() {
            output::note("No departures scheduled");
            continue;
        }

        let rows: Vec<PublicRow> = board
            .trains
            .iter()
            .map(|train| PublicRow {
                departure: format_departure(train.departure_timestamp),
                status: train.status.label(),
            })
            .collect();
        output::lines(&Table::new(rows).to_string());

        if board.hidden() > 0 {
            output::note(&format!("+{} more", board.hidden()));
        }
    }
}
