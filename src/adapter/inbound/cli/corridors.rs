//! Handler for `corridors`.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::domain::corridor::Corridor;
use crate::error::Result;

#[derive(Tabled)]
struct CorridorRow<'a> {
    #[tabled(rename = "ID")]
    id: &'a str,
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "From")]
    from: &'a str,
    #[tabled(rename = "To")]
    to: &'a str,
}

/// List the corridor catalog.
pub fn list(catalog: &[Corridor]) -> Result<()> {
    if output::is_json() {
        output::json_output(json!({
            "command": "corridors.list",
            "corridors": catalog,
        }));
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    output::section("Corridors");
    let rows = catalog.iter().map(|corridor| CorridorRow {
        id: corridor.id.as_str(),
        name: &corridor.name,
        from: &corridor.from,
        to: &corridor.to,
    });
    output::lines(&Table::new(rows).to_string());
    Ok(())
}
