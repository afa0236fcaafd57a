//! `pchat personas` - print the persona catalog.

use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use personachat_core::persona;

/// Render the persona catalog as a table (or JSON with `--json`).
pub fn list_personas(json: bool) -> anyhow::Result<()> {
    let cards = persona::cards();

    if json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Persona").fg(Color::White),
        Cell::new("Key").fg(Color::White),
        Cell::new("Role").fg(Color::White),
        Cell::new("Description").fg(Color::White),
    ]);

    for card in &cards {
        table.add_row(vec![
            Cell::new(&card.label).fg(Color::Cyan),
            Cell::new(card.value.as_str()),
            Cell::new(&card.role),
            Cell::new(&card.description),
        ]);
    }

    println!();
    println!("  {} Available personas", style("💬").bold());
    println!();
    println!("{table}");
    println!();

    Ok(())
}
