use crate::prelude::{println, *};
use headmoji_core::{HeadingLevel, PrefixTable};
use serde::Serialize;

#[derive(Debug, clap::Args, Clone)]
pub struct TableOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TableEntry {
    pub level: HeadingLevel,
    pub marker: String,
    pub symbol: String,
}

pub fn run(options: TableOptions, global: crate::Global) -> Result<()> {
    let prefixer = crate::config::build_prefixer(&global)?;
    let entries = table_entries(prefixer.table());

    if options.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let mut output = new_table();
    output.add_row(prettytable::row!["Level", "Heading", "Symbol"]);
    for entry in &entries {
        output.add_row(prettytable::row![entry.level, entry.marker, entry.symbol]);
    }
    output.printstd();

    Ok(())
}

fn table_entries(table: &PrefixTable) -> Vec<TableEntry> {
    table
        .iter()
        .map(|(level, symbol)| TableEntry {
            level,
            marker: "#".repeat(usize::from(level.get())),
            symbol: symbol.to_string(),
        })
        .collect()
}
