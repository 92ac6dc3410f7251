use crate::prelude::*;
use clap::Parser;
use headmoji_core::Direction;
use std::path::PathBuf;

mod config;
mod error;
mod mcp;
mod prefix;
mod prelude;
mod table;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Add or remove level-specific emoji prefixes on Markdown headings"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, Default, clap::Args)]
pub struct Global {
    /// TOML file overriding the prefix symbols
    #[clap(long, env = "HEADMOJI_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Whether to display additional information.
    #[clap(long, env = "HEADMOJI_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Prefix every heading with the symbol for its level
    Apply(crate::prefix::PrefixOptions),

    /// Strip prefix symbols from every heading
    Remove(crate::prefix::PrefixOptions),

    /// Show the active level to symbol table
    Table(crate::table::TableOptions),

    /// Model Context Protocol server
    MCP(crate::mcp::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Apply(options) => crate::prefix::run(Direction::Apply, options, app.global),
        SubCommands::Remove(options) => crate::prefix::run(Direction::Remove, options, app.global),
        SubCommands::Table(options) => crate::table::run(options, app.global),
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global).await,
    }
}
