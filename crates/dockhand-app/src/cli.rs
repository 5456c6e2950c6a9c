use clap::Parser;

/// Dockhand: replay panel actions against the flyout/dock core and print the
/// resulting layout.
#[derive(Parser, Debug)]
#[command(name = "dockhand", version, about)]
pub struct Args {
    /// Action script, one JSON action per line. Reads stdin when omitted.
    #[arg(short = 's', long)]
    pub script: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Panel state file override.
    #[arg(long)]
    pub state: Option<String>,

    /// Do not read or write panel state.
    #[arg(long)]
    pub no_persist: bool,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub dump_config: bool,

    /// Write the effective config as TOML (to `--config` or the default
    /// config path) and exit.
    #[arg(long, conflicts_with = "dump_config")]
    pub write_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
