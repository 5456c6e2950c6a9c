mod cli;
mod report;
mod script;

use std::io::Read;
use std::path::PathBuf;

use dockhand_common::{Action, ConfigError, DockhandError};
use dockhand_config::schema::DockhandConfig;
use dockhand_core::{FlyoutCoordinator, JsonFilePersistence};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::report::Report;

fn load_config(args: &Args) -> (DockhandConfig, Option<ConfigError>) {
    let loaded = match args.config {
        Some(ref path) => dockhand_config::load_config_from(&PathBuf::from(path)),
        None => dockhand_config::load_config(),
    };
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (DockhandConfig::default(), Some(e)),
    }
}

fn init_logging(args: &Args, config: &DockhandConfig) {
    let fallback = format!("dockhand={}", config.logging.level.as_directive());
    let log_directive = args.log_level.as_deref().unwrap_or(&fallback);
    let directive: Result<Directive, _> = log_directive
        .parse()
        .or_else(|_| "dockhand=info".parse());
    let filter = match directive {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn write_config(args: &Args, config: &DockhandConfig) -> Result<(), ConfigError> {
    match args.config {
        Some(ref path) => dockhand_config::save_config_to_path(config, &PathBuf::from(path)),
        None => dockhand_config::save_config(config),
    }
}

fn state_path(args: &Args, config: &DockhandConfig) -> Option<PathBuf> {
    args.state
        .as_ref()
        .or(config.persistence.state_file.as_ref())
        .map(PathBuf::from)
        .or_else(dockhand_config::default_state_path)
}

fn read_script(args: &Args) -> dockhand_common::Result<String> {
    match args.script {
        Some(ref path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

#[derive(Default)]
struct Tally {
    executed: usize,
    rejected: usize,
}

impl Tally {
    fn apply(&mut self, coordinator: &mut FlyoutCoordinator, actions: &[Action]) {
        for action in actions {
            if coordinator.execute(action) {
                self.executed += 1;
                continue;
            }
            // Stray pointer samples outside a gesture are routine.
            if action.is_pointer() {
                tracing::debug!("Pointer action ignored: {}", action.label());
            } else {
                tracing::warn!("Action rejected: {}", action.label());
            }
            self.rejected += 1;
        }
    }
}

fn run(args: &Args, config: &DockhandConfig) -> dockhand_common::Result<()> {
    let mut coordinator = FlyoutCoordinator::from_config(config);
    if config.persistence.enabled && !args.no_persist {
        match state_path(args, config) {
            Some(path) => {
                tracing::info!("Panel state: {}", path.display());
                coordinator = coordinator.with_persistence(JsonFilePersistence::new(path));
            }
            None => tracing::warn!("No state directory available, running without persistence"),
        }
    }

    let actions = script::parse_actions(&read_script(args)?)?;
    let (registrations, actions) = script::partition(actions);

    let mut tally = Tally::default();
    tally.apply(&mut coordinator, &registrations);
    let restored = coordinator.restore_from_persisted();
    tally.apply(&mut coordinator, &actions);
    let Tally { executed, rejected } = tally;
    tracing::info!(executed, rejected, restored, "Script finished");

    let report = Report::collect(&coordinator, restored, executed, rejected);
    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| DockhandError::Other(format!("failed to serialize report: {e}")))?;
    println!("{json}");
    Ok(())
}

fn main() {
    let args = cli::parse();

    let (config, config_error) = load_config(&args);
    init_logging(&args, &config);

    tracing::info!("Dockhand v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    if args.dump_config {
        println!("{}", dockhand_config::config_to_json(&config));
        return;
    }

    if args.write_config {
        match write_config(&args, &config) {
            Ok(()) => tracing::info!("Config written"),
            Err(e) => {
                tracing::error!("Failed to write config: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if let Err(e) = run(&args, &config) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
