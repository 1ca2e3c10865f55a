//! Binary entrypoint for winplace: launch configured programs and place
//! their windows on the right monitors.

use std::{
    path::{Path, PathBuf},
    process,
};

use clap::{Parser, Subcommand};
use logging as logshared;
use tracing_subscriber::{fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    name = "winplace",
    about = "Launch programs and place their windows on a chosen monitor",
    version
)]
/// Command-line interface for the `winplace` binary.
struct Cli {
    /// Optional subcommand; without one the configured launch sequence runs.
    #[command(subcommand)]
    command: Option<Command>,

    /// Optional path to the config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Logging controls
    #[command(flatten)]
    log: logshared::LogArgs,
}

#[derive(Subcommand, Debug)]
/// Top-level CLI subcommands.
enum Command {
    /// Load and validate the configuration then exit.
    Check {
        /// Path to configuration file to check (defaults to ~/.winplace/winplace.ron)
        path: Option<PathBuf>,

        /// Dump the parsed configuration to stdout
        #[arg(long)]
        dump: bool,
    },
    /// List attached monitors with their roles and work areas.
    Monitors,
}

fn main() {
    let cli = Cli::parse();

    let spec = logshared::compute_spec(
        cli.log.trace,
        cli.log.debug,
        cli.log.log_level.as_deref(),
        cli.log.log_filter.as_deref(),
    );
    tracing_subscriber::registry()
        .with(logshared::env_filter_from_spec(&spec))
        .with(fmt::layer().without_time())
        .try_init()
        .ok();

    match cli.command {
        Some(Command::Check { path, dump }) => {
            let explicit = path.or(cli.config);
            check(explicit.as_deref(), dump);
        }
        Some(Command::Monitors) => monitors(),
        None => run(cli.config.as_deref()),
    }
}

/// Load the configuration, print `OK` (or dump it), exit non-zero on errors.
fn check(path: Option<&Path>, dump: bool) {
    let cfg = load_config(path);
    if dump {
        match ron::ser::to_string_pretty(&cfg, ron::ser::PrettyConfig::default()) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Failed to serialize config: {e}");
                process::exit(1);
            }
        }
    } else {
        println!("OK");
    }
}

/// Resolve and load the config file, exiting with a pretty error on failure.
fn load_config(path: Option<&Path>) -> config::Config {
    let resolved = match config::resolve_config_path(path) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}", e.pretty());
            process::exit(1);
        }
    };
    match config::Config::load(&resolved) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", e.pretty());
            process::exit(1);
        }
    }
}

/// Print each monitor's role and work area, plus the default target.
#[cfg(target_os = "windows")]
fn monitors() {
    use winplace_engine::{MonitorLayout, classify};

    let monitors = win_winops::list_monitors();
    if monitors.is_empty() {
        eprintln!("No monitors reported");
        process::exit(1);
    }
    for rect in &monitors {
        println!(
            "{}: ({},{})-({},{}) {}x{}",
            classify(rect),
            rect.left(),
            rect.top(),
            rect.right(),
            rect.bottom(),
            rect.width(),
            rect.height()
        );
    }
    let layout = MonitorLayout::classify(&monitors);
    if let Some(target) = layout.default_target() {
        println!(
            "default target: ({},{})-({},{})",
            target.left(),
            target.top(),
            target.right(),
            target.bottom()
        );
    }
}

/// Run the configured launch sequence: for each program, pick its monitor,
/// launch it, wait for its window, and place it. A window that never shows
/// up is logged and skipped, never fatal.
#[cfg(target_os = "windows")]
fn run(path: Option<&Path>) {
    use std::{sync::Arc, time::Duration};

    use tracing::{info, warn};
    use winplace_engine::{
        DesktopOps, LaunchCommand, MonitorLayout, PlaceOptions, PlacedProgram, ResolveSettings,
    };

    let cfg = load_config(path);
    if cfg.programs.is_empty() {
        println!("Nothing to launch: the config has no programs");
        return;
    }

    let ops: Arc<dyn DesktopOps> = Arc::new(win_winops::Win32Ops);
    let layout = MonitorLayout::classify(&ops.list_monitors());

    for spec in &cfg.programs {
        let Some(monitor) = target_monitor(&layout, spec.monitor) else {
            warn!(
                "'{}': no {:?} monitor attached; skipping",
                spec.name, spec.monitor
            );
            continue;
        };

        let command = LaunchCommand::new(&spec.command).with_args(spec.args.iter().cloned());
        let program = PlacedProgram::new(spec.name.as_str(), command, monitor, Arc::clone(&ops))
            .with_resolve_settings(ResolveSettings {
                timeout: Duration::from_millis(spec.wait_ms),
                ..ResolveSettings::default()
            });

        let handle = match program.launch() {
            Ok(h) => h,
            Err(e) => {
                warn!("'{}': {}", spec.name, e);
                continue;
            }
        };
        if handle.wait(Duration::from_millis(spec.wait_ms)).is_none() {
            warn!(
                "'{}': window did not appear within {}ms",
                spec.name, spec.wait_ms
            );
        }

        let options = PlaceOptions {
            width_pct: spec.width_pct,
            height_pct: spec.height_pct,
            maximize: spec.maximize,
        };
        match program.place_window(options) {
            Ok(()) if program.window().is_some() => info!("'{}': placed", spec.name),
            Ok(()) => info!("'{}': left where it is", spec.name),
            Err(e) => warn!("'{}': placement failed: {}", spec.name, e),
        }
    }
}

/// Map a configured monitor choice onto the classified layout.
#[cfg(target_os = "windows")]
fn target_monitor(
    layout: &winplace_engine::MonitorLayout,
    choice: config::MonitorChoice,
) -> Option<winplace_engine::MonitorRect> {
    use winplace_engine::MonitorRole;

    match choice {
        config::MonitorChoice::Auto => layout.default_target(),
        config::MonitorChoice::Primary => layout.role(MonitorRole::Primary),
        config::MonitorChoice::Secondary => layout.role(MonitorRole::Secondary),
        config::MonitorChoice::Other => layout.role(MonitorRole::Other),
    }
}

/// Window management needs a Windows desktop session.
#[cfg(not(target_os = "windows"))]
fn monitors() {
    eprintln!("winplace needs a Windows desktop session to enumerate monitors");
    process::exit(1);
}

/// Window management needs a Windows desktop session.
#[cfg(not(target_os = "windows"))]
fn run(_path: Option<&Path>) {
    eprintln!("winplace needs a Windows desktop session to manage windows");
    process::exit(1);
}
