// SPDX-FileCopyrightText: 2026 peli contributors
// SPDX-License-Identifier: GPL-3.0-or-later

mod config;
mod sprite_demo;
mod surface_demo;
mod window;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{error, info, warn};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Demo {
    /// Swap between two bitmaps with a key
    Surfaces,
    /// Draw a background and a cursor sprite with the GPU renderer
    Sprites,
}

/// peli - SDL2 demos
#[derive(Parser, Debug)]
#[command(name = "peli", version, about = "SDL2 surface and texture demos")]
struct Args {
    /// Which demo to run
    #[arg(short, long, value_enum, default_value_t = Demo::Surfaces)]
    demo: Demo,

    /// Path to config file (default: ./peli.ini or ~/.config/peli/peli.ini)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            demo: Demo::Surfaces,
            config: None,
            verbose: false,
        }
    }
}

/// Parse the command line, falling back to defaults on bad input instead
/// of exiting with a usage error.
fn parse_args<I, T>(argv: I) -> (Args, Option<clap::Error>)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(argv) {
        Ok(args) => (args, None),
        Err(e) => (Args::default(), Some(e)),
    }
}

fn main() -> Result<()> {
    let (args, arg_error) = parse_args(std::env::args_os());
    if let Some(e) = &arg_error {
        // --help and --version print and exit 0.
        if !e.use_stderr() {
            e.exit();
        }
    }

    // Failures are reported on stdout only; the exit code stays 0.
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .target(env_logger::Target::Stdout)
        .init();

    if let Some(e) = arg_error {
        warn!("Ignoring command line: {}", e.to_string().trim_end());
    }

    let settings = config::load_config(args.config.as_ref());
    info!("Running {:?} demo", args.demo);

    let outcome = match args.demo {
        Demo::Surfaces => surface_demo::run(&settings),
        Demo::Sprites => sprite_demo::run(&settings),
    };

    if let Err(e) = outcome {
        error!("Failed to initialize! {:#}", e);
    }

    info!("Shut down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_runs_surfaces() {
        let (args, err) = parse_args(["peli"]);
        assert!(err.is_none());
        assert_eq!(args.demo, Demo::Surfaces);
        assert!(args.config.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_flags_parse() {
        let (args, err) = parse_args(["peli", "--demo", "sprites", "-v", "--config", "x.ini"]);
        assert!(err.is_none());
        assert_eq!(args.demo, Demo::Sprites);
        assert_eq!(args.config, Some(PathBuf::from("x.ini")));
        assert!(args.verbose);
    }

    #[test]
    fn test_unknown_flag_falls_back_to_defaults() {
        let (args, err) = parse_args(["peli", "--fullscreen", "--demo", "sprites"]);
        let err = err.unwrap();
        assert!(err.use_stderr());
        assert_eq!(args.demo, Demo::Surfaces);
        assert!(!args.verbose);
    }

    #[test]
    fn test_help_is_not_an_error_exit() {
        let (_, err) = parse_args(["peli", "--help"]);
        assert!(!err.unwrap().use_stderr());
    }
}
