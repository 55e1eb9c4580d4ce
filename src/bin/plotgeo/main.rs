mod cli;
mod config;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use plotgeo::{
    extract,
    geometry::{self, PolygonError},
    plot::Project,
    Coordinate,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    cli::{Cli, Command},
    config::Config,
};

fn main() -> anyhow::Result<ExitCode> {
    let args = Cli::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = Config::load(args.config.as_deref())?;

    match args.command {
        Command::Measure { polygon } => {
            let polygon: Vec<Coordinate> = read_json(&polygon)?;

            if !geometry::is_valid(&polygon) {
                log::warn!("polygon has fewer than 3 vertices");
            }

            print_json(&geometry::measure(&polygon), &config)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check {
            project,
            polygon,
            ignore,
        } => {
            let project: Project = read_json(&project)?;
            let polygon: Vec<Coordinate> = read_json(&polygon)?;

            let mut placement = project.check_plot(&polygon, ignore.as_deref());

            if !config.strict {
                if let Some(PolygonError::DegenerateEdge { .. }) = placement.invalid {
                    placement.invalid = None;
                }
            }

            print_json(&placement, &config)?;

            Ok(if placement.is_acceptable() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Import { input } => {
            let outcome = extract::parse_file(&input);

            for error in &outcome.errors {
                log::warn!("{}: {}", input.display(), error);
            }

            print_json(&outcome, &config)?;

            Ok(if outcome.polygons.is_empty() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("cannot parse {}", path.display()))
}

fn print_json<T: Serialize>(value: &T, config: &Config) -> anyhow::Result<()> {
    let stdout = std::io::stdout().lock();

    if config.pretty {
        serde_json::to_writer_pretty(stdout, value)?;
    } else {
        serde_json::to_writer(stdout, value)?;
    }

    println!();
    Ok(())
}
