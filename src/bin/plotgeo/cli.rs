use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about, version)]
pub struct Cli {
    #[arg(long, global = true, value_name = "CONFIG FILE",
	  help = "JSON file with output and validation settings")]
    pub config: Option<PathBuf>,
    #[arg(short, long, global = true, help = "Log what is being checked to stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the area and perimeter of a polygon
    Measure {
        #[arg(value_name = "POLYGON FILE",
	      help = "JSON array of {\"lat\", \"lng\"} points")]
        polygon: PathBuf,
    },
    /// Check whether a polygon can be saved as a plot of a project
    Check {
        #[arg(value_name = "PROJECT FILE", help = "Project JSON with boundary and plots")]
        project: PathBuf,
        #[arg(value_name = "POLYGON FILE",
	      help = "JSON array of {\"lat\", \"lng\"} points")]
        polygon: PathBuf,
        #[arg(short, long, value_name = "PLOT ID",
	      help = "Plot being re-drawn, left out of the overlap test")]
        ignore: Option<String>,
    },
    /// Extract polygons from a KML or KMZ file
    Import {
        #[arg(value_name = "KML OR KMZ FILE")]
        input: PathBuf,
    },
}
