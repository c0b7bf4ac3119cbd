//! Root CLI structure for mocap-rs

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mocap-rs")]
#[command(about = "Command-line tools for BVH-style motion capture files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a file and display its joint tree, frame metadata, and bounds
    Info {
        /// Path to the motion capture file
        file: PathBuf,

        /// Show per-joint offsets
        #[arg(short, long)]
        detailed: bool,
    },

    /// Validate that a file parses cleanly
    Validate {
        /// Path to the motion capture file
        file: PathBuf,
    },

    /// Parse a file and rewrite it (round-trips the document)
    Convert {
        /// Input motion capture file
        input: PathBuf,

        /// Output file
        output: PathBuf,
    },

    /// Play a clip headlessly, printing the resolved frame positions
    Play {
        /// Path to the motion capture file
        file: PathBuf,

        /// Playback rate in frames per second (default: authored rate)
        #[arg(short, long)]
        rate: Option<f32>,

        /// Number of ticks to simulate
        #[arg(short, long, default_value_t = 20)]
        ticks: u32,

        /// Simulated tick rate in ticks per second
        #[arg(long, default_value_t = 60.0)]
        tick_rate: f32,
    },
}
