use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;

/// Upper bound for `growth --appends`, about 40 MB of `i32` storage.
pub const MAX_APPENDS: u64 = 10_000_000;

#[derive(Parser, Debug)]
#[command(name = "exercises")]
#[command(version, about = "Point<T> and growable integer buffer exercises", long_about = None)]
pub struct Cli {
    /// Set verbose level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Walk through the growable integer buffer operations
    Vector,

    /// Show how capacity grows over a run of appends
    Growth {
        /// Number of values to append
        #[arg(
            short = 'n',
            long,
            default_value_t = 1000,
            value_parser = clap::value_parser!(u64).range(..=MAX_APPENDS)
        )]
        appends: u64,
    },

    /// Calculate distance between two points
    Distance {
        /// X coordinate of first point
        #[arg(short = 'x', long)]
        x1: i32,
        /// Y coordinate of first point
        #[arg(short = 'y', long)]
        y1: i32,
        /// X coordinate of second point
        #[arg(long)]
        x2: i32,
        /// Y coordinate of second point
        #[arg(long)]
        y2: i32,
    },

    /// Move a point
    Move {
        /// Initial X coordinate
        #[arg(short = 'x', allow_negative_numbers = true)]
        x: i32,
        /// Initial Y coordinate
        #[arg(short = 'y', allow_negative_numbers = true)]
        y: i32,
        /// Delta X
        #[arg(long, allow_negative_numbers = true)]
        dx: i32,
        /// Delta Y
        #[arg(long, allow_negative_numbers = true)]
        dy: i32,
    },

    /// Perform arithmetic operations on points
    Arithmetic {
        /// X coordinate of point A
        #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
        ax: i32,
        /// Y coordinate of point A
        #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
        ay: i32,
        /// X coordinate of point B
        #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
        bx: i32,
        /// Y coordinate of point B
        #[arg(long, default_value_t = 7, allow_negative_numbers = true)]
        by: i32,
        /// Scalar for multiplication
        #[arg(short, long, default_value_t = 2.5, allow_negative_numbers = true)]
        scalar: f64,
    },

    /// Run full demonstration of all Point<T> features
    Demo,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Maximum log level selected by `-v` flags.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}
