use clap::{Parser, Subcommand, ValueEnum};
use roster::api::SearchMethod;
use roster::model::{SortAlgorithm, SortDirection, SortKey};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version)]
#[command(about = "Student record manager with validated fields and JSON storage", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Record file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Use the per-user data directory instead of the working directory
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Login username (prompted when omitted)
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Login password (prompted without echo when omitted)
    #[arg(short, long, global = true)]
    pub password: Option<String>,

    /// Verbose output, repeat for more
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a student record
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Student number, exactly 12 digits
        npm: String,
        /// Name, letters and spaces only
        nama: String,
        /// Study program
        prodi: String,
        /// Class section
        kelas: String,
    },

    /// Replace name, program and section of a record
    #[command(alias = "edit", display_order = 2)]
    Update {
        /// Student number of the record to change
        npm: String,
        nama: String,
        prodi: String,
        kelas: String,
    },

    /// Delete every record with the given student number
    #[command(alias = "rm", display_order = 3)]
    Delete { npm: String },

    /// List all records in stored order
    #[command(alias = "ls", display_order = 4)]
    List,

    /// Find a record by student number
    #[command(display_order = 5)]
    Search {
        npm: String,

        /// Search strategy; binary sorts by student number first
        #[arg(short, long, value_enum, default_value_t = MethodArg::Linear)]
        method: MethodArg,
    },

    /// Sort records and show the result
    #[command(display_order = 6)]
    Sort {
        /// Sorting algorithm
        #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Insertion)]
        algorithm: AlgorithmArg,

        /// Field to sort by
        #[arg(short, long, value_enum, default_value_t = SortByArg::Name)]
        by: SortByArg,

        /// Descending order
        #[arg(short, long)]
        desc: bool,

        /// Write the sorted order back to the record file
        #[arg(long)]
        persist: bool,
    },

    /// Get or set configuration (data-file, username, password)
    #[command(display_order = 7)]
    Config {
        /// Configuration key
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    Linear,
    Binary,
}

impl From<MethodArg> for SearchMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Linear => SearchMethod::Linear,
            MethodArg::Binary => SearchMethod::Binary,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    Insertion,
    Selection,
    Bubble,
}

impl From<AlgorithmArg> for SortAlgorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Insertion => SortAlgorithm::Insertion,
            AlgorithmArg::Selection => SortAlgorithm::Selection,
            AlgorithmArg::Bubble => SortAlgorithm::Bubble,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortByArg {
    #[value(alias = "nama")]
    Name,
    #[value(alias = "npm")]
    Identifier,
    #[value(alias = "prodi")]
    Program,
    #[value(alias = "kelas")]
    Section,
}

impl From<SortByArg> for SortKey {
    fn from(arg: SortByArg) -> Self {
        match arg {
            SortByArg::Name => SortKey::Name,
            SortByArg::Identifier => SortKey::Identifier,
            SortByArg::Program => SortKey::Program,
            SortByArg::Section => SortKey::Section,
        }
    }
}

pub fn direction(desc: bool) -> SortDirection {
    if desc {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    }
}
