use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "quill")]
#[command(about = "Track pen-pal mail and zine listings from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional path to local database file
    #[arg(long, global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage magazine listings
    Listing {
        #[command(subcommand)]
        command: ListingCommands,
    },
    /// Manage mail correspondence records
    Mail {
        #[command(subcommand)]
        command: MailCommands,
    },
    /// Show record counts per kind
    Stats,
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ListingCommands {
    /// Record a new listing
    #[command(alias = "new")]
    Add(ListingAddArgs),
    /// Import listings from a JSON file
    Import {
        /// Path to the import file
        file: PathBuf,
    },
    /// Export all listings as JSON
    Export {
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// List recent listings
    List {
        /// Number of listings to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search listings by indexed field
    Search(ListingSearchArgs),
    /// Delete a listing
    Delete {
        /// Listing ID
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum MailCommands {
    /// Record a new mail entry
    #[command(alias = "new")]
    Add(MailAddArgs),
    /// Import mail records from a JSON file
    Import {
        /// Path to the import file
        file: PathBuf,
    },
    /// Export all mail records as JSON
    Export {
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// List recent mail records
    List {
        /// Number of records to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search mail exchanged with a member
    Search {
        /// Member number of the correspondent
        #[arg(long)]
        member: String,
        /// Number of records to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a mail record
    Delete {
        /// Mail record ID
        id: i64,
    },
}

#[derive(Args)]
pub struct ListingAddArgs {
    /// Magazine volume
    #[arg(long)]
    pub volume: u32,
    /// Issue number within the volume
    #[arg(long)]
    pub issue: u32,
    /// Publication year
    #[arg(long)]
    pub year: u32,
    /// Listing category
    #[arg(long)]
    pub category: String,
    /// Member number of the advertiser
    #[arg(long)]
    pub member: String,
    /// Advertiser accepts international replies
    #[arg(long)]
    pub international: bool,
    /// Listing asks for reviews rather than letters
    #[arg(long)]
    pub review: bool,
    /// Ad text
    pub text: String,
}

#[derive(Args)]
pub struct MailAddArgs {
    /// Member number of the correspondent
    #[arg(long)]
    pub member: String,
    /// Date in YYYY-MM-DD form
    #[arg(long)]
    pub date: NaiveDate,
    /// Entry answers a previous letter
    #[arg(long)]
    pub reply: bool,
    /// Notes about the letter
    #[arg(long, default_value = "")]
    pub notes: String,
}

#[derive(Args)]
pub struct ListingSearchArgs {
    /// Filter by category
    #[arg(long)]
    pub category: Option<String>,
    /// Filter by member number
    #[arg(long)]
    pub member: Option<String>,
    /// Number of listings to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
