use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contactbook")]
#[command(about = "A small, file-backed contact book", long_about = None)]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")")
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the contact file and config (overrides CONTACTBOOK_HOME)
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    #[command(alias = "a")]
    Add {
        /// Display name (trimmed and title-cased)
        name: String,

        /// Phone number, any formatting; 10 to 15 digits
        phone: String,

        /// Email address
        #[arg(short, long)]
        email: Option<String>,

        /// Group label (defaults to "Other")
        #[arg(short, long)]
        group: Option<String>,
    },

    /// Search contacts by name
    #[command(alias = "s")]
    Search { term: String },

    /// Change fields of an existing contact; omitted fields are kept
    #[command(alias = "u")]
    Update {
        name: String,

        #[arg(short, long)]
        phone: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        #[arg(short, long)]
        group: Option<String>,
    },

    /// Delete a contact
    #[command(alias = "rm")]
    Delete {
        name: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show every contact
    #[command(alias = "ls")]
    List,

    /// Export all contacts to CSV
    Export {
        /// Destination file (defaults to the configured export file)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Show contact counts per group
    Stats,

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, export-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Interactive menu (the default when no command is given)
    Menu,
}
