//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use scholarhub_core::{ExportFormat, SortKey, StatusFilter};
use scholarhub_domain::{PublicationStatus, UserRole};

/// Environment variable consulted for `--password`
pub const PASSWORD_ENV: &str = "SCHOLARHUB_PASSWORD";

/// scholarhub - search, browse and publish academic papers
#[derive(Parser, Debug)]
#[command(name = "scholarhub")]
#[command(version)]
#[command(about = "Search, browse and publish academic papers", long_about = None)]
pub struct Cli {
    /// Config file (default: <config dir>/scholarhub/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL, overriding config and SCHOLARHUB_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Search by text, author, year range and categories
    Search {
        /// Matched against title, abstract and keywords
        #[arg(short, long)]
        query: Option<String>,

        /// Substring of an author's name
        #[arg(short, long)]
        author: Option<String>,

        /// Earliest publication year
        #[arg(long)]
        from: Option<i32>,

        /// Latest publication year
        #[arg(long)]
        to: Option<i32>,

        /// Category to match (repeatable; any one suffices)
        #[arg(short = 'c', long = "category")]
        categories: Vec<String>,

        /// Keyword tag (repeatable)
        #[arg(short = 'k', long = "keyword")]
        keywords: Vec<String>,
    },

    /// List publications with a quick filter and sort order
    List {
        /// Text matched against title and abstract
        #[arg(default_value = "")]
        text: String,

        /// all, draft, published or under_review
        #[arg(long, default_value_t = StatusFilter::All)]
        status: StatusFilter,

        /// recent, oldest, title or year
        #[arg(long, default_value_t = SortKey::Recent)]
        sort: SortKey,
    },

    /// Show one publication
    Show { id: String },

    /// Counts and recent publications for the signed-in user
    Dashboard,

    /// Submit a new publication with an attached document
    Create {
        #[arg(long)]
        title: String,

        #[arg(long = "abstract")]
        abstract_text: String,

        #[arg(long)]
        year: i32,

        /// Body text
        #[arg(long, default_value = "")]
        content: String,

        #[arg(long)]
        doi: Option<String>,

        #[arg(long)]
        journal: Option<String>,

        #[arg(short = 'k', long = "keyword")]
        keywords: Vec<String>,

        #[arg(short = 'c', long = "category")]
        categories: Vec<String>,

        #[arg(long, default_value_t = PublicationStatus::Draft)]
        status: PublicationStatus,

        /// Document to attach (PDF or Word)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Sign in and remember the session
    Login {
        email: String,

        /// Read from stdin when neither the flag nor the variable is set
        #[arg(long, env = PASSWORD_ENV, hide_env_values = true)]
        password: Option<String>,
    },

    /// Create an account
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// Read from stdin when neither the flag nor the variable is set
        #[arg(long, env = PASSWORD_ENV, hide_env_values = true)]
        password: Option<String>,

        #[arg(long, default_value = "")]
        affiliation: String,

        /// autor, revisor or investigador
        #[arg(long, default_value_t = UserRole::Author)]
        role: UserRole,
    },

    /// Forget the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Comment on a publication as the signed-in user
    Comment { id: String, text: String },

    /// Edit the signed-in user's profile
    Profile {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        affiliation: Option<String>,

        #[arg(long)]
        bio: Option<String>,

        #[arg(long)]
        role: Option<UserRole>,
    },

    /// Write a plain-text summary of a publication
    Export {
        id: String,

        /// pdf or word; selects the file extension
        #[arg(long, default_value_t = ExportFormat::Pdf)]
        format: ExportFormat,

        /// Output file (default: derived from the title)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Write a default config file if none exists
    Init,
}

impl CliCommand {
    /// Whether the command reads the publication store
    pub fn needs_store(&self) -> bool {
        matches!(
            self,
            CliCommand::Search { .. }
                | CliCommand::List { .. }
                | CliCommand::Show { .. }
                | CliCommand::Dashboard
                | CliCommand::Export { .. }
                | CliCommand::Comment { .. }
        )
    }

    /// Password still missing after flag and environment lookup
    pub fn password_slot(&mut self) -> Option<&mut Option<String>> {
        match self {
            CliCommand::Login { password, .. } | CliCommand::Register { password, .. }
                if password.is_none() =>
            {
                Some(password)
            }
            _ => None,
        }
    }
}
