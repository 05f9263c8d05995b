use crate::types::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mailview")]
#[command(about = "Render email listings as JSON, Markdown, or bare ids", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Mailbox JSON document; "-" or absent reads stdin
    #[arg(long, global = true)]
    pub input: Option<String>,

    #[arg(long, default_value = "markdown", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the mailbox listing
    List {
        /// Title folder, overriding the one in the mailbox document
        #[arg(long)]
        folder: Option<String>,

        /// Field selection, e.g. "id,from" or "*,^bodyText"
        #[arg(long)]
        fields: Option<String>,

        #[arg(long, allow_negative_numbers = true)]
        limit: Option<i64>,

        #[arg(long, allow_negative_numbers = true)]
        offset: Option<i64>,

        #[arg(long, allow_negative_numbers = true)]
        page: Option<i64>,
    },

    /// Render one email by id
    Read {
        id: String,

        /// Field selection, e.g. "id,subject" or "*,^bodyHtml"
        #[arg(long)]
        fields: Option<String>,
    },

    /// Filter emails by a case-insensitive substring, then render a listing
    Search {
        query: String,

        #[arg(long)]
        fields: Option<String>,

        #[arg(long, allow_negative_numbers = true)]
        limit: Option<i64>,

        #[arg(long, allow_negative_numbers = true)]
        offset: Option<i64>,

        #[arg(long, allow_negative_numbers = true)]
        page: Option<i64>,
    },

    /// List the field names available in the mailbox
    Fields,
}
