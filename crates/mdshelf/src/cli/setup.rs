use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mdshelf",
    bin_name = "mdshelf",
    version = env!("CARGO_PKG_VERSION"),
    disable_help_subcommand = true
)]
#[command(about = "A shelf for your Markdown documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to MDSHELF_DATA or the platform data dir)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List documents
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Only documents whose title, content or tags contain this text
        #[arg(short, long, conflicts_with_all = ["category", "tag"])]
        search: Option<String>,

        /// Only documents in this category ("all" lists everything)
        #[arg(short, long, conflicts_with = "tag")]
        category: Option<String>,

        /// Only documents carrying this tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Show a document's Markdown source
    #[command(alias = "v", display_order = 2)]
    View {
        /// Position (1, #1) or id prefix
        reference: String,
    },

    /// Render a document to HTML
    #[command(display_order = 3)]
    Render {
        /// Position (1, #1) or id prefix
        reference: String,
    },

    /// Add a new document
    #[command(alias = "new", display_order = 4)]
    Add {
        /// Document title
        #[arg(long)]
        title: String,

        /// Category (defaults to the configured default category)
        #[arg(short, long)]
        category: Option<String>,

        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,

        /// Markdown content (read from stdin when omitted)
        #[arg(long)]
        content: Option<String>,
    },

    /// Edit fields of an existing document
    #[command(alias = "e", display_order = 5)]
    Edit {
        /// Position (1, #1) or id prefix
        reference: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(short, long)]
        category: Option<String>,

        /// Comma-separated tags, replaces the current tags
        #[arg(long)]
        tags: Option<String>,

        #[arg(long)]
        content: Option<String>,
    },

    /// Import Markdown or text files as documents
    #[command(display_order = 6)]
    Import {
        /// Files to import
        #[arg(required = true, num_args = 1..)]
        files: Vec<PathBuf>,

        /// Title for every imported document (defaults to the file name)
        #[arg(long)]
        title: Option<String>,

        /// Category (defaults to the configured import category)
        #[arg(short, long)]
        category: Option<String>,

        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
    },

    /// List categories with document counts
    #[command(display_order = 10)]
    Categories,

    /// List tags with document counts
    #[command(display_order = 11)]
    Tags,

    /// Show the most recently updated documents
    #[command(display_order = 12)]
    Recent,

    /// Show or toggle the theme
    #[command(display_order = 20)]
    Theme {
        /// Switch between light and dark
        #[arg(long)]
        toggle: bool,
    },
}
