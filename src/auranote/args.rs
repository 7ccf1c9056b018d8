use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for
/// non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "auranote", bin_name = "auranote", version = get_version())]
#[command(about = "Tabbed markdown notes for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new tab and make it active
    #[command(alias = "n", display_order = 1)]
    New {
        /// Title words (joined with spaces; defaults to the next "Note N")
        #[arg(trailing_var_arg = true)]
        title: Vec<String>,
    },

    /// List the tab tree
    #[command(alias = "ls", display_order = 2)]
    List,

    /// Show a tab (rendered by default)
    #[command(alias = "v", display_order = 3)]
    View {
        /// Tab index (defaults to the active tab)
        index: Option<String>,

        /// Show the raw markdown instead of the rendered view
        #[arg(long)]
        raw: bool,
    },

    /// Edit a tab in $EDITOR
    #[command(alias = "e", display_order = 4)]
    Edit {
        /// Tab index (defaults to the active tab)
        index: Option<String>,
    },

    /// Rename a tab (1, 2, …) or folder (f1, f2, …)
    #[command(display_order = 5)]
    Rename {
        index: String,

        /// New title words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Close a tab
    #[command(alias = "rm", display_order = 6)]
    Close {
        index: String,
    },

    /// Make a tab active
    #[command(display_order = 7)]
    Switch {
        index: String,
    },

    /// Cycle to the next tab (wraps around)
    #[command(display_order = 8)]
    Next,

    /// Cycle to the previous tab (wraps around)
    #[command(display_order = 9)]
    Prev,

    /// Reformat the active tab's markdown into canonical form
    #[command(display_order = 10)]
    Tidy,

    /// Manage folders
    #[command(subcommand, display_order = 11)]
    Folder(FolderCommands),

    /// Move a tab into a folder, or back to the root
    #[command(alias = "mv", display_order = 12)]
    Move {
        /// Tab index
        tab: String,

        /// Target folder index (f1, f2, …); omit to move to the root
        folder: Option<String>,
    },

    /// Reorder a tab or folder (drag-and-drop, keyboard edition)
    #[command(display_order = 13)]
    Reorder {
        /// Index of the tab or folder to move
        index: String,

        /// Drop before this index (same kind); omit to drop at the end
        before: Option<String>,

        /// For tabs: drop at the end of this folder instead
        #[arg(long, value_name = "FOLDER", conflicts_with = "before")]
        into: Option<String>,
    },

    /// Import markdown files as new tabs
    #[command(display_order = 14)]
    Import {
        /// Paths to .md files
        #[arg(required = true, num_args = 1..)]
        paths: Vec<PathBuf>,
    },

    /// Export a tab as markdown, or everything as a tar.gz archive
    #[command(display_order = 15)]
    Export {
        /// Tab index (omit with --all)
        index: Option<String>,

        /// Export all tabs to one archive
        #[arg(long)]
        all: bool,

        /// Output directory (defaults to the current directory)
        #[arg(long, short = 'd')]
        dir: Option<PathBuf>,
    },

    /// Get or set display preferences
    #[command(display_order = 16)]
    Config {
        /// Preference key (theme, font, gradient, glow, gradient-outline,
        /// confirm-close)
        key: Option<String>,

        /// Value to set (if omitted, prints the current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum FolderCommands {
    /// Create a folder
    #[command(display_order = 1)]
    New {
        /// Name words (joined with spaces; defaults to the next "Folder N")
        #[arg(trailing_var_arg = true)]
        name: Vec<String>,
    },

    /// Delete a folder, choosing what happens to its notes
    #[command(alias = "rm", display_order = 2)]
    Delete {
        /// Folder index (f1, f2, …)
        index: String,

        /// Delete the folder's notes along with it
        #[arg(long, conflicts_with = "keep_notes")]
        delete_notes: bool,

        /// Keep the notes, moving them to the root
        #[arg(long)]
        keep_notes: bool,
    },

    /// Collapse or expand a folder in listings
    #[command(display_order = 3)]
    Toggle {
        /// Folder index (f1, f2, …)
        index: String,
    },
}
