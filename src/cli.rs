//! CLI definitions for exhl
//!
//! Kept apart from main.rs so the command tree can be rendered by
//! `exhl completions` and inspected in tests.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

/// Build clap styles for consistent CLI appearance.
///
/// - Green: headers, usage, command names
/// - White: descriptions, placeholders
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "exhl")]
#[command(about = "Extract highlights from markdown notes")]
#[command(
    long_about = "exhl - Extract highlights from markdown notes.

Finds ==highlighted==, <mark>marked</mark> and (optionally) **bold** spans and
any custom patterns you configure, then renders them as a markdown list.

QUICK START:
    exhl extract note.md              Print the highlights of a note
    exhl extract note.md --copy       Copy them to the clipboard
    exhl property note.md             Store them in the note's frontmatter
    exhl explode note.md              Create one note per highlight

Settings are read from ~/.config/exhl/config.toml (see `exhl config show`)."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Use a different settings file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the highlights of a note
    #[command(long_about = "Extract the highlights of a note and print them as a markdown list.

Footnote numbers continue from the last run unless --footnote-start is given.

EXAMPLES:
    exhl extract note.md
    exhl extract note.md --links --footnotes
    exhl extract note.md --json")]
    Extract {
        #[command(flatten)]
        note: NoteArgs,

        /// Print the full extraction as JSON instead of markdown
        #[arg(long)]
        json: bool,

        /// Also copy the rendered markdown to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Store the highlights in the note's frontmatter
    #[command(long_about = "Render the highlights of a note and store them as a frontmatter property.

The frontmatter block is created when the note has none. Other properties are kept.

EXAMPLES:
    exhl property note.md
    exhl property note.md --name quotes")]
    Property {
        #[command(flatten)]
        note: NoteArgs,

        /// Property name (defaults to output.property from the settings)
        #[arg(long, value_name = "NAME")]
        name: Option<String>,
    },

    /// Create one note per highlight
    #[command(long_about = "Create a companion note for every highlight, named after the highlight.

Each note quotes the highlight and links back to the source note. Notes that
already exist are left alone. Relative directories are resolved against the
folder of the source note.

EXAMPLES:
    exhl explode note.md
    exhl explode note.md --dir quotes --index")]
    Explode {
        /// Path to the markdown note
        file: PathBuf,

        /// Note title (defaults to the file name without extension)
        #[arg(long)]
        title: Option<String>,

        /// Directory for the new notes (defaults to explode.directory)
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Also write a "Highlights for <title>" note linking to each one
        #[arg(long)]
        index: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

/// Arguments shared by the commands that render a note.
#[derive(Args, Debug, Clone)]
pub struct NoteArgs {
    /// Path to the markdown note
    pub file: PathBuf,

    /// Note title (defaults to the file name without extension)
    #[arg(long)]
    pub title: Option<String>,

    /// Render highlights as [[links]]
    #[arg(long)]
    pub links: bool,

    /// Append footnotes pointing back to the note
    #[arg(long)]
    pub footnotes: bool,

    /// First footnote number for this run
    #[arg(long, value_name = "N")]
    pub footnote_start: Option<u32>,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Open configuration in editor
    Edit,
    /// Print the configuration file path
    Path,
}
