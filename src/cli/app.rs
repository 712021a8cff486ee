use clap::{Parser, Subcommand, ValueEnum};

/// Top-level CLI definition for the `segyhdr` binary.
#[derive(Parser)]
#[command(name = "segyhdr")]
#[command(about = "SEG-Y file header toolkit")]
#[command(version)]
pub struct Cli {
    /// Control colored output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Write report output to a file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Append NDJSON audit events for write operations to this file
    #[arg(long = "audit-log", global = true)]
    pub audit_log: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Controls when colored output is emitted.
#[derive(Clone, Copy, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Print the textual header and every binary header field
    Show {
        /// Path to SEG-Y file
        #[arg(short, long)]
        file: String,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Print the 40 textual header lines
    Text {
        /// Path to SEG-Y file
        #[arg(short, long)]
        file: String,

        /// Prefix each line with its 1-based line number
        #[arg(short = 'n', long)]
        numbered: bool,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Print binary header fields with absolute byte ranges
    Header {
        /// Path to SEG-Y file
        #[arg(short, long)]
        file: String,

        /// Show a single field
        #[arg(long)]
        field: Option<String>,

        /// Decode only the short (pre rev 1) header prefix
        #[arg(long)]
        legacy: bool,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Summarize revision, sample format, and segment sizes
    Info {
        /// Path to SEG-Y file
        #[arg(short, long)]
        file: String,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Hex dump of the binary header or one of its fields
    Dump {
        /// Path to SEG-Y file
        #[arg(short, long)]
        file: String,

        /// Dump only this field's bytes
        #[arg(long)]
        field: Option<String>,

        /// Output raw binary bytes (no formatting)
        #[arg(long)]
        raw: bool,
    },

    /// Assign binary header fields and write the result to a new file
    Set {
        /// Path to source SEG-Y file
        #[arg(short, long)]
        file: String,

        /// Path to write the patched file to
        #[arg(short = 'w', long = "write")]
        write: String,

        /// Field assignment NAME=VALUE (repeatable; hex accepted with 0x prefix)
        #[arg(
            short,
            long = "set",
            value_name = "NAME=VALUE",
            default_value = "nr_of_extensions=16"
        )]
        set: Vec<String>,

        /// Parse and report changes without writing
        #[arg(long = "dry-run")]
        dry_run: bool,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
