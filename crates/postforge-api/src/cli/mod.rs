//! CLI argument definitions and command handlers.

pub mod generate;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

use postforge_types::brief::{ContentType, Platform, Tone};

/// Postforge: generate platform-optimized social media content.
#[derive(Parser)]
#[command(name = "postforge", version, about)]
pub struct Cli {
    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate content for a brief
    Generate {
        /// Business description (e.g. "Online fitness coaching brand")
        #[arg(long)]
        business_type: String,

        /// Audience description (e.g. "Busy professionals in their 30s")
        #[arg(long)]
        target_audience: String,

        /// Tone: professional, casual, inspirational, humorous
        #[arg(long, default_value = "professional")]
        tone: Tone,

        /// Platform: instagram, linkedin, twitter, youtube
        #[arg(long, default_value = "instagram")]
        platform: Platform,

        /// Content type: caption, "post ideas", hashtags, "reels ideas", "weekly plan"
        #[arg(long, default_value = "caption")]
        content_type: ContentType,

        /// Additional freeform instructions
        #[arg(long)]
        extra_instructions: Option<String>,

        /// Save the wrapped output as a .txt file in DIR instead of printing
        #[arg(long, value_name = "DIR")]
        save: Option<PathBuf>,
    },

    /// Start the REST API server
    Serve {
        #[arg(long, default_value_t = 8787)]
        port: u16,

        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
