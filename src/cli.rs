//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "gallery-social", version, about = "Reactions and sharing for gallery photos")]
pub struct Cli {
    /// Path to config file (default: platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List configured share targets
    Targets,

    /// Show reaction counts for a photo
    Reactions { photo_id: String },

    /// React to a photo with one of 👍 😍 🔥 👏 🌟 🙌
    React { photo_id: String, symbol: String },

    /// Copy the photo page link to the clipboard
    Link { photo_id: String },

    /// Print a pre-filled social share link
    Social {
        target: String,
        photo_id: String,
        /// Photo title used in the share text
        #[arg(long)]
        title: Option<String>,
    },

    /// Copy the iframe embed snippet to the clipboard
    Embed {
        photo_id: String,
        #[arg(long)]
        width: u32,
        #[arg(long)]
        height: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_react() {
        let cli = Cli::try_parse_from(["gallery-social", "react", "abc", "🔥"]).unwrap();
        match cli.command {
            Command::React { photo_id, symbol } => {
                assert_eq!(photo_id, "abc");
                assert_eq!(symbol, "🔥");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn embed_requires_dimensions() {
        assert!(Cli::try_parse_from(["gallery-social", "embed", "abc"]).is_err());
    }

    #[test]
    fn global_config_flag() {
        let cli =
            Cli::try_parse_from(["gallery-social", "targets", "--config", "/tmp/c.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
    }
}
