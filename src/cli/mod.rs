//! CLI entry point for OnBrand.

pub mod handlers;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// OnBrand CLI
#[derive(Parser, Debug)]
#[command(name = "onbrand", version, about = "OnBrand: tool display and branded image generation")]
pub struct Cli {
    /// Config file (defaults to ~/.onbrand/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a transcript's tool parts as presentation records
    Render(RenderArgs),
    /// Generate one branded image
    GenerateImage(GenerateImageArgs),
    /// List registered tool display contracts
    Contracts,
}

/// Arguments for `onbrand render`.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// JSON array of messages, or JSON lines of message parts
    pub file: PathBuf,

    /// Override the caption limit for image results
    #[arg(long)]
    pub caption_limit: Option<usize>,
}

/// Arguments for `onbrand generate-image`.
#[derive(Parser, Debug)]
pub struct GenerateImageArgs {
    /// Natural-language description of the image
    pub prompt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_render_with_caption_limit() {
        let cli =
            Cli::try_parse_from(["onbrand", "render", "chat.json", "--caption-limit", "60"]).unwrap();
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.file, PathBuf::from("chat.json"));
                assert_eq!(args.caption_limit, Some(60));
            }
            other => panic!("expected Render, got {other:?}"),
        }
    }

    #[test]
    fn parse_generate_image_with_global_config() {
        let cli = Cli::try_parse_from([
            "onbrand",
            "generate-image",
            "graduation ceremony banner",
            "--config",
            "/tmp/onbrand.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/onbrand.toml")));
        match cli.command {
            Commands::GenerateImage(args) => assert_eq!(args.prompt, "graduation ceremony banner"),
            other => panic!("expected GenerateImage, got {other:?}"),
        }
    }

    #[test]
    fn parse_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["onbrand"]).is_err());
    }

    #[test]
    fn parse_generate_image_requires_prompt() {
        assert!(Cli::try_parse_from(["onbrand", "generate-image"]).is_err());
    }
}
