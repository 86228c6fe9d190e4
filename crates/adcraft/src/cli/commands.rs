//! CLI command definitions.

use adcraft::{AspectRatio, MediaGenerationOptions, MediaRequestKind};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Adcraft - turn a prompt into a published social media ad
#[derive(Parser, Debug)]
#[command(name = "adcraft")]
#[command(about = "Turn a prompt into ad copy, media and a published post", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Extra configuration file, applied over the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate ad copy for a prompt
    Generate {
        /// Free-text description of the ad
        #[arg(long)]
        prompt: String,
    },

    /// Generate ad copy and synthesize media for it
    Media {
        /// Free-text description of the ad
        #[arg(long)]
        prompt: String,

        /// Media options
        #[command(flatten)]
        media: MediaArgs,
    },

    /// Publish an existing media URL with a caption
    Publish {
        /// Publicly reachable media URL
        #[arg(long)]
        media_url: String,

        /// Full caption, hashtags included
        #[arg(long)]
        caption: String,

        /// The media is a video (published as a reel)
        #[arg(long)]
        video: bool,
    },

    /// Generate, synthesize and publish in one go
    Run {
        /// Free-text description of the ad
        #[arg(long)]
        prompt: String,

        /// Skip media synthesis and publish the fallback image
        #[arg(long)]
        no_media: bool,

        /// Media options
        #[command(flatten)]
        media: MediaArgs,

        /// Stop after generating the draft
        #[arg(long)]
        dry_run: bool,

        /// Record the attempt for this user id and print the record.
        /// Records are held in memory and discarded when the command exits.
        #[arg(long)]
        owner: Option<String>,
    },
}

/// Media synthesis options
#[derive(Args, Debug, Clone)]
pub struct MediaArgs {
    /// Which assets to produce: image, video or both
    #[arg(long, default_value = "image")]
    pub kind: MediaRequestKind,

    /// Extra direction for the media
    #[arg(long, default_value = "")]
    pub direction: String,

    /// Rendering style
    #[arg(long, default_value = "photorealistic")]
    pub style: String,

    /// Frame shape: 1:1, 9:16 or 16:9
    #[arg(long, default_value = "1:1")]
    pub aspect_ratio: AspectRatio,

    /// Video length in seconds (3-15), required for video
    #[arg(long)]
    pub duration: Option<u8>,
}

impl MediaArgs {
    /// Convert to generation options.
    pub fn to_options(&self) -> Result<MediaGenerationOptions, adcraft::MediaGenerationOptionsBuilderError> {
        adcraft::MediaGenerationOptionsBuilder::default()
            .prompt(self.direction.clone())
            .kind(self.kind)
            .style(self.style.clone())
            .aspect_ratio(self.aspect_ratio)
            .duration_seconds(self.duration)
            .build()
    }
}
