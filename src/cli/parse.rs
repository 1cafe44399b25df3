//! CLI parse: clap types for Runway. No behavior; definitions only.

use crate::gcloud::LATEST_REVISION;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Runway CLI - staged Cloud Run rollouts
#[derive(Parser)]
#[command(name = "runway")]
#[command(about = "Deploy Cloud Run services with revision tags and traffic management")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// GCP project id
    #[arg(long, global = true, default_value = "")]
    pub project: String,

    /// Cloud Run region
    #[arg(long, global = true, default_value = "")]
    pub region: String,

    /// Cloud Run service name
    #[arg(long, global = true, default_value = "")]
    pub service: String,

    /// Runner type (github-actions, cloud-build, local)
    #[arg(long, global = true, default_value = "")]
    pub runner: String,

    /// Configuration file path (default: runway.yml when present)
    #[arg(long, short = 'f', global = true)]
    pub file: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new revision without routing traffic to it
    CreateRevision {
        /// Container image
        #[arg(long, short = 'i')]
        image: String,
    },
    /// Assign a revision tag to a revision
    CreateTag {
        /// Tag name (derived from the CI ref when omitted)
        #[arg(long, short = 't', default_value = "")]
        tag: String,
        /// Revision name
        #[arg(long, default_value = LATEST_REVISION)]
        revision: String,
        /// Route traffic to the tag after assignment
        #[arg(long)]
        update_traffic: bool,
        /// Remove all other active revision tags afterwards
        #[arg(long)]
        remove_tags: bool,
    },
    /// Remove a revision tag
    RemoveTag {
        /// Tag name (derived from the CI ref when omitted)
        #[arg(long, short = 't', default_value = "")]
        tag: String,
    },
    /// Deploy a new revision and promote it to live traffic
    Deploy {
        /// Container image
        #[arg(long, short = 'i')]
        image: String,
        /// New revision tag name
        #[arg(long, short = 't', default_value = "")]
        tag: String,
        /// Create a revision tag after deploy
        #[arg(long)]
        create_tag: bool,
        /// Remove all other active revision tags afterwards
        #[arg(long)]
        remove_tags: bool,
    },
    /// Switch traffic to a revision
    SrDeploy {
        /// Revision name
        #[arg(long, default_value = LATEST_REVISION)]
        revision: String,
    },
    /// Switch traffic to an active revision tag
    StDeploy {
        /// Tag name
        #[arg(long, short = 't')]
        tag: String,
        /// Remove all active revision tags except the target tag afterwards
        #[arg(long)]
        remove_tags: bool,
    },
}
