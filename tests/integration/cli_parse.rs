//! CLI surface tests: every subcommand parses with its documented flags.

use clap::Parser;
use runway::cli::{Cli, Commands};
use runway::gcloud::LATEST_REVISION;

#[test]
fn create_revision_parses_image() {
    let cli = Cli::try_parse_from(["runway", "create-revision", "--image", "gcr.io/p/app:1"])
        .unwrap();
    match cli.command {
        Commands::CreateRevision { image } => assert_eq!(image, "gcr.io/p/app:1"),
        _ => panic!("wrong command"),
    }
}

#[test]
fn create_revision_requires_image_flag() {
    assert!(Cli::try_parse_from(["runway", "create-revision"]).is_err());
}

#[test]
fn create_tag_defaults_to_latest_revision() {
    let cli = Cli::try_parse_from(["runway", "create-tag"]).unwrap();
    match cli.command {
        Commands::CreateTag {
            tag,
            revision,
            update_traffic,
            remove_tags,
        } => {
            assert_eq!(tag, "");
            assert_eq!(revision, LATEST_REVISION);
            assert!(!update_traffic);
            assert!(!remove_tags);
        }
        _ => panic!("wrong command"),
    }
}

#[test]
fn create_tag_accepts_all_flags() {
    let cli = Cli::try_parse_from([
        "runway",
        "create-tag",
        "--tag",
        "rel-1",
        "--revision",
        "my-service-abc1234",
        "--update-traffic",
        "--remove-tags",
    ])
    .unwrap();
    match cli.command {
        Commands::CreateTag {
            tag,
            revision,
            update_traffic,
            remove_tags,
        } => {
            assert_eq!(tag, "rel-1");
            assert_eq!(revision, "my-service-abc1234");
            assert!(update_traffic);
            assert!(remove_tags);
        }
        _ => panic!("wrong command"),
    }
}

#[test]
fn deploy_parses_short_flags() {
    let cli = Cli::try_parse_from([
        "runway", "deploy", "-i", "gcr.io/p/app:1", "-t", "rel-1", "--create-tag",
    ])
    .unwrap();
    match cli.command {
        Commands::Deploy {
            image,
            tag,
            create_tag,
            remove_tags,
        } => {
            assert_eq!(image, "gcr.io/p/app:1");
            assert_eq!(tag, "rel-1");
            assert!(create_tag);
            assert!(!remove_tags);
        }
        _ => panic!("wrong command"),
    }
}

#[test]
fn sr_deploy_defaults_to_latest() {
    let cli = Cli::try_parse_from(["runway", "sr-deploy"]).unwrap();
    match cli.command {
        Commands::SrDeploy { revision } => assert_eq!(revision, LATEST_REVISION),
        _ => panic!("wrong command"),
    }
}

#[test]
fn st_deploy_requires_tag() {
    assert!(Cli::try_parse_from(["runway", "st-deploy"]).is_err());

    let cli = Cli::try_parse_from(["runway", "st-deploy", "--tag", "rel-1"]).unwrap();
    match cli.command {
        Commands::StDeploy { tag, remove_tags } => {
            assert_eq!(tag, "rel-1");
            assert!(!remove_tags);
        }
        _ => panic!("wrong command"),
    }
}

#[test]
fn remove_tag_parses_optional_tag() {
    let cli = Cli::try_parse_from(["runway", "remove-tag"]).unwrap();
    match cli.command {
        Commands::RemoveTag { tag } => assert_eq!(tag, ""),
        _ => panic!("wrong command"),
    }
}

#[test]
fn global_flags_apply_to_subcommands() {
    let cli = Cli::try_parse_from([
        "runway",
        "sr-deploy",
        "--project",
        "my-project",
        "--region",
        "asia-northeast1",
        "--service",
        "my-service",
        "--runner",
        "github-actions",
    ])
    .unwrap();

    assert_eq!(cli.project, "my-project");
    assert_eq!(cli.region, "asia-northeast1");
    assert_eq!(cli.service, "my-service");
    assert_eq!(cli.runner, "github-actions");
    assert!(cli.file.is_none());
}
