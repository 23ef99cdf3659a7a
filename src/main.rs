use clap::{Arg, ArgAction, Command};
use color_eyre::Result;
use std::sync::Arc;

mod adapters;
mod application;
mod domain;
mod ports;

use adapters::{
    api::{DirectoryClient, RestDirectoryRepository},
    cache::MokaCacheAdapter,
    config::FileConfigStore,
    tui::{run_tui, App},
};
use application::DirectoryService;
use domain::CampsiteId;
use ports::ConfigStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize color-eyre for better error reporting
    color_eyre::install()?;

    // Initialize logging to file
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("campsite-cli.log")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Parse command line arguments
    let matches = cli().get_matches();

    // Load configuration
    let config_store = Arc::new(FileConfigStore::new()?);
    let mut config = config_store.load_config().await?;

    // Override with command line arguments or environment variables
    if let Some(base_url) = matches.get_one::<String>("base-url") {
        config.base_url = base_url.clone();
    } else if let Ok(base_url) = std::env::var("CAMPSITE_BASE_URL") {
        config.base_url = base_url;
    }

    if let Some(raw_ttl) = matches.get_one::<String>("cache-ttl") {
        config.cache_ttl_seconds = parse_cache_ttl(raw_ttl);
    } else if let Ok(raw_ttl) = std::env::var("CAMPSITE_CACHE_TTL") {
        config.cache_ttl_seconds = parse_cache_ttl(&raw_ttl);
    }

    if matches.get_flag("strict-validation") {
        config.strict_validation = true;
    }

    // Save config if we got new values
    config_store.save_config(&config).await?;

    // Create dependencies
    let api_client = DirectoryClient::new(config.base_url.clone());
    let directory_repo = Arc::new(RestDirectoryRepository::new(api_client));

    // Create caches
    let campsite_cache = Arc::new(MokaCacheAdapter::new(config.cache_ttl_seconds, 1000));
    let comment_cache = Arc::new(MokaCacheAdapter::new(config.cache_ttl_seconds, 1000));

    // Create application services
    let directory_service = Arc::new(DirectoryService::new(
        directory_repo,
        campsite_cache,
        comment_cache,
        config.cache_ttl_seconds,
    ));

    // Handle subcommands
    match matches.subcommand() {
        Some(("campsites", campsites_matches)) => {
            match campsites_matches.subcommand() {
                Some(("list", _)) => {
                    match directory_service.list_campsites(false).await {
                        Ok(campsites) => {
                            let json = serde_json::to_string_pretty(&campsites)?;
                            println!("{json}");
                        }
                        Err(e) => {
                            eprintln!("❌ Failed to list campsites: {e}");
                            std::process::exit(1);
                        }
                    }
                }
                Some(("get", get_matches)) => {
                    if let Some(raw_id) = get_matches.get_one::<String>("campsite_id") {
                        let campsite_id = parse_campsite_id(raw_id);

                        match directory_service.get_campsite(&campsite_id, false).await {
                            Ok(campsite) => {
                                let json = serde_json::to_string_pretty(&campsite)?;
                                println!("{json}");
                            }
                            Err(e) => {
                                eprintln!("❌ Failed to get campsite: {e}");
                                std::process::exit(1);
                            }
                        }
                    }
                }
                Some(("comments", comments_matches)) => {
                    if let Some(raw_id) = comments_matches.get_one::<String>("campsite_id") {
                        let campsite_id = parse_campsite_id(raw_id);

                        match directory_service.get_comments(&campsite_id, false).await {
                            Ok(comments) => {
                                let json = serde_json::to_string_pretty(&comments)?;
                                println!("{json}");
                            }
                            Err(e) => {
                                eprintln!("❌ Failed to list comments: {e}");
                                std::process::exit(1);
                            }
                        }
                    }
                }
                _ => {
                    eprintln!("❌ Unknown campsites subcommand");
                    std::process::exit(1);
                }
            }
        }
        Some(("comments", comments_matches)) => {
            match comments_matches.subcommand() {
                Some(("list", list_matches)) => {
                    if let Some(raw_id) = list_matches.get_one::<String>("campsite") {
                        let campsite_id = parse_campsite_id(raw_id);

                        match directory_service.get_comments(&campsite_id, false).await {
                            Ok(comments) => {
                                let json = serde_json::to_string_pretty(&comments)?;
                                println!("{json}");
                            }
                            Err(e) => {
                                eprintln!("❌ Failed to list comments: {e}");
                                std::process::exit(1);
                            }
                        }
                    }
                }
                Some(("post", post_matches)) => {
                    let raw_id = post_matches.get_one::<String>("campsite");
                    let raw_rating = post_matches.get_one::<String>("rating");
                    let author = post_matches.get_one::<String>("author");

                    if let (Some(raw_id), Some(raw_rating), Some(author)) =
                        (raw_id, raw_rating, author)
                    {
                        let campsite_id = parse_campsite_id(raw_id);
                        let rating = parse_rating(raw_rating);
                        let text = post_matches
                            .get_one::<String>("text")
                            .map(String::as_str)
                            .unwrap_or("");

                        match directory_service
                            .post_comment(&campsite_id, rating, author, text)
                            .await
                        {
                            Ok(comment) => {
                                let json = serde_json::to_string_pretty(&comment)?;
                                println!("{json}");
                            }
                            Err(e) => {
                                eprintln!("❌ Failed to post comment: {e}");
                                std::process::exit(1);
                            }
                        }
                    }
                }
                _ => {
                    eprintln!("❌ Unknown comments subcommand");
                    std::process::exit(1);
                }
            }
        }
        None => {
            // Default behavior - run TUI
            let app = App::new(directory_service, config.strict_validation);

            if let Err(e) = run_tui(app).await {
                eprintln!("❌ Application error: {e}");
                std::process::exit(1);
            }
        }
        _ => {
            eprintln!("❌ Unknown command");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn cli() -> Command {
    Command::new("campsite-cli")
        .version("0.1.0")
        .about("A Terminal User Interface for a campsite directory")
        .long_about("A fast, keyboard-driven terminal interface for browsing campsites\nand leaving comments.\n\nPoint it at a directory service with --base-url or the\nCAMPSITE_BASE_URL environment variable.")
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .value_name("URL")
                .help("Directory service URL (can also be set via CAMPSITE_BASE_URL env var)")
                .global(true)
        )
        .arg(
            Arg::new("cache-ttl")
                .long("cache-ttl")
                .value_name("SECONDS")
                .help("Cache TTL in seconds (can also be set via CAMPSITE_CACHE_TTL env var)")
                .global(true)
        )
        .arg(
            Arg::new("strict-validation")
                .long("strict-validation")
                .action(ArgAction::SetTrue)
                .help("Refuse to submit comments while the author name fails validation")
                .global(true)
        )
        .subcommand(
            Command::new("campsites")
                .about("Campsite operations")
                .subcommand(
                    Command::new("list")
                        .about("List campsites as JSON")
                )
                .subcommand(
                    Command::new("get")
                        .about("Get a specific campsite by ID")
                        .arg(
                            Arg::new("campsite_id")
                                .help("Campsite ID to fetch")
                                .required(true)
                                .index(1)
                        )
                )
                .subcommand(
                    Command::new("comments")
                        .about("List comments for a campsite")
                        .arg(
                            Arg::new("campsite_id")
                                .help("Campsite ID to fetch comments for")
                                .required(true)
                                .index(1)
                        )
                )
        )
        .subcommand(
            Command::new("comments")
                .about("Comment operations")
                .subcommand(
                    Command::new("list")
                        .about("List comments for a campsite")
                        .arg(
                            Arg::new("campsite")
                                .long("campsite")
                                .short('c')
                                .value_name("CAMPSITE_ID")
                                .help("Campsite ID to fetch comments for")
                                .required(true)
                        )
                )
                .subcommand(
                    Command::new("post")
                        .about("Post a new comment on a campsite")
                        .arg(
                            Arg::new("campsite")
                                .long("campsite")
                                .short('c')
                                .value_name("CAMPSITE_ID")
                                .help("Campsite ID to comment on")
                                .required(true)
                        )
                        .arg(
                            Arg::new("rating")
                                .long("rating")
                                .short('r')
                                .value_name("RATING")
                                .help("Rating from 1 to 5")
                                .required(true)
                        )
                        .arg(
                            Arg::new("author")
                                .long("author")
                                .short('a')
                                .value_name("NAME")
                                .help("Your name")
                                .required(true)
                        )
                        .arg(
                            Arg::new("text")
                                .long("text")
                                .short('t')
                                .value_name("TEXT")
                                .help("Comment text")
                        )
                )
        )
}

fn parse_campsite_id(raw: &str) -> CampsiteId {
    match raw.parse::<i64>() {
        Ok(id) => CampsiteId(id),
        Err(_) => {
            eprintln!("❌ Invalid campsite ID: {raw}");
            std::process::exit(1);
        }
    }
}

fn parse_rating(raw: &str) -> u8 {
    match raw.parse::<u8>() {
        Ok(rating) if (1..=5).contains(&rating) => rating,
        _ => {
            eprintln!("❌ Invalid rating: {raw} (must be 1 to 5)");
            std::process::exit(1);
        }
    }
}

fn parse_cache_ttl(raw: &str) -> u64 {
    match raw.parse::<u64>() {
        Ok(seconds) => seconds,
        Err(_) => {
            eprintln!("❌ Invalid cache TTL: {raw} (must be whole seconds)");
            std::process::exit(1);
        }
    }
}
