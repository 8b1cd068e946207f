use super::menu;
use super::print::{print_json, print_matches, print_messages, print_reviews};
use super::setup::{Cli, Commands};
use clap::Parser;
use reviewdb::api::{ConfigAction, MessageLevel, ReviewApi};
use reviewdb::config::ReviewConfig;
use reviewdb::error::{ReviewError, Result};
use reviewdb::model::{is_single_word, validate_rating};
use reviewdb::store::fs::FileStore;
use std::path::{Path, PathBuf};

pub(super) struct AppContext {
    pub(super) api: ReviewApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // Config does not need the review file loaded
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&cwd, key.clone(), value.clone());
    }

    let mut ctx = init_context(&cli, &cwd);
    let loaded = ctx.api.load()?;

    match cli.command {
        None => {
            print_messages(&loaded.messages);
            menu::run(&mut ctx)
        }
        Some(command) => {
            // One-shot commands stay quiet about the load unless it went wrong
            let trouble: Vec<_> = loaded
                .messages
                .into_iter()
                .filter(|m| m.level != MessageLevel::Info)
                .collect();
            print_messages(&trouble);
            match command {
                Commands::List { json } => handle_list(&ctx, json),
                Commands::Search { name } => handle_search(&ctx, name.join(" ")),
                Commands::Add {
                    subject,
                    rating,
                    reviewer,
                } => handle_add(&mut ctx, subject, rating, reviewer),
                Commands::Config { .. } => Ok(()),
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .try_init();
}

fn init_context(cli: &Cli, cwd: &Path) -> AppContext {
    let config = ReviewConfig::load(cwd).unwrap_or_else(|e| {
        log::warn!("Ignoring unreadable config: {}", e);
        ReviewConfig::default()
    });
    let data_file = match &cli.file {
        Some(path) => path.clone(),
        None => config.data_file_in(cwd),
    };
    log::debug!("Using review file {}", data_file.display());

    AppContext {
        api: ReviewApi::new(FileStore::new(data_file)),
    }
}

fn handle_list(ctx: &AppContext, json: bool) -> Result<()> {
    let result = ctx.api.list_all()?;
    if json {
        return print_json(&result.listed_reviews);
    }
    print_reviews(&result.listed_reviews);
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_search(ctx: &AppContext, name: String) -> Result<()> {
    let result = ctx.api.search(&name)?;
    print_matches(&result.listed_reviews);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, subject: String, rating: i32, reviewer: String) -> Result<()> {
    if subject.trim().is_empty() {
        return Err(ReviewError::Api("Trend name cannot be empty".into()));
    }
    let rating = validate_rating(rating)?;
    if !is_single_word(&reviewer) {
        return Err(ReviewError::Api(
            "Reviewer name must be a single word".into(),
        ));
    }

    let result = ctx.api.add(subject, rating, reviewer)?;
    print_messages(&result.messages);
    if result.has_level(MessageLevel::Warning) {
        return Err(ReviewError::CapacityReached(ctx.api.records().capacity()));
    }
    Ok(())
}

fn handle_config(cwd: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("data-file"), None) => ConfigAction::ShowKey("data-file".to_string()),
        (Some("data-file"), Some(v)) => ConfigAction::SetDataFile(v),
        (Some(other), _) => ConfigAction::ShowKey(other.to_string()),
    };

    let result = reviewdb::commands::config::run(cwd, action)?;
    if let Some(config) = &result.config {
        println!("data-file = {}", config.data_file.display());
    }
    print_messages(&result.messages);
    Ok(())
}
