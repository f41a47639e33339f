use clap::Parser;
use eemis_lookup::{cli, config, dispatcher, display, error};

use cli::{Cli, Commands};
use config::Config;
use dispatcher::{Dispatcher, LookupOutcome, ResponseCache, Source};
use error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.verbose { "debug" } else { "warn" }),
    )
    .init();

    let config = Config::load()?;

    match cli.command {
        Commands::Lookup {
            query,
            json,
            photo_out,
            no_cache,
        } => {
            let query = query.trim().to_string();
            if query.is_empty() {
                eprintln!("✖ Query is required");
                return Err(error::LookupError::EmptyQuery);
            }

            let use_cache = config.use_cache && !no_cache;
            let dispatcher = Dispatcher::new(config.base_url.clone(), use_cache);

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message("Querying registry...");
            spinner.enable_steady_tick(Duration::from_millis(100));

            let (outcome, source) = dispatcher.dispatch(&query).await;
            spinner.finish_and_clear();

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
                return Ok(());
            }

            match outcome {
                LookupOutcome::Failure { message } => {
                    println!("✖ {}", message);
                }
                LookupOutcome::Record(record) => {
                    match source {
                        Some(Source::Cache) => println!("✔ Result (cached)\n"),
                        _ => println!("✔ Result\n"),
                    }

                    let rows = display::display_rows(&record, &config.photo_field);
                    let width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
                    for row in &rows {
                        println!("  {:<width$}  {}", row.label, row.value);
                    }

                    if let Some(photo) = display::extract_photo(&record, &config.photo_field)? {
                        println!(
                            "\n  Photo: {}x{} PNG, {} bytes",
                            photo.width,
                            photo.height,
                            photo.bytes.len()
                        );
                        match photo_out {
                            Some(path) => {
                                std::fs::write(&path, &photo.bytes)?;
                                println!("  ✔ Photo saved: {}", path.display());
                            }
                            None => println!("  (use --photo-out FILE to save)"),
                        }
                    }
                }
            }
        }

        Commands::Config { set_base_url, show } => {
            let mut config = config;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ Base URL updated");
            }

            if show {
                println!("Configuration:");
                println!("  Base URL:    {}", config.base_url);
                println!("  Photo field: {}", config.photo_field);
                println!("  Use cache:   {}", config.use_cache);
            }
        }

        Commands::Cache { clear, info } => {
            let cache_path = ResponseCache::default_path();

            if info || !clear {
                // Default or --info: show cache details
                if cache_path.exists() {
                    let cache = ResponseCache::load(&cache_path);
                    println!("Response cache:");
                    println!("  Path:    {}", cache_path.display());
                    println!("  Entries: {}", cache.len());
                    if let Ok(meta) = std::fs::metadata(&cache_path) {
                        println!("  Size:    {} bytes", meta.len());
                    }
                } else {
                    println!("No cache file: {}", cache_path.display());
                }
            }

            if clear {
                match ResponseCache::clear(&cache_path) {
                    Ok(true) => println!("✔ Cache cleared: {}", cache_path.display()),
                    Ok(false) => println!("No cache file to clear"),
                    Err(e) => println!("Cache clear error: {}", e),
                }
            }
        }
    }

    Ok(())
}
