mod cli;

use jellygrid::{
    catalog::{CatalogView, KindFilter, Listing, Toast, ViewState},
    client::CatalogClient,
    config::{self, Config, ConfigOverrides},
    favorites::FavoriteToggle,
    render,
};
use jellygrid_common::{ItemId, ServerId};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, OutputArgs};
use std::path::Path;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "jellygrid=debug,jellygrid_common=debug,reqwest=debug".to_string()
        } else {
            "jellygrid=error".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let overrides = ConfigOverrides {
        server: cli.server.clone(),
        user_id: cli.user_id.clone(),
        api_key: cli.api_key.clone(),
        columns: cli.columns,
    };

    let config_path = config::locate_config(cli.config.as_deref())
        .unwrap_or_else(config::default_config_path);

    match cli.command {
        Commands::Movies { kind, output } => {
            let config = config::resolve_config(cli.config.as_deref(), overrides)?;
            run_async(list(
                &config,
                &config_path,
                Listing::MoviesAndSeries,
                kind,
                &output,
            ))
        }
        Commands::Collections { output } => {
            let config = config::resolve_config(cli.config.as_deref(), overrides)?;
            run_async(list(
                &config,
                &config_path,
                Listing::Collections,
                KindFilter::All,
                &output,
            ))
        }
        Commands::Collection { id, kind, output } => {
            let config = config::resolve_config(cli.config.as_deref(), overrides)?;
            let listing = Listing::Collection(ItemId::from(id));
            run_async(list(&config, &config_path, listing, kind, &output))
        }
        Commands::Links { id, server_id, tag } => {
            let config = config::resolve_config(cli.config.as_deref(), overrides)?;
            print_links(&config, &id, &server_id, &tag);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Favorite { id, name, remove } => {
            let config = config::resolve_config(cli.config.as_deref(), overrides)?;
            run_async(favorite(&config, id, name, remove))
        }
        Commands::Validate => validate(cli.config.as_deref(), overrides),
        Commands::Version => {
            println!("jellygrid {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_async<F>(fut: F) -> Result<ExitCode>
where
    F: std::future::Future<Output = Result<ExitCode>>,
{
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(fut)
}

fn print_toast(toast: &Toast) {
    eprintln!("{}: {}", toast.title, toast.message);
}

async fn list(
    config: &Config,
    config_path: &Path,
    listing: Listing,
    filter: KindFilter,
    output: &OutputArgs,
) -> Result<ExitCode> {
    let client = CatalogClient::new(config);
    let mut view = CatalogView::new(listing);

    if !output.json {
        print_toast(view.toast());
    }
    view.load(&client).await;
    print_toast(view.toast());

    match view.state() {
        ViewState::Loaded(_) => {
            let Some(grid) = view.grid(filter, config.display.columns(), &client) else {
                return Ok(ExitCode::FAILURE);
            };

            if output.json {
                println!("{}", serde_json::to_string_pretty(&grid)?);
            } else if output.links {
                for entry in grid.sections.iter().flat_map(|s| &s.entries) {
                    println!("{}", render::render_entry_links(entry));
                }
            } else {
                print!("{}", render::render_grid(&grid));
            }
            Ok(ExitCode::SUCCESS)
        }
        ViewState::Error(error) => {
            eprint!("{}", render::render_error(error, config_path));
            Ok(ExitCode::FAILURE)
        }
        ViewState::Loading => Ok(ExitCode::FAILURE),
    }
}

fn print_links(config: &Config, id: &str, server_id: &str, tag: &str) {
    let client = CatalogClient::new(config);
    let id = ItemId::from(id);

    println!("open:   {}", client.details_url(&id, &ServerId::from(server_id)));
    println!("stream: {}", client.stream_url(&id));
    println!("cover:  {}", client.cover_url(&id, tag));
}

async fn favorite(
    config: &Config,
    id: String,
    name: Option<String>,
    remove: bool,
) -> Result<ExitCode> {
    let client = CatalogClient::new(config);
    let name = name.unwrap_or_else(|| id.clone());

    // Removing starts from a displayed favorite, adding from a non-favorite.
    let mut toggle = FavoriteToggle::new(ItemId::from(id), name, remove);
    let toast = toggle.toggle(&client).await;
    print_toast(&toast);

    if toast.is_failure() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn validate(path: Option<&Path>, overrides: ConfigOverrides) -> Result<ExitCode> {
    match path {
        Some(p) => println!("Validating config: {:?}", p),
        None => println!("No config file specified, searching default locations"),
    }

    let config = config::resolve_config(path, overrides)?;
    println!("✓ Configuration is valid");
    println!("  Server: {}", config.server.url);
    println!("  User id: {}", config.server.user_id);
    println!("  API key: {}", mask(&config.server.api_key));
    println!("  Columns: {}", config.display.columns());
    match config.http.timeout_secs {
        Some(secs) => println!("  Timeout: {}s", secs),
        None => println!("  Timeout: none"),
    }

    Ok(ExitCode::SUCCESS)
}

/// Show the first four characters of a secret; short secrets are hidden whole.
fn mask(secret: &str) -> String {
    const VISIBLE: usize = 4;

    if secret.chars().count() <= VISIBLE {
        return "*".repeat(VISIBLE);
    }
    let visible: String = secret.chars().take(VISIBLE).collect();
    format!("{}…", visible)
}
