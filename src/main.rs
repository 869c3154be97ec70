use std::{net::SocketAddr, path::PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dogtrails::{
    FilterCriteria, FormFields, SearchController, SearchOutcome, api::HttpTrailsApi,
    config::Config, proxy, terminal::TerminalView,
};

#[derive(Parser)]
#[command(name = "dogtrails", about = "Find dog-friendly trails")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the web client and proxy /api to the upstream trails API
    Serve {
        #[arg(long)]
        port: Option<u16>,
        /// Base URL of the upstream trails API
        #[arg(long)]
        upstream: Option<String>,
        /// Directory holding the built web client
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
    /// Run one search and print the results
    Search {
        /// Base URL of the trails API
        #[arg(long)]
        api_url: Option<String>,
        /// Filter fields as name=value, e.g. region=wellington dog=allowed_only
        #[arg(value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got {raw:?}"))?;
    if name.trim().is_empty() {
        return Err(format!("missing field name in {raw:?}"));
    }
    Ok((name.trim().to_string(), value.to_string()))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search { api_url, fields }) => {
            let api_url = api_url.unwrap_or(config.api_url);
            search(&api_url, fields.into_iter().collect()).await
        }
        Some(Commands::Serve {
            port,
            upstream,
            static_dir,
        }) => {
            let config = Config {
                port: port.unwrap_or(config.port),
                upstream_url: upstream.unwrap_or(config.upstream_url),
                static_dir: static_dir.unwrap_or(config.static_dir),
                ..config
            };
            serve(config).await
        }
        None => serve(config).await,
    }
}

async fn search(api_url: &str, fields: FormFields) -> Result<(), Box<dyn std::error::Error>> {
    let api = HttpTrailsApi::new(api_url)?;
    let criteria = FilterCriteria::from_fields(&fields);
    tracing::info!("searching {} with [{}]", api.base_url(), criteria.to_query_string());

    let view = TerminalView::stdout();
    let controller = SearchController::new(api, &view, &view);
    match controller.run(&fields).await {
        SearchOutcome::Failed { error } => Err(error.into()),
        _ => Ok(()),
    }
}

async fn serve(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let state = proxy::ProxyState::new(&config.upstream_url)?;
    let app = proxy::router(state, &config.static_dir);

    let address = SocketAddr::from(([127, 0, 0, 1], config.port));
    tracing::info!(
        "listening on http://{} (upstream {}, static {})",
        address,
        config.upstream_url,
        config.static_dir.display()
    );
    let listener = tokio::net::TcpListener::bind(address).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
