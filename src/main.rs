//! Strand Service Entry Point

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use strand::{create_rest_router, create_store, Config, QueryInterpreter, StringProperties};

/// Strand: String Analysis & Query Service
#[derive(Parser, Debug)]
#[command(name = "strand")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service (default behavior)
    Serve {
        /// Bind address. If not specified, uses config file value.
        #[arg(long)]
        host: Option<String>,
        /// HTTP port. If not specified, uses config file value.
        #[arg(short, long)]
        port: Option<u16>,
        /// Enable JSON logging format
        #[arg(long)]
        json_logs: bool,
    },
    /// Compute analysis properties for a string and print them
    Analyze {
        /// The string to analyze
        value: String,
    },
    /// Interpret a natural language query and print the resulting filters
    Query {
        /// The query text
        query: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let command = args.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
        json_logs: false,
    });

    match command {
        Command::Serve {
            host,
            port,
            json_logs,
        } => {
            init_tracing(json_logs);

            let mut config = match &args.config {
                Some(path) => Config::from_file(path)?,
                None => Config::load()?,
            };
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            serve(config).await
        }
        Command::Analyze { value } => {
            let properties = StringProperties::compute(&value);
            println!("{}", serde_json::to_string_pretty(&properties)?);
            Ok(())
        }
        Command::Query { query } => match QueryInterpreter::new().interpret(&query) {
            Ok(filters) => {
                println!("{}", serde_json::to_string_pretty(&filters)?);
                Ok(())
            }
            Err(err) => {
                eprintln!("Error: {err}");
                std::process::exit(1);
            }
        },
    }
}

fn init_tracing(json_logs: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("strand=info"));

    if json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    tracing::info!("Starting Strand v{}", env!("CARGO_PKG_VERSION"));

    let store = create_store(&config)?;
    let router = create_rest_router(store, &config.api);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router).await?;
    Ok(())
}
