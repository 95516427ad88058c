use clap::{Parser, Subcommand};
use std::{io, net::SocketAddr, path::PathBuf, time::Duration};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use word_count::{
    config::{resolve_client_base_url, resolve_host, resolve_port},
    router,
    terminal::{FixedFile, FixedMode, TerminalDisplay},
    ClientConfig, Mode, ResultStore, ServiceConfig, SubmissionClient,
};

#[derive(Parser, Debug)]
#[command(
    name = "word_count",
    version,
    about = "Line, word, byte and character counts for uploaded files"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the analysis service (default).
    Serve {
        #[arg(short, long, help = "Listen port (overrides PORT).")]
        port: Option<u16>,
    },
    /// Upload one file to an analysis service and print the result.
    Submit {
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,

        #[arg(short, long, default_value = "api", help = "Response mode: api or embedded.")]
        mode: Mode,

        #[arg(long, value_name = "URL", help = "Service base URL (overrides WC_BASE_URL).")]
        base_url: Option<String>,

        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,

        #[arg(long, help = "Keep the last structured result in WC_RESULTS_PATH.")]
        store: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve { port: None }) {
        Command::Serve { port } => serve(port).await,
        Command::Submit {
            file,
            mode,
            base_url,
            timeout,
            store,
        } => {
            let files = match file {
                Some(path) => FixedFile::read(&path)
                    .map_err(|err| format!("failed to read {}: {err}", path.display()))?,
                None => FixedFile::default(),
            };

            let mut config = ClientConfig::new(base_url.unwrap_or_else(resolve_client_base_url));
            config.request_timeout = timeout.map(Duration::from_secs);

            let display = TerminalDisplay::new(io::stdout());
            let mut client = SubmissionClient::new(config, files, FixedMode(mode), display)?;
            if store {
                client = client.with_store(ResultStore::new(word_count::resolve_results_path()));
            }

            client.on_submit().await?;
            Ok(())
        }
    }
}

async fn serve(port: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let config = ServiceConfig::from_env();
    let addr = SocketAddr::new(resolve_host(), port.unwrap_or_else(resolve_port));
    let app = router(&config);

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
    }
    info!("shutting down");
}
