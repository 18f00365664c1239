use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use canvas::codec;
use canvas::input::PointerEvent;
use canvas::mapper::Rect;
use clap::{Args, Parser, Subcommand};
use client::config::ClientConfig;
use client::net::api::HttpApi;
use client::{ClientError, Notice, NoticeLevel, Session, render};


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: String, source: io::Error },
    #[error("invalid stroke file: {0}")]
    Strokes(#[from] serde_json::Error),
    #[error("could not decode image {0}")]
    Image(String),
    #[error("display size must be positive, got {0}x{1}")]
    DisplaySize(f64, f64),
    #[error("{0}")]
    Notice(String),
}

#[derive(Parser, Debug)]
#[command(name = "digitpad", about = "Draw or import a digit and classify it")]
struct Cli {
    #[arg(long, env = "DIGITPAD_BASE_URL")]
    base_url: Option<String>,

    /// Side of the square capture surface, in pixels.
    #[arg(long)]
    size: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill the surface from an image or stroke replay, then classify it.
    Predict(PredictCommand),
    /// Print the stored prediction history, newest first.
    History,
    /// Delete every stored prediction.
    ClearHistory,
    /// Print totals, average confidence, and the digit distribution.
    Analytics,
}

#[derive(Args, Debug)]
struct PredictCommand {
    /// Image file to import into the surface.
    #[arg(long, conflicts_with = "strokes")]
    image: Option<PathBuf>,

    /// JSON array of pointer events to replay, or `-` for stdin.
    #[arg(long)]
    strokes: Option<String>,

    /// On-screen width the stroke coordinates were captured at.
    #[arg(long, requires = "display_height")]
    display_width: Option<f64>,

    #[arg(long, requires = "display_width")]
    display_height: Option<f64>,

    /// Also write the submitted PNG here.
    #[arg(long)]
    save: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url)?;
    }
    if let Some(size) = cli.size.filter(|s| *s > 0) {
        config.canvas_size = size;
    }
    tracing::debug!(base_url = %config.base_url, size = config.canvas_size, "starting");

    let api = Arc::new(HttpApi::new(&config)?);
    let mut session = Session::new(api, config.canvas_size);

    match cli.command {
        Command::Predict(predict) => run_predict(&mut session, predict).await,
        Command::History => run_history(&mut session).await,
        Command::ClearHistory => finish(session.clear_history().await),
        Command::Analytics => run_analytics(&mut session).await,
    }
}

async fn run_predict(session: &mut Session<HttpApi>, cmd: PredictCommand) -> Result<(), CliError> {
    if let (Some(width), Some(height)) = (cmd.display_width, cmd.display_height) {
        if width <= 0.0 || height <= 0.0 {
            return Err(CliError::DisplaySize(width, height));
        }
        session.set_bounds(Rect::new(0.0, 0.0, width, height));
    }

    if let Some(path) = &cmd.image {
        let bytes = read_file(path)?;
        if !session.import_image(Some(bytes)).await {
            return Err(CliError::Image(path.display().to_string()));
        }
    }
    if let Some(source) = cmd.strokes.as_deref() {
        let events = read_strokes(source)?;
        tracing::debug!(events = events.len(), "replaying strokes");
        for event in events {
            session.pointer(event);
        }
    }

    if let Some(path) = &cmd.save {
        let png = codec::encode_png(session.surface().pixels()).map_err(ClientError::from)?;
        std::fs::write(path, png).map_err(|source| CliError::Write {
            path: path.display().to_string(),
            source,
        })?;
    }

    let notice = session.predict().await;
    match session.last_result() {
        Some(result) if notice.level == NoticeLevel::Success => {
            for line in render::result_lines(&result) {
                println!("{line}");
            }
            Ok(())
        }
        _ => finish(notice),
    }
}

async fn run_history(session: &mut Session<HttpApi>) -> Result<(), CliError> {
    let notice = session.load_history().await;
    if notice.is_error() {
        return finish(notice);
    }
    for line in render::history_lines(session.history().view()) {
        println!("{line}");
    }
    Ok(())
}

async fn run_analytics(session: &mut Session<HttpApi>) -> Result<(), CliError> {
    let notice = session.load_analytics().await;
    let Some(summary) = session.analytics().filter(|_| !notice.is_error()) else {
        return finish(notice);
    };
    for line in render::analytics_lines(summary) {
        println!("{line}");
    }
    Ok(())
}

fn finish(notice: Notice) -> Result<(), CliError> {
    if notice.is_error() {
        return Err(CliError::Notice(notice.message));
    }
    println!("{notice}");
    Ok(())
}

fn read_file(path: &Path) -> Result<Vec<u8>, CliError> {
    std::fs::read(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })
}

fn read_strokes(source: &str) -> Result<Vec<PointerEvent>, CliError> {
    let bytes = if source == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf).map_err(|source| CliError::Read {
            path: "<stdin>".to_owned(),
            source,
        })?;
        buf
    } else {
        read_file(Path::new(source))?
    };
    parse_strokes(&bytes)
}

fn parse_strokes(bytes: &[u8]) -> Result<Vec<PointerEvent>, CliError> {
    Ok(serde_json::from_slice(bytes)?)
}
