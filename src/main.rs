use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;

use voxclone_client::config::ClientConfig;
use voxclone_client::console::{ConsoleSurface, resolve_result_url};
use voxclone_client::core::clone::HttpCloneClient;
use voxclone_client::core::media::AudioFile;
use voxclone_client::core::workflow::WorkflowController;

/// VoxClone Client - clone a voice from a reference clip and a target text
#[derive(Parser, Debug)]
#[command(name = "voxclone-client")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Reference audio clip (wav, mp3, m4a, ...)
    #[arg(value_name = "AUDIO")]
    audio: PathBuf,

    /// Text to pronounce in the cloned voice
    #[arg(value_name = "TEXT")]
    text: String,

    /// Generation service base URL (overrides config)
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,

    /// Directory the generated file is written to (overrides config)
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists (must be done before config loading)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::from_env()?,
    };
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(dir) = cli.output_dir {
        config.download_dir = dir;
    }
    config.validate()?;

    let api = HttpCloneClient::new(config.clone_api())?;
    let clip = AudioFile::from_path(&cli.audio)
        .with_context(|| format!("Failed to read {}", cli.audio.display()))?;

    let mut controller = WorkflowController::new(
        ConsoleSurface::new(),
        api,
        config.download_filename.clone(),
    );
    controller.file_picked(clip);
    controller.on_text_changed(cli.text);
    controller.generate().await;

    let Some(result) = controller.surface_mut().take_result() else {
        // The surface already showed the failure notification.
        std::process::exit(1);
    };

    let artifact_url = resolve_result_url(&config.base_url, &result.audio_url)
        .with_context(|| format!("Invalid result location '{}'", result.audio_url))?;
    let target = config.download_dir.join(&result.download_filename);
    download_artifact(&artifact_url, &target).await?;
    println!("Fichier enregistré : {}", target.display());

    Ok(())
}

/// Fetch the generated artifact and write it under its suggested filename,
/// the terminal counterpart of the page's download action.
async fn download_artifact(url: &url::Url, target: &Path) -> anyhow::Result<()> {
    info!("Downloading generated audio from {url}");

    let response = reqwest::get(url.clone())
        .await
        .with_context(|| format!("Failed to fetch {url}"))?
        .error_for_status()?;
    let bytes = response.bytes().await?;

    tokio::fs::write(target, &bytes)
        .await
        .with_context(|| format!("Failed to write {}", target.display()))?;

    Ok(())
}
