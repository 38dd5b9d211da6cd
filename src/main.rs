//! Kokoro Studio CLI - web and terminal front ends for Kokoro TTS
//!
//! Subcommands:
//! - `serve`: run the JSON web server
//! - `desktop`: run the terminal UI
//! - `speak`: one-shot synthesis to a WAV file
//! - `voices`: list bundled voices and languages

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use kokoro_studio::catalog::{self, KokoroLanguage, KokoroVoice};
use kokoro_studio::desktop::DesktopApp;
use kokoro_studio::engine::{EngineCache, RemoteEngineFactory};
use kokoro_studio::server::{AppConfig, TtsServer};
use kokoro_studio::{audio, VERSION};

/// Kokoro Studio - browser and desktop front ends for Kokoro text-to-speech
#[derive(Parser, Debug)]
#[command(name = "kokoro-studio")]
#[command(author, version, about, long_about = "
Kokoro Studio wraps a Kokoro TTS sidecar with two front ends: a JSON web
server and a terminal desktop app. Point it at a running sidecar with
--engine-url (default http://127.0.0.1:8880).

Examples:
  # Web server on the default port
  kokoro-studio serve

  # Terminal UI
  kokoro-studio desktop

  # One-shot synthesis
  kokoro-studio speak --text \"Hello world\" --output hello.wav
")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a YAML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Kokoro sidecar base URL (overrides the config file)
    #[arg(long, global = true)]
    engine_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the JSON web server
    Serve {
        /// Bind host
        #[arg(long)]
        host: Option<String>,

        /// Bind port
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory for generated WAV files
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Run the terminal desktop app
    Desktop,

    /// Synthesize one text to a WAV file and exit
    Speak {
        /// Text to synthesize
        #[arg(short, long)]
        text: String,

        /// Voice ID
        #[arg(long, default_value = catalog::DEFAULT_VOICE)]
        voice: String,

        /// Language code
        #[arg(short, long, default_value = catalog::DEFAULT_LANGUAGE)]
        language: String,

        /// Speed multiplier
        #[arg(short, long, default_value = "1.0")]
        speed: f32,

        /// Output file path
        #[arg(short, long, default_value = "kokoro_output.wav")]
        output: PathBuf,
    },

    /// List bundled voices and languages
    Voices,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .map_err(|e| anyhow::anyhow!("failed to load config {:?}: {}", path, e))?,
        None => AppConfig::default(),
    };

    if let Some(url) = &cli.engine_url {
        config.engine.base_url = url.clone();
    }

    Ok(config)
}

fn create_progress_bar(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb
}

async fn run_speak(
    config: &AppConfig,
    text: &str,
    voice: &str,
    language: &str,
    speed: f32,
    output: &PathBuf,
) -> Result<()> {
    let factory = RemoteEngineFactory::new(&config.engine.base_url, config.engine.timeout())?;
    if !factory.is_available().await {
        anyhow::bail!(
            "Kokoro sidecar not reachable at {}",
            config.engine.base_url
        );
    }
    let engines = EngineCache::new(Box::new(factory));

    let text_preview: String = text.chars().take(50).collect();
    info!("Text: {} ({} chars)", text_preview, text.chars().count());
    info!("Voice: {} ({})", voice, catalog::voice_label(voice));
    info!("Language: {} ({})", language, catalog::language_label(language));
    info!("Output: {:?}", output);

    let pb = create_progress_bar("Generating speech...");
    let start = Instant::now();

    let engine = engines.get(language).await?;
    let segments = engine.synthesize(text, voice, speed).await?;
    let waveform = audio::assemble(&segments)?;
    audio::write_wav(&waveform, output)?;

    let duration = audio::duration_secs(&waveform);
    pb.finish_with_message(format!(
        "Generated {:.1}s of audio in {:.1}s ({} segments)",
        duration,
        start.elapsed().as_secs_f32(),
        segments.len(),
    ));

    info!("Saved to {:?}", output);
    info!("Sample rate: {} Hz", audio::SAMPLE_RATE);

    Ok(())
}

fn print_voices() {
    println!("Voices:");
    for voice in &KokoroVoice::ALL {
        println!("  {:<14} {}", voice.as_str(), voice.label());
    }
    println!("\nLanguages:");
    for language in &KokoroLanguage::ALL {
        println!("  {:<3} {}", language.code(), language.label());
    }
    println!("\nUsage: kokoro-studio speak --voice <id> --language <code> --text \"Hello\"");
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Serve {
            host,
            port,
            output_dir,
        } => {
            setup_logging(cli.verbose);
            info!("Kokoro Studio v{}", VERSION);

            let mut config = config;
            if let Some(host) = host {
                config.host = host.clone();
            }
            if let Some(port) = port {
                config.port = *port;
            }
            if let Some(output_dir) = output_dir {
                config.output_dir = output_dir.clone();
            }

            TtsServer::new(config)
                .run()
                .await
                .map_err(|e| anyhow::anyhow!("server error: {}", e))
        }

        Commands::Desktop => {
            // The terminal UI owns stdout; logging stays off
            let mut app = DesktopApp::new(config).await.context("failed to start desktop app")?;
            app.run().await
        }

        Commands::Speak {
            text,
            voice,
            language,
            speed,
            output,
        } => {
            setup_logging(cli.verbose);
            run_speak(&config, text, voice, language, *speed, output).await
        }

        Commands::Voices => {
            print_voices();
            Ok(())
        }
    }
}
