//! Command-line interface for mbxml.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use mbxml::xml::{self, DEFAULT_CHUNK_SIZE};
use mbxml::{Kind, Value};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::lookup::{validate_includes, validate_mbid, MusicBrainzClient};

/// mbxml - Parse MusicBrainz web service XML into JSON.
#[derive(Parser)]
#[command(name = "mbxml")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a local XML document and print it as JSON.
    Parse {
        /// Path to a `/ws/2` XML document
        file: PathBuf,

        /// Read the file this many bytes at a time
        #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,
    },

    /// Look up an entity on the web service and print it as JSON.
    Lookup {
        /// Entity type (e.g., artist, release-group)
        entity: String,

        /// MusicBrainz identifier
        mbid: String,

        /// Comma-separated includes (e.g., aliases,tags)
        #[arg(short, long, value_delimiter = ',')]
        inc: Vec<String>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { file, chunk_size } => parse_command(&file, chunk_size),
        Commands::Lookup { entity, mbid, inc } => lookup_command(&entity, &mbid, &inc),
    }
}

fn parse_command(file: &Path, chunk_size: usize) -> Result<()> {
    if chunk_size == 0 {
        return Err(ClientError::Config("--chunk-size must be positive".into()));
    }
    let metadata = xml::from_path(file, chunk_size)?;
    print_json(&metadata)
}

/// Execute the lookup command.
fn lookup_command(entity: &str, mbid: &str, inc: &[String]) -> Result<()> {
    let kind = Kind::entity_from_name(entity)
        .ok_or_else(|| ClientError::UnknownEntity(entity.to_string()))?;
    let includes: Vec<&str> = inc.iter().map(String::as_str).collect();

    // Validate inputs before making HTTP requests
    let config = ClientConfig::from_env()?;
    validate_mbid(mbid)?;
    validate_includes(kind, &includes, config.is_logged_in())?;

    eprintln!(
        "{} {} {}",
        style("Looking up").bold(),
        style(kind).cyan(),
        style(mbid).green()
    );

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(format!("Requesting {}...", config.server_host));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = MusicBrainzClient::new(config).and_then(|client| client.lookup(kind, mbid, &includes));
    pb.finish_and_clear();

    print_json(&result?)
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
