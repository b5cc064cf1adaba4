use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "coremodels", version)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the default (partial) document of a kind as JSON.
    Defaults(DefaultsArgs),
    /// Parse and validate a JSON document.
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
struct DefaultsArgs {
    #[arg(value_enum)]
    kind: DefaultsKind,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Kind of document to validate.
    #[arg(long, value_enum)]
    kind: Kind,

    /// Input JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Playlist,
    TextPanel,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DefaultsKind {
    Playlist,
    TextPanel,
    CodeOptions,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Defaults(args) => cmd_defaults(args),
        Command::Validate(args) => cmd_validate(args),
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_defaults(args: DefaultsArgs) -> anyhow::Result<()> {
    let json = match args.kind {
        DefaultsKind::Playlist => serde_json::to_string_pretty(&coremodels::PartialPlaylist::defaults()),
        DefaultsKind::TextPanel => {
            serde_json::to_string_pretty(&coremodels::PartialPanelOptions::defaults())
        }
        DefaultsKind::CodeOptions => {
            serde_json::to_string_pretty(&coremodels::PartialCodeOptions::defaults())
        }
    }
    .context("serialize defaults")?;
    println!("{json}");
    Ok(())
}

fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let f = File::open(path).with_context(|| format!("open '{}'", path.display()))?;
    let value = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse JSON '{}'", path.display()))?;
    Ok(value)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let value = read_json(&args.in_path)?;
    match args.kind {
        Kind::Playlist => validate_playlist(value)?,
        Kind::TextPanel => validate_text_panel(value)?,
    }
    eprintln!("ok {}", args.in_path.display());
    Ok(())
}

fn validate_playlist(value: serde_json::Value) -> anyhow::Result<()> {
    coremodels::validate_playlist_json(&value).context("playlist shape")?;
    let playlist: coremodels::Playlist =
        serde_json::from_value(value).context("decode playlist")?;
    playlist.validate()?;
    tracing::debug!(uid = %playlist.uid, items = playlist.items.len(), "playlist valid");
    Ok(())
}

fn validate_text_panel(value: serde_json::Value) -> anyhow::Result<()> {
    // A bare options object and a versioned document are both accepted.
    if value.get("options").is_some() {
        let doc = coremodels::PanelOptionsDoc::from_value(value)?;
        let compat = doc.check_version()?;
        tracing::debug!(version = %doc.version, ?compat, mode = %doc.options.mode, "text panel document valid");
    } else {
        let opts = coremodels::PanelOptions::from_value(value)?;
        tracing::debug!(mode = %opts.mode, "text panel options valid");
    }
    Ok(())
}
