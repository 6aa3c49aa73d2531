use anyhow::Result;
use clap::Parser;
use dirc::areas::repository::Repository;
use dirc::artifacts::index::DEFAULT_ENTRY_NAME;
use dirc::artifacts::index::index_entry::IndexEntry;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "dirc",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Write a placeholder git index",
    long_about = "This tool writes a .git/index file holding a single entry with zeroed \
    metadata and a zeroed object ID. It is meant as a fixture for tests of index readers, \
    not as a replacement for `git add`.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The path to the repository")]
    path: Option<PathBuf>,
    #[arg(short, long, default_value = DEFAULT_ENTRY_NAME, help = "The path stored in the index entry")]
    name: String,
    #[arg(long, help = "Also create .git/objects, .git/refs/heads and .git/HEAD")]
    init: bool,
    #[arg(short, long, help = "Print debug diagnostics to stderr")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .init();

    let entry = IndexEntry::placeholder(&cli.name)?;
    let path = match cli.path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let repository = Repository::new(path, Box::new(std::io::stdout()));

    if cli.init {
        repository.init()?;
    }

    repository.write_index(&entry)
}
