use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wordtable::{
    ingest, lookup_report, BufferConfig, ByteBuffer, Result, StrView, TableConfig, WordTable,
};

/// Count and deduplicate the whitespace-separated words of a text file.
#[derive(Parser, Debug)]
#[command(name = "wordtable", version, about)]
struct Cli {
    /// Input text file
    #[arg(default_value = "share/shakespeare.txt")]
    path: PathBuf,

    /// Key to look up once the file is ingested
    #[arg(short, long, default_value = "the")]
    key: String,

    /// Initial number of table slots
    #[arg(long, default_value_t = wordtable::config::DEFAULT_TABLE_CAPACITY)]
    initial_capacity: usize,

    /// Maximum load factor before the table expands
    #[arg(long, default_value_t = wordtable::config::DEFAULT_LOAD_FACTOR)]
    load_factor: f64,

    /// Capacity multiplier applied on expansion
    #[arg(long, default_value_t = wordtable::config::DEFAULT_SCALE_FACTOR)]
    scale_factor: usize,

    /// Bytes reserved by the first buffer allocation
    #[arg(long, default_value_t = wordtable::config::DEFAULT_BUFFER_CAPACITY)]
    buffer_capacity: usize,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let filter = EnvFilter::from_default_env().add_directive(level.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<String> {
    let table_config = TableConfig {
        initial_capacity: cli.initial_capacity,
        load_factor: cli.load_factor,
        scale_factor: cli.scale_factor,
    };
    table_config.validate()?;
    let buffer_config = BufferConfig {
        initial_capacity: cli.buffer_capacity,
    };
    buffer_config.validate()?;

    let buffer = ByteBuffer::from_path(&cli.path, buffer_config)?;
    let mut table = WordTable::with_config(table_config)?;
    let stats = ingest(buffer.words(), &mut table)?;
    tracing::info!(
        duplicates = stats.duplicates,
        collisions = stats.collisions,
        load_factor = table.load_factor(),
        "table summary"
    );
    Ok(lookup_report(&table, StrView::from(cli.key.as_str())))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
