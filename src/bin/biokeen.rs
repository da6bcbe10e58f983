//! BioKEEN CLI — export BEL graphs as knowledge graph embedding triples.
//!
//! Usage:
//!   biokeen convert <graph.json> [-o out.tsv] [--database name] [--summary [path]]
//!   biokeen summarize <table.tsv> [--indent n]
//!   biokeen databases
//!   biokeen config

use biokeen::export::{self, DEFAULT_INDENT};
use biokeen::{BelGraph, Config, ConverterRegistry, Database, KeenResult, Summary};
use clap::{ArgAction, Parser, Subcommand};
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "biokeen",
    version,
    about = "Convert BEL graphs into triples for knowledge graph embeddings"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a node-link JSON graph to a TSV triple table
    Convert {
        /// Graph document to convert
        graph: PathBuf,
        /// Output TSV path (defaults to the data directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Name or id of the source database, used to name the output
        #[arg(long)]
        database: Option<Database>,
        /// Also write a summary JSON, next to the table unless a path is given
        #[arg(long, value_name = "PATH", num_args = 0..=1)]
        summary: Option<Option<PathBuf>>,
    },
    /// Print the summary of an existing triple table
    Summarize {
        /// TSV triple table
        table: PathBuf,
        /// JSON indentation
        #[arg(long, default_value_t = DEFAULT_INDENT)]
        indent: usize,
    },
    /// List known source databases
    Databases,
    /// Show the resolved configuration
    Config,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .init();
}

/// Where the table goes: explicit path, else a database or graph-named file in the data dir
fn resolve_output(
    config: &Config,
    graph: &Path,
    output: Option<PathBuf>,
    database: Option<Database>,
) -> KeenResult<PathBuf> {
    if let Some(output) = output {
        return Ok(output);
    }
    let data_dir = config.ensure_data_dir()?;
    Ok(match database {
        Some(database) => database.keen_path(data_dir),
        None => {
            let stem = graph
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "graph".to_string());
            data_dir.join(format!("{}.keen.tsv", stem))
        }
    })
}

fn resolve_summary_path(output: &Path, database: Option<Database>, explicit: Option<PathBuf>) -> PathBuf {
    match (explicit, database) {
        (Some(path), _) => path,
        (None, Some(database)) => match output.parent() {
            Some(dir) => database.summary_path(dir),
            None => output.with_extension("summary.json"),
        },
        (None, None) => output.with_extension("summary.json"),
    }
}

struct ConvertArgs {
    graph: PathBuf,
    output: Option<PathBuf>,
    database: Option<Database>,
    summary: Option<Option<PathBuf>>,
}

fn cmd_convert(config: &Config, args: ConvertArgs) -> i32 {
    let graph = match BelGraph::from_json_path(&args.graph) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Error: cannot load '{}': {}", args.graph.display(), e);
            return 1;
        }
    };

    let progress = ProgressBar::new(0);
    let table = biokeen::to_triples_with(ConverterRegistry::standard(), &graph, &progress);

    let output = match resolve_output(config, &args.graph, args.output, args.database) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    match export::write_table(&table, &output) {
        Ok(true) => println!("Wrote {} triples to {}", table.len(), output.display()),
        Ok(false) => {
            eprintln!("Warning: no convertible edges in '{}', nothing written", args.graph.display());
            return 0;
        }
        Err(e) => {
            eprintln!("Error: writing '{}': {}", output.display(), e);
            return 1;
        }
    }

    if let Some(explicit) = args.summary {
        let path = resolve_summary_path(&output, args.database, explicit);
        if let Err(e) = export::write_summary(&table, &path, DEFAULT_INDENT) {
            eprintln!("Error: writing '{}': {}", path.display(), e);
            return 1;
        }
        println!("Wrote summary to {}", path.display());
    }
    0
}

fn cmd_summarize(table: &Path, indent: usize) -> i32 {
    let result = export::read_table(table).and_then(|t| Summary::of(&t).to_json(indent));
    match result {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_databases(config: &Config) -> i32 {
    println!("{:>3}  {:<14}  {}", "ID", "NAME", "TABLE");
    println!("{}", "-".repeat(72));
    for database in Database::ALL {
        println!(
            "{:>3}  {:<14}  {}",
            database.id(),
            database.name(),
            database.keen_path(&config.data_dir).display()
        );
    }
    0
}

fn cmd_config(config: &Config) -> i32 {
    println!("data_dir: {}", config.data_dir.display());
    0
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Commands::Convert {
            graph,
            output,
            database,
            summary,
        } => cmd_convert(
            &config,
            ConvertArgs {
                graph,
                output,
                database,
                summary,
            },
        ),
        Commands::Summarize { table, indent } => cmd_summarize(&table, indent),
        Commands::Databases => cmd_databases(&config),
        Commands::Config => cmd_config(&config),
    };
    std::process::exit(code);
}
