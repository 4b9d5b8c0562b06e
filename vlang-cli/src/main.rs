use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vlang_cli::{
    check_config::check_config,
    extract::{DictFormat, extract_dictionary, render_dictionary},
    import::run_import,
    locale::{LocaleRequest, run_locale},
    sync::collect_new_lines,
    translate::{TranslateRequest, run_translate},
    validation::run_validate,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log debug events to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve one key from message tables.
    Translate {
        /// Message table files (YAML or JSON); later files override earlier ones
        #[arg(short, long = "table", required = true)]
        tables: Vec<String>,

        /// The key to resolve
        #[arg(short, long)]
        key: String,

        /// Count selecting a pluralized variant
        #[arg(short = 'n', long, allow_hyphen_values = true)]
        count: Option<String>,

        /// Locale chosen by the user, or requested with --best-match
        #[arg(short, long)]
        locale: Option<String>,

        /// Enabled locales, in priority order (defaults to the table's locales)
        #[arg(long, value_delimiter = ',')]
        locales: Vec<String>,

        /// Use the table locale closest to --locale
        #[arg(long)]
        best_match: bool,

        /// Return the bare key instead of a sentinel for missing keys
        #[arg(long)]
        no_debug: bool,
    },

    /// Print the flattened dictionary of source files.
    Extract {
        /// Source files or directories
        #[arg(short, long = "input")]
        inputs: Vec<String>,

        /// Project root; component names are relative to it
        #[arg(long)]
        root: Option<PathBuf>,

        /// Print JSON instead of YAML
        #[arg(long)]
        json: bool,
    },

    /// Write a translated JSON dictionary into per-component .vlg files.
    Import {
        /// Dictionary file, as printed by `extract --json`
        #[arg(long)]
        dict: PathBuf,

        /// Project root containing vlang.yml
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },

    /// Print the rows missing from an external JSON dictionary.
    Sync {
        /// Dictionary already known to the translation store
        #[arg(long)]
        external: PathBuf,

        /// Project root containing vlang.yml
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Source files or directories (defaults to the whole root)
        #[arg(short, long = "input")]
        inputs: Vec<String>,

        /// Print JSON instead of YAML
        #[arg(long)]
        json: bool,
    },

    /// Check message tables for malformed ranges and empty plurals.
    Validate {
        /// Message table files
        #[arg(short, long = "table", required = true)]
        tables: Vec<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve the active locale, or the best match for a requested locale.
    Locale {
        /// Enabled locales, in priority order
        #[arg(long, value_delimiter = ',', required_unless_present = "available", conflicts_with = "available")]
        locales: Vec<String>,

        /// Locale explicitly chosen by the user
        #[arg(long)]
        chosen: Option<String>,

        /// Locale suggested by the server
        #[arg(long)]
        server: Option<String>,

        /// Locale remembered from a previous session
        #[arg(long)]
        persisted: Option<String>,

        /// Locales to match against
        #[arg(long, value_delimiter = ',')]
        available: Vec<String>,

        /// Locale to find the best match for
        #[arg(long, requires = "available")]
        requested: Option<String>,
    },

    /// Load and validate vlang.yml.
    CheckConfig {
        /// Project root containing vlang.yml
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(commands: Commands) -> Result<String, String> {
    match commands {
        Commands::Translate {
            tables,
            key,
            count,
            locale,
            locales,
            best_match,
            no_debug,
        } => run_translate(&TranslateRequest {
            tables,
            key,
            count,
            locale,
            locales,
            best_match,
            no_debug,
        }),
        Commands::Extract { inputs, root, json } => {
            let dict = extract_dictionary(&inputs, root.as_deref())?;
            let format = if json { DictFormat::Json } else { DictFormat::Yaml };
            render_dictionary(&dict, format)
        }
        Commands::Import { dict, root } => run_import(&dict, &root),
        Commands::Sync {
            external,
            root,
            inputs,
            json,
        } => {
            let lines = collect_new_lines(&external, &root, &inputs)?;
            let format = if json { DictFormat::Json } else { DictFormat::Yaml };
            render_dictionary(&lines, format)
        }
        Commands::Validate { tables, json } => run_validate(&tables, json),
        Commands::Locale {
            locales,
            chosen,
            server,
            persisted,
            available,
            requested,
        } => run_locale(&LocaleRequest {
            locales,
            chosen,
            server,
            persisted,
            available,
            requested,
        }),
        Commands::CheckConfig { root } => check_config(&root),
    }
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args.commands) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
