//! docbridge command-line interface

use anyhow::Result;
use clap::{Parser, Subcommand};
use docbridge::cli::output::{self, ColorMode, OutputFormat};
use docbridge::cli::{Session, convert, resolve, table};
use std::path::PathBuf;

/// Type layer inspection tool
#[derive(Parser)]
#[command(name = "docbridge")]
#[command(author, version, about = "Inspect relational type to storage codec mappings", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    format: OutputFormat,

    /// Color output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    color: ColorMode,

    /// Catalog snapshot (JSON) describing user-defined types
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Resolver configuration (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in codec table
    Table {
        /// Only list key-eligible entries
        #[arg(short, long)]
        keys: bool,

        /// Include the reserved placeholder entries
        #[arg(short, long)]
        reserved: bool,
    },

    /// Resolve a type (by name or OID) to its codec
    Resolve {
        /// Type name or OID
        type_ref: String,

        /// Column position; negative values address system columns
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        attnum: i16,
    },

    /// Convert a value to storage bytes and back
    Convert {
        /// Type name or OID
        type_ref: String,

        /// Value in text form (binary values as \x hex)
        value: String,

        /// Type modifier applied when reading the value back
        #[arg(short, long, allow_negative_numbers = true)]
        typmod: Option<i32>,

        /// Store enum values without their sort rank
        #[arg(long)]
        skip_enum_sort_order: bool,
    },
}

fn run(cli: Cli) -> Result<String> {
    let session = Session::load(cli.catalog.as_deref(), cli.config.as_deref())?;
    match cli.command {
        Commands::Table { keys, reserved } => {
            let config = table::TableConfig {
                keys_only: keys,
                reserved,
            };
            table::table(&session, &config, cli.format)
        }

        Commands::Resolve { type_ref, attnum } => {
            let config = resolve::ResolveConfig { type_ref, attnum };
            let resolution = resolve::resolve(&session, &config)?;
            resolve::render(&resolution, cli.format)
        }

        Commands::Convert {
            type_ref,
            value,
            typmod,
            skip_enum_sort_order,
        } => {
            if skip_enum_sort_order {
                log::warn!("storing enum values without sort rank; keys will order by member identifier");
            }
            let config = convert::ConvertConfig {
                type_ref,
                value,
                typmod,
                skip_enum_sort_order,
            };
            let conversion = convert::convert(&session, &config)?;
            convert::render(&conversion, cli.format)
        }
    }
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();
    output::setup_colors(cli.color);
    if let Err(e) = docbridge::cli::init_logging(cli.verbose) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }

    match run(cli) {
        Ok(content) => println!("{}", content),
        Err(e) => {
            eprintln!("{}", output::format_error(&e));
            std::process::exit(1);
        }
    }
}
