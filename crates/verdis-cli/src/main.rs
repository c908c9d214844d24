mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "verdis",
    version,
    about = "Carbon emissions classification and scoring for invoice data"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a single invoice document (PDF, image, or plain text)
    Process {
        /// Path to the document
        input_file: PathBuf,

        /// Custom factor table JSON (default: builtin defra-2024 preset)
        #[arg(short, long = "factors", value_name = "FILE")]
        factors: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Score a batch of transactions (JSON or CSV) and build a scorecard
    Batch {
        /// Path to a JSON array or CSV of transactions
        input_file: PathBuf,

        /// Custom factor table JSON (default: builtin defra-2024 preset)
        #[arg(short, long = "factors", value_name = "FILE")]
        factors: Option<PathBuf>,

        /// Output format: table (default), json, or html
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the full JSON result to a file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Classify transaction text to an emission category
    Classify {
        /// Transaction description
        description: String,

        /// Supplier name
        #[arg(short, long, default_value = "")]
        supplier: String,

        /// Custom factor table JSON (default: builtin defra-2024 preset)
        #[arg(short, long = "factors", value_name = "FILE")]
        factors: Option<PathBuf>,
    },
    /// Manage and inspect factor tables
    Factors {
        #[command(subcommand)]
        action: FactorsAction,
    },
}

#[derive(Subcommand)]
enum FactorsAction {
    /// List the builtin factor table entries
    List,
    /// Show one category's factor entry and keywords
    Show {
        /// Category key (e.g. "electricity")
        category: String,
    },
    /// Validate a custom factor table file
    Validate {
        /// Path to JSON factor table
        file: PathBuf,
    },
    /// Convert a DEFRA flat-format XLSX into draft factor table JSON
    Convert {
        /// Path to the GOV.UK flat-format workbook
        xlsx_file: PathBuf,

        /// Year tag recorded in the generated table version
        #[arg(long, default_value = "2024")]
        year: String,

        /// Write the draft table to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Process {
            input_file,
            factors,
            output,
        } => commands::process::run(input_file, factors, &output),
        Commands::Batch {
            input_file,
            factors,
            output,
            out,
        } => commands::batch::run(input_file, factors, &output, out),
        Commands::Classify {
            description,
            supplier,
            factors,
        } => commands::classify::run(&description, &supplier, factors),
        Commands::Factors { action } => match action {
            FactorsAction::List => commands::factors::list(),
            FactorsAction::Show { category } => commands::factors::show(&category),
            FactorsAction::Validate { file } => commands::factors::validate(&file),
            FactorsAction::Convert {
                xlsx_file,
                year,
                out,
            } => commands::factors::convert(&xlsx_file, &year, out),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
