//! coomat command-line driver
//!
//! Loads matrices from text files, runs one operation and prints the
//! result.

use clap::{Args, Parser, Subcommand};
use coomat::{
    load, write_general_path, CooMatrix, EngineConfig, MatrixOperations, TextFormat, ToleranceMode,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "coomat - load, combine and compare coordinate-format sparse matrices")]
struct Cli {
    /// Log verbosity (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a matrix, or a single row or column of it
    Show {
        /// Matrix file
        file: PathBuf,

        /// Layout of the file (general or banded)
        #[arg(long, default_value = "general")]
        format: TextFormat,

        /// Print only the entries of this row
        #[arg(long, conflicts_with = "col")]
        row: Option<usize>,

        /// Print only the entries of this column
        #[arg(long)]
        col: Option<usize>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the sum of two matrices
    Add {
        #[command(flatten)]
        operands: Operands,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the product of two matrices
    Multiply {
        #[command(flatten)]
        operands: Operands,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the transpose of a matrix
    Transpose {
        /// Matrix file
        file: PathBuf,

        /// Layout of the file (general or banded)
        #[arg(long, default_value = "general")]
        format: TextFormat,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print whether two matrices are equal within a tolerance
    Equal {
        #[command(flatten)]
        operands: Operands,

        /// Largest per-entry difference still treated as equal
        #[arg(long, default_value_t = coomat::EPSILON)]
        epsilon: f64,

        /// How differences are tested against the tolerance
        #[arg(long, value_enum, default_value_t = ToleranceMode::Absolute)]
        tolerance: ToleranceMode,
    },
}

#[derive(Args)]
struct Operands {
    /// Left matrix file
    a: PathBuf,

    /// Right matrix file
    b: PathBuf,

    /// Layout of the left file
    #[arg(long, default_value = "general")]
    format_a: TextFormat,

    /// Layout of the right file
    #[arg(long, default_value = "general")]
    format_b: TextFormat,
}

impl Operands {
    fn load(&self) -> coomat::Result<(CooMatrix, CooMatrix)> {
        let a = load(&self.a, self.format_a)?;
        let b = load(&self.b, self.format_b)?;
        Ok((a, b))
    }
}

#[derive(Args)]
struct OutputArgs {
    /// Print the result as JSON
    #[arg(long, conflicts_with = "output")]
    json: bool,

    /// Write the result to a file in the general layout instead of printing
    #[arg(long)]
    output: Option<PathBuf>,
}

impl OutputArgs {
    fn emit(&self, matrix: &CooMatrix) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = &self.output {
            write_general_path(matrix, path)?;
            info!("Wrote {} entries to {}", matrix.len(), path.display());
        } else if self.json {
            println!("{}", serde_json::to_string_pretty(matrix)?);
        } else {
            print!("{matrix}");
        }
        Ok(())
    }
}

fn run(command: &Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Show {
            file,
            format,
            row,
            col,
            output,
        } => {
            let matrix = load(file, *format)?;
            let selected = match (row, col) {
                (Some(r), _) => CooMatrix::from_elements(matrix.size(), matrix.get_row(*r)),
                (None, Some(c)) => CooMatrix::from_elements(matrix.size(), matrix.get_col(*c)),
                (None, None) => matrix,
            };
            output.emit(&selected)?;
        }
        Commands::Add { operands, output } => {
            let (a, b) = operands.load()?;
            output.emit(&(&a + &b))?;
        }
        Commands::Multiply { operands, output } => {
            let (a, b) = operands.load()?;
            output.emit(&a.multiply(&b))?;
        }
        Commands::Transpose {
            file,
            format,
            output,
        } => {
            let matrix = load(file, *format)?;
            output.emit(&matrix.transpose())?;
        }
        Commands::Equal {
            operands,
            epsilon,
            tolerance,
        } => {
            let (a, b) = operands.load()?;
            let config = EngineConfig::default()
                .with_epsilon(*epsilon)
                .with_tolerance(*tolerance);
            println!("{}", coomat::approx_equal_with(&a, &b, &config));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("failed to install log subscriber");
    }

    let start_time = std::time::Instant::now();
    match run(&cli.command) {
        Ok(()) => {
            info!("Completed in {:.2?}", start_time.elapsed());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
