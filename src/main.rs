use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::filter::EnvFilter;
use xsdt::{Datatype, ListDatatype};

#[derive(Parser)]
#[command(name = "xsdt", version, about = "XML Schema date/time validator")]
struct Cli {
    /// Log rejected literals and comparison steps
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the canonical form of each literal
    Validate {
        /// Datatype name, e.g. dateTime or gMonthDay
        #[arg(short = 't', long = "type")]
        datatype: Datatype,

        /// Treat each literal as a whitespace-separated list
        #[arg(long)]
        list: bool,

        literals: Vec<String>,
    },
    /// Compare two literals of the same datatype
    Compare {
        #[arg(short = 't', long = "type")]
        datatype: Datatype,

        /// Exclusive (`<`, `>`) rather than inclusive semantics
        #[arg(long)]
        strict: bool,

        left: String,
        right: String,
    },
}

fn init_logging(verbose: bool) {
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

fn validate(datatype: Datatype, list: bool, literals: &[String]) -> ExitCode {
    let mut status = ExitCode::SUCCESS;
    for literal in literals {
        let result = if list {
            ListDatatype::new(datatype)
                .validate(literal)
                .map(|value| value.canonical().to_string())
        } else {
            datatype.validate(literal).map(|value| value.canonical())
        };
        match result {
            Ok(canonical) => println!("{canonical}"),
            Err(e) => {
                eprintln!("{e}");
                status = ExitCode::from(1);
            }
        }
    }
    status
}

fn compare(datatype: Datatype, strict: bool, left: &str, right: &str) -> ExitCode {
    let values = datatype
        .validate(left)
        .and_then(|l| datatype.validate(right).map(|r| (l, r)));
    match values {
        Ok((l, r)) => {
            println!("{l} {} {r}", l.compare(&r, strict));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(1)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Validate {
            datatype,
            list,
            literals,
        } => validate(datatype, list, &literals),
        Command::Compare {
            datatype,
            strict,
            left,
            right,
        } => compare(datatype, strict, &left, &right),
    }
}
