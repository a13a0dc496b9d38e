use clap::{Parser as ClapParser, Subcommand};
use prosel::cli::{self, CheckOptions, CheckResult, CliError, LogLevel};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "prosel")]
#[command(about = "prosel - select atoms from protein structures with a small query language")]
#[command(version)]
struct Cli {
    /// Log level (falls back to PROSEL_LOG_LEVEL, then warn)
    #[arg(long, global = true, value_enum)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a selection and run it against a JSON atom list
    Check {
        /// The selection, e.g. 'atom CA and chain A'
        selection: String,

        /// JSON atom list (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate syntax, don't evaluate
        #[arg(long)]
        syntax_only: bool,
    },

    /// List the tokens of a selection
    Tokens {
        selection: String,
    },

    /// Show how a selection is grouped
    Tree {
        selection: String,
    },

    /// Show the selection language reference
    Docs,
}

fn main() {
    let cli = Cli::parse();

    let result = cli::resolve_log_level(cli.log_level)
        .map(cli::init_logging)
        .and_then(|()| run(cli.command));

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Check {
            selection,
            input,
            pretty,
            syntax_only,
        } => run_check(selection, input, pretty, syntax_only),
        Commands::Tokens { selection } => {
            print!("{}", cli::render_tokens(&selection)?);
            Ok(())
        }
        Commands::Tree { selection } => {
            print!("{}", cli::render_tree(&selection)?);
            Ok(())
        }
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
    }
}

fn run_check(
    selection: String,
    input: Option<String>,
    pretty: bool,
    syntax_only: bool,
) -> Result<(), CliError> {
    let input = match input {
        Some(s) => Some(s),
        None if !syntax_only && !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = CheckOptions {
        selection,
        input,
        pretty,
        syntax_only,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Success(output) => {
            let json = if options.pretty {
                serde_json::to_string_pretty(&output)?
            } else {
                serde_json::to_string(&output)?
            };
            println!("{}", json);
        }
    }
    Ok(())
}
