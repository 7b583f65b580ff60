use clap::Parser;
use eqt_compute::transform::{Engine, EngineConfigBuilder, Notation};
use eqt_rs::{batch::{process_json, process_json_results}, repl, BatchError};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs, io::{self, IsTerminal, Read}, path::PathBuf, process::ExitCode};
use tracing_subscriber::EnvFilter;

/// Transforms algebraic equations step by step.
///
/// Reads a JSON document of equation records from a file or stdin and prints a markdown report.
/// Without input, starts an interactive prompt.
#[derive(Debug, Parser)]
#[command(name = "eqt", version, about, long_about = None)]
struct Cli {
    /// JSON file of equation records. Reads from stdin if omitted and stdin is not a terminal.
    input: Option<PathBuf>,

    /// Render step formulas as LaTeX.
    #[arg(long)]
    latex: bool,

    /// Largest exponent accepted in an equation.
    #[arg(long, default_value_t = 64)]
    max_exponent: u32,

    /// Print the results as JSON instead of a markdown report.
    #[arg(long)]
    json: bool,

    /// Start the interactive prompt even if stdin is not a terminal.
    #[arg(long)]
    repl: bool,
}

/// Processes a batch document, returning the text to print.
fn run_batch(engine: &Engine, input: &str, json: bool) -> Result<String, BatchError> {
    if json {
        let results = process_json_results(engine, input)?;
        Ok(serde_json::to_string_pretty(&results)?)
    } else {
        Ok(process_json(engine, input))
    }
}

/// Reads the batch document from the given file, or stdin.
fn read_input(path: Option<&PathBuf>) -> Result<String, BatchError> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        },
    }
}

/// Runs the interactive prompt until end of input.
fn run_repl(engine: &Engine) {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("{}", err);
            return;
        },
    };

    fn process_line(rl: &mut DefaultEditor, engine: &Engine) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        match repl::execute(engine, &input) {
            Ok(result) => {
                for step in &result.steps {
                    println!("{}: {}", step.label, step.formula);
                }
                println!("=> {}", result.final_result);
            },
            Err(err) => err.report_to_stderr("input", &input)?,
        }
        Ok(())
    }

    loop {
        if let Err(err) = process_line(&mut rl, engine) {
            match err {
                ReadlineError::Eof | ReadlineError::Interrupted => (),
                _ => eprintln!("{}", err),
            }
            break;
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let notation = if cli.latex { Notation::Latex } else { Notation::Plain };
    let engine = Engine::new(
        EngineConfigBuilder::new()
            .notation(notation)
            .max_exponent(cli.max_exponent)
            .build(),
    );

    if cli.repl || (cli.input.is_none() && io::stdin().is_terminal()) {
        run_repl(&engine);
        return ExitCode::SUCCESS;
    }

    match read_input(cli.input.as_ref()).and_then(|input| run_batch(&engine, &input, cli.json)) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        },
    }
}
