use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{CommandFactory, Parser}; // for argument parsing

use cryptogram_rust::errors::SolveError;
use cryptogram_rust::report;
use cryptogram_rust::solver::{SolveOptions, Solver};
use cryptogram_rust::wordlist::WordList;

/// Solve a substitution cipher (cryptogram) against a ranked word list
#[derive(Parser, Debug)]
#[command(name = "solve", version, about, long_about = None)]
struct Args {
    /// File holding the ciphertext to solve
    input: Option<PathBuf>,

    /// Word list to decode into (one word per line, most frequent first)
    #[arg(short, long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt"))]
    corpus: PathBuf,

    /// Print every step of the search to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Give up after this many seconds (0 = never)
    #[arg(short, long, default_value_t = 0)]
    timeout: u64,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let Some(input) = args.input else {
        // A missing input is not an error: show usage and stop.
        let _ = Args::command().print_help();
        return ExitCode::SUCCESS;
    };

    let ciphertext = match std::fs::read_to_string(&input) {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            eprintln!("{}", SolveError::io(&input, e));
            return ExitCode::FAILURE;
        }
    };

    // An unreadable word list is reported (as a warning) but not fatal.
    let word_list = WordList::load_or_empty(&args.corpus);

    let options = SolveOptions {
        time_limit: (args.timeout > 0).then(|| Duration::from_secs(args.timeout)),
        ..SolveOptions::default()
    };
    let solver = Solver::with_options(&word_list, options);

    let result = if args.verbose {
        let mut trace = |partial: &str, unknowns: usize| eprintln!("[{unknowns}] {partial}");
        solver.solve_with_observer(&ciphertext, &mut trace)
    } else {
        solver.solve(&ciphertext)
    };

    match result {
        Ok(solution) => {
            println!("{}", report::render(&ciphertext, solution.as_ref()));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
