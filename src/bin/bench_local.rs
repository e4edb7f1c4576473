//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing for a handful of cryptograms on *your* machine.
//! - Loads the word list once, then solves each case several times and reports the median.
//! - Each case is a plaintext sentence, enciphered here with a fixed key, so we can also
//!   check whether the solver recovered the original text.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print the decoded text:         `cargo run --bin bench_local --release -- -p`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - Use the same machine and `--release` for more comparable numbers.
//! - Sentences live in `get_cases()` below.
//! - One warm-up run per case is done (not included in timing).
//! - We report the *median* over repeats (more robust than mean for small _N_).

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;

use cryptogram_rust::report;
use cryptogram_rust::solver::{Solution, Solver};
use cryptogram_rust::wordlist::WordList;

/// Simple local benchmark runner: load word list once, time several cryptograms.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the word list file (one word per line, most frequent first)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    wordlist: String,

    /// Number of repeats per case (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Print the decoded text of each case
    #[arg(short = 'p', long = "print")]
    print: bool,
}

/// Substitution key used to encipher every case: plain `a` becomes `key[0]`, and so on.
const KEY: &str = "QWERTYUIOPASDFGHJKLZXCVBNM";

/// Edit/add new sentences here. They should only use words from the word list
/// (or enough of them that the unknown-word budget can cover the rest).
fn get_cases() -> Vec<&'static str> {
    vec![
        "the cat sat on the mat",
        "we have to go back to the house before it gets dark",
        "she said that he would never know what they had done",
        "don't let the people you love think that you don't care",
        "time and again the best way to find out is to ask",
    ]
}

/// Encipher `plain` with `KEY`; non-letters pass through.
fn encipher(plain: &str) -> String {
    plain
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() {
                KEY.as_bytes()[(c as u8 - b'a') as usize] as char
            } else {
                c
            }
        })
        .collect()
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(|a, b| a.total_cmp(b));
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

const MAX_CASE_LEN: usize = 40;

fn main() -> std::io::Result<()> {
    /// One row in the benchmark summary: (case, median seconds, solved budget, search nodes, recovered?).
    type SummaryRow = (String, f64, Option<usize>, usize, bool);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    // Load the word list once. This I/O is *not* included in per-case timing.
    eprintln!("Loading word list from: {}", cli.wordlist);
    let t_load = Instant::now();
    let wl = WordList::load_from_path(&cli.wordlist)?;
    let load_secs = t_load.elapsed().as_secs_f64();
    eprintln!("Loaded {} words ({} patterns) in {:.3}s", wl.len(), wl.num_buckets(), load_secs);

    let solver = Solver::new(&wl);
    let cases = get_cases();
    let mut summary: Vec<SummaryRow> = Vec::with_capacity(cases.len());

    for (idx, plain) in cases.iter().enumerate() {
        let ciphertext = encipher(plain);
        eprintln!("\n[{:02}] {}", idx + 1, ciphertext);

        // One *warm-up* execution per case; timing ignored.
        let _warmup = solver.solve(&ciphertext)?;

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last: Option<Solution> = None;

        for rep in 0..cli.num_repeats {
            let t_solve = Instant::now();
            let solution = solver.solve(black_box(&ciphertext))?;
            let solve_secs = t_solve.elapsed().as_secs_f64();

            times.push(solve_secs);
            eprintln!(
                "  run {:>2}/{:>2}: {:.3}s ({} nodes)",
                rep + 1,
                cli.num_repeats,
                solve_secs,
                solution.as_ref().map_or(0, |s| s.nodes)
            );
            last = solution;
        }

        let med = median(times);

        let recovered = last
            .as_ref()
            .is_some_and(|s| report::plaintext(&ciphertext, &s.translation) == *plain);

        if cli.print {
            println!("{}\n", report::render(&ciphertext, last.as_ref()));
        }

        eprintln!(
            "  → median {:.3}s over {} run(s); {}",
            med,
            cli.num_repeats,
            if recovered { "plaintext recovered" } else { "plaintext NOT recovered" }
        );

        summary.push((
            plain.to_string(),
            med,
            last.as_ref().map(|s| s.budget),
            last.as_ref().map_or(0, |s| s.nodes),
            recovered,
        ));
    }

    // Compact summary at the end for a quick scan across all cases.
    eprintln!("\n==== Summary ====");
    eprintln!(
        "{:<MAX_CASE_LEN$} | {:>10} | {:>6} | {:>10} | {:>9}",
        "case", "median (s)", "budget", "nodes", "recovered"
    );
    eprintln!(
        "{:-<MAX_CASE_LEN$}-+-{:-<10}-+-{:-<6}-+-{:-<10}-+-{:-<9}",
        "", "", "", "", ""
    );
    for (case, med, budget, nodes, recovered) in &summary {
        // Trim very long sentences for readability in the summary.
        let display = if case.len() > MAX_CASE_LEN {
            // "- 1" for the "…"
            format!("{}…", case.chars().take(MAX_CASE_LEN - 1).collect::<String>())
        } else {
            case.clone()
        };
        let budget_str = budget.map(|b| b.to_string()).unwrap_or_else(|| "—".into());
        eprintln!(
            "{display:<MAX_CASE_LEN$} | {med:>10.3} | {budget_str:>6} | {nodes:>10} | {:>9}",
            if *recovered { "yes" } else { "no" }
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encipher() {
        assert_eq!(encipher("abc, z'"), "QWE, M'");
    }

    #[test]
    fn test_median() {
        assert_eq!(median(vec![]), 0.0);
        assert_eq!(median(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(vec![4.0, 1.0, 2.0, 3.0]), 2.5);
    }
}
